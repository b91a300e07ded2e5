//! backup command - Trigger a backup on the InvenTree host

use anyhow::{anyhow, Context as _, Result};

use crate::backup::BackupRunner;
use crate::cli::Context;
use crate::ui::output;

/// Trigger the remote backup task over SSH and wait for it.
pub fn backup(ctx: &Context) -> Result<()> {
    let verbosity = ctx.verbosity();
    let config = ctx.load_config()?;

    let backup_config = config.backup().ok_or_else(|| {
        anyhow!(
            "No [backup] section configured. Set backup.host, backup.user \
             and backup.compose_path first."
        )
    })?;

    let runner = BackupRunner::from_config(backup_config).context("Backup configuration incomplete")?;

    output::print(
        format!("Triggering backup on {}...", runner.destination()),
        verbosity,
    );
    output::debug(format!("remote command: {}", runner.remote_command()), verbosity);

    let result = runner.run().context("Backup failed")?;

    output::debug(result.stdout, verbosity);
    output::print("Backup successful.", verbosity);
    Ok(())
}
