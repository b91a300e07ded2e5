//! backup
//!
//! Remote backup trigger for the InvenTree server.
//!
//! # Design
//!
//! The backup itself runs on the InvenTree host: this module only opens
//! an SSH session (via the system `ssh` binary) and invokes the compose
//! stack's backup task. No retry logic; a non-zero exit status surfaces
//! the remote stderr.

use std::process::Command;

use thiserror::Error;

use crate::core::config::BackupConfig;

/// Errors from the backup trigger.
#[derive(Debug, Error)]
pub enum BackupError {
    /// A required `[backup]` config field is missing.
    #[error("backup is not configured: missing backup.{0}")]
    MissingField(&'static str),

    /// The ssh process could not be started.
    #[error("failed to run ssh: {0}")]
    Spawn(#[from] std::io::Error),

    /// The remote command exited non-zero.
    #[error("backup failed ({status}): {stderr}")]
    CommandFailed {
        /// Exit status description.
        status: String,
        /// Captured remote stderr.
        stderr: String,
    },
}

/// Captured output of a successful backup run.
#[derive(Debug)]
pub struct BackupOutput {
    /// Remote stdout.
    pub stdout: String,
}

/// Runs the remote backup task over SSH.
#[derive(Debug, Clone)]
pub struct BackupRunner {
    host: String,
    user: String,
    key_path: Option<String>,
    compose_path: String,
}

impl BackupRunner {
    /// Build a runner from the `[backup]` config section.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` for each required field that is absent
    /// (`host`, `user`, `compose_path`; the key path is optional and
    /// falls back to the ssh agent/defaults).
    pub fn from_config(config: &BackupConfig) -> Result<Self, BackupError> {
        let host = config
            .host
            .clone()
            .ok_or(BackupError::MissingField("host"))?;
        let user = config
            .user
            .clone()
            .ok_or(BackupError::MissingField("user"))?;
        let compose_path = config
            .compose_path
            .clone()
            .ok_or(BackupError::MissingField("compose_path"))?;

        Ok(Self {
            host,
            user,
            key_path: config.key_path.clone(),
            compose_path,
        })
    }

    /// The `user@host` SSH destination.
    pub fn destination(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }

    /// The command executed on the remote host.
    pub fn remote_command(&self) -> String {
        format!(
            "cd {} && docker compose -f docker-compose.yml run inventree-server invoke backup",
            self.compose_path
        )
    }

    /// Trigger the backup and wait for it to finish.
    ///
    /// # Errors
    ///
    /// `Spawn` if ssh cannot be started, `CommandFailed` with the remote
    /// stderr if the backup task exits non-zero.
    pub fn run(&self) -> Result<BackupOutput, BackupError> {
        let mut command = Command::new("ssh");
        if let Some(key) = &self.key_path {
            command.arg("-i").arg(key);
        }
        command.arg(self.destination()).arg(self.remote_command());

        let output = command.output()?;

        if output.status.success() {
            Ok(BackupOutput {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            })
        } else {
            Err(BackupError::CommandFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}
