//! core::allocate
//!
//! Gap-filling name allocator: choose `count` new progressive numbers
//! for a type, preferring numeric gaps left by deleted or renamed
//! locations before extending past the highest number in use.
//!
//! # Design
//!
//! Pure function. The candidate universe spans `1..=highest + count`, so
//! the gap set always holds at least `count` free numbers; the sequential
//! extension in step two only runs for degenerate inputs. Chosen numbers
//! are formatted `prefix` + 4-digit zero-padded integer.
//!
//! # Example
//!
//! ```
//! use locsmith::core::allocate::allocate;
//!
//! let matching = vec!["a_0001".to_string(), "a_0003".to_string()];
//! let names = allocate(&matching, 2, 3, "a_");
//! assert_eq!(names, vec!["a_0002", "a_0004"]);
//! ```

use std::collections::BTreeSet;

use crate::core::scan::parse_suffix;

/// Format a progressive location name: `prefix` + 4-digit padded number.
///
/// Numbers above 9999 simply widen; padding is a floor, not a ceiling.
pub fn format_name(prefix: &str, number: u32) -> String {
    format!("{}{:04}", prefix, number)
}

/// Choose `count` new unused names for `prefix`.
///
/// `matching` holds the names currently in use for the type (as returned
/// by [`crate::core::scan::scan`]) and `highest` their maximum suffix.
/// Gaps are filled in ascending order first; remaining slots extend from
/// `highest + 1` upward. Generated numbers are always >= 1.
pub fn allocate(matching: &[String], count: usize, highest: u32, prefix: &str) -> Vec<String> {
    if count == 0 {
        return Vec::new();
    }

    let used: BTreeSet<u32> = matching
        .iter()
        .filter_map(|name| parse_suffix(prefix, name))
        .collect();

    // Gaps within the candidate universe 1..=highest+count, ascending.
    let universe_end = highest.saturating_add(count as u32);
    let mut chosen: Vec<u32> = (1..=universe_end)
        .filter(|n| !used.contains(n))
        .take(count)
        .collect();

    // Degenerate universe only: keep extending past the highest number
    // until the request is satisfied, skipping anything already taken.
    let mut next = highest.saturating_add(1);
    while chosen.len() < count {
        if !used.contains(&next) && !chosen.contains(&next) {
            chosen.push(next);
        }
        next = next.saturating_add(1);
    }

    chosen.into_iter().map(|n| format_name(prefix, n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn fills_gap_before_extending() {
        let matching = names(&["a_0001", "a_0003"]);
        assert_eq!(allocate(&matching, 2, 3, "a_"), vec!["a_0002", "a_0004"]);
    }

    #[test]
    fn extends_when_no_gaps() {
        let matching = names(&["a_0001", "a_0002"]);
        assert_eq!(
            allocate(&matching, 3, 2, "a_"),
            vec!["a_0003", "a_0004", "a_0005"]
        );
    }

    #[test]
    fn empty_input_starts_at_one() {
        assert_eq!(
            allocate(&[], 3, 0, "s_"),
            vec!["s_0001", "s_0002", "s_0003"]
        );
    }

    #[test]
    fn zero_count_is_empty() {
        let matching = names(&["a_0001"]);
        assert!(allocate(&matching, 0, 1, "a_").is_empty());
    }

    #[test]
    fn multiple_gaps_filled_ascending() {
        let matching = names(&["g_0002", "g_0005", "g_0007"]);
        assert_eq!(
            allocate(&matching, 5, 7, "g_"),
            vec!["g_0001", "g_0003", "g_0004", "g_0006", "g_0008"]
        );
    }

    #[test]
    fn result_is_disjoint_from_matching() {
        let matching = names(&["b_0001", "b_0002", "b_0004", "b_0009"]);
        let new_names = allocate(&matching, 6, 9, "b_");

        assert_eq!(new_names.len(), 6);
        for name in &new_names {
            assert!(!matching.contains(name), "collision on {}", name);
        }
    }

    #[test]
    fn unpadded_existing_names_still_occupy_their_numbers() {
        // a_2 occupies number 2 even though the generated form is a_0002.
        let matching = names(&["a_1", "a_2"]);
        assert_eq!(allocate(&matching, 1, 2, "a_"), vec!["a_0003"]);
    }

    #[test]
    fn zero_suffix_never_reissued() {
        // a_0 is a valid existing suffix but the universe starts at 1.
        let matching = names(&["a_0"]);
        assert_eq!(allocate(&matching, 2, 0, "a_"), vec!["a_0001", "a_0002"]);
    }

    #[test]
    fn padding_widens_past_9999() {
        let matching = names(&["a_9999"]);
        assert_eq!(allocate(&matching, 1, 9999, "a_"), vec!["a_10000"]);
    }

    #[test]
    fn format_name_pads_to_four_digits() {
        assert_eq!(format_name("a_", 7), "a_0007");
        assert_eq!(format_name("a_", 123), "a_0123");
        assert_eq!(format_name("a_", 12345), "a_12345");
    }
}
