//! Flattening of a classification into one membership set

use super::types::ParsedDiff;
use std::collections::HashSet;

/// Every line number that needs some decoration, for O(1) lookups.
pub fn all_changed(parsed: &ParsedDiff) -> HashSet<u32> {
    parsed
        .added_lines
        .iter()
        .chain(&parsed.modified_lines)
        .chain(&parsed.deleted_at_lines)
        .copied()
        .collect()
}
