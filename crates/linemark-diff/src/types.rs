//! Type definitions for diff classification

use serde::{Deserialize, Serialize};

/// Classified line numbers for the new version of a file.
///
/// All values are 1-indexed. `deleted_at_lines` holds anchors: the line just
/// after the last surviving line before a removed block, which may not exist
/// in the new content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDiff {
    pub added_lines: Vec<u32>,
    pub modified_lines: Vec<u32>,
    pub deleted_at_lines: Vec<u32>,
}

/// Decoration kind a renderer draws for one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineChange {
    Added,
    Modified,
    /// Content was removed just above this line
    DeletedAbove,
}

impl LineChange {
    pub fn as_str(&self) -> &str {
        match self {
            LineChange::Added => "added",
            LineChange::Modified => "modified",
            LineChange::DeletedAbove => "deleted",
        }
    }
}

impl ParsedDiff {
    pub fn is_empty(&self) -> bool {
        self.added_lines.is_empty()
            && self.modified_lines.is_empty()
            && self.deleted_at_lines.is_empty()
    }

    /// Total entries across the three sequences, duplicates included
    pub fn len(&self) -> usize {
        self.added_lines.len() + self.modified_lines.len() + self.deleted_at_lines.len()
    }

    /// Decoration for `line`, preferring modified over added over a deletion anchor.
    pub fn change_at(&self, line: u32) -> Option<LineChange> {
        if self.modified_lines.contains(&line) {
            Some(LineChange::Modified)
        } else if self.added_lines.contains(&line) {
            Some(LineChange::Added)
        } else if self.deleted_at_lines.contains(&line) {
            Some(LineChange::DeletedAbove)
        } else {
            None
        }
    }
}
