//! Gutter change classification for prefix-encoded diffs
//!
//! The classifier reads diff text whose lines carry two-character prefixes
//! (`"+ "`, `"- "`, `"  "`) plus `@@` hunk headers and reports, for the new
//! version of a file, which lines were added, which were modified, and where
//! pure deletions sit. The adapter turns `git diff` output and untracked file
//! content into that convention, and `git` drives the external binary.

mod adapter;
mod aggregate;
mod classifier;
mod git;
mod types;

pub use adapter::{from_unified, from_untracked};
pub use aggregate::all_changed;
pub use classifier::classify;
pub use git::{GitError, GitResult, GitSource};
pub use types::{LineChange, ParsedDiff};
