//! Single-pass classification of prefix-encoded diff text

use super::types::ParsedDiff;
use regex::Regex;
use std::sync::OnceLock;

/// Matches `@@ -<old>[,<count>] +<new>` and captures the new-file start.
fn hunk_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^@@ -\d+(?:,\d+)? \+(\d+)").unwrap())
}

/// Kind of a single input line, decided by its prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DiffLine {
    /// `@@` line; carries the new-file start when the header is well formed
    HunkHeader(Option<i64>),
    Addition,
    Deletion,
    Context,
    Inert,
}

impl DiffLine {
    fn parse(line: &str) -> Self {
        if line.starts_with("@@") {
            DiffLine::HunkHeader(parse_new_start(line))
        } else if line.starts_with("+ ") {
            DiffLine::Addition
        } else if line.starts_with("- ") {
            DiffLine::Deletion
        } else if line.starts_with("  ") {
            DiffLine::Context
        } else {
            DiffLine::Inert
        }
    }
}

/// New-file start of a hunk header. The capture is all digits, so the only
/// parse failure is overflow, which saturates.
fn parse_new_start(line: &str) -> Option<i64> {
    hunk_header_re()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().parse().unwrap_or(i64::MAX))
}

/// Reported form of a position. Positions never go below 0: the cursor
/// starts at -1 at the lowest (`+0` header) and is incremented before use.
fn line_number(position: i64) -> u32 {
    u32::try_from(position.max(0)).unwrap_or(u32::MAX)
}

/// Accumulator threaded through the pass
#[derive(Debug, Default)]
struct ClassifierState {
    /// Last numbered line in the new file; 0 before any line, -1 after a `+0` header
    cursor: i64,
    /// Unpaired deletions in the current run
    pending: u32,
    /// Anchor of the current deletion run
    anchor: i64,
    parsed: ParsedDiff,
}

impl ClassifierState {
    fn step(mut self, line: &str) -> Self {
        match DiffLine::parse(line) {
            DiffLine::HunkHeader(new_start) => {
                self.flush();
                if let Some(start) = new_start {
                    self.cursor = start - 1;
                }
            }
            DiffLine::Addition => {
                self.cursor = self.cursor.saturating_add(1);
                if self.pending > 0 {
                    self.parsed.modified_lines.push(line_number(self.cursor));
                    self.pending -= 1;
                } else {
                    self.parsed.added_lines.push(line_number(self.cursor));
                }
            }
            DiffLine::Deletion => {
                if self.pending == 0 {
                    self.anchor = self.cursor.saturating_add(1);
                }
                self.pending = self.pending.saturating_add(1);
            }
            DiffLine::Context => {
                self.flush();
                self.cursor = self.cursor.saturating_add(1);
            }
            DiffLine::Inert => {}
        }
        self
    }

    /// Close the current deletion run as a pure deletion, if one is open.
    fn flush(&mut self) {
        if self.pending > 0 {
            self.parsed.deleted_at_lines.push(line_number(self.anchor));
            self.pending = 0;
        }
    }

    fn finish(mut self) -> ParsedDiff {
        self.flush();
        self.parsed
    }
}

/// Classify diff text into added, modified and deletion-anchor line numbers.
///
/// Never fails. Unrecognised lines are skipped and malformed `@@` headers
/// leave the position unchanged, so headerless input (an untracked file whose
/// every line starts with `"+ "`) numbers from line 1.
///
/// Each addition that follows a deletion run pairs with one pending deletion
/// in encounter order and is reported as modified. Deletions left unpaired
/// when the run ends produce a single anchor for the whole run.
pub fn classify(diff_text: &str) -> ParsedDiff {
    let parsed = diff_text
        .split('\n')
        .fold(ClassifierState::default(), ClassifierState::step)
        .finish();

    tracing::trace!(
        added = parsed.added_lines.len(),
        modified = parsed.modified_lines.len(),
        deleted = parsed.deleted_at_lines.len(),
        "classified diff"
    );

    parsed
}
