//! Rendering of classifications for the terminal

use linemark_core::OutputFormat;
use linemark_diff::{all_changed, ParsedDiff};

fn join(lines: &[u32]) -> String {
    lines
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn sorted_changed(parsed: &ParsedDiff) -> Vec<u32> {
    let mut lines: Vec<u32> = all_changed(parsed).into_iter().collect();
    lines.sort_unstable();
    lines
}

/// Render `parsed` in `format`; `flat` prints the merged, sorted line set.
pub fn render(parsed: &ParsedDiff, format: OutputFormat, flat: bool) -> serde_json::Result<String> {
    let rendered = match (format, flat) {
        (OutputFormat::Text, false) => format!(
            "added: {}\nmodified: {}\ndeleted: {}\n",
            join(&parsed.added_lines),
            join(&parsed.modified_lines),
            join(&parsed.deleted_at_lines)
        ),
        (OutputFormat::Text, true) => sorted_changed(parsed)
            .iter()
            .map(|n| format!("{}\n", n))
            .collect(),
        (OutputFormat::Json, false) => format!("{}\n", serde_json::to_string_pretty(parsed)?),
        (OutputFormat::Json, true) => format!("{}\n", serde_json::to_string(&sorted_changed(parsed))?),
    };
    Ok(rendered)
}
