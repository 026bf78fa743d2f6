//! Conversion of VCS output into the two-character prefix convention

/// Convert standard unified diff text (single-character prefixes, as printed
/// by `git diff`) into prefix-convention text the classifier reads.
///
/// File headers are dropped and `@@` lines pass through unchanged. Outside a
/// hunk, `---`/`+++` are file headers; inside one they are content.
pub fn from_unified(raw: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut in_hunk = false;

    for line in raw.lines() {
        if line.starts_with("@@") {
            in_hunk = true;
            out.push(line.to_string());
            continue;
        }

        if line.starts_with("diff --git") {
            in_hunk = false;
            continue;
        }

        if !in_hunk {
            // index, mode, rename, ---/+++ and anything else ahead of a hunk
            continue;
        }

        if let Some(rest) = line.strip_prefix('+') {
            out.push(format!("+ {}", rest));
        } else if let Some(rest) = line.strip_prefix('-') {
            out.push(format!("- {}", rest));
        } else if let Some(rest) = line.strip_prefix(' ') {
            out.push(format!("  {}", rest));
        } else if line.is_empty() {
            // Empty context line whose leading space was stripped
            out.push("  ".to_string());
        }
        // Skip \ No newline at end of file
    }

    out.join("\n")
}

/// Diff text for a file with no previous version: every line is an addition
/// and there is no hunk header.
pub fn from_untracked(content: &str) -> String {
    content
        .lines()
        .map(|line| format!("+ {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unified_strips_file_headers() {
        let raw = r#"diff --git a/src/main.rs b/src/main.rs
index abc123..def456 100644
--- a/src/main.rs
+++ b/src/main.rs
@@ -1,3 +1,4 @@ fn main()
 fn main() {
+    println!("hello");
     let x = 1;
 }
"#;
        let converted = from_unified(raw);
        assert_eq!(
            converted,
            "@@ -1,3 +1,4 @@ fn main()\n  fn main() {\n+     println!(\"hello\");\n      let x = 1;\n  }"
        );
    }

    #[test]
    fn test_from_unified_marker_lines_inside_hunk_are_content() {
        let raw = "--- a/f\n+++ b/f\n@@ -1,2 +1,2 @@\n--- old rule\n+++ new rule\n";
        assert_eq!(
            from_unified(raw),
            "@@ -1,2 +1,2 @@\n- -- old rule\n+ ++ new rule"
        );
    }

    #[test]
    fn test_from_unified_drops_no_newline_marker() {
        let raw = "@@ -1 +1 @@\n-a\n\\ No newline at end of file\n+b\n";
        assert_eq!(from_unified(raw), "@@ -1 +1 @@\n- a\n+ b");
    }

    #[test]
    fn test_from_unified_blank_line_in_hunk_is_context() {
        let raw = "@@ -1,3 +1,3 @@\n a\n\n-c\n+d\n";
        assert_eq!(from_unified(raw), "@@ -1,3 +1,3 @@\n  a\n  \n- c\n+ d");
    }

    #[test]
    fn test_from_unified_resets_between_files() {
        let raw = "diff --git a/x b/x\n@@ -1 +1 @@\n-a\n+b\ndiff --git a/y b/y\n--- a/y\n+++ b/y\n@@ -3 +3 @@\n-c\n";
        assert_eq!(
            from_unified(raw),
            "@@ -1 +1 @@\n- a\n+ b\n@@ -3 +3 @@\n- c"
        );
    }

    #[test]
    fn test_from_unified_empty() {
        assert_eq!(from_unified(""), "");
        assert_eq!(from_unified("Binary files a/x and b/x differ\n"), "");
    }

    #[test]
    fn test_from_untracked() {
        assert_eq!(from_untracked("a\nb\n"), "+ a\n+ b");
        assert_eq!(from_untracked(""), "");
        assert_eq!(from_untracked("\n"), "+ ");
    }
}
