use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn linemark(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_linemark"))
        .current_dir(dir)
        .env_remove("LINEMARK_CONFIG")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

const GIT_DIFF: &str = r#"diff --git a/src/lib.rs b/src/lib.rs
index 1234567..abcdefg 100644
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -1 +0,0 @@
-// header
@@ -4,2 +3,2 @@
-let a = 1;
-let b = 2;
+let a = 10;
+let b = 20;
@@ -9,0 +9,1 @@
+let c = 3;
"#;

#[test]
fn test_classify_unified_flat_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let out = linemark(
        dir.path(),
        &["classify", "--unified", "--flat", "--format", "text"],
        GIT_DIFF,
    );
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "0\n3\n4\n9\n");
}

#[test]
fn test_classify_prefix_encoded_file_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let diff = dir.path().join("change.diff");
    std::fs::write(&diff, "@@ -1,3 +1,3 @@\n  a\n- b\n+ B\n  c\n").unwrap();

    let out = linemark(
        dir.path(),
        &["classify", "--format", "json", diff.to_str().unwrap()],
        "",
    );
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["modified_lines"], serde_json::json!([2]));
    assert_eq!(value["added_lines"], serde_json::json!([]));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = linemark(
        dir.path(),
        &["--config", "does-not-exist.toml", "classify"],
        "",
    );
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("Error:"));
    assert!(stderr.contains("does-not-exist.toml"));
}

#[test]
fn test_missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = linemark(dir.path(), &["classify", "nope.diff"], "");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("nope.diff"));
}
