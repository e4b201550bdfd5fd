//! Integration tests for the sgpaconv binary

use pretty_assertions::assert_eq;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::{tempdir, TempDir};

fn run_sgpaconv(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sgpaconv"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute sgpaconv")
}

fn run_sgpaconv_with_stdin(args: &[&str], stdin_data: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sgpaconv"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn sgpaconv");

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(stdin_data.as_bytes())
            .expect("Failed to write to stdin");
    }

    child.wait_with_output().expect("Failed to wait on child")
}

fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_converts_file_and_logs_output_path() {
    let dir = tempdir().unwrap();
    let input = create_test_file(
        &dir,
        "records.json",
        r#"[{"rollNo":"A1","SGPA":{"sem1":8.5},"instituteName":"X"},{"rollNo":"A3","SGPA":{},"instituteName":"Y"}]"#,
    );
    let output = dir.path().join("records.csv");

    let result = run_sgpaconv(&[path_str(&input), "-o", path_str(&output)]);

    assert!(result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("CSV file written to"), "stderr: {}", stderr);

    let csv = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with(r#""A3""#));
    assert!(lines[2].starts_with(r#""A1","8.5""#));
}

#[test]
fn test_missing_input_reports_error_without_panicking() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.csv");

    let result = run_sgpaconv(&["does-not-exist.json", "-o", path_str(&output)]);

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Cannot read input file"), "stderr: {}", stderr);
    assert!(!stderr.contains("panicked"));
    assert!(!output.exists());
}

#[test]
fn test_invalid_json_reports_location() {
    let dir = tempdir().unwrap();
    let input = create_test_file(&dir, "bad.json", "[\n  {\"rollNo\": }\n]");
    let output = dir.path().join("out.csv");

    let result = run_sgpaconv(&[path_str(&input), "-o", path_str(&output)]);

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("JSON parse error at line 2"), "stderr: {}", stderr);
}

#[test]
fn test_stdin_input_with_stats() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.csv");

    let result = run_sgpaconv_with_stdin(
        &["--stdin", "-o", path_str(&output), "--stats"],
        r#"[{"rollNo": "B2"}, {"rollNo": "B1"}]"#,
    );

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Converted 2 records into 10 columns"), "stdout: {}", stdout);
    assert_eq!(fs::read_to_string(&output).unwrap().lines().count(), 3);
}

#[test]
fn test_stats_as_json() {
    let dir = tempdir().unwrap();
    let input = create_test_file(&dir, "records.json", r#"[{"rollNo": "A1", "name": "Asha"}]"#);
    let output = dir.path().join("out.csv");

    let result = run_sgpaconv(&[
        path_str(&input),
        "-o",
        path_str(&output),
        "--stats",
        "--stats-format",
        "json",
    ]);

    assert!(result.status.success());
    let stats: serde_json::Value = serde_json::from_slice(&result.stdout).unwrap();
    assert_eq!(stats["record_count"], 1);
    assert_eq!(stats["column_count"], 11);
    assert_eq!(
        stats["output_size_bytes"],
        fs::metadata(&output).unwrap().len()
    );
}

#[test]
fn test_quiet_suppresses_success_log() {
    let dir = tempdir().unwrap();
    let input = create_test_file(&dir, "records.json", "[]");
    let output = dir.path().join("out.csv");

    let result = run_sgpaconv(&[path_str(&input), "-o", path_str(&output), "--quiet"]);

    assert!(result.status.success());
    assert!(result.stderr.is_empty());
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_rfc4180_and_union_options() {
    let dir = tempdir().unwrap();
    let input = create_test_file(
        &dir,
        "records.json",
        r#"[{"rollNo": "A2"}, {"rollNo": "A1", "name": "Rao, K"}]"#,
    );
    let output = dir.path().join("out.csv");

    let result = run_sgpaconv(&[
        path_str(&input),
        "-o",
        path_str(&output),
        "--encoding",
        "rfc4180",
        "--header-strategy",
        "union",
        "--order",
        "ascending",
    ]);

    assert!(result.status.success());
    let csv = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert!(lines[0].starts_with("rollNo,name,SGPA_sem1"));
    assert!(lines[1].starts_with("A1,\"Rao, K\","));
    assert!(lines[2].starts_with("A2,,"));
}

#[test]
fn test_invalid_memory_limit_is_usage_error() {
    let result = run_sgpaconv(&["in.json", "-o", "out.csv", "--memory-limit", "huge"]);

    assert_eq!(result.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Invalid memory limit"), "stderr: {}", stderr);
}
