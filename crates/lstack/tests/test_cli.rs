//! Command-line tests for the `lstack` binary
//!
//! Each test runs the built binary against temporary scripts and configs
//! and checks stdout, stderr and the exit status.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::{TempDir, tempdir};

fn lstack() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lstack"));
    // Keep stderr limited to command errors unless a test asks for logs
    cmd.env("RUST_LOG", "off");
    cmd
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn run_script(script: &Path, args: &[&str]) -> Output {
    lstack().arg(script).args(args).output().unwrap()
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[test]
fn test_clean_script_exits_zero() {
    let dir = tempdir().unwrap();
    let script = write_file(&dir, "ok.lst", "push 1\npush 2\npop\nshow\n");

    let output = run_script(&script, &[]);
    assert!(output.status.success());
    assert_eq!(text(&output.stdout), "2\nLink(head=\"1\", tail=None)\n");
    assert_eq!(text(&output.stderr), "");
}

#[test]
fn test_failing_script_stops_and_exits_one() {
    let dir = tempdir().unwrap();
    let script = write_file(&dir, "fail.lst", "push 1\npop\npop\nempty\n");

    let output = run_script(&script, &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(text(&output.stdout), "1\n");
    assert_eq!(text(&output.stderr), "Error: line 3: stack is empty\n");
}

#[test]
fn test_keep_going_flag_reports_failures() {
    let dir = tempdir().unwrap();
    let script = write_file(&dir, "fail.lst", "push 1\npop\npop\nempty\n");

    let output = run_script(&script, &["--keep-going"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(text(&output.stdout), "1\ntrue\n");
    assert_eq!(
        text(&output.stderr),
        "error: line 3: stack is empty\n1 command(s) failed\n"
    );
}

#[test]
fn test_flags_override_config_file() {
    let dir = tempdir().unwrap();
    let config = write_file(&dir, "lstack.toml", "echo_render = false\nkeep_going = true\n");
    let script = write_file(&dir, "s.lst", "top\npush a\n");
    let config_arg = config.to_str().unwrap();

    // keep_going comes from the file, echo_render from the flag
    let output = run_script(&script, &["--config", config_arg, "--echo-render"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(text(&output.stdout), "Link(head=\"a\", tail=None)\n");
    assert_eq!(
        text(&output.stderr),
        "error: line 1: stack is empty\n1 command(s) failed\n"
    );
}

#[test]
fn test_bad_config_is_reported() {
    let dir = tempdir().unwrap();
    let config = write_file(&dir, "bad.toml", "capacity = 3\n");
    let script = write_file(&dir, "s.lst", "push a\n");

    let output = run_script(&script, &["--config", config.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(text(&output.stdout), "");
    assert!(text(&output.stderr).starts_with("Error: Failed to parse config"));
}

#[test]
fn test_reads_piped_stdin() {
    let mut child = lstack()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"push x\ntop\nempty\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    // Piped input is not a terminal, so no prompt is printed
    assert!(output.status.success());
    assert_eq!(text(&output.stdout), "x\nfalse\n");
    assert_eq!(text(&output.stderr), "");
}

#[test]
fn test_missing_script_names_path() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.lst");

    let output = run_script(&missing, &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = text(&output.stderr);
    assert!(stderr.starts_with("Error: I/O error: "));
    assert!(stderr.contains(missing.to_str().unwrap()));
}

#[test]
fn test_rust_log_enables_library_trace_events() {
    let dir = tempdir().unwrap();
    let script = write_file(&dir, "s.lst", "push 1\n");

    let output = lstack()
        .env("RUST_LOG", "linkstack=trace")
        .arg("--verbose")
        .arg(&script)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(text(&output.stderr).contains("push: stack no longer empty"));
}
