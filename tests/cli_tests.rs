//! End-to-end tests for the `arithlex` binary.
//!
//! Covers mode selection (`-e` over FILE over piped stdin), option mapping
//! and exit codes.

use std::{
    fs,
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
};

use pretty_assertions::assert_eq;

fn arithlex() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_arithlex"));
    command.env_remove("RUST_LOG");
    command
}

fn with_stdin(mut command: Command, input: &str) -> Output {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("arithlex-{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_eval_takes_priority_over_file() {
    let path = scratch_file("ignored.txt", "1+1\n");
    let output = arithlex()
        .args(["-e", "2**3"])
        .arg(&path)
        .stdin(Stdio::null())
        .output()
        .unwrap();
    fs::remove_file(&path).unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "[Number(\"2\"), Pow(\"**\"), Number(\"3\")]\n"
    );
}

#[test]
fn test_file_takes_priority_over_stdin() {
    let path = scratch_file("exprs.txt", "1+1\n(2)\n");
    let mut command = arithlex();
    command.arg(&path);
    let output = with_stdin(command, "9\n");
    fs::remove_file(&path).unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        concat!(
            "[Number(\"1\"), Add(\"+\"), Number(\"1\")]\n",
            "[LeftParen(\"(\"), Number(\"2\"), RightParen(\")\")]\n",
        )
    );
}

#[test]
fn test_missing_file_exits_with_failure() {
    let output = arithlex()
        .arg("does/not/exist.txt")
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: InputUnreadable"), "stderr was {stderr:?}");
}

#[test]
fn test_piped_stdin_with_lines_format() {
    let mut command = arithlex();
    command.args(["--format", "lines"]);
    let output = with_stdin(command, "1 + 2\n3**4\n");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Number (1)\nAdd (+)\nNumber (2)\nNumber (3)\nPow (**)\nNumber (4)\n"
    );
}

#[test]
fn test_show_skipped_flag_reaches_render() {
    let output = arithlex()
        .args(["--show-skipped", "-e", "1 $ 2"])
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "[Number(\"1\"), Number(\"2\")]\n  | 1 $ 2\n  |   ^\n"
    );
}
