//! End-to-end runs of the `modinput` binary over real stdio.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use modinput_model::Severity;

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_modinput"))
        .args(args)
        .env_remove("RUST_LOG")
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

fn assert_only_diagnostic_lines(stderr: &[u8]) {
    let stderr = String::from_utf8(stderr.to_vec()).unwrap();
    for line in stderr.lines() {
        assert!(
            Severity::ALL
                .iter()
                .any(|severity| line.starts_with(&format!("{severity} "))),
            "stderr line is not a diagnostic: {line:?}\n{stderr}"
        );
    }
}

#[test]
fn test_emit_stderr_carries_only_diagnostics() {
    let output = run(&["emit", "--stanza", "s"], "a\n\nb\n");

    assert!(output.status.success());
    assert_only_diagnostic_lines(&output.stderr);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "{stderr}");
    assert!(stderr.starts_with("WARN Rejected record: "), "{stderr}");
}

#[test]
fn test_rejected_configuration_stderr_carries_only_diagnostics() {
    let output = run(&["validate"], "<items></items>");

    assert_eq!(output.status.code(), Some(1));
    assert_only_diagnostic_lines(&output.stderr);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("<error><message>"), "{stdout}");
}

#[test]
fn test_accepted_configuration_exits_zero() {
    let output = run(&["validate"], r#"<items><item name="s"/></items>"#);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "INFO Configuration for s is valid\n"
    );
}
