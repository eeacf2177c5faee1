use std::process::Command;

#[test]
fn test_help_lists_commands() {
    let bin = env!("CARGO_BIN_EXE_lumin");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["add", "publish", "verify"] {
        assert!(
            stdout.contains(command),
            "help output should list '{}'; got:\n{}",
            command,
            stdout
        );
    }
}

#[test]
fn test_add_help_documents_inputs() {
    let bin = env!("CARGO_BIN_EXE_lumin");

    let output = Command::new(bin).args(["add", "-h"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--folder"));
    assert!(stdout.contains("--icon"));
    assert!(stdout.contains("--name"));
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn test_unknown_command_fails() {
    let bin = env!("CARGO_BIN_EXE_lumin");

    let output = Command::new(bin).arg("explode").output().unwrap();

    assert!(!output.status.success());
}
