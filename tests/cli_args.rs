//! Tests for the command-line front end.

use std::process::Command;

fn magick_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_magick-cmd"));
    cmd.env_remove("MAGICK_CMD_PROGRAM");
    cmd
}

#[test]
fn dry_run_prints_command_line() {
    let output = magick_cmd()
        .args(["--dry-run", "--program", "convert"])
        .arg(r#"[{"add": "in.png"}, {"resize": {"width": 64, "height": 64, "onlyShrink": true}}, "strip", {"add": "out.png"}]"#)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "convert in.png -resize '64x64>' -strip out.png");
}

#[test]
fn program_env_var_overrides_default() {
    let dir = tempfile::tempdir().unwrap();
    let output = magick_cmd()
        .env("MAGICK_CMD_PROGRAM", "magick")
        .args(["--dry-run", "--config"])
        .arg(dir.path().join("missing.toml"))
        .arg(r#"["strip"]"#)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "magick -strip");
}

#[test]
fn log_env_var_writes_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("magick-cmd.log");
    let output = magick_cmd()
        .env("MAGICK_CMD_LOG", &log_path)
        .env_remove("RUST_LOG")
        .args(["--dry-run", "-v", r#"["strip"]"#])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("appending option"));
}

#[test]
fn unknown_option_exits_with_error() {
    let output = magick_cmd()
        .args(["--dry-run", r#"["sparkle"]"#])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No such option `sparkle`"));
}

#[test]
fn list_options_includes_thumbnail() {
    let output = magick_cmd()
        .arg("--list-options")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("thumbnail"));
    assert!(stdout.contains("-auto-orient"));
}

#[cfg(unix)]
#[test]
fn runs_program_and_forwards_stdout() {
    let output = magick_cmd()
        .args(["--program", "echo", r#"[{"add": "hi"}]"#])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "hi\n");
}
