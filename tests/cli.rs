use assert_cmd::Command;
use predicates::prelude::*;

fn contiker() -> Command {
    let mut cmd = Command::cargo_bin("contiker").unwrap();
    cmd.env_remove("CONTIKER_RUNTIME")
        .env_remove("CONTIKER_CONTAINER")
        .env_remove("CONTIKER_IMAGE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    contiker()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deps"))
        .stdout(predicate::str::contains("cooja"));
}

#[test]
fn test_deps_list_ubuntu() {
    contiker()
        .args(["deps", "--list", "--os", "ubuntu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docker.io"))
        .stdout(predicate::str::contains("x11-xserver-utils"));
}

#[test]
fn test_deps_list_shows_missing_packages() {
    contiker()
        .args(["deps", "--list", "--os", "macos"])
        .assert()
        .success()
        .stdout(predicate::str::contains("xhost    (not applicable)"));
}

#[test]
fn test_unknown_os_is_rejected() {
    contiker()
        .args(["deps", "--list", "--os", "plan9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown OS family"));
}

#[test]
fn test_missing_runtime_reports_error() {
    contiker()
        .args(["--runtime", "contiker-no-such-runtime", "up"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("contiker-no-such-runtime"));
}

#[test]
fn test_fix_without_flags() {
    contiker()
        .arg("fix")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to fix"));
}

/// A runtime whose `exec` always succeeds, so every probe inside the
/// container finds its command.
#[cfg(unix)]
fn permissive_runtime(dir: &std::path::Path) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-runtime");
    std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
#[test]
fn test_deps_on_macos_skips_xhost() {
    let dir = tempfile::tempdir().unwrap();
    let runtime = permissive_runtime(dir.path());

    contiker()
        .arg("--runtime")
        .arg(&runtime)
        .args(["deps", "--os", "macos", "--in-container"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docker: already installed"))
        .stdout(predicate::str::contains("xhost: not applicable on macOS"));
}
