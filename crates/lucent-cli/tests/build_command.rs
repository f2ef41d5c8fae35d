use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

#[allow(deprecated)]
fn get_lucent_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("lucent")
}

#[cfg(unix)]
fn write_fake_mach(source_dir: &Path, exit_code: i32) {
    use std::os::unix::fs::PermissionsExt;
    let mach = source_dir.join("mach");
    fs::write(&mach, format!("#!/bin/sh\nexit {exit_code}\n")).unwrap();
    fs::set_permissions(&mach, fs::Permissions::from_mode(0o755)).unwrap();
}

fn prepared_tree(root: &Path) -> PathBuf {
    let source_dir = root.join("firefox-source");
    fs::create_dir_all(&source_dir).unwrap();
    fs::write(source_dir.join("mozconfig"), "# lucent\n").unwrap();
    source_dir
}

#[test]
fn test_build_help() {
    let mut cmd = Command::new(get_lucent_bin());
    cmd.arg("build").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Compile Lucent Browser with mach"));
}

#[test]
fn test_build_fails_without_a_source_tree() {
    let root = tempfile::tempdir().unwrap();

    let mut cmd = Command::new(get_lucent_bin());
    cmd.arg("build")
        .arg("--root")
        .arg(root.path())
        .write_stdin("1\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Firefox source not found!"));
}

#[test]
fn test_build_fails_without_a_mozconfig() {
    // Distinct from the missing-tree error: the tree exists but was never
    // prepared.
    let root = tempfile::tempdir().unwrap();
    fs::create_dir_all(root.path().join("firefox-source")).unwrap();

    let mut cmd = Command::new(get_lucent_bin());
    cmd.arg("build")
        .arg("--root")
        .arg(root.path())
        .write_stdin("1\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("mozconfig not found!"));
}

#[test]
#[cfg(unix)]
fn test_build_reports_elapsed_time_on_success() {
    let root = tempfile::tempdir().unwrap();
    let source_dir = prepared_tree(root.path());
    write_fake_mach(&source_dir, 0);

    let mut cmd = Command::new(get_lucent_bin());
    cmd.arg("build")
        .arg("--root")
        .arg(root.path())
        .write_stdin("1\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Build completed successfully in"))
        .stdout(predicate::str::contains("Build Complete!"));
}

#[test]
#[cfg(unix)]
fn test_build_surfaces_the_mach_exit_status() {
    let root = tempfile::tempdir().unwrap();
    let source_dir = prepared_tree(root.path());
    write_fake_mach(&source_dir, 7);

    let mut cmd = Command::new(get_lucent_bin());
    cmd.arg("build")
        .arg("--root")
        .arg(root.path())
        .write_stdin("1\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Build failed"));
}

#[test]
#[cfg(unix)]
fn test_build_and_package_prints_the_dist_location() {
    let root = tempfile::tempdir().unwrap();
    let source_dir = prepared_tree(root.path());
    write_fake_mach(&source_dir, 0);

    let mut cmd = Command::new(get_lucent_bin());
    cmd.arg("build")
        .arg("--root")
        .arg(root.path())
        .write_stdin("2\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Package location:"))
        .stdout(predicate::str::contains("Build and Package Complete!"));
}

#[test]
fn test_clean_deletes_the_build_directory_after_yes() {
    let root = tempfile::tempdir().unwrap();
    let build_dir = root.path().join("firefox-source/obj-lucent");
    fs::create_dir_all(&build_dir).unwrap();
    fs::write(build_dir.join("stale.o"), "").unwrap();

    let mut cmd = Command::new(get_lucent_bin());
    cmd.arg("build")
        .arg("--root")
        .arg(root.path())
        .write_stdin("3\nyes\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Build directory cleaned"));
    assert!(!build_dir.exists());
}

#[test]
fn test_clean_leaves_the_build_directory_on_any_other_answer() {
    let root = tempfile::tempdir().unwrap();
    let build_dir = root.path().join("firefox-source/obj-lucent");
    fs::create_dir_all(&build_dir).unwrap();

    let mut cmd = Command::new(get_lucent_bin());
    cmd.arg("build")
        .arg("--root")
        .arg(root.path())
        .write_stdin("3\nnope\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("left untouched"));
    assert!(build_dir.exists());
}

#[test]
fn test_clean_is_informational_when_nothing_to_delete() {
    let root = tempfile::tempdir().unwrap();

    let mut cmd = Command::new(get_lucent_bin());
    cmd.arg("build")
        .arg("--root")
        .arg(root.path())
        .write_stdin("3\nyes\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Build directory doesn't exist"));
}

#[test]
fn test_invalid_menu_choice_is_an_error() {
    let root = tempfile::tempdir().unwrap();

    let mut cmd = Command::new(get_lucent_bin());
    cmd.arg("build")
        .arg("--root")
        .arg(root.path())
        .write_stdin("9\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid choice"));
}
