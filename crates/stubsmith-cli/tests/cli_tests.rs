//! End-to-end tests for the `stubsmith` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A scratch project: stubs under `stubs/`, output under `out/`, and a config
/// file with a `default` and an `api` profile pointing at them.
struct Project {
    dir: TempDir,
}

impl Project {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let project = Self { dir };

        project.stub("FooController.php", "<?php\n\nclass FooController extends Controller\n{\n}\n");
        project.stub("Services/FooService.php", "<?php\n\nfinal class FooService\n{\n}\n");
        project.stub("api/FooRequest.php", "<?php\n\nclass FooRequest {}\n");

        let config = format!(
            "[profiles.default]\n\
             stubs_path = '{stubs}'\n\
             target_path = '{out}'\n\
             preserve_suffixes = [\"Controller\", \"Service\"]\n\
             \n\
             [profiles.api]\n\
             stubs_path = '{api}'\n\
             target_path = '{out}'\n\
             preserve_suffixes = [\"Request\"]\n",
            stubs = project.path("stubs").display(),
            api = project.path("stubs/api").display(),
            out = project.path("out").display(),
        );
        fs::write(project.config(), config).unwrap();
        project
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    fn config(&self) -> PathBuf {
        self.path("stubsmith.toml")
    }

    fn stub(&self, rel: &str, content: &str) {
        let path = self.path("stubs").join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).unwrap()
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("stubsmith").unwrap();
        cmd.current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.config());
        cmd
    }
}

fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

#[test]
fn test_short_help_shows_about() {
    let mut cmd = Command::cargo_bin("stubsmith").unwrap();
    cmd.arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generate code from stub templates"));
}

#[test]
fn test_long_help_shows_description() {
    let mut cmd = Command::cargo_bin("stubsmith").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stubsmith copies a directory"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("stubsmith").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generate_renames_files_and_classes() {
    let project = Project::new();

    project
        .cmd()
        .args(["generate", "User"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Code generated successfully! (3 files)"));

    assert_eq!(
        project.read("out/UserController.php"),
        "<?php\n\nclass UserController extends Controller\n{\n}\n"
    );
    assert_eq!(
        project.read("out/Services/UserService.php"),
        "<?php\n\nfinal class UserService\n{\n}\n"
    );
    // "Request" is not a default-profile suffix.
    assert_eq!(project.read("out/api/User.php"), "<?php\n\nclass User {}\n");
}

#[test]
fn test_generate_with_profile_and_target() {
    let project = Project::new();
    let target = project.path("custom");

    project
        .cmd()
        .args(["g", "Invoice", "--stub-id", "api", "--target"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("(1 files)"));

    assert_eq!(
        fs::read_to_string(target.join("InvoiceRequest.php")).unwrap(),
        "<?php\n\nclass InvoiceRequest {}\n"
    );
    assert!(!exists(project.path("out")));
}

#[test]
fn test_generate_conflict_then_force() {
    let project = Project::new();
    fs::create_dir_all(project.path("out")).unwrap();
    fs::write(project.path("out/UserController.php"), "keep me").unwrap();

    project
        .cmd()
        .args(["generate", "User"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    assert_eq!(project.read("out/UserController.php"), "keep me");

    project
        .cmd()
        .args(["generate", "User", "--force"])
        .assert()
        .success();

    assert!(project.read("out/UserController.php").contains("class UserController"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let project = Project::new();

    project
        .cmd()
        .args(["generate", "User", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run: would generate 3 files"))
        .stdout(predicate::str::contains("UserController.php"));

    assert!(!exists(project.path("out")));
}

#[test]
fn test_dry_run_flags_conflicts() {
    let project = Project::new();
    fs::create_dir_all(project.path("out")).unwrap();
    fs::write(project.path("out/UserController.php"), "").unwrap();

    project
        .cmd()
        .args(["generate", "User", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UserController.php (exists)"));
}

#[test]
fn test_json_output() {
    let project = Project::new();

    let assert = project
        .cmd()
        .args(["--output-format", "json", "generate", "User"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["profile"], "default");
    assert_eq!(summary["count"], 3);
    assert_eq!(summary["dry_run"], false);
    assert_eq!(summary["files"].as_array().unwrap().len(), 3);
}

#[test]
fn test_quiet_flag() {
    let project = Project::new();

    project
        .cmd()
        .args(["--quiet", "generate", "User"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(exists(project.path("out/UserController.php")));
}

#[test]
fn test_profiles_command() {
    let project = Project::new();

    project
        .cmd()
        .arg("profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("default"))
        .stdout(predicate::str::contains("api"))
        .stdout(predicate::str::contains("Request"));
}

#[test]
fn test_profiles_json() {
    let project = Project::new();

    let assert = project
        .cmd()
        .args(["profiles", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let profiles: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(profiles["api"]["preserve_suffixes"][0], "Request");
}

#[test]
fn test_config_get() {
    let project = Project::new();

    project
        .cmd()
        .args(["config", "get", "profiles.api.preserve_suffixes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("profiles.api.preserve_suffixes = Request"));
}

#[test]
fn test_config_path_reports_explicit_file() {
    let project = Project::new();

    project
        .cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stubsmith.toml"));
}

#[test]
fn test_init_local_writes_config() {
    let project = Project::new();

    project.cmd().args(["init", "--local"]).assert().success();

    let written = project.read(".stubsmith.toml");
    assert!(written.contains("[profiles.default]"));
    assert!(written.contains("Controller"));
}

#[test]
fn test_shell_completions() {
    let mut cmd = Command::cargo_bin("stubsmith").unwrap();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stubsmith"));
}
