use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn unscaffold() -> Command {
    Command::cargo_bin("unscaffold").unwrap()
}

fn write_manifest(dir: &TempDir, value: &serde_json::Value) {
    std::fs::write(
        dir.path().join("composer.json"),
        serde_json::to_string_pretty(value).unwrap(),
    )
    .unwrap();
}

fn read_manifest(dir: &TempDir) -> serde_json::Value {
    let contents = std::fs::read_to_string(dir.path().join("composer.json")).unwrap();
    serde_json::from_str(&contents).unwrap()
}

fn scaffolded_manifest() -> serde_json::Value {
    json!({
        "name": "acme/app",
        "require": {
            "php": ">=8.1",
            "acme/installer-plugin": "^1.0",
            "unscaffold/create-project-helper": "^0.1"
        },
        "scripts": {
            "post-create-project-cmd": ["Acme\\Helper::cleanUp"],
            "test": "phpunit"
        },
        "extra": {
            "create-project": {
                "remove-require": ["acme/installer-plugin"],
                "remove-require-dev": [],
                "installer": ""
            }
        }
    })
}

// ─── Help & version ──────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    unscaffold()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cleanup"))
        .stdout(predicate::str::contains("remove-prop"))
        .stdout(predicate::str::contains("remove-self"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_flag() {
    unscaffold()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("unscaffold"));
}

// ─── Cleanup command ─────────────────────────────────────────────────────────

#[test]
fn test_cleanup_with_stub_installer() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, &scaffolded_manifest());

    unscaffold()
        .args(["cleanup", "--installer", "true", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .success();

    let root = read_manifest(&dir);
    assert!(root["scripts"].get("post-create-project-cmd").is_none());
    assert!(root["extra"].get("create-project").is_none());
    assert!(root["require"].get("acme/installer-plugin").is_none());
    assert!(root["require"]
        .get("unscaffold/create-project-helper")
        .is_none());
    assert!(root["require"].get("php").is_some());
}

#[test]
fn test_cleanup_failure_restores_manifest() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, &scaffolded_manifest());
    let before = std::fs::read_to_string(dir.path().join("composer.json")).unwrap();

    unscaffold()
        .args(["cleanup", "--installer", "false", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Removal failed"));

    assert_eq!(
        std::fs::read_to_string(dir.path().join("composer.json")).unwrap(),
        before
    );
}

#[test]
fn test_cleanup_skip_update() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, &scaffolded_manifest());

    unscaffold()
        .args(["cleanup", "--skip-update", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("update skipped"));

    let root = read_manifest(&dir);
    assert!(root["scripts"].get("post-create-project-cmd").is_none());
}

#[test]
fn test_cleanup_json_output() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, &scaffolded_manifest());

    let assert = unscaffold()
        .args(["cleanup", "--installer", "true", "--format", "json"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": 0"));

    let output = assert.get_output();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["rolled_back"], json!(false));
    assert!(report["whitelist"]
        .as_array()
        .unwrap()
        .contains(&json!("acme/installer-plugin")));
}

#[test]
fn test_cleanup_warns_without_config_block() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, &json!({"name": "acme/app"}));

    unscaffold()
        .args(["cleanup", "--skip-update", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "extra.create-project.remove-require",
        ));
}

// ─── Direct edit commands ────────────────────────────────────────────────────

#[test]
fn test_remove_prop_missing_path_is_ok() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, &json!({"name": "acme/app"}));

    unscaffold()
        .args(["remove-prop", "a.b", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to do"));
}

#[test]
fn test_remove_glob_pattern() {
    let dir = TempDir::new().unwrap();
    write_manifest(
        &dir,
        &json!({"require": {"acme/a": "^1.0", "acme/b": "^1.0", "other/c": "^1.0"}}),
    );

    unscaffold()
        .args(["remove", "acme/*", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .success();

    let root = read_manifest(&dir);
    assert!(root["require"].get("acme/a").is_none());
    assert!(root["require"].get("acme/b").is_none());
    assert!(root["require"].get("other/c").is_some());
}

#[test]
fn test_remove_missing_package_warns() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, &json!({"require": {"vendor/pkg": "^1.0"}}));

    unscaffold()
        .args(["remove", "vendor/other", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "requested to be removed but not required",
        ));
}

#[test]
fn test_remove_self() {
    let dir = TempDir::new().unwrap();
    write_manifest(
        &dir,
        &json!({"require": {"unscaffold/create-project-helper": "^0.1", "php": ">=8.1"}}),
    );

    unscaffold()
        .args(["remove-self", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .success();

    let root = read_manifest(&dir);
    assert!(root["require"]
        .get("unscaffold/create-project-helper")
        .is_none());
    assert!(root["require"].get("php").is_some());
}

// ─── Completions ─────────────────────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    unscaffold()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unscaffold"));
}
