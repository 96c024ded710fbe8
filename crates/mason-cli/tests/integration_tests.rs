//! Integration tests for mason-cli.
//!
//! Each test gets its own fake config home (`XDG_CONFIG_HOME`) and working
//! directory so runs never touch the real user environment or each other.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Command pinned to an isolated config home and working directory.
fn mason(config_home: &Path, workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mason").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG")
        .current_dir(workdir);
    cmd
}

fn sandbox() -> (TempDir, TempDir) {
    (TempDir::new().unwrap(), TempDir::new().unwrap())
}

/// Install a template into the sandboxed config home.
fn install_template(config_home: &Path, name: &str, manifest: &str) {
    let template_dir = config_home.join("mason/templates").join(name);
    fs::create_dir_all(template_dir.join("src")).unwrap();
    fs::write(template_dir.join("CMakeLists.txt"), manifest).unwrap();
    fs::write(template_dir.join("src/main.cpp"), "// from template\n").unwrap();
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    let (config, work) = sandbox();
    mason(config.path(), work.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn help_flag_prints_usage_and_succeeds() {
    let (config, work) = sandbox();
    mason(config.path(), work.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--template"));
}

#[test]
fn short_help_flag_works_too() {
    let (config, work) = sandbox();
    mason(config.path(), work.path())
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn help_beside_a_positional_creates_nothing() {
    let (config, work) = sandbox();
    mason(config.path(), work.path())
        .args(["demo", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));

    assert!(!work.path().join("demo").exists());
}

#[test]
fn creates_a_default_project() {
    let (config, work) = sandbox();
    mason(config.path(), work.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project Information:"))
        .stdout(predicate::str::contains("created"));

    let project = work.path().join("demo");
    assert!(project.join("src").is_dir());
    assert!(project.join("include").is_dir());

    let manifest = fs::read_to_string(project.join("CMakeLists.txt")).unwrap();
    assert!(manifest.contains("project(demo"));
    assert!(manifest.contains("add_executable(demo ${SOURCE_FILES})"));

    let main = fs::read_to_string(project.join("src/main.cpp")).unwrap();
    assert!(main.contains("Hello, world!"));
}

#[test]
fn name_flag_overrides_the_binary_name() {
    let (config, work) = sandbox();
    mason(config.path(), work.path())
        .args(["demo", "-n", "custom"])
        .assert()
        .success();

    let manifest = fs::read_to_string(work.path().join("demo/CMakeLists.txt")).unwrap();
    assert!(manifest.contains("project(demo"));
    assert!(manifest.contains("add_executable(custom"));
}

#[test]
fn shared_flag_builds_a_library() {
    let (config, work) = sandbox();
    mason(config.path(), work.path())
        .args(["demo", "--shared"])
        .assert()
        .success();

    let manifest = fs::read_to_string(work.path().join("demo/CMakeLists.txt")).unwrap();
    assert!(manifest.contains("add_library(demo SHARED ${SOURCE_FILES})"));
}

#[test]
fn version_and_description_flags_land_in_the_manifest() {
    let (config, work) = sandbox();
    mason(config.path(), work.path())
        .args(["demo", "-v", "2.0.0", "-d", "my tool"])
        .assert()
        .success();

    let manifest = fs::read_to_string(work.path().join("demo/CMakeLists.txt")).unwrap();
    assert!(manifest.contains("VERSION 2.0.0"));
    assert!(manifest.contains("DESCRIPTION \"my tool\""));
}

#[test]
fn existing_directory_is_refused() {
    let (config, work) = sandbox();
    fs::create_dir(work.path().join("demo")).unwrap();

    mason(config.path(), work.path())
        .arg("demo")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn unknown_flags_are_reported_but_not_fatal() {
    let (config, work) = sandbox();
    mason(config.path(), work.path())
        .args(["demo", "--bogus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Couldn't find: bogus"));

    assert!(work.path().join("demo/CMakeLists.txt").exists());
}

#[test]
fn flags_without_a_project_name_are_a_user_error() {
    let (config, work) = sandbox();
    mason(config.path(), work.path())
        .arg("-s")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing project name"));
}

#[test]
fn unknown_template_is_a_not_found_error() {
    let (config, work) = sandbox();
    mason(config.path(), work.path())
        .args(["demo", "-t", "missing"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("doesn't exist"));

    assert!(!work.path().join("demo").exists());
}

#[test]
fn template_is_copied_and_substituted() {
    let (config, work) = sandbox();
    install_template(
        config.path(),
        "basic",
        "project(__PROJECT_NAME__ VERSION __VERSION__)\nadd_executable(__NAME__ src/main.cpp)\n",
    );

    mason(config.path(), work.path())
        .args(["demo", "--template", "basic", "-v", "0.3.0"])
        .assert()
        .success();

    let manifest = fs::read_to_string(work.path().join("demo/CMakeLists.txt")).unwrap();
    assert_eq!(
        manifest,
        "project(demo VERSION 0.3.0)\nadd_executable(demo src/main.cpp)\n"
    );

    // Other template files come through verbatim.
    assert_eq!(
        fs::read_to_string(work.path().join("demo/src/main.cpp")).unwrap(),
        "// from template\n"
    );
}

#[test]
fn template_flag_without_value_lists_templates() {
    let (config, work) = sandbox();
    install_template(config.path(), "basic", "project(__PROJECT_NAME__)\n");
    install_template(config.path(), "lua-5.4", "project(__PROJECT_NAME__)\n");

    mason(config.path(), work.path())
        .arg("-t")
        .assert()
        .success()
        .stdout(predicate::str::contains("Templates:"))
        .stdout(predicate::str::contains("basic"))
        .stdout(predicate::str::contains("lua-5.4"));

    // Listing never creates anything.
    assert!(fs::read_dir(work.path()).unwrap().next().is_none());
}

#[test]
fn listing_with_no_templates_mentions_the_directory() {
    let (config, work) = sandbox();
    mason(config.path(), work.path())
        .arg("-t")
        .assert()
        .success()
        .stdout(predicate::str::contains("No templates installed"));
}

#[test]
fn config_defaults_flow_into_the_manifest() {
    let (config, work) = sandbox();
    let config_dir = config.path().join("mason");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[defaults]\nversion = \"7.7.7\"\ndescription = \"configured\"\n",
    )
    .unwrap();

    mason(config.path(), work.path())
        .arg("demo")
        .assert()
        .success();

    let manifest = fs::read_to_string(work.path().join("demo/CMakeLists.txt")).unwrap();
    assert!(manifest.contains("VERSION 7.7.7"));
    assert!(manifest.contains("DESCRIPTION \"configured\""));
}
