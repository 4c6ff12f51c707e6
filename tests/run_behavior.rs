//! Tests for the discover-register-execute pipeline

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use testrunner_rs::{testrunner, ColorMode, FileStatus, Harness};

/// A harness that runs files as shell scripts so fixtures stay deterministic
fn sh_harness() -> Harness {
    testrunner::configure()
        .color(ColorMode::Off)
        .interpreter(["sh"])
        .build()
}

fn write_script(path: &Path, body: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, body).unwrap();
}

#[test]
fn registers_matches_runs_them_and_completes_despite_failures() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write_script(&root.join("a").join("foo.test.js"), "exit 0\n");
    write_script(&root.join("b").join("bar.test.js"), "exit 1\n");
    fs::write(root.join("readme.md"), "not a test\n").unwrap();

    let mut harness = sh_harness();
    let result = harness.run(root);
    assert!(
        result.is_ok(),
        "run should complete even though bar.test.js fails: {:?}",
        result
    );

    let mut registered = harness.registered_files().to_vec();
    registered.sort();
    assert_eq!(
        registered,
        vec![root.join("a/foo.test.js"), root.join("b/bar.test.js")]
    );

    let summary = harness.summary().expect("a summary should be recorded");
    assert_eq!(summary.outcomes.len(), 2);
    assert_eq!(summary.passed(), 1);
    assert_eq!(summary.failed(), 1);
    assert!(!summary.is_success());
}

#[test]
fn failed_search_registers_nothing_and_records_no_run() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let mut harness = sh_harness();
    let result = harness.run(&missing);

    assert!(result.is_err(), "expected error for missing tests root");
    assert!(
        harness.registered_files().is_empty(),
        "a failed search must not partially register files"
    );
    assert!(harness.summary().is_none());
}

#[test]
fn repeated_runs_accumulate_registrations() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write_script(&root.join("one.test.js"), "exit 0\n");
    write_script(&root.join("two.test.js"), "exit 0\n");

    let mut harness = sh_harness();
    harness.run(root).unwrap();
    assert_eq!(harness.registered_files().len(), 2);

    // No reset between runs: the second pass re-registers both files and
    // executes the doubled list.
    harness.run(root).unwrap();
    assert_eq!(harness.registered_files().len(), 4);
    assert_eq!(harness.summary().unwrap().outcomes.len(), 4);
}

#[test]
fn a_fresh_harness_starts_with_an_empty_registration_list() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_script(&root.join("one.test.js"), "exit 0\n");

    let mut harness = sh_harness();
    harness.run(root).unwrap();
    assert_eq!(harness.registered_files().len(), 1);

    // Re-configuring replaces the instance, which is the only reset
    let harness = sh_harness();
    assert!(harness.registered_files().is_empty());
    assert!(harness.summary().is_none());
}

#[test]
fn registered_paths_are_joined_onto_the_tests_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_script(&root.join("sub").join("case.test.js"), "exit 0\n");

    let mut harness = sh_harness();
    harness.run(root).unwrap();

    assert_eq!(
        harness.registered_files(),
        &[root.join("sub").join("case.test.js")]
    );
}

#[test]
fn missing_interpreter_is_swallowed_as_a_file_failure() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_script(&root.join("only.test.js"), "exit 0\n");

    let mut harness = testrunner::configure()
        .color(ColorMode::Off)
        .interpreter(["testrunner-no-such-interpreter"])
        .build();

    let result = harness.run(root);
    assert!(
        result.is_ok(),
        "execution-phase failures must not surface through the run result"
    );

    let summary = harness.summary().unwrap();
    assert_eq!(summary.failed(), 1);
    match &summary.outcomes[0].status {
        FileStatus::Failed { detail } => assert!(
            detail.contains("failed to launch"),
            "detail should describe the spawn failure: {}",
            detail
        ),
        FileStatus::Passed => panic!("expected a spawn failure"),
    }
}

#[test]
fn running_an_empty_directory_completes_with_an_empty_summary() {
    let temp_dir = TempDir::new().unwrap();

    let mut harness = sh_harness();
    harness.run(temp_dir.path()).unwrap();

    assert!(harness.registered_files().is_empty());
    let summary = harness.summary().unwrap();
    assert!(summary.outcomes.is_empty());
    assert!(summary.is_success());
}
