use std::fs;

use tempfile::TempDir;
use workflowdoc::cli::generate::run;
use workflowdoc::config::Config;

/// Helper to create a repository layout with a workflows directory
fn setup() -> (TempDir, Config) {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("workflows")).unwrap();
    let config = Config {
        workflows_dir: dir.path().join("workflows").display().to_string(),
        output: dir.path().join("WORKFLOWS.md").display().to_string(),
        verbose: false,
    };
    (dir, config)
}

fn write_workflow(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join("workflows").join(name), content).unwrap();
}

#[test]
fn test_end_to_end_generation() {
    let (dir, config) = setup();
    write_workflow(
        &dir,
        "ci.yml",
        r#"# @workflow.name: CI Pipeline
# @workflow.description: Run tests
# @workflow.owners: team-platform
# @workflow.tags: ci, automation
on: push
"#,
    );
    write_workflow(
        &dir,
        "release.yaml",
        r#"# @workflow.name: Release
# @workflow.params: version
# @workflow.permissions: contents: write
on: workflow_dispatch
"#,
    );

    run(&config).unwrap();

    let content = fs::read_to_string(&config.output).unwrap();
    assert!(content.contains("| CI Pipeline | Run tests | team-platform | ci, automation | ci.yml |"));
    assert!(content.contains("| Release | - | - | - | release.yaml |"));
    assert!(content.contains("### Release"));
    assert!(content.contains("**Parameters:** version"));
    assert!(content.contains("**Permissions:** contents: write"));
    // CI Pipeline has no extended fields, so no subsection
    assert!(!content.contains("### CI Pipeline"));
}

#[test]
fn test_unannotated_workflows_still_listed() {
    let (dir, config) = setup();
    write_workflow(&dir, "bare.yml", "on: push\njobs: {}\n");

    run(&config).unwrap();

    let content = fs::read_to_string(&config.output).unwrap();
    assert!(content.contains("| - | - | - | - | bare.yml |"));
    assert!(content.contains("*No workflows define parameters, results, permissions, or requirements.*"));
}

#[test]
fn test_missing_workflows_dir_is_fatal() {
    let config = Config {
        workflows_dir: "/nonexistent/repo/.github/workflows".to_string(),
        ..Config::default()
    };
    assert!(run(&config).is_err());
}

#[test]
fn test_empty_workflows_dir_succeeds_with_sparse_report() {
    let (_dir, config) = setup();

    run(&config).unwrap();

    let content = fs::read_to_string(&config.output).unwrap();
    assert!(content.starts_with("# Workflow Documentation"));
    let rows: Vec<_> = content.lines().filter(|l| l.starts_with('|')).collect();
    assert_eq!(rows.len(), 2, "expected only header and separator rows");
}

#[test]
fn test_regeneration_overwrites_previous_report() {
    let (dir, config) = setup();
    write_workflow(&dir, "first.yml", "# @workflow.name: First\n");

    run(&config).unwrap();
    let before = fs::read_to_string(&config.output).unwrap();
    assert!(before.contains("| First |"));

    fs::remove_file(dir.path().join("workflows").join("first.yml")).unwrap();
    write_workflow(&dir, "second.yml", "# @workflow.name: Second\n");

    run(&config).unwrap();
    let after = fs::read_to_string(&config.output).unwrap();
    assert!(after.contains("| Second |"));
    assert!(!after.contains("| First |"));
}

#[cfg(unix)]
#[test]
fn test_symlinked_workflow_is_skipped() {
    let (dir, config) = setup();
    write_workflow(&dir, "real.yml", "# @workflow.name: Real\n");
    std::os::unix::fs::symlink(
        dir.path().join("workflows").join("real.yml"),
        dir.path().join("workflows").join("link.yml"),
    )
    .unwrap();

    run(&config).unwrap();

    let content = fs::read_to_string(&config.output).unwrap();
    assert!(content.contains("| real.yml |"));
    assert!(!content.contains("link.yml"));
}

#[test]
fn test_non_yaml_files_are_ignored() {
    let (dir, config) = setup();
    write_workflow(&dir, "ci.yml", "# @workflow.name: CI\n");
    write_workflow(&dir, "README.md", "# @workflow.name: Not A Workflow\n");
    write_workflow(&dir, "script.sh", "# @workflow.name: Also Not\n");

    run(&config).unwrap();

    let content = fs::read_to_string(&config.output).unwrap();
    assert!(content.contains("| CI |"));
    assert!(!content.contains("Not A Workflow"));
}
