use webforge_cli::stage::{list_typescript_sources, run_stage, StageStatus};

#[test]
fn lists_only_direct_child_ts_files() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("app.ts"), "export {};")?;
    std::fs::write(dir.path().join("util.ts"), "export {};")?;
    std::fs::write(dir.path().join("notes.md"), "# notes")?;
    std::fs::create_dir(dir.path().join("vendor.ts"))?;
    std::fs::write(dir.path().join("vendor.ts").join("nested.ts"), "export {};")?;

    let mut sources = list_typescript_sources(dir.path())?;
    sources.sort();

    assert_eq!(sources, ["app.ts", "util.ts"]);
    Ok(())
}

#[test]
fn empty_source_dir_yields_no_invocations() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    assert!(list_typescript_sources(dir.path())?.is_empty());
    Ok(())
}

#[test]
fn missing_source_dir_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("src").join("ts");

    let err = list_typescript_sources(&missing).unwrap_err();
    assert!(err
        .to_string()
        .contains("Failed to read TypeScript source dir"));
}

#[cfg(unix)]
#[test]
fn run_stage_maps_exit_codes() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    let ok = run_stage(dir.path(), "sh", &["-c", "exit 0"])?;
    assert_eq!(ok, StageStatus::Completed);
    assert!(ok.success());

    let failed = run_stage(dir.path(), "sh", &["-c", "exit 3"])?;
    assert_eq!(failed, StageStatus::Failed(3));
    assert!(!failed.success());
    Ok(())
}

#[cfg(unix)]
#[test]
fn run_stage_does_not_move_the_working_directory() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let before = std::env::current_dir()?;

    run_stage(dir.path(), "sh", &["-c", "exit 1"])?;
    run_stage(dir.path(), "sh", &["-c", "exit 0"])?;

    assert_eq!(std::env::current_dir()?, before);
    Ok(())
}

#[test]
fn run_stage_spawn_failure_names_the_program() {
    let dir = tempfile::tempdir().unwrap();

    let err = run_stage(dir.path(), "no-such-tool-exists", &[]).unwrap_err();
    assert!(err.to_string().contains("no-such-tool-exists"));
}
