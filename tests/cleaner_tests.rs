use webforge_cli::cleaner::{clean_artifacts, CleanMode};

#[test]
fn incremental_clean_removes_only_wasm_files() -> anyhow::Result<()> {
    let project = tempfile::tempdir()?;
    let dist = project.path().join("dist");
    std::fs::create_dir(&dist)?;
    std::fs::write(dist.join("a.wasm"), b"\0asm")?;
    std::fs::write(dist.join("b.wasm"), b"\0asm")?;
    std::fs::write(dist.join("c.txt"), b"keep me")?;

    let removed = clean_artifacts(&dist, CleanMode::Incremental)?;

    assert_eq!(removed, 2);
    assert!(dist.exists());
    assert!(!dist.join("a.wasm").exists());
    assert!(!dist.join("b.wasm").exists());
    assert!(dist.join("c.txt").exists());
    Ok(())
}

#[test]
fn incremental_clean_skips_directories_named_wasm() -> anyhow::Result<()> {
    let project = tempfile::tempdir()?;
    let dist = project.path().join("dist");
    std::fs::create_dir_all(dist.join("pkg.wasm"))?;
    std::fs::write(dist.join("pkg.wasm").join("inner.wasm"), b"\0asm")?;

    // Only direct-child regular files are candidates; the directory and
    // its contents stay.
    let removed = clean_artifacts(&dist, CleanMode::Incremental)?;

    assert_eq!(removed, 0);
    assert!(dist.join("pkg.wasm").join("inner.wasm").exists());
    Ok(())
}

#[test]
fn full_clean_removes_whole_directory() -> anyhow::Result<()> {
    let project = tempfile::tempdir()?;
    let dist = project.path().join("dist");
    std::fs::create_dir(&dist)?;
    std::fs::write(dist.join("bundle.js"), b"js")?;
    std::fs::write(dist.join("app.wasm"), b"\0asm")?;

    clean_artifacts(&dist, CleanMode::Full)?;

    assert!(!dist.exists());
    Ok(())
}

#[test]
fn missing_dist_is_noop_in_both_modes() -> anyhow::Result<()> {
    let project = tempfile::tempdir()?;
    let dist = project.path().join("dist");

    assert_eq!(clean_artifacts(&dist, CleanMode::Incremental)?, 0);
    assert_eq!(clean_artifacts(&dist, CleanMode::Full)?, 0);
    // Neither mode may create the directory as a side effect.
    assert!(!dist.exists());
    Ok(())
}
