use anyhow::{Context, Result};
use colored::*;
use std::path::{Path, PathBuf};

use crate::config::PathsConfig;
use crate::stage::StageStatus;

/// Resolved directory layout for one pipeline run.
///
/// Every stage receives one of these absolute paths explicitly; the
/// process working directory is never mutated, so the directory the tool
/// was launched from is the directory it exits in.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub crate_dir: PathBuf,
    pub ts_dir: PathBuf,
    pub ts_out_dir: PathBuf,
    pub dist_dir: PathBuf,
}

impl ProjectLayout {
    /// Resolve the layout against the project root, with webforge.toml
    /// overrides taking priority over the conventional directory names.
    pub fn resolve(root: &Path, paths: Option<&PathsConfig>) -> Result<Self> {
        let root = root
            .canonicalize()
            .with_context(|| format!("Project root not found: {}", root.display()))?;

        let dir = |configured: Option<&String>, conventional: &str| {
            root.join(configured.map(String::as_str).unwrap_or(conventional))
        };

        Ok(Self {
            crate_dir: dir(paths.and_then(|p| p.crate_dir.as_ref()), "crate"),
            ts_dir: dir(paths.and_then(|p| p.ts_dir.as_ref()), "src/ts"),
            ts_out_dir: dir(paths.and_then(|p| p.ts_out_dir.as_ref()), "src"),
            dist_dir: dir(paths.and_then(|p| p.dist_dir.as_ref()), "dist"),
            root,
        })
    }
}

/// Read the project name out of a root-level package.json, if any.
pub fn read_package_name(root: &Path) -> Option<String> {
    let content = std::fs::read_to_string(root.join("package.json")).ok()?;
    let manifest: serde_json::Value = serde_json::from_str(&content).ok()?;
    manifest
        .get("name")
        .and_then(|name| name.as_str())
        .map(str::to_string)
}

/// Apply the failure policy to a finished stage.
///
/// A failed stage halts the pipeline unless `keep_going` is set, in which
/// case the failure is surfaced as a warning and the sequence continues.
pub fn finish_stage(name: &str, status: StageStatus, keep_going: bool) -> Result<()> {
    let detail = match status {
        StageStatus::Completed => return Ok(()),
        StageStatus::Failed(code) => format!("exit code {code}"),
        StageStatus::Signaled => "terminated by signal".to_string(),
    };

    if keep_going {
        println!(
            "{} Stage '{}' failed ({}), continuing.",
            "[WARN]".yellow(),
            name,
            detail
        );
        Ok(())
    } else {
        anyhow::bail!("Stage '{name}' failed ({detail})");
    }
}
