use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::cleaner::{self, CleanMode};
use crate::config;

use super::common::ProjectLayout;

/// Cleanup-only pipeline.
///
/// Incremental by default; `full` removes the whole dist directory. Both
/// are no-ops when the directory does not exist.
pub fn execute_clean_pipeline(project: &Path, full: bool) -> Result<()> {
    let config = config::load(project).ok();
    let layout = ProjectLayout::resolve(project, config.as_ref().and_then(|c| c.paths.as_ref()))?;

    let mode = if full {
        CleanMode::Full
    } else {
        CleanMode::Incremental
    };

    let removed = cleaner::clean_artifacts(&layout.dist_dir, mode)?;

    match (mode, removed) {
        (_, 0) => println!(
            "{} Nothing to clean in {}",
            "[DONE]".green().bold(),
            layout.dist_dir.display()
        ),
        (CleanMode::Full, _) => println!(
            "{} Removed {}",
            "[DONE]".green().bold(),
            layout.dist_dir.display()
        ),
        (CleanMode::Incremental, n) => println!(
            "{} Removed {} artifact(s) from {}",
            "[DONE]".green().bold(),
            n,
            layout.dist_dir.display()
        ),
    }

    Ok(())
}
