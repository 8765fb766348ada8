use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::config;
use crate::resolver::{self, SystemToolResolver};

use super::common::ProjectLayout;

/// Preflight-only pipeline: resolve the project, probe every required
/// toolchain, and report. No stage is executed and nothing is cleaned.
pub fn execute_check_pipeline(project: &Path) -> Result<()> {
    let config = config::load(project).ok();
    let layout = ProjectLayout::resolve(project, config.as_ref().and_then(|c| c.paths.as_ref()))?;

    println!(
        "{} Checking toolchains for {}",
        "[INFO]".cyan(),
        layout.root.display()
    );

    resolver::preflight(&SystemToolResolver, &resolver::default_requirements())?;

    println!(
        "{} All required tools are resolvable.",
        "[OK]".green().bold()
    );

    Ok(())
}
