use anyhow::Result;
use colored::*;
use std::path::PathBuf;
use std::time::Instant;

use crate::cleaner::{self, CleanMode};
use crate::config::{self, PipelineConfig};
use crate::resolver::{self, SystemToolResolver};
use crate::stage::{self, npm_program, npx_program, tsc_program};

use super::common::{finish_stage, read_package_name, ProjectLayout};

/// Options for one build pipeline run.
///
/// CLI flags; each toggle overrides the corresponding webforge.toml value.
pub struct BuildOptions {
    pub project: PathBuf,
    pub skip_preflight: bool,
    pub skip_clean: bool,
    pub full_clean: bool,
    pub keep_going: bool,
    pub skip_run: bool,
    pub debug: bool,
}

/// Execute the full build pipeline
///
/// Flow:
/// 1. Initialize config and resolve the directory layout
/// 2. Toolchain preflight
/// 3. Artifact cleanup
/// 4. Wasm crate build (wasm-pack)
/// 5. Node dependency install (npm)
/// 6. TypeScript compilation (tsc, one invocation per source file)
/// 7. Bundling (npx webpack)
/// 8. Native binary run (cargo run)
///
/// Stages run strictly in this order. A failed stage halts the sequence
/// unless keep_going is set.
pub fn execute_build_pipeline(opts: BuildOptions) -> Result<()> {
    let start_time = Instant::now();

    // --- 1. Initialize Config ---
    let config = config::load(&opts.project).ok(); // Config is optional, allows pure CLI usage
    let pipeline_cfg = config.as_ref().and_then(|c| c.pipeline.clone());

    let layout = ProjectLayout::resolve(
        &opts.project,
        config.as_ref().and_then(|c| c.paths.as_ref()),
    )?;

    // Banner name priority: webforge.toml > package.json > root directory name
    let project_name = config
        .as_ref()
        .and_then(|c| c.project.as_ref())
        .map(|p| p.name.clone())
        .or_else(|| read_package_name(&layout.root))
        .unwrap_or_else(|| {
            layout
                .root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| layout.root.display().to_string())
        });

    println!(
        "{} Building project: {}",
        "[FORGE]".green().bold(),
        project_name
    );

    if opts.debug {
        println!("{} Project root: {}", "[DEBUG]".dimmed(), layout.root.display());
        println!("{} Crate dir:    {}", "[DEBUG]".dimmed(), layout.crate_dir.display());
        println!("{} TS dir:       {}", "[DEBUG]".dimmed(), layout.ts_dir.display());
        println!("{} TS out dir:   {}", "[DEBUG]".dimmed(), layout.ts_out_dir.display());
        println!("{} Dist dir:     {}", "[DEBUG]".dimmed(), layout.dist_dir.display());
    }

    let keep_going = opts.keep_going
        || pipeline_cfg
            .as_ref()
            .and_then(|p| p.keep_going)
            .unwrap_or(false);

    // --- 2. Toolchain Preflight ---
    let preflight_enabled = !opts.skip_preflight
        && pipeline_cfg
            .as_ref()
            .and_then(|p| p.preflight)
            .unwrap_or(true);

    if preflight_enabled {
        println!("{} Running toolchain preflight...", "[INFO]".cyan());
        resolver::preflight(&SystemToolResolver, &resolver::default_requirements())?;
    } else if opts.debug {
        println!("{} Preflight skipped.", "[DEBUG]".dimmed());
    }

    // --- 3. Artifact Cleanup ---
    if let Some(mode) = resolve_clean_mode(&opts, pipeline_cfg.as_ref())? {
        let removed = cleaner::clean_artifacts(&layout.dist_dir, mode)?;
        if removed > 0 {
            println!(
                "{} Cleaned {} stale artifact(s) from {}",
                "[INFO]".cyan(),
                removed,
                layout.dist_dir.display()
            );
        }
    } else if opts.debug {
        println!("{} Cleanup skipped.", "[DEBUG]".dimmed());
    }

    // --- 4. Wasm Crate Build ---
    println!("{} Stage: wasm-pack build", "[INFO]".cyan());
    let status = stage::run_stage(&layout.crate_dir, "wasm-pack", &["build"])?;
    finish_stage("wasm-pack build", status, keep_going)?;

    // --- 5. Node Dependencies ---
    println!("{} Stage: npm install", "[INFO]".cyan());
    let status = stage::run_stage(&layout.root, npm_program(), &["install"])?;
    finish_stage("npm install", status, keep_going)?;

    // --- 6. TypeScript Compilation ---
    // Each source file gets its own compiler invocation, sequentially, in
    // directory-listing order.
    let sources = stage::list_typescript_sources(&layout.ts_dir)?;
    let out_dir = layout.ts_out_dir.display().to_string();

    println!(
        "{} Stage: tsc ({} source file(s))",
        "[INFO]".cyan(),
        sources.len()
    );
    for source in &sources {
        let status = stage::run_stage(
            &layout.ts_dir,
            tsc_program(),
            &[source.as_str(), "--outDir", out_dir.as_str()],
        )?;
        finish_stage(&format!("tsc {source}"), status, keep_going)?;
    }

    // --- 7. Bundle ---
    println!("{} Stage: npx webpack", "[INFO]".cyan());
    let status = stage::run_stage(&layout.root, npx_program(), &["webpack"])?;
    finish_stage("npx webpack", status, keep_going)?;

    // --- 8. Run Native Binary ---
    let run_enabled = !opts.skip_run
        && pipeline_cfg
            .as_ref()
            .and_then(|p| p.run_binary)
            .unwrap_or(true);

    if run_enabled {
        println!("{} Stage: cargo run", "[INFO]".cyan());
        let status = stage::run_stage(&layout.root, "cargo", &["run"])?;
        finish_stage("cargo run", status, keep_going)?;
    } else if opts.debug {
        println!("{} Run stage skipped.", "[DEBUG]".dimmed());
    }

    let duration = start_time.elapsed();
    println!(
        "{} Pipeline completed in {:.2}s",
        "[DONE]".green().bold(),
        duration.as_secs_f64()
    );

    Ok(())
}

/// Cleanup mode priority: CLI flags > webforge.toml > incremental default.
fn resolve_clean_mode(
    opts: &BuildOptions,
    pipeline_cfg: Option<&PipelineConfig>,
) -> Result<Option<CleanMode>> {
    if opts.skip_clean {
        return Ok(None);
    }
    if opts.full_clean {
        return Ok(Some(CleanMode::Full));
    }

    match pipeline_cfg.and_then(|p| p.clean.as_deref()) {
        None | Some("incremental") => Ok(Some(CleanMode::Incremental)),
        Some("full") => Ok(Some(CleanMode::Full)),
        Some("none") => Ok(None),
        Some(other) => anyhow::bail!(
            "Unknown clean mode '{other}' in webforge.toml (expected incremental, full or none)"
        ),
    }
}
