use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Outcome of a single pipeline stage.
///
/// Stages report instead of bailing so the caller owns the decision to
/// halt the sequence or keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    /// The subprocess exited with code 0.
    Completed,

    /// The subprocess exited with the given non-zero code.
    Failed(i32),

    /// The subprocess was terminated without an exit code (e.g. by signal).
    Signaled,
}

impl StageStatus {
    pub fn success(self) -> bool {
        matches!(self, StageStatus::Completed)
    }

    fn from_exit(status: ExitStatus) -> Self {
        if status.success() {
            StageStatus::Completed
        } else {
            match status.code() {
                Some(code) => StageStatus::Failed(code),
                None => StageStatus::Signaled,
            }
        }
    }
}

/// Run one external command as a pipeline stage.
///
/// The command inherits the parent's standard streams, so toolchain output
/// reaches the console untouched. The stage directory is passed to the
/// child via `current_dir`; the parent process never changes its own
/// working directory.
///
/// # Errors
/// Only spawn failure (unresolvable program, unreadable directory) is an
/// error; a non-zero exit is a normal `StageStatus::Failed` result.
pub fn run_stage(dir: &Path, program: &str, args: &[&str]) -> Result<StageStatus> {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to spawn '{}' in {}", program, dir.display()))?;

    Ok(StageStatus::from_exit(status))
}

/// List the TypeScript sources to compile: direct-child files of `ts_dir`
/// whose name ends in ".ts", in directory-listing order (not sorted).
///
/// Subdirectories are not descended into; a directory named `*.ts` is
/// skipped.
pub fn list_typescript_sources(ts_dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(ts_dir)
        .with_context(|| format!("Failed to read TypeScript source dir: {}", ts_dir.display()))?;

    let mut sources = Vec::new();
    for entry in entries.flatten() {
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(".ts") {
                sources.push(name.to_string());
            }
        }
    }

    Ok(sources)
}

pub fn npm_program() -> &'static str {
    if cfg!(target_os = "windows") {
        "npm.cmd"
    } else {
        "npm"
    }
}

pub fn npx_program() -> &'static str {
    if cfg!(target_os = "windows") {
        "npx.cmd"
    } else {
        "npx"
    }
}

pub fn tsc_program() -> &'static str {
    if cfg!(target_os = "windows") {
        "tsc.cmd"
    } else {
        "tsc"
    }
}
