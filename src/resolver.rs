use anyhow::{Context, Result};
use colored::*;
use std::process::Command;

use crate::stage::{npm_program, tsc_program};

/// An external executable the pipeline depends on.
///
/// `program` is the platform-adjusted name actually probed on the path;
/// `name` is what the user sees in log output. When `auto_install` is set,
/// a missing tool triggers that command instead of failing the preflight.
#[derive(Debug, Clone)]
pub struct ToolRequirement {
    pub name: &'static str,
    pub program: &'static str,
    pub install_hint: &'static str,
    pub auto_install: Option<&'static [&'static str]>,
}

/// Tool resolution capability.
///
/// The preflight only talks to this trait, so tests can substitute a mock
/// instead of depending on the host toolchain.
pub trait ToolResolver {
    /// Probe whether `program` is resolvable on the system path.
    ///
    /// # Behavior
    /// - Use a lightweight command like `--version` to check presence.
    /// - Output is swallowed; only resolvability matters.
    fn is_available(&self, program: &str) -> bool;

    /// Run an install command for a missing tool.
    ///
    /// # Returns
    /// - Ok(true) if the install command exited successfully.
    /// - Ok(false) if it ran but reported failure.
    /// - Err if the command could not be spawned at all.
    fn run_install(&self, argv: &[&str]) -> Result<bool>;
}

/// Resolver backed by the real system path.
pub struct SystemToolResolver;

impl ToolResolver for SystemToolResolver {
    fn is_available(&self, program: &str) -> bool {
        Command::new(program).arg("--version").output().is_ok()
    }

    fn run_install(&self, argv: &[&str]) -> Result<bool> {
        let status = Command::new(argv[0])
            .args(&argv[1..])
            .status()
            .with_context(|| format!("Failed to spawn install command: {}", argv.join(" ")))?;
        Ok(status.success())
    }
}

/// The toolchains the default pipeline shells out to, in probe order.
///
/// wasm-pack is the one tool with an install fallback: it is itself
/// distributed through cargo, which is checked first.
pub fn default_requirements() -> Vec<ToolRequirement> {
    vec![
        ToolRequirement {
            name: "cargo",
            program: "cargo",
            install_hint: "Install Cargo before continuing",
            auto_install: None,
        },
        ToolRequirement {
            name: "npm",
            program: npm_program(),
            install_hint: "Install npm before continuing",
            auto_install: None,
        },
        ToolRequirement {
            name: "tsc",
            program: tsc_program(),
            install_hint: "Install TypeScript before continuing: `npm install -g typescript`",
            auto_install: None,
        },
        ToolRequirement {
            name: "wasm-pack",
            program: "wasm-pack",
            install_hint: "Install wasm-pack before continuing: `cargo install wasm-pack`",
            auto_install: Some(&["cargo", "install", "wasm-pack"]),
        },
    ]
}

/// Probe every requirement in order, failing fast on the first missing
/// tool that has no install fallback.
pub fn preflight(resolver: &dyn ToolResolver, requirements: &[ToolRequirement]) -> Result<()> {
    for req in requirements {
        if resolver.is_available(req.program) {
            continue;
        }

        match req.auto_install {
            Some(argv) => {
                println!(
                    "{} {} not found, attempting: {}",
                    "[WARN]".yellow(),
                    req.name,
                    argv.join(" ")
                );

                if !resolver.run_install(argv)? {
                    anyhow::bail!(
                        "Automatic install of {} failed. {}",
                        req.name,
                        req.install_hint
                    );
                }
            }
            None => anyhow::bail!("{}", req.install_hint),
        }
    }

    Ok(())
}
