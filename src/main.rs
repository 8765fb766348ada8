use anyhow::Result;
use clap::Parser;
use colored::*;
use webforge_cli::cli::{Cli, Commands};
use webforge_cli::pipelines;

/// CLI 主入口
///
/// - 负责参数解析
/// - 捕获错误并标准输出
/// - 调度流水线主流程
fn main() -> Result<()> {
    let cli = Cli::parse();

    // 捕获顶层错误，格式化输出，避免展示 Rust 栈信息
    if let Err(e) = run(cli) {
        eprintln!("{} {}", "[ERROR]".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// 执行业务主流程
fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Build {
            project,
            skip_preflight,
            skip_clean,
            full_clean,
            keep_going,
            skip_run,
            debug,
        } => pipelines::execute_build_pipeline(pipelines::BuildOptions {
            project,
            skip_preflight,
            skip_clean,
            full_clean,
            keep_going,
            skip_run,
            debug,
        }),
        Commands::Check { project } => pipelines::execute_check_pipeline(&project),
        Commands::Clean { project, full } => pipelines::execute_clean_pipeline(&project, full),
    }
}
