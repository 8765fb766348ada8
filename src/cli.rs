use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// 主程序的命令行接口（CLI）结构体
/// 用于解析命令行参数并提供命令的处理
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// 子命令部分，包含不同的命令类型
    #[command(subcommand)]
    pub command: Commands,
}

/// 所有支持的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Run the full build pipeline (wasm-pack -> npm -> tsc -> webpack -> cargo run)
    Build {
        /// 项目根目录。默认使用当前目录。
        #[arg(short, long, default_value = ".")]
        project: PathBuf,

        /// 跳过环境预检阶段
        #[arg(long, default_value_t = false)]
        skip_preflight: bool,

        /// 跳过产物清理阶段
        #[arg(long, default_value_t = false)]
        skip_clean: bool,

        /// 清理模式：递归删除整个产物目录（默认只删除 .wasm 文件）
        #[arg(long, default_value_t = false)]
        full_clean: bool,

        /// 宽容模式：阶段失败后继续执行后续阶段
        #[arg(long, default_value_t = false)]
        keep_going: bool,

        /// 跳过最后的 `cargo run` 阶段
        #[arg(long, default_value_t = false)]
        skip_run: bool,

        /// 调试模式：输出解析后的目录布局与跳过原因
        #[arg(long, default_value_t = false)]
        debug: bool,
    },

    /// Check that all required toolchains are resolvable
    Check {
        /// 项目根目录。默认使用当前目录。
        #[arg(short, long, default_value = ".")]
        project: PathBuf,
    },

    /// Remove build artifacts from the dist directory
    Clean {
        /// 项目根目录。默认使用当前目录。
        #[arg(short, long, default_value = ".")]
        project: PathBuf,

        /// 递归删除整个产物目录，而非只删除 .wasm 文件
        #[arg(long, default_value_t = false)]
        full: bool,
    },
}
