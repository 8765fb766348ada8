use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// 项目配置结构体
/// 对应项目根目录下的 webforge.toml 文件
#[derive(Deserialize, Debug, Clone)]
pub struct ProjectConfig {
    pub project: Option<ProjectInfo>,
    pub paths: Option<PathsConfig>,
    pub pipeline: Option<PipelineConfig>,
}

/// 项目基础元数据
#[derive(Deserialize, Debug, Clone)]
pub struct ProjectInfo {
    /// 项目名称，仅用于构建横幅展示
    pub name: String,
}

/// 目录布局配置
/// 所有路径均相对于项目根目录解析
#[derive(Deserialize, Debug, Clone)]
pub struct PathsConfig {
    /// Wasm crate 所在目录
    pub crate_dir: Option<String>,

    /// TypeScript 源码目录
    pub ts_dir: Option<String>,

    /// TypeScript 编译输出目录
    pub ts_out_dir: Option<String>,

    /// 产物目录，清理阶段的作用对象
    pub dist_dir: Option<String>,
}

/// 流水线行为配置
/// 命令行标志优先于此处的配置值
#[derive(Deserialize, Debug, Clone)]
pub struct PipelineConfig {
    /// 是否执行环境预检
    pub preflight: Option<bool>,

    /// 清理模式 ("incremental" | "full" | "none")
    pub clean: Option<String>,

    /// 阶段失败后是否继续执行
    pub keep_going: Option<bool>,

    /// 是否执行最后的 `cargo run` 阶段
    pub run_binary: Option<bool>,
}

/// 加载并解析项目根目录下的 webforge.toml 配置文件
///
/// # 边界说明
/// - 配置文件可选；文件不存在时返回错误，调用方用 .ok() 降级为默认行为
/// - 文件大小预期在 KB 级别，采用同步 IO 读取
pub fn load(root: &Path) -> Result<ProjectConfig> {
    let config_path = root.join("webforge.toml");

    if !config_path.exists() {
        anyhow::bail!(
            "Configuration file 'webforge.toml' not found in {}.",
            root.display()
        );
    }

    let content = fs::read_to_string(&config_path).context("Failed to read webforge.toml file")?;

    let config: ProjectConfig =
        toml::from_str(&content).context("Failed to parse webforge.toml content")?;

    Ok(config)
}
