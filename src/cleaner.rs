use anyhow::{Context, Result};
use std::path::Path;

/// 产物清理模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanMode {
    /// 只删除产物目录直接子级中以 .wasm 结尾的文件，保留目录本身
    Incremental,

    /// 递归删除整个产物目录
    Full,
}

/// 清理产物目录
///
/// # 行为
/// - 目录不存在时为无操作，返回 Ok(0)，不会创建目录。
/// - Incremental：按文件名后缀匹配 ".wasm"，只处理普通文件，
///   子目录与其他文件一律不动。
/// - Full：整个目录连同全部内容一并删除。
///
/// # 返回
/// 被删除的条目数量（Full 模式下整个目录计为 1）。
pub fn clean_artifacts(dist_dir: &Path, mode: CleanMode) -> Result<usize> {
    if !dist_dir.exists() {
        return Ok(0);
    }

    match mode {
        CleanMode::Incremental => {
            let entries = std::fs::read_dir(dist_dir)
                .with_context(|| format!("Failed to read dist dir: {}", dist_dir.display()))?;

            let mut removed = 0;
            for entry in entries.flatten() {
                let is_wasm = entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.ends_with(".wasm"));

                if is_wasm && entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                    std::fs::remove_file(entry.path()).with_context(|| {
                        format!("Failed to remove artifact: {}", entry.path().display())
                    })?;
                    removed += 1;
                }
            }

            Ok(removed)
        }
        CleanMode::Full => {
            std::fs::remove_dir_all(dist_dir)
                .with_context(|| format!("Failed to remove dist dir: {}", dist_dir.display()))?;
            Ok(1)
        }
    }
}
