pub mod config;
pub mod tasks;

use std::path::PathBuf;

use crate::error::{Result, TickError};

/// 获取 ~/.tick/ 目录路径
pub fn tick_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".tick"))
        .ok_or_else(|| TickError::config("cannot determine home directory"))
}

/// 确保 ~/.tick/ 目录存在
pub fn ensure_tick_dir() -> Result<PathBuf> {
    let dir = tick_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// 默认任务文件路径: ~/.tick/tasks.txt
pub fn default_tasks_path() -> Result<PathBuf> {
    Ok(tick_dir()?.join("tasks.txt"))
}
