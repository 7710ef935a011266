//! 应用配置持久化

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::Result;

use super::{ensure_tick_dir, tick_dir};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// 任务文件路径（未设置时使用 ~/.tick/tasks.txt）
    #[serde(default)]
    pub tasks_file: Option<PathBuf>,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Dark".to_string(),
        }
    }
}

/// 获取配置文件路径
fn config_path() -> Result<PathBuf> {
    Ok(tick_dir()?.join("config.toml"))
}

/// 解析配置内容
fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

/// 加载配置（不存在或损坏则返回默认值）
pub fn load_config() -> Config {
    let Ok(path) = config_path() else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    fs::read_to_string(&path)
        .ok()
        .and_then(|s| parse_config(&s).ok())
        .unwrap_or_default()
}

/// 保存配置
pub fn save_config(config: &Config) -> Result<()> {
    // 确保 ~/.tick 目录存在
    ensure_tick_dir()?;

    let path = config_path()?;
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config = parse_config("tasks_file = \"/tmp/todo.txt\"\n").unwrap();
        assert_eq!(config.tasks_file, Some(PathBuf::from("/tmp/todo.txt")));
        assert_eq!(config.theme.name, "Dark");
    }

    #[test]
    fn test_parse_config_rejects_garbage() {
        assert!(parse_config("tasks_file = [1, 2]").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.tasks_file.is_none());
        assert_eq!(config.theme.name, "Dark");
    }
}
