//! 转换器配置管理模块
//!
//! 负责加载和验证 `wslconv` 的 TOML 配置文件

use std::fs;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::path_convert::ConversionTarget;
use crate::platform::{InteropProbe, WSL_INTEROP_MARKER};

const APP_DIR: &str = "wslconv";
const CONFIG_FILE: &str = "config.toml";

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("无法获取配置目录")]
    ConfigDirNotFound,

    #[error("读取配置文件失败 {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("解析配置文件失败 {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("无效的日志级别: {0}")]
    InvalidLogLevel(String),
}

// ==================== 数据结构 ====================

/// 转换器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// 命令行未指定目标时使用的转换目标
    pub default_target: ConversionTarget,

    /// WSL 互操作标记文件
    pub interop_marker: PathBuf,

    /// 日志级别（error | warn | info | debug | trace | off）
    pub log_level: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            default_target: ConversionTarget::Auto,
            interop_marker: PathBuf::from(WSL_INTEROP_MARKER),
            log_level: "warn".to_string(),
        }
    }
}

// ==================== 加载 ====================

impl ConverterConfig {
    /// 默认配置路径
    ///
    /// # 路径规则
    /// - Linux:   ~/.config/wslconv/config.toml
    /// - macOS:   ~/Library/Application Support/wslconv/config.toml
    /// - Windows: %APPDATA%\wslconv\config.toml
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    /// 从文件加载配置
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        // 提前暴露无效的日志级别
        config.log_level_filter()?;

        log::debug!("[Config] 已加载配置: {:?}", path);
        Ok(config)
    }

    /// 文件不存在时使用默认配置
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("[Config] 配置文件不存在，使用默认配置: {:?}", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn interop_probe(&self) -> InteropProbe {
        InteropProbe::new(&self.interop_marker)
    }
}
