//! 配置管理系统
//!
//! 提供路由器配置，支持 TOML 文件和环境变量覆盖。

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 解析错误
    #[error("解析配置文件失败: {0}")]
    Parse(String),

    /// 验证错误
    #[error("配置验证失败: {0}")]
    Validation(String),

    /// 环境变量错误
    #[error("环境变量解析失败: {0}")]
    EnvVar(String),
}

/// 配置 Result 类型
pub type Result<T> = std::result::Result<T, ConfigError>;

/// 路由器配置
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouterConfig {
    /// 路由前缀，拼接在每个注册路径和查找路径之前
    #[serde(default)]
    pub prefix: String,

    /// 外层管道约定的"未处理"哨兵状态码
    #[serde(default = "default_unhandled_status")]
    pub unhandled_status: u16,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            unhandled_status: default_unhandled_status(),
        }
    }
}

impl RouterConfig {
    /// 从 TOML 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Parse(format!("读取配置文件失败: {}", e)))?;

        let config: RouterConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("解析配置文件失败: {}", e)))?;

        Ok(config)
    }

    /// 从环境变量加载配置并覆盖
    ///
    /// 支持的环境变量：
    /// - CUEHTTP_PREFIX: 路由前缀
    /// - CUEHTTP_UNHANDLED_STATUS: 未处理哨兵状态码
    pub fn load_with_env_override(mut self) -> Result<Self> {
        // 路由前缀
        if let Ok(prefix) = std::env::var("CUEHTTP_PREFIX") {
            self.prefix = prefix;
        }

        // 哨兵状态码
        if let Ok(status_str) = std::env::var("CUEHTTP_UNHANDLED_STATUS") {
            self.unhandled_status = status_str.parse().map_err(|_| {
                ConfigError::EnvVar("CUEHTTP_UNHANDLED_STATUS 必须是有效的 u16 数字".to_string())
            })?;
        }

        Ok(self)
    }

    /// 从文件加载并应用环境变量覆盖
    pub fn from_file_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file(path)?.load_with_env_override()
    }

    /// 验证配置是否有效
    pub fn validate(&self) -> Result<()> {
        // 状态码验证
        if !(100..=599).contains(&self.unhandled_status) {
            return Err(ConfigError::Validation(
                "哨兵状态码必须在 100..=599 范围内".to_string(),
            ));
        }

        // 前缀验证
        if !self.prefix.is_empty() && !self.prefix.starts_with('/') {
            return Err(ConfigError::Validation(
                "非空前缀必须以 / 开头".to_string(),
            ));
        }

        Ok(())
    }

    /// 获取配置摘要信息
    pub fn summary(&self) -> String {
        format!(
            "cuehttp 路由器配置:\n  前缀: {:?}\n  哨兵状态码: {}",
            self.prefix, self.unhandled_status
        )
    }
}

// 默认值函数
fn default_unhandled_status() -> u16 {
    404
}
