//! # Config 模块
//!
//! Host 配置：日志级别 + 页面配置。
//!
//! 页面可以内联一段 JSON 覆盖默认值：
//!
//! ```html
//! <script type="application/json" id="page-config">
//!   { "log_level": "debug", "scroll": { "header_gap": 12 } }
//! </script>
//! ```
//!
//! 没有内联配置时使用默认值；配置无效时同样回退到默认值，并返回错误供调用方记录。

use page_runtime::{ConfigError, PageConfig};
use serde::{Deserialize, Serialize};
use tracing::Level;

/// 内联配置所在元素的 id
pub const INLINE_CONFIG_ID: &str = "page-config";

/// Host 配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    /// 日志级别（trace / debug / info / warn / error）
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// 页面交互配置
    #[serde(flatten)]
    pub page: PageConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            page: PageConfig::default(),
        }
    }
}

impl HostConfig {
    /// 从 JSON 文本解析并验证配置
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 从内联配置文本加载
    ///
    /// 返回最终使用的配置，以及导致回退到默认值的错误（如果有）。
    pub fn from_inline(text: Option<&str>) -> (Self, Option<ConfigError>) {
        let Some(text) = text.map(str::trim).filter(|text| !text.is_empty()) else {
            return (Self::default(), None);
        };
        match Self::from_json(text) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parse_level()?;
        self.page.validate()
    }

    /// 日志级别，无效时为 `INFO`
    pub fn max_level(&self) -> Level {
        self.parse_level().unwrap_or(Level::INFO)
    }

    fn parse_level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse::<Level>()
            .map_err(|err| ConfigError::InvalidValue {
                field: "log_level",
                message: err.to_string(),
            })
    }
}
