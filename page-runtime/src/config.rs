//! # Config 模块
//!
//! 页面交互配置，集中管理所有可调整的数值和默认资源路径。
//!
//! ## 配置优先级
//!
//! 1. 页面内联 JSON（`#page-config`，由 Host 读取）
//! 2. 默认值
//!
//! DOM 钩子（id / class）是页面结构的一部分，不在此处配置，见 [`crate::selectors`]。

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// 页面配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// 锚点平滑滚动
    #[serde(default)]
    pub scroll: ScrollConfig,

    /// 滚动显现动画
    #[serde(default)]
    pub reveal: RevealConfig,

    /// 卡片倾斜效果
    #[serde(default)]
    pub tilt: TiltConfig,

    /// 简历预览
    #[serde(default)]
    pub resume: ResumeConfig,

    /// 项目报告预览
    #[serde(default)]
    pub report: ReportConfig,
}

/// 锚点滚动配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// 目标元素与固定页头之间的间距（px）
    #[serde(default = "default_header_gap")]
    pub header_gap: f64,
}

/// 滚动显现配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// 元素进入视口的面积比例达到该值时显现
    #[serde(default = "default_reveal_threshold")]
    pub threshold: f64,
}

/// 倾斜效果配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TiltConfig {
    /// 最大倾斜角度（度）
    #[serde(default = "default_max_tilt_deg")]
    pub max_tilt_deg: f64,
}

/// 简历预览配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeConfig {
    /// 触发按钮未指定 `data-resume-src` 时使用的文件
    #[serde(default = "default_resume_src")]
    pub default_src: String,

    /// 触发按钮未指定 `data-resume-title` 时使用的标题
    #[serde(default = "default_resume_title")]
    pub default_title: String,
}

/// 项目报告预览配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// 触发按钮未指定 `data-report-src` 时使用的文件
    #[serde(default = "default_report_src")]
    pub default_src: String,

    /// 触发按钮未指定 `data-report-title` 时使用的标题
    #[serde(default = "default_report_title")]
    pub default_title: String,

    /// 预览地址附加的 PDF 查看器片段（不含 `#`）
    ///
    /// 下载链接始终使用不带片段的地址。
    #[serde(default = "default_zoom_fragment")]
    pub zoom_fragment: String,
}

// 默认值函数
fn default_header_gap() -> f64 {
    8.0
}

fn default_reveal_threshold() -> f64 {
    0.15
}

fn default_max_tilt_deg() -> f64 {
    10.0
}

fn default_resume_src() -> String {
    "Resume/Analytics Resume.pdf".to_string()
}

fn default_resume_title() -> String {
    "Resume".to_string()
}

fn default_report_src() -> String {
    "Project Report/Project Recruit Report (1).pdf".to_string()
}

fn default_report_title() -> String {
    "Project Report".to_string()
}

fn default_zoom_fragment() -> String {
    "zoom=page-width".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollConfig::default(),
            reveal: RevealConfig::default(),
            tilt: TiltConfig::default(),
            resume: ResumeConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_gap: default_header_gap(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_reveal_threshold(),
        }
    }
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_tilt_deg: default_max_tilt_deg(),
        }
    }
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            default_src: default_resume_src(),
            default_title: default_resume_title(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_src: default_report_src(),
            default_title: default_report_title(),
            zoom_fragment: default_zoom_fragment(),
        }
    }
}

impl PageConfig {
    /// 从 JSON 文本解析并验证配置
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        let gap = self.scroll.header_gap;
        if !gap.is_finite() || gap < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "scroll.header_gap",
                message: format!("必须是非负数，实际为 {gap}"),
            });
        }

        let threshold = self.reveal.threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "reveal.threshold",
                message: format!("必须位于 (0, 1] 区间，实际为 {threshold}"),
            });
        }

        let tilt = self.tilt.max_tilt_deg;
        if !tilt.is_finite() || tilt < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "tilt.max_tilt_deg",
                message: format!("必须是非负数，实际为 {tilt}"),
            });
        }

        Ok(())
    }
}
