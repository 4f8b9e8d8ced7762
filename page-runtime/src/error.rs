//! # Error 模块
//!
//! 定义 page-runtime 中使用的错误类型。
//!
//! 这些错误只在 runtime 内部流转：到达事件边界时会被记录日志，
//! 然后降级为 no-op，页面上永远不会出现错误提示。

use thiserror::Error;

use crate::scroll_lock::ModalKind;

/// 配置错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// JSON 解析失败
    #[error("配置解析失败: {0}")]
    Parse(String),

    /// 配置值无效
    #[error("配置项 '{field}' 的值无效 - {message}")]
    InvalidValue { field: &'static str, message: String },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// 模态框错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalError {
    /// 已有其他模态框持有滚动锁
    #[error("无法打开 {requested:?}：{active:?} 已处于打开状态")]
    AlreadyOpen {
        requested: ModalKind,
        active: ModalKind,
    },
}
