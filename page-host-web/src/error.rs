//! Host 错误类型

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("无法获取 window")]
    MissingWindow,

    #[error("无法获取 document")]
    MissingDocument,

    #[error("创建 IntersectionObserver 失败: {0}")]
    Observer(String),
}

impl From<HostError> for JsValue {
    fn from(err: HostError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type HostResult<T> = Result<T, HostError>;
