//! # Input 模块
//!
//! 定义 Host 向 Runtime 传递的页面事件。
//!
//! ## 设计说明
//!
//! - `PageEvent` 是 Host 从浏览器事件中提取出的语义化输入
//! - Runtime 不持有任何浏览器对象，事件目标一律用 [`NodeKey`] 表示
//! - Host 只需为行为声明的 [`Subscription`](crate::Subscription) 注册监听

use serde::{Deserialize, Serialize};

use crate::dom::NodeKey;

/// 与交互相关的按键
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    /// 其他按键，保留 `KeyboardEvent.key` 原文
    Other(String),
}

impl From<&str> for Key {
    /// 按 `KeyboardEvent.key` 的取值解析
    fn from(key: &str) -> Self {
        match key {
            "Escape" => Self::Escape,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Host 向 Runtime 传递的事件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PageEvent {
    /// 文档内的点击，`target` 为事件原始目标元素
    Click { target: NodeKey },

    /// 文档上的按键
    KeyDown { key: Key },

    /// 被观察元素的可见性变化
    Intersection { node: NodeKey, is_intersecting: bool },

    /// 指针在元素上移动（视口坐标）
    PointerMove {
        node: NodeKey,
        client_x: f64,
        client_y: f64,
    },

    /// 指针离开元素
    PointerLeave { node: NodeKey },

    /// 窗口尺寸变化
    Resize,

    /// Host 无法建立可见性观察（例如 `IntersectionObserver` 构造失败）
    ObserverUnavailable,
}

impl PageEvent {
    /// 创建点击事件
    pub fn click(target: NodeKey) -> Self {
        Self::Click { target }
    }

    /// 创建按键事件
    pub fn key(key: impl Into<Key>) -> Self {
        Self::KeyDown { key: key.into() }
    }

    /// 创建进入视口事件
    pub fn intersecting(node: NodeKey) -> Self {
        Self::Intersection {
            node,
            is_intersecting: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_parsing() {
        assert_eq!(Key::from("Escape"), Key::Escape);
        assert_eq!(Key::from("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from("Enter"), Key::Other("Enter".to_string()));
        // KeyboardEvent.key 区分大小写
        assert_eq!(Key::from("escape"), Key::Other("escape".to_string()));
    }

    #[test]
    fn test_event_creation() {
        assert_eq!(
            PageEvent::key("Escape"),
            PageEvent::KeyDown { key: Key::Escape }
        );
        assert_eq!(
            PageEvent::intersecting(NodeKey(3)),
            PageEvent::Intersection {
                node: NodeKey(3),
                is_intersecting: true
            }
        );
    }

    #[test]
    fn test_event_serialization() {
        let event = PageEvent::PointerMove {
            node: NodeKey(1),
            client_x: 10.0,
            client_y: 20.5,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: PageEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
