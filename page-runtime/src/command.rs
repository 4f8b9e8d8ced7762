//! # Command 模块
//!
//! 定义 Runtime 向 Host 发出的所有 DOM 修改指令。
//! Command 是 Runtime 修改页面的**唯一方式**。
//!
//! ## 设计原则
//!
//! - **声明式**：Command 描述"改什么"，不描述"怎么改"
//! - **无副作用**：Command 本身不执行任何操作
//! - **宿主无关**：不包含任何 `web_sys` 类型

use serde::{Deserialize, Serialize};

use crate::dom::NodeKey;

/// 滚动方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollBehavior {
    /// 平滑滚动动画
    Smooth,
    /// 直接跳转
    Instant,
}

/// Runtime 向 Host 发出的指令
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// 垂直滚动窗口到文档坐标 `top`
    ScrollTo { top: f64, behavior: ScrollBehavior },

    /// 添加 class
    AddClass { node: NodeKey, class: String },

    /// 移除 class
    RemoveClass { node: NodeKey, class: String },

    /// 设置属性（如 `src`、`href`）
    SetAttribute {
        node: NodeKey,
        name: String,
        value: String,
    },

    /// 替换文本内容
    SetText { node: NodeKey, text: String },

    /// 设置内联样式，空字符串表示清除
    SetStyle {
        node: NodeKey,
        property: String,
        value: String,
    },

    /// 禁止背景滚动（`body.style.overflow = "hidden"`）
    LockScroll,

    /// 恢复背景滚动
    UnlockScroll,

    /// 停止观察元素的可见性
    Unobserve { node: NodeKey },
}

impl Command {
    pub fn add_class(node: NodeKey, class: &str) -> Self {
        Self::AddClass {
            node,
            class: class.to_string(),
        }
    }

    pub fn remove_class(node: NodeKey, class: &str) -> Self {
        Self::RemoveClass {
            node,
            class: class.to_string(),
        }
    }

    pub fn set_attribute(node: NodeKey, name: &str, value: impl Into<String>) -> Self {
        Self::SetAttribute {
            node,
            name: name.to_string(),
            value: value.into(),
        }
    }

    pub fn set_text(node: NodeKey, text: impl Into<String>) -> Self {
        Self::SetText {
            node,
            text: text.into(),
        }
    }

    pub fn set_style(node: NodeKey, property: &str, value: impl Into<String>) -> Self {
        Self::SetStyle {
            node,
            property: property.to_string(),
            value: value.into(),
        }
    }
}

/// 一次事件分发的结果
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outcome {
    /// Host 是否需要调用 `event.preventDefault()`
    pub prevent_default: bool,
    /// 按顺序执行的指令
    pub commands: Vec<Command>,
}

impl Outcome {
    /// 什么都不做
    pub fn none() -> Self {
        Self::default()
    }

    /// 只产生指令，不拦截默认行为
    pub fn commands(commands: Vec<Command>) -> Self {
        Self {
            prevent_default: false,
            commands,
        }
    }

    /// 拦截默认行为并产生指令
    pub fn prevented(commands: Vec<Command>) -> Self {
        Self {
            prevent_default: true,
            commands,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.prevent_default && self.commands.is_empty()
    }

    /// 合并另一个结果（指令按顺序追加）
    pub fn merge(&mut self, other: Outcome) {
        self.prevent_default |= other.prevent_default;
        self.commands.extend(other.commands);
    }
}
