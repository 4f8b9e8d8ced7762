//! # Behavior 模块
//!
//! 页面上每一种交互都是一个独立的 [`Behavior`]。
//!
//! ## 生命周期
//!
//! ```text
//! install(dom, env, config) -> Setup
//!     │  缺少必需元素：不安装（no-op）
//!     │  否则：Box<dyn Behavior> + 初始指令
//!     ▼
//! subscriptions()   Host 据此注册浏览器监听
//!     ▼
//! handle(cx, event) -> Outcome   每个事件调用一次
//! ```
//!
//! ## 模块结构
//!
//! - [`anchor`]：锚点平滑滚动
//! - [`reveal`]：滚动显现
//! - [`tilt`]：卡片倾斜
//! - [`preview`]：文档预览模态框（简历、项目报告）
//! - [`carousel`]：项目截图轮播模态框

pub mod anchor;
pub mod carousel;
pub mod preview;
pub mod reveal;
pub mod tilt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::command::{Command, Outcome};
use crate::dom::{Dom, NodeKey};
use crate::input::PageEvent;
use crate::scroll_lock::ScrollLock;

/// 行为需要 Host 注册的事件来源
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Subscription {
    /// `document` 上的 `click`（需要能够 `preventDefault`）
    DocumentClick,
    /// `document` 上的 `keydown`
    DocumentKeyDown,
    /// 以给定阈值观察元素的可见性
    Observe { nodes: Vec<NodeKey>, threshold: f64 },
    /// 元素上的 `pointermove` / `pointerleave`
    Pointer { node: NodeKey },
    /// `window` 上的 `resize`
    WindowResize,
}

/// 事件处理上下文
pub struct Context<'a> {
    /// 页面查询
    pub dom: &'a dyn Dom,
    /// 模态框共享的背景滚动锁
    pub lock: &'a mut ScrollLock,
}

/// 一种页面交互
pub trait Behavior {
    /// 日志中使用的名称
    fn name(&self) -> &'static str;

    /// 需要的事件来源
    fn subscriptions(&self) -> Vec<Subscription>;

    /// 处理事件；与自身无关的事件返回 [`Outcome::none`]
    fn handle(&mut self, cx: &mut Context<'_>, event: &PageEvent) -> Outcome;
}

/// 安装结果
pub struct Setup {
    /// 安装成功的行为；`None` 表示该功能不适用于当前页面
    pub behavior: Option<Box<dyn Behavior>>,
    /// 安装时立即执行的指令
    pub commands: Vec<Command>,
}

impl Setup {
    /// 安装行为
    pub fn installed(behavior: impl Behavior + 'static) -> Self {
        Self {
            behavior: Some(Box::new(behavior)),
            commands: Vec::new(),
        }
    }

    /// 不安装行为，只执行一次性指令
    pub fn commands_only(commands: Vec<Command>) -> Self {
        Self {
            behavior: None,
            commands,
        }
    }

    /// 功能不适用于当前页面
    pub fn skipped(name: &'static str, reason: &str) -> Self {
        debug!(behavior = name, reason, "行为未安装");
        Self {
            behavior: None,
            commands: Vec::new(),
        }
    }
}
