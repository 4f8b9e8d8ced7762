//! # Page Runtime
//!
//! 作品集网站页面交互的核心逻辑库。
//!
//! ## 架构概述
//!
//! `page-runtime` 是纯逻辑核心，不依赖浏览器。
//! 它通过 **指令驱动模式** 与宿主层（Host）通信：
//!
//! ```text
//! Host                                   Runtime
//!   │                                       │
//!   │──── PageEvent ───────────────────────►│
//!   │                                       │ dispatch(&dyn Dom, event)
//!   │◄─── Outcome { prevent_default, Vec<Command> } ──│
//!   │                                       │
//! ```
//!
//! Runtime 通过 [`Dom`] 读取页面，所有修改都以 [`Command`] 返回，由 Host 执行。
//!
//! ## 核心类型
//!
//! - [`PageController`]：安装并驱动所有行为
//! - [`PageEvent`]：Host 向 Runtime 传递的事件
//! - [`Command`]：Runtime 向 Host 发出的 DOM 修改指令
//! - [`Subscription`]：Host 需要注册的事件来源
//! - [`Environment`]：启动时探测的宿主能力（减少动效、可见性观察）
//! - [`PageConfig`]：可调整的数值和默认资源
//!
//! ## 使用示例
//!
//! ```ignore
//! use page_runtime::{Environment, PageConfig, PageController};
//!
//! let (mut controller, initial) = PageController::install(&dom, env, &PageConfig::default());
//! host.apply(initial);
//!
//! for subscription in controller.subscriptions() {
//!     host.listen(subscription);
//! }
//!
//! // 每个浏览器事件
//! let outcome = controller.dispatch(&dom, &event);
//! if outcome.prevent_default {
//!     raw_event.prevent_default();
//! }
//! host.apply(outcome.commands);
//! ```
//!
//! ## 模块结构
//!
//! - [`behavior`]：各页面交互（锚点滚动、滚动显现、倾斜、预览、轮播）
//! - [`controller`]：控制器
//! - [`command`] / [`input`]：指令与事件
//! - [`dom`] / [`memory`]：页面查询接口与内存实现
//! - [`config`] / [`environment`] / [`selectors`]：配置、宿主能力、页面结构约定
//! - [`scroll_lock`]：模态框共享的背景滚动锁
//! - [`uri`]：`encodeURI` 等价实现
//! - [`error`]：错误类型定义

pub mod behavior;
pub mod command;
pub mod config;
pub mod controller;
pub mod dom;
pub mod environment;
pub mod error;
pub mod input;
pub mod memory;
pub mod scroll_lock;
pub mod selectors;
pub mod uri;

// 重导出核心类型
pub use behavior::{Behavior, Subscription};
pub use behavior::carousel::{CarouselState, Slides, parse_image_list};
pub use behavior::preview::ModalState;
pub use command::{Command, Outcome, ScrollBehavior};
pub use config::PageConfig;
pub use controller::PageController;
pub use dom::{Dom, NodeKey, Rect};
pub use environment::Environment;
pub use error::{ConfigError, ModalError};
pub use input::{Key, PageEvent};
pub use memory::{Element, MemoryDom};
pub use scroll_lock::{ModalKind, ScrollLock};
pub use uri::encode_uri;
