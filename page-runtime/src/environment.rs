//! # Environment 模块
//!
//! 宿主环境能力。由 Host 在启动时探测一次，之后不可变，
//! 显式传入每个行为的安装函数。

use serde::{Deserialize, Serialize};

/// 宿主环境能力
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// 用户请求减少动态效果（`prefers-reduced-motion: reduce`）
    pub reduced_motion: bool,
    /// 宿主支持 `IntersectionObserver`
    pub intersection_observer: bool,
}

impl Environment {
    /// 创建环境描述
    pub fn new(reduced_motion: bool, intersection_observer: bool) -> Self {
        Self {
            reduced_motion,
            intersection_observer,
        }
    }

    /// 是否应当播放动画
    pub fn animations_enabled(&self) -> bool {
        !self.reduced_motion
    }
}

impl Default for Environment {
    /// 现代浏览器的常见情况：支持观察器，不要求减少动效
    fn default() -> Self {
        Self::new(false, true)
    }
}
