//! # ScrollLock 模块
//!
//! 背景滚动锁（`body.style.overflow`）是所有模态框共享的唯一资源。
//!
//! 同一时刻最多一个模态框持有锁：其他模态框打开时请求会被拒绝，
//! 不支持叠加打开。已持有锁的模态框再次请求视为刷新内容，允许通过。

use serde::{Deserialize, Serialize};

use crate::error::ModalError;

/// 页面上的模态框
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModalKind {
    /// 简历预览
    Resume,
    /// 项目报告预览
    Report,
    /// 项目截图轮播
    Screenshots,
}

/// 背景滚动锁
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollLock {
    holder: Option<ModalKind>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前持有者
    pub fn holder(&self) -> Option<ModalKind> {
        self.holder
    }

    pub fn is_locked(&self) -> bool {
        self.holder.is_some()
    }

    /// 请求锁
    pub fn acquire(&mut self, kind: ModalKind) -> Result<(), ModalError> {
        match self.holder {
            Some(active) if active != kind => Err(ModalError::AlreadyOpen {
                requested: kind,
                active,
            }),
            _ => {
                self.holder = Some(kind);
                Ok(())
            }
        }
    }

    /// 释放锁；非持有者释放是 no-op，返回是否真正释放
    pub fn release(&mut self, kind: ModalKind) -> bool {
        if self.holder == Some(kind) {
            self.holder = None;
            true
        } else {
            false
        }
    }
}
