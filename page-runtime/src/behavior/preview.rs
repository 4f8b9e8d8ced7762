//! 文档预览模态框
//!
//! 简历与项目报告共用同一套打开 / 关闭逻辑：
//!
//! ```text
//! Closed ──trigger click──► Open        frame.src / download.href / title / is-open / LockScroll
//! Open   ──close | backdrop | Escape──► Closed   frame.src = "" / 移除 is-open / UnlockScroll
//! ```
//!
//! 两者的差异（触发方式、data 属性、默认值、预览片段）由 [`PreviewProfile`] 描述。

use tracing::debug;

use crate::command::{Command, Outcome};
use crate::config::PageConfig;
use crate::dom::{Dom, NodeKey};
use crate::environment::Environment;
use crate::input::{Key, PageEvent};
use crate::scroll_lock::{ModalKind, ScrollLock};
use crate::selectors::*;
use crate::uri::encode_uri;

use super::{Behavior, Context, Setup, Subscription};

/// 模态框状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// 预览模态框的差异部分
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewProfile {
    /// 日志中使用的行为名称
    pub name: &'static str,
    pub kind: ModalKind,
    pub src_attr: &'static str,
    pub title_attr: &'static str,
    pub default_src: String,
    pub default_title: String,
    /// 预览地址附加的片段（不含 `#`），下载地址不附加
    pub view_fragment: Option<String>,
}

/// 预览模态框用到的元素
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewElements {
    pub triggers: Vec<NodeKey>,
    pub modal: NodeKey,
    pub frame: NodeKey,
    pub close: Option<NodeKey>,
    pub backdrop: Option<NodeKey>,
    pub download: Option<NodeKey>,
    pub title: Option<NodeKey>,
}

pub struct PreviewModal {
    profile: PreviewProfile,
    elements: PreviewElements,
    state: ModalState,
}

/// 安装简历预览：页面上所有 `.resume-open-btn` 都是触发器
pub fn install_resume(dom: &dyn Dom, _env: Environment, config: &PageConfig) -> Setup {
    let triggers = dom.elements_by_class(RESUME_TRIGGER_CLASS);
    if triggers.is_empty() {
        return Setup::skipped("resume-preview", "页面没有 .resume-open-btn");
    }
    let Some(elements) = locate(
        dom,
        triggers,
        RESUME_MODAL_ID,
        RESUME_FRAME_ID,
        RESUME_CLOSE_ID,
        RESUME_DOWNLOAD_ID,
        RESUME_TITLE_ID,
    ) else {
        return Setup::skipped("resume-preview", "缺少 #resumeModal 或 #resumeFrame");
    };

    // data-resume-* 与报告一样去除首尾空白，空白值回退到默认值
    let profile = PreviewProfile {
        name: "resume-preview",
        kind: ModalKind::Resume,
        src_attr: RESUME_SRC_ATTR,
        title_attr: RESUME_TITLE_ATTR,
        default_src: config.resume.default_src.clone(),
        default_title: config.resume.default_title.clone(),
        view_fragment: None,
    };
    Setup::installed(PreviewModal::new(profile, elements))
}

/// 安装项目报告预览：只使用第一个 `.project-report-open-btn`
pub fn install_report(dom: &dyn Dom, _env: Environment, config: &PageConfig) -> Setup {
    let Some(trigger) = dom.first_by_class(REPORT_TRIGGER_CLASS) else {
        return Setup::skipped("report-preview", "页面没有 .project-report-open-btn");
    };
    let Some(elements) = locate(
        dom,
        vec![trigger],
        REPORT_MODAL_ID,
        REPORT_FRAME_ID,
        REPORT_CLOSE_ID,
        REPORT_DOWNLOAD_ID,
        REPORT_TITLE_ID,
    ) else {
        return Setup::skipped("report-preview", "缺少 #projectReportModal 或 #projectReportFrame");
    };

    let fragment = config.report.zoom_fragment.trim();
    let profile = PreviewProfile {
        name: "report-preview",
        kind: ModalKind::Report,
        src_attr: REPORT_SRC_ATTR,
        title_attr: REPORT_TITLE_ATTR,
        default_src: config.report.default_src.clone(),
        default_title: config.report.default_title.clone(),
        view_fragment: (!fragment.is_empty()).then(|| fragment.to_string()),
    };
    Setup::installed(PreviewModal::new(profile, elements))
}

fn locate(
    dom: &dyn Dom,
    triggers: Vec<NodeKey>,
    modal_id: &str,
    frame_id: &str,
    close_id: &str,
    download_id: &str,
    title_id: &str,
) -> Option<PreviewElements> {
    let modal = dom.element_by_id(modal_id)?;
    let frame = dom.element_by_id(frame_id)?;
    Some(PreviewElements {
        triggers,
        modal,
        frame,
        close: dom.element_by_id(close_id),
        backdrop: dom.descendant_by_class(modal, MODAL_BACKDROP_CLASS),
        download: dom.element_by_id(download_id),
        title: dom.element_by_id(title_id),
    })
}

impl PreviewModal {
    pub fn new(profile: PreviewProfile, elements: PreviewElements) -> Self {
        Self {
            profile,
            elements,
            state: ModalState::Closed,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    /// 预览地址与下载地址
    pub fn resolve_urls(&self, source: &str) -> (String, String) {
        let download = encode_uri(source.trim());
        let view = match &self.profile.view_fragment {
            Some(fragment) => format!("{download}#{fragment}"),
            None => download.clone(),
        };
        (view, download)
    }

    fn open(&mut self, dom: &dyn Dom, lock: &mut ScrollLock, trigger: NodeKey) -> Vec<Command> {
        if let Err(err) = lock.acquire(self.profile.kind) {
            debug!(error = %err, "忽略打开请求");
            return Vec::new();
        }

        let source = dom
            .non_blank_attribute(trigger, self.profile.src_attr)
            .unwrap_or_else(|| self.profile.default_src.clone());
        let heading = dom
            .non_blank_attribute(trigger, self.profile.title_attr)
            .unwrap_or_else(|| self.profile.default_title.clone());
        let (view, download) = self.resolve_urls(&source);

        let elements = &self.elements;
        let mut commands = vec![Command::set_attribute(elements.frame, "src", view)];
        if let Some(link) = elements.download {
            commands.push(Command::set_attribute(link, "href", download));
        }
        if let Some(title) = elements.title {
            commands.push(Command::set_text(title, heading));
        }
        commands.push(Command::add_class(elements.modal, MODAL_OPEN_CLASS));
        commands.push(Command::LockScroll);

        self.state = ModalState::Open;
        commands
    }

    fn close(&mut self, lock: &mut ScrollLock) -> Vec<Command> {
        if self.state == ModalState::Closed {
            return Vec::new();
        }
        lock.release(self.profile.kind);
        self.state = ModalState::Closed;
        vec![
            Command::remove_class(self.elements.modal, MODAL_OPEN_CLASS),
            Command::set_attribute(self.elements.frame, "src", ""),
            Command::UnlockScroll,
        ]
    }

    fn is_close_control(&self, dom: &dyn Dom, target: NodeKey) -> bool {
        [self.elements.close, self.elements.backdrop]
            .into_iter()
            .flatten()
            .any(|control| dom.is_within(target, control))
    }
}

impl Behavior for PreviewModal {
    fn name(&self) -> &'static str {
        self.profile.name
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        vec![Subscription::DocumentClick, Subscription::DocumentKeyDown]
    }

    fn handle(&mut self, cx: &mut Context<'_>, event: &PageEvent) -> Outcome {
        match event {
            PageEvent::Click { target } => {
                let trigger = self
                    .elements
                    .triggers
                    .iter()
                    .copied()
                    .find(|&trigger| cx.dom.is_within(*target, trigger));
                if let Some(trigger) = trigger {
                    return Outcome::prevented(self.open(cx.dom, cx.lock, trigger));
                }
                if self.is_close_control(cx.dom, *target) {
                    return Outcome::commands(self.close(cx.lock));
                }
                Outcome::none()
            }
            PageEvent::KeyDown { key: Key::Escape } => Outcome::commands(self.close(cx.lock)),
            _ => Outcome::none(),
        }
    }
}
