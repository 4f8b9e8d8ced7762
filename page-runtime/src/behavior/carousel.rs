//! 项目截图轮播
//!
//! ```text
//! Closed ──trigger click（列表非空）──► Open（第一张）
//! Open   ──next / ArrowRight──► index + 1 (mod len)
//! Open   ──prev / ArrowLeft───► index - 1 (mod len)
//! Open   ──close | backdrop | Escape──► Closed
//! ```
//!
//! Closed 状态下 next / prev / close 都是 no-op。

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

/// 打开中的截图列表
///
/// 只能通过 [`CarouselState::open`] 构造：`images` 非空，`index` 始终位于 `[0, images.len())`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slides {
    images: Vec<String>,
    index: usize,
}

impl Slides {
    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn index(&self) -> usize {
        self.index
    }

    fn next(&mut self) {
        self.index = (self.index + 1) % self.images.len();
    }

    fn previous(&mut self) {
        self.index = (self.index + self.images.len() - 1) % self.images.len();
    }

    fn current(&self) -> (&str, usize, usize) {
        (self.images[self.index].as_str(), self.index, self.images.len())
    }
}

/// 轮播状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CarouselState {
    #[default]
    Closed,
    Open(Slides),
}

impl CarouselState {
    /// 打开到第一张；列表为空时返回 `None`
    pub fn open(images: Vec<String>) -> Option<Self> {
        (!images.is_empty()).then_some(Self::Open(Slides { images, index: 0 }))
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// 前进一张，末尾回到开头；返回是否发生变化
    pub fn next(&mut self) -> bool {
        match self {
            Self::Open(slides) => {
                slides.next();
                true
            }
            Self::Closed => false,
        }
    }

    /// 后退一张，开头回到末尾；返回是否发生变化
    pub fn previous(&mut self) -> bool {
        match self {
            Self::Open(slides) => {
                slides.previous();
                true
            }
            Self::Closed => false,
        }
    }

    /// 当前图片、序号（从 0 开始）与总数
    pub fn current(&self) -> Option<(&str, usize, usize)> {
        match self {
            Self::Open(slides) => Some(slides.current()),
            Self::Closed => None,
        }
    }
}

/// 解析 `data-images`：逗号分隔，逐项去空白、丢弃空项、URI 转义
pub fn parse_image_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(encode_uri)
        .collect()
}

/// 轮播用到的元素
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselElements {
    pub trigger: NodeKey,
    pub modal: NodeKey,
    pub image: NodeKey,
    pub caption: Option<NodeKey>,
    pub close: Option<NodeKey>,
    pub backdrop: Option<NodeKey>,
    pub prev: Option<NodeKey>,
    pub next: Option<NodeKey>,
}

pub struct ScreenshotCarousel {
    elements: CarouselElements,
    state: CarouselState,
}

pub fn install(dom: &dyn Dom, _env: Environment, _config: &PageConfig) -> Setup {
    let Some(trigger) = dom.first_by_class(SCREENSHOTS_TRIGGER_CLASS) else {
        return Setup::skipped("screenshots", "页面没有 .project-screenshots-open-btn");
    };
    let Some(modal) = dom.element_by_id(SCREENSHOTS_MODAL_ID) else {
        return Setup::skipped("screenshots", "缺少 #projectScreenshotsModal");
    };
    let Some(image) = dom.element_by_id(SCREENSHOTS_IMAGE_ID) else {
        return Setup::skipped("screenshots", "缺少 #projectScreenshotImage");
    };

    Setup::installed(ScreenshotCarousel::new(CarouselElements {
        trigger,
        modal,
        image,
        caption: dom.element_by_id(SCREENSHOTS_CAPTION_ID),
        close: dom.element_by_id(SCREENSHOTS_CLOSE_ID),
        backdrop: dom.descendant_by_class(modal, MODAL_BACKDROP_CLASS),
        prev: dom.element_by_id(SCREENSHOTS_PREV_ID),
        next: dom.element_by_id(SCREENSHOTS_NEXT_ID),
    }))
}

impl ScreenshotCarousel {
    pub fn new(elements: CarouselElements) -> Self {
        Self {
            elements,
            state: CarouselState::Closed,
        }
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    fn open(&mut self, dom: &dyn Dom, lock: &mut ScrollLock) -> Vec<Command> {
        let raw = dom
            .attribute(self.elements.trigger, SCREENSHOTS_IMAGES_ATTR)
            .unwrap_or_default();
        let Some(state) = CarouselState::open(parse_image_list(&raw)) else {
            debug!("截图列表为空，忽略打开请求");
            return Vec::new();
        };
        if let Err(err) = lock.acquire(ModalKind::Screenshots) {
            debug!(error = %err, "忽略打开请求");
            return Vec::new();
        }

        self.state = state;
        let mut commands = self.show();
        commands.push(Command::add_class(self.elements.modal, MODAL_OPEN_CLASS));
        commands.push(Command::LockScroll);
        commands
    }

    fn close(&mut self, lock: &mut ScrollLock) -> Vec<Command> {
        if !self.state.is_open() {
            return Vec::new();
        }
        lock.release(ModalKind::Screenshots);
        self.state = CarouselState::Closed;
        vec![
            Command::remove_class(self.elements.modal, MODAL_OPEN_CLASS),
            Command::set_attribute(self.elements.image, "src", ""),
            Command::UnlockScroll,
        ]
    }

    fn step(&mut self, forward: bool) -> Vec<Command> {
        let moved = if forward {
            self.state.next()
        } else {
            self.state.previous()
        };
        if moved { self.show() } else { Vec::new() }
    }

    /// 显示当前图片并更新说明文字
    fn show(&self) -> Vec<Command> {
        let Some((src, index, count)) = self.state.current() else {
            return Vec::new();
        };
        let mut commands = vec![Command::set_attribute(self.elements.image, "src", src)];
        if let Some(caption) = self.elements.caption {
            commands.push(Command::set_text(
                caption,
                format!("Screenshot {} of {}", index + 1, count),
            ));
        }
        commands
    }

    fn hits(dom: &dyn Dom, target: NodeKey, control: Option<NodeKey>) -> bool {
        control.is_some_and(|control| dom.is_within(target, control))
    }
}

impl Behavior for ScreenshotCarousel {
    fn name(&self) -> &'static str {
        "screenshots"
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        vec![Subscription::DocumentClick, Subscription::DocumentKeyDown]
    }

    fn handle(&mut self, cx: &mut Context<'_>, event: &PageEvent) -> Outcome {
        match event {
            PageEvent::Click { target } => {
                let target = *target;
                let elements = self.elements;
                if cx.dom.is_within(target, elements.trigger) {
                    return Outcome::prevented(self.open(cx.dom, cx.lock));
                }
                if Self::hits(cx.dom, target, elements.close)
                    || Self::hits(cx.dom, target, elements.backdrop)
                {
                    return Outcome::commands(self.close(cx.lock));
                }
                if Self::hits(cx.dom, target, elements.next) {
                    return Outcome::commands(self.step(true));
                }
                if Self::hits(cx.dom, target, elements.prev) {
                    return Outcome::commands(self.step(false));
                }
                Outcome::none()
            }
            PageEvent::KeyDown { key } if self.state.is_open() => match key {
                Key::Escape => Outcome::commands(self.close(cx.lock)),
                Key::ArrowRight => Outcome::commands(self.step(true)),
                Key::ArrowLeft => Outcome::commands(self.step(false)),
                Key::Other(_) => Outcome::none(),
            },
            _ => Outcome::none(),
        }
    }
}
