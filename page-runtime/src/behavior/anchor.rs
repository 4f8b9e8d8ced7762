//! 锚点平滑滚动
//!
//! 拦截指向页内片段（`href="#id"`）的链接点击，把目标元素滚动到固定页头下方。
//! 目标不存在时不拦截，交给浏览器默认导航。

use crate::command::{Command, Outcome, ScrollBehavior};
use crate::config::PageConfig;
use crate::dom::{Dom, NodeKey};
use crate::environment::Environment;
use crate::input::PageEvent;
use crate::selectors::SITE_HEADER_CLASS;

use super::{Behavior, Context, Setup, Subscription};

pub struct AnchorScroll {
    header_gap: f64,
    behavior: ScrollBehavior,
}

/// 锚点滚动对所有页面都适用
pub fn install(_dom: &dyn Dom, env: Environment, config: &PageConfig) -> Setup {
    Setup::installed(AnchorScroll::new(env, config.scroll.header_gap))
}

impl AnchorScroll {
    pub fn new(env: Environment, header_gap: f64) -> Self {
        let behavior = if env.reduced_motion {
            ScrollBehavior::Instant
        } else {
            ScrollBehavior::Smooth
        };
        Self {
            header_gap,
            behavior,
        }
    }

    fn scroll_for(&self, dom: &dyn Dom, target: NodeKey) -> Option<Command> {
        let link = dom.closest(target, &|node| is_fragment_link(dom, node))?;
        let href = dom.attribute(link, "href")?;
        let id = fragment_id(&href)?;
        let destination = dom.element_by_id(id)?;

        Some(Command::ScrollTo {
            top: scroll_target(dom, destination, self.header_gap),
            behavior: self.behavior,
        })
    }
}

impl Behavior for AnchorScroll {
    fn name(&self) -> &'static str {
        "anchor-scroll"
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        vec![Subscription::DocumentClick]
    }

    fn handle(&mut self, cx: &mut Context<'_>, event: &PageEvent) -> Outcome {
        let PageEvent::Click { target } = event else {
            return Outcome::none();
        };
        match self.scroll_for(cx.dom, *target) {
            Some(command) => Outcome::prevented(vec![command]),
            None => Outcome::none(),
        }
    }
}

/// `a[href^="#"]`
fn is_fragment_link(dom: &dyn Dom, node: NodeKey) -> bool {
    dom.tag_name(node) == "a"
        && dom
            .attribute(node, "href")
            .is_some_and(|href| href.starts_with('#'))
}

/// 片段标识符；`""` 和 `"#"` 不指向任何元素
fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// 目标元素的文档顶部减去页头高度与间距
///
/// 页面没有 `.site-header` 时页头高度按 0 计算，间距仍然保留。
pub fn scroll_target(dom: &dyn Dom, destination: NodeKey, header_gap: f64) -> f64 {
    let header_height = dom
        .first_by_class(SITE_HEADER_CLASS)
        .map_or(0.0, |header| dom.offset_height(header));
    dom.document_top(destination) - (header_height + header_gap)
}
