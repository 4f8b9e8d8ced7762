//! 滚动显现
//!
//! `.reveal-on-scroll` 元素初始隐藏（由样式表负责），进入视口后加上 `is-visible`。
//! 每个元素只显现一次：显现后立即停止观察，之后的可见性变化全部忽略。

use std::collections::BTreeSet;

use tracing::warn;

use crate::command::{Command, Outcome};
use crate::config::PageConfig;
use crate::dom::{Dom, NodeKey};
use crate::environment::Environment;
use crate::input::PageEvent;
use crate::selectors::{REVEAL_CLASS, REVEAL_DELAY_ATTR, VISIBLE_CLASS};

use super::{Behavior, Context, Setup, Subscription};

pub struct ScrollReveal {
    /// 尚未显现的元素
    pending: BTreeSet<NodeKey>,
    threshold: f64,
}

/// 安装滚动显现
///
/// 不支持 `IntersectionObserver` 或要求减少动效时，所有元素立即显现，不注册观察。
pub fn install(dom: &dyn Dom, env: Environment, config: &PageConfig) -> Setup {
    let nodes = dom.elements_by_class(REVEAL_CLASS);
    if nodes.is_empty() {
        return Setup::skipped("scroll-reveal", "页面没有 .reveal-on-scroll 元素");
    }

    if env.reduced_motion || !env.intersection_observer {
        return Setup::commands_only(reveal_immediately(nodes));
    }

    Setup::installed(ScrollReveal::new(nodes, config.reveal.threshold))
}

impl ScrollReveal {
    pub fn new(nodes: impl IntoIterator<Item = NodeKey>, threshold: f64) -> Self {
        Self {
            pending: nodes.into_iter().collect(),
            threshold,
        }
    }

    pub fn is_pending(&self, node: NodeKey) -> bool {
        self.pending.contains(&node)
    }

    /// 观察失败时一次性显现所有剩余元素
    fn reveal_pending(&mut self) -> Vec<Command> {
        let pending = std::mem::take(&mut self.pending);
        warn!(count = pending.len(), "无法观察可见性，直接显现全部元素");
        reveal_immediately(pending)
    }

    fn reveal(&mut self, dom: &dyn Dom, node: NodeKey) -> Vec<Command> {
        if !self.pending.remove(&node) {
            return Vec::new();
        }
        let delay = parse_delay(dom.attribute(node, REVEAL_DELAY_ATTR).as_deref());
        vec![
            Command::set_style(node, "transition-delay", format!("{delay}s")),
            Command::add_class(node, VISIBLE_CLASS),
            Command::Unobserve { node },
        ]
    }
}

impl Behavior for ScrollReveal {
    fn name(&self) -> &'static str {
        "scroll-reveal"
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        vec![Subscription::Observe {
            nodes: self.pending.iter().copied().collect(),
            threshold: self.threshold,
        }]
    }

    fn handle(&mut self, cx: &mut Context<'_>, event: &PageEvent) -> Outcome {
        match event {
            PageEvent::Intersection {
                node,
                is_intersecting: true,
            } => Outcome::commands(self.reveal(cx.dom, *node)),
            PageEvent::ObserverUnavailable => Outcome::commands(self.reveal_pending()),
            _ => Outcome::none(),
        }
    }
}

fn reveal_immediately(nodes: impl IntoIterator<Item = NodeKey>) -> Vec<Command> {
    nodes
        .into_iter()
        .map(|node| Command::add_class(node, VISIBLE_CLASS))
        .collect()
}

/// `data-delay` 秒数；缺失、非数字或负数按 0 处理
fn parse_delay(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|delay| delay.is_finite() && *delay >= 0.0)
        .unwrap_or(0.0)
}
