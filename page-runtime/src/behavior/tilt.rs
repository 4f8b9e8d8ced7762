//! 卡片倾斜
//!
//! 指针在 `.tilt-card` 上移动时，根据指针相对卡片中心的偏移旋转卡片，模拟立体感。
//! 卡片矩形在安装时缓存，窗口尺寸变化时刷新。

use std::collections::BTreeMap;

use crate::command::{Command, Outcome};
use crate::config::PageConfig;
use crate::dom::{Dom, NodeKey, Rect};
use crate::environment::Environment;
use crate::input::PageEvent;
use crate::selectors::TILT_CLASS;

use super::{Behavior, Context, Setup, Subscription};

const PERSPECTIVE_PX: u32 = 800;
const LIFT_PX: u32 = 2;
const HOVER_SHADOW: &str = "0 18px 45px rgba(15, 23, 42, 0.8)";

pub struct Tilt {
    cards: BTreeMap<NodeKey, Rect>,
    max_tilt_deg: f64,
    animate: bool,
}

pub fn install(dom: &dyn Dom, env: Environment, config: &PageConfig) -> Setup {
    let cards = dom.elements_by_class(TILT_CLASS);
    if cards.is_empty() {
        return Setup::skipped("tilt", "页面没有 .tilt-card 元素");
    }
    Setup::installed(Tilt::new(dom, cards, env, config.tilt.max_tilt_deg))
}

impl Tilt {
    pub fn new(
        dom: &dyn Dom,
        cards: impl IntoIterator<Item = NodeKey>,
        env: Environment,
        max_tilt_deg: f64,
    ) -> Self {
        Self {
            cards: cards
                .into_iter()
                .map(|card| (card, dom.bounding_rect(card)))
                .collect(),
            max_tilt_deg,
            animate: env.animations_enabled(),
        }
    }

    fn refresh(&mut self, dom: &dyn Dom) {
        for (card, rect) in &mut self.cards {
            *rect = dom.bounding_rect(*card);
        }
    }

    fn tilt(&self, card: NodeKey, client_x: f64, client_y: f64) -> Vec<Command> {
        if !self.animate {
            return Vec::new();
        }
        let Some(rect) = self.cards.get(&card).filter(|rect| !rect.is_empty()) else {
            return Vec::new();
        };
        let (rotate_x, rotate_y) = rotation(rect, client_x, client_y, self.max_tilt_deg);
        vec![
            Command::set_style(card, "transform", transform(rotate_x, rotate_y)),
            Command::set_style(card, "box-shadow", HOVER_SHADOW),
        ]
    }
}

impl Behavior for Tilt {
    fn name(&self) -> &'static str {
        "tilt"
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        self.cards
            .keys()
            .map(|&node| Subscription::Pointer { node })
            .chain(std::iter::once(Subscription::WindowResize))
            .collect()
    }

    fn handle(&mut self, cx: &mut Context<'_>, event: &PageEvent) -> Outcome {
        match event {
            PageEvent::Resize => {
                self.refresh(cx.dom);
                Outcome::none()
            }
            PageEvent::PointerMove {
                node,
                client_x,
                client_y,
            } => Outcome::commands(self.tilt(*node, *client_x, *client_y)),
            PageEvent::PointerLeave { node } if self.cards.contains_key(node) => {
                Outcome::commands(vec![
                    Command::set_style(*node, "transform", ""),
                    Command::set_style(*node, "box-shadow", ""),
                ])
            }
            _ => Outcome::none(),
        }
    }
}

/// 绕 X / Y 轴的旋转角度（度）
///
/// 指针位于上半部分时卡片向后仰，位于右半部分时向右转。
pub fn rotation(rect: &Rect, client_x: f64, client_y: f64, max_tilt_deg: f64) -> (f64, f64) {
    let x = client_x - rect.left;
    let y = client_y - rect.top;
    let center_x = rect.width / 2.0;
    let center_y = rect.height / 2.0;

    let rotate_x = ((y - center_y) / center_y) * -max_tilt_deg;
    let rotate_y = ((x - center_x) / center_x) * max_tilt_deg;
    (rotate_x, rotate_y)
}

fn transform(rotate_x: f64, rotate_y: f64) -> String {
    // +0.0 把 -0.0 归一化，避免输出 "-0.00deg"
    format!(
        "perspective({PERSPECTIVE_PX}px) rotateX({:.2}deg) rotateY({:.2}deg) translateY(-{LIFT_PX}px)",
        rotate_x + 0.0,
        rotate_y + 0.0,
    )
}
