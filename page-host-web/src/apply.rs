//! 执行 Runtime 返回的 [`Command`]。
//!
//! 单条指令失败（元素已被移除、浏览器拒绝等）只记录警告，不影响后续指令。

use page_runtime::{Command, NodeKey, ScrollBehavior};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, IntersectionObserver, ScrollToOptions};

use crate::dom::WebDom;

/// 按顺序执行指令
pub fn apply_all(dom: &WebDom, observer: Option<&IntersectionObserver>, commands: &[Command]) {
    for command in commands {
        if let Err(err) = apply(dom, observer, command) {
            warn!(?command, error = ?err, "指令执行失败");
        }
    }
}

fn apply(
    dom: &WebDom,
    observer: Option<&IntersectionObserver>,
    command: &Command,
) -> Result<(), JsValue> {
    match command {
        Command::ScrollTo { top, behavior } => {
            scroll_to(dom, *top, *behavior);
            Ok(())
        }
        Command::AddClass { node, class } => element(dom, *node)?.class_list().add_1(class),
        Command::RemoveClass { node, class } => element(dom, *node)?.class_list().remove_1(class),
        Command::SetAttribute { node, name, value } => {
            element(dom, *node)?.set_attribute(name, value)
        }
        Command::SetText { node, text } => {
            element(dom, *node)?.set_text_content(Some(text));
            Ok(())
        }
        Command::SetStyle {
            node,
            property,
            value,
        } => html_element(dom, *node)?
            .style()
            .set_property(property, value),
        Command::LockScroll => set_body_overflow(dom, "hidden"),
        Command::UnlockScroll => set_body_overflow(dom, ""),
        Command::Unobserve { node } => {
            if let Some(observer) = observer {
                observer.unobserve(&element(dom, *node)?);
            }
            Ok(())
        }
    }
}

fn scroll_to(dom: &WebDom, top: f64, behavior: ScrollBehavior) {
    match behavior {
        ScrollBehavior::Instant => dom.window().scroll_to_with_x_and_y(0.0, top),
        ScrollBehavior::Smooth => {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            dom.window().scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// 空字符串清除内联样式，恢复样式表中的值
fn set_body_overflow(dom: &WebDom, value: &str) -> Result<(), JsValue> {
    let body = dom
        .document()
        .body()
        .ok_or_else(|| JsValue::from_str("document.body 不存在"))?;
    body.style().set_property("overflow", value)
}

fn element(dom: &WebDom, node: NodeKey) -> Result<web_sys::Element, JsValue> {
    dom.element(node)
        .ok_or_else(|| JsValue::from_str(&format!("未登记的元素 {node:?}")))
}

fn html_element(dom: &WebDom, node: NodeKey) -> Result<HtmlElement, JsValue> {
    element(dom, node)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("元素 {node:?} 不支持内联样式")))
}
