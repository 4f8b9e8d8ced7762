//! # Memory 模块
//!
//! 内存中的文档模型，实现 [`Dom`] 并能执行 [`Command`]。
//!
//! 不依赖浏览器即可驱动完整的 事件 → 指令 → 页面状态 链路，
//! 主要用于测试和无界面环境。
//!
//! 元素位置以**文档坐标**保存，`bounding_rect` 会减去当前滚动距离，
//! 因此 `ScrollTo` 之后的几何关系与浏览器一致。文档顺序即插入顺序。

use std::collections::{BTreeMap, BTreeSet};

use crate::command::{Command, ScrollBehavior};
use crate::dom::{Dom, NodeKey, Rect};

/// 内存元素
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    parent: Option<NodeKey>,
    /// 文档坐标
    rect: Rect,
    offset_height: f64,
}

impl Element {
    /// 创建元素（标签名统一小写）
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    /// 文档坐标下的位置与尺寸，`offsetHeight` 取矩形高度
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self.offset_height = rect.height;
        self
    }

    pub fn with_offset_height(mut self, height: f64) -> Self {
        self.offset_height = height;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// 内存文档
#[derive(Debug, Clone, Default)]
pub struct MemoryDom {
    nodes: Vec<Element>,
    scroll_y: f64,
    body_overflow: String,
    observed: BTreeSet<NodeKey>,
    scroll_history: Vec<(f64, ScrollBehavior)>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加顶层元素
    pub fn add(&mut self, element: Element) -> NodeKey {
        let key = NodeKey(self.nodes.len());
        self.nodes.push(element);
        key
    }

    /// 添加子元素
    ///
    /// # Panics
    ///
    /// `parent` 不存在时 panic。
    pub fn add_child(&mut self, parent: NodeKey, mut element: Element) -> NodeKey {
        assert!(parent.0 < self.nodes.len(), "父元素不存在: {parent:?}");
        element.parent = Some(parent);
        self.add(element)
    }

    /// 获取元素
    ///
    /// # Panics
    ///
    /// `key` 不是本文档分配的句柄时 panic。
    pub fn element(&self, key: NodeKey) -> &Element {
        &self.nodes[key.0]
    }

    /// 修改元素的文档坐标
    pub fn set_rect(&mut self, key: NodeKey, rect: Rect) {
        if let Some(element) = self.nodes.get_mut(key.0) {
            element.rect = rect;
            element.offset_height = rect.height;
        }
    }

    pub fn set_scroll_y(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
    }

    /// `body.style.overflow` 当前值
    pub fn body_overflow(&self) -> &str {
        &self.body_overflow
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.body_overflow == "hidden"
    }

    /// 模拟 Host 为 `Subscription::Observe` 注册观察
    pub fn observe(&mut self, nodes: &[NodeKey]) {
        self.observed.extend(nodes.iter().copied());
    }

    pub fn is_observed(&self, key: NodeKey) -> bool {
        self.observed.contains(&key)
    }

    /// 所有执行过的滚动（目标位置，方式）
    pub fn scroll_history(&self) -> &[(f64, ScrollBehavior)] {
        &self.scroll_history
    }

    /// 执行单条指令
    pub fn apply(&mut self, command: &Command) {
        match command {
            Command::ScrollTo { top, behavior } => {
                self.scroll_y = *top;
                self.scroll_history.push((*top, *behavior));
            }
            Command::AddClass { node, class } => {
                if let Some(element) = self.nodes.get_mut(node.0) {
                    if !element.has_class(class) {
                        element.classes.push(class.clone());
                    }
                }
            }
            Command::RemoveClass { node, class } => {
                if let Some(element) = self.nodes.get_mut(node.0) {
                    element.classes.retain(|c| c != class);
                }
            }
            Command::SetAttribute { node, name, value } => {
                if let Some(element) = self.nodes.get_mut(node.0) {
                    element.attributes.insert(name.clone(), value.clone());
                }
            }
            Command::SetText { node, text } => {
                if let Some(element) = self.nodes.get_mut(node.0) {
                    element.text = text.clone();
                }
            }
            Command::SetStyle {
                node,
                property,
                value,
            } => {
                if let Some(element) = self.nodes.get_mut(node.0) {
                    if value.is_empty() {
                        element.styles.remove(property);
                    } else {
                        element.styles.insert(property.clone(), value.clone());
                    }
                }
            }
            Command::LockScroll => self.body_overflow = "hidden".to_string(),
            Command::UnlockScroll => self.body_overflow.clear(),
            Command::Unobserve { node } => {
                self.observed.remove(node);
            }
        }
    }

    /// 按顺序执行指令
    pub fn apply_all(&mut self, commands: &[Command]) {
        for command in commands {
            self.apply(command);
        }
    }

    fn get(&self, key: NodeKey) -> Option<&Element> {
        self.nodes.get(key.0)
    }

    fn keys(&self) -> impl Iterator<Item = NodeKey> + '_ {
        (0..self.nodes.len()).map(NodeKey)
    }
}

impl Dom for MemoryDom {
    fn element_by_id(&self, id: &str) -> Option<NodeKey> {
        self.keys()
            .find(|key| self.nodes[key.0].attribute("id") == Some(id))
    }

    fn elements_by_class(&self, class: &str) -> Vec<NodeKey> {
        self.keys()
            .filter(|key| self.nodes[key.0].has_class(class))
            .collect()
    }

    fn descendant_by_class(&self, root: NodeKey, class: &str) -> Option<NodeKey> {
        self.keys().find(|&key| {
            key != root && self.nodes[key.0].has_class(class) && self.is_within(key, root)
        })
    }

    fn parent(&self, node: NodeKey) -> Option<NodeKey> {
        self.get(node).and_then(|element| element.parent)
    }

    fn tag_name(&self, node: NodeKey) -> String {
        self.get(node)
            .map(|element| element.tag.clone())
            .unwrap_or_default()
    }

    fn attribute(&self, node: NodeKey, name: &str) -> Option<String> {
        self.get(node)
            .and_then(|element| element.attribute(name))
            .map(str::to_string)
    }

    fn has_class(&self, node: NodeKey, class: &str) -> bool {
        self.get(node).is_some_and(|element| element.has_class(class))
    }

    fn offset_height(&self, node: NodeKey) -> f64 {
        self.get(node).map_or(0.0, |element| element.offset_height)
    }

    fn bounding_rect(&self, node: NodeKey) -> Rect {
        self.get(node).map_or_else(Rect::default, |element| Rect {
            top: element.rect.top - self.scroll_y,
            ..element.rect
        })
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries() {
        let mut dom = MemoryDom::new();
        let section = dom.add(Element::new("SECTION").with_id("about").with_class("card"));
        let inner = dom.add_child(section, Element::new("div").with_class("card"));
        let leaf = dom.add_child(inner, Element::new("span"));

        assert_eq!(dom.element_by_id("about"), Some(section));
        assert_eq!(dom.element_by_id("missing"), None);
        assert_eq!(dom.elements_by_class("card"), vec![section, inner]);
        assert_eq!(dom.descendant_by_class(section, "card"), Some(inner));
        assert_eq!(dom.descendant_by_class(inner, "card"), None);
        assert_eq!(dom.tag_name(section), "section");
        assert!(dom.is_within(leaf, section));
        assert!(!dom.is_within(section, leaf));
    }

    #[test]
    fn test_bounding_rect_follows_scroll() {
        let mut dom = MemoryDom::new();
        let node = dom.add(Element::new("div").with_rect(Rect::new(0.0, 900.0, 100.0, 50.0)));

        assert_eq!(dom.bounding_rect(node).top, 900.0);
        dom.apply(&Command::ScrollTo {
            top: 400.0,
            behavior: ScrollBehavior::Instant,
        });
        assert_eq!(dom.bounding_rect(node).top, 500.0);
        assert_eq!(dom.document_top(node), 900.0);
        assert_eq!(dom.offset_height(node), 50.0);
    }

    #[test]
    fn test_apply_mutations() {
        let mut dom = MemoryDom::new();
        let node = dom.add(Element::new("img"));

        dom.apply_all(&[
            Command::add_class(node, "is-open"),
            Command::add_class(node, "is-open"),
            Command::set_attribute(node, "src", "a.png"),
            Command::set_text(node, "caption"),
            Command::set_style(node, "transform", "none"),
            Command::LockScroll,
        ]);
        let element = dom.element(node);
        assert!(element.has_class("is-open"));
        assert_eq!(element.attribute("src"), Some("a.png"));
        assert_eq!(element.text(), "caption");
        assert_eq!(element.style("transform"), Some("none"));
        assert!(dom.is_scroll_locked());

        dom.apply_all(&[
            Command::remove_class(node, "is-open"),
            Command::set_style(node, "transform", ""),
            Command::UnlockScroll,
        ]);
        let element = dom.element(node);
        assert!(!element.has_class("is-open"));
        assert_eq!(element.style("transform"), None);
        assert_eq!(dom.body_overflow(), "");
    }

    #[test]
    fn test_observe_and_unobserve() {
        let mut dom = MemoryDom::new();
        let a = dom.add(Element::new("div"));
        let b = dom.add(Element::new("div"));
        dom.observe(&[a, b]);
        dom.apply(&Command::Unobserve { node: a });
        assert!(!dom.is_observed(a));
        assert!(dom.is_observed(b));
    }
}
