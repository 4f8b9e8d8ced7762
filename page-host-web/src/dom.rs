//! 基于 `web_sys` 的 [`Dom`] 实现。
//!
//! Runtime 只认识 [`NodeKey`]，这里负责在 `NodeKey` 与真实 `Element` 之间互相转换：
//! 第一次见到某个元素时登记，之后同一元素总是得到同一个句柄。
//! 元素到句柄的查找走 JS `Map`（按对象身份），句柄到元素的查找走 `Vec` 下标。

use std::cell::RefCell;

use js_sys::Map;
use page_runtime::{Dom, NodeKey, Rect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCollection, HtmlElement, Window};

pub struct WebDom {
    window: Window,
    document: Document,
    registry: RefCell<Vec<Element>>,
    keys: Map,
}

impl WebDom {
    pub fn new(window: Window, document: Document) -> Self {
        Self {
            window,
            document,
            registry: RefCell::new(Vec::new()),
            keys: Map::new(),
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// 元素的句柄，首次出现时登记
    pub fn key_of(&self, element: &Element) -> NodeKey {
        if let Some(index) = self.keys.get(element).as_f64() {
            return NodeKey(index as usize);
        }
        let mut registry = self.registry.borrow_mut();
        let index = registry.len();
        registry.push(element.clone());
        self.keys.set(element, &JsValue::from_f64(index as f64));
        NodeKey(index)
    }

    /// 句柄对应的元素
    pub fn element(&self, key: NodeKey) -> Option<Element> {
        self.registry.borrow().get(key.0).cloned()
    }

    fn html_element(&self, key: NodeKey) -> Option<HtmlElement> {
        self.element(key)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    }

    fn keys_of(&self, collection: &HtmlCollection) -> Vec<NodeKey> {
        (0..collection.length())
            .filter_map(|index| collection.item(index))
            .map(|element| self.key_of(&element))
            .collect()
    }
}

impl Dom for WebDom {
    fn element_by_id(&self, id: &str) -> Option<NodeKey> {
        self.document
            .get_element_by_id(id)
            .map(|element| self.key_of(&element))
    }

    fn elements_by_class(&self, class: &str) -> Vec<NodeKey> {
        self.keys_of(&self.document.get_elements_by_class_name(class))
    }

    fn descendant_by_class(&self, root: NodeKey, class: &str) -> Option<NodeKey> {
        let root = self.element(root)?;
        root.get_elements_by_class_name(class)
            .item(0)
            .map(|element| self.key_of(&element))
    }

    fn parent(&self, node: NodeKey) -> Option<NodeKey> {
        self.element(node)?
            .parent_element()
            .map(|parent| self.key_of(&parent))
    }

    fn tag_name(&self, node: NodeKey) -> String {
        self.element(node)
            .map(|element| element.tag_name().to_ascii_lowercase())
            .unwrap_or_default()
    }

    fn attribute(&self, node: NodeKey, name: &str) -> Option<String> {
        self.element(node)?.get_attribute(name)
    }

    fn has_class(&self, node: NodeKey, class: &str) -> bool {
        self.element(node)
            .is_some_and(|element| element.class_list().contains(class))
    }

    fn offset_height(&self, node: NodeKey) -> f64 {
        self.html_element(node)
            .map_or(0.0, |element| f64::from(element.offset_height()))
    }

    fn bounding_rect(&self, node: NodeKey) -> Rect {
        self.element(node).map_or_else(Rect::default, |element| {
            let rect = element.get_bounding_client_rect();
            Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
        })
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }
}
