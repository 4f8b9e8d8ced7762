//! # Dom 模块
//!
//! Runtime 读取页面结构的唯一途径。
//!
//! ## 设计说明
//!
//! - [`Dom`] 只提供**只读**查询，所有修改都以 [`Command`](crate::Command) 的形式交给 Host
//! - 元素通过不透明的 [`NodeKey`] 引用，由 `Dom` 的实现负责分配
//! - 浏览器中由 Host 基于 `web_sys` 实现；测试中使用 [`MemoryDom`](crate::MemoryDom)

use serde::{Deserialize, Serialize};

/// 元素句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeKey(pub usize);

/// 视口坐标系下的矩形（等价于 `getBoundingClientRect()`）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// 宽或高为 0
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// 页面只读查询接口
pub trait Dom {
    /// `document.getElementById`
    fn element_by_id(&self, id: &str) -> Option<NodeKey>;

    /// 文档顺序下所有带该 class 的元素
    fn elements_by_class(&self, class: &str) -> Vec<NodeKey>;

    /// `root` 子树中第一个带该 class 的后代（不含 `root` 自身）
    fn descendant_by_class(&self, root: NodeKey, class: &str) -> Option<NodeKey>;

    /// 父元素
    fn parent(&self, node: NodeKey) -> Option<NodeKey>;

    /// 小写标签名
    fn tag_name(&self, node: NodeKey) -> String;

    /// 属性原始值
    fn attribute(&self, node: NodeKey, name: &str) -> Option<String>;

    fn has_class(&self, node: NodeKey, class: &str) -> bool;

    /// `offsetHeight`
    fn offset_height(&self, node: NodeKey) -> f64;

    /// `getBoundingClientRect()`
    fn bounding_rect(&self, node: NodeKey) -> Rect;

    /// 当前垂直滚动距离（`window.scrollY`）
    fn scroll_y(&self) -> f64;

    /// 第一个带该 class 的元素
    fn first_by_class(&self, class: &str) -> Option<NodeKey> {
        self.elements_by_class(class).into_iter().next()
    }

    /// 从 `node` 自身开始向上查找第一个满足条件的元素（`Element.closest`）
    fn closest(&self, node: NodeKey, matches: &dyn Fn(NodeKey) -> bool) -> Option<NodeKey> {
        let mut current = Some(node);
        while let Some(key) = current {
            if matches(key) {
                return Some(key);
            }
            current = self.parent(key);
        }
        None
    }

    /// `node` 是否为 `ancestor` 本身或其后代
    fn is_within(&self, node: NodeKey, ancestor: NodeKey) -> bool {
        self.closest(node, &|key| key == ancestor).is_some()
    }

    /// 元素顶部在文档坐标系下的位置
    fn document_top(&self, node: NodeKey) -> f64 {
        self.bounding_rect(node).top + self.scroll_y()
    }

    /// 非空（去除首尾空白后）的属性值
    fn non_blank_attribute(&self, node: NodeKey, name: &str) -> Option<String> {
        self.attribute(node, name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}
