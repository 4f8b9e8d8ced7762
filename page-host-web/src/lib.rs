//! # Page Host (Web)
//!
//! `page-runtime` 的浏览器宿主，编译为 wasm 后由页面加载。
//!
//! ## 启动流程
//!
//! 1. 读取 `#page-config` 中的内联 JSON 配置（可选）
//! 2. 初始化日志，输出到浏览器控制台
//! 3. 等待 `DOMContentLoaded`（文档已解析完时立即继续）
//! 4. 探测宿主能力，安装控制器，执行初始指令
//! 5. 按控制器的订阅注册事件监听器
//!
//! ## 模块结构
//!
//! - [`config`]：Host 配置
//! - [`dom`]：`web_sys` 上的 `Dom` 实现
//! - [`apply`]：执行指令
//! - [`session`]：事件监听与分发
//! - [`env`]：宿主能力探测
//! - [`logging`]：控制台日志

pub mod apply;
pub mod config;
pub mod dom;
pub mod env;
pub mod error;
pub mod logging;
pub mod session;

use std::cell::RefCell;

use gloo::events::EventListener;
use js_sys::Reflect;
use tracing::warn;
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub use config::HostConfig;
pub use dom::WebDom;
pub use error::{HostError, HostResult};
pub use session::Session;

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or(HostError::MissingWindow)?;
    let document = window.document().ok_or(HostError::MissingDocument)?;

    let inline = document
        .get_element_by_id(config::INLINE_CONFIG_ID)
        .and_then(|element| element.text_content());
    let (config, config_error) = HostConfig::from_inline(inline.as_deref());
    logging::init(config.max_level());
    if let Some(err) = config_error {
        warn!(error = %err, "内联配置无效，使用默认配置");
    }

    if is_loading(&document) {
        EventListener::once(&document.clone(), "DOMContentLoaded", move |_| {
            boot(window, document, &config);
        })
        .forget();
    } else {
        boot(window, document, &config);
    }
    Ok(())
}

fn boot(window: web_sys::Window, document: Document, config: &HostConfig) {
    let dom = WebDom::new(window, document);
    let session = Session::start(dom, &config.page);
    SESSION.with(|slot| *slot.borrow_mut() = Some(session));
}

fn is_loading(document: &Document) -> bool {
    Reflect::get(document, &"readyState".into())
        .ok()
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "loading")
}
