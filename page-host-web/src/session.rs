//! 页面会话：把控制器的订阅翻译成浏览器监听器。
//!
//! 所有监听器共享同一个 [`Page`]。每个浏览器事件都先转换成 [`PageEvent`]，
//! 交给控制器分发，再把返回的指令写回页面。

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use page_runtime::{PageConfig, PageController, PageEvent, Subscription};
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent, MouseEvent,
};

use crate::apply::apply_all;
use crate::dom::WebDom;
use crate::env;
use crate::error::{HostError, HostResult};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// 控制器及其操作的页面
pub struct Page {
    controller: PageController,
    dom: WebDom,
    observer: Option<IntersectionObserver>,
}

impl Page {
    /// 分发事件并执行指令，返回是否需要阻止默认行为
    fn handle(&mut self, event: &PageEvent) -> bool {
        let outcome = self.controller.dispatch(&self.dom, event);
        apply_all(&self.dom, self.observer.as_ref(), &outcome.commands);
        outcome.prevent_default
    }
}

/// 运行中的页面会话
///
/// drop 时移除所有监听器并断开观察器。
pub struct Session {
    page: Rc<RefCell<Page>>,
    _listeners: Vec<EventListener>,
    _observer_callback: Option<ObserverCallback>,
}

impl Session {
    /// 安装控制器并注册它需要的全部监听器
    ///
    /// 单个监听器注册失败只影响对应的行为，其余行为照常工作。
    pub fn start(dom: WebDom, config: &PageConfig) -> Self {
        let env = env::detect(dom.window());
        let (controller, initial) = PageController::install(&dom, env, config);
        apply_all(&dom, None, &initial);
        info!(installed = ?controller.installed(), ?env, "页面会话已启动");

        let subscriptions = controller.subscriptions();
        let page = Rc::new(RefCell::new(Page {
            controller,
            dom,
            observer: None,
        }));

        let mut listeners = Vec::new();
        let mut observer_callback = None;
        for subscription in subscriptions {
            match subscription {
                Subscription::DocumentClick => listeners.push(listen_click(&page)),
                Subscription::DocumentKeyDown => listeners.push(listen_keydown(&page)),
                Subscription::WindowResize => listeners.push(listen_resize(&page)),
                Subscription::Pointer { node } => {
                    let Some(element) = page.borrow().dom.element(node) else {
                        warn!(?node, "指针订阅的元素不存在");
                        continue;
                    };
                    listeners.extend(listen_pointer(&page, &element));
                }
                Subscription::Observe { nodes, threshold } => {
                    let (observer, callback) = match observe(&page, threshold) {
                        Ok(observed) => observed,
                        Err(err) => {
                            warn!(error = %err, "可见性观察不可用");
                            with_page(&page, |page| page.handle(&PageEvent::ObserverUnavailable));
                            continue;
                        }
                    };
                    {
                        let page = page.borrow();
                        for node in &nodes {
                            if let Some(element) = page.dom.element(*node) {
                                observer.observe(&element);
                            }
                        }
                    }
                    debug!(count = nodes.len(), threshold, "开始观察元素");
                    page.borrow_mut().observer = Some(observer);
                    observer_callback = Some(callback);
                }
            }
        }

        Self {
            page,
            _listeners: listeners,
            _observer_callback: observer_callback,
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Ok(page) = self.page.try_borrow()
            && let Some(observer) = &page.observer
        {
            observer.disconnect();
        }
    }
}

/// 在页面上处理事件；页面正被其他回调占用时丢弃事件
fn with_page(page: &Rc<RefCell<Page>>, handle: impl FnOnce(&mut Page) -> bool) -> bool {
    match page.try_borrow_mut() {
        Ok(mut page) => handle(&mut page),
        Err(_) => {
            warn!("页面状态正被占用，丢弃事件");
            false
        }
    }
}

fn listen_click(page: &Rc<RefCell<Page>>) -> EventListener {
    let page = Rc::clone(page);
    let document = page.borrow().dom.document().clone();
    EventListener::new_with_options(
        &document,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let Some(target) = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
            else {
                return;
            };
            let prevent = with_page(&page, |page| {
                let target = page.dom.key_of(&target);
                page.handle(&PageEvent::click(target))
            });
            if prevent {
                event.prevent_default();
            }
        },
    )
}

fn listen_keydown(page: &Rc<RefCell<Page>>) -> EventListener {
    let page = Rc::clone(page);
    let document = page.borrow().dom.document().clone();
    EventListener::new(&document, "keydown", move |event: &Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = event.key();
        with_page(&page, |page| page.handle(&PageEvent::key(key.as_str())));
    })
}

fn listen_resize(page: &Rc<RefCell<Page>>) -> EventListener {
    let page = Rc::clone(page);
    let window = page.borrow().dom.window().clone();
    EventListener::new(&window, "resize", move |_| {
        with_page(&page, |page| page.handle(&PageEvent::Resize));
    })
}

fn listen_pointer(page: &Rc<RefCell<Page>>, element: &Element) -> [EventListener; 2] {
    let node = page.borrow().dom.key_of(element);

    let move_page = Rc::clone(page);
    let on_move = EventListener::new(element, "pointermove", move |event: &Event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let event = PageEvent::PointerMove {
            node,
            client_x: f64::from(event.client_x()),
            client_y: f64::from(event.client_y()),
        };
        with_page(&move_page, |page| page.handle(&event));
    });

    let leave_page = Rc::clone(page);
    let on_leave = EventListener::new(element, "pointerleave", move |_| {
        with_page(&leave_page, |page| page.handle(&PageEvent::PointerLeave { node }));
    });

    [on_move, on_leave]
}

fn observe(
    page: &Rc<RefCell<Page>>,
    threshold: f64,
) -> HostResult<(IntersectionObserver, ObserverCallback)> {
    let callback_page = Rc::clone(page);
    let callback: ObserverCallback =
        Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let is_intersecting = entry.is_intersecting();
                with_page(&callback_page, |page| {
                    let node = page.dom.key_of(&target);
                    page.handle(&PageEvent::Intersection {
                        node,
                        is_intersecting,
                    })
                });
            }
        });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|err| HostError::Observer(format!("{err:?}")))?;
    Ok((observer, callback))
}
