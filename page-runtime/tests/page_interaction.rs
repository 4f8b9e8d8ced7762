//! # 页面交互集成测试
//!
//! 测试 PageEvent → PageController → Command → MemoryDom 的执行链路。
//! 这些测试不依赖浏览器。

use page_runtime::selectors::*;
use page_runtime::{
    Dom, Element, Environment, MemoryDom, ModalKind, NodeKey, PageConfig,
    PageController, PageEvent, Rect, ScrollBehavior, Subscription,
};

/// 作品集页面的主要结构
struct Portfolio {
    dom: MemoryDom,
    nav_link: NodeKey,
    dead_link: NodeKey,
    projects: NodeKey,
    reveal: [NodeKey; 2],
    card: NodeKey,
    resume_trigger: NodeKey,
    resume_modal: NodeKey,
    resume_frame: NodeKey,
    resume_download: NodeKey,
    resume_title: NodeKey,
    resume_close: NodeKey,
    report_trigger: NodeKey,
    report_modal: NodeKey,
    report_frame: NodeKey,
    report_download: NodeKey,
    report_title: NodeKey,
    report_backdrop: NodeKey,
    shots_trigger: NodeKey,
    shots_modal: NodeKey,
    shots_image: NodeKey,
    shots_caption: NodeKey,
    shots_next: NodeKey,
}

fn portfolio() -> Portfolio {
    let mut dom = MemoryDom::new();

    let header = dom.add(
        Element::new("header")
            .with_class(SITE_HEADER_CLASS)
            .with_rect(Rect::new(0.0, 0.0, 1280.0, 72.0)),
    );
    let nav_link = dom.add_child(header, Element::new("a").with_attr("href", "#projects"));
    let dead_link = dom.add_child(header, Element::new("a").with_attr("href", "#blog"));

    let projects = dom.add(
        Element::new("section")
            .with_id("projects")
            .with_rect(Rect::new(0.0, 2000.0, 1280.0, 900.0)),
    );
    let reveal_a = dom.add_child(projects, Element::new("div").with_class(REVEAL_CLASS));
    let reveal_b = dom.add_child(
        projects,
        Element::new("div")
            .with_class(REVEAL_CLASS)
            .with_attr(REVEAL_DELAY_ATTR, "0.2"),
    );
    let card = dom.add_child(
        projects,
        Element::new("article")
            .with_class(TILT_CLASS)
            .with_rect(Rect::new(40.0, 2100.0, 400.0, 300.0)),
    );

    let resume_trigger = dom.add(
        Element::new("a")
            .with_class(RESUME_TRIGGER_CLASS)
            .with_attr("href", "Resume/Analytics Resume.pdf"),
    );
    let resume_modal = dom.add(Element::new("div").with_id(RESUME_MODAL_ID));
    dom.add_child(resume_modal, Element::new("div").with_class(MODAL_BACKDROP_CLASS));
    let resume_title = dom.add_child(resume_modal, Element::new("h2").with_id(RESUME_TITLE_ID));
    let resume_close =
        dom.add_child(resume_modal, Element::new("button").with_id(RESUME_CLOSE_ID));
    let resume_frame =
        dom.add_child(resume_modal, Element::new("iframe").with_id(RESUME_FRAME_ID));
    let resume_download =
        dom.add_child(resume_modal, Element::new("a").with_id(RESUME_DOWNLOAD_ID));

    let report_trigger = dom.add(
        Element::new("button")
            .with_class(REPORT_TRIGGER_CLASS)
            .with_attr(REPORT_TITLE_ATTR, "Recruiting Analysis"),
    );
    let report_modal = dom.add(Element::new("div").with_id(REPORT_MODAL_ID));
    let report_backdrop = dom.add_child(
        report_modal,
        Element::new("div").with_class(MODAL_BACKDROP_CLASS),
    );
    let report_frame =
        dom.add_child(report_modal, Element::new("iframe").with_id(REPORT_FRAME_ID));
    let report_download =
        dom.add_child(report_modal, Element::new("a").with_id(REPORT_DOWNLOAD_ID));
    let report_title = dom.add_child(report_modal, Element::new("h2").with_id(REPORT_TITLE_ID));

    let shots_trigger = dom.add(
        Element::new("button")
            .with_class(SCREENSHOTS_TRIGGER_CLASS)
            .with_attr(
                SCREENSHOTS_IMAGES_ATTR,
                "Screenshots/Home Page.png, Screenshots/Funnel.png ,,Screenshots/KPI.png",
            ),
    );
    let shots_modal = dom.add(Element::new("div").with_id(SCREENSHOTS_MODAL_ID));
    dom.add_child(shots_modal, Element::new("div").with_class(MODAL_BACKDROP_CLASS));
    let shots_image =
        dom.add_child(shots_modal, Element::new("img").with_id(SCREENSHOTS_IMAGE_ID));
    let shots_caption =
        dom.add_child(shots_modal, Element::new("p").with_id(SCREENSHOTS_CAPTION_ID));
    let shots_next =
        dom.add_child(shots_modal, Element::new("button").with_id(SCREENSHOTS_NEXT_ID));

    Portfolio {
        dom,
        nav_link,
        dead_link,
        projects,
        reveal: [reveal_a, reveal_b],
        card,
        resume_trigger,
        resume_modal,
        resume_frame,
        resume_download,
        resume_title,
        resume_close,
        report_trigger,
        report_modal,
        report_frame,
        report_download,
        report_title,
        report_backdrop,
        shots_trigger,
        shots_modal,
        shots_image,
        shots_caption,
        shots_next,
    }
}

/// 模拟 Host：安装控制器并执行初始指令
fn boot(page: &mut Portfolio, env: Environment) -> PageController {
    let (controller, commands) = PageController::install(&page.dom, env, &PageConfig::default());
    page.dom.apply_all(&commands);
    for subscription in controller.subscriptions() {
        if let Subscription::Observe { nodes, .. } = subscription {
            page.dom.observe(&nodes);
        }
    }
    controller
}

impl Portfolio {
    /// 模拟 Host：分发事件并执行返回的指令，返回是否拦截默认行为
    fn fire(&mut self, controller: &mut PageController, event: PageEvent) -> bool {
        let outcome = controller.dispatch(&self.dom, &event);
        self.dom.apply_all(&outcome.commands);
        outcome.prevent_default
    }
}

#[test]
fn test_all_behaviors_installed() {
    let mut page = portfolio();
    let controller = boot(&mut page, Environment::default());

    assert_eq!(
        controller.installed(),
        vec![
            "anchor-scroll",
            "scroll-reveal",
            "tilt",
            "resume-preview",
            "report-preview",
            "screenshots",
        ]
    );
    assert_eq!(
        controller.subscriptions(),
        vec![
            Subscription::DocumentClick,
            Subscription::Observe {
                nodes: page.reveal.to_vec(),
                threshold: 0.15,
            },
            Subscription::Pointer { node: page.card },
            Subscription::WindowResize,
            Subscription::DocumentKeyDown,
        ]
    );
}

#[test]
fn test_anchor_scrolls_below_header() {
    let mut page = portfolio();
    let mut controller = boot(&mut page, Environment::default());

    page.dom.set_scroll_y(350.0);
    assert!(page.fire(&mut controller, PageEvent::click(page.nav_link)));

    let expected = page.dom.document_top(page.projects) - 72.0 - 8.0;
    assert_eq!(page.dom.scroll_y(), expected);
    assert_eq!(
        page.dom.scroll_history(),
        &[(expected, ScrollBehavior::Smooth)]
    );
}

#[test]
fn test_anchor_reduced_motion_jumps() {
    let mut page = portfolio();
    let mut controller = boot(&mut page, Environment::new(true, true));

    assert!(page.fire(&mut controller, PageEvent::click(page.nav_link)));
    assert_eq!(page.dom.scroll_history(), &[(1920.0, ScrollBehavior::Instant)]);
}

#[test]
fn test_missing_anchor_target_falls_through() {
    let mut page = portfolio();
    let mut controller = boot(&mut page, Environment::default());

    assert!(!page.fire(&mut controller, PageEvent::click(page.dead_link)));
    assert!(page.dom.scroll_history().is_empty());
}

#[test]
fn test_reveal_is_fire_once() {
    let mut page = portfolio();
    let mut controller = boot(&mut page, Environment::default());
    let [first, second] = page.reveal;

    assert!(page.dom.is_observed(first));
    assert!(!page.dom.element(first).has_class(VISIBLE_CLASS));

    page.fire(&mut controller, PageEvent::intersecting(second));
    assert!(page.dom.element(second).has_class(VISIBLE_CLASS));
    assert_eq!(page.dom.element(second).style("transition-delay"), Some("0.2s"));
    assert!(!page.dom.is_observed(second));
    assert!(page.dom.is_observed(first));

    // 离开视口后再次进入，不会改变任何状态
    let leave = PageEvent::Intersection {
        node: second,
        is_intersecting: false,
    };
    let outcome = controller.dispatch(&page.dom, &leave);
    assert!(outcome.is_empty());
    let outcome = controller.dispatch(&page.dom, &PageEvent::intersecting(second));
    assert!(outcome.is_empty());
    assert!(page.dom.element(second).has_class(VISIBLE_CLASS));
}

#[test]
fn test_reveal_without_observer() {
    let mut page = portfolio();
    let controller = boot(&mut page, Environment::new(false, false));

    for node in page.reveal {
        assert!(page.dom.element(node).has_class(VISIBLE_CLASS));
        assert!(!page.dom.is_observed(node));
    }
    assert!(!controller.installed().contains(&"scroll-reveal"));
}

#[test]
fn test_reveal_when_observer_fails_later() {
    let mut page = portfolio();
    let mut controller = boot(&mut page, Environment::default());
    let [first, second] = page.reveal;

    assert!(!page.fire(&mut controller, PageEvent::ObserverUnavailable));
    for node in [first, second] {
        assert!(page.dom.element(node).has_class(VISIBLE_CLASS));
    }

    // 其他行为照常工作
    assert!(page.fire(&mut controller, PageEvent::click(page.nav_link)));
    assert_eq!(page.dom.scroll_history().len(), 1);
}

#[test]
fn test_resume_open_and_close() {
    let mut page = portfolio();
    let mut controller = boot(&mut page, Environment::default());

    assert!(page.fire(&mut controller, PageEvent::click(page.resume_trigger)));
    assert!(page.dom.element(page.resume_modal).has_class(MODAL_OPEN_CLASS));
    assert_eq!(
        page.dom.element(page.resume_frame).attribute("src"),
        Some("Resume/Analytics%20Resume.pdf")
    );
    assert_eq!(
        page.dom.element(page.resume_download).attribute("href"),
        Some("Resume/Analytics%20Resume.pdf")
    );
    assert_eq!(page.dom.element(page.resume_title).text(), "Resume");
    assert!(page.dom.is_scroll_locked());
    assert_eq!(controller.open_modal(), Some(ModalKind::Resume));

    assert!(!page.fire(&mut controller, PageEvent::click(page.resume_close)));
    assert!(!page.dom.element(page.resume_modal).has_class(MODAL_OPEN_CLASS));
    assert_eq!(page.dom.element(page.resume_frame).attribute("src"), Some(""));
    assert!(!page.dom.is_scroll_locked());
    assert_eq!(controller.open_modal(), None);
}

#[test]
fn test_report_preview_uses_zoom_only_for_frame() {
    let mut page = portfolio();
    let mut controller = boot(&mut page, Environment::default());

    assert!(page.fire(&mut controller, PageEvent::click(page.report_trigger)));
    assert_eq!(
        page.dom.element(page.report_frame).attribute("src"),
        Some("Project%20Report/Project%20Recruit%20Report%20(1).pdf#zoom=page-width")
    );
    assert_eq!(
        page.dom.element(page.report_download).attribute("href"),
        Some("Project%20Report/Project%20Recruit%20Report%20(1).pdf")
    );
    assert_eq!(page.dom.element(page.report_title).text(), "Recruiting Analysis");

    page.fire(&mut controller, PageEvent::click(page.report_backdrop));
    assert!(!page.dom.element(page.report_modal).has_class(MODAL_OPEN_CLASS));
    assert_eq!(page.dom.element(page.report_frame).attribute("src"), Some(""));
    assert!(!page.dom.is_scroll_locked());
}

#[test]
fn test_screenshot_carousel_cycle() {
    let mut page = portfolio();
    let mut controller = boot(&mut page, Environment::default());

    assert!(page.fire(&mut controller, PageEvent::click(page.shots_trigger)));
    assert_eq!(
        page.dom.element(page.shots_image).attribute("src"),
        Some("Screenshots/Home%20Page.png")
    );
    assert_eq!(page.dom.element(page.shots_caption).text(), "Screenshot 1 of 3");

    page.fire(&mut controller, PageEvent::click(page.shots_next));
    page.fire(&mut controller, PageEvent::key("ArrowRight"));
    assert_eq!(page.dom.element(page.shots_caption).text(), "Screenshot 3 of 3");

    page.fire(&mut controller, PageEvent::key("ArrowRight"));
    assert_eq!(page.dom.element(page.shots_caption).text(), "Screenshot 1 of 3");

    page.fire(&mut controller, PageEvent::key("ArrowLeft"));
    assert_eq!(
        page.dom.element(page.shots_image).attribute("src"),
        Some("Screenshots/KPI.png")
    );

    page.fire(&mut controller, PageEvent::key("Escape"));
    assert!(!page.dom.element(page.shots_modal).has_class(MODAL_OPEN_CLASS));
    assert_eq!(page.dom.element(page.shots_image).attribute("src"), Some(""));
    assert!(!page.dom.is_scroll_locked());

    // 关闭后方向键无效
    let outcome = controller.dispatch(&page.dom, &PageEvent::key("ArrowRight"));
    assert!(outcome.is_empty());
}

#[test]
fn test_second_modal_is_rejected() {
    let mut page = portfolio();
    let mut controller = boot(&mut page, Environment::default());

    page.fire(&mut controller, PageEvent::click(page.resume_trigger));
    assert!(page.fire(&mut controller, PageEvent::click(page.shots_trigger)));

    assert!(!page.dom.element(page.shots_modal).has_class(MODAL_OPEN_CLASS));
    assert_eq!(page.dom.element(page.shots_image).attribute("src"), None);
    assert_eq!(controller.open_modal(), Some(ModalKind::Resume));

    // Escape 只关闭真正打开的模态框
    page.fire(&mut controller, PageEvent::key("Escape"));
    assert_eq!(controller.open_modal(), None);
    assert!(!page.dom.is_scroll_locked());

    page.fire(&mut controller, PageEvent::click(page.shots_trigger));
    assert_eq!(controller.open_modal(), Some(ModalKind::Screenshots));
}

#[test]
fn test_escape_without_open_modal() {
    let mut page = portfolio();
    let mut controller = boot(&mut page, Environment::default());

    let outcome = controller.dispatch(&page.dom, &PageEvent::key("Escape"));
    assert!(outcome.is_empty());
    assert_eq!(page.dom.body_overflow(), "");
}

#[test]
fn test_tilt_follows_pointer() {
    let mut page = portfolio();
    let mut controller = boot(&mut page, Environment::default());

    // 卡片右下角（视口坐标）
    let event = PageEvent::PointerMove {
        node: page.card,
        client_x: 440.0,
        client_y: 2400.0,
    };
    page.fire(&mut controller, event);
    assert_eq!(
        page.dom.element(page.card).style("transform"),
        Some("perspective(800px) rotateX(-10.00deg) rotateY(10.00deg) translateY(-2px)")
    );

    page.fire(&mut controller, PageEvent::PointerLeave { node: page.card });
    assert_eq!(page.dom.element(page.card).style("transform"), None);
    assert_eq!(page.dom.element(page.card).style("box-shadow"), None);
}
