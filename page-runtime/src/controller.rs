//! # Controller 模块
//!
//! 页面交互控制器，每次页面加载安装一次。
//!
//! ## 执行模型
//!
//! ```text
//! install(dom, env, config) -> (PageController, Vec<Command>)
//! dispatch(dom, event)      -> Outcome
//! ```
//!
//! 1. 按固定顺序安装各行为，缺少必需元素的行为直接跳过
//! 2. 同一事件按安装顺序依次交给每个行为
//! 3. 合并所有行为的结果返回给 Host

use tracing::{info, trace};

use crate::behavior::{self, Behavior, Context, Setup, Subscription};
use crate::command::{Command, Outcome};
use crate::config::PageConfig;
use crate::dom::Dom;
use crate::environment::Environment;
use crate::input::PageEvent;
use crate::scroll_lock::{ModalKind, ScrollLock};

type Installer = fn(&dyn Dom, Environment, &PageConfig) -> Setup;

/// 安装顺序即事件分发顺序
const INSTALLERS: [Installer; 6] = [
    behavior::anchor::install,
    behavior::reveal::install,
    behavior::tilt::install,
    behavior::preview::install_resume,
    behavior::preview::install_report,
    behavior::carousel::install,
];

/// 页面交互控制器
pub struct PageController {
    behaviors: Vec<Box<dyn Behavior>>,
    lock: ScrollLock,
    env: Environment,
}

impl PageController {
    /// 安装所有适用于当前页面的行为
    ///
    /// # 返回
    ///
    /// - `PageController`：已安装的控制器
    /// - `Vec<Command>`：安装时需要立即执行的指令（如降级模式下的直接显现）
    pub fn install(dom: &dyn Dom, env: Environment, config: &PageConfig) -> (Self, Vec<Command>) {
        let mut behaviors = Vec::new();
        let mut commands = Vec::new();

        for installer in INSTALLERS {
            let setup = installer(dom, env, config);
            commands.extend(setup.commands);
            behaviors.extend(setup.behavior);
        }

        let controller = Self {
            behaviors,
            lock: ScrollLock::new(),
            env,
        };
        info!(
            behaviors = ?controller.installed(),
            reduced_motion = env.reduced_motion,
            "页面交互已安装"
        );
        (controller, commands)
    }

    pub fn environment(&self) -> Environment {
        self.env
    }

    /// 已安装行为的名称（按分发顺序）
    pub fn installed(&self) -> Vec<&'static str> {
        self.behaviors.iter().map(|b| b.name()).collect()
    }

    /// 当前打开的模态框
    pub fn open_modal(&self) -> Option<ModalKind> {
        self.lock.holder()
    }

    /// Host 需要注册的事件来源（去重，保持首次出现的顺序）
    pub fn subscriptions(&self) -> Vec<Subscription> {
        let mut subscriptions = Vec::new();
        for subscription in self.behaviors.iter().flat_map(|b| b.subscriptions()) {
            if !subscriptions.contains(&subscription) {
                subscriptions.push(subscription);
            }
        }
        subscriptions
    }

    /// 分发一个事件
    pub fn dispatch(&mut self, dom: &dyn Dom, event: &PageEvent) -> Outcome {
        let mut cx = Context {
            dom,
            lock: &mut self.lock,
        };
        let mut outcome = Outcome::none();
        for behavior in &mut self.behaviors {
            let result = behavior.handle(&mut cx, event);
            if !result.is_empty() {
                trace!(behavior = behavior.name(), ?result, "事件已处理");
            }
            outcome.merge(result);
        }
        outcome
    }
}
