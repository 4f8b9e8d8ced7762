//! 启动时探测浏览器能力，生成 [`Environment`]。

use js_sys::{Function, Reflect};
use page_runtime::Environment;
use wasm_bindgen::JsCast;
use web_sys::Window;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn detect(window: &Window) -> Environment {
    Environment::new(prefers_reduced_motion(window), has_intersection_observer(window))
}

/// 不支持 `matchMedia` 的浏览器视为未开启减少动效
fn prefers_reduced_motion(window: &Window) -> bool {
    let Ok(match_media) = Reflect::get(window, &"matchMedia".into()) else {
        return false;
    };
    let Ok(match_media) = match_media.dyn_into::<Function>() else {
        return false;
    };
    let Ok(query) = match_media.call1(window, &REDUCED_MOTION_QUERY.into()) else {
        return false;
    };
    Reflect::get(&query, &"matches".into())
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}

fn has_intersection_observer(window: &Window) -> bool {
    Reflect::has(window, &"IntersectionObserver".into()).unwrap_or(false)
}
