//! Browser readers for the device probe. Every reading is optional; a
//! missing window or API leaves the corresponding signal unset.

use crate::constants::{REDUCED_MOTION_QUERY, SVG_NS};
use crate::dom;
use gloo::events::EventListener;
use js_sys::Reflect;
use unfold_core::DeviceSignals;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

pub fn read_signals() -> DeviceSignals {
    let Some(window) = web::window() else {
        return DeviceSignals::unavailable();
    };
    let navigator = window.navigator();
    let nav_js: &JsValue = navigator.as_ref();

    let cores = navigator.hardware_concurrency();
    DeviceSignals {
        in_browser: true,
        viewport_width: dom::viewport_width(&window),
        user_agent: navigator.user_agent().ok(),
        mobile_hint: get(nav_js, "userAgentData")
            .and_then(|data| get(&data, "mobile"))
            .and_then(|m| m.as_bool()),
        cpu_cores: (cores > 0.0).then_some(cores),
        device_memory_gb: get(nav_js, "deviceMemory").and_then(|m| m.as_f64()),
        max_touch_points: u32::try_from(navigator.max_touch_points()).ok(),
        has_touch_events: Reflect::has(window.as_ref(), &JsValue::from_str("ontouchstart"))
            .unwrap_or(false),
        prefers_reduced_motion: prefers_reduced_motion(),
    }
}

fn reduced_motion_query() -> Option<web::MediaQueryList> {
    web::window()?.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

pub fn prefers_reduced_motion() -> bool {
    reduced_motion_query().map(|m| m.matches()).unwrap_or(false)
}

/// Call `on_change` whenever the system reduced-motion preference flips.
/// `None` when media queries are unavailable.
pub fn watch_reduced_motion(mut on_change: impl FnMut(bool) + 'static) -> Option<EventListener> {
    let query = reduced_motion_query()?;
    Some(EventListener::new(&query, "change", move |event| {
        if let Some(ev) = event.dyn_ref::<web::MediaQueryListEvent>() {
            on_change(ev.matches());
        }
    }))
}

/// requestAnimationFrame, CSS transforms and SVG geometry must all exist.
pub fn is_browser_supported(document: &web::Document) -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let has_raf = Reflect::has(window.as_ref(), &JsValue::from_str("requestAnimationFrame"))
        .unwrap_or(false);
    let has_transform = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| {
            let style: JsValue = el.style().into();
            Reflect::has(&style, &JsValue::from_str("transform")).unwrap_or(false)
        })
        .unwrap_or(false);
    let has_svg = document
        .create_element_ns(Some(SVG_NS), "svg")
        .ok()
        .map(|svg| Reflect::has(svg.as_ref(), &JsValue::from_str("createSVGRect")).unwrap_or(false))
        .unwrap_or(false);
    has_raf && has_transform && has_svg
}
