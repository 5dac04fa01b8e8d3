use js_sys::{Function, Promise, Reflect};
use unfold_core::constants::IDLE_FALLBACK_MS;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn request_idle(window: &web::Window, callback: &Function) -> bool {
    let Ok(idle) = Reflect::get(window.as_ref(), &JsValue::from_str("requestIdleCallback")) else {
        return false;
    };
    match idle.dyn_into::<Function>() {
        Ok(idle) => idle.call1(window.as_ref(), callback).is_ok(),
        Err(_) => false,
    }
}

/// Resolve once the browser is idle, or after a fixed delay where
/// `requestIdleCallback` is not supported.
pub async fn when_idle() {
    let Some(window) = web::window() else {
        return;
    };
    let promise = Promise::new(&mut |resolve, _reject| {
        if request_idle(&window, &resolve) {
            return;
        }
        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, IDLE_FALLBACK_MS as i32)
            .is_err()
        {
            _ = resolve.call0(&JsValue::NULL);
        }
    });
    if let Err(e) = JsFuture::from(promise).await {
        log::warn!("[schedule] idle wait failed: {:?}", e);
    }
}
