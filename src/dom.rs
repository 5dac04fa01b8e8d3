use crate::constants::SVG_NS;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Click listener on the element with `element_id`, if it exists. The
/// returned guard unregisters on drop.
#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Option<EventListener> {
    let el = document.get_element_by_id(element_id)?;
    Some(EventListener::new(&el, "click", move |_| handler()))
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn create_svg_element(document: &web::Document, name: &str) -> anyhow::Result<web::Element> {
    document
        .create_element_ns(Some(SVG_NS), name)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", name, e))
}

/// Set several attributes, ignoring individual failures.
pub fn set_attrs(el: &web::Element, attrs: &[(&str, &str)]) {
    for (name, value) in attrs {
        _ = el.set_attribute(name, value);
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Viewport height in CSS pixels, 0 when unavailable.
pub fn viewport_height(window: &web::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_width(window: &web::Window) -> Option<f64> {
    window.inner_width().ok().and_then(|v| v.as_f64())
}
