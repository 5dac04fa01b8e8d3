use crate::panel;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn closes_panel(key: &str) -> bool {
    key == "Escape"
}

pub fn handle_panel_keydown(ev: &web::KeyboardEvent, document: &web::Document) {
    if closes_panel(&ev.key()) && panel::is_open(document) {
        panel::hide(document);
    }
}

/// Escape closes the accessibility panel while it is open.
pub fn wire_escape_closes_panel(document: &web::Document) -> EventListener {
    let doc = document.clone();
    EventListener::new(document, "keydown", move |event| {
        if let Some(ev) = event.dyn_ref::<web::KeyboardEvent>() {
            handle_panel_keydown(ev, &doc);
        }
    })
}
