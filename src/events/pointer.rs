use crate::constants::*;
use crate::dom;
use crate::panel;
use crate::SharedStore;
use gloo::events::EventListener;
use unfold_core::panel::PanelInput;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Clicking anywhere outside the panel closes it.
pub fn wire_outside_click(document: &web::Document) -> EventListener {
    let doc = document.clone();
    EventListener::new(document, "click", move |event| {
        if !panel::is_open(&doc) {
            return;
        }
        let inside = event
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|el| panel::contains(&el))
            .unwrap_or(false);
        if !inside {
            panel::hide(&doc);
        }
    })
}

fn apply_input(store: &SharedStore, input: PanelInput) {
    match input.to_patch() {
        Ok(patch) if !patch.is_empty() => store.borrow_mut().update_config(patch),
        Ok(_) => {}
        Err(e) => log::warn!("[panel] ignoring control value: {e}"),
    }
}

fn wire_value_listener(
    document: &web::Document,
    id: &str,
    event_type: &'static str,
    store: &SharedStore,
    make: fn(String) -> PanelInput,
) -> Option<EventListener> {
    let el = document.get_element_by_id(id)?;
    let store = store.clone();
    Some(EventListener::new(&el, event_type, move |event| {
        let value = event.target().and_then(|t| {
            if let Some(input) = t.dyn_ref::<web::HtmlInputElement>() {
                Some(input.value())
            } else {
                t.dyn_ref::<web::HtmlSelectElement>().map(|s| s.value())
            }
        });
        if let Some(value) = value {
            apply_input(&store, make(value));
        }
    }))
}

/// Open/close button, animation toggle and the three config controls.
pub fn wire_panel_controls(document: &web::Document, store: &SharedStore) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    let doc = document.clone();
    listeners.extend(dom::add_click_listener(document, PANEL_BUTTON_ID, move || {
        panel::toggle(&doc);
    }));

    let doc = document.clone();
    listeners.extend(dom::add_click_listener(document, PANEL_CLOSE_ID, move || {
        panel::hide(&doc);
    }));

    let toggle_store = store.clone();
    listeners.extend(dom::add_click_listener(
        document,
        TOGGLE_ANIMATIONS_ID,
        move || {
            toggle_store.borrow_mut().toggle_animations();
        },
    ));

    listeners.extend(wire_value_listener(
        document,
        SPEED_INPUT_ID,
        "input",
        store,
        PanelInput::Speed,
    ));
    listeners.extend(wire_value_listener(
        document,
        INTENSITY_INPUT_ID,
        "input",
        store,
        PanelInput::Intensity,
    ));
    listeners.extend(wire_value_listener(
        document,
        COMPLEXITY_SELECT_ID,
        "change",
        store,
        PanelInput::Complexity,
    ));

    listeners
}
