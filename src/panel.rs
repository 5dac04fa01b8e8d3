//! Accessibility settings panel: open/close state and syncing the controls
//! with the preference store.

use crate::constants::*;
use crate::dom;
use unfold_core::panel::{complexity_option_label, intensity_label, speed_label};
use unfold_core::AnimationState;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_MENU_ID) {
        _ = el.class_list().remove_1("hidden");
        _ = el.set_attribute("style", "");
    }
    set_expanded(document, true);
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_MENU_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
    set_expanded(document, false);
}

#[inline]
pub fn is_open(document: &web::Document) -> bool {
    document
        .get_element_by_id(PANEL_MENU_ID)
        .map(|el| {
            !el.class_list().contains("hidden")
                && !el
                    .get_attribute("style")
                    .map(|s| s.contains("display:none"))
                    .unwrap_or(false)
        })
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_open(document) {
        hide(document);
    } else {
        show(document);
    }
}

fn set_expanded(document: &web::Document, open: bool) {
    if let Some(button) = document.get_element_by_id(PANEL_BUTTON_ID) {
        _ = button.set_attribute("aria-expanded", if open { "true" } else { "false" });
    }
}

/// True when `target` sits inside the panel (button included).
pub fn contains(target: &web::Element) -> bool {
    matches!(target.closest(PANEL_ROOT_SELECTOR), Ok(Some(_)))
}

/// Fill the complexity `<select>` options.
pub fn populate_complexity_options(document: &web::Document) {
    let Some(select) = document.get_element_by_id(COMPLEXITY_SELECT_ID) else {
        return;
    };
    if select.child_element_count() > 0 {
        return;
    }
    for c in unfold_core::Complexity::ALL {
        if let Ok(option) = document.create_element("option") {
            _ = option.set_attribute("value", c.as_str());
            option.set_text_content(Some(complexity_option_label(c)));
            _ = select.append_child(&option);
        }
    }
}

/// Reflect `state` into the panel controls.
pub fn sync(document: &web::Document, state: &AnimationState) {
    let enabled = state.effective_enabled();
    let config = state.config;

    if let Some(toggle) = document.get_element_by_id(TOGGLE_ANIMATIONS_ID) {
        _ = toggle.set_attribute("aria-checked", if enabled { "true" } else { "false" });
        _ = toggle
            .class_list()
            .toggle_with_force("is-on", enabled);
    }

    if let Some(input) = input_by_id(document, SPEED_INPUT_ID) {
        input.set_value(&config.speed.to_string());
        input.set_disabled(!enabled);
    }
    dom::set_text(document, SPEED_LABEL_ID, speed_label(config.speed));

    if let Some(input) = input_by_id(document, INTENSITY_INPUT_ID) {
        input.set_value(&config.intensity.to_string());
        input.set_disabled(!enabled);
    }
    dom::set_text(document, INTENSITY_LABEL_ID, &intensity_label(config.intensity));

    if let Some(select) = document
        .get_element_by_id(COMPLEXITY_SELECT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlSelectElement>().ok())
    {
        select.set_value(config.complexity.as_str());
        select.set_disabled(!enabled);
    }

    if let Some(note) = document.get_element_by_id(REDUCED_MOTION_NOTE_ID) {
        let style = if state.is_reduced_motion { "" } else { "display:none" };
        _ = note.set_attribute("style", style);
    }
}

pub fn input_by_id(document: &web::Document, id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}
