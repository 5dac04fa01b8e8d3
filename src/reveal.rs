use crate::constants::{ANIMATE_ON_SCROLL_CLASS, IN_VIEW_CLASS, IN_VIEW_THRESHOLD, SECTION_IDS};
use crate::dom;
use unfold_core::{RevealStyle, SectionGeometry};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A page region the thread reacts to. `element` is `None` when the anchor
/// is missing from the document.
#[derive(Clone, Debug)]
pub struct Section {
    pub id: &'static str,
    pub element: Option<web::HtmlElement>,
}

pub fn resolve_sections(document: &web::Document) -> Vec<Section> {
    SECTION_IDS
        .iter()
        .map(|id| {
            let element = dom::html_element_by_id(document, id);
            if element.is_none() {
                log::warn!("[reveal] section #{} not found; it will not animate", id);
            }
            Section { id, element }
        })
        .collect()
}

pub fn measure(el: &web::HtmlElement, viewport_height: f64) -> SectionGeometry {
    let rect = el.get_bounding_client_rect();
    SectionGeometry {
        top: rect.top(),
        height: rect.height(),
        viewport_height,
    }
}

pub fn apply_style(el: &web::HtmlElement, style: &RevealStyle) {
    dom::set_style(el, "opacity", &unfold_core::round(style.opacity).to_string());
    dom::set_style(el, "transform", &style.transform());
    dom::set_style(el, "visibility", "visible");
}

/// Put every section back to fully visible.
pub fn reset_sections(sections: &[Section]) {
    for el in sections.iter().filter_map(|s| s.element.as_ref()) {
        apply_style(el, &RevealStyle::VISIBLE);
    }
}

/// Adds `in-view` to `.animate-on-scroll` blocks the first time they become
/// visible. Disconnects on drop.
pub struct ScrollClassObserver {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl ScrollClassObserver {
    pub fn attach(document: &web::Document) -> Option<Self> {
        let nodes = document
            .query_selector_all(&format!(".{}", ANIMATE_ON_SCROLL_CLASS))
            .ok()?;
        if nodes.length() == 0 {
            return None;
        }
        let callback = Closure::wrap(Box::new(
            |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let target = entry.target();
                        _ = target.class_list().add_1(IN_VIEW_CLASS);
                        observer.unobserve(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let options = web::IntersectionObserverInit::new();
        options.set_threshold(&IN_VIEW_THRESHOLD.into());
        options.set_root_margin("0px");
        let observer = web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| log::warn!("[reveal] IntersectionObserver unavailable: {:?}", e))
        .ok()?;

        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                observer.observe(&el);
            }
        }
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ScrollClassObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
