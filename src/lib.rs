#![cfg(target_arch = "wasm32")]
use crate::frame::ThreadView;
use crate::reveal::ScrollClassObserver;
use crate::storage::BrowserStorage;
use std::cell::RefCell;
use std::rc::Rc;
use unfold_core::{AnimationState, AnimationStore, DeviceInfo, StoreEvent};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod panel;
mod probe;
mod reveal;
mod scene;
mod schedule;
mod storage;

pub(crate) type SharedStore = Rc<RefCell<AnimationStore<BrowserStorage>>>;

/// Everything that lives for the page and depends on the current preferences.
struct Page {
    document: web::Document,
    supported: bool,
    view: Option<ThreadView>,
    scroll_classes: Option<ScrollClassObserver>,
}

impl Page {
    fn apply(&mut self, state: &AnimationState) {
        self.apply_view(state);
        self.apply_scroll_classes(state);
    }

    fn apply_view(&mut self, state: &AnimationState) {
        let wanted = self.supported && state.effective_enabled();
        if !wanted {
            // Dropping the view tears down its loop, listeners and SVG.
            self.view = None;
        } else if let Some(view) = &self.view {
            view.apply_state(state);
        } else {
            self.view = mount_view(&self.document, state);
        }
    }

    fn apply_scroll_classes(&mut self, state: &AnimationState) {
        if state.is_reduced_motion {
            self.scroll_classes = None;
        } else if self.scroll_classes.is_none() {
            self.scroll_classes = ScrollClassObserver::attach(&self.document);
        }
    }
}

fn mount_view(document: &web::Document, state: &AnimationState) -> Option<ThreadView> {
    let Some(container) = document.get_element_by_id(constants::CONTAINER_ID) else {
        log::warn!("[thread] #{} missing; thread not mounted", constants::CONTAINER_ID);
        return None;
    };
    _ = container.set_attribute("aria-hidden", "true");
    let sections = reveal::resolve_sections(document);
    match ThreadView::mount(document, &container, sections, state) {
        Ok(view) => Some(view),
        Err(e) => {
            log::error!("[thread] mount failed: {:?}", e);
            None
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("unfold-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let device = DeviceInfo::from_signals(&probe::read_signals());
    log::info!(
        "[probe] mobile={} performance={} reduced_motion={} touch={}",
        device.is_mobile,
        device.performance_level.as_str(),
        device.prefers_reduced_motion,
        device.has_touch_screen
    );
    let supported = probe::is_browser_supported(&document);
    if !supported {
        log::warn!("[probe] browser lacks SVG/transform/rAF support; thread disabled");
    }

    let store: SharedStore = Rc::new(RefCell::new(AnimationStore::load(
        BrowserStorage::open(),
        &device,
    )));

    panel::populate_complexity_options(&document);
    panel::sync(&document, store.borrow().state());

    // Page-lifetime listeners.
    events::wire_escape_closes_panel(&document).forget();
    events::wire_outside_click(&document).forget();
    for listener in events::wire_panel_controls(&document, &store) {
        listener.forget();
    }
    let rm_store = store.clone();
    if let Some(listener) = probe::watch_reduced_motion(move |reduced| {
        rm_store.borrow_mut().set_reduced_motion(reduced);
    }) {
        listener.forget();
    }

    let page = Rc::new(RefCell::new(Page {
        document: document.clone(),
        supported,
        view: None,
        scroll_classes: None,
    }));

    let listener_page = page.clone();
    let listener_doc = document.clone();
    store
        .borrow_mut()
        .subscribe(move |event: StoreEvent, state: &AnimationState| {
            log::debug!("[prefs] {:?}", event);
            panel::sync(&listener_doc, state);
            listener_page.borrow_mut().apply(state);
        });

    // Let the page settle before building the scene.
    schedule::when_idle().await;
    let state = *store.borrow().state();
    page.borrow_mut().apply(&state);

    // The store (and, through its subscriber, the page) lives for the session.
    std::mem::forget(store);
    Ok(())
}
