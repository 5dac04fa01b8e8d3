use crate::constants::PAGE_ROOT_ID;
use crate::dom;
use crate::probe;
use crate::reveal::{self, Section};
use crate::scene::ThreadScene;
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use unfold_core::constants::RESIZE_DEBOUNCE_MS;
use unfold_core::{
    backdrop_gradient, generate_circles, is_mobile_device, scroll_fraction, AnimationState,
    Circle, FrameInput, ProgressState, RevealCoordinator, SceneStyle, ThreadContext, TriggerBand,
};
use web_sys as web;

// Longest frame delta fed to the smoothing chain (e.g. after a background tab).
const MAX_FRAME_DT_SEC: f64 = 0.25;

pub struct FrameContext {
    document: web::Document,
    container: web::Element,
    scene: ThreadScene,
    circles: Vec<Circle>,
    sections: Vec<Section>,
    reveal: RevealCoordinator,

    state: AnimationState,
    is_mobile: bool,

    progress: ProgressState,
    scroll_target: f64,
    last_instant: Instant,
}

impl FrameContext {
    fn new(
        document: web::Document,
        container: web::Element,
        sections: Vec<Section>,
        state: AnimationState,
    ) -> anyhow::Result<Self> {
        let is_mobile = is_mobile_device(&probe::read_signals());
        let circles = generate_circles(&state.config, is_mobile);
        let style = SceneStyle::new(&state.config, is_mobile, state.is_reduced_motion);
        let scene = ThreadScene::build(&document, &circles, &style)?;
        container
            .append_child(&scene.svg)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let reveal = RevealCoordinator::new(sections.iter().map(|s| s.id), TriggerBand::default());
        reveal::reset_sections(&sections);
        Ok(Self {
            document,
            container,
            scene,
            circles,
            sections,
            reveal,
            state,
            is_mobile,
            progress: ProgressState::default(),
            scroll_target: 0.0,
            last_instant: Instant::now(),
        })
    }

    fn thread_context(&self) -> ThreadContext {
        ThreadContext {
            config: self.state.config,
            section_count: self.sections.len(),
            is_mobile: self.is_mobile,
            reduced_motion: self.state.is_reduced_motion,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f64().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let out = self.progress.step(&FrameInput {
            scroll_target: self.scroll_target,
            dt_sec,
            circles: &self.circles,
            ctx: self.thread_context(),
        });
        self.progress = out.progress;
        self.scene.draw(&out.paths, out.dash_offset);

        for (i, style) in self.reveal.tick(dt_sec) {
            if let Some(el) = self.sections.get(i).and_then(|s| s.element.as_ref()) {
                reveal::apply_style(el, &style);
            }
        }
    }

    /// Sample scroll position, fire section triggers and tint the backdrop.
    pub fn on_scroll(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let viewport_height = dom::viewport_height(&window);
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let scroll_height = self
            .document
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0);
        self.scroll_target = scroll_fraction(scroll_y, scroll_height, viewport_height);

        let reduced = self.state.is_reduced_motion;
        for (i, section) in self.sections.iter().enumerate() {
            let Some(el) = section.element.as_ref() else {
                continue;
            };
            let geom = reveal::measure(el, viewport_height);
            if let Some(event) = self.reveal.observe(i, &geom, reduced) {
                log::debug!("[reveal] #{} {:?}", section.id, event);
            }
        }

        if let Some(root) = dom::html_element_by_id(&self.document, PAGE_ROOT_ID) {
            let bg = backdrop_gradient(self.scroll_target, self.state.config.color_intensity);
            dom::set_style(&root, "background", &bg);
        }
    }

    /// Regenerate circle geometry and the static scene.
    fn rebuild(&mut self) {
        let circles = generate_circles(&self.state.config, self.is_mobile);
        let style = SceneStyle::new(&self.state.config, self.is_mobile, self.state.is_reduced_motion);
        match ThreadScene::build(&self.document, &circles, &style) {
            Ok(scene) => {
                if self.container.append_child(&scene.svg).is_err() {
                    log::warn!("[thread] could not attach rebuilt scene");
                    return;
                }
                self.scene.remove();
                self.scene = scene;
                self.circles = circles;
            }
            Err(e) => log::warn!("[thread] scene rebuild failed: {:?}", e),
        }
    }

    pub fn on_resize(&mut self) {
        self.is_mobile = is_mobile_device(&probe::read_signals());
        self.rebuild();
        self.on_scroll();
    }

    pub fn apply_state(&mut self, state: &AnimationState) {
        let changed = state.config != self.state.config
            || state.is_reduced_motion != self.state.is_reduced_motion;
        self.state = *state;
        if changed {
            self.rebuild();
        }
    }

    fn teardown(&mut self) {
        self.scene.remove();
        reveal::reset_sections(&self.sections);
    }
}

/// The mounted thread animation. Dropping it cancels the frame loop, the
/// pending resize timer and every listener, and removes the SVG.
pub struct ThreadView {
    ctx: Rc<RefCell<FrameContext>>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    resize_timer: Rc<RefCell<Option<Timeout>>>,
    _listeners: Vec<EventListener>,
}

impl ThreadView {
    pub fn mount(
        document: &web::Document,
        container: &web::Element,
        sections: Vec<Section>,
        state: &AnimationState,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let ctx = Rc::new(RefCell::new(FrameContext::new(
            document.clone(),
            container.clone(),
            sections,
            *state,
        )?));
        ctx.borrow_mut().on_scroll();

        let mut listeners = Vec::new();
        let ctx_scroll = ctx.clone();
        // gloo listeners are passive by default.
        listeners.push(EventListener::new(&window, "scroll", move |_| {
            ctx_scroll.borrow_mut().on_scroll()
        }));

        let resize_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let timer_slot = resize_timer.clone();
        let ctx_resize = ctx.clone();
        listeners.push(EventListener::new(&window, "resize", move |_| {
            let ctx = ctx_resize.clone();
            // Replacing the slot drops (and cancels) the previous timeout.
            *timer_slot.borrow_mut() = Some(Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                ctx.borrow_mut().on_resize();
            }));
        }));

        let frame = Rc::new(RefCell::new(None));
        start_loop(ctx.clone(), frame.clone());
        log::info!("[thread] mounted");

        Ok(Self {
            ctx,
            frame,
            resize_timer,
            _listeners: listeners,
        })
    }

    pub fn apply_state(&self, state: &AnimationState) {
        self.ctx.borrow_mut().apply_state(state);
    }
}

impl Drop for ThreadView {
    fn drop(&mut self) {
        self.frame.borrow_mut().take();
        self.resize_timer.borrow_mut().take();
        self.ctx.borrow_mut().teardown();
        log::info!("[thread] unmounted");
    }
}

pub fn start_loop(
    frame_ctx: Rc<RefCell<FrameContext>>,
    slot: Rc<RefCell<Option<AnimationFrame>>>,
) {
    let next_slot = slot.clone();
    let handle = request_animation_frame(move |_timestamp| {
        frame_ctx.borrow_mut().frame();
        start_loop(frame_ctx, next_slot);
    });
    *slot.borrow_mut() = Some(handle);
}
