//! Per-frame progress smoothing and thread regeneration.
//!
//! The frame loop owns a [`ProgressState`] and calls [`ProgressState::step`]
//! once per animation frame with an immutable [`FrameInput`]. The result
//! carries the next state together with the path data for every circle, all
//! computed from a single progress snapshot.

use crate::constants::{
    PATH_FOLLOW, SCROLL_STIFFNESS, SCRUB_LAG_REDUCED_SEC, SCRUB_LAG_SEC, THREAD_LENGTH,
};
use crate::math::{lerp, scrub_step, spring_lerp};
use crate::thread::{thread_path, Circle, ThreadContext};

// Mobile and desktop currently smooth at the same rate.
const MOBILE_SMOOTHING_FACTOR: f64 = 1.0;

/// Fraction of the page scrolled, in \[0, 1\]. Pages that cannot scroll
/// report 0.
pub fn scroll_fraction(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

pub fn scrub_lag(reduced_motion: bool) -> f64 {
    if reduced_motion {
        SCRUB_LAG_REDUCED_SEC
    } else {
        SCRUB_LAG_SEC
    }
}

/// Spring stiffness toward the scrubbed scroll position.
pub fn scroll_stiffness(speed: f64, is_mobile: bool) -> f64 {
    let class = if is_mobile { MOBILE_SMOOTHING_FACTOR } else { 1.0 };
    (SCROLL_STIFFNESS * speed * class).clamp(0.0, 1.0)
}

/// Follow factor of the path progress toward the current progress.
pub fn path_follow(speed: f64, is_mobile: bool) -> f64 {
    let class = if is_mobile { MOBILE_SMOOTHING_FACTOR } else { 1.0 };
    (PATH_FOLLOW * speed * class).clamp(0.0, 1.0)
}

/// `stroke-dashoffset` revealing the thread as progress grows.
pub fn dash_offset(current: f64) -> f64 {
    lerp(THREAD_LENGTH, 0.0, current)
}

/// The three chained progress values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProgressState {
    /// Scroll fraction after scrubbing.
    pub scroll: f64,
    /// Spring-smoothed progress.
    pub current: f64,
    /// Progress used for shape generation.
    pub path: f64,
}

/// Snapshot read by one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a> {
    /// Latest sampled scroll fraction.
    pub scroll_target: f64,
    pub dt_sec: f64,
    pub circles: &'a [Circle],
    pub ctx: ThreadContext,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutput {
    pub progress: ProgressState,
    /// One entry per input circle, in order.
    pub paths: Vec<String>,
    pub dash_offset: f64,
}

impl ProgressState {
    /// Advance the smoothing chain only.
    pub fn advance(&self, scroll_target: f64, dt_sec: f64, ctx: &ThreadContext) -> Self {
        let speed = ctx.config.speed;
        let scroll = scrub_step(
            self.scroll,
            scroll_target.clamp(0.0, 1.0),
            dt_sec,
            scrub_lag(ctx.reduced_motion),
        );
        let current = spring_lerp(self.current, scroll, scroll_stiffness(speed, ctx.is_mobile));
        let path = lerp(self.path, current, path_follow(speed, ctx.is_mobile));
        Self {
            scroll,
            current,
            path,
        }
    }

    /// Advance the chain and regenerate every thread from the new path progress.
    pub fn step(&self, input: &FrameInput<'_>) -> FrameOutput {
        let next = self.advance(input.scroll_target, input.dt_sec, &input.ctx);
        let paths = input
            .circles
            .iter()
            .map(|c| thread_path(next.path, c, &input.ctx))
            .collect();
        FrameOutput {
            progress: next,
            paths,
            dash_offset: dash_offset(next.current),
        }
    }
}
