//! Procedural thread generator.
//!
//! Every decorative circle owns one thread. While scroll progress is low the
//! thread is a wobbling loop around its circle ([`circle_thread`]); past the
//! converging threshold it becomes a strand that runs down the page and
//! gathers toward the horizontal center ([`converging_thread`]).

use crate::config::AnimationConfig;
use crate::constants::*;
use crate::math::{lerp, round};
use crate::path::PathBuilder;
use glam::DVec2;
use std::f64::consts::{PI, TAU};

/// A decorative motif in the 0-100 normalized space.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: &'static str,
    pub accent_color: &'static str,
    pub opacity: f64,
    pub frequency: f64,
    pub phase: f64,
    pub noise_offset: f64,
}

impl Circle {
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// Lay out the six palette circles. Pure in `(config, is_mobile)`.
pub fn generate_circles(config: &AnimationConfig, is_mobile: bool) -> Vec<Circle> {
    let center_y = if is_mobile {
        CLUSTER_CENTER_Y_MOBILE
    } else {
        CLUSTER_CENTER_Y_DESKTOP
    };
    let spread = if is_mobile {
        CLUSTER_SPREAD_MOBILE
    } else {
        CLUSTER_SPREAD_DESKTOP
    };
    let size_mult = config.complexity.size_multiplier();
    let opacity_base = CIRCLE_OPACITY_BASE + config.color_intensity * CIRCLE_OPACITY_COLOR_SPAN;

    CIRCLE_PALETTE
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let i = i as f64;
            Circle {
                x: round(CLUSTER_CENTER_X + spec.angle.cos() * (spec.size * 0.25 * spread)),
                y: round(center_y + spec.angle.sin() * (spec.size * 0.2 * spread)),
                radius: round(spec.size * 0.4 * size_mult),
                color: spec.main,
                accent_color: spec.accent,
                opacity: round(opacity_base + i * CIRCLE_OPACITY_STEP),
                frequency: round(CIRCLE_FREQUENCY_BASE + i * CIRCLE_FREQUENCY_STEP),
                phase: spec.angle,
                noise_offset: round(i * PI / 3.0),
            }
        })
        .collect()
}

/// Which generator draws a thread at a given progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThreadRegime {
    Loop,
    Converging,
}

/// Crossfade weights of the two regimes. Only `converging` decides the
/// regime; see [`ThreadRegime::for_progress`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseWeights {
    pub circle: f64,
    pub converging: f64,
}

impl PhaseWeights {
    pub fn for_progress(progress: f64) -> Self {
        Self {
            circle: ((CIRCLE_PHASE_END - progress) / PHASE_BAND).clamp(0.0, 1.0),
            converging: ((progress - CONVERGING_PHASE_START) / PHASE_BAND).clamp(0.0, 1.0),
        }
    }
}

impl ThreadRegime {
    /// Loops only while the converging weight is still zero. The overlap
    /// band where both weights are non-zero draws converging strands.
    pub fn for_progress(progress: f64) -> Self {
        let w = PhaseWeights::for_progress(progress);
        if w.circle > 0.0 && w.converging == 0.0 {
            ThreadRegime::Loop
        } else {
            ThreadRegime::Converging
        }
    }
}

/// Inputs shared by every thread in a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThreadContext {
    pub config: AnimationConfig,
    pub section_count: usize,
    pub is_mobile: bool,
    pub reduced_motion: bool,
}

/// Path data for one circle's thread at `progress`.
pub fn thread_path(progress: f64, circle: &Circle, ctx: &ThreadContext) -> String {
    match ThreadRegime::for_progress(progress) {
        ThreadRegime::Loop => circle_thread(progress, circle, &ctx.config, ctx.reduced_motion),
        ThreadRegime::Converging => converging_thread(
            progress,
            circle,
            ctx.section_count,
            &ctx.config,
            ctx.is_mobile,
        ),
    }
}

/// Angular step used by the looping regime.
pub fn loop_step(reduced_motion: bool) -> f64 {
    if reduced_motion {
        LOOP_STEP_REDUCED
    } else {
        LOOP_STEP
    }
}

fn loop_point(circle: &Circle, angle: f64, r: f64, i: f64) -> DVec2 {
    DVec2::new(
        round(circle.x + angle.cos() * r * (1.0 + (i * 0.5).sin() * 0.2)),
        round(circle.y + angle.sin() * r * (1.0 + (i * 0.5).cos() * 0.2)),
    )
}

/// Regime A: a closed, wobbling loop whose amplitude shrinks as progress grows.
pub fn circle_thread(
    progress: f64,
    circle: &Circle,
    config: &AnimationConfig,
    reduced_motion: bool,
) -> String {
    let turns = (LOOP_TURNS_BASE * config.complexity.loop_multiplier()).floor();
    let limit = turns * TAU;
    let step = loop_step(reduced_motion);
    let steps = (limit / step).floor() as usize;
    let mut path = PathBuilder::with_capacity((steps + 1) * 40);

    for k in 0..=steps {
        let i = k as f64 * step;
        let angle = round(circle.phase + i + (i * circle.frequency).sin() * (1.0 - progress));
        let r = round(circle.radius * (0.8 + (i * 3.0).sin() * 0.3) * (1.0 - progress * 0.5));
        let p = loop_point(circle, angle, r, i);
        if k == 0 {
            path.move_to(p);
            continue;
        }
        let prev = loop_point(circle, angle - step, r, i - step);
        let noise = DVec2::new(
            round((i * 5.0 + circle.noise_offset).sin() * LOOP_NOISE_AMPLITUDE),
            round((i * 5.0 + circle.noise_offset).cos() * LOOP_NOISE_AMPLITUDE),
        );
        let ctrl = DVec2::new(
            round(prev.x + (p.x - prev.x) * 0.5 + noise.x),
            round(prev.y + (p.y - prev.y) * 0.5 + noise.y),
        );
        path.quad_to(ctrl, p);
    }
    path.finish()
}

/// Segment count of a converging strand for `section_count` page sections.
pub fn strand_segments(section_count: usize, config: &AnimationConfig) -> usize {
    let scaled = (section_count as f64
        * STRAND_SEGMENTS_PER_SECTION
        * config.complexity.detail_multiplier())
    .floor() as usize;
    scaled.max(STRAND_MIN_SEGMENTS)
}

/// How far strands have gathered, and how much wobble remains.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Convergence {
    pub convergence: f64,
    pub randomness: f64,
}

impl Convergence {
    pub fn for_progress(progress: f64) -> Self {
        let transition = ((progress - CONVERGE_START) / CONVERGE_SPAN).clamp(0.0, 1.0);
        Self {
            convergence: round(transition.min(1.0)),
            randomness: round((1.0 - transition).max(MIN_RANDOMNESS)),
        }
    }
}

struct StrandShape {
    intensity: f64,
    wave_amplitude: f64,
    frequency_swing: f64,
    spread: f64,
    noise_gain: f64,
    control_noise: f64,
}

impl StrandShape {
    fn new(config: &AnimationConfig, is_mobile: bool, randomness: f64) -> Self {
        let intensity = config.intensity * STRAND_INTENSITY_GAIN;
        let base_amplitude = if is_mobile { 25.0 } else { 35.0 };
        Self {
            intensity,
            wave_amplitude: round(base_amplitude * randomness * intensity),
            frequency_swing: if is_mobile { 1.4 } else { 1.5 },
            spread: if is_mobile { 12.0 } else { 15.0 },
            noise_gain: if is_mobile { 8.0 } else { 10.0 },
            control_noise: if is_mobile { 3.0 } else { 4.0 },
        }
    }
}

/// Point at parameter `t` of the strand drawn for `circle` at `progress`.
pub fn converging_point(
    progress: f64,
    t: f64,
    circle: &Circle,
    config: &AnimationConfig,
    is_mobile: bool,
) -> DVec2 {
    let conv = Convergence::for_progress(progress);
    let shape = StrandShape::new(config, is_mobile, conv.randomness);
    strand_point(progress, t, circle, &conv, &shape)
}

fn strand_point(
    progress: f64,
    t: f64,
    circle: &Circle,
    conv: &Convergence,
    shape: &StrandShape,
) -> DVec2 {
    let end_y = STRAND_TOTAL_HEIGHT - STRAND_END_MARGIN;
    let y = round(circle.y + (end_y - circle.y) * t * progress);

    let frequency = round(circle.frequency + (t * TAU).sin() * shape.frequency_swing);
    let noise = round(
        (t * 10.0 + circle.phase).sin()
            * (t * 5.0).cos()
            * (1.0 - conv.convergence)
            * shape.intensity,
    );
    let target_x = round(
        CLUSTER_CENTER_X + (t * TAU + circle.phase).sin() * shape.spread * (1.0 - conv.convergence),
    );
    let base_x = round(lerp(circle.x, target_x, t * conv.convergence));
    let x = round(
        base_x
            + (t * PI * frequency + circle.phase).sin() * shape.wave_amplitude
            + noise * shape.noise_gain,
    );
    DVec2::new(x, y)
}

/// Regime B: a strand from the circle down toward a shared collection point.
pub fn converging_thread(
    progress: f64,
    circle: &Circle,
    section_count: usize,
    config: &AnimationConfig,
    is_mobile: bool,
) -> String {
    let conv = Convergence::for_progress(progress);
    let shape = StrandShape::new(config, is_mobile, conv.randomness);
    let segments = strand_segments(section_count, config);
    let mut path = PathBuilder::with_capacity((segments + 1) * 40);
    let mut prev = circle.center();

    for i in 0..=segments {
        let t = i as f64 / segments as f64;
        let p = strand_point(progress, t, circle, &conv, &shape);
        if i == 0 {
            path.move_to(p);
        } else {
            let wobble = shape.control_noise * conv.randomness * shape.intensity;
            let noise = DVec2::new(
                round((t * 8.0 + circle.noise_offset).sin() * wobble),
                round((t * 8.0 + circle.noise_offset).cos() * wobble),
            );
            let ctrl = DVec2::new(
                round(prev.x + (p.x - prev.x) * 0.5 + noise.x),
                round(prev.y + (p.y - prev.y) * 0.5 + noise.y),
            );
            path.quad_to(ctrl, p);
        }
        prev = p;
    }
    path.finish()
}
