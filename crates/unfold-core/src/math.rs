//! Small numeric primitives shared by the thread generator and the frame loop.

use crate::path::PathBuilder;
use glam::DVec2;

/// Move `current` a fraction `stiffness` of the way toward `target`.
///
/// This is a critically damped exponential approach: no velocity is carried
/// between calls, so it never overshoots. `stiffness` of 1 lands on the target.
#[inline]
pub fn spring_lerp(current: f64, target: f64, stiffness: f64) -> f64 {
    current + (target - current) * stiffness
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Quantize to the nearest 1/1000; ties round toward +inf.
#[inline]
pub fn round(n: f64) -> f64 {
    (n * 1000.0 + 0.5).floor() / 1000.0
}

#[inline]
pub fn round_vec(p: DVec2) -> DVec2 {
    DVec2::new(round(p.x), round(p.y))
}

/// Cubic easing curves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    pub const ALL: [Easing; 3] = [Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut];
}

/// Apply `kind` to `t`. Input is clamped to \[0, 1\] first, so the output
/// always stays in \[0, 1\].
pub fn apply_easing(t: f64, kind: Easing) -> f64 {
    let t = t.clamp(0.0, 1.0);
    match kind {
        Easing::EaseIn => t * t * t,
        Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
        Easing::EaseInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
    }
}

/// Build a smooth cubic path through `points`.
///
/// Each segment gets control points offset along the segment by `tension`
/// of its span. Fewer than two points produce an empty string.
pub fn smooth_path(points: &[DVec2], tension: f64) -> String {
    if points.len() < 2 {
        return String::new();
    }
    let mut path = PathBuilder::with_capacity(points.len() * 48);
    path.move_to(points[0]);
    for pair in points.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let d = next - current;
        let c1 = round_vec(current + d * tension);
        let c2 = round_vec(next - d * tension);
        path.cubic_to(c1, c2, next);
    }
    path.finish()
}

/// Time-based catch-up used to scrub raw scroll input: after `lag_sec`
/// seconds the value has covered ~95% of the distance to `target`.
pub fn scrub_step(current: f64, target: f64, dt_sec: f64, lag_sec: f64) -> f64 {
    if lag_sec <= 0.0 {
        return target;
    }
    let alpha = 1.0 - (-3.0 * dt_sec.max(0.0) / lag_sec).exp();
    spring_lerp(current, target, alpha)
}
