// Host-side tests for scroll sampling and the per-frame smoothing chain.

use unfold_core::{
    dash_offset, generate_circles, path_follow, scroll_fraction, scroll_stiffness, scrub_lag,
    AnimationConfig, FrameInput, ProgressState, ThreadContext,
};

const DT: f64 = 1.0 / 60.0;

fn ctx(speed: f64, reduced_motion: bool) -> ThreadContext {
    ThreadContext {
        config: AnimationConfig {
            speed,
            ..AnimationConfig::default()
        },
        section_count: 5,
        is_mobile: false,
        reduced_motion,
    }
}

fn run(state: ProgressState, target: f64, frames: usize, ctx: &ThreadContext) -> ProgressState {
    (0..frames).fold(state, |s, _| s.advance(target, DT, ctx))
}

#[test]
fn scroll_fraction_is_clamped_and_safe_on_short_pages() {
    assert_eq!(scroll_fraction(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_fraction(1000.0, 3000.0, 1000.0), 0.5);
    assert_eq!(scroll_fraction(5000.0, 3000.0, 1000.0), 1.0);
    assert_eq!(scroll_fraction(-40.0, 3000.0, 1000.0), 0.0);
    // Content shorter than the viewport cannot scroll.
    assert_eq!(scroll_fraction(10.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_fraction(10.0, 1000.0, 1000.0), 0.0);
}

#[test]
fn smoothing_chain_converges_without_overshoot() {
    let ctx = ctx(1.0, false);
    let mut s = ProgressState::default();
    for _ in 0..1200 {
        s = s.advance(1.0, DT, &ctx);
        assert!(s.path <= s.current + 1e-12);
        assert!(s.current <= s.scroll + 1e-12);
        assert!(s.scroll <= 1.0);
    }
    assert!(s.path > 0.99, "path only reached {}", s.path);
}

#[test]
fn progress_follows_scroll_back_up() {
    let ctx = ctx(1.0, false);
    let down = run(ProgressState::default(), 1.0, 600, &ctx);
    let up = run(down, 0.0, 1200, &ctx);
    assert!(up.path < 0.01);
    assert!(up.path >= 0.0);
}

#[test]
fn higher_speed_catches_up_sooner() {
    let slow = run(ProgressState::default(), 1.0, 60, &ctx(0.5, false));
    let fast = run(ProgressState::default(), 1.0, 60, &ctx(2.0, false));
    assert!(fast.current > slow.current);
    assert!(fast.path > slow.path);
    assert!((scroll_stiffness(1.0, false) - 0.06).abs() < 1e-12);
    assert!((path_follow(2.0, true) - 0.16).abs() < 1e-12);
}

#[test]
fn reduced_motion_scrubs_more_lazily() {
    assert_eq!(scrub_lag(false), 1.5);
    assert_eq!(scrub_lag(true), 2.5);
    let normal = run(ProgressState::default(), 1.0, 60, &ctx(1.0, false));
    let reduced = run(ProgressState::default(), 1.0, 60, &ctx(1.0, true));
    assert!(reduced.scroll < normal.scroll);
}

#[test]
fn dash_offset_reveals_thread_with_progress() {
    assert_eq!(dash_offset(0.0), 3000.0);
    assert_eq!(dash_offset(1.0), 0.0);
    assert_eq!(dash_offset(0.5), 1500.0);
}

#[test]
fn frame_step_regenerates_every_thread_from_one_snapshot() {
    let ctx = ctx(1.0, false);
    let circles = generate_circles(&ctx.config, false);
    let start = run(ProgressState::default(), 0.8, 300, &ctx);
    let input = FrameInput {
        scroll_target: 0.8,
        dt_sec: DT,
        circles: &circles,
        ctx,
    };
    let out = start.step(&input);
    assert_eq!(out.progress, start.advance(0.8, DT, &ctx));
    assert_eq!(out.paths.len(), circles.len());
    assert!(out.paths.iter().all(|d| d.starts_with("M ")));
    assert_eq!(out.dash_offset, dash_offset(out.progress.current));
    // Same input, same frame.
    assert_eq!(out, start.step(&input));
}

#[test]
fn idle_frame_with_no_circles_draws_nothing() {
    let ctx = ctx(1.0, false);
    let out = ProgressState::default().step(&FrameInput {
        scroll_target: 0.0,
        dt_sec: DT,
        circles: &[],
        ctx,
    });
    assert_eq!(out.progress, ProgressState::default());
    assert!(out.paths.is_empty());
    assert_eq!(out.dash_offset, 3000.0);
}
