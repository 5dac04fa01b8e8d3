// Host-side tests for circle layout and the two thread regimes.

use glam::DVec2;
use unfold_core::path::endpoints;
use unfold_core::{
    circle_thread, converging_point, converging_thread, generate_circles, strand_segments,
    thread_path, AnimationConfig, Circle, Complexity, Convergence, PhaseWeights, ThreadContext,
    ThreadRegime,
};

fn config() -> AnimationConfig {
    AnimationConfig::default()
}

fn first_circle() -> Circle {
    generate_circles(&config(), false).remove(0)
}

fn ctx(reduced_motion: bool) -> ThreadContext {
    ThreadContext {
        config: config(),
        section_count: 5,
        is_mobile: false,
        reduced_motion,
    }
}

#[test]
fn six_circles_laid_out_around_the_cluster_center() {
    let circles = generate_circles(&config(), false);
    assert_eq!(circles.len(), 6);

    let c = &circles[0];
    assert!((c.x - 83.0).abs() < 1e-9);
    assert!((c.y - 80.0).abs() < 1e-9);
    assert!((c.radius - 19.2).abs() < 1e-9);
    assert!((c.opacity - 0.47).abs() < 1e-9);
    assert_eq!(c.color, "#FF6B6B");
    assert_eq!(c.accent_color, "#4ECDC4");

    let last = &circles[5];
    assert!((last.frequency - 2.5).abs() < 1e-9);
    assert!((last.opacity - 0.57).abs() < 1e-9);

    let mobile = generate_circles(&config(), true);
    assert!((mobile[0].x - 80.0).abs() < 1e-9);
    assert!((mobile[0].y - 70.0).abs() < 1e-9);
}

#[test]
fn circle_geometry_only_depends_on_complexity_and_color() {
    let base = generate_circles(&config(), false);
    assert_eq!(base, generate_circles(&config(), false));

    let faster = AnimationConfig {
        speed: 2.0,
        intensity: 0.3,
        ..config()
    };
    assert_eq!(base, generate_circles(&faster, false));

    let high = AnimationConfig {
        complexity: Complexity::High,
        ..config()
    };
    assert!(generate_circles(&high, false)[0].radius > base[0].radius);
}

#[test]
fn blend_policy_switches_after_the_converging_start() {
    assert_eq!(ThreadRegime::for_progress(0.0), ThreadRegime::Loop);
    assert_eq!(ThreadRegime::for_progress(0.1), ThreadRegime::Loop);
    assert_eq!(ThreadRegime::for_progress(0.15), ThreadRegime::Loop);
    assert_eq!(ThreadRegime::for_progress(0.16), ThreadRegime::Converging);
    assert_eq!(ThreadRegime::for_progress(0.3), ThreadRegime::Converging);
    assert_eq!(ThreadRegime::for_progress(1.0), ThreadRegime::Converging);

    let w = PhaseWeights::for_progress(0.25);
    assert!((w.circle - 0.5).abs() < 1e-9);
    assert!((w.converging - 0.5).abs() < 1e-9);
    let w = PhaseWeights::for_progress(1.0);
    assert_eq!((w.circle, w.converging), (0.0, 1.0));
}

#[test]
fn loop_thread_is_deterministic() {
    let c = first_circle();
    for p in [0.0, 0.05, 0.15] {
        assert_eq!(
            circle_thread(p, &c, &config(), false),
            circle_thread(p, &c, &config(), false)
        );
    }
    assert_ne!(
        circle_thread(0.0, &c, &config(), false),
        circle_thread(0.1, &c, &config(), false)
    );
}

#[test]
fn loop_thread_stays_close_to_its_circle() {
    let c = first_circle();
    let pts = endpoints(&circle_thread(0.0, &c, &config(), false));
    // 12 turns in steps of 0.1 rad.
    assert_eq!(pts.len(), 754);
    let bound = c.radius * 1.32 + 0.01;
    for p in &pts {
        assert!(p.distance(c.center()) <= bound, "{p} strays from circle");
    }
}

#[test]
fn reduced_motion_halves_loop_resolution() {
    let c = first_circle();
    let full = endpoints(&circle_thread(0.1, &c, &config(), false)).len();
    let reduced = endpoints(&circle_thread(0.1, &c, &config(), true)).len();
    assert_eq!(reduced, 377);
    assert!(reduced < full);

    let low = AnimationConfig {
        complexity: Complexity::Low,
        ..config()
    };
    // floor(12 * 0.7) = 8 turns.
    let low_pts = endpoints(&circle_thread(0.0, &c, &low, false)).len();
    assert_eq!(low_pts, (8.0 * std::f64::consts::TAU / 0.1) as usize + 1);
}

#[test]
fn strand_segments_scale_with_sections_and_detail() {
    assert_eq!(strand_segments(5, &config()), 15);
    let low = AnimationConfig {
        complexity: Complexity::Low,
        ..config()
    };
    let high = AnimationConfig {
        complexity: Complexity::High,
        ..config()
    };
    assert_eq!(strand_segments(5, &low), 7);
    assert_eq!(strand_segments(5, &high), 22);
    assert_eq!(strand_segments(1, &high), 6);
    assert_eq!(strand_segments(0, &config()), 6);
}

#[test]
fn convergence_ramps_and_keeps_residual_randomness() {
    let start = Convergence::for_progress(0.1);
    assert_eq!((start.convergence, start.randomness), (0.0, 1.0));
    let mid = Convergence::for_progress(0.4);
    assert!((mid.convergence - 0.5).abs() < 1e-9);
    assert!((mid.randomness - 0.5).abs() < 1e-9);
    let end = Convergence::for_progress(1.0);
    assert_eq!((end.convergence, end.randomness), (1.0, 0.2));
}

#[test]
fn converging_strand_reaches_the_bottom_at_full_progress() {
    for c in generate_circles(&config(), false) {
        let end = converging_point(1.0, 1.0, &c, &config(), false);
        assert_eq!(end.y, 700.0);
        let start = converging_point(1.0, 0.0, &c, &config(), false);
        assert!((start.y - c.y).abs() < 1e-9);
    }
    let mobile = generate_circles(&config(), true);
    assert_eq!(converging_point(1.0, 1.0, &mobile[2], &config(), true).y, 700.0);
}

#[test]
fn converging_thread_has_one_point_per_segment() {
    let c = first_circle();
    let d = converging_thread(0.5, &c, 5, &config(), false);
    let pts = endpoints(&d);
    assert_eq!(pts.len(), 16);
    let expected: Vec<DVec2> = (0..=15)
        .map(|i| converging_point(0.5, i as f64 / 15.0, &c, &config(), false))
        .collect();
    assert_eq!(pts, expected);
    assert_eq!(d, converging_thread(0.5, &c, 5, &config(), false));
}

#[test]
fn thread_path_dispatches_on_regime() {
    let c = first_circle();
    let ctx = ctx(false);
    assert_eq!(
        thread_path(0.1, &c, &ctx),
        circle_thread(0.1, &c, &ctx.config, false)
    );
    assert_eq!(
        thread_path(0.6, &c, &ctx),
        converging_thread(0.6, &c, 5, &ctx.config, false)
    );
}
