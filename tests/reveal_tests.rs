// Host-side tests for section reveal triggers and tweens.

use unfold_core::{
    RevealCoordinator, RevealEvent, RevealPhase, RevealStyle, RevealTrigger, RevealTween,
    SectionGeometry, TriggerBand,
};

const VH: f64 = 1000.0;

fn at(top: f64) -> SectionGeometry {
    SectionGeometry {
        top,
        height: 400.0,
        viewport_height: VH,
    }
}

fn close(a: RevealStyle, b: RevealStyle) -> bool {
    (a.opacity - b.opacity).abs() < 1e-9 && (a.offset_y - b.offset_y).abs() < 1e-9
}

#[test]
fn band_phases_follow_top_and_center() {
    let band = TriggerBand::default();
    assert_eq!(band.phase(&at(900.0)), RevealPhase::Before);
    assert_eq!(band.phase(&at(800.0)), RevealPhase::Active);
    assert_eq!(band.phase(&at(600.0)), RevealPhase::Active);
    // Center at 500 has passed the end line.
    assert_eq!(band.phase(&at(300.0)), RevealPhase::After);
    assert_eq!(band.phase(&at(-2000.0)), RevealPhase::After);
}

#[test]
fn trigger_fires_once_per_crossing() {
    let mut trigger = RevealTrigger::new(TriggerBand::default());
    assert_eq!(trigger.update(&at(1200.0)), None);
    assert_eq!(trigger.update(&at(700.0)), Some(RevealEvent::Enter));
    assert_eq!(trigger.update(&at(650.0)), None);
    assert_eq!(trigger.update(&at(100.0)), None);
    assert_eq!(trigger.phase(), RevealPhase::After);
    assert_eq!(trigger.update(&at(950.0)), Some(RevealEvent::LeaveBack));
    assert_eq!(trigger.update(&at(990.0)), None);
    // Jumping straight past the band still counts as entering.
    assert_eq!(trigger.update(&at(-500.0)), Some(RevealEvent::Enter));
}

#[test]
fn enter_tween_eases_to_fully_visible() {
    let from = RevealStyle {
        opacity: 0.5,
        offset_y: 20.0,
    };
    let mut tween = RevealTween::for_event(RevealEvent::Enter, from, false);
    assert_eq!(tween.duration_sec(), 1.0);
    assert_eq!(tween.target(), RevealStyle::VISIBLE);

    let half = tween.advance(0.5);
    // Ease-out covers more than half the distance by the midpoint.
    assert!(half.opacity > 0.75 && half.opacity < 1.0);
    assert!(half.offset_y < 10.0 && half.offset_y > 0.0);
    assert!(!tween.is_finished());

    let end = tween.advance(0.6);
    assert!(tween.is_finished());
    assert_eq!(end, RevealStyle::VISIBLE);
}

#[test]
fn leave_back_tween_fades_and_drops() {
    let tween = RevealTween::for_event(RevealEvent::LeaveBack, RevealStyle::VISIBLE, false);
    assert_eq!(tween.duration_sec(), 0.5);
    assert_eq!(
        tween.target(),
        RevealStyle {
            opacity: 0.5,
            offset_y: 20.0
        }
    );
    assert_eq!(tween.sample(), RevealStyle::VISIBLE);

    let reduced = RevealTween::for_event(RevealEvent::LeaveBack, RevealStyle::VISIBLE, true);
    assert_eq!(reduced.duration_sec(), 0.3);
    assert_eq!(reduced.target().offset_y, 10.0);
    let enter_reduced = RevealTween::for_event(RevealEvent::Enter, RevealStyle::VISIBLE, true);
    assert_eq!(enter_reduced.duration_sec(), 0.5);
}

#[test]
fn coordinator_animates_sections_independently() {
    let ids = ["hero", "about", "services", "testimonials", "contact"];
    let mut reveal = RevealCoordinator::new(ids, TriggerBand::default());
    assert_eq!(reveal.section_count(), 5);
    assert_eq!(reveal.position("services"), Some(2));
    assert_eq!(reveal.position("footer"), None);
    for i in 0..5 {
        assert_eq!(reveal.section(i).unwrap().style(), RevealStyle::VISIBLE);
    }
    assert!(reveal.tick(0.1).is_empty());

    // "about" scrolls into view, then back out below the fold.
    assert_eq!(reveal.observe(1, &at(700.0), false), Some(RevealEvent::Enter));
    assert_eq!(reveal.observe(1, &at(950.0), false), Some(RevealEvent::LeaveBack));
    assert!(reveal.section(1).unwrap().is_animating());
    assert!(!reveal.section(0).unwrap().is_animating());

    let moved = reveal.tick(0.25);
    assert_eq!(moved.len(), 1);
    assert_eq!(moved[0].0, 1);
    assert!(moved[0].1.opacity < 1.0);

    let done = reveal.tick(0.5);
    assert!(close(
        done[0].1,
        RevealStyle {
            opacity: 0.5,
            offset_y: 20.0
        }
    ));
    assert!(!reveal.section(1).unwrap().is_animating());
    assert!(reveal.tick(0.1).is_empty());

    // Unknown section indexes are ignored.
    assert_eq!(reveal.observe(9, &at(700.0), false), None);
}

#[test]
fn new_crossing_restarts_from_current_style() {
    let mut reveal = RevealCoordinator::new(["hero"], TriggerBand::default());
    reveal.observe(0, &at(700.0), false);
    reveal.observe(0, &at(950.0), false);
    let mid = reveal.tick(0.25)[0].1;

    assert_eq!(reveal.observe(0, &at(700.0), false), Some(RevealEvent::Enter));
    // First step of the new tween starts from where the last one stopped.
    let next = reveal.tick(0.0)[0].1;
    assert!(close(next, mid));
    let settled = reveal.tick(1.0)[0].1;
    assert!(close(settled, RevealStyle::VISIBLE));
}

#[test]
fn style_transform_is_a_vertical_translate() {
    assert_eq!(RevealStyle::VISIBLE.transform(), "translateY(0px)");
    let dropped = RevealStyle {
        opacity: 0.5,
        offset_y: 12.34567,
    };
    assert_eq!(dropped.transform(), "translateY(12.346px)");
}
