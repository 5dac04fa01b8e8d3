// Host-side tests for device class and performance tier inference.

use unfold_core::{
    device_performance_tier, has_touch_screen, is_mobile_agent, is_mobile_device,
    performance_score, performance_tier, DeviceInfo, DeviceSignals, PerformanceLevel,
};

fn desktop() -> DeviceSignals {
    DeviceSignals {
        in_browser: true,
        viewport_width: Some(1440.0),
        user_agent: Some(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36"
                .to_string(),
        ),
        cpu_cores: Some(8.0),
        device_memory_gb: Some(8.0),
        ..DeviceSignals::default()
    }
}

#[test]
fn performance_tiers_follow_score_thresholds() {
    assert_eq!(
        performance_tier(performance_score(Some(8.0), Some(8.0))),
        PerformanceLevel::High
    );
    assert_eq!(
        performance_tier(performance_score(Some(1.0), Some(1.0))),
        PerformanceLevel::Low
    );
    assert_eq!(
        performance_tier(performance_score(Some(4.0), Some(2.0))),
        PerformanceLevel::Medium
    );
    assert_eq!(performance_tier(3.0), PerformanceLevel::Low);
    assert_eq!(performance_tier(6.0), PerformanceLevel::Medium);
    assert_eq!(performance_tier(6.5), PerformanceLevel::High);
}

#[test]
fn performance_score_is_capped_and_tolerates_missing_signals() {
    assert_eq!(performance_score(Some(32.0), Some(64.0)), 10.0);
    assert_eq!(performance_score(None, None), 0.0);
    assert_eq!(performance_score(Some(2.0), None), 2.0);
    assert_eq!(performance_score(Some(f64::NAN), Some(4.0)), 2.0);
}

#[test]
fn outside_a_browser_the_probe_reports_defaults() {
    let signals = DeviceSignals::unavailable();
    assert!(!is_mobile_device(&signals));
    assert_eq!(device_performance_tier(&signals), PerformanceLevel::Medium);
    assert!(!has_touch_screen(&signals));
    assert_eq!(
        DeviceInfo::from_signals(&signals),
        DeviceInfo {
            is_mobile: false,
            performance_level: PerformanceLevel::Medium,
            prefers_reduced_motion: false,
            has_touch_screen: false,
        }
    );
}

#[test]
fn mobile_detection_uses_width_agent_or_hint() {
    assert!(!is_mobile_device(&desktop()));

    let narrow = DeviceSignals {
        viewport_width: Some(768.0),
        ..desktop()
    };
    assert!(is_mobile_device(&narrow));
    let just_wide = DeviceSignals {
        viewport_width: Some(769.0),
        ..desktop()
    };
    assert!(!is_mobile_device(&just_wide));

    let phone = DeviceSignals {
        user_agent: Some(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15"
                .to_string(),
        ),
        ..desktop()
    };
    assert!(is_mobile_device(&phone));

    let hinted = DeviceSignals {
        mobile_hint: Some(true),
        ..desktop()
    };
    assert!(is_mobile_device(&hinted));
}

#[test]
fn mobile_agent_markers_are_case_insensitive() {
    assert!(is_mobile_agent("Opera Mini/8.0"));
    assert!(is_mobile_agent("Mozilla/5.0 (Linux; ANDROID 14)"));
    assert!(!is_mobile_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0)"));
}

#[test]
fn touch_screen_from_events_or_touch_points() {
    assert!(!has_touch_screen(&desktop()));
    let points = DeviceSignals {
        max_touch_points: Some(5),
        ..desktop()
    };
    assert!(has_touch_screen(&points));
    let events = DeviceSignals {
        has_touch_events: true,
        ..desktop()
    };
    assert!(has_touch_screen(&events));
}

#[test]
fn device_info_snapshot_combines_signals() {
    let signals = DeviceSignals {
        cpu_cores: Some(2.0),
        device_memory_gb: Some(1.0),
        prefers_reduced_motion: true,
        ..desktop()
    };
    let info = DeviceInfo::from_signals(&signals);
    assert_eq!(info.performance_level, PerformanceLevel::Low);
    assert!(info.prefers_reduced_motion);
    assert!(!info.is_mobile);
    assert_eq!(PerformanceLevel::High.as_str(), "high");
}
