//! Device class and performance tier inference.
//!
//! The browser side fills a [`DeviceSignals`] snapshot; everything here is a
//! pure function over that snapshot so it can be exercised on the host.

use crate::constants::{
    MOBILE_MAX_WIDTH, PERFORMANCE_LOW_MAX, PERFORMANCE_MEDIUM_MAX, PERFORMANCE_SCORE_CAP,
};

const MOBILE_AGENT_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Raw environment readings. Any field may be missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceSignals {
    /// False when there is no window at all (e.g. a host-side run).
    pub in_browser: bool,
    pub viewport_width: Option<f64>,
    pub user_agent: Option<String>,
    /// `navigator.userAgentData.mobile`, when the browser exposes it.
    pub mobile_hint: Option<bool>,
    pub cpu_cores: Option<f64>,
    pub device_memory_gb: Option<f64>,
    pub max_touch_points: Option<u32>,
    pub has_touch_events: bool,
    pub prefers_reduced_motion: bool,
}

impl DeviceSignals {
    /// Snapshot used outside a browser context.
    pub fn unavailable() -> Self {
        Self::default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PerformanceLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl PerformanceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            PerformanceLevel::Low => "low",
            PerformanceLevel::Medium => "medium",
            PerformanceLevel::High => "high",
        }
    }
}

pub fn is_mobile_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_AGENT_MARKERS.iter().any(|m| ua.contains(m))
}

/// Narrow viewport, a mobile user agent or an explicit mobile hint.
pub fn is_mobile_device(signals: &DeviceSignals) -> bool {
    if !signals.in_browser {
        return false;
    }
    let narrow = signals
        .viewport_width
        .map(|w| w <= MOBILE_MAX_WIDTH)
        .unwrap_or(false);
    let agent = signals
        .user_agent
        .as_deref()
        .map(is_mobile_agent)
        .unwrap_or(false);
    narrow || agent || signals.mobile_hint == Some(true)
}

/// `min(10, cores + memory / 2)`, with missing readings counted as 0.
pub fn performance_score(cpu_cores: Option<f64>, device_memory_gb: Option<f64>) -> f64 {
    let cores = cpu_cores.filter(|c| c.is_finite()).unwrap_or(0.0);
    let memory = device_memory_gb.filter(|m| m.is_finite()).unwrap_or(0.0);
    (cores + memory / 2.0).min(PERFORMANCE_SCORE_CAP)
}

pub fn performance_tier(score: f64) -> PerformanceLevel {
    if score <= PERFORMANCE_LOW_MAX {
        PerformanceLevel::Low
    } else if score <= PERFORMANCE_MEDIUM_MAX {
        PerformanceLevel::Medium
    } else {
        PerformanceLevel::High
    }
}

pub fn device_performance_tier(signals: &DeviceSignals) -> PerformanceLevel {
    if !signals.in_browser {
        return PerformanceLevel::Medium;
    }
    performance_tier(performance_score(
        signals.cpu_cores,
        signals.device_memory_gb,
    ))
}

pub fn has_touch_screen(signals: &DeviceSignals) -> bool {
    signals.in_browser && (signals.has_touch_events || signals.max_touch_points.unwrap_or(0) > 0)
}

/// Everything adaptive rendering needs to know about the device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceInfo {
    pub is_mobile: bool,
    pub performance_level: PerformanceLevel,
    pub prefers_reduced_motion: bool,
    pub has_touch_screen: bool,
}

impl DeviceInfo {
    pub fn from_signals(signals: &DeviceSignals) -> Self {
        Self {
            is_mobile: is_mobile_device(signals),
            performance_level: device_performance_tier(signals),
            prefers_reduced_motion: signals.in_browser && signals.prefers_reduced_motion,
            has_touch_screen: has_touch_screen(signals),
        }
    }
}
