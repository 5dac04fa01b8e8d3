use std::f64::consts::PI;

// Shared tuning constants for the thread motif. Coordinates are in the
// normalized 0-100 viewport-percentage space unless noted.

/// Palette entry for one decorative circle: primary color, accent color,
/// placement angle around the cluster center and base size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleSpec {
    pub main: &'static str,
    pub accent: &'static str,
    pub angle: f64,
    pub size: f64,
}

pub const CIRCLE_PALETTE: [CircleSpec; 6] = [
    CircleSpec { main: "#FF6B6B", accent: "#4ECDC4", angle: 0.0, size: 60.0 }, // coral / turquoise
    CircleSpec { main: "#7A4EAF", accent: "#FF61D2", angle: PI / 3.0, size: 50.0 }, // purple / pink
    CircleSpec { main: "#4E7AAF", accent: "#2ECC71", angle: 2.0 * PI / 3.0, size: 70.0 }, // ocean / emerald
    CircleSpec { main: "#FFB347", accent: "#FF61A0", angle: PI, size: 55.0 }, // orange / rose
    CircleSpec { main: "#45B7D1", accent: "#98FB98", angle: 4.0 * PI / 3.0, size: 65.0 }, // sky / mint
    CircleSpec { main: "#FF8C42", accent: "#4EA5D9", angle: 5.0 * PI / 3.0, size: 45.0 }, // sunset / azure
];

// Circle cluster layout
pub const CLUSTER_CENTER_X: f64 = 50.0;
pub const CLUSTER_CENTER_Y_MOBILE: f64 = 70.0; // below the header on small screens
pub const CLUSTER_CENTER_Y_DESKTOP: f64 = 80.0;
pub const CLUSTER_SPREAD_MOBILE: f64 = 2.0;
pub const CLUSTER_SPREAD_DESKTOP: f64 = 2.2;
pub const CIRCLE_OPACITY_BASE: f64 = 0.35;
pub const CIRCLE_OPACITY_COLOR_SPAN: f64 = 0.15;
pub const CIRCLE_OPACITY_STEP: f64 = 0.02;
pub const CIRCLE_FREQUENCY_BASE: f64 = 1.5;
pub const CIRCLE_FREQUENCY_STEP: f64 = 0.2;

// Regime A (looping threads)
pub const LOOP_TURNS_BASE: f64 = 12.0;
pub const LOOP_STEP: f64 = 0.1;
pub const LOOP_STEP_REDUCED: f64 = 0.2;
pub const LOOP_NOISE_AMPLITUDE: f64 = 2.0;

// Regime B (converging strands)
pub const STRAND_TOTAL_HEIGHT: f64 = 800.0;
pub const STRAND_END_MARGIN: f64 = 100.0;
pub const STRAND_MIN_SEGMENTS: usize = 6;
pub const STRAND_SEGMENTS_PER_SECTION: f64 = 3.0;
pub const STRAND_INTENSITY_GAIN: f64 = 1.2;
pub const CONVERGE_START: f64 = 0.15; // progress where strands begin to gather
pub const CONVERGE_SPAN: f64 = 0.5;
pub const MIN_RANDOMNESS: f64 = 0.2;

// Blend thresholds between the two regimes
pub const CIRCLE_PHASE_END: f64 = 0.35;
pub const CONVERGING_PHASE_START: f64 = 0.15;
pub const PHASE_BAND: f64 = 0.2;

// Frame smoothing
pub const SCROLL_STIFFNESS: f64 = 0.06;
pub const PATH_FOLLOW: f64 = 0.08;
pub const SCRUB_LAG_SEC: f64 = 1.5;
pub const SCRUB_LAG_REDUCED_SEC: f64 = 2.5;

// Stroke dash reveal
pub const THREAD_LENGTH: f64 = 3000.0;

// Device probe
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
pub const PERFORMANCE_SCORE_CAP: f64 = 10.0;
pub const PERFORMANCE_LOW_MAX: f64 = 3.0;
pub const PERFORMANCE_MEDIUM_MAX: f64 = 6.0;

// Resize handling and deferred start
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const IDLE_FALLBACK_MS: u32 = 200;

// Persisted preference keys
pub const STORAGE_KEY_ENABLED: &str = "animationsEnabled";
pub const STORAGE_KEY_CONFIG: &str = "animationConfig";
