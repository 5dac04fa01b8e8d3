//! Text and value helpers for the accessibility settings panel.

use crate::config::{Complexity, ConfigPatch};
use crate::error::Result;

pub const SPEED_RANGE: (f64, f64, f64) = (0.5, 2.0, 0.5); // min, max, step
pub const INTENSITY_RANGE: (f64, f64, f64) = (0.3, 1.0, 0.1);

pub fn speed_label(speed: f64) -> &'static str {
    if speed == 0.5 {
        "Slow"
    } else if speed == 1.0 {
        "Normal"
    } else {
        "Fast"
    }
}

pub fn intensity_label(intensity: f64) -> String {
    format!("{}%", (intensity * 100.0).round())
}

pub fn complexity_option_label(complexity: Complexity) -> &'static str {
    match complexity {
        Complexity::Low => "Low (Better performance)",
        Complexity::Medium => "Medium",
        Complexity::High => "High (Most detailed)",
    }
}

/// A change coming from one of the panel's inputs.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelInput {
    Speed(String),
    Intensity(String),
    Complexity(String),
}

impl PanelInput {
    /// Turn a raw control value into a config patch. Unparseable numbers
    /// yield an empty patch.
    pub fn to_patch(&self) -> Result<ConfigPatch> {
        let patch = ConfigPatch::default();
        Ok(match self {
            PanelInput::Speed(raw) => match raw.trim().parse::<f64>() {
                Ok(v) => patch.speed(v.clamp(SPEED_RANGE.0, SPEED_RANGE.1)),
                Err(_) => patch,
            },
            PanelInput::Intensity(raw) => match raw.trim().parse::<f64>() {
                Ok(v) => patch.intensity(v.clamp(INTENSITY_RANGE.0, INTENSITY_RANGE.1)),
                Err(_) => patch,
            },
            PanelInput::Complexity(raw) => patch.complexity(raw.parse()?),
        })
    }
}
