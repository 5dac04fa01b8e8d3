use crate::error::{Result, UnfoldError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse visual-detail tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [Complexity::Low, Complexity::Medium, Complexity::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }

    /// Scales the number of turns a looping thread makes.
    pub fn loop_multiplier(self) -> f64 {
        match self {
            Complexity::Low => 0.7,
            Complexity::Medium => 1.0,
            Complexity::High => 1.2,
        }
    }

    /// Scales the segment count of a converging strand.
    pub fn detail_multiplier(self) -> f64 {
        match self {
            Complexity::Low => 0.5,
            Complexity::Medium => 1.0,
            Complexity::High => 1.5,
        }
    }

    /// Scales circle radii.
    pub fn size_multiplier(self) -> f64 {
        match self {
            Complexity::Low => 0.7,
            Complexity::Medium => 0.8,
            Complexity::High => 0.9,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = UnfoldError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "low" => Ok(Complexity::Low),
            "medium" => Ok(Complexity::Medium),
            "high" => Ok(Complexity::High),
            other => Err(UnfoldError::InvalidComplexity(other.to_string())),
        }
    }
}

/// User-tunable animation settings. Persisted as camelCase JSON.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationConfig {
    pub complexity: Complexity,
    /// Multiplier on smoothing rates; 0.5 slow, 1 normal, 2 fast.
    pub speed: f64,
    /// 0..1
    pub intensity: f64,
    /// 0..1
    pub color_intensity: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            complexity: Complexity::Medium,
            speed: 1.0,
            intensity: 0.8,
            color_intensity: 0.8,
        }
    }
}

impl AnimationConfig {
    /// Parse a persisted blob. Missing fields take their default values;
    /// out-of-range numbers are pulled back into range.
    pub fn from_json(raw: &str) -> Result<Self> {
        let parsed: AnimationConfig = serde_json::from_str(raw)?;
        Ok(parsed.sanitized())
    }

    pub fn to_json(&self) -> String {
        // Plain data with finite numbers cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Shallow merge: every field set in `patch` replaces ours.
    pub fn merged(self, patch: &ConfigPatch) -> Self {
        Self {
            complexity: patch.complexity.unwrap_or(self.complexity),
            speed: patch.speed.unwrap_or(self.speed),
            intensity: patch.intensity.unwrap_or(self.intensity),
            color_intensity: patch.color_intensity.unwrap_or(self.color_intensity),
        }
        .sanitized()
    }

    fn sanitized(self) -> Self {
        let defaults = Self::default();
        let unit = |v: f64, fallback: f64| if v.is_finite() { v.clamp(0.0, 1.0) } else { fallback };
        Self {
            complexity: self.complexity,
            speed: if self.speed.is_finite() && self.speed > 0.0 {
                self.speed
            } else {
                defaults.speed
            },
            intensity: unit(self.intensity, defaults.intensity),
            color_intensity: unit(self.color_intensity, defaults.color_intensity),
        }
    }
}

/// Partial update for [`AnimationConfig`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConfigPatch {
    pub complexity: Option<Complexity>,
    pub speed: Option<f64>,
    pub intensity: Option<f64>,
    pub color_intensity: Option<f64>,
}

impl ConfigPatch {
    pub fn complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = Some(complexity);
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn intensity(mut self, intensity: f64) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn color_intensity(mut self, color_intensity: f64) -> Self {
        self.color_intensity = Some(color_intensity);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
