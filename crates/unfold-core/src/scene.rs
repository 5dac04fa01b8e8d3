//! Static presentation parameters of the SVG scene and the page backdrop.

use crate::config::{AnimationConfig, Complexity};
use crate::thread::Circle;

/// SVG `viewBox`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub const DESKTOP: ViewBox = ViewBox {
        min_x: -100.0,
        min_y: 0.0,
        width: 300.0,
        height: 900.0,
    };
    pub const MOBILE: ViewBox = ViewBox {
        min_x: -50.0,
        min_y: -20.0,
        width: 200.0,
        height: 900.0,
    };

    pub fn for_device(is_mobile: bool) -> Self {
        if is_mobile {
            Self::MOBILE
        } else {
            Self::DESKTOP
        }
    }

    pub fn attribute(&self) -> String {
        format!(
            "{} {} {} {}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}

/// Attributes that only change with config, device class or reduced motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneStyle {
    pub view_box: ViewBox,
    pub stroke_width: f64,
    pub path_opacity: f64,
    pub glow_deviation: f64,
}

impl SceneStyle {
    pub fn new(config: &AnimationConfig, is_mobile: bool, reduced_motion: bool) -> Self {
        Self {
            view_box: ViewBox::for_device(is_mobile),
            stroke_width: if is_mobile { 2.0 } else { 1.5 },
            path_opacity: if config.complexity == Complexity::Low {
                0.6
            } else {
                0.8
            },
            glow_deviation: if reduced_motion { 2.0 } else { 3.0 },
        }
    }
}

/// Stop opacities of a circle's radial gradient: (center, edge).
pub fn gradient_stop_opacity(circle: &Circle) -> (f64, f64) {
    (
        (circle.opacity + 0.1).min(0.9),
        circle.opacity.min(0.7),
    )
}

/// Page background that shifts hue as the reader scrolls.
pub fn backdrop_gradient(scroll_progress: f64, color_intensity: f64) -> String {
    let p = scroll_progress.clamp(0.0, 1.0);
    let saturation = 40.0 + (color_intensity * 20.0).round();
    format!(
        "linear-gradient(135deg, hsl({}, {}%, 97%) 0%, hsl({}, {}%, 95%) 100%)",
        crate::math::round(210.0 + p * 15.0),
        saturation,
        crate::math::round(230.0 + p * 15.0),
        (saturation * 0.7).round()
    )
}
