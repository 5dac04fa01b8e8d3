use crate::dom::{create_svg_element, set_attrs};
use unfold_core::constants::THREAD_LENGTH;
use unfold_core::{gradient_stop_opacity, Circle, SceneStyle};
use web_sys as web;

/// The thread SVG: gradients, glow filter, one circle and one path per motif.
/// Only the paths change per frame.
pub struct ThreadScene {
    pub svg: web::Element,
    pub paths: Vec<web::Element>,
}

impl ThreadScene {
    pub fn build(
        document: &web::Document,
        circles: &[Circle],
        style: &SceneStyle,
    ) -> anyhow::Result<Self> {
        let svg = create_svg_element(document, "svg")?;
        set_attrs(
            &svg,
            &[
                ("class", "thread-svg"),
                ("width", "100%"),
                ("height", "100%"),
                ("viewBox", &style.view_box.attribute()),
                ("preserveAspectRatio", "xMidYMin slice"),
                ("aria-label", "Decorative thread animation"),
            ],
        );

        let defs = create_svg_element(document, "defs")?;
        for (i, circle) in circles.iter().enumerate() {
            defs.append_child(&gradient(document, i, circle)?)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }
        defs.append_child(&glow_filter(document, style.glow_deviation)?)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        svg.append_child(&defs)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        for (i, circle) in circles.iter().enumerate() {
            let el = create_svg_element(document, "circle")?;
            set_attrs(
                &el,
                &[
                    ("cx", &circle.x.to_string()),
                    ("cy", &circle.y.to_string()),
                    ("r", &circle.radius.to_string()),
                    ("fill", &format!("url(#threadGradient-{i})")),
                    ("opacity", &circle.opacity.to_string()),
                    ("filter", "url(#glow)"),
                ],
            );
            svg.append_child(&el)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }

        let mut paths = Vec::with_capacity(circles.len());
        let dash = THREAD_LENGTH.to_string();
        for i in 0..circles.len() {
            let el = create_svg_element(document, "path")?;
            set_attrs(
                &el,
                &[
                    ("d", ""),
                    ("fill", "none"),
                    ("stroke", &format!("url(#threadGradient-{i})")),
                    ("stroke-width", &style.stroke_width.to_string()),
                    ("stroke-linecap", "round"),
                    ("stroke-dasharray", &dash),
                    ("stroke-dashoffset", &dash),
                    ("filter", "url(#glow)"),
                    ("opacity", &style.path_opacity.to_string()),
                ],
            );
            svg.append_child(&el)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            paths.push(el);
        }

        Ok(Self { svg, paths })
    }

    /// Write one frame's path data.
    pub fn draw(&self, paths: &[String], dash_offset: f64) {
        let offset = unfold_core::round(dash_offset).to_string();
        for (el, d) in self.paths.iter().zip(paths) {
            _ = el.set_attribute("d", d);
            _ = el.set_attribute("stroke-dashoffset", &offset);
        }
    }

    pub fn remove(&self) {
        self.svg.remove();
    }
}

fn gradient(document: &web::Document, index: usize, circle: &Circle) -> anyhow::Result<web::Element> {
    let grad = create_svg_element(document, "radialGradient")?;
    set_attrs(
        &grad,
        &[
            ("id", &format!("threadGradient-{index}")),
            ("cx", "0.3"),
            ("cy", "0.3"),
            ("gradientUnits", "userSpaceOnUse"),
        ],
    );
    let (inner, outer) = gradient_stop_opacity(circle);
    for (offset, color, opacity) in [
        ("0%", circle.color, inner),
        ("100%", circle.accent_color, outer),
    ] {
        let stop = create_svg_element(document, "stop")?;
        set_attrs(
            &stop,
            &[
                ("offset", offset),
                ("stop-color", color),
                ("stop-opacity", &opacity.to_string()),
            ],
        );
        grad.append_child(&stop)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(grad)
}

fn glow_filter(document: &web::Document, deviation: f64) -> anyhow::Result<web::Element> {
    let filter = create_svg_element(document, "filter")?;
    set_attrs(&filter, &[("id", "glow"), ("filterUnits", "userSpaceOnUse")]);
    let blur = create_svg_element(document, "feGaussianBlur")?;
    set_attrs(
        &blur,
        &[
            ("stdDeviation", &deviation.to_string()),
            ("result", "coloredBlur"),
        ],
    );
    let merge = create_svg_element(document, "feMerge")?;
    for input in ["coloredBlur", "SourceGraphic"] {
        let node = create_svg_element(document, "feMergeNode")?;
        _ = node.set_attribute("in", input);
        merge
            .append_child(&node)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    filter
        .append_child(&blur)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    filter
        .append_child(&merge)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(filter)
}
