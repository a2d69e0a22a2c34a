//! SVG rendering of a scene and its latest pass.
//!
//! # Example
//!
//! ```
//! use multilat::io::{render_svg, SvgStyle};
//! use multilat::scene::Scene;
//!
//! let scene = Scene::demo();
//! let pass = scene.compute();
//! let svg = render_svg(&scene, &pass, &SvgStyle::default());
//!
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains(">kd_tree</text>"));
//! assert!(svg.contains(">median</text>"));
//! ```

use crate::error::Result;
use crate::pipeline::PassResult;
use crate::primitives::Point2;
use crate::scene::Scene;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Colors and sizes used by [`render_svg`].
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    pub background: String,
    pub antenna: String,
    pub selected_antenna: String,
    pub antenna_width: f64,
    pub selected_width: f64,
    pub intersection: String,
    pub estimate: String,
    pub marker_radius: f64,
    pub marker_width: f64,
    pub font_size: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            background: "#ffffff".into(),
            antenna: "#000000".into(),
            selected_antenna: "#ff0000".into(),
            antenna_width: 1.0,
            selected_width: 5.0,
            intersection: "#00ff00".into(),
            estimate: "#0000ff".into(),
            marker_radius: 7.0,
            marker_width: 2.0,
            font_size: 15.0,
        }
    }
}

/// Small helper accumulating SVG elements.
struct Svg {
    content: String,
}

impl Svg {
    fn new() -> Self {
        Self {
            content: String::new(),
        }
    }

    fn rect(&mut self, w: f64, h: f64, fill: &str) {
        let _ = writeln!(
            self.content,
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            w, h, fill
        );
    }

    fn ring(&mut self, center: Point2<f64>, r: f64, stroke: &str, stroke_width: f64) {
        let _ = writeln!(
            self.content,
            r#"<circle cx="{:.3}" cy="{:.3}" r="{:.3}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            center.x, center.y, r, stroke, stroke_width
        );
    }

    fn text(&mut self, at: Point2<f64>, size: f64, anchor: &str, label: &str) {
        let _ = writeln!(
            self.content,
            r#"<text x="{:.3}" y="{:.3}" font-family="Arial" font-size="{}" text-anchor="{}">{}</text>"#,
            at.x, at.y, size, anchor, label
        );
    }

    fn finish(self, width: f64, height: f64) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{}</svg>\n",
            self.content,
            w = width,
            h = height
        )
    }
}

/// Renders the scene antennas and the result of a pass over them.
///
/// The selected antenna is highlighted. Absent intersection slots and
/// absent estimates are skipped. The density estimate is labelled
/// `kd_tree` to its left and the median estimate `median` to its right.
pub fn render_svg(scene: &Scene, pass: &PassResult<f64>, style: &SvgStyle) -> String {
    let config = scene.config();
    let mut svg = Svg::new();
    svg.rect(config.width, config.height, &style.background);

    for (i, antenna) in scene.antennas().iter().enumerate() {
        let (stroke, width) = if scene.selected() == Some(i) {
            (&style.selected_antenna, style.selected_width)
        } else {
            (&style.antenna, style.antenna_width)
        };
        svg.ring(antenna.center, antenna.radius, stroke, width);
    }

    for p in pass.intersections.slots().iter().flatten() {
        svg.ring(
            *p,
            style.marker_radius,
            &style.intersection,
            style.marker_width,
        );
    }

    let gap = 10.0;
    if let Some(p) = pass.density {
        svg.ring(p, style.marker_radius, &style.estimate, style.marker_width);
        svg.text(Point2::new(p.x - gap, p.y), style.font_size, "end", "kd_tree");
    }
    if let Some(p) = pass.median {
        svg.ring(p, style.marker_radius, &style.estimate, style.marker_width);
        svg.text(Point2::new(p.x + gap, p.y - gap), style.font_size, "start", "median");
    }

    svg.finish(config.width, config.height)
}

/// Renders with [`render_svg`] and writes the document to `path`.
pub fn write_svg(
    path: impl AsRef<Path>,
    scene: &Scene,
    pass: &PassResult<f64>,
    style: &SvgStyle,
) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render_svg(scene, pass, style))?;
    tracing::info!(path = %path.display(), "scene written");
    Ok(())
}
