//! Renders the demo antenna scene to `scene.svg`.
//!
//! Run with: cargo run --example scene_svg [output.svg]

use multilat::io::{write_svg, SvgStyle};
use multilat::{MultilatError, Point2, Scene};

fn main() -> Result<(), MultilatError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let output = std::env::args().nth(1).unwrap_or_else(|| "scene.svg".into());

    let mut scene = Scene::demo();
    let added = scene.add_antenna(Point2::new(300.0, 330.0))?;
    scene.set_radius(added, 120.0)?;

    let pass = scene.compute();
    match (pass.density, pass.median) {
        (Some(d), Some(m)) => tracing::info!(
            "density estimate ({:.1}, {:.1}), median estimate ({:.1}, {:.1})",
            d.x,
            d.y,
            m.x,
            m.y
        ),
        _ => tracing::warn!("no intersections, nothing to estimate"),
    }

    write_svg(&output, &scene, &pass, &SvgStyle::default())
}
