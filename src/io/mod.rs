//! Output of scenes and estimation passes.
//!
//! Renders what an interactive front end would draw (antennas, every
//! intersection marker and both estimates) to a standalone SVG document.

mod svg;

pub use svg::{render_svg, write_svg, SvgStyle};
