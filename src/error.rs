//! Error types for multilat operations.
//!
//! The geometry core never fails: degenerate antenna pairs simply produce no
//! intersection points. Errors come from editing a scene, validating its
//! configuration and writing rendered output.

use thiserror::Error;

/// Errors that can occur while editing or rendering a scene.
#[derive(Debug, Error)]
pub enum MultilatError {
    /// A radius was negative or not finite.
    #[error("invalid radius {radius}: must be finite and non-negative")]
    InvalidRadius {
        /// The rejected radius.
        radius: f64,
    },

    /// A coordinate was NaN or infinite.
    #[error("non-finite coordinate")]
    NonFinite,

    /// An antenna index was past the end of the scene.
    #[error("antenna index {index} out of range for {len} antennas")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of antennas in the scene.
        len: usize,
    },

    /// An edit required a selected antenna but none was selected.
    #[error("no antenna selected")]
    NoSelection,

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// Writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for fallible scene operations.
pub type Result<T> = std::result::Result<T, MultilatError>;
