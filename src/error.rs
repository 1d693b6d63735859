//! Error types for reportdoc library.

use std::io;
use thiserror::Error;

/// Result type alias for reportdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while exporting a report.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A report or geometry could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A page geometry field is zero, negative, or not finite.
    #[error("Invalid page geometry: {field} must be a positive number (got {value})")]
    InvalidGeometry {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// The geometry leaves no room for a single line of text.
    #[error(
        "Degenerate page geometry: {usable_height}pt of usable height at {line_pitch}pt pitch \
         yields {lines_per_page} lines per page"
    )]
    DegenerateGeometry {
        /// Computed lines per page (always < 1)
        lines_per_page: i64,
        /// Page height minus both margins
        usable_height: f64,
        /// Vertical distance between baselines
        line_pitch: f64,
    },

    /// The maximum characters per wrapped line must be at least one.
    #[error("Invalid wrap width: {0} (must be at least 1)")]
    InvalidWrapWidth(usize),

    /// Error while rendering an output format.
    #[error("Rendering error: {0}")]
    Render(String),

    /// No exporter is registered for the requested format.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),
}
