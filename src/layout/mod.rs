//! Page layout: geometry, word wrapping, and pagination.
//!
//! Layout is character-based. The wrap width counts characters as if the
//! font were monospaced, and pages hold a fixed number of lines derived
//! from the page height, margin, and line pitch.

mod geometry;
mod paginate;
mod wrap;

pub use geometry::PageGeometry;
pub use paginate::{paginate, Page};
pub use wrap::{wrap_line, wrap_lines};
