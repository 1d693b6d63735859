//! Rendering module for converting reports to output formats.

pub mod csv;
mod flatten;
mod json;
mod options;
pub mod pdf;
mod result;
mod text;

pub use csv::{encode_rows, quote_cell};
pub use flatten::{flatten, FlatReport, BULLET, CELL_SEPARATOR};
pub use json::{to_json, JsonFormat};
pub use options::{BaseFont, ExportOptions};
pub use pdf::{AssembledDocument, DocumentAssembler};
pub use result::ExportStats;
pub use text::to_text;
