//! Export entry points and the exporter registry.
//!
//! The two core entry points are [`export_delimited`] and
//! [`export_document`]. Each returns the bytes plus a suggested filename
//! and leaves saving them to the caller.
//!
//! # Example
//!
//! ```no_run
//! use reportdoc::export::{ExporterRegistry, export_document};
//! use reportdoc::{ExportOptions, Report};
//!
//! fn main() -> reportdoc::Result<()> {
//!     let report = Report::from_json(&std::fs::read_to_string("report.json")?)?;
//!
//!     let pdf = export_document(&report, &ExportOptions::default())?;
//!     std::fs::write(&pdf.filename, &pdf.bytes)?;
//!
//!     let registry = ExporterRegistry::with_defaults();
//!     let csv = registry.export(&report, "csv", &ExportOptions::default())?;
//!     std::fs::write(&csv.filename, &csv.bytes)?;
//!     Ok(())
//! }
//! ```

mod exporters;

pub use exporters::{CsvExporter, JsonExporter, PdfExporter, TextExporter};

use crate::error::{Error, Result};
use crate::model::Report;
use crate::render::{self, ExportOptions, ExportStats};
use std::collections::HashMap;
use std::sync::Arc;

/// Fallback file stem when the spreadsheet has no usable name.
pub const DEFAULT_FILE_STEM: &str = "report";

/// Bytes produced by an export, ready to hand to a download/save step.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Output bytes
    pub bytes: Vec<u8>,

    /// Suggested filename, extension included
    pub filename: String,

    /// MIME type of the output
    pub mime_type: &'static str,

    /// Statistics collected while exporting
    pub stats: ExportStats,
}

impl ExportResult {
    /// Create a new export result.
    pub fn new(bytes: Vec<u8>, filename: String, mime_type: &'static str) -> Self {
        let stats = ExportStats {
            byte_len: bytes.len() as u64,
            ..ExportStats::default()
        };
        Self {
            bytes,
            filename,
            mime_type,
            stats,
        }
    }

    /// Set export statistics.
    pub fn with_stats(mut self, stats: ExportStats) -> Self {
        self.stats = stats;
        self
    }

    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.bytes.len()
    }
}

/// Derive a download filename from a display name.
///
/// The name is lower-cased and each run of whitespace becomes a single
/// hyphen; a blank name falls back to [`DEFAULT_FILE_STEM`].
pub fn suggested_filename(name: &str, extension: &str) -> String {
    let stem = name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    let stem = if stem.is_empty() {
        DEFAULT_FILE_STEM
    } else {
        stem.as_str()
    };
    format!("{}.{}", stem, extension)
}

/// Produce the delimited (CSV) table for a report.
pub fn export_delimited(report: &Report) -> ExportResult {
    let flat = render::flatten(report);
    let csv = render::encode_rows(&flat.rows);
    let stats = ExportStats {
        line_count: flat.lines.len() as u32,
        row_count: flat.rows.len() as u32,
        byte_len: csv.len() as u64,
        ..ExportStats::default()
    };
    log::debug!("Encoded {} rows into {} bytes of CSV", flat.rows.len(), csv.len());

    ExportResult::new(
        csv.into_bytes(),
        suggested_filename(&report.spreadsheet.name, "csv"),
        "text/csv",
    )
    .with_stats(stats)
}

/// Produce the paginated PDF document for a report.
///
/// The document title defaults to the spreadsheet name. Fails only for an
/// invalid geometry, before any output is built.
pub fn export_document(report: &Report, options: &ExportOptions) -> Result<ExportResult> {
    let mut options = options.clone();
    if options.title.is_none() && !report.spreadsheet.name.trim().is_empty() {
        options.title = Some(report.spreadsheet.name.trim().to_string());
    }

    let flat = render::flatten(report);
    let document = render::DocumentAssembler::new(options).assemble(&flat.lines)?;
    let mut stats = document.stats;
    stats.row_count = flat.rows.len() as u32;

    Ok(ExportResult::new(
        document.bytes,
        suggested_filename(&report.spreadsheet.name, "pdf"),
        "application/pdf",
    )
    .with_stats(stats))
}

/// Trait for report exporters.
///
/// Implement this trait to add support for a new output format.
pub trait ReportExporter: Send + Sync {
    /// File extension of the output, lowercase without the leading dot.
    fn extension(&self) -> &str;

    /// Get the name of this exporter.
    fn name(&self) -> &str;

    /// MIME type of the output.
    fn mime_type(&self) -> &'static str;

    /// Export a report.
    fn export(&self, report: &Report, options: &ExportOptions) -> Result<ExportResult>;

    /// Check if this exporter produces the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        self.extension().eq_ignore_ascii_case(ext.trim_start_matches('.'))
    }
}

/// Registry mapping format extensions and names to exporters.
pub struct ExporterRegistry {
    exporters: HashMap<String, Arc<dyn ReportExporter>>,
    by_name: HashMap<String, Arc<dyn ReportExporter>>,
}

impl ExporterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            exporters: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the built-in exporters (CSV, PDF, text, JSON).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(CsvExporter::new()));
        registry.register(Arc::new(PdfExporter::new()));
        registry.register(Arc::new(TextExporter::new()));
        registry.register(Arc::new(JsonExporter::new()));
        registry
    }

    /// Register an exporter under its extension and name.
    pub fn register(&mut self, exporter: Arc<dyn ReportExporter>) {
        self.exporters
            .insert(exporter.extension().to_lowercase(), exporter.clone());
        self.by_name.insert(exporter.name().to_lowercase(), exporter);
    }

    /// Get an exporter by extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn ReportExporter>> {
        self.exporters
            .get(&ext.trim_start_matches('.').to_lowercase())
            .cloned()
    }

    /// Get an exporter by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn ReportExporter>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Look up by extension first, then by name.
    pub fn get(&self, format: &str) -> Option<Arc<dyn ReportExporter>> {
        self.get_by_extension(format)
            .or_else(|| self.get_by_name(format))
    }

    /// Check if a format is supported.
    pub fn supports(&self, format: &str) -> bool {
        self.get(format).is_some()
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.exporters.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Export a report in the given format (extension or exporter name).
    pub fn export(
        &self,
        report: &Report,
        format: &str,
        options: &ExportOptions,
    ) -> Result<ExportResult> {
        let exporter = self
            .get(format)
            .ok_or_else(|| Error::UnsupportedFormat(format.to_string()))?;
        log::debug!("Exporting report with the {} exporter", exporter.name());
        exporter.export(report, options)
    }
}

impl Default for ExporterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
