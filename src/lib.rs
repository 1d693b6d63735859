//! # reportdoc
//!
//! Report export for spreadsheet assistants.
//!
//! This library takes an in-memory report (summary, metrics, analysis,
//! spreadsheet rows, chart series, actions) and serializes it into a
//! quoted CSV table and a paginated, text-only PDF document. The PDF is
//! written directly, without a rendering library.
//!
//! ## Quick Start
//!
//! ```no_run
//! use reportdoc::{export_delimited, export_document, ExportOptions, Report};
//!
//! fn main() -> reportdoc::Result<()> {
//!     let report = reportdoc::load_report("report.json")?;
//!
//!     let csv = export_delimited(&report);
//!     std::fs::write(&csv.filename, &csv.bytes)?;
//!
//!     let pdf = export_document(&report, &ExportOptions::default())?;
//!     std::fs::write(&pdf.filename, &pdf.bytes)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Two interchange formats**: quoted CSV and PDF 1.4
//! - **Deterministic output**: identical input yields identical bytes
//! - **Configurable geometry**: page size, margin, line pitch, font size, wrap width
//! - **WinAnsi text**: non-Latin characters are transliterated, never miscounted
//! - **Optional extras**: document info, Flate-compressed streams, text and JSON output

pub mod error;
pub mod export;
pub mod layout;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{
    export_delimited, export_document, suggested_filename, ExportResult, ExporterRegistry,
    ReportExporter,
};
pub use layout::{Page, PageGeometry};
pub use model::{Analysis, Attribution, Chart, Metric, PlanStep, Report, Spreadsheet};
pub use render::{BaseFont, ExportOptions, ExportStats, FlatReport, JsonFormat};

use std::path::Path;

/// Load a report from a JSON file.
///
/// # Example
///
/// ```no_run
/// use reportdoc::load_report;
///
/// let report = load_report("report.json").unwrap();
/// println!("Rows: {}", report.spreadsheet.row_count());
/// ```
pub fn load_report<P: AsRef<Path>>(path: P) -> Result<Report> {
    let json = std::fs::read_to_string(path)?;
    Report::from_json(&json)
}

/// Builder for configuring and running exports.
///
/// # Example
///
/// ```no_run
/// use reportdoc::{PageGeometry, ReportDoc};
///
/// let pdf = ReportDoc::new()
///     .with_geometry(PageGeometry::a4().with_max_chars(80))
///     .with_title("Quarterly review")
///     .compressed()
///     .load_file("report.json")?
///     .to_pdf()?;
/// std::fs::write(&pdf.filename, &pdf.bytes)?;
/// # Ok::<(), reportdoc::Error>(())
/// ```
pub struct ReportDoc {
    options: ExportOptions,
}

impl ReportDoc {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ExportOptions::default(),
        }
    }

    /// Set the page geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.options = self.options.with_geometry(geometry);
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options = self.options.with_title(title);
        self
    }

    /// Stamp the document with a creation date.
    pub fn with_creation_date(mut self, date: chrono::DateTime<chrono::Utc>) -> Self {
        self.options = self.options.with_creation_date(date);
        self
    }

    /// Compress PDF content streams.
    pub fn compressed(mut self) -> Self {
        self.options = self.options.with_compression(true);
        self
    }

    /// Set the font.
    pub fn with_font(mut self, font: BaseFont) -> Self {
        self.options = self.options.with_font(font);
        self
    }

    /// Use an in-memory report.
    pub fn load(self, report: Report) -> LoadedReport {
        LoadedReport {
            report,
            options: self.options,
        }
    }

    /// Parse a report from JSON.
    pub fn load_json(self, json: &str) -> Result<LoadedReport> {
        Ok(self.load(Report::from_json(json)?))
    }

    /// Read a report from a JSON file.
    pub fn load_file<P: AsRef<Path>>(self, path: P) -> Result<LoadedReport> {
        Ok(self.load(load_report(path)?))
    }
}

impl Default for ReportDoc {
    fn default() -> Self {
        Self::new()
    }
}

/// A report paired with the options to export it with.
pub struct LoadedReport {
    /// The report
    pub report: Report,
    /// Export options to use
    options: ExportOptions,
}

impl LoadedReport {
    /// Export as CSV.
    pub fn to_csv(&self) -> ExportResult {
        export_delimited(&self.report)
    }

    /// Export as PDF.
    pub fn to_pdf(&self) -> Result<ExportResult> {
        export_document(&self.report, &self.options)
    }

    /// Render as wrapped plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.report, &self.options)
    }

    /// Render as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.report, format)
    }

    /// Export in any format the default registry knows.
    pub fn export(&self, format: &str) -> Result<ExportResult> {
        ExporterRegistry::with_defaults().export(&self.report, format, &self.options)
    }

    /// Flattened display lines and table rows.
    pub fn flatten(&self) -> FlatReport {
        render::flatten(&self.report)
    }

    /// Export options in effect.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }
}
