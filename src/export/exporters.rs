//! Built-in report exporters.

use crate::error::Result;
use crate::model::Report;
use crate::render::{to_json, to_text, ExportOptions, ExportStats, JsonFormat};

use super::{
    export_delimited, export_document, suggested_filename, ExportResult, ReportExporter,
};

/// Delimited table (CSV) exporter.
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    _private: (),
}

impl CsvExporter {
    /// Create a new CSV exporter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ReportExporter for CsvExporter {
    fn extension(&self) -> &str {
        "csv"
    }

    fn name(&self) -> &str {
        "csv"
    }

    fn mime_type(&self) -> &'static str {
        "text/csv"
    }

    fn export(&self, report: &Report, _options: &ExportOptions) -> Result<ExportResult> {
        Ok(export_delimited(report))
    }
}

/// Paginated PDF document exporter.
#[derive(Debug, Clone, Default)]
pub struct PdfExporter {
    _private: (),
}

impl PdfExporter {
    /// Create a new PDF exporter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ReportExporter for PdfExporter {
    fn extension(&self) -> &str {
        "pdf"
    }

    fn name(&self) -> &str {
        "pdf"
    }

    fn mime_type(&self) -> &'static str {
        "application/pdf"
    }

    fn export(&self, report: &Report, options: &ExportOptions) -> Result<ExportResult> {
        export_document(report, options)
    }
}

/// Plain text exporter.
#[derive(Debug, Clone, Default)]
pub struct TextExporter {
    _private: (),
}

impl TextExporter {
    /// Create a new text exporter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ReportExporter for TextExporter {
    fn extension(&self) -> &str {
        "txt"
    }

    fn name(&self) -> &str {
        "text"
    }

    fn mime_type(&self) -> &'static str {
        "text/plain"
    }

    fn export(&self, report: &Report, options: &ExportOptions) -> Result<ExportResult> {
        let text = to_text(report, options)?;
        let stats = ExportStats {
            wrapped_line_count: text.lines().count() as u32,
            byte_len: text.len() as u64,
            ..ExportStats::default()
        };
        Ok(ExportResult::new(
            text.into_bytes(),
            suggested_filename(&report.spreadsheet.name, self.extension()),
            self.mime_type(),
        )
        .with_stats(stats))
    }
}

/// JSON exporter (pretty-printed report model).
#[derive(Debug, Clone, Default)]
pub struct JsonExporter {
    format: JsonFormat,
}

impl JsonExporter {
    /// Create a new pretty-printing JSON exporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compact JSON exporter.
    pub fn compact() -> Self {
        Self {
            format: JsonFormat::Compact,
        }
    }
}

impl ReportExporter for JsonExporter {
    fn extension(&self) -> &str {
        "json"
    }

    fn name(&self) -> &str {
        "json"
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn export(&self, report: &Report, _options: &ExportOptions) -> Result<ExportResult> {
        let json = to_json(report, self.format)?;
        Ok(ExportResult::new(
            json.into_bytes(),
            suggested_filename(&report.spreadsheet.name, self.extension()),
            self.mime_type(),
        ))
    }
}
