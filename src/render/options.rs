//! Export options and configuration.

use chrono::{DateTime, Utc};

use crate::layout::PageGeometry;

/// Options for exporting a report.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Page geometry for the PDF document
    pub geometry: PageGeometry,

    /// Document title (falls back to the spreadsheet name)
    pub title: Option<String>,

    /// Creation date written to the document info; omitted when `None`
    pub creation_date: Option<DateTime<Utc>>,

    /// Deflate page content streams
    pub compress_streams: bool,

    /// Standard font used for all text
    pub font: BaseFont,
}

impl ExportOptions {
    /// Create new export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the creation date.
    pub fn with_creation_date(mut self, date: DateTime<Utc>) -> Self {
        self.creation_date = Some(date);
        self
    }

    /// Enable or disable content stream compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress_streams = compress;
        self
    }

    /// Set the font.
    pub fn with_font(mut self, font: BaseFont) -> Self {
        self.font = font;
        self
    }
}

/// Standard Type 1 fonts every conforming reader provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseFont {
    /// Helvetica (sans serif)
    #[default]
    Helvetica,
    /// Times Roman (serif)
    TimesRoman,
    /// Courier (monospaced)
    Courier,
}

impl BaseFont {
    /// PostScript name used for `/BaseFont`.
    pub fn postscript_name(self) -> &'static str {
        match self {
            BaseFont::Helvetica => "Helvetica",
            BaseFont::TimesRoman => "Times-Roman",
            BaseFont::Courier => "Courier",
        }
    }

    /// Parse a font name (e.g., "helvetica", "times", "courier").
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "helvetica" | "sans" => Ok(BaseFont::Helvetica),
            "times" | "times-roman" | "serif" => Ok(BaseFont::TimesRoman),
            "courier" | "mono" => Ok(BaseFont::Courier),
            other => Err(format!("Unknown font: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_export_options_builder() {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let options = ExportOptions::new()
            .with_title("Q3")
            .with_creation_date(date)
            .with_compression(true)
            .with_font(BaseFont::Courier);

        assert_eq!(options.title.as_deref(), Some("Q3"));
        assert_eq!(options.creation_date, Some(date));
        assert!(options.compress_streams);
        assert_eq!(options.font.postscript_name(), "Courier");
    }

    #[test]
    fn test_defaults_are_deterministic() {
        let options = ExportOptions::default();
        assert!(options.creation_date.is_none());
        assert!(!options.compress_streams);
        assert_eq!(options.font, BaseFont::Helvetica);
        assert_eq!(options.geometry, PageGeometry::default());
    }

    #[test]
    fn test_font_parse() {
        assert_eq!(BaseFont::parse("Times").unwrap(), BaseFont::TimesRoman);
        assert_eq!(BaseFont::parse("mono").unwrap(), BaseFont::Courier);
        assert!(BaseFont::parse("comic").is_err());
    }
}
