//! Page geometry configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fixed layout parameters controlling wrapping and pagination.
///
/// All lengths are in points (1/72 inch). The same margin is applied to
/// all four edges. Characters are assumed monospaced for wrapping, even
/// though the declared font is proportional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    /// Page width
    pub page_width: f64,

    /// Page height
    pub page_height: f64,

    /// Margin applied to every edge
    pub margin: f64,

    /// Vertical distance between baselines
    pub line_pitch: f64,

    /// Font size
    pub font_size: f64,

    /// Maximum characters per wrapped line
    pub max_chars: usize,
}

impl PageGeometry {
    /// Create a geometry with the default US-letter layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// US letter (8.5 x 11 inches).
    pub fn letter() -> Self {
        Self::default()
    }

    /// A4 (210 x 297 mm) with the default margins and type.
    pub fn a4() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            ..Self::default()
        }
    }

    /// Set page dimensions.
    pub fn with_page_size(mut self, width: f64, height: f64) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Set the margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the line pitch.
    pub fn with_line_pitch(mut self, pitch: f64) -> Self {
        self.line_pitch = pitch;
        self
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set the wrap width in characters.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Height available to text between the top and bottom margins.
    pub fn usable_height(&self) -> f64 {
        self.page_height - 2.0 * self.margin
    }

    /// `floor((page_height - 2 * margin) / line_pitch)`, unchecked.
    ///
    /// May be zero or negative for a degenerate geometry; use
    /// [`PageGeometry::validate`] to reject those.
    pub fn raw_lines_per_page(&self) -> i64 {
        (self.usable_height() / self.line_pitch).floor() as i64
    }

    /// Validate the geometry and return the number of lines per page.
    pub fn validate(&self) -> Result<usize> {
        let fields = [
            ("page_width", self.page_width),
            ("page_height", self.page_height),
            ("margin", self.margin),
            ("line_pitch", self.line_pitch),
            ("font_size", self.font_size),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidGeometry { field, value });
            }
        }
        if self.max_chars == 0 {
            return Err(Error::InvalidWrapWidth(self.max_chars));
        }

        let lines_per_page = self.raw_lines_per_page();
        if lines_per_page < 1 {
            return Err(Error::DegenerateGeometry {
                lines_per_page,
                usable_height: self.usable_height(),
                line_pitch: self.line_pitch,
            });
        }
        Ok(lines_per_page as usize)
    }

    /// Validated lines per page.
    pub fn lines_per_page(&self) -> Result<usize> {
        self.validate()
    }

    /// Baseline of the given line (0-indexed within its page).
    pub fn baseline(&self, line_index: usize) -> f64 {
        self.page_height - self.margin - line_index as f64 * self.line_pitch
    }

    /// Load a geometry from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            margin: 50.0,
            line_pitch: 16.0,
            font_size: 12.0,
            max_chars: 90,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lines_per_page() {
        // (792 - 100) / 16 = 43.25
        assert_eq!(PageGeometry::default().lines_per_page().unwrap(), 43);
    }

    #[test]
    fn test_zero_pitch_rejected() {
        let err = PageGeometry::new().with_line_pitch(0.0).validate().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidGeometry {
                field: "line_pitch",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_margin_rejected() {
        let err = PageGeometry::new().with_margin(-5.0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidGeometry { field: "margin", .. }));
    }

    #[test]
    fn test_nan_font_size_rejected() {
        let err = PageGeometry::new()
            .with_font_size(f64::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidGeometry {
                field: "font_size",
                ..
            }
        ));
    }

    #[test]
    fn test_degenerate_geometry() {
        let err = PageGeometry::new()
            .with_page_size(612.0, 120.0)
            .with_margin(55.0)
            .with_line_pitch(16.0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::DegenerateGeometry {
                lines_per_page: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_margins_exceed_page() {
        let err = PageGeometry::new()
            .with_page_size(612.0, 80.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::DegenerateGeometry { .. }));
    }

    #[test]
    fn test_zero_wrap_width() {
        let err = PageGeometry::new().with_max_chars(0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidWrapWidth(0)));
    }

    #[test]
    fn test_baseline() {
        let geometry = PageGeometry::default();
        assert_eq!(geometry.baseline(0), 742.0);
        assert_eq!(geometry.baseline(2), 710.0);
    }

    #[test]
    fn test_from_json_partial() {
        let geometry = PageGeometry::from_json(r#"{"line_pitch": 20}"#).unwrap();
        assert_eq!(geometry.line_pitch, 20.0);
        assert_eq!(geometry.page_height, 792.0);
    }
}
