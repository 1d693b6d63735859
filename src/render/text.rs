//! Plain text rendering for reports.

use crate::error::{Error, Result};
use crate::layout::wrap_lines;
use crate::model::Report;

use super::{flatten, ExportOptions};

/// Convert a report to plain text, wrapped at the geometry's width.
///
/// The output carries exactly the lines the PDF would show, without
/// pagination.
pub fn to_text(report: &Report, options: &ExportOptions) -> Result<String> {
    let width = options.geometry.max_chars;
    if width == 0 {
        return Err(Error::InvalidWrapWidth(width));
    }

    let flat = flatten(report);
    Ok(wrap_lines(&flat.lines, width).join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PageGeometry;
    use crate::model::Spreadsheet;

    #[test]
    fn test_to_text() {
        let report = Report::new("Hello, world!")
            .with_spreadsheet(Spreadsheet::new("Sales", "Today").with_row(["a", "b"]));

        let result = to_text(&report, &ExportOptions::default()).unwrap();

        assert_eq!(
            result,
            "Report summary\nHello, world!\n\nSales (Last updated Today)\na | b"
        );
    }

    #[test]
    fn test_to_text_wraps() {
        let report = Report::new("alpha beta gamma");
        let options =
            ExportOptions::new().with_geometry(PageGeometry::new().with_max_chars(10));
        let result = to_text(&report, &options).unwrap();
        assert_eq!(result, "Report\nsummary\nalpha beta\ngamma");
    }

    #[test]
    fn test_to_text_zero_width() {
        let options = ExportOptions::new().with_geometry(PageGeometry::new().with_max_chars(0));
        assert!(to_text(&Report::default(), &options).is_err());
    }
}
