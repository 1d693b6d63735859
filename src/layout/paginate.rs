//! Fixed-capacity pagination of wrapped lines.

use crate::error::{Error, Result};

/// A group of wrapped lines destined for one rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Page index (0-based)
    pub index: usize,

    /// Lines on the page, top to bottom; never empty
    pub lines: Vec<String>,
}

impl Page {
    /// Get the number of lines on the page.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Split wrapped lines into pages of `lines_per_page` lines.
///
/// Every page is full except possibly the last. An empty input yields a
/// single page holding one empty line, since a document needs at least
/// one page.
pub fn paginate(lines: &[String], lines_per_page: usize) -> Result<Vec<Page>> {
    if lines_per_page == 0 {
        return Err(Error::DegenerateGeometry {
            lines_per_page: 0,
            usable_height: 0.0,
            line_pitch: 0.0,
        });
    }

    if lines.is_empty() {
        return Ok(vec![Page {
            index: 0,
            lines: vec![String::new()],
        }]);
    }

    Ok(lines
        .chunks(lines_per_page)
        .enumerate()
        .map(|(index, chunk)| Page {
            index,
            lines: chunk.to_vec(),
        })
        .collect())
}
