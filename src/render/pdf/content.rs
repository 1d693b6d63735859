//! Page content streams.

use crate::layout::{Page, PageGeometry};

use super::encoding::{escape_bytes, encode_text};

/// Resource name of the shared font in every page's `/Font` dictionary.
pub const FONT_RESOURCE: &str = "F1";

/// Format a number for content streams: integers without a fraction,
/// everything else with at most three decimals.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let s = format!("{:.3}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// A page's content stream plus encoding statistics.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    /// Stream data (pure ASCII)
    pub data: Vec<u8>,

    /// Characters transliterated while encoding the page
    pub replaced: usize,
}

/// Build the content stream for one page.
///
/// Each line is positioned with an absolute text matrix at the left
/// margin, its baseline `line_index * line_pitch` below the top margin.
pub fn page_content(page: &Page, geometry: &PageGeometry) -> PageContent {
    let mut content = PageContent::default();
    let x = format_number(geometry.margin);

    let mut ops = String::new();
    ops.push_str("BT\n");
    ops.push_str(&format!(
        "/{} {} Tf\n",
        FONT_RESOURCE,
        format_number(geometry.font_size)
    ));
    for (line_index, line) in page.lines.iter().enumerate() {
        let y = format_number(geometry.baseline(line_index));
        let encoded = encode_text(line);
        content.replaced += encoded.replaced;
        ops.push_str(&format!("1 0 0 1 {} {} Tm\n", x, y));
        ops.push_str(&format!("({}) Tj\n", escape_bytes(&encoded.bytes)));
    }
    ops.push_str("ET");

    content.data = ops.into_bytes();
    content
}
