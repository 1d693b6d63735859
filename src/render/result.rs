//! Export statistics.

/// Statistics collected while exporting a report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportStats {
    /// Flattened display lines (before wrapping)
    pub line_count: u32,

    /// Lines after word wrapping
    pub wrapped_line_count: u32,

    /// Table rows
    pub row_count: u32,

    /// Pages in the document
    pub page_count: u32,

    /// Indirect objects in the document
    pub object_count: u32,

    /// Characters transliterated to fit the font encoding
    pub replaced_chars: u32,

    /// Output size in bytes
    pub byte_len: u64,
}

impl ExportStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ExportStats) {
        self.line_count += other.line_count;
        self.wrapped_line_count += other.wrapped_line_count;
        self.row_count += other.row_count;
        self.page_count += other.page_count;
        self.object_count += other.object_count;
        self.replaced_chars += other.replaced_chars;
        self.byte_len += other.byte_len;
    }
}
