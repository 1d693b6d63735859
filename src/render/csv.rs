//! Delimited (CSV) table encoding.

/// Quote a single cell, doubling any embedded double quote.
pub fn quote_cell(cell: &str) -> String {
    let mut out = String::with_capacity(cell.len() + 2);
    out.push('"');
    for ch in cell.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

/// Encode rows as quoted, comma-separated records joined by `\n`.
///
/// Every cell is quoted. Rows are not padded to a common width, and the
/// output has no trailing line terminator. An empty row encodes as an
/// empty record.
pub fn encode_rows<R, S>(rows: &[R]) -> String
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    rows.iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .map(|cell| quote_cell(cell.as_ref()))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
