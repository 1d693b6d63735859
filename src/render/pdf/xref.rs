//! Cross-reference table and trailer.

use super::object::ObjectId;

/// Byte offsets of every object, indexed by identity.
///
/// Entry 0 is the free-list sentinel and has no offset; entry `n` is the
/// offset of object `n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrossReferenceTable {
    offsets: Vec<usize>,
}

impl CrossReferenceTable {
    /// Build the table from the serialized length of each object, in
    /// identity order, starting after `header_len` bytes.
    pub fn from_lengths(header_len: usize, lengths: &[usize]) -> Self {
        let offsets = lengths
            .iter()
            .scan(header_len, |position, len| {
                let offset = *position;
                *position += len;
                Some(offset)
            })
            .collect();
        Self { offsets }
    }

    /// Number of entries including the sentinel.
    pub fn entry_count(&self) -> usize {
        self.offsets.len() + 1
    }

    /// Number of objects.
    pub fn object_count(&self) -> usize {
        self.offsets.len()
    }

    /// Offset of an object, if it was recorded.
    pub fn offset(&self, id: ObjectId) -> Option<usize> {
        let index = (id.0 as usize).checked_sub(1)?;
        self.offsets.get(index).copied()
    }

    /// Offsets in identity order (sentinel excluded).
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Write the `xref` section.
    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(format!("xref\n0 {}\n", self.entry_count()).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &self.offsets {
            out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
    }
}

/// Write the trailer, `startxref` pointer, and end-of-file marker.
pub fn write_trailer(
    out: &mut Vec<u8>,
    xref: &CrossReferenceTable,
    root: ObjectId,
    info: Option<ObjectId>,
    xref_offset: usize,
) {
    let mut dict = format!("<< /Size {} /Root {}", xref.entry_count(), root.reference());
    if let Some(info) = info {
        dict.push_str(&format!(" /Info {}", info.reference()));
    }
    dict.push_str(" >>");

    out.extend_from_slice(b"trailer\n");
    out.extend_from_slice(dict.as_bytes());
    out.extend_from_slice(format!("\nstartxref\n{}\n%%EOF\n", xref_offset).as_bytes());
}
