//! Minimal PDF writer for text-only reports.
//!
//! The document graph is fixed: catalog (1), page tree (2), then a page
//! object and its content stream for every page (`3 + 2i`, `4 + 2i`), the
//! shared font (`3 + 2n`), and the info dictionary (`4 + 2n`). Objects are
//! serialized individually, then concatenated while the cross-reference
//! table records each prefix length as that object's offset.

mod content;
mod encoding;
mod object;
mod writer;
mod xref;

pub use content::{format_number, page_content, PageContent, FONT_RESOURCE};
pub use encoding::{encode_text, escape_bytes, literal_string, winansi_byte, EncodedText};
pub use object::{Dictionary, IndirectObject, ObjectId, ObjectKind};
pub use writer::{
    content_id, font_id, info_id, page_id, AssembledDocument, DocumentAssembler, PDF_HEADER,
};
pub use xref::{write_trailer, CrossReferenceTable};
