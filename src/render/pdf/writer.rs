//! Assembly of the paginated PDF document.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::layout::{paginate, wrap_lines, Page};
use crate::render::{ExportOptions, ExportStats};

use super::content::{format_number, page_content, FONT_RESOURCE};
use super::encoding::literal_string;
use super::object::{Dictionary, IndirectObject, ObjectId, ObjectKind};
use super::xref::{write_trailer, CrossReferenceTable};

/// File header: version line plus a binary-marker comment.
pub const PDF_HEADER: &[u8] = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n";

const CATALOG_ID: ObjectId = ObjectId(1);
const PAGES_ID: ObjectId = ObjectId(2);

/// Identity of the page object for page `index`.
pub fn page_id(index: usize) -> ObjectId {
    ObjectId(3 + 2 * index as u32)
}

/// Identity of the content stream for page `index`.
pub fn content_id(index: usize) -> ObjectId {
    ObjectId(4 + 2 * index as u32)
}

/// Identity of the shared font object.
pub fn font_id(page_count: usize) -> ObjectId {
    ObjectId(3 + 2 * page_count as u32)
}

/// Identity of the document information dictionary.
pub fn info_id(page_count: usize) -> ObjectId {
    ObjectId(4 + 2 * page_count as u32)
}

/// A finished document and the bookkeeping used to build it.
#[derive(Debug, Clone)]
pub struct AssembledDocument {
    /// The complete file
    pub bytes: Vec<u8>,

    /// Object offsets
    pub xref: CrossReferenceTable,

    /// Byte offset of the `xref` keyword
    pub xref_offset: usize,

    /// Object identities and roles, in emission order
    pub objects: Vec<(ObjectId, ObjectKind)>,

    /// Wrapped lines per page
    pub pages: Vec<Page>,

    /// Statistics
    pub stats: ExportStats,
}

impl AssembledDocument {
    /// Get the number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Builds a text-only PDF from report lines.
pub struct DocumentAssembler {
    options: ExportOptions,
}

impl DocumentAssembler {
    /// Create a new assembler.
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Wrap, paginate, and serialize the lines into a PDF.
    ///
    /// The geometry is validated first; on error nothing is built.
    pub fn assemble<S: AsRef<str>>(&self, lines: &[S]) -> Result<AssembledDocument> {
        let geometry = &self.options.geometry;
        let lines_per_page = geometry.validate()?;

        let wrapped = wrap_lines(lines, geometry.max_chars);
        let pages = paginate(&wrapped, lines_per_page)?;
        log::debug!(
            "Wrapped {} lines into {} at {} chars, {} pages of {} lines",
            lines.len(),
            wrapped.len(),
            geometry.max_chars,
            pages.len(),
            lines_per_page
        );

        let mut stats = ExportStats {
            line_count: lines.len() as u32,
            wrapped_line_count: wrapped.len() as u32,
            page_count: pages.len() as u32,
            ..ExportStats::default()
        };

        let objects = self.build_objects(&pages, &mut stats)?;
        verify_graph(&objects)?;

        // Pass 1: serialize every object on its own.
        let serialized: Vec<Vec<u8>> = objects.iter().map(IndirectObject::serialize).collect();
        let lengths: Vec<usize> = serialized.iter().map(Vec::len).collect();
        let xref = CrossReferenceTable::from_lengths(PDF_HEADER.len(), &lengths);

        // Pass 2: concatenate; offsets are the prefix lengths computed above.
        let body_len: usize = lengths.iter().sum();
        let mut bytes = Vec::with_capacity(PDF_HEADER.len() + body_len + 64 * lengths.len());
        bytes.extend_from_slice(PDF_HEADER);
        for object in &serialized {
            bytes.extend_from_slice(object);
        }

        let xref_offset = bytes.len();
        xref.write(&mut bytes);
        write_trailer(
            &mut bytes,
            &xref,
            CATALOG_ID,
            Some(info_id(pages.len())),
            xref_offset,
        );

        stats.object_count = objects.len() as u32;
        stats.byte_len = bytes.len() as u64;
        log::debug!(
            "Assembled PDF: {} objects, {} bytes, xref at {}",
            objects.len(),
            bytes.len(),
            xref_offset
        );
        if stats.replaced_chars > 0 {
            log::debug!(
                "Transliterated {} characters outside WinAnsiEncoding",
                stats.replaced_chars
            );
        }

        Ok(AssembledDocument {
            bytes,
            xref,
            xref_offset,
            objects: objects.iter().map(|o| (o.id, o.kind)).collect(),
            pages,
            stats,
        })
    }

    fn build_objects(&self, pages: &[Page], stats: &mut ExportStats) -> Result<Vec<IndirectObject>> {
        let geometry = &self.options.geometry;
        let page_count = pages.len();
        let font = font_id(page_count);
        let info = info_id(page_count);
        let mut objects = Vec::with_capacity(4 + 2 * page_count);

        objects.push(
            IndirectObject::new(
                CATALOG_ID,
                ObjectKind::Catalog,
                Dictionary::new()
                    .with("Type", "/Catalog")
                    .with("Pages", PAGES_ID.reference()),
            )
            .referencing([PAGES_ID]),
        );

        let kids: Vec<ObjectId> = (0..page_count).map(page_id).collect();
        let kids_list = kids
            .iter()
            .map(|id| id.reference())
            .collect::<Vec<_>>()
            .join(" ");
        objects.push(
            IndirectObject::new(
                PAGES_ID,
                ObjectKind::Pages,
                Dictionary::new()
                    .with("Type", "/Pages")
                    .with("Kids", format!("[{}]", kids_list))
                    .with("Count", page_count.to_string()),
            )
            .referencing(kids),
        );

        let media_box = format!(
            "[0 0 {} {}]",
            format_number(geometry.page_width),
            format_number(geometry.page_height)
        );
        let resources = format!("<< /Font << /{} {} >> >>", FONT_RESOURCE, font.reference());

        for page in pages {
            let id = page_id(page.index);
            let contents = content_id(page.index);

            objects.push(
                IndirectObject::new(
                    id,
                    ObjectKind::Page,
                    Dictionary::new()
                        .with("Type", "/Page")
                        .with("Parent", PAGES_ID.reference())
                        .with("MediaBox", media_box.clone())
                        .with("Contents", contents.reference())
                        .with("Resources", resources.clone()),
                )
                .referencing([PAGES_ID, contents, font]),
            );

            let content = page_content(page, geometry);
            stats.replaced_chars += content.replaced as u32;
            let mut stream = IndirectObject::stream(
                contents,
                ObjectKind::Content,
                Dictionary::new(),
                content.data,
            );
            if self.options.compress_streams {
                stream.compress()?;
            }
            objects.push(stream);
        }

        objects.push(IndirectObject::new(
            font,
            ObjectKind::Font,
            Dictionary::new()
                .with("Type", "/Font")
                .with("Subtype", "/Type1")
                .with(
                    "BaseFont",
                    format!("/{}", self.options.font.postscript_name()),
                )
                .with("Encoding", "/WinAnsiEncoding"),
        ));

        objects.push(IndirectObject::new(info, ObjectKind::Info, self.info_dictionary()));

        Ok(objects)
    }

    fn info_dictionary(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        if let Some(title) = self.options.title.as_deref().filter(|t| !t.trim().is_empty()) {
            dict.insert("Title", literal_string(title));
        }
        dict.insert(
            "Producer",
            literal_string(concat!("reportdoc ", env!("CARGO_PKG_VERSION"))),
        );
        if let Some(date) = self.options.creation_date {
            dict.insert(
                "CreationDate",
                literal_string(&date.format("D:%Y%m%d%H%M%SZ").to_string()),
            );
        }
        dict
    }
}

/// Check that identities are dense from 1 in emission order and that
/// every reference resolves to an object in the graph.
fn verify_graph(objects: &[IndirectObject]) -> Result<()> {
    let mut known = HashSet::with_capacity(objects.len());
    for (i, object) in objects.iter().enumerate() {
        if object.id.0 as usize != i + 1 {
            return Err(Error::Render(format!(
                "object {} emitted at position {}",
                object.id,
                i + 1
            )));
        }
        known.insert(object.id);
    }

    for object in objects {
        if let Some(missing) = object.references.iter().find(|id| !known.contains(*id)) {
            return Err(Error::Render(format!(
                "object {} references missing object {}",
                object.id, missing
            )));
        }
    }
    Ok(())
}
