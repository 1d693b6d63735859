//! Structural tests for generated PDFs, read back with lopdf.

use lopdf::content::Content;
use lopdf::{Document, Object};

use reportdoc::layout::wrap_lines;
use reportdoc::render::pdf::{encode_text, font_id, info_id, DocumentAssembler, ObjectId};
use reportdoc::render::flatten;
use reportdoc::{export_document, ExportOptions, PageGeometry, Report, Spreadsheet};

fn three_line_options() -> ExportOptions {
    ExportOptions::new().with_geometry(
        PageGeometry::new()
            .with_page_size(200.0, 100.0)
            .with_margin(10.0)
            .with_line_pitch(25.0),
    )
}

fn market_lines() -> Vec<String> {
    vec![
        "Report summary".to_string(),
        "Start from a spreadsheet...".to_string(),
        String::new(),
        "Market Insights (Last updated Today · 2:14 PM)".to_string(),
        "Segment | Revenue | Growth | Notes".to_string(),
        "Enterprise | $4.2M | 12% | Strong renewals (Acme)".to_string(),
        "SMB | $1.1M | -3% | Watch churn".to_string(),
    ]
}

/// Text operands of every `Tj` on a page, in stream order.
fn page_strings(doc: &Document, page: lopdf::ObjectId) -> Vec<Vec<u8>> {
    let data = doc.get_page_content(page).unwrap();
    let content = Content::decode(&data).unwrap();
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .map(|op| match &op.operands[0] {
            Object::String(bytes, _) => bytes.clone(),
            other => panic!("unexpected Tj operand: {:?}", other),
        })
        .collect()
}

#[test]
fn test_reader_recovers_pages_and_lines() {
    let lines = market_lines();
    let options = three_line_options();
    let document = DocumentAssembler::new(options.clone())
        .assemble(&lines)
        .unwrap();

    let doc = Document::load_mem(&document.bytes).unwrap();
    let pages = doc.get_pages();

    let wrapped = wrap_lines(&lines, options.geometry.max_chars);
    assert_eq!(pages.len(), wrapped.len().div_ceil(3));
    assert_eq!(pages.len(), document.page_count());

    let recovered: Vec<Vec<u8>> = pages
        .values()
        .flat_map(|&page| page_strings(&doc, page))
        .collect();
    let expected: Vec<Vec<u8>> = wrapped.iter().map(|l| encode_text(l).bytes).collect();
    assert_eq!(recovered, expected);
}

#[test]
fn test_reader_recovers_wrapped_lines() {
    let lines = vec![
        "A line long enough that it has to be wrapped across several rows".to_string(),
        "Short".to_string(),
    ];
    let options = three_line_options().with_geometry(
        three_line_options().geometry.with_max_chars(16),
    );
    let document = DocumentAssembler::new(options).assemble(&lines).unwrap();

    let doc = Document::load_mem(&document.bytes).unwrap();
    let recovered: Vec<String> = doc
        .get_pages()
        .values()
        .flat_map(|&page| page_strings(&doc, page))
        .map(|bytes| String::from_utf8(bytes).unwrap())
        .collect();

    assert_eq!(recovered, wrap_lines(&lines, 16));
    assert!(recovered.iter().all(|l| l.chars().count() <= 16));
}

#[test]
fn test_xref_offsets_point_at_objects() {
    let lines = market_lines();
    let document = DocumentAssembler::new(three_line_options())
        .assemble(&lines)
        .unwrap();
    let bytes = &document.bytes;

    assert_eq!(document.xref.entry_count(), document.objects.len() + 1);
    for (id, _) in &document.objects {
        let offset = document.xref.offset(*id).unwrap();
        let marker = format!("{} 0 obj", id.0);
        assert!(
            bytes[offset..].starts_with(marker.as_bytes()),
            "object {} not at offset {}",
            id,
            offset
        );
    }

    let tail = String::from_utf8_lossy(&bytes[document.xref_offset..]).into_owned();
    assert!(tail.starts_with("xref\n0 "));
    assert!(tail.ends_with(&format!("startxref\n{}\n%%EOF\n", document.xref_offset)));
}

#[test]
fn test_xref_entries_are_twenty_bytes() {
    let document = DocumentAssembler::new(ExportOptions::default())
        .assemble(&market_lines())
        .unwrap();
    let tail = &document.bytes[document.xref_offset..];

    let header_len = format!("xref\n0 {}\n", document.xref.entry_count()).len();
    let entries = &tail[header_len..header_len + 20 * document.xref.entry_count()];
    for entry in entries.chunks(20) {
        assert_eq!(entry.len(), 20);
        assert!(entry.ends_with(b" \n"));
    }
    assert!(tail[header_len + 20 * document.xref.entry_count()..].starts_with(b"trailer"));
}

#[test]
fn test_object_graph_identities() {
    let document = DocumentAssembler::new(three_line_options())
        .assemble(&market_lines())
        .unwrap();
    let doc = Document::load_mem(&document.bytes).unwrap();
    let n = document.page_count();

    let root = doc.trailer.get(b"Root").unwrap().as_reference().unwrap();
    assert_eq!(root, (1, 0));

    let catalog = doc.get_dictionary(root).unwrap();
    assert_eq!(catalog.get(b"Pages").unwrap().as_reference().unwrap(), (2, 0));

    let page_ids: Vec<u32> = doc.get_pages().values().map(|id| id.0).collect();
    let expected: Vec<u32> = (0..n as u32).map(|i| 3 + 2 * i).collect();
    assert_eq!(page_ids, expected);

    let font: ObjectId = font_id(n);
    let font_dict = doc.get_dictionary((font.0, 0)).unwrap();
    assert_eq!(font_dict.get(b"BaseFont").unwrap().as_name().unwrap(), b"Helvetica");
    assert_eq!(
        font_dict.get(b"Encoding").unwrap().as_name().unwrap(),
        b"WinAnsiEncoding"
    );

    let info = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
    assert_eq!(info.0, info_id(n).0);
}

#[test]
fn test_empty_document_is_readable() {
    let empty: Vec<String> = Vec::new();
    let document = DocumentAssembler::new(ExportOptions::default())
        .assemble(&empty)
        .unwrap();

    let doc = Document::load_mem(&document.bytes).unwrap();
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1);

    let page = *pages.values().next().unwrap();
    assert_eq!(page_strings(&doc, page), vec![Vec::<u8>::new()]);
}

#[test]
fn test_compressed_streams_round_trip() {
    let report = Report::new("Start from a spreadsheet...")
        .with_spreadsheet(Spreadsheet::new("Market Insights", "Today"));
    let lines = flatten(&report).lines;

    let plain = export_document(&report, &three_line_options()).unwrap();
    let compressed =
        export_document(&report, &three_line_options().with_compression(true)).unwrap();
    assert_ne!(plain.bytes, compressed.bytes);

    let doc = Document::load_mem(&compressed.bytes).unwrap();
    let recovered: Vec<String> = doc
        .get_pages()
        .values()
        .flat_map(|&page| page_strings(&doc, page))
        .map(|bytes| String::from_utf8(bytes).unwrap())
        .collect();

    assert_eq!(recovered, wrap_lines(&lines, 90));
}

#[test]
fn test_document_info_title() {
    let report = Report::new("S").with_spreadsheet(Spreadsheet::new("Q3 (draft) Plan", ""));
    let result = export_document(&report, &ExportOptions::default()).unwrap();

    let doc = Document::load_mem(&result.bytes).unwrap();
    let info = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
    let title = doc.get_dictionary(info).unwrap().get(b"Title").unwrap();

    assert_eq!(title.as_str().unwrap(), b"Q3 (draft) Plan");
    assert_eq!(doc.version, "1.4");
}
