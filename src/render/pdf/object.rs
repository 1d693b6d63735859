//! Indirect objects of the document graph.

use std::fmt;
use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::error::Result;

/// Identity of an indirect object (1-based, generation always 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub u32);

impl ObjectId {
    /// Indirect reference syntax, e.g. `3 0 R`.
    pub fn reference(self) -> String {
        format!("{} 0 R", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of an object in the document graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Document catalog (root)
    Catalog,
    /// Page tree root
    Pages,
    /// A single page
    Page,
    /// A page content stream
    Content,
    /// The shared font resource
    Font,
    /// Document information dictionary
    Info,
}

/// A dictionary body, written as `<< /Key value ... >>`.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<(&'static str, String)>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry; the value is written verbatim.
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.entries.push((key, value.into()));
        self
    }

    /// Add an entry in place.
    pub fn insert(&mut self, key: &'static str, value: impl Into<String>) {
        self.entries.push((key, value.into()));
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(b"<<");
        for (key, value) in &self.entries {
            out.push(b' ');
            out.push(b'/');
            out.extend_from_slice(key.as_bytes());
            out.push(b' ');
            out.extend_from_slice(value.as_bytes());
        }
        out.extend_from_slice(b" >>");
    }
}

/// An indirect object with its references to other objects.
#[derive(Debug, Clone)]
pub struct IndirectObject {
    /// Object identity
    pub id: ObjectId,

    /// Role in the graph
    pub kind: ObjectKind,

    /// Objects this one refers to
    pub references: Vec<ObjectId>,

    dict: Dictionary,
    stream: Option<Vec<u8>>,
}

impl IndirectObject {
    /// Create a dictionary object.
    pub fn new(id: ObjectId, kind: ObjectKind, dict: Dictionary) -> Self {
        Self {
            id,
            kind,
            references: Vec::new(),
            dict,
            stream: None,
        }
    }

    /// Create a stream object; `/Length` is filled in on serialization.
    pub fn stream(id: ObjectId, kind: ObjectKind, dict: Dictionary, data: Vec<u8>) -> Self {
        Self {
            stream: Some(data),
            ..Self::new(id, kind, dict)
        }
    }

    /// Record references held by this object.
    pub fn referencing(mut self, ids: impl IntoIterator<Item = ObjectId>) -> Self {
        self.references.extend(ids);
        self
    }

    /// Deflate the stream data, if any, and mark it `/FlateDecode`.
    pub fn compress(&mut self) -> Result<()> {
        if let Some(data) = self.stream.take() {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(&data)?;
            self.stream = Some(encoder.finish()?);
            self.dict.insert("Filter", "/FlateDecode");
        }
        Ok(())
    }

    /// Serialize as `N 0 obj ... endobj`.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = format!("{} 0 obj\n", self.id).into_bytes();
        match &self.stream {
            Some(data) => {
                self.dict
                    .clone()
                    .with("Length", data.len().to_string())
                    .write(&mut out);
                out.extend_from_slice(b"\nstream\n");
                out.extend_from_slice(data);
                out.extend_from_slice(b"\nendstream");
            }
            None => self.dict.write(&mut out),
        }
        out.extend_from_slice(b"\nendobj\n");
        out
    }
}
