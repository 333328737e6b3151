//! # Corpus Model
//!
//! Raw annotation lines and their grouping into documents. A document is a
//! contiguous run of lines sharing one content hash; if the same hash shows
//! up again later in the corpus it starts a new document, mirroring the
//! upstream corpus ordering.

use crate::error::Result;
use crate::record::{RecordParser, is_blank};

/// An ordered, non-empty run of corpus lines sharing one document id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Wraps a non-empty run of lines.
    pub fn new(lines: Vec<String>) -> Self {
        debug_assert!(!lines.is_empty());
        Self { lines }
    }

    /// The raw lines of this document, in corpus order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the document, yielding its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Number of lines in this document.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false for a well-formed document.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One unit handed to the fold partitioner: either a single raw line or a
/// whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// A single raw corpus line.
    Line(String),
    /// A contiguous run of lines sharing one document id.
    Document(Document),
}

impl Item {
    /// Number of raw lines behind this item.
    pub fn line_count(&self) -> usize {
        match self {
            Item::Line(_) => 1,
            Item::Document(doc) => doc.len(),
        }
    }

    /// Appends the raw lines of this item to `out`, preserving line order.
    pub fn flatten_into(self, out: &mut Vec<String>) {
        match self {
            Item::Line(line) => out.push(line),
            Item::Document(doc) => out.extend(doc.into_lines()),
        }
    }
}

/// Groups corpus lines into documents by contiguous runs of one docid.
///
/// Blank lines are skipped. Document boundaries follow only contiguous
/// runs: a docid reappearing after an interruption yields a separate
/// document, by design.
///
/// # Errors
///
/// Returns `FaltwerkError::MissingDocid` if any non-blank line lacks a
/// 40-character hex token.
pub fn group_documents(lines: &[String], parser: &RecordParser) -> Result<Vec<Document>> {
    let mut docs = Vec::new();
    let mut buffer: Vec<String> = Vec::new();
    let mut current_id: Option<String> = None;

    for line in lines {
        if is_blank(line) {
            continue;
        }
        let docid = parser.docid(line)?;
        if current_id.as_deref() != Some(docid) {
            // new document begins; seal the previous run
            if !buffer.is_empty() {
                docs.push(Document::new(std::mem::take(&mut buffer)));
            }
            current_id = Some(docid.to_string());
        }
        buffer.push(line.clone());
    }

    // consider the last document
    if !buffer.is_empty() {
        docs.push(Document::new(buffer));
    }

    Ok(docs)
}
