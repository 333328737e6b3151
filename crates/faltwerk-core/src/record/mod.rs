//! # Tagged-Line Parsing
//!
//! Extracts the per-field views of one raw annotation line. A record has a
//! fixed textual layout: leading source tokens, then a tab-introduced
//! annotation span holding the target label code, the 40-character document
//! hash and the trailing bounding-box payload.

pub mod labels;

pub use labels::{FieldLabel, translate_codes};

use regex::Regex;

use crate::error::{FaltwerkError, Result};

/// Parser for tab-separated annotation lines.
///
/// All extractors are pure functions over the line text. Blank lines are
/// the caller's concern; every consumer in this crate skips them before
/// calling in.
pub struct RecordParser {
    re_docid: Regex,
    re_source_tail: Regex,
    re_target: Regex,
    re_bbox_head: Regex,
}

impl RecordParser {
    /// Constructs a new `RecordParser` with pre-compiled patterns.
    ///
    /// # Errors
    ///
    /// Returns `FaltwerkError::Regex` if any pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            // SHA-1 content hash (40 hex chars)
            re_docid: Regex::new(r"[0-9a-fA-F]{40}")?,
            re_source_tail: Regex::new(r"\s\t.+")?,
            re_target: Regex::new(r"\t[\w ]+\t")?,
            re_bbox_head: Regex::new(r".+[0-9a-fA-F]{40}\t")?,
        })
    }

    /// The first 40-character hex token of the line.
    ///
    /// # Errors
    ///
    /// Returns `FaltwerkError::MissingDocid` if the line has no such token.
    pub fn docid<'a>(&self, line: &'a str) -> Result<&'a str> {
        self.re_docid
            .find(line)
            .map(|m| m.as_str())
            .ok_or_else(|| FaltwerkError::MissingDocid {
                line: line.to_string(),
            })
    }

    /// The source tokens, with the trailing annotation span stripped.
    pub fn source(&self, line: &str) -> String {
        self.re_source_tail.replace(line, "").into_owned()
    }

    /// The human-readable target label of the line.
    ///
    /// Finds the first tab-delimited label span, strips the tabs and
    /// translates the SAP field code to its German word. Codes outside the
    /// translation table pass through unchanged.
    ///
    /// # Errors
    ///
    /// Returns `FaltwerkError::MissingTarget` if no label span is present.
    pub fn target(&self, line: &str) -> Result<String> {
        let span = self
            .re_target
            .find(line)
            .ok_or_else(|| FaltwerkError::MissingTarget {
                line: line.to_string(),
            })?;
        Ok(translate_codes(&span.as_str().replace('\t', "")))
    }

    /// The bounding-box payload after the document id.
    pub fn bbox(&self, line: &str) -> String {
        self.re_bbox_head.replace(line, "").into_owned()
    }
}

/// True for empty or whitespace-only lines, which are ignored everywhere.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
