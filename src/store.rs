//! Record validation and storage.
//!
//! The store is the immutable base of a search snapshot: it is built once
//! per loaded record array, the index is derived from it, and both are
//! discarded together when new data is loaded.

use crate::types::DocRecord;
use std::collections::HashSet;
use std::fmt;

/// Why a record array was rejected at build time.
///
/// These are fatal to the specific build call; the caller's previous
/// store/index pair (if any) stays authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The payload parsed, but was not an array of records.
    NotAnArray,
    /// The payload was not parseable as JSON at all.
    MalformedJson { reason: String },
    /// One element did not deserialize as a record.
    MalformedRecord { index: usize, reason: String },
    /// A record is missing its identity.
    EmptyLocation { index: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotAnArray => {
                write!(f, "input is not an array of documentation records")
            }
            ValidationError::MalformedJson { reason } => {
                write!(f, "input is not valid JSON: {}", reason)
            }
            ValidationError::MalformedRecord { index, reason } => {
                write!(f, "record at index {} is malformed: {}", index, reason)
            }
            ValidationError::EmptyLocation { index } => {
                write!(f, "record at index {} has an empty location", index)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// The validated, immutable record set backing an index.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<DocRecord>,
}

impl RecordStore {
    /// Validate and ingest a record array.
    ///
    /// - A record with an empty `location` rejects the whole array (the
    ///   error carries its position in the input).
    /// - Degenerate records (`title` and `text` both empty) are structural
    ///   placeholders and are dropped before anything else, so a later
    ///   non-degenerate duplicate of the same anchor still gets indexed.
    /// - Duplicate `location`s keep the first occurrence — successive site
    ///   snapshots repeat anchors.
    ///
    /// Empty input is valid and yields an empty, queryable store.
    pub fn load(records: Vec<DocRecord>) -> Result<Self, ValidationError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut kept = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            if record.location.is_empty() {
                return Err(ValidationError::EmptyLocation { index });
            }
            if record.title.is_empty() && record.text.is_empty() {
                continue;
            }
            if seen.insert(record.location.clone()) {
                kept.push(record);
            }
        }

        Ok(Self { records: kept })
    }

    /// Get a record by index.
    #[inline]
    pub fn get(&self, index: u32) -> Option<&DocRecord> {
        self.records.get(index as usize)
    }

    /// Number of records surviving validation.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in store order (the order indexes refer to).
    pub fn iter(&self) -> impl Iterator<Item = &DocRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[DocRecord] {
        &self.records
    }
}

/// Parse the external record artifact.
///
/// Accepts either a bare JSON array, a `{"docs": [...]}` object, or the
/// `var documenterSearchIndex = {"docs": [...]}` JavaScript assignment that
/// documentation generators emit. Element errors report the offending array
/// position.
pub fn parse_records(input: &str) -> Result<Vec<DocRecord>, ValidationError> {
    let payload = strip_js_wrapper(input);

    let value: serde_json::Value = serde_json::from_str(payload)
        .map_err(|e| ValidationError::MalformedJson { reason: e.to_string() })?;

    let values = match value {
        serde_json::Value::Array(values) => values,
        serde_json::Value::Object(mut map) => match map.remove("docs") {
            Some(serde_json::Value::Array(values)) => values,
            _ => return Err(ValidationError::NotAnArray),
        },
        _ => return Err(ValidationError::NotAnArray),
    };

    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        let record: DocRecord = serde_json::from_value(value)
            .map_err(|e| ValidationError::MalformedRecord { index, reason: e.to_string() })?;
        records.push(record);
    }
    Ok(records)
}

/// Strip a `var name = ...;` assignment wrapper, if present.
fn strip_js_wrapper(input: &str) -> &str {
    let trimmed = input.trim();
    let is_assignment = trimmed.starts_with("var ")
        || trimmed.starts_with("const ")
        || trimmed.starts_with("let ");
    if !is_assignment {
        return trimmed;
    }
    match trimmed.split_once('=') {
        Some((_, rest)) => rest.trim().trim_end_matches(';').trim_end(),
        None => trimmed,
    }
}
