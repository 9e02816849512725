//! The building blocks of the search engine.
//!
//! These types define how records, postings, and results fit together.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Posting**: `record < store.len()`; `positions` is non-empty and ascending.
//! - **PostingList**: postings sorted by `(record, field)`; `record_freq`
//!   counts distinct records.
//! - **Index**: `vocabulary` is sorted and contains exactly the keys of
//!   `terms`. Read-only after construction — a content change means a full
//!   rebuild, never an in-place mutation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// RECORD TYPES
// =============================================================================

/// One indexed unit of documentation: a page, section, or API symbol entry.
///
/// This is bit-for-bit the record shape found in generated `search_index.js`
/// files, so the external JSON array deserializes directly into `Vec<DocRecord>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocRecord {
    /// URI with optional fragment (`page.html#anchor`). Unique per snapshot;
    /// acts as the result identity.
    pub location: String,
    /// Human-readable page name; used for grouping and as a ranking field.
    pub page: String,
    /// Section or symbol title; highest ranking weight.
    pub title: String,
    /// Enumerated tag. Unknown values land in [`Category::Other`] rather
    /// than failing deserialization.
    pub category: Category,
    /// Free-form body content. May be empty for pure navigation entries.
    #[serde(default)]
    pub text: String,
}

/// The kind of documentation entry a record describes.
///
/// The set of values varies across snapshots of the same site, so this enum
/// is open-ended: anything unrecognized becomes `Other` and ranks in the
/// generic tail bucket for tie-breaks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Page,
    Section,
    Type,
    Function,
    Method,
    Module,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Page => "page",
            Category::Section => "section",
            Category::Type => "type",
            Category::Function => "function",
            Category::Method => "method",
            Category::Module => "module",
            Category::Other(name) => name,
        }
    }

    /// Tie-break bucket: API symbols sort before sections before pages;
    /// unknown categories fall in the tail bucket. Lower sorts first.
    pub fn rank_bucket(&self) -> u8 {
        match self {
            Category::Type | Category::Function | Category::Method | Category::Module => 0,
            Category::Section => 1,
            Category::Page => 2,
            Category::Other(_) => 3,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "page" => Category::Page,
            "section" => Category::Section,
            "type" => Category::Type,
            "function" => Category::Function,
            "method" => Category::Method,
            "module" => Category::Module,
            _ => Category::Other(value),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

/// Which record field a term occurrence came from.
///
/// The derived `Ord` (Title < Category < Page < Text) is only used to keep
/// posting lists deterministically sorted — ranking weight comes from
/// [`crate::scoring::field_weight`], not from this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Category,
    Page,
    Text,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Category => "category",
            Field::Page => "page",
            Field::Text => "text",
        }
    }
}

// =============================================================================
// TOKEN AND INDEX TYPES
// =============================================================================

/// A normalized term with its provenance in the source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Normalized term text.
    pub term: String,
    /// Ordinal among emitted tokens; phrase adjacency compares these.
    pub position: u32,
    /// Byte offset of the token start in the original string.
    pub offset: u32,
}

/// A term's occurrences within one `(record, field)` pair.
///
/// Frequency is `positions.len()`; keeping the full position list supports
/// phrase adjacency checks and snippet extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    /// Index into the record store.
    pub record: u32,
    /// Field the occurrences were found in.
    pub field: Field,
    /// Token ordinals, ascending.
    pub positions: Vec<u32>,
}

impl Posting {
    /// Number of occurrences of the term in this `(record, field)`.
    #[inline]
    pub fn frequency(&self) -> usize {
        self.positions.len()
    }
}

/// All occurrences of a single term across the corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    /// Sorted by `(record, field)`.
    pub postings: Vec<Posting>,
    /// Number of distinct records containing this term.
    pub record_freq: usize,
}

/// The inverted index: term → postings, plus a sorted vocabulary for prefix
/// resolution.
///
/// Derived from a [`crate::store::RecordStore`] snapshot and immutable
/// afterwards; arbitrarily many queries may read it concurrently without
/// synchronization. Loading new records means building a fresh
/// `(RecordStore, Index)` pair and swapping the shared reference.
#[derive(Debug, Clone, Default)]
pub struct Index {
    /// Map from normalized term to posting list.
    pub terms: HashMap<String, PostingList>,
    /// All unique terms, sorted, for O(log n + k) prefix range scans.
    pub vocabulary: Vec<String>,
    /// Number of records indexed.
    pub record_count: usize,
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// A record that satisfied every query clause, with its aggregate score.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    /// Index into the record store.
    pub record: u32,
    /// Field-weighted log-frequency score; higher is better.
    pub score: f64,
}

/// What callers render: identity fields plus a highlighted snippet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedResult {
    pub location: String,
    pub page: String,
    pub title: String,
    pub category: Category,
    /// Excerpt of `text` around the first match, with matched terms wrapped
    /// in highlight markers. `None` when the record has no body text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    pub score: f64,
}
