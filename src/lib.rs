//! In-memory full-text search for documentation site indexes.
//!
//! Consumes the record arrays emitted by documentation generators
//! (`{location, page, title, category, text}` objects, as found in
//! `search_index.js` files) and builds an inverted index with
//! field-weighted ranking, prefix (as-you-type) matching, quoted phrases,
//! and highlighted snippets.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────┐     ┌───────────┐     ┌───────────┐
//! │ store.rs  │────▶│ index.rs  │◀────│ query.rs  │
//! │ (records) │     │  (build)  │     │  (parse)  │
//! └───────────┘     └───────────┘     └───────────┘
//!       │                 │                 │
//!       ▼                 ▼                 ▼
//!     ┌─────────────────────────────────────────┐
//!     │  search.rs (rank)  →  snippet.rs        │
//!     │  (conjunctive AND)    (highlighting)    │
//!     └─────────────────────────────────────────┘
//! ```
//!
//! The `(RecordStore, Index)` pair is immutable after construction, so any
//! number of queries may run concurrently against one engine. Loading new
//! data means building a fresh [`SearchEngine`] and swapping the shared
//! reference; a failed build leaves the previous engine untouched.
//!
//! # Usage
//!
//! ```
//! use docsearch::{Category, DocRecord, SearchEngine};
//!
//! let records = vec![DocRecord {
//!     location: "api.html#Mean".to_string(),
//!     page: "API".to_string(),
//!     title: "Mean".to_string(),
//!     category: Category::Type,
//!     text: "Track a univariate mean.".to_string(),
//! }];
//!
//! let engine = SearchEngine::build(records).unwrap();
//! let results = engine.search("mean");
//! assert_eq!(results[0].location, "api.html#Mean");
//! ```

mod index;
mod query;
mod scoring;
mod search;
mod snippet;
mod store;
#[doc(hidden)]
pub mod testing;
mod tokenize;
mod types;
mod utils;

// Re-exports for public API
pub use index::{build_index, check_index_well_formed};
pub use query::{parse_query, Clause, Query};
pub use scoring::{
    clause_score, compare_results, field_weight, CATEGORY_WEIGHT, PAGE_WEIGHT, TEXT_WEIGHT,
    TITLE_WEIGHT,
};
pub use search::{rank, SearchEngine, SearchOptions, DEFAULT_LIMIT};
pub use snippet::{
    extract_snippet, format_results, FALLBACK_LEN, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN, SNIPPET_RADIUS,
};
pub use store::{parse_records, RecordStore, ValidationError};
pub use tokenize::{is_stop_word, tokenize, tokenize_text};
pub use types::{
    Category, DocRecord, Field, FormattedResult, Index, Posting, PostingList, RankedResult, Token,
};
pub use utils::normalize;
