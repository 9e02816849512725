//! Clause resolution, conjunctive ranking, and the engine facade.
//!
//! A record must satisfy every clause in at least one field — this is a
//! hard boolean filter, not a soft ranking signal. Survivors are scored
//! with the field-weighted model from [`crate::scoring`], ordered by the
//! total order defined there, and truncated only after sorting so the
//! limit never changes relative ranking.

use crate::index::build_index;
use crate::query::{parse_query, Clause, Query};
use crate::scoring::{clause_score, compare_results};
use crate::snippet::format_results;
use crate::store::{parse_records, RecordStore, ValidationError};
use crate::types::{Category, DocRecord, Field, FormattedResult, Index, RankedResult};
use std::collections::HashMap;

/// Results returned when the caller does not specify a limit.
pub const DEFAULT_LIMIT: usize = 20;

/// Caller-tunable search knobs.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum results returned, applied after sorting.
    pub limit: usize,
    /// Restrict candidates to this category before scoring.
    pub category: Option<Category>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            category: None,
        }
    }
}

/// An immutable `(RecordStore, Index)` snapshot.
///
/// Build once per loaded record array; queries borrow it freely from any
/// number of threads. Loading new data means building a fresh engine and
/// swapping the shared reference (an `Arc` works), so in-flight queries
/// always observe a fully built, consistent index — never a partial one.
/// If a build fails, nothing escapes and the previous engine stays
/// authoritative.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    store: RecordStore,
    index: Index,
}

impl SearchEngine {
    /// Validate records and build the index. The only (re)initialization
    /// entry point.
    pub fn build(records: Vec<DocRecord>) -> Result<Self, ValidationError> {
        let store = RecordStore::load(records)?;
        let index = build_index(&store);
        Ok(Self { store, index })
    }

    /// Build straight from the raw `search_index.js`/JSON artifact.
    pub fn from_json(input: &str) -> Result<Self, ValidationError> {
        Self::build(parse_records(input)?)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Run a query with default options.
    pub fn search(&self, raw: &str) -> Vec<FormattedResult> {
        self.search_with(raw, &SearchOptions::default())
    }

    /// Run a query and return formatted, ranked results.
    pub fn search_with(&self, raw: &str, options: &SearchOptions) -> Vec<FormattedResult> {
        let query = parse_query(raw);
        let ranked = rank(&query, &self.index, &self.store, options);
        format_results(&ranked, &query, &self.store)
    }
}

/// Resolve a parsed query against an index: conjunctive filter, score,
/// order, truncate.
pub fn rank(
    query: &Query,
    index: &Index,
    store: &RecordStore,
    options: &SearchOptions,
) -> Vec<RankedResult> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut scores: Option<HashMap<u32, f64>> = None;
    for clause in &query.clauses {
        let matches = resolve_clause(clause, index);
        if matches.is_empty() {
            return Vec::new();
        }
        scores = Some(match scores {
            None => matches,
            Some(mut acc) => {
                acc.retain(|record, score| {
                    if let Some(extra) = matches.get(record) {
                        *score += extra;
                        true
                    } else {
                        false
                    }
                });
                if acc.is_empty() {
                    return Vec::new();
                }
                acc
            }
        });
    }

    let scores = scores.unwrap_or_default();
    let mut results: Vec<RankedResult> = scores
        .into_iter()
        .filter(|(record, _)| match &options.category {
            Some(category) => store
                .get(*record)
                .is_some_and(|r| r.category == *category),
            None => true,
        })
        .map(|(record, score)| RankedResult { record, score })
        .collect();

    results.sort_by(|a, b| compare_results(a, b, store));
    results.truncate(options.limit);
    results
}

/// Resolve one clause to `record → score contribution`. A record absent
/// from the map failed the clause.
fn resolve_clause(clause: &Clause, index: &Index) -> HashMap<u32, f64> {
    match clause {
        Clause::Term(term) => {
            let mut scores = HashMap::new();
            if let Some(list) = index.terms.get(term) {
                for posting in &list.postings {
                    *scores.entry(posting.record).or_insert(0.0) +=
                        clause_score(posting.field, posting.frequency());
                }
            }
            scores
        }
        Clause::Prefix(prefix) => {
            // Union over all terms sharing the prefix, summing raw
            // frequencies per (record, field) before the log so a record
            // is not rewarded for vocabulary fan-out alone.
            let mut freqs: HashMap<(u32, Field), usize> = HashMap::new();
            for term in index.terms_with_prefix(prefix) {
                if let Some(list) = index.terms.get(term) {
                    for posting in &list.postings {
                        *freqs.entry((posting.record, posting.field)).or_insert(0) +=
                            posting.frequency();
                    }
                }
            }
            let mut scores = HashMap::new();
            for ((record, field), freq) in freqs {
                *scores.entry(record).or_insert(0.0) += clause_score(field, freq);
            }
            scores
        }
        Clause::Phrase(words) => resolve_phrase(words, index),
    }
}

/// Phrase clauses require consecutive positions in the `text` field.
/// Frequency is the number of adjacent runs starting at the first word.
fn resolve_phrase(words: &[String], index: &Index) -> HashMap<u32, f64> {
    let mut scores = HashMap::new();
    if words.is_empty() {
        return scores;
    }

    // Text-field position lists per word, keyed by record.
    let mut word_positions: Vec<HashMap<u32, &[u32]>> = Vec::with_capacity(words.len());
    for word in words {
        let Some(list) = index.terms.get(word) else {
            return scores;
        };
        let mut per_record: HashMap<u32, &[u32]> = HashMap::new();
        for posting in &list.postings {
            if posting.field == Field::Text {
                per_record.insert(posting.record, &posting.positions);
            }
        }
        if per_record.is_empty() {
            return scores;
        }
        word_positions.push(per_record);
    }

    for (&record, first_positions) in &word_positions[0] {
        let mut runs = 0usize;
        'starts: for &start in first_positions.iter() {
            for (step, per_record) in word_positions[1..].iter().enumerate() {
                let Some(positions) = per_record.get(&record) else {
                    continue 'starts;
                };
                let want = start + 1 + step as u32;
                if positions.binary_search(&want).is_err() {
                    continue 'starts;
                }
            }
            runs += 1;
        }
        if runs > 0 {
            scores.insert(record, clause_score(Field::Text, runs));
        }
    }

    scores
}
