//! Inverted index construction.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTING_LIST_SORTED**: Each posting list is sorted by `(record, field)`
//! 2. **RECORD_FREQ_CORRECT**: `record_freq` equals the count of distinct records
//! 3. **NON_EMPTY**: Every term has at least one posting with at least one position
//! 4. **VOCABULARY_SORTED**: `vocabulary` is sorted and mirrors the term map keys

use crate::store::RecordStore;
use crate::tokenize::{tokenize, tokenize_text};
use crate::types::{Field, Index, Posting, PostingList, Token};
use std::collections::HashMap;

/// Build the inverted index for a record store.
///
/// Every record's `title`, `category`, and `page` are tokenized without stop
/// word filtering; `text` with it. Single pass, O(total tokens). There is no
/// incremental update — any change to the record set requires calling this
/// again and swapping the resulting snapshot in.
pub fn build_index(store: &RecordStore) -> Index {
    let mut terms: HashMap<String, HashMap<(u32, Field), Vec<u32>>> = HashMap::new();

    for (record, doc) in store.iter().enumerate() {
        let record = record as u32;
        insert_field(&mut terms, record, Field::Title, tokenize(&doc.title));
        insert_field(
            &mut terms,
            record,
            Field::Category,
            tokenize(doc.category.as_str()),
        );
        insert_field(&mut terms, record, Field::Page, tokenize(&doc.page));
        insert_field(&mut terms, record, Field::Text, tokenize_text(&doc.text));
    }

    let mut final_terms: HashMap<String, PostingList> = HashMap::with_capacity(terms.len());
    for (term, by_slot) in terms {
        let mut postings: Vec<Posting> = by_slot
            .into_iter()
            .map(|((record, field), positions)| Posting {
                record,
                field,
                positions,
            })
            .collect();
        // INVARIANT: POSTING_LIST_SORTED
        postings.sort_by_key(|p| (p.record, p.field));

        let mut records: Vec<u32> = postings.iter().map(|p| p.record).collect();
        records.dedup();
        let record_freq = records.len();

        final_terms.insert(term, PostingList { postings, record_freq });
    }

    let mut vocabulary: Vec<String> = final_terms.keys().cloned().collect();
    vocabulary.sort();

    Index {
        terms: final_terms,
        vocabulary,
        record_count: store.len(),
    }
}

fn insert_field(
    terms: &mut HashMap<String, HashMap<(u32, Field), Vec<u32>>>,
    record: u32,
    field: Field,
    tokens: Vec<Token>,
) {
    for token in tokens {
        terms
            .entry(token.term)
            .or_default()
            .entry((record, field))
            .or_default()
            .push(token.position);
    }
}

impl Index {
    /// All vocabulary terms starting with `prefix`.
    ///
    /// Binary search over the sorted vocabulary: the matching terms form a
    /// contiguous run, so this is O(log n + k) — cheap enough to run on
    /// every keystroke.
    pub fn terms_with_prefix(&self, prefix: &str) -> &[String] {
        let lo = self.vocabulary.partition_point(|t| t.as_str() < prefix);
        let run = self.vocabulary[lo..].partition_point(|t| t.starts_with(prefix));
        &self.vocabulary[lo..lo + run]
    }
}

/// Check that an index satisfies its construction invariants.
pub fn check_index_well_formed(index: &Index) -> bool {
    let mut vocab_sorted = index.vocabulary.clone();
    vocab_sorted.sort();
    if vocab_sorted != index.vocabulary || index.vocabulary.len() != index.terms.len() {
        return false;
    }

    for (term, list) in &index.terms {
        if index.vocabulary.binary_search(term).is_err() {
            return false;
        }
        if list.postings.is_empty() {
            return false;
        }
        for i in 1..list.postings.len() {
            let prev = &list.postings[i - 1];
            let curr = &list.postings[i];
            if (prev.record, prev.field) >= (curr.record, curr.field) {
                return false;
            }
        }
        for posting in &list.postings {
            if posting.positions.is_empty() {
                return false;
            }
            if posting.record as usize >= index.record_count {
                return false;
            }
            if !posting.positions.windows(2).all(|w| w[0] <= w[1]) {
                return false;
            }
        }
        let mut records: Vec<u32> = list.postings.iter().map(|p| p.record).collect();
        records.dedup();
        if list.record_freq != records.len() {
            return false;
        }
    }

    true
}
