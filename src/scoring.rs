//! Field-weighted scoring and result ordering.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## FIELD_WEIGHT_HIERARCHY
//! `TITLE_WEIGHT > CATEGORY_WEIGHT > PAGE_WEIGHT > TEXT_WEIGHT`, so a query
//! matching a symbol's title outranks the same term appearing once in body
//! prose. Frequency enters through `ln(1 + f)`, which grows slowly enough
//! that repetition in a low-weight field cannot trivially swamp a title hit.
//!
//! ## TOTAL_ORDER
//! `compare_results` never returns `Equal` for distinct records: score,
//! then category bucket, then `location` (unique per store) break every
//! tie. Identical inputs therefore always produce identical orderings.

use crate::store::RecordStore;
use crate::types::{Field, RankedResult};
use std::cmp::Ordering;

/// Weight of a term hit in the record title.
pub const TITLE_WEIGHT: f64 = 5.0;
/// Weight of a hit on the category tag.
pub const CATEGORY_WEIGHT: f64 = 3.0;
/// Weight of a hit in the page name.
pub const PAGE_WEIGHT: f64 = 2.0;
/// Weight of a hit in body text.
pub const TEXT_WEIGHT: f64 = 1.0;

/// Ranking weight for a field.
pub fn field_weight(field: Field) -> f64 {
    // INVARIANT: FIELD_WEIGHT_HIERARCHY
    match field {
        Field::Title => TITLE_WEIGHT,
        Field::Category => CATEGORY_WEIGHT,
        Field::Page => PAGE_WEIGHT,
        Field::Text => TEXT_WEIGHT,
    }
}

/// Score contribution of one clause match: `weight · ln(1 + frequency)`.
pub fn clause_score(field: Field, frequency: usize) -> f64 {
    field_weight(field) * (1.0 + frequency as f64).ln()
}

/// Total result order: score descending, then category bucket ascending,
/// then `location` lexicographic ascending.
pub fn compare_results(a: &RankedResult, b: &RankedResult, store: &RecordStore) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| match (store.get(a.record), store.get(b.record)) {
            (Some(ra), Some(rb)) => ra
                .category
                .rank_bucket()
                .cmp(&rb.category.rank_bucket())
                .then_with(|| ra.location.cmp(&rb.location)),
            _ => Ordering::Equal,
        })
}
