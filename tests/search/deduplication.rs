//! Duplicate-location and degenerate-record handling during load.

use super::common::{locations, search_all};
use docsearch::testing::make_record;
use docsearch::{Category, SearchEngine};

#[test]
fn duplicate_locations_keep_only_the_first_record() {
    let engine = SearchEngine::build(vec![
        make_record("api.html#Mean", "Mean", Category::Type, "first copy"),
        make_record("api.html#Mean", "Mean", Category::Type, "second copy"),
    ])
    .unwrap();

    assert_eq!(engine.store().len(), 1);
    assert_eq!(search_all(&engine, "first ").len(), 1);
    assert!(search_all(&engine, "second ").is_empty());
}

#[test]
fn each_location_appears_at_most_once_in_results() {
    let engine = SearchEngine::build(vec![
        make_record("api.html#Mean", "Mean", Category::Type, "mean mean mean"),
        make_record("api.html#Mean", "Mean", Category::Type, "mean"),
        make_record("api.html#Variance", "Variance", Category::Type, "mean of squares"),
    ])
    .unwrap();

    let results = search_all(&engine, "mean ");
    let mut seen = locations(&results);
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), results.len());
}

#[test]
fn degenerate_records_are_dropped_before_deduplication() {
    // The empty shell comes first, but it must not shadow the real record
    // at the same location.
    let engine = SearchEngine::build(vec![
        make_record("api.html#Mean", "", Category::Type, ""),
        make_record("api.html#Mean", "Mean", Category::Type, "Track a univariate mean."),
    ])
    .unwrap();

    assert_eq!(engine.store().len(), 1);
    assert_eq!(search_all(&engine, "univariate ").len(), 1);
}

#[test]
fn degenerate_records_never_surface_in_results() {
    let engine = SearchEngine::build(vec![
        make_record("empty.html#", "", Category::Page, ""),
        make_record("api.html#Mean", "Mean", Category::Type, ""),
    ])
    .unwrap();

    assert_eq!(engine.store().len(), 1);
    // Both records share the fixture page name; only the surviving one
    // is indexed.
    let results = search_all(&engine, "test ");
    assert_eq!(locations(&results), vec!["api.html#Mean"]);
}
