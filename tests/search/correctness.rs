//! Conjunctive matching correctness: every returned record satisfies every
//! clause, and nothing that fails a clause slips through.

use super::common::{engine_from, locations, search_all};
use docsearch::Category;

#[test]
fn single_term_returns_only_matching_records() {
    let engine = engine_from(&[
        ("api.html#Mean", "Mean", Category::Type, "Track a univariate mean."),
        ("api.html#Variance", "Variance", Category::Type, "Univariate variance."),
    ]);

    let results = search_all(&engine, "mean ");
    assert_eq!(locations(&results), vec!["api.html#Mean"]);
}

#[test]
fn two_term_query_requires_both_terms() {
    let engine = engine_from(&[
        ("a.html#1", "Series", Category::Type, "tracks stats for a data stream"),
        ("a.html#2", "Group", Category::Type, "tracks stats"),
        ("a.html#3", "FTSeries", Category::Type, "data stream with filters"),
    ]);

    let results = search_all(&engine, "stats stream ");
    assert_eq!(locations(&results), vec!["a.html#1"]);
}

#[test]
fn terms_may_be_satisfied_by_different_fields() {
    let engine = engine_from(&[(
        "api.html#CovMatrix",
        "CovMatrix",
        Category::Type,
        "covariance for a data stream",
    )]);

    // "covmatrix" only in title, "stream" only in text.
    let results = search_all(&engine, "covmatrix stream ");
    assert_eq!(results.len(), 1);
}

#[test]
fn failing_one_clause_excludes_the_record_entirely() {
    let engine = engine_from(&[(
        "api.html#Mean",
        "Mean",
        Category::Type,
        "Track a univariate mean.",
    )]);

    assert!(search_all(&engine, "mean nonexistent ").is_empty());
}

#[test]
fn prefix_is_a_superset_of_the_exact_term() {
    let engine = engine_from(&[
        ("api.html#CovMatrix", "CovMatrix", Category::Type, ""),
        ("api.html#Counter", "Counter", Category::Type, ""),
        ("api.html#Mean", "Mean", Category::Type, ""),
    ]);

    let exact: Vec<String> = locations(&search_all(&engine, "covmatrix "));
    let prefix: Vec<String> = locations(&search_all(&engine, "cov"));
    for location in &exact {
        assert!(prefix.contains(location), "prefix set must contain {}", location);
    }
}

#[test]
fn category_tag_is_a_matchable_field() {
    let engine = engine_from(&[
        ("api.html#Mean", "Mean", Category::Type, ""),
        ("guide.html#intro", "Introduction", Category::Section, ""),
    ]);

    let results = search_all(&engine, "type ");
    assert_eq!(locations(&results), vec!["api.html#Mean"]);
}

#[test]
fn phrase_matches_only_adjacent_text_occurrences() {
    let engine = engine_from(&[
        ("a.html#1", "A", Category::Section, "algorithms run online and in parallel"),
        ("a.html#2", "B", Category::Section, "online algorithms run in parallel"),
    ]);

    let results = search_all(&engine, "\"online algorithms\"");
    assert_eq!(locations(&results), vec!["a.html#2"]);
}

#[test]
fn phrase_and_term_combine_conjunctively() {
    let engine = engine_from(&[
        ("a.html#1", "Mean", Category::Type, "streaming data, one pass"),
        ("a.html#2", "Sum", Category::Type, "streaming data in batches"),
    ]);

    let results = search_all(&engine, "\"streaming data\" pass ");
    assert_eq!(locations(&results), vec!["a.html#1"]);
}
