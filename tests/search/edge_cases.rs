//! Boundary inputs: empty queries, symbols, stopwords, unicode, and
//! malformed quoting.

use super::common::{engine_from, locations, search_all};
use docsearch::Category;

fn small_corpus() -> Vec<(&'static str, &'static str, Category, &'static str)> {
    vec![
        ("api.html#fit!", "fit!", Category::Function, "Update a stat with one observation."),
        ("api.html#merge!", "merge!", Category::Function, "Merge one stat into another."),
        ("api.html#Mean", "Mean", Category::Type, "Track a univariate mean."),
    ]
}

#[test]
fn empty_and_whitespace_queries_return_nothing() {
    let engine = engine_from(&small_corpus());
    assert!(engine.search("").is_empty());
    assert!(engine.search("   \t  ").is_empty());
}

#[test]
fn punctuation_only_query_returns_nothing() {
    let engine = engine_from(&small_corpus());
    assert!(engine.search(",,, ... !!! ").is_empty());
}

#[test]
fn bang_suffixed_symbols_match_with_and_without_the_bang() {
    let engine = engine_from(&small_corpus());

    let with_bang = search_all(&engine, "fit! ");
    assert_eq!(locations(&with_bang), vec!["api.html#fit!"]);

    let without_bang = search_all(&engine, "fit ");
    assert_eq!(locations(&without_bang), vec!["api.html#fit!"]);
}

#[test]
fn stopword_only_query_still_prefix_matches_while_typing() {
    let engine = engine_from(&[(
        "guide.html#themes",
        "Theming",
        Category::Section,
        "",
    )]);

    // "the" is a stopword mid-query, but as the live trailing token it is
    // a prefix and must still find "theming".
    assert_eq!(search_all(&engine, "the").len(), 1);
    // With a trailing space it is a finished stopword and drops out.
    assert!(search_all(&engine, "the ").is_empty());
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn accented_queries_match_unaccented_text_and_vice_versa() {
    let engine = engine_from(&[
        ("a.html#1", "Résumé", Category::Section, ""),
        ("a.html#2", "Naive", Category::Section, "naïve estimator"),
    ]);

    assert_eq!(locations(&search_all(&engine, "resume ")), vec!["a.html#1"]);
    assert_eq!(locations(&search_all(&engine, "naïve ")), vec!["a.html#2"]);
}

#[test]
fn unterminated_quote_is_treated_as_a_phrase_to_end_of_input() {
    let engine = engine_from(&[
        ("a.html#1", "A", Category::Section, "track a univariate mean here"),
        ("a.html#2", "B", Category::Section, "mean and univariate, separately"),
    ]);

    let results = search_all(&engine, "\"univariate mean");
    assert_eq!(locations(&results), vec!["a.html#1"]);
}

#[test]
fn phrase_with_interior_stopwords_matches_filtered_text() {
    let engine = engine_from(&[(
        "api.html#Mean",
        "Mean",
        Category::Type,
        "Track a univariate mean.",
    )]);

    // Stopwords are dropped on both sides, so the phrase still lines up.
    assert_eq!(search_all(&engine, "\"track a univariate\"").len(), 1);
}

#[test]
fn empty_phrase_contributes_nothing() {
    let engine = engine_from(&small_corpus());
    // A phrase of pure stopwords vanishes; the remaining term decides.
    assert_eq!(search_all(&engine, "\"the a\" mean ").len(), 1);
    // A query that is nothing but an empty phrase matches nothing.
    assert!(search_all(&engine, "\"\"").is_empty());
}

#[test]
fn query_term_absent_from_vocabulary_matches_nothing() {
    let engine = engine_from(&small_corpus());
    assert!(search_all(&engine, "zzzz ").is_empty());
    assert!(search_all(&engine, "zzzz").is_empty());
}

#[test]
fn underscores_are_part_of_terms() {
    let engine = engine_from(&[(
        "api.html#value",
        "_value",
        Category::Function,
        "internal accessor",
    )]);

    assert_eq!(search_all(&engine, "_value ").len(), 1);
}
