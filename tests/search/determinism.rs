//! Identical inputs always produce identical output, regardless of build
//! order inside the hash-map-backed index.

use super::common::{engine_from, locations, search_all};
use docsearch::Category;

fn corpus() -> Vec<(&'static str, &'static str, Category, &'static str)> {
    vec![
        ("api.html#Mean", "Mean", Category::Type, "Track a univariate mean."),
        ("api.html#Variance", "Variance", Category::Type, "Univariate variance."),
        ("api.html#Series", "Series", Category::Type, "Track a collection of stats."),
        ("guide.html#intro", "Introduction", Category::Section, "Every stat updates one observation at a time."),
        ("guide.html#weights", "Weighting", Category::Section, "Newer observations can be given more weight."),
    ]
}

#[test]
fn repeated_searches_return_identical_results() {
    let engine = engine_from(&corpus());

    let first = search_all(&engine, "univariate mean ");
    for _ in 0..10 {
        let again = search_all(&engine, "univariate mean ");
        assert_eq!(locations(&again), locations(&first));
        for (a, b) in again.iter().zip(first.iter()) {
            assert_eq!(a.score, b.score);
            assert_eq!(a.snippet, b.snippet);
        }
    }
}

#[test]
fn rebuilding_from_the_same_records_is_stable() {
    let a = engine_from(&corpus());
    let b = engine_from(&corpus());

    for query in ["mean ", "obs", "track ", "\"one observation\"", "stat"] {
        assert_eq!(
            locations(&search_all(&a, query)),
            locations(&search_all(&b, query)),
            "divergent results for {query:?}"
        );
    }
}

#[test]
fn record_input_order_does_not_change_scores() {
    let forward = engine_from(&corpus());
    let mut reversed = corpus();
    reversed.reverse();
    let backward = engine_from(&reversed);

    let from_forward = search_all(&forward, "observations ");
    let from_backward = search_all(&backward, "observations ");
    assert_eq!(locations(&from_forward), locations(&from_backward));
    for (a, b) in from_forward.iter().zip(from_backward.iter()) {
        assert_eq!(a.score, b.score);
    }
}
