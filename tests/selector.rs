// tests/selector.rs

mod common;
use crate::common::names;

use proptest::prelude::*;
use regex::Regex;

use kubectl_foreach::filter::{Filter, Selector, select};

fn exact(s: &str) -> Filter {
    Filter::Exact(s.to_string())
}

fn pattern(re: &str) -> Filter {
    Filter::Pattern(Regex::new(re).unwrap())
}

fn exclude(f: Filter) -> Filter {
    Filter::excluded(f)
}

#[test]
fn test_empty_input() {
    let input: Vec<String> = Vec::new();
    assert!(select(&input, &[exact("foo")]).is_empty());
}

#[test]
fn test_empty_filters_match_all() {
    let input = names(&["a", "b", "c"]);
    assert_eq!(select(&input, &[]), input);
}

#[test]
fn test_single_exact() {
    assert_eq!(select(&names(&["a", "b", "c"]), &[exact("b")]), names(&["b"]));
}

#[test]
fn test_only_additive_patterns() {
    assert_eq!(
        select(&names(&["a", "b", "c"]), &[exact("a"), pattern("^c")]),
        names(&["a", "c"])
    );
}

#[test]
fn test_only_additive_patterns_no_results() {
    assert!(select(&names(&["a", "b", "c"]), &[exact("d"), pattern("^e")]).is_empty());
}

#[test]
fn test_only_excluding_patterns() {
    assert_eq!(
        select(
            &names(&["a", "b", "c"]),
            &[exclude(exact("b")), exclude(exact("d"))]
        ),
        names(&["a", "c"])
    );
}

#[test]
fn test_only_excluding_patterns_no_results() {
    assert!(select(&names(&["a", "b", "c"]), &[exclude(pattern("^"))]).is_empty());
}

#[test]
fn test_mixed_patterns() {
    let filters = [
        exact("a"),
        exact("b"),
        exclude(exact("b")),
        exclude(exact("e")),
        pattern("^[cde]"),
    ];
    assert_eq!(
        select(&names(&["a", "b", "c", "d", "e"]), &filters),
        names(&["a", "c", "d"])
    );
}

#[test]
fn test_exclusion_wins_over_exact_inclusion() {
    let filters = [exact("prod"), exclude(pattern("pro"))];
    assert!(select(&names(&["prod", "staging"]), &filters).is_empty());
}

#[test]
fn test_selection_keeps_candidate_order() {
    // Filter order must not reorder the output.
    let filters = [exact("c"), exact("a"), exact("b")];
    assert_eq!(
        select(&names(&["b", "c", "a"]), &filters),
        names(&["b", "c", "a"])
    );
}

#[test]
fn test_selector_accepts_single_names() {
    let filters = [pattern("^prod-"), exclude(exact("prod-eu"))];
    let selector = Selector::new(&filters);
    assert!(selector.accepts("prod-us"));
    assert!(!selector.accepts("prod-eu"));
    assert!(!selector.accepts("staging"));
}

#[test]
fn test_select_works_on_borrowed_names() {
    let input = ["x-1", "y-1", "x-2"];
    assert_eq!(select(&input, &[pattern("^x")]), names(&["x-1", "x-2"]));
}

fn filter_strategy() -> impl Strategy<Value = Filter> {
    let leaf = prop_oneof![
        "[a-e]{1,2}".prop_map(Filter::Exact),
        "[a-e]{1,2}".prop_map(|s| Filter::Pattern(Regex::new(&s).unwrap())),
    ];
    (leaf, any::<bool>()).prop_map(|(f, negate)| if negate { Filter::excluded(f) } else { f })
}

proptest! {
    #[test]
    fn prop_select_is_idempotent(
        candidates in proptest::collection::vec("[a-e]{1,3}", 0..12),
        filters in proptest::collection::vec(filter_strategy(), 0..6),
    ) {
        let first = select(&candidates, &filters);
        let second = select(&candidates, &filters);
        prop_assert_eq!(&first, &second);
    }

    #[test]
    fn prop_selection_is_ordered_subsequence(
        candidates in proptest::collection::vec("[a-e]{1,3}", 0..12),
        filters in proptest::collection::vec(filter_strategy(), 0..6),
    ) {
        let selected = select(&candidates, &filters);
        let mut rest = candidates.iter();
        for s in &selected {
            prop_assert!(rest.any(|c| c == s), "{} out of order", s);
        }
    }

    #[test]
    fn prop_excluded_names_never_selected(
        candidates in proptest::collection::vec("[a-e]{1,3}", 0..12),
        filters in proptest::collection::vec(filter_strategy(), 0..6),
    ) {
        let selected = select(&candidates, &filters);
        for s in &selected {
            for f in filters.iter().filter(|f| !f.is_additive()) {
                prop_assert!(!f.matches(s));
            }
        }
    }
}
