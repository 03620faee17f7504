// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mockwire Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use rstest::rstest;
use serde_json::json;

#[test]
fn test_partial_ignores_extra_input_keys() {
    let pattern = json!({"a": 1});
    assert!(value_matches(&pattern, &json!({"a": 1, "b": 2}), MatchMode::Partial));
    assert!(value_matches(&pattern, &json!({"a": 1}), MatchMode::Partial));
    assert!(!value_matches(&pattern, &json!({"a": 2, "b": 2}), MatchMode::Partial));
    assert!(!value_matches(&pattern, &json!({"b": 2}), MatchMode::Partial));
}

#[test]
fn test_strict_rejects_extra_keys_on_either_side() {
    let pattern = json!({"a": 1});
    assert!(!value_matches(&pattern, &json!({"a": 1, "b": 2}), MatchMode::Strict));
    assert!(value_matches(&pattern, &json!({"a": 1}), MatchMode::Strict));
    assert!(!value_matches(&json!({"a": 1, "b": 2}), &json!({"a": 1}), MatchMode::Strict));
}

#[test]
fn test_partial_recurses_into_nested_objects() {
    let pattern = json!({"filter": {"name": "x"}});
    let input = json!({"filter": {"name": "x", "limit": 10}, "page": 2});
    assert!(value_matches(&pattern, &input, MatchMode::Partial));

    let mismatch = json!({"filter": {"name": "y", "limit": 10}});
    assert!(!value_matches(&pattern, &mismatch, MatchMode::Partial));
}

#[rstest]
#[case(MatchMode::Partial)]
#[case(MatchMode::Strict)]
fn test_arrays_compare_element_wise_in_both_modes(#[case] mode: MatchMode) {
    let pattern = json!({"tags": [{"k": "a"}, {"k": "b"}]});
    let exact = json!({"tags": [{"k": "a"}, {"k": "b"}]});
    assert!(value_matches(&pattern["tags"], &exact["tags"], mode));

    // Order matters
    let reordered = json!([{"k": "b"}, {"k": "a"}]);
    assert!(!value_matches(&pattern["tags"], &reordered, mode));

    // Length matters
    let shorter = json!([{"k": "a"}]);
    assert!(!value_matches(&pattern["tags"], &shorter, mode));
}

#[test]
fn test_array_valued_field_partial() {
    // Array fields never get the partial key-subset treatment
    let pattern = json!({"ids": [1, 2]});
    assert!(value_matches(&pattern, &json!({"ids": [1, 2], "x": 0}), MatchMode::Partial));
    assert!(!value_matches(&pattern, &json!({"ids": [1, 2, 3]}), MatchMode::Partial));
}

#[rstest]
#[case(json!(null))]
#[case(json!(true))]
#[case(json!(42))]
#[case(json!("text"))]
fn test_primitives_require_equality(#[case] value: serde_json::Value) {
    assert!(value_matches(&value, &value, MatchMode::Partial));
    assert!(!value_matches(&value, &json!({"wrapped": value}), MatchMode::Partial));
}

#[test]
fn test_entry_without_matcher_accepts_anything() {
    assert!(entry_matches(None, &json!({"a": 1}), MatchMode::Partial));
    assert!(entry_matches(None, &json!(null), MatchMode::Strict));
}

#[test]
fn test_scan_first_match_wins() {
    let rules = vec![
        (Some(json!({"a": 1})), MatchMode::Partial),
        (Some(json!({"a": 1, "b": 2})), MatchMode::Partial),
    ];
    // Both accept this input; the earlier registration wins
    let selection = scan(&rules, &json!({"a": 1, "b": 2}), |r| (r.0.as_ref(), r.1));
    assert_eq!(selection, Selection::Matched(0));
}

#[test]
fn test_scan_distinguishes_not_found_states() {
    let empty: Vec<(Option<serde_json::Value>, MatchMode)> = vec![];
    assert_eq!(
        scan(&empty, &json!({}), |r| (r.0.as_ref(), r.1)),
        Selection::NoEntries
    );

    let rules = vec![(Some(json!({"a": 1})), MatchMode::Partial)];
    assert_eq!(
        scan(&rules, &json!({"a": 2}), |r| (r.0.as_ref(), r.1)),
        Selection::NoneMatched
    );
}

fn arb_value() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(json!(null)),
        any::<bool>().prop_map(|b| json!(b)),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,8}".prop_map(|s| json!(s)),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(serde_json::Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|m| json!(m)),
        ]
    })
}

proptest! {
    #[test]
    fn prop_value_matches_itself_in_both_modes(value in arb_value()) {
        prop_assert!(value_matches(&value, &value, MatchMode::Partial));
        prop_assert!(value_matches(&value, &value, MatchMode::Strict));
    }

    #[test]
    fn prop_strict_match_implies_partial_match(
        pattern in arb_value(),
        input in arb_value(),
    ) {
        if value_matches(&pattern, &input, MatchMode::Strict) {
            prop_assert!(value_matches(&pattern, &input, MatchMode::Partial));
        }
    }
}
