//! Property-based tests for the matcher and clause evaluation.
//!
//! These tests use proptest to generate random values and verify:
//! 1. Determinism: matching the same pattern twice gives equal results
//! 2. Merge algebra: sibling captures agree or the whole match fails
//! 3. First-match-wins under arbitrary clause orders
//!
//! This complements the unit tests, which pin down specific scenarios, by
//! sweeping value space for edge cases the fixed corpus misses.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;

use sift_eval::{is_match, match_pattern, match_value, Pattern, Value, ValueKind};

// -- Value Generation Strategies --

/// Generate a scalar value.
fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        any::<bool>().prop_map(Value::Bool),
        "[a-z]{0,8}".prop_map(Value::string),
        Just(Value::Unit),
    ]
}

/// Generate a possibly nested value: scalars, lists, tuples, records.
fn value_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::list),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::tuple),
            prop::collection::vec(("[a-c]", inner), 0..3).prop_map(|fields| {
                Value::record(
                    fields
                        .into_iter()
                        .map(|(name, value)| (name.as_str().into(), value))
                        .collect(),
                )
            }),
        ]
    })
}

/// A fixed pattern zoo exercising every variant the matcher dispatches on.
fn pattern_zoo() -> Vec<Pattern> {
    vec![
        Pattern::wildcard(),
        Pattern::literal(0),
        Pattern::literal("a"),
        Pattern::of_kind(ValueKind::Int),
        Pattern::of_kind(ValueKind::List),
        Pattern::predicate(|value| value.as_int().is_some_and(|n| n % 2 == 0)),
        Pattern::not(Pattern::of_kind(ValueKind::Str)),
        Pattern::union([Pattern::of_kind(ValueKind::Bool), Pattern::literal(1)]),
        Pattern::intersection([Pattern::of_kind(ValueKind::Int), Pattern::capture("n")]),
        Pattern::select("whole", Pattern::wildcard()),
        Pattern::sequence([Pattern::wildcard(), Pattern::wildcard()]),
        Pattern::sequence_with_rest([Pattern::wildcard()], Pattern::capture("rest"), []),
        Pattern::each(Pattern::of_kind(ValueKind::Int)),
        Pattern::structural([("a", Pattern::capture("a"))]),
    ]
}

// -- Determinism --

proptest! {
    #[test]
    fn matching_is_deterministic(value in value_strategy()) {
        for pattern in pattern_zoo() {
            let first = match_pattern(&pattern, &value);
            let second = match_pattern(&pattern, &value);
            prop_assert_eq!(first.is_match(), second.is_match());

            let (Some(a), Some(b)) =
                (first.into_selections(), second.into_selections())
            else {
                continue;
            };
            prop_assert_eq!(a.len(), b.len());
            for (name, bound) in a.iter() {
                let rebound = b.get(name.as_str());
                prop_assert!(rebound.is_some_and(|v| v.equals(bound)));
            }
        }
    }

    #[test]
    fn wildcard_is_total(value in value_strategy()) {
        prop_assert!(is_match(&Pattern::wildcard(), &value));
    }

    #[test]
    fn not_inverts(value in value_strategy()) {
        let pattern = Pattern::of_kind(ValueKind::Int);
        let negated = Pattern::not(pattern.clone());
        prop_assert_eq!(is_match(&pattern, &value), !is_match(&negated, &value));
    }

    #[test]
    fn literal_matches_exactly_itself(value in value_strategy()) {
        let pattern = Pattern::literal(value.clone());
        prop_assert!(is_match(&pattern, &value));
    }
}

// -- Merge algebra --

proptest! {
    #[test]
    fn agreeing_siblings_bind_once(value in value_strategy()) {
        let pattern = Pattern::intersection([
            Pattern::capture("x"),
            Pattern::capture("x"),
        ]);
        let selections = match_pattern(&pattern, &value).into_selections().unwrap();
        prop_assert_eq!(selections.len(), 1);
        prop_assert!(selections.get("x").unwrap().equals(&value));
    }

    #[test]
    fn sibling_capture_merge_is_equality_checked(value in value_strategy()) {
        let pattern = Pattern::intersection([
            Pattern::select("x", Pattern::wildcard()),
            Pattern::select("x", Pattern::sequence([Pattern::capture("y")])),
        ]);
        // Either the value is a one-element list, in which case "x" binds
        // the same value on both sides, or the second part fails; the
        // match can never surface two different bindings for "x".
        if let Some(selections) = match_pattern(&pattern, &value).into_selections() {
            prop_assert!(selections.get("x").unwrap().equals(&value));
        }
    }
}

// -- Clause evaluation --

proptest! {
    #[test]
    fn first_match_wins_for_any_int(n in any::<i64>()) {
        let result = match_value(n)
            .with(Pattern::of_kind(ValueKind::Int), |_, _| "first")
            .with(Pattern::wildcard(), |_, _| "second")
            .run()
            .unwrap();
        prop_assert_eq!(result, "first");
    }

    #[test]
    fn otherwise_never_fails(value in value_strategy()) {
        let result = match_value(value)
            .with(Pattern::of_kind(ValueKind::Int), |_, _| "int")
            .with(Pattern::of_kind(ValueKind::Str), |_, _| "str")
            .otherwise(|_| "other")
            .unwrap();
        prop_assert!(["int", "str", "other"].contains(&result));
    }

    #[test]
    fn run_and_otherwise_agree_when_a_clause_matches(n in any::<i64>()) {
        let via_run = match_value(n)
            .with(Pattern::of_kind(ValueKind::Int), |_, value| value.clone())
            .run()
            .unwrap();
        let via_otherwise = match_value(n)
            .with(Pattern::of_kind(ValueKind::Int), |_, value| value.clone())
            .otherwise(|_| Value::Unit)
            .unwrap();
        prop_assert_eq!(via_run, via_otherwise);
    }
}
