//! Property-based tests for the clause evaluator.
//!
//! These tests use proptest to generate random value trees and verify:
//! 1. Determinism: evaluate(v, cs) == evaluate(v, cs) on repeated calls
//! 2. First-match wins over duplicated clause lists
//! 3. Guard fallthrough and wildcard totality hold for arbitrary values

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use matcha_eval::{evaluate, is_defined_at, Clause, Name, Pattern, Value};
use proptest::prelude::*;

// -- Value Generation Strategies --

/// Generate an arbitrary value tree of bounded depth.
fn value_strategy() -> BoxedStrategy<Value> {
    let leaf = prop_oneof![
        any::<i64>().prop_map(Value::int),
        any::<bool>().prop_map(Value::Bool),
        "[a-z]{0,8}".prop_map(|s: String| Value::text(s)),
    ];
    leaf.prop_recursive(4, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::tuple),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::seq),
            (0u32..8, prop::collection::vec(inner, 0..3))
                .prop_map(|(tag, fields)| Value::named(Name::from_raw(tag), fields)),
        ]
    })
    .boxed()
}

/// A clause list whose first clause only matches `probe` exactly.
fn probe_clauses(probe: &Value) -> Vec<Clause> {
    vec![
        Clause::yielding(Pattern::Constant(probe.clone()), Value::text("hit")),
        Clause::yielding(Pattern::Wildcard, Value::text("miss")),
    ]
}

proptest! {
    #[test]
    fn evaluate_is_deterministic(value in value_strategy()) {
        let clauses = probe_clauses(&value);
        let first = evaluate(&value, &clauses);
        let second = evaluate(&value, &clauses);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn constant_pattern_matches_its_own_value(value in value_strategy()) {
        let clauses = probe_clauses(&value);
        prop_assert_eq!(evaluate(&value, &clauses), Ok(Value::text("hit")));
    }

    #[test]
    fn first_match_wins_on_duplicated_clauses(value in value_strategy()) {
        let clauses = vec![
            Clause::yielding(Pattern::Wildcard, Value::int(1)),
            Clause::yielding(Pattern::Wildcard, Value::int(2)),
        ];
        prop_assert_eq!(evaluate(&value, &clauses), Ok(Value::int(1)));
    }

    #[test]
    fn failing_guard_always_falls_through(value in value_strategy()) {
        let x = Name::from_raw(1);
        let clauses = vec![
            Clause::yielding(Pattern::Binding(x), Value::int(1)).with_guard(|_| false),
            Clause::yielding(Pattern::Wildcard, Value::int(2)),
        ];
        prop_assert_eq!(evaluate(&value, &clauses), Ok(Value::int(2)));
    }

    #[test]
    fn wildcard_terminated_lists_are_total(value in value_strategy()) {
        let clauses = vec![
            Clause::yielding(Pattern::int(0), Value::int(0)),
            Clause::yielding(Pattern::Wildcard, Value::int(1)),
        ];
        prop_assert!(evaluate(&value, &clauses).is_ok());
        prop_assert!(is_defined_at(&value, &clauses));
    }

    #[test]
    fn binding_then_guard_sees_the_matched_value(value in value_strategy()) {
        let x = Name::from_raw(1);
        let expected = value.clone();
        let clauses = vec![
            Clause::yielding(Pattern::Binding(x), Value::Bool(true))
                .with_guard(move |env| env.lookup(x) == Some(&expected)),
            Clause::yielding(Pattern::Wildcard, Value::Bool(false)),
        ];
        prop_assert_eq!(evaluate(&value, &clauses), Ok(Value::Bool(true)));
    }
}
