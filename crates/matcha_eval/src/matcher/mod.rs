//! Structural matching and clause selection.
//!
//! `try_match` is a single-pass recursive descent over the pattern tree.
//! Backtracking is limited to "try next clause": a sub-pattern failure
//! short-circuits the whole pattern as non-matching and no partial
//! bindings leak out of the failed branch.


use crate::clause::Clause;
use crate::env::Bindings;
use crate::errors::{empty_clause_list, no_match, MatchResult};
use matcha_ir::{Name, Pattern, Value};

/// Try to match a pattern against a value, returning bindings if successful.
///
/// `None` is the internal shape-mismatch signal: it makes the caller move
/// on to the next sub-pattern or clause and never surfaces as an error.
pub fn try_match(pattern: &Pattern, value: &Value) -> Option<Vec<(Name, Value)>> {
    match pattern {
        Pattern::Wildcard => Some(vec![]),

        Pattern::Binding(name) => Some(vec![(*name, value.clone())]),

        Pattern::Constant(expected) => {
            if expected == value {
                Some(vec![])
            } else {
                None
            }
        }

        Pattern::Typed { name, shape } => {
            if value.shape() == *shape {
                Some(vec![(*name, value.clone())])
            } else {
                None
            }
        }

        Pattern::Tuple(patterns) => {
            if let Value::Tuple(values) = value {
                // Arity is exact: a 2-pattern never matches a 3-tuple
                if patterns.len() != values.len() {
                    return None;
                }
                match_all(patterns, values)
            } else {
                None
            }
        }

        Pattern::Seq { head, rest } => {
            if let Value::Seq(values) = value {
                if values.len() < head.len() {
                    return None;
                }
                if !rest && values.len() != head.len() {
                    return None;
                }
                // The remainder beyond the head is accepted but unbound
                match_all(head, &values[..head.len()])
            } else {
                None
            }
        }

        Pattern::Named { tag, fields } => {
            if let Value::Named {
                tag: value_tag,
                fields: value_fields,
            } = value
            {
                if value_tag != tag || fields.len() != value_fields.len() {
                    return None;
                }
                match_all(fields, value_fields)
            } else {
                None
            }
        }
    }
}

/// Match sub-patterns positionally, accumulating bindings.
///
/// The first failure short-circuits; callers must ensure both slices have
/// the same length.
fn match_all(patterns: &[Pattern], values: &[Value]) -> Option<Vec<(Name, Value)>> {
    debug_assert_eq!(patterns.len(), values.len());
    let mut all_bindings = Vec::new();
    for (pattern, value) in patterns.iter().zip(values.iter()) {
        all_bindings.extend(try_match(pattern, value)?);
    }
    Some(all_bindings)
}

/// Evaluate a value against an ordered clause list, first match wins.
///
/// Clauses are tried in declaration order. A clause is selected iff its
/// pattern structurally matches and its guard (if present) evaluates true
/// over the bindings; a failing guard falls through to the next clause
/// exactly like a structural mismatch. The selected clause's result
/// producer runs over the bindings and its value is returned.
///
/// # Errors
///
/// - `MatchErrorKind::EmptyClauseList` if `clauses` is empty (precondition
///   violation, distinct from no-match).
/// - `MatchErrorKind::NoMatch` if every clause was tried without success.
///   Callers wanting total coverage supply a trailing `Wildcard` clause;
///   that is a caller convention, not enforced here.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate(value: &Value, clauses: &[Clause]) -> MatchResult<Value> {
    if clauses.is_empty() {
        return Err(empty_clause_list());
    }

    for (index, clause) in clauses.iter().enumerate() {
        let Some(pairs) = try_match(clause.pattern(), value) else {
            tracing::trace!(clause = index, "structural mismatch");
            continue;
        };
        let bindings = Bindings::from_pairs(pairs);

        // Guard failure falls through, it does not terminate the search
        if let Some(guard) = clause.guard() {
            if !guard(&bindings) {
                tracing::trace!(clause = index, "guard rejected matched clause");
                continue;
            }
        }

        tracing::debug!(clause = index, "clause selected");
        return Ok((clause.result())(&bindings));
    }

    Err(no_match())
}

/// Evaluate with a designated default clause as fallback.
///
/// Behaves like [`evaluate`], but routes the no-match outcome to `default`
/// (typically a `Wildcard` clause). An empty primary clause list is still
/// a precondition violation, and a default whose own pattern fails to
/// match still yields `NoMatch`.
pub fn evaluate_or_else(value: &Value, clauses: &[Clause], default: &Clause) -> MatchResult<Value> {
    match evaluate(value, clauses) {
        Err(err) if err.is_no_match() => evaluate(value, std::slice::from_ref(default)),
        other => other,
    }
}

/// Check whether some clause would select the value.
///
/// The domain test of a partial matcher: true iff a clause structurally
/// matches with a passing guard. False for the empty clause list.
pub fn is_defined_at(value: &Value, clauses: &[Clause]) -> bool {
    clauses.iter().any(|clause| {
        match try_match(clause.pattern(), value) {
            Some(pairs) => match clause.guard() {
                Some(guard) => guard(&Bindings::from_pairs(pairs)),
                None => true,
            },
            None => false,
        }
    })
}
