//! Match clauses: pattern + optional guard + result producer.

use crate::env::Bindings;
use matcha_ir::{Pattern, Value};
use std::fmt;
use std::sync::Arc;

/// Guard predicate over the bindings of a structurally matched clause.
///
/// Must be pure: the evaluator may probe the same clause repeatedly
/// (e.g. `is_defined_at` followed by `evaluate`) and relies on the guard
/// answering the same way each time.
pub type GuardFn = Arc<dyn Fn(&Bindings) -> bool + Send + Sync>;

/// Result producer over the bindings of the selected clause.
pub type OutcomeFn = Arc<dyn Fn(&Bindings) -> Value + Send + Sync>;

/// One branch of a match: `(pattern, optional guard, result producer)`.
///
/// Clauses are evaluated in declaration order; order is a binding
/// invariant of the evaluator, not an implementation detail. The guard
/// and result producer are shared closures, so a clause list can be
/// cloned cheaply and used from several threads at once.
#[derive(Clone)]
pub struct Clause {
    pattern: Pattern,
    guard: Option<GuardFn>,
    result: OutcomeFn,
}

impl Clause {
    /// Create a clause producing its result from the binding environment.
    ///
    /// ```text
    /// let double = Clause::new(Pattern::Binding(x), move |env| {
    ///     let n = env.lookup(x).and_then(Value::as_int).unwrap_or(0);
    ///     Value::int(n * 2)
    /// });
    /// ```
    pub fn new(
        pattern: Pattern,
        result: impl Fn(&Bindings) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            pattern,
            guard: None,
            result: Arc::new(result),
        }
    }

    /// Create a clause producing a fixed value, ignoring bindings.
    pub fn yielding(pattern: Pattern, value: Value) -> Self {
        Self::new(pattern, move |_| value.clone())
    }

    /// Attach a guard predicate to this clause.
    ///
    /// The guard runs only after the pattern structurally matched; a
    /// `false` answer makes the evaluator fall through to the next
    /// clause.
    #[must_use]
    pub fn with_guard(mut self, guard: impl Fn(&Bindings) -> bool + Send + Sync + 'static) -> Self {
        self.guard = Some(Arc::new(guard));
        self
    }

    /// The clause's pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The clause's guard, if any.
    pub fn guard(&self) -> Option<&GuardFn> {
        self.guard.as_ref()
    }

    /// The clause's result producer.
    pub fn result(&self) -> &OutcomeFn {
        &self.result
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clause")
            .field("pattern", &self.pattern)
            .field("guard", &self.guard.as_ref().map(|_| "<fn>"))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcha_ir::Name;
    use pretty_assertions::assert_eq;

    #[test]
    fn yielding_ignores_bindings() {
        let clause = Clause::yielding(Pattern::Wildcard, Value::int(7));
        let env = Bindings::new();
        assert_eq!((clause.result())(&env), Value::int(7));
        assert!(clause.guard().is_none());
    }

    #[test]
    fn with_guard_attaches_predicate() {
        let x = Name::from_raw(1);
        let clause = Clause::yielding(Pattern::Binding(x), Value::int(0))
            .with_guard(move |env| env.lookup(x).and_then(Value::as_int) == Some(4));

        let hit = Bindings::from_pairs(vec![(x, Value::int(4))]);
        let miss = Bindings::from_pairs(vec![(x, Value::int(5))]);
        let guard = clause.guard().map(Arc::clone);
        match guard {
            Some(g) => {
                assert!(g(&hit));
                assert!(!g(&miss));
            }
            None => panic!("expected guard"),
        }
    }

    #[test]
    fn result_reads_bindings() {
        let x = Name::from_raw(1);
        let clause = Clause::new(Pattern::Binding(x), move |env| {
            let n = env.lookup(x).and_then(Value::as_int).unwrap_or(0);
            Value::int(n + 1)
        });
        let env = Bindings::from_pairs(vec![(x, Value::int(41))]);
        assert_eq!((clause.result())(&env), Value::int(42));
    }

    #[test]
    fn debug_does_not_require_closure_debug() {
        let clause = Clause::yielding(Pattern::Wildcard, Value::int(1)).with_guard(|_| true);
        let repr = format!("{clause:?}");
        assert!(repr.contains("Wildcard"));
    }
}
