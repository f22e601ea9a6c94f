//! Pattern tree matched against values.
//!
//! Patterns mirror the shape of typical literal patterns: small, finite
//! trees built by the caller before evaluation and never mutated. The
//! matcher in `matcha_eval` walks them by recursive descent.

use crate::value::{ShapeTag, Value};
use crate::Name;

/// A single pattern in a clause.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Pattern {
    /// Wildcard: matches anything, binds nothing.
    Wildcard,
    /// Binding: matches anything, binds the matched value to the name.
    Binding(Name),
    /// Constant: matches iff the value is structurally equal.
    ///
    /// Equality is exact: no coercion between `Int` and `Text`, no
    /// case-insensitive text comparison.
    Constant(Value),
    /// Typed binding: matches iff the value's shape tag equals `shape`;
    /// binds the whole value to `name`.
    Typed { name: Name, shape: ShapeTag },
    /// Tuple shape: matches a tuple of identical arity where every
    /// sub-pattern matches positionally.
    Tuple(Vec<Pattern>),
    /// Sequence shape: matches a sequence whose prefix matches `head`.
    ///
    /// With `rest: false` the sequence length must equal the head length
    /// exactly. With `rest: true` any length >= head length is accepted
    /// and the remainder is left unbound.
    Seq { head: Vec<Pattern>, rest: bool },
    /// Constructor shape: matches a `Named` value with the same tag and
    /// field arity, sub-matching fields positionally.
    Named { tag: Name, fields: Vec<Pattern> },
}

impl Pattern {
    /// Constant pattern for an integer literal.
    #[inline]
    pub fn int(n: i64) -> Self {
        Pattern::Constant(Value::int(n))
    }

    /// Constant pattern for a boolean literal.
    #[inline]
    pub fn bool(b: bool) -> Self {
        Pattern::Constant(Value::Bool(b))
    }

    /// Constant pattern for a text literal.
    #[inline]
    pub fn text(s: impl Into<String>) -> Self {
        Pattern::Constant(Value::text(s))
    }

    /// Check whether this pattern can introduce bindings.
    ///
    /// Conservative over sub-patterns: a composite pattern binds iff any
    /// sub-pattern does.
    pub fn binds(&self) -> bool {
        match self {
            Pattern::Wildcard | Pattern::Constant(_) => false,
            Pattern::Binding(_) | Pattern::Typed { .. } => true,
            Pattern::Tuple(subs) | Pattern::Named { fields: subs, .. } => {
                subs.iter().any(Pattern::binds)
            }
            Pattern::Seq { head, .. } => head.iter().any(Pattern::binds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_helpers_build_constants() {
        assert_eq!(Pattern::int(4), Pattern::Constant(Value::int(4)));
        assert_eq!(Pattern::bool(true), Pattern::Constant(Value::Bool(true)));
        assert_eq!(Pattern::text("a"), Pattern::Constant(Value::text("a")));
    }

    #[test]
    fn binds_reports_binding_sites() {
        assert!(!Pattern::Wildcard.binds());
        assert!(!Pattern::int(1).binds());
        assert!(Pattern::Binding(Name::from_raw(1)).binds());
        assert!(Pattern::Typed {
            name: Name::from_raw(1),
            shape: ShapeTag::Int
        }
        .binds());

        let tuple = Pattern::Tuple(vec![Pattern::Wildcard, Pattern::Binding(Name::from_raw(2))]);
        assert!(tuple.binds());

        let seq = Pattern::Seq {
            head: vec![Pattern::int(1)],
            rest: true,
        };
        assert!(!seq.binds());
    }
}
