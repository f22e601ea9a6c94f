//! Error types for clause evaluation.
//!
//! # Structured Error Categories
//!
//! `MatchErrorKind` provides typed error categories so callers can
//! distinguish a precondition violation (`EmptyClauseList`) from the
//! normal partial-matcher outcome (`NoMatch`) without string parsing.
//! Factory functions (e.g. `no_match()`) populate both `kind` and
//! `message`.

use std::fmt;

/// Result of evaluation.
pub type MatchResult<T> = Result<T, MatchError>;

/// Typed error category.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MatchErrorKind {
    /// The clause list was empty. A precondition violation, surfaced
    /// immediately and never retried.
    EmptyClauseList,
    /// No clause's pattern (with passing guard) matched the input value.
    /// A normal, expected outcome for partial matchers.
    NoMatch,
}

impl fmt::Display for MatchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyClauseList => write!(f, "clause list must not be empty"),
            Self::NoMatch => write!(f, "no clause matched the value"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchError {
    /// Structured error category.
    pub kind: MatchErrorKind,
    /// Human-readable error message, equal to `kind.to_string()`.
    pub message: String,
}

impl MatchError {
    /// Create an error from a structured kind.
    ///
    /// Used internally by factory functions.
    fn from_kind(kind: MatchErrorKind) -> Self {
        Self {
            kind,
            message: kind.to_string(),
        }
    }

    /// Check if this is the normal no-match outcome (as opposed to a
    /// precondition violation).
    #[inline]
    pub fn is_no_match(&self) -> bool {
        self.kind == MatchErrorKind::NoMatch
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for MatchError {}

/// Empty clause list error.
#[cold]
pub fn empty_clause_list() -> MatchError {
    MatchError::from_kind(MatchErrorKind::EmptyClauseList)
}

/// No clause matched.
#[cold]
pub fn no_match() -> MatchError {
    MatchError::from_kind(MatchErrorKind::NoMatch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kinds_are_distinguishable() {
        assert_ne!(empty_clause_list().kind, no_match().kind);
        assert!(no_match().is_no_match());
        assert!(!empty_clause_list().is_no_match());
    }

    #[test]
    fn message_matches_kind_display() {
        let err = no_match();
        assert_eq!(err.message, MatchErrorKind::NoMatch.to_string());
        assert_eq!(err.to_string(), "no clause matched the value");
    }
}
