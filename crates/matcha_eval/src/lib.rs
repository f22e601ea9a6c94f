//! Matcha Eval - First-match-wins pattern clause evaluator.
//!
//! This crate provides:
//! - Binding environments scoped to one evaluation call (`Bindings`)
//! - Match clauses: pattern + optional guard + result producer (`Clause`)
//! - Evaluation error types (`MatchError`, `MatchResult`)
//! - The evaluator itself (`evaluate`, `evaluate_or_else`, `is_defined_at`)
//!
//! # Semantics
//!
//! `evaluate` walks the clause list in declaration order. For each clause
//! it attempts a structural match of the value against the pattern; on
//! success the guard (if any) runs over the bindings. A failing guard
//! falls through to the next clause exactly like a structural mismatch.
//! The first clause passing both produces the outcome.
//!
//! Evaluation is a pure function of its inputs: no I/O, no locks, no
//! shared mutable state. Each call owns its binding environment, so
//! independent call sites may evaluate concurrently without coordination.

mod clause;
mod env;
mod errors;
mod matcher;

// Re-export IR types for convenience
pub use matcha_ir::{Heap, InternError, Name, Pattern, ShapeTag, StringInterner, Value};

pub use clause::{Clause, GuardFn, OutcomeFn};
pub use env::Bindings;
pub use errors::{empty_clause_list, no_match, MatchError, MatchErrorKind, MatchResult};
pub use matcher::{evaluate, evaluate_or_else, is_defined_at, try_match};
