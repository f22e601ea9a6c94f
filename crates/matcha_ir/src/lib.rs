//! Matcha IR - Value and pattern trees for the matcha evaluator.
//!
//! This crate provides:
//! - Interned string identifiers (`Name`, `StringInterner`)
//! - Runtime value types (`Value`, `Heap`, `ShapeTag`)
//! - The pattern tree matched against values (`Pattern`)
//!
//! # Immutability
//!
//! Values and patterns are constructed by the caller and never mutated
//! afterwards. The evaluator crate only reads them, so both can be shared
//! freely across threads (`Heap<T>` uses `Arc` internally).

mod interner;
mod name;
mod pattern;
mod value;

pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use pattern::Pattern;
pub use value::{Heap, ShapeTag, Value};
