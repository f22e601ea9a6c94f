//! Runtime values matched by the evaluator.
//!
//! # Arc Enforcement Architecture
//!
//! All heap allocations go through factory methods on `Value`. The
//! `Heap<T>` wrapper type has a crate-private constructor, so external
//! code cannot create heap values directly.
//!
//! ## Correct Usage
//!
//! ```text
//! let s = Value::text("hello");                 // OK
//! let t = Value::tuple(vec![Value::int(1)]);    // OK
//! ```
//!
//! ## Prevented (Won't Compile)
//!
//! ```text
//! let s = Value::Text(Heap::new(...));   // ERROR: Heap::new is pub(crate)
//! let s = Value::Text(Arc::new(...));    // ERROR: Expected Heap, got Arc
//! ```
//!
//! # Equality
//!
//! Equality is structural and exact: an `Int` never equals a `Text`, and
//! text comparison is case-sensitive. Constant patterns rely on this.

mod heap;


use crate::Name;
use std::fmt;

pub use heap::Heap;

/// Runtime value, immutable once constructed.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Value {
    // Primitives (inline, no heap allocation)
    /// Integer value.
    Int(i64),
    /// Boolean value.
    Bool(bool),

    // Heap Types (use Heap<T> for enforced Arc usage)
    /// Text value.
    Text(Heap<String>),
    /// Fixed-arity tuple of values.
    Tuple(Heap<Vec<Value>>),
    /// Ordered sequence of values.
    Seq(Heap<Vec<Value>>),
    /// Tagged constructor value: a named tag with ordered fields.
    ///
    /// Fields may be empty for nullary constructors.
    Named {
        tag: Name,
        fields: Heap<Vec<Value>>,
    },
}

/// Shape tag of a value.
///
/// A closed enumeration of the six value shapes, inspected by typed
/// binding patterns instead of run-time type tests.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ShapeTag {
    Int,
    Bool,
    Text,
    Tuple,
    Seq,
    Named,
}

impl ShapeTag {
    /// Shape name for error messages and tracing.
    pub fn name(self) -> &'static str {
        match self {
            ShapeTag::Int => "int",
            ShapeTag::Bool => "bool",
            ShapeTag::Text => "text",
            ShapeTag::Tuple => "tuple",
            ShapeTag::Seq => "seq",
            ShapeTag::Named => "named",
        }
    }
}

impl fmt::Display for ShapeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a text value.
    #[inline]
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(Heap::new(s.into()))
    }

    /// Create a tuple value.
    #[inline]
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Heap::new(items))
    }

    /// Create a sequence value.
    #[inline]
    pub fn seq(items: Vec<Value>) -> Self {
        Value::Seq(Heap::new(items))
    }

    /// Create a tagged constructor value.
    ///
    /// ```text
    /// // Nullary constructor: Nil
    /// let nil = Value::named(nil_tag, vec![]);
    ///
    /// // Constructor with fields: Point(1, 2)
    /// let p = Value::named(point_tag, vec![Value::int(1), Value::int(2)]);
    /// ```
    #[inline]
    pub fn named(tag: Name, fields: Vec<Value>) -> Self {
        Value::Named {
            tag,
            fields: Heap::new(fields),
        }
    }
}

// Value Methods

impl Value {
    /// Get the shape tag of this value.
    pub fn shape(&self) -> ShapeTag {
        match self {
            Value::Int(_) => ShapeTag::Int,
            Value::Bool(_) => ShapeTag::Bool,
            Value::Text(_) => ShapeTag::Text,
            Value::Tuple(_) => ShapeTag::Tuple,
            Value::Seq(_) => ShapeTag::Seq,
            Value::Named { .. } => ShapeTag::Named,
        }
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        self.shape().name()
    }

    /// Try to convert to an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to convert to a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to convert to text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to convert to a sequence.
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Try to convert to a tuple.
    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Value::Tuple(items) => Some(items),
            _ => None,
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(s) => write!(f, "\"{}\"", s.as_str()),
            Value::Tuple(items) => {
                f.write_str("(")?;
                write_joined(f, items)?;
                f.write_str(")")
            }
            Value::Seq(items) => {
                f.write_str("[")?;
                write_joined(f, items)?;
                f.write_str("]")
            }
            Value::Named { tag, fields } => {
                write!(f, "#{}", tag.raw())?;
                if !fields.is_empty() {
                    f.write_str("(")?;
                    write_joined(f, fields)?;
                    f.write_str(")")?;
                }
                Ok(())
            }
        }
    }
}
