//! Binding environment for a single evaluation call.

use matcha_ir::{Name, Value};
use rustc_hash::FxHashMap;

/// Mapping from pattern-declared names to sub-values.
///
/// Produced during a successful structural match and scoped to one
/// evaluation call: guards and result producers read it, nothing else
/// ever sees it. A later binding of the same name shadows the earlier
/// one, matching how nested patterns declare names innermost-last.
#[derive(Clone, Debug, Default)]
pub struct Bindings {
    slots: FxHashMap<Name, Value>,
}

impl Bindings {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an environment from the pairs a structural match produced.
    pub fn from_pairs(pairs: Vec<(Name, Value)>) -> Self {
        let mut env = Self::new();
        for (name, value) in pairs {
            env.define(name, value);
        }
        env
    }

    /// Bind a name to a value.
    pub fn define(&mut self, name: Name, value: Value) {
        self.slots.insert(name, value);
    }

    /// Look up a bound value.
    pub fn lookup(&self, name: Name) -> Option<&Value> {
        self.slots.get(&name)
    }

    /// Number of bound names.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no names are bound.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over bound (name, value) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Name, &Value)> {
        self.slots.iter().map(|(name, value)| (*name, value))
    }
}
