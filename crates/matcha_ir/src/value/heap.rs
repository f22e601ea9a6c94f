//! Enforced-Arc wrapper for heap-allocated value payloads.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// Shared, immutable heap allocation.
///
/// The constructor is crate-private: external code builds heap values
/// through `Value::` factory methods only, which keeps every allocation
/// behind thread-safe reference counting.
pub struct Heap<T>(Arc<T>);

impl<T> Heap<T> {
    /// Allocate a payload. Crate-private; see module docs.
    pub(crate) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }

    /// Check whether two handles share the same allocation.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Clone for Heap<T> {
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        // Cheap identity check first, then structural comparison
        Arc::ptr_eq(&self.0, &other.0) || *self.0 == *other.0
    }
}

impl<T: Eq> Eq for Heap<T> {}

impl<T: Hash> Hash for Heap<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_deref() {
        let h = Heap::new(42i64);
        assert_eq!(*h, 42);
    }

    #[test]
    fn test_heap_clone_shares_allocation() {
        let h1 = Heap::new(vec![1, 2, 3]);
        let h2 = h1.clone();
        assert_eq!(*h1, *h2);
        assert!(Heap::ptr_eq(&h1, &h2));
    }

    #[test]
    fn test_heap_eq_is_structural() {
        let h1 = Heap::new("hello".to_string());
        let h2 = Heap::new("hello".to_string());
        let h3 = Heap::new("world".to_string());
        assert_eq!(h1, h2);
        assert_ne!(h1, h3);
        assert!(!Heap::ptr_eq(&h1, &h2));
    }
}
