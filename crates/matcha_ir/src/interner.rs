//! String interner for binding names and constructor tags.
//!
//! Provides O(1) interning and lookup with thread-safe concurrent access.

use crate::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Interner exceeded capacity (over 4 billion strings).
    Overflow { count: usize },
}

impl fmt::Display for InternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "interner exceeded capacity: {count} strings, max is {}",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// Interner storage behind the lock.
struct Inner {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents.
    strings: Vec<&'static str>,
}

/// Thread-safe string interner.
///
/// Provides O(1) lookup and equality comparison for interned strings.
/// Interned contents are leaked to get `'static` lifetime, so lookups
/// never borrow the lock guard.
///
/// # Thread Safety
/// Uses `RwLock` for concurrent read/write access. Can be wrapped in Arc
/// for sharing across threads.
pub struct StringInterner {
    inner: RwLock<Inner>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned at index 0.
    pub fn new() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        Self {
            inner: RwLock::new(Inner {
                map,
                strings: vec![empty],
            }),
        }
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    ///
    /// This is the fallible version of `intern()`. Use this when you need to
    /// handle the overflow case gracefully instead of panicking.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        // Fast path: check if already interned
        {
            let guard = self.inner.read();
            if let Some(&idx) = guard.map.get(s) {
                return Ok(Name::from_raw(idx));
            }
        }

        let mut guard = self.inner.write();

        // Double-check after acquiring write lock
        if let Some(&idx) = guard.map.get(s) {
            return Ok(Name::from_raw(idx));
        }

        // Leak the string to get 'static lifetime
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());

        let idx = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        guard.strings.push(leaked);
        guard.map.insert(leaked, idx);

        Ok(Name::from_raw(idx))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if the interner exceeds capacity (over 4 billion strings).
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the string content of a name.
    ///
    /// Names fabricated with `Name::from_raw` that were never handed out by
    /// this interner resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &'static str {
        let guard = self.inner.read();
        guard.strings.get(name.raw() as usize).copied().unwrap_or("")
    }

    /// Number of interned strings (including the pre-interned empty string).
    pub fn len(&self) -> usize {
        self.inner.read().strings.len()
    }

    /// Check if only the pre-interned empty string is present.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
