//! Interned string identifier.
//!
//! Provides compact 32-bit interned identifiers for binding names and
//! constructor tags.

use std::fmt;

/// Interned string identifier.
///
/// A `Name` is an index into a `StringInterner`. Two names compare equal
/// iff they were interned from the same string in the same interner.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Create from raw u32 value.
    ///
    /// Only meaningful for indices handed out by a `StringInterner`; looking
    /// up a fabricated name yields the empty string.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}
