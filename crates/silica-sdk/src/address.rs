//! NativeAddress — opaque handle to a live native instance
//!
//! A bound address is non-null by construction. The zero value exists
//! only at the invocation boundary, where the native side returns it to
//! signal "construction failed"; `from_raw` turns that sentinel into
//! `None` so zero can never be stored in a proxy or the registry.

use std::fmt;
use std::num::NonZeroUsize;

/// Address of a native instance, known to be non-null once bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct NativeAddress(NonZeroUsize);

impl NativeAddress {
    /// Interpret a raw address returned by the native side.
    ///
    /// Returns `None` for the zero "construction failed" sentinel.
    #[inline]
    pub fn from_raw(raw: usize) -> Option<Self> {
        NonZeroUsize::new(raw).map(Self)
    }

    /// Get the raw address value
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for NativeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0.get())
    }
}
