//! Native instance identity registry
//!
//! Bidirectional bookkeeping between native instance addresses and their
//! canonical proxies. The registry owns neither side: it holds weak
//! references, and entries are reconciled through `forget` by the
//! embedder's destruction hook when either half dies. A stale entry left
//! behind would wrongly unify unrelated objects that happen to reuse the
//! address, so the hook contract is load-bearing.

use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use silica_sdk::{NativeAddress, ProxyObject, ProxyRef};

/// Address-to-proxy identity map.
///
/// Writers serialize on the lock's write guard; lookups run concurrently
/// under read guards. At most one live entry exists per address — a
/// second registration for the same address replaces the first.
pub struct InstanceRegistry {
    entries: RwLock<FxHashMap<NativeAddress, Weak<ProxyObject>>>,
}

impl std::fmt::Debug for InstanceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceRegistry")
            .field("count", &self.entries.read().len())
            .finish()
    }
}

impl InstanceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    /// Record `proxy` as the canonical proxy for `address`.
    ///
    /// Replaces any previous mapping for the address; the latest
    /// registration wins.
    pub fn register(&self, address: NativeAddress, proxy: &ProxyRef) {
        self.entries.write().insert(address, Arc::downgrade(proxy));
    }

    /// Look up the canonical proxy for `address`.
    ///
    /// Returns `None` for unknown addresses and for entries whose proxy
    /// has already been dropped.
    pub fn lookup(&self, address: NativeAddress) -> Option<ProxyRef> {
        self.entries.read().get(&address)?.upgrade()
    }

    /// Drop the mapping for `address`.
    ///
    /// Called by the embedder's destruction hook when the native instance
    /// or its proxy is destroyed. Returns whether an entry was present.
    pub fn forget(&self, address: NativeAddress) -> bool {
        self.entries.write().remove(&address).is_some()
    }

    /// Number of recorded mappings (live or stale)
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the registry has no mappings
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for InstanceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
