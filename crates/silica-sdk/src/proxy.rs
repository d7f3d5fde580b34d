//! ProxyObject — the script-visible wrapper around a native instance
//!
//! A proxy starts out unbound: it names a scope but holds no native
//! address. The constructor dispatch in `silica-bind` is the only code
//! that binds the address slot, and it does so at most once; a failed
//! construction leaves the slot empty so overload resolution may retry
//! on the same proxy.
//!
//! Ownership of the underlying native memory is NOT decided here or by
//! the constructor protocol. The method-dispatch layer that produced the
//! instance sets `set_owned` after a successful call, and the embedder's
//! destruction hook consults `is_owned` when the proxy dies.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use crate::address::NativeAddress;
use crate::runtime::Scope;

/// Shared handle to a proxy object.
///
/// The reference count controls the proxy's own lifetime; the native
/// instance behind it is tracked separately via the ownership flag.
pub type ProxyRef = Arc<ProxyObject>;

/// Script-visible wrapper for a native instance.
#[derive(Debug)]
pub struct ProxyObject {
    /// Reflected type this proxy instantiates
    scope: Scope,
    /// Address slot; empty until construction succeeds
    address: OnceLock<NativeAddress>,
    /// Whether the runtime owns (and must free) the native memory
    owned: AtomicBool,
}

impl ProxyObject {
    /// Allocate a new unbound proxy for `scope`.
    pub fn new(scope: Scope) -> ProxyRef {
        Arc::new(ProxyObject {
            scope,
            address: OnceLock::new(),
            owned: AtomicBool::new(false),
        })
    }

    /// The reflected type this proxy belongs to
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// The bound native address, if construction has succeeded
    pub fn address(&self) -> Option<NativeAddress> {
        self.address.get().copied()
    }

    /// Whether the address slot is bound
    pub fn is_bound(&self) -> bool {
        self.address.get().is_some()
    }

    /// Bind the native address into the proxy.
    ///
    /// Called by the constructor dispatch on success; the slot is bound
    /// at most once. Returns the existing address if already bound.
    pub fn bind(&self, address: NativeAddress) -> Result<(), NativeAddress> {
        match self.address.set(address) {
            Ok(()) => Ok(()),
            Err(_) => Err(self.address().unwrap_or(address)),
        }
    }

    /// Record the ownership disposition decided by the method-dispatch
    /// layer. The constructor protocol never calls this.
    pub fn set_owned(&self, owned: bool) {
        self.owned.store(owned, Ordering::Release);
    }

    /// Whether the runtime is responsible for freeing the native memory
    pub fn is_owned(&self) -> bool {
        self.owned.load(Ordering::Acquire)
    }
}
