//! NativeRuntime trait — abstract reflection and native-call operations
//!
//! Defines the interface the Silica engine implements over its reflection
//! backend. The binding layer (`silica-bind`) programs against this trait
//! without depending on engine internals; tests substitute scripted
//! doubles.

use crate::address::NativeAddress;
use crate::error::BindResult;
use crate::frame::ArgFrame;
use crate::value::Value;

/// Opaque handle to a reflected type or namespace.
///
/// Resolved and owned by the reflection layer; immutable once issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Scope(u32);

impl Scope {
    /// Wrap a raw reflection handle
    pub const fn from_raw(raw: u32) -> Self {
        Scope(raw)
    }

    /// Get the raw reflection handle
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Opaque handle to a resolved call-executor strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ExecutorId(u32);

impl ExecutorId {
    /// Wrap a raw executor handle
    pub const fn from_raw(raw: u32) -> Self {
        ExecutorId(raw)
    }

    /// Get the raw executor handle
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Abstract runtime context for the binding layer.
///
/// This trait is the single entry point to the external collaborators of
/// the constructor protocol: reflection queries, executor resolution,
/// argument conversion, and native invocation. The engine provides the
/// concrete implementation; the binding layer only ever sees `&dyn
/// NativeRuntime`.
pub trait NativeRuntime {
    // ========================================================================
    // Reflection queries
    // ========================================================================

    /// Final (unqualified) name of the scope
    fn final_name(&self, scope: Scope) -> String;

    /// Fully scoped name of the scope
    fn scoped_final_name(&self, scope: Scope) -> String;

    /// Whether the scope is an abstract class
    fn is_abstract(&self, scope: Scope) -> bool;

    /// Whether the scope is a namespace
    fn is_namespace(&self, scope: Scope) -> bool;

    /// Whether the scope is a runtime-generated dispatcher subclass,
    /// created so native virtual calls can reach script overrides
    fn is_dispatcher(&self, scope: Scope) -> bool;

    /// Constructor signature metadata, rendered with parentheses
    /// (e.g. `"(int, float)"`), or `None` when the scope carries no
    /// method metadata
    fn initializer_signature(&self, scope: Scope) -> Option<String>;

    // ========================================================================
    // Executor resolution
    // ========================================================================

    /// Resolve the special initializer strategy for a scope.
    ///
    /// Construction always goes through the initializer path; this is not
    /// a lookup by method name.
    fn select_initializer(&self, scope: Scope) -> BindResult<ExecutorId>;

    // ========================================================================
    // Argument conversion
    // ========================================================================

    /// Lower a normalized argument sequence into the native parameter
    /// frame for `scope`'s initializer. Either a complete frame or an
    /// error; no partial binding.
    fn convert_args(&self, scope: Scope, args: &[Value]) -> BindResult<ArgFrame>;

    // ========================================================================
    // Native invocation
    // ========================================================================

    /// Invoke a resolved initializer.
    ///
    /// `receiver: None` is the "callee allocates storage" convention used
    /// by construction. `Ok(Some(_))` is the address of the new instance;
    /// `Ok(None)` means the native side returned the zero sentinel
    /// without recording an error; `Err(_)` is an error recorded by the
    /// invocation itself and is propagated verbatim.
    fn invoke_initializer(
        &self,
        executor: ExecutorId,
        receiver: Option<NativeAddress>,
        frame: &ArgFrame,
    ) -> BindResult<Option<NativeAddress>>;
}
