//! Silica SDK - ABI types for binding native classes into the runtime
//!
//! This crate provides the vocabulary shared between the Silica engine
//! and its native-class binding layer: dynamic values, native instance
//! handles, proxy objects, the converted parameter frame, the error
//! taxonomy, and the `NativeRuntime` trait through which the binding
//! layer reaches the engine's reflection, conversion, and invocation
//! machinery.
//!
//! # Example
//!
//! ```ignore
//! use silica_sdk::{NativeRuntime, ProxyObject, Scope, Value};
//!
//! let scope = Scope::from_raw(raw_handle);
//! let proxy = ProxyObject::new(scope);
//! // hand `proxy` to silica-bind's ClassConstructor to bind an instance
//! ```

#![warn(missing_docs)]

mod address;
mod error;
mod frame;
mod proxy;
mod runtime;
mod value;

pub use address::NativeAddress;
pub use error::{BindError, BindResult};
pub use frame::{ArgFrame, NativeSlot};
pub use proxy::{ProxyObject, ProxyRef};
pub use runtime::{ExecutorId, NativeRuntime, Scope};
pub use value::{KwArgs, Value};
