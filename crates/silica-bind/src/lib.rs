//! Silica native class binding layer
//!
//! This crate implements the protocol that lets Silica script code
//! construct, own, and track instances of statically compiled native
//! classes discovered through runtime reflection:
//!
//! - [`ClassConstructor`] — the construction call sequencer and its
//!   specialized variants (abstract-class guard, namespace guard,
//!   override-dispatcher adapter)
//! - [`InstanceRegistry`] — the address-to-proxy identity registry that
//!   keeps one canonical proxy per live native instance
//!
//! The reflection, argument-conversion, and native-invocation machinery
//! stay behind `silica_sdk::NativeRuntime`; this crate only sequences
//! them and keeps the identity bookkeeping honest.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod constructor;
pub mod registry;

pub use constructor::{ClassConstructor, ConstructorVariant};
pub use registry::InstanceRegistry;
