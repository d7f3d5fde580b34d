//! Error types for the native binding layer
//!
//! Every step of the constructor protocol reports through `BindResult`;
//! there is no shared "last error" slot. Errors raised by the conversion
//! and invocation collaborators pass through unchanged so that callers
//! attempting several overloads can tell "this overload declined" from
//! "no overload matched".

use crate::address::NativeAddress;

/// Result type for binding-layer calls
pub type BindResult<T> = Result<T, BindError>;

/// Binding layer error types
///
/// The display strings for the guard and construction variants are part
/// of the caller-visible contract; overload resolution and user-facing
/// tracebacks both parse them.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BindError {
    /// Caller supplied keyword arguments; constructors take positional
    /// arguments only
    #[error("keyword arguments are not yet supported")]
    KeywordArguments,

    /// Target scope is an abstract class
    #[error("cannot instantiate abstract class '{0}'")]
    AbstractClass(String),

    /// Target scope is a namespace
    #[error("cannot instantiate namespace '{0}'")]
    Namespace(String),

    /// Receiver proxy already holds a live native instance
    #[error("instance already bound to native object at {0}")]
    AlreadyBound(NativeAddress),

    /// Argument conversion failed; message comes verbatim from the
    /// conversion collaborator
    #[error("{0}")]
    Conversion(String),

    /// The native invocation recorded an error of its own
    #[error("{0}")]
    Execution(String),

    /// The native constructor returned the zero address without recording
    /// any other error
    #[error("{0} constructor failed")]
    ConstructorFailed(String),
}

impl From<String> for BindError {
    fn from(s: String) -> Self {
        BindError::Execution(s)
    }
}

impl From<&str> for BindError {
    fn from(s: &str) -> Self {
        BindError::Execution(s.to_string())
    }
}
