//! Value — dynamic-language values crossing the binding boundary
//!
//! Arguments to a native constructor arrive as `Value`s and are turned
//! into an `ArgFrame` by the conversion collaborator. Unlike the
//! engine's interned runtime representation, this is a plain tagged enum:
//! the dispatcher variant has to thread a live proxy handle through an
//! argument sequence, which a packed word encoding cannot carry.

use std::collections::HashMap;

use crate::proxy::ProxyRef;

/// Keyword arguments as supplied by the script caller.
///
/// Constructors reject any non-empty mapping; the type exists so the
/// rejection happens here rather than in every caller.
pub type KwArgs = HashMap<String, Value>;

/// A dynamic-language value passed to the binding layer.
#[derive(Debug, Clone)]
pub enum Value {
    /// Null / absent
    Null,
    /// Boolean
    Bool(bool),
    /// 32-bit integer
    I32(i32),
    /// 64-bit integer
    I64(i64),
    /// 64-bit float
    F64(f64),
    /// String
    Str(String),
    /// A proxy object (bound or unbound)
    Proxy(ProxyRef),
}

impl Value {
    /// Create a string value
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if value is a proxy
    pub fn is_proxy(&self) -> bool {
        matches!(self, Value::Proxy(_))
    }

    /// Extract boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract i32 value
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::I32(i) => Some(*i),
            _ => None,
        }
    }

    /// Extract i64 value (widens i32)
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I32(i) => Some(*i as i64),
            Value::I64(i) => Some(*i),
            _ => None,
        }
    }

    /// Extract f64 value
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F64(f) => Some(*f),
            _ => None,
        }
    }

    /// Extract string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extract proxy handle
    pub fn as_proxy(&self) -> Option<&ProxyRef> {
        match self {
            Value::Proxy(p) => Some(p),
            _ => None,
        }
    }

    /// Get type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::I32(_) => "int",
            Value::I64(_) => "long",
            Value::F64(_) => "float",
            Value::Str(_) => "string",
            Value::Proxy(_) => "object",
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::ProxyObject;
    use crate::runtime::Scope;

    #[test]
    fn test_type_discrimination() {
        assert!(Value::Null.is_null());
        assert!(!Value::Bool(true).is_null());
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::I32(42).as_i32(), Some(42));
        assert_eq!(Value::I32(42).as_i64(), Some(42));
        assert_eq!(Value::I64(-9).as_i64(), Some(-9));
        assert_eq!(Value::F64(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::str("hi").as_str(), Some("hi"));
    }

    #[test]
    fn test_proxy_value() {
        let proxy = ProxyObject::new(Scope::from_raw(3));
        let val = Value::Proxy(proxy.clone());
        assert!(val.is_proxy());
        let held = val.as_proxy().unwrap();
        assert!(std::sync::Arc::ptr_eq(held, &proxy));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::I32(1).type_name(), "int");
        assert_eq!(Value::str("s").type_name(), "string");
    }
}
