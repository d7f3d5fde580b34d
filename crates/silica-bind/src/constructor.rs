//! Constructor dispatch for reflected native classes
//!
//! A `ClassConstructor` turns a script-level construction call into a
//! native initializer invocation and binds the resulting instance to the
//! caller's proxy. Construction never produces a value: it mutates the
//! supplied proxy and reports success or failure, so the overload
//! resolution above it can retry another signature on the same proxy.
//!
//! Behavior per scope is fixed once, at resolution time, as a variant
//! tag: abstract classes and namespaces reject every call outright, and
//! dispatcher subclasses re-inject the proxy as the leading native
//! argument so the native half can route virtual calls back into script
//! overrides.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use silica_sdk::{
    BindError, BindResult, ExecutorId, KwArgs, NativeRuntime, ProxyRef, Scope, Value,
};

use crate::registry::InstanceRegistry;

/// Construction behavior for a scope, selected from its capability flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorVariant {
    /// Concrete class: the generic call sequence
    Normal,
    /// Abstract class: every call is rejected
    Abstract,
    /// Namespace: every call is rejected
    Namespace,
    /// Runtime-generated dispatcher subclass: the proxy itself becomes
    /// the first native argument
    Dispatcher,
}

impl ConstructorVariant {
    /// Pick the variant for a scope from the reflection capability set.
    pub fn for_scope(rt: &dyn NativeRuntime, scope: Scope) -> Self {
        if rt.is_namespace(scope) {
            ConstructorVariant::Namespace
        } else if rt.is_abstract(scope) {
            ConstructorVariant::Abstract
        } else if rt.is_dispatcher(scope) {
            ConstructorVariant::Dispatcher
        } else {
            ConstructorVariant::Normal
        }
    }
}

/// Constructor dispatch for one reflected scope.
#[derive(Debug)]
pub struct ClassConstructor {
    scope: Scope,
    variant: ConstructorVariant,
    /// Initializer strategy, resolved on first use and cached for the
    /// life of this constructor object
    executor: OnceCell<ExecutorId>,
}

impl ClassConstructor {
    /// Resolve the constructor for `scope`, fixing its variant.
    pub fn resolve(rt: &dyn NativeRuntime, scope: Scope) -> Self {
        Self {
            scope,
            variant: ConstructorVariant::for_scope(rt, scope),
            executor: OnceCell::new(),
        }
    }

    /// The scope this constructor instantiates
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// The selected construction variant
    pub fn variant(&self) -> ConstructorVariant {
        self.variant
    }

    /// Render the constructor's help string.
    ///
    /// `"Type::Type(signature)"` when the scope carries method metadata,
    /// `"Type::Type()"` otherwise.
    pub fn doc_string(&self, rt: &dyn NativeRuntime) -> String {
        let name = rt.final_name(self.scope);
        let signature = rt
            .initializer_signature(self.scope)
            .unwrap_or_else(|| "()".to_string());
        format!("{name}::{name}{signature}")
    }

    /// Construct a native instance and bind it into `proxy`.
    ///
    /// On success the proxy's address slot is bound and the (address,
    /// proxy) pair is recorded in `registry`. On failure the proxy is
    /// left untouched; the error is never fatal at this layer.
    pub fn construct(
        &self,
        rt: &dyn NativeRuntime,
        registry: &InstanceRegistry,
        proxy: &ProxyRef,
        args: &[Value],
        kwargs: Option<&KwArgs>,
    ) -> BindResult<()> {
        match self.variant {
            ConstructorVariant::Abstract => {
                Err(BindError::AbstractClass(rt.scoped_final_name(self.scope)))
            }
            ConstructorVariant::Namespace => {
                Err(BindError::Namespace(rt.scoped_final_name(self.scope)))
            }
            ConstructorVariant::Normal => self.sequence(rt, registry, proxy, args, kwargs, false),
            ConstructorVariant::Dispatcher => self.sequence(rt, registry, proxy, args, kwargs, true),
        }
    }

    /// The generic call sequence shared by the normal and dispatcher
    /// variants. Intermediate argument sequences are dropped on every
    /// exit path.
    fn sequence(
        &self,
        rt: &dyn NativeRuntime,
        registry: &InstanceRegistry,
        proxy: &ProxyRef,
        args: &[Value],
        kwargs: Option<&KwArgs>,
        inject_receiver: bool,
    ) -> BindResult<()> {
        // keywords are rejected before any resource acquisition
        if kwargs.is_some_and(|kw| !kw.is_empty()) {
            return Err(BindError::KeywordArguments);
        }

        // construction always uses the special initializer path; a failed
        // resolution is not cached and will be retried on the next call
        let executor = *self
            .executor
            .get_or_try_init(|| rt.select_initializer(self.scope))?;

        let normalized = preprocess_args(proxy, args)?;
        let call_args = if inject_receiver {
            inject_receiver_arg(proxy, normalized)
        } else {
            normalized
        };

        // conversion errors propagate verbatim; no partial frame exists
        let frame = rt.convert_args(self.scope, &call_args)?;

        // receiver stays null so the callee allocates the storage
        match rt.invoke_initializer(executor, None, &frame)? {
            Some(address) => {
                proxy.bind(address).map_err(BindError::AlreadyBound)?;
                registry.register(address, proxy);
                Ok(())
            }
            // zero address and no error recorded by the lower layers
            None => Err(BindError::ConstructorFailed(
                rt.scoped_final_name(self.scope),
            )),
        }
    }
}

/// Validate the receiver and normalize the positional arguments into a
/// fresh sequence. The caller's container is not consumed.
fn preprocess_args(proxy: &ProxyRef, args: &[Value]) -> BindResult<Vec<Value>> {
    if let Some(bound) = proxy.address() {
        return Err(BindError::AlreadyBound(bound));
    }
    Ok(args.to_vec())
}

/// Build the dispatcher argument sequence: the proxy itself first, every
/// normalized argument shifted one position later. Consumes the
/// intermediate sequence from preprocessing.
fn inject_receiver_arg(proxy: &ProxyRef, normalized: Vec<Value>) -> Vec<Value> {
    let mut augmented = Vec::with_capacity(normalized.len() + 1);
    augmented.push(Value::Proxy(Arc::clone(proxy)));
    augmented.extend(normalized);
    augmented
}

#[cfg(test)]
mod tests {
    use super::*;
    use silica_sdk::{ArgFrame, BindResult, NativeAddress, ProxyObject};

    /// Reflection-only stub: capability flags and names, no native layer.
    struct StubRuntime {
        name: &'static str,
        scoped: &'static str,
        is_abstract: bool,
        is_namespace: bool,
        is_dispatcher: bool,
        signature: Option<&'static str>,
    }

    impl StubRuntime {
        fn concrete(name: &'static str) -> Self {
            Self {
                name,
                scoped: name,
                is_abstract: false,
                is_namespace: false,
                is_dispatcher: false,
                signature: None,
            }
        }
    }

    impl NativeRuntime for StubRuntime {
        fn final_name(&self, _scope: Scope) -> String {
            self.name.to_string()
        }

        fn scoped_final_name(&self, _scope: Scope) -> String {
            self.scoped.to_string()
        }

        fn is_abstract(&self, _scope: Scope) -> bool {
            self.is_abstract
        }

        fn is_namespace(&self, _scope: Scope) -> bool {
            self.is_namespace
        }

        fn is_dispatcher(&self, _scope: Scope) -> bool {
            self.is_dispatcher
        }

        fn initializer_signature(&self, _scope: Scope) -> Option<String> {
            self.signature.map(str::to_string)
        }

        fn select_initializer(&self, _scope: Scope) -> BindResult<ExecutorId> {
            panic!("stub runtime has no native layer");
        }

        fn convert_args(&self, _scope: Scope, _args: &[Value]) -> BindResult<ArgFrame> {
            panic!("stub runtime has no native layer");
        }

        fn invoke_initializer(
            &self,
            _executor: ExecutorId,
            _receiver: Option<NativeAddress>,
            _frame: &ArgFrame,
        ) -> BindResult<Option<NativeAddress>> {
            panic!("stub runtime has no native layer");
        }
    }

    #[test]
    fn test_variant_selection_concrete() {
        let rt = StubRuntime::concrete("Circle");
        assert_eq!(
            ConstructorVariant::for_scope(&rt, Scope::from_raw(1)),
            ConstructorVariant::Normal
        );
    }

    #[test]
    fn test_variant_selection_precedence() {
        // namespace wins over everything
        let rt = StubRuntime {
            is_namespace: true,
            is_abstract: true,
            is_dispatcher: true,
            ..StubRuntime::concrete("Utils")
        };
        assert_eq!(
            ConstructorVariant::for_scope(&rt, Scope::from_raw(1)),
            ConstructorVariant::Namespace
        );

        // abstract wins over dispatcher
        let rt = StubRuntime {
            is_abstract: true,
            is_dispatcher: true,
            ..StubRuntime::concrete("Shape")
        };
        assert_eq!(
            ConstructorVariant::for_scope(&rt, Scope::from_raw(1)),
            ConstructorVariant::Abstract
        );

        let rt = StubRuntime {
            is_dispatcher: true,
            ..StubRuntime::concrete("ShapeDispatcher")
        };
        assert_eq!(
            ConstructorVariant::for_scope(&rt, Scope::from_raw(1)),
            ConstructorVariant::Dispatcher
        );
    }

    #[test]
    fn test_abstract_guard_blocks_without_native_calls() {
        // StubRuntime panics on any native-layer call, so this also
        // proves the guard short-circuits before setup/conversion
        let rt = StubRuntime {
            is_abstract: true,
            scoped: "geo::Shape",
            ..StubRuntime::concrete("Shape")
        };
        let ctor = ClassConstructor::resolve(&rt, Scope::from_raw(1));
        let registry = InstanceRegistry::new();
        let proxy = ProxyObject::new(Scope::from_raw(1));

        let err = ctor
            .construct(&rt, &registry, &proxy, &[Value::I32(3)], None)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot instantiate abstract class 'geo::Shape'"
        );
        assert!(!proxy.is_bound());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_namespace_guard_blocks_without_native_calls() {
        let rt = StubRuntime {
            is_namespace: true,
            ..StubRuntime::concrete("Utils")
        };
        let ctor = ClassConstructor::resolve(&rt, Scope::from_raw(1));
        let registry = InstanceRegistry::new();
        let proxy = ProxyObject::new(Scope::from_raw(1));

        let err = ctor.construct(&rt, &registry, &proxy, &[], None).unwrap_err();
        assert_eq!(err.to_string(), "cannot instantiate namespace 'Utils'");
        assert!(!proxy.is_bound());
    }

    #[test]
    fn test_doc_string_with_signature() {
        let rt = StubRuntime {
            signature: Some("(int, float)"),
            ..StubRuntime::concrete("Circle")
        };
        let ctor = ClassConstructor::resolve(&rt, Scope::from_raw(1));
        assert_eq!(ctor.doc_string(&rt), "Circle::Circle(int, float)");
    }

    #[test]
    fn test_doc_string_without_metadata() {
        let rt = StubRuntime::concrete("Circle");
        let ctor = ClassConstructor::resolve(&rt, Scope::from_raw(1));
        assert_eq!(ctor.doc_string(&rt), "Circle::Circle()");
    }
}
