//! Capability traits that let a value opt into context resolution.
//!
//! A Context Capability is an ordinary trait listing the dependencies an
//! application offers (`fn now(&self) -> ...`). Resolution always happens
//! against the trait object (`dyn AppContext`), so production, mock and
//! per-test realizations are interchangeable behind the same `Arc`.

use crate::address::{Address, Resolution};
use crate::registry::StaticResolver;
use crate::resolver::Resolver;
use std::sync::Arc;

/// A Context Capability that knows its production realization.
///
/// Implement this for the capability's trait object so every dependent
/// targeting it can be constructed with a default resolver:
///
/// ```
/// use corridor_core::Capability;
/// use std::sync::Arc;
///
/// pub trait AppContext: Send + Sync {
///     fn greeting(&self) -> String;
/// }
///
/// struct Production;
///
/// impl AppContext for Production {
///     fn greeting(&self) -> String {
///         "hello".to_string()
///     }
/// }
///
/// impl Capability for dyn AppContext {
///     fn production() -> Arc<Self> {
///         Arc::new(Production)
///     }
/// }
///
/// assert_eq!(<dyn AppContext>::production().greeting(), "hello");
/// ```
pub trait Capability: Send + Sync + 'static {
    /// Returns a fresh production realization of this capability.
    fn production() -> Arc<Self>;
}

/// Marker for which resolution kind a dependent type uses.
///
/// Sealed: the only kinds are [`Instance`] and [`Singleton`].
pub trait ResolutionKind: sealed::Sealed {
    /// The runtime tag matching this marker.
    const KIND: Resolution;
}

/// Dependents that carry their resolver as a field.
#[derive(Debug, Clone, Copy)]
pub enum Instance {}

/// Dependents whose resolver is a process-wide binding keyed by type.
#[derive(Debug, Clone, Copy)]
pub enum Singleton {}

impl ResolutionKind for Instance {
    const KIND: Resolution = Resolution::Instance;
}

impl ResolutionKind for Singleton {
    const KIND: Resolution = Resolution::Singleton;
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Instance {}
    impl Sealed for super::Singleton {}
}

/// Declares which Context Capability a type resolves against.
///
/// `Kind` pins the type to exactly one resolution kind, so a type can
/// implement [`HasContext`] or [`HasStaticContext`] but never both.
pub trait ContextAware {
    /// The capability this type reads its dependencies from.
    type Context: Capability + ?Sized;

    /// Either [`Instance`] or [`Singleton`].
    type Kind: ResolutionKind;
}

/// Instance form: the dependent owns a [`Resolver`] field.
///
/// Use [`has_context!`](crate::has_context) to generate the impl for a
/// struct with a `resolver` field.
pub trait HasContext: ContextAware<Kind = Instance> + Sized {
    /// The resolver bound to this value.
    fn resolver(&self) -> &Resolver<Self, Self::Context>;

    /// Mutable access, used when rebinding.
    fn resolver_mut(&mut self) -> &mut Resolver<Self, Self::Context>;

    /// Performs an addressed lookup against the bound context.
    fn resolve<D>(&self, address: &Address<Self::Context, D>) -> D {
        self.resolver().resolve(address)
    }

    /// Returns this value rebound to `context`.
    ///
    /// Consumes `self`; clone first to keep the original bound to its
    /// prior context.
    fn rebind(mut self, context: Arc<Self::Context>) -> Self {
        self.resolver_mut().apply(context);
        self
    }
}

/// Singleton form: the resolver is shared process state keyed by the type.
///
/// Swapping the context of such a type affects every lookup against it,
/// from every thread, until it is swapped again.
pub trait HasStaticContext: ContextAware<Kind = Singleton> + Sized + 'static {
    /// Context used the first time the type is resolved without a binding.
    fn default_context() -> Arc<Self::Context> {
        <Self::Context as Capability>::production()
    }

    /// Handle onto the shared binding for this type.
    fn resolver() -> StaticResolver<Self, Self::Context> {
        StaticResolver::new()
    }

    /// Performs an addressed lookup against the shared binding.
    fn resolve<D>(address: &Address<Self::Context, D>) -> D {
        Self::resolver().resolve(address)
    }
}

/// Returns a copy of `value` whose resolver is bound to `context`.
///
/// The value passed in is consumed; callers that still need it bound to
/// its old context pass a clone.
pub fn with_context<T: HasContext>(value: T, context: Arc<T::Context>) -> T {
    value.rebind(context)
}

/// Rebinds the process-wide context of the singleton dependent `T`.
pub fn with_static_context<T: HasStaticContext>(context: Arc<T::Context>) {
    T::resolver().apply(context);
}

/// Implements [`ContextAware`] and [`HasContext`] for a struct holding a
/// [`Resolver`] field (named `resolver` unless given).
///
/// ```
/// use corridor_core::{has_context, Capability, HasContext, Resolver};
/// use std::sync::Arc;
///
/// pub trait Clock: Send + Sync {
///     fn ticks(&self) -> u64;
/// }
///
/// struct Fixed;
/// impl Clock for Fixed {
///     fn ticks(&self) -> u64 {
///         7
///     }
/// }
///
/// impl Capability for dyn Clock {
///     fn production() -> Arc<Self> {
///         Arc::new(Fixed)
///     }
/// }
///
/// #[derive(Clone, Default)]
/// struct Worker {
///     resolver: Resolver<Worker, dyn Clock>,
/// }
///
/// has_context!(Worker, dyn Clock);
///
/// let worker = Worker::default();
/// assert_eq!(worker.resolver().context().ticks(), 7);
/// ```
#[macro_export]
macro_rules! has_context {
    ($ty:ty, $ctx:ty) => {
        $crate::has_context!($ty, $ctx, resolver);
    };
    ($ty:ty, $ctx:ty, $field:ident) => {
        impl $crate::ContextAware for $ty {
            type Context = $ctx;
            type Kind = $crate::Instance;
        }

        impl $crate::HasContext for $ty {
            fn resolver(&self) -> &$crate::Resolver<Self, $ctx> {
                &self.$field
            }

            fn resolver_mut(&mut self) -> &mut $crate::Resolver<Self, $ctx> {
                &mut self.$field
            }
        }
    };
}

/// Implements [`ContextAware`] and [`HasStaticContext`] for a type whose
/// context lives in the process-wide registry.
#[macro_export]
macro_rules! has_static_context {
    ($ty:ty, $ctx:ty) => {
        impl $crate::ContextAware for $ty {
            type Context = $ctx;
            type Kind = $crate::Singleton;
        }

        impl $crate::HasStaticContext for $ty {}
    };
}
