//! Per-instance resolver holding the active context.

use crate::address::Address;
use crate::dependent::Capability;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Holder of the current context for the dependent `S`, resolving against
/// the capability `C`.
///
/// A resolver is created with its owner, usually through [`Default`],
/// which binds the capability's production realization. Cloning a resolver
/// shares the context instance rather than copying it.
///
/// # Examples
///
/// ```
/// use corridor_core::{Address, Capability, Resolver};
/// use std::sync::Arc;
///
/// pub trait Settings: Send + Sync {
///     fn region(&self) -> &'static str;
/// }
///
/// struct Live;
/// impl Settings for Live {
///     fn region(&self) -> &'static str {
///         "eu-west"
///     }
/// }
///
/// struct Local;
/// impl Settings for Local {
///     fn region(&self) -> &'static str {
///         "localhost"
///     }
/// }
///
/// impl Capability for dyn Settings {
///     fn production() -> Arc<Self> {
///         Arc::new(Live)
///     }
/// }
///
/// fn region() -> Address<dyn Settings, &'static str> {
///     Address::leaf("region", |s| s.region())
/// }
///
/// struct Owner;
///
/// let mut resolver: Resolver<Owner, dyn Settings> = Resolver::default();
/// assert_eq!(resolver.resolve(&region()), "eu-west");
///
/// resolver.apply(Arc::new(Local));
/// assert_eq!(resolver.resolve(&region()), "localhost");
/// ```
pub struct Resolver<S, C: ?Sized> {
    context: Arc<C>,
    _source: PhantomData<fn() -> S>,
}

impl<S, C: ?Sized> Resolver<S, C> {
    /// Creates a resolver bound to `context`.
    pub fn new(context: Arc<C>) -> Self {
        Self {
            context,
            _source: PhantomData,
        }
    }

    /// Replaces the held context. Every later lookup sees `context`.
    pub fn apply(&mut self, context: Arc<C>) {
        tracing::debug!(source = std::any::type_name::<S>(), "applying context");
        self.context = context;
    }

    /// The context instance currently bound.
    pub fn context(&self) -> &Arc<C> {
        &self.context
    }

    /// Resolves `address` against the bound context.
    pub fn resolve<D>(&self, address: &Address<C, D>) -> D {
        address.resolve_from(&self.context)
    }
}

impl<S, C: Capability + ?Sized> Default for Resolver<S, C> {
    fn default() -> Self {
        Self::new(C::production())
    }
}

impl<S, C: ?Sized> Clone for Resolver<S, C> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.context))
    }
}

// Manual Debug: the context is a trait object without a Debug bound.
impl<S, C: ?Sized> fmt::Debug for Resolver<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("source", &std::any::type_name::<S>())
            .field("context", &Arc::as_ptr(&self.context))
            .finish()
    }
}
