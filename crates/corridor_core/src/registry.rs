//! Process-wide context bindings for singleton dependents.
//!
//! Each singleton dependent type owns one slot, keyed by its [`TypeId`],
//! holding the `Arc` of its active context. Slots are replaced whole under
//! a write lock, so readers on other threads see either the old or the new
//! context, never a mix. Writers are serialized; the last `bind` wins.

use crate::address::Address;
use crate::dependent::{Capability, HasStaticContext};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

type Bindings = HashMap<TypeId, Box<dyn Any + Send + Sync>>;

static BINDINGS: OnceLock<RwLock<Bindings>> = OnceLock::new();

fn bindings() -> &'static RwLock<Bindings> {
    BINDINGS.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Binds `context` for the owner type `S`, returning the previous binding.
///
/// A previous binding of a different context type is dropped and reported
/// as `None`.
pub fn bind<S: 'static, C: ?Sized + Send + Sync + 'static>(context: Arc<C>) -> Option<Arc<C>> {
    tracing::debug!(owner = std::any::type_name::<S>(), "binding static context");
    let previous = bindings()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(TypeId::of::<S>(), Box::new(context));
    previous.and_then(|entry| entry.downcast::<Arc<C>>().ok().map(|boxed| *boxed))
}

/// The context bound for `S`, if any.
pub fn bound<S: 'static, C: ?Sized + Send + Sync + 'static>() -> Option<Arc<C>> {
    bindings()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&TypeId::of::<S>())
        .and_then(|entry| entry.downcast_ref::<Arc<C>>())
        .cloned()
}

/// The context bound for `S`, binding the result of `init` first if the
/// slot is empty.
///
/// `init` runs without the lock held. If another thread binds `S` in the
/// meantime, its context is kept and returned. A slot holding a context of
/// another type is left untouched; the fresh context is returned unbound.
pub fn bound_or_insert_with<S, C, F>(init: F) -> Arc<C>
where
    S: 'static,
    C: ?Sized + Send + Sync + 'static,
    F: FnOnce() -> Arc<C>,
{
    if let Some(context) = bound::<S, C>() {
        return context;
    }

    let context = init();
    let mut guard = bindings().write().unwrap_or_else(PoisonError::into_inner);
    if let Some(entry) = guard.get(&TypeId::of::<S>()) {
        return match entry.downcast_ref::<Arc<C>>() {
            Some(existing) => Arc::clone(existing),
            None => {
                tracing::warn!(
                    owner = std::any::type_name::<S>(),
                    "static slot holds another context type, not binding default"
                );
                context
            }
        };
    }

    tracing::debug!(owner = std::any::type_name::<S>(), "binding default static context");
    guard.insert(TypeId::of::<S>(), Box::new(Arc::clone(&context)));
    context
}

/// Removes the binding for `S`. Returns whether one existed.
pub fn unbind<S: 'static>() -> bool {
    tracing::debug!(owner = std::any::type_name::<S>(), "unbinding static context");
    bindings()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(&TypeId::of::<S>())
        .is_some()
}

/// Whether `S` currently has a binding.
pub fn is_bound<S: 'static>() -> bool {
    bindings()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .contains_key(&TypeId::of::<S>())
}

/// Handle onto the shared binding of the singleton dependent `S`.
///
/// Zero-sized; every handle for the same `S` sees the same binding.
pub struct StaticResolver<S, C: ?Sized> {
    _marker: PhantomData<(fn() -> S, fn() -> Arc<C>)>,
}

impl<S, C> StaticResolver<S, C>
where
    S: HasStaticContext<Context = C>,
    C: Capability + ?Sized,
{
    /// Creates a handle. Does not touch the binding.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// The active context, binding `S::default_context()` on first use.
    pub fn context(&self) -> Arc<C> {
        bound_or_insert_with::<S, C, _>(S::default_context)
    }

    /// Replaces the shared context for every caller in the process.
    pub fn apply(&self, context: Arc<C>) {
        bind::<S, C>(context);
    }

    /// Drops the binding so the next lookup starts from the default again.
    pub fn reset(&self) {
        unbind::<S>();
    }

    /// Resolves `address` against the shared context.
    pub fn resolve<D>(&self, address: &Address<C, D>) -> D {
        address.resolve_from(&self.context())
    }
}

impl<S, C> Default for StaticResolver<S, C>
where
    S: HasStaticContext<Context = C>,
    C: Capability + ?Sized,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, C: ?Sized> Clone for StaticResolver<S, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, C: ?Sized> Copy for StaticResolver<S, C> {}

impl<S, C: ?Sized> fmt::Debug for StaticResolver<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticResolver")
            .field("source", &std::any::type_name::<S>())
            .finish()
    }
}
