//! Typed addresses into a Context Capability.
//!
//! An [`Address`] names one dependency of a capability `C` and carries a
//! reader `fn(&C) -> D` for it. The constructor used to build the address
//! decides how the value is resolved:
//!
//! - [`Address::leaf`]: the value is returned as read.
//! - [`Address::instance`]: the value is a [`HasContext`] dependent and is
//!   rebound to the resolving context before it is returned.
//! - [`Address::singleton`]: the value's type is a [`HasStaticContext`]
//!   dependent; its process-wide binding is swapped to the resolving
//!   context, then the value is read.
//!
//! Addresses are usually exposed as small functions next to the
//! capability, one per dependency:
//!
//! ```
//! use corridor_core::{Address, Resolution};
//!
//! pub trait AppContext: Send + Sync {
//!     fn retries(&self) -> u32;
//! }
//!
//! pub fn retries() -> Address<dyn AppContext, u32> {
//!     Address::leaf("retries", |ctx| ctx.retries())
//! }
//!
//! assert_eq!(retries().name(), "retries");
//! assert_eq!(retries().kind(), Resolution::Leaf);
//! ```

use crate::dependent::{HasContext, HasStaticContext};
use std::fmt;
use std::sync::Arc;

/// How an addressed value is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Plain value, returned verbatim.
    Leaf,
    /// Instance dependent, rebound to the resolving context.
    Instance,
    /// Singleton dependent, its shared binding swapped to the resolving context.
    Singleton,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resolution::Leaf => "leaf",
            Resolution::Instance => "instance",
            Resolution::Singleton => "singleton",
        };
        f.write_str(name)
    }
}

enum Binding<C: ?Sized, D> {
    Leaf,
    Instance(fn(&mut D, &Arc<C>)),
    Singleton(fn(&Arc<C>)),
}

impl<C: ?Sized, D> Clone for Binding<C, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized, D> Copy for Binding<C, D> {}

/// A typed reference to one named dependency of the capability `C`.
pub struct Address<C: ?Sized, D> {
    name: &'static str,
    read: fn(&C) -> D,
    binding: Binding<C, D>,
}

impl<C: ?Sized, D> Address<C, D> {
    /// Address of a plain value dependency.
    pub fn leaf(name: &'static str, read: fn(&C) -> D) -> Self {
        Self {
            name,
            read,
            binding: Binding::Leaf,
        }
    }

    /// Dependency name, used in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The resolution kind fixed when the address was built.
    pub fn kind(&self) -> Resolution {
        match self.binding {
            Binding::Leaf => Resolution::Leaf,
            Binding::Instance(_) => Resolution::Instance,
            Binding::Singleton(_) => Resolution::Singleton,
        }
    }

    /// Reads the addressed value out of `context`, propagating `context`
    /// into it when the address points at a dependent.
    pub(crate) fn resolve_from(&self, context: &Arc<C>) -> D {
        tracing::trace!(address = self.name, kind = %self.kind(), "resolving dependency");
        match self.binding {
            Binding::Leaf => (self.read)(context.as_ref()),
            Binding::Instance(rebind) => {
                let mut value = (self.read)(context.as_ref());
                rebind(&mut value, context);
                value
            }
            Binding::Singleton(rebind) => {
                rebind(context);
                (self.read)(context.as_ref())
            }
        }
    }
}

impl<C: ?Sized, D> Address<C, D>
where
    D: HasContext<Context = C>,
{
    /// Address of a dependency that is itself an instance dependent.
    ///
    /// The returned value observes the same context instance as the
    /// resolver that looked it up, regardless of what the context
    /// realization stored in it.
    pub fn instance(name: &'static str, read: fn(&C) -> D) -> Self {
        Self {
            name,
            read,
            binding: Binding::Instance(rebind_instance::<D>),
        }
    }
}

impl<C: ?Sized, D> Address<C, D>
where
    D: HasStaticContext<Context = C>,
{
    /// Address of a dependency whose type is a singleton dependent.
    ///
    /// Resolving it rebinds the type's process-wide context.
    pub fn singleton(name: &'static str, read: fn(&C) -> D) -> Self {
        Self {
            name,
            read,
            binding: Binding::Singleton(rebind_singleton::<D>),
        }
    }
}

impl<C: ?Sized, D> Clone for Address<C, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized, D> Copy for Address<C, D> {}

impl<C: ?Sized, D> fmt::Debug for Address<C, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Address")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .finish()
    }
}

fn rebind_instance<D: HasContext>(value: &mut D, context: &Arc<D::Context>) {
    value.resolver_mut().apply(Arc::clone(context));
}

fn rebind_singleton<D: HasStaticContext>(context: &Arc<D::Context>) {
    D::resolver().apply(Arc::clone(context));
}
