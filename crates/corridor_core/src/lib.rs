//! Corridor Core Library
//!
//! Context resolution for Rust values: a value declares which Context
//! Capability it needs and is later handed a concrete realization
//! (production, mock, per-test) without branching on which one it got.
//!
//! - A **Context Capability** is a trait listing named dependencies.
//! - A [`Resolver`] holds the active realization for one dependent.
//! - An [`Address`] is a typed lens into the capability.
//! - Looking up a dependency that is itself a dependent rebinds it to the
//!   same context instance, so a swapped context flows down nested chains.
//!
//! # Quick Start
//!
//! ```
//! use corridor_core::{has_context, with_context, Address, Capability, HasContext, Resolver};
//! use std::sync::Arc;
//!
//! // 1. The capability and its realizations
//! pub trait AppContext: Send + Sync {
//!     fn now(&self) -> u64;
//!     fn nested(&self) -> Nested;
//! }
//!
//! struct Live;
//! impl AppContext for Live {
//!     fn now(&self) -> u64 { 1_700_000_000 }
//!     fn nested(&self) -> Nested { Nested::default() }
//! }
//!
//! struct Mock;
//! impl AppContext for Mock {
//!     fn now(&self) -> u64 { 0 }
//!     fn nested(&self) -> Nested { Nested::default() }
//! }
//!
//! impl Capability for dyn AppContext {
//!     fn production() -> Arc<Self> { Arc::new(Live) }
//! }
//!
//! // 2. Dependents
//! #[derive(Clone, Default)]
//! pub struct Nested { resolver: Resolver<Nested, dyn AppContext> }
//! has_context!(Nested, dyn AppContext);
//!
//! #[derive(Clone, Default)]
//! pub struct AType { resolver: Resolver<AType, dyn AppContext> }
//! has_context!(AType, dyn AppContext);
//!
//! // 3. Addresses and accessors
//! fn now() -> Address<dyn AppContext, u64> {
//!     Address::leaf("now", |ctx| ctx.now())
//! }
//!
//! fn nested() -> Address<dyn AppContext, Nested> {
//!     Address::instance("nested", |ctx| ctx.nested())
//! }
//!
//! impl Nested {
//!     fn now(&self) -> u64 { self.resolve(&now()) }
//! }
//!
//! impl AType {
//!     fn nested(&self) -> Nested { self.resolve(&nested()) }
//! }
//!
//! // 4. Production by default, mock on demand, propagated to the child
//! assert_eq!(AType::default().nested().now(), 1_700_000_000);
//!
//! let mock: Arc<dyn AppContext> = Arc::new(Mock);
//! assert_eq!(with_context(AType::default(), mock).nested().now(), 0);
//! ```
//!
//! # Singletons
//!
//! Types accessed without an owning instance implement
//! [`HasStaticContext`]; their context lives in the process-wide
//! [`registry`] and is swapped with [`with_static_context`].

mod address;
mod config;
mod dependent;
mod error;
mod reader;
pub mod registry;
mod resolver;

pub use address::{Address, Resolution};
pub use config::{Config, LoggingConfig, Profile, CONFIG_FILE};
pub use dependent::{
    with_context, with_static_context, Capability, ContextAware, HasContext, HasStaticContext,
    Instance, ResolutionKind, Singleton,
};
pub use error::{CorridorError, Result};
pub use reader::{kleisli, Reader};
pub use registry::StaticResolver;
pub use resolver::Resolver;
