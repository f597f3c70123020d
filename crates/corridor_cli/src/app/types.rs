//! Dependents of the demo application.

use super::api::{api_call, entrypoint, Api, Promise};
use super::context::{self, AppContext};
use chrono::{DateTime, Utc};
use corridor_core::{has_context, has_static_context, HasContext, HasStaticContext, Profile, Resolver};

/// Leaf-level dependent: reads the time from whatever context it is bound to.
#[derive(Debug, Clone, Default)]
pub struct Nested {
    resolver: Resolver<Nested, dyn AppContext>,
}

has_context!(Nested, dyn AppContext);

impl Nested {
    pub fn now(&self) -> DateTime<Utc> {
        self.resolve(&context::now())
    }

    pub fn profile(&self) -> Profile {
        self.resolve(&context::profile())
    }
}

/// Root dependent with a nested dependency.
#[derive(Debug, Clone, Default)]
pub struct AType {
    resolver: Resolver<AType, dyn AppContext>,
}

has_context!(AType, dyn AppContext);

impl AType {
    pub fn nested(&self) -> Nested {
        self.resolve(&context::nested())
    }

    /// Resolving the singleton rebinds `StaticType` to this value's context.
    pub fn shared(&self) -> StaticType {
        self.resolve(&context::shared())
    }
}

/// Dependent used without an instance; its context is process-wide.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticType;

has_static_context!(StaticType, dyn AppContext);

impl StaticType {
    pub fn nested() -> Nested {
        <Self as HasStaticContext>::resolve(&context::nested())
    }

    pub fn profile() -> Profile {
        <Self as HasStaticContext>::resolve(&context::profile())
    }
}

/// Screen-level dependent driving the endpoint pipeline.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    resolver: Resolver<Dashboard, dyn AppContext>,
}

has_context!(Dashboard, dyn AppContext);

impl Dashboard {
    pub fn api(&self) -> Api {
        self.resolve(&context::api())
    }

    /// Messages dispatched so far through this dashboard's context.
    pub fn messages(&self) -> Vec<String> {
        self.resolve(&context::store()).messages()
    }

    /// Walks entrypoint → users → first user → address.
    pub fn load_address(&self) -> Promise<String> {
        entrypoint().flat_map(api_call()).run(&self.api())
    }
}
