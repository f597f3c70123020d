//! The demo application's Context Capability and its realizations.

use super::api::{Api, MockConnection, ServerConnection, Store};
use super::types::{Nested, StaticType};
use chrono::{DateTime, Utc};
use corridor_core::{Address, Capability, Profile};
use std::sync::Arc;

/// Sentinel returned for "now" by the mock realization.
pub const DISTANT_PAST: DateTime<Utc> = DateTime::<Utc>::MIN_UTC;

/// Dependencies available to every type in the demo application.
pub trait AppContext: Send + Sync {
    /// Realization name, for reporting.
    fn profile(&self) -> Profile;
    /// Current time as this realization sees it.
    fn now(&self) -> DateTime<Utc>;
    /// A fresh nested dependent; resolution rebinds it to this context.
    fn nested(&self) -> Nested;
    /// The singleton dependent; resolution swaps its shared binding.
    fn shared(&self) -> StaticType;
    /// API client over this realization's connection.
    fn api(&self) -> Api;
    /// Log of dispatched messages, shared by everything bound to this context.
    fn store(&self) -> Store;
}

impl Capability for dyn AppContext {
    fn production() -> Arc<Self> {
        Arc::new(DefaultContext::new())
    }
}

/// Realization for the running application.
#[derive(Debug, Default)]
pub struct DefaultContext {
    store: Store,
}

impl DefaultContext {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AppContext for DefaultContext {
    fn profile(&self) -> Profile {
        Profile::Production
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn nested(&self) -> Nested {
        Nested::default()
    }

    fn shared(&self) -> StaticType {
        StaticType
    }

    fn api(&self) -> Api {
        Api::new(Arc::new(ServerConnection))
    }

    fn store(&self) -> Store {
        self.store.clone()
    }
}

/// Deterministic realization: fixed time, mock connection.
#[derive(Debug, Default)]
pub struct MockContext {
    store: Store,
}

impl MockContext {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AppContext for MockContext {
    fn profile(&self) -> Profile {
        Profile::Mock
    }

    fn now(&self) -> DateTime<Utc> {
        DISTANT_PAST
    }

    fn nested(&self) -> Nested {
        Nested::default()
    }

    fn shared(&self) -> StaticType {
        StaticType
    }

    fn api(&self) -> Api {
        Api::new(Arc::new(MockConnection))
    }

    fn store(&self) -> Store {
        self.store.clone()
    }
}

/// Builds the realization named by `profile`.
pub fn for_profile(profile: Profile) -> Arc<dyn AppContext> {
    match profile {
        Profile::Production => Arc::new(DefaultContext::new()),
        Profile::Mock => Arc::new(MockContext::new()),
    }
}

// Addresses

pub fn profile() -> Address<dyn AppContext, Profile> {
    Address::leaf("profile", |ctx| ctx.profile())
}

pub fn now() -> Address<dyn AppContext, DateTime<Utc>> {
    Address::leaf("now", |ctx| ctx.now())
}

pub fn nested() -> Address<dyn AppContext, Nested> {
    Address::instance("nested", |ctx| ctx.nested())
}

pub fn shared() -> Address<dyn AppContext, StaticType> {
    Address::singleton("shared", |ctx| ctx.shared())
}

pub fn api() -> Address<dyn AppContext, Api> {
    Address::instance("api", |ctx| ctx.api())
}

pub fn store() -> Address<dyn AppContext, Store> {
    Address::leaf("store", |ctx| ctx.store())
}
