//! Fixture Context Capability and its realizations.

use super::clock::{wall_millis, MockClock};
use super::types::{Deep, Nested, Relay};
use corridor_core::{Address, Capability};
use std::sync::Arc;

/// Sentinel time returned by [`Mock`].
pub const DISTANT_PAST: i64 = i64::MIN;

/// Dependencies visible to fixture dependents.
pub trait World: Send + Sync {
    fn name(&self) -> &'static str;
    /// Unix milliseconds.
    fn now(&self) -> i64;
    fn nested(&self) -> Nested;
    fn deep(&self) -> Deep;
    fn relay(&self) -> Relay;
}

impl Capability for dyn World {
    fn production() -> Arc<Self> {
        Arc::new(Live)
    }
}

/// Production realization: wall-clock time.
pub struct Live;

impl World for Live {
    fn name(&self) -> &'static str {
        "live"
    }

    fn now(&self) -> i64 {
        wall_millis()
    }

    fn nested(&self) -> Nested {
        Nested::default()
    }

    fn deep(&self) -> Deep {
        Deep::default()
    }

    fn relay(&self) -> Relay {
        Relay
    }
}

/// Mock realization: a fixed sentinel in the distant past.
pub struct Mock;

impl World for Mock {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn now(&self) -> i64 {
        DISTANT_PAST
    }

    fn nested(&self) -> Nested {
        Nested::default()
    }

    fn deep(&self) -> Deep {
        Deep::default()
    }

    fn relay(&self) -> Relay {
        Relay
    }
}

/// Per-test realization driven by a [`MockClock`].
pub struct Clocked {
    clock: MockClock,
}

impl Clocked {
    pub fn new(clock: MockClock) -> Self {
        Self { clock }
    }
}

impl World for Clocked {
    fn name(&self) -> &'static str {
        "clocked"
    }

    fn now(&self) -> i64 {
        self.clock.now()
    }

    fn nested(&self) -> Nested {
        Nested::default()
    }

    fn deep(&self) -> Deep {
        Deep::default()
    }

    fn relay(&self) -> Relay {
        Relay
    }
}

/// Which realization a scenario step binds.
#[derive(Debug, Clone)]
pub enum WorldKind {
    Live,
    Mock,
    Clocked(MockClock),
}

impl WorldKind {
    pub fn build(&self) -> Arc<dyn World> {
        match self {
            WorldKind::Live => Arc::new(Live),
            WorldKind::Mock => Arc::new(Mock),
            WorldKind::Clocked(clock) => Arc::new(Clocked::new(clock.clone())),
        }
    }
}

pub fn mock() -> Arc<dyn World> {
    Arc::new(Mock)
}

// Addresses

pub fn name() -> Address<dyn World, &'static str> {
    Address::leaf("name", |w| w.name())
}

pub fn now() -> Address<dyn World, i64> {
    Address::leaf("now", |w| w.now())
}

pub fn nested() -> Address<dyn World, Nested> {
    Address::instance("nested", |w| w.nested())
}

pub fn deep() -> Address<dyn World, Deep> {
    Address::instance("deep", |w| w.deep())
}

pub fn relay() -> Address<dyn World, Relay> {
    Address::singleton("relay", |w| w.relay())
}
