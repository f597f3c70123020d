use super::clock::wall_millis;
use super::contexts::World;
use super::runner::ScenarioRunner;
use anyhow::{bail, Result};
use corridor_core::HasContext;
use std::sync::Arc;

/// Declarative assertions on a scenario's root dependent
pub enum Assertion {
    // Realization
    RootName(&'static str),
    DeepName(&'static str),

    // Time as seen through the chain
    NestedNowEquals(i64),
    DeepNowEquals(i64),
    NestedNowIsWallClock,
    NestedNowIsClock,

    // Identity
    NestedSharesRootContext,
    DeepSharesRootContext,

    Custom(Box<dyn Fn(&ScenarioRunner) -> Result<()>>),
}

impl Assertion {
    /// Check this assertion against the runner state
    pub fn check(&self, runner: &ScenarioRunner) -> Result<()> {
        let root = runner.root();
        match self {
            Assertion::RootName(expected) => {
                let actual = root.name();
                if actual != *expected {
                    bail!("root resolved '{}', expected '{}'", actual, expected);
                }
            }
            Assertion::DeepName(expected) => {
                let actual = root.nested().deep().name();
                if actual != *expected {
                    bail!("deep resolved '{}', expected '{}'", actual, expected);
                }
            }
            Assertion::NestedNowEquals(expected) => {
                let actual = root.nested().now();
                if actual != *expected {
                    bail!("nested.now = {}, expected {}", actual, expected);
                }
            }
            Assertion::DeepNowEquals(expected) => {
                let actual = root.nested().deep().now();
                if actual != *expected {
                    bail!("nested.deep.now = {}, expected {}", actual, expected);
                }
            }
            Assertion::NestedNowIsWallClock => {
                let before = wall_millis();
                let actual = root.nested().now();
                let after = wall_millis();
                if actual < before || actual > after {
                    bail!("nested.now = {} outside [{}, {}]", actual, before, after);
                }
            }
            Assertion::NestedNowIsClock => {
                let expected = runner.clock().now();
                let actual = root.nested().now();
                if actual != expected {
                    bail!("nested.now = {}, clock reads {}", actual, expected);
                }
            }
            Assertion::NestedSharesRootContext => {
                let nested = root.nested();
                if !same_context(root.resolver().context(), nested.resolver().context()) {
                    bail!("nested holds a different context than its root");
                }
            }
            Assertion::DeepSharesRootContext => {
                let deep = root.nested().deep();
                if !same_context(root.resolver().context(), deep.resolver().context()) {
                    bail!("deep holds a different context than its root");
                }
            }
            Assertion::Custom(check) => check(runner)?,
        }
        Ok(())
    }
}

impl std::fmt::Debug for Assertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RootName(n) => write!(f, "RootName({:?})", n),
            Self::DeepName(n) => write!(f, "DeepName({:?})", n),
            Self::NestedNowEquals(t) => write!(f, "NestedNowEquals({})", t),
            Self::DeepNowEquals(t) => write!(f, "DeepNowEquals({})", t),
            Self::NestedNowIsWallClock => write!(f, "NestedNowIsWallClock"),
            Self::NestedNowIsClock => write!(f, "NestedNowIsClock"),
            Self::NestedSharesRootContext => write!(f, "NestedSharesRootContext"),
            Self::DeepSharesRootContext => write!(f, "DeepSharesRootContext"),
            Self::Custom(_) => write!(f, "Custom(<fn>)"),
        }
    }
}

/// Whether two resolvers hold the very same context instance.
pub fn same_context(a: &Arc<dyn World>, b: &Arc<dyn World>) -> bool {
    Arc::ptr_eq(a, b)
}
