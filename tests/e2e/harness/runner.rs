use super::assertions::Assertion;
use super::clock::MockClock;
use super::contexts::{World, WorldKind};
use super::steps::ScenarioStep;
use super::types::AType;
use anyhow::{Context, Result};
use corridor_core::with_context;
use std::sync::Arc;
use std::time::Duration;

/// Fixed start for the scenario clock, 2023-11-14T22:13:20Z.
pub const CLOCK_START: i64 = 1_700_000_000_000;

/// Executes scenarios against a root `AType`
pub struct ScenarioRunner {
    root: AType,
    clock: MockClock,
    current_step: usize,
}

impl ScenarioRunner {
    /// Create a runner whose root starts on the production binding
    pub fn new() -> Self {
        Self {
            root: AType::default(),
            clock: MockClock::at(CLOCK_START),
            current_step: 0,
        }
    }

    pub fn root(&self) -> &AType {
        &self.root
    }

    pub fn clock(&self) -> &MockClock {
        &self.clock
    }

    /// Get current step number
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Execute all steps in sequence
    pub fn execute(&mut self, steps: &[ScenarioStep]) -> Result<()> {
        for (i, step) in steps.iter().enumerate() {
            self.current_step = i;
            self.execute_step(step)
                .with_context(|| format!("Step {}: {:?}", i, step))?;
        }
        Ok(())
    }

    fn execute_step(&mut self, step: &ScenarioStep) -> Result<()> {
        match step {
            ScenarioStep::Bind { world } => {
                self.bind(world.build());
                Ok(())
            }
            ScenarioStep::BindClocked => {
                self.bind(WorldKind::Clocked(self.clock.clone()).build());
                Ok(())
            }
            ScenarioStep::Advance { duration } => {
                self.clock.advance(*duration);
                Ok(())
            }
            ScenarioStep::AdvanceHours { hours } => {
                self.clock.advance(Duration::from_secs(hours * 3600));
                Ok(())
            }
            ScenarioStep::Assert { assertion } => self.handle_assertion(assertion),
        }
    }

    fn bind(&mut self, world: Arc<dyn World>) {
        self.root = with_context(self.root.clone(), world);
    }

    fn handle_assertion(&self, assertion: &Assertion) -> Result<()> {
        assertion.check(self)
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
