//! Max Sleep Source - Sleep Now
//!
//! Builds the plan that spends every available hour asleep, minus a fixed
//! buffer for the pre-sleep routine and waking up.
//!
//! ## Algorithm
//! 1. `sleep_hours = max(0, available_hours - routine_buffer)`
//! 2. `boost = sleep_benefit(sleep_hours)`

use crate::benefit::sleep_benefit;
use crate::types::{Scenario, ScenarioKind, StudyContext};
use tracing::{debug, instrument};

/// Default hours reserved for winding down and waking up
pub const DEFAULT_ROUTINE_BUFFER_HOURS: f64 = 1.0;

/// Generates the "sleep as long as possible" scenario
#[derive(Debug, Clone)]
pub struct MaxSleepSource {
    /// Hours not available for sleep (routine before bed and after waking)
    routine_buffer_hours: f64,
}

impl MaxSleepSource {
    pub fn new() -> Self {
        Self {
            routine_buffer_hours: DEFAULT_ROUTINE_BUFFER_HOURS,
        }
    }

    /// Configure the routine buffer (default: 1.0)
    pub fn with_routine_buffer(mut self, hours: f64) -> Self {
        self.routine_buffer_hours = hours;
        self
    }

    #[instrument(skip(self, context), fields(available_hours = context.available_hours))]
    pub fn build(&self, context: &StudyContext) -> Scenario {
        let mut scenario = Scenario::new(ScenarioKind::MaxSleep);
        scenario.sleep_hours = (context.available_hours - self.routine_buffer_hours).max(0.0);
        scenario.sleep_benefit = sleep_benefit(scenario.sleep_hours);

        debug!(
            "Max Sleep scenario: sleep {:.2}h, boost {:.1}",
            scenario.sleep_hours,
            scenario.boost()
        );
        scenario
    }
}

impl Default for MaxSleepSource {
    fn default() -> Self {
        Self::new()
    }
}
