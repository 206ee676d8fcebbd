//! Rule that prefers a full night of sleep when it scores better.

use crate::traits::DecisionRule;
use crate::verdict::{Strategy, Verdict, VerdictReason};
use scenarios::{ScenarioSet, StudyContext};

/// Default sleep the Max Sleep plan must reach before it can win
pub const DEFAULT_MIN_DOMINANT_SLEEP_HOURS: f64 = 6.0;

/// Recommends sleep when the Max Sleep plan beats the split outright.
///
/// ## Algorithm
/// Decide `Sleep` if both hold:
/// 1. Max Sleep boost is strictly greater than the Strategic Split boost
/// 2. Max Sleep gets at least `min_sleep_hours` of sleep
///
/// Ties go to the split.
pub struct SleepDominatesRule {
    min_sleep_hours: f64,
}

impl SleepDominatesRule {
    pub fn new(min_sleep_hours: f64) -> Self {
        Self { min_sleep_hours }
    }
}

impl Default for SleepDominatesRule {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DOMINANT_SLEEP_HOURS)
    }
}

impl DecisionRule for SleepDominatesRule {
    fn name(&self) -> &str {
        "SleepDominatesRule"
    }

    fn evaluate(&self, scenarios: &ScenarioSet, _context: &StudyContext) -> Option<Verdict> {
        let max_sleep = &scenarios.max_sleep;
        let dominates = max_sleep.boost() > scenarios.strategic_split.boost()
            && max_sleep.sleep_hours >= self.min_sleep_hours;

        dominates.then(|| {
            Verdict::new(Strategy::Sleep, VerdictReason::SleepDominates, self.name())
        })
    }
}
