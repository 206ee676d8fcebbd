//! Rule that forces sleep when the exam is close.
//!
//! With less than a few hours left, there is no split that protects
//! enough sleep, so study is never recommended.

use crate::traits::DecisionRule;
use crate::verdict::{Strategy, Verdict, VerdictReason};
use scenarios::{ScenarioSet, StudyContext};

/// Default threshold below which sleep is always recommended
pub const DEFAULT_SHORT_WINDOW_HOURS: f64 = 5.0;

/// Recommends sleep whenever `available_hours < min_hours`.
pub struct ShortWindowRule {
    min_hours: f64,
}

impl ShortWindowRule {
    /// Create a new ShortWindowRule.
    ///
    /// # Arguments
    /// * `min_hours` - Available hours needed before study is considered (typically 5.0)
    pub fn new(min_hours: f64) -> Self {
        Self { min_hours }
    }
}

impl Default for ShortWindowRule {
    fn default() -> Self {
        Self::new(DEFAULT_SHORT_WINDOW_HOURS)
    }
}

impl DecisionRule for ShortWindowRule {
    fn name(&self) -> &str {
        "ShortWindowRule"
    }

    fn evaluate(&self, _scenarios: &ScenarioSet, context: &StudyContext) -> Option<Verdict> {
        (context.available_hours < self.min_hours).then(|| {
            Verdict::new(Strategy::Sleep, VerdictReason::ShortWindow, self.name())
        })
    }
}
