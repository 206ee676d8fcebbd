//! What the decision rules produce.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The strategy the engine recommends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Go to sleep now
    Sleep,
    /// Focused study block, then sleep
    StrategicCram,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strategy::Sleep => "Sleep",
            Strategy::StrategicCram => "Strategic Cram",
        };
        f.write_str(label)
    }
}

/// Why a strategy was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerdictReason {
    /// Too little time before the exam for study to pay off
    ShortWindow,
    /// Sleeping the whole time scores better and is a full night
    SleepDominates,
    /// No rule objected, so the study + sleep split wins
    SplitWins,
}

/// A rule's decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub strategy: Strategy,
    pub reason: VerdictReason,
    /// Name of the rule that decided
    pub rule: String,
}

impl Verdict {
    pub fn new(strategy: Strategy, reason: VerdictReason, rule: impl Into<String>) -> Self {
        Self {
            strategy,
            reason,
            rule: rule.into(),
        }
    }
}
