//! Shared types for scenario generation.
//!
//! - `StudyContext`: everything derived from the input once, up front
//! - `ConfidenceBand`: which cramming multiplier applies
//! - `Scenario` / `ScenarioSet`: the competing plans and their scores

use inputs::ClockTime;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Confidence
// =============================================================================

/// Blended confidence at or below this is "low"
pub const LOW_CONFIDENCE_MAX: u32 = 35;

/// Blended confidence at or above this is "high"
pub const HIGH_CONFIDENCE_MIN: u32 = 75;

/// Coarse confidence level used to scale the value of cramming.
///
/// Low confidence means there is more left to gain from a last review;
/// high confidence means the material is mostly known already.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceBand {
    Low,
    Neutral,
    High,
}

impl ConfidenceBand {
    pub fn from_confidence(final_confidence: u32) -> Self {
        if final_confidence <= LOW_CONFIDENCE_MAX {
            ConfidenceBand::Low
        } else if final_confidence >= HIGH_CONFIDENCE_MIN {
            ConfidenceBand::High
        } else {
            ConfidenceBand::Neutral
        }
    }

    /// Multiplier applied to the cramming benefit
    pub fn cram_multiplier(self) -> f64 {
        match self {
            ConfidenceBand::Low => 1.25,
            ConfidenceBand::Neutral => 1.0,
            ConfidenceBand::High => 0.75,
        }
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConfidenceBand::Low => "low",
            ConfidenceBand::Neutral => "neutral",
            ConfidenceBand::High => "high",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Study Context
// =============================================================================

/// Quantities derived from one `StudentInput`.
///
/// Built once per recommendation by
/// [`build_study_context`](crate::context::build_study_context) so the
/// scenario sources and decision rules never recompute them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyContext {
    pub current_time: ClockTime,
    pub exam_time: ClockTime,

    /// `round(0.7 * quiz_total + 0.3 * slider)`, unclamped
    pub final_confidence: u32,
    pub confidence_band: ConfidenceBand,

    /// Hours until the exam, in `[0, 24)`
    pub available_hours: f64,

    pub fatigue_factor: f64,
    pub time_of_day_factor: f64,
    /// `fatigue_factor * time_of_day_factor`
    pub cognitive_state_factor: f64,
}

// =============================================================================
// Scenarios
// =============================================================================

/// Which plan a scenario describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Go to bed now and sleep as long as possible
    MaxSleep,
    /// Study for a bounded block, then sleep
    StrategicSplit,
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScenarioKind::MaxSleep => "Max Sleep",
            ScenarioKind::StrategicSplit => "Strategic Split",
        };
        f.write_str(label)
    }
}

/// One candidate plan for the remaining time, with its projected benefit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub study_hours: f64,
    pub sleep_hours: f64,
    pub cram_benefit: f64,
    pub sleep_benefit: f64,
}

impl Scenario {
    pub fn new(kind: ScenarioKind) -> Self {
        Self {
            kind,
            study_hours: 0.0,
            sleep_hours: 0.0,
            cram_benefit: 0.0,
            sleep_benefit: 0.0,
        }
    }

    /// Total projected score change for this plan (may be negative)
    pub fn boost(&self) -> f64 {
        self.cram_benefit + self.sleep_benefit
    }
}

/// Both competing plans for one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    pub max_sleep: Scenario,
    pub strategic_split: Scenario,
}

impl ScenarioSet {
    pub fn get(&self, kind: ScenarioKind) -> &Scenario {
        match kind {
            ScenarioKind::MaxSleep => &self.max_sleep,
            ScenarioKind::StrategicSplit => &self.strategic_split,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_band_boundaries() {
        assert_eq!(ConfidenceBand::from_confidence(0), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::from_confidence(35), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::from_confidence(36), ConfidenceBand::Neutral);
        assert_eq!(ConfidenceBand::from_confidence(74), ConfidenceBand::Neutral);
        assert_eq!(ConfidenceBand::from_confidence(75), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_confidence(240), ConfidenceBand::High);
    }

    #[test]
    fn test_scenario_boost_sums_benefits() {
        let mut scenario = Scenario::new(ScenarioKind::StrategicSplit);
        scenario.cram_benefit = 25.0;
        scenario.sleep_benefit = -25.0;
        assert_eq!(scenario.boost(), 0.0);
    }
}
