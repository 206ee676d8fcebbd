//! Diagnostic figures reported alongside a decision.
//!
//! This module computes the rounded numbers a front end shows next to the
//! recommendation: hours, percentages and both scenario breakdowns.

use crate::verdict::Strategy;
use scenarios::{ConfidenceBand, Scenario, ScenarioKind, ScenarioSet, StudyContext};
use serde::{Deserialize, Serialize};

/// Truncate to one decimal place: `floor(x * 10) / 10`
pub fn truncate_tenths(value: f64) -> f64 {
    (value * 10.0).floor() / 10.0
}

/// Round to one decimal place
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A 0..1 factor as a whole percentage
pub fn to_percent(fraction: f64) -> u32 {
    (fraction * 100.0).round().max(0.0) as u32
}

/// Rounded view of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioBreakdown {
    pub kind: ScenarioKind,
    /// Truncated to one decimal
    pub study_hours: f64,
    /// Truncated to one decimal
    pub sleep_hours: f64,
    /// Rounded to one decimal
    pub cram_benefit: f64,
    /// Rounded to one decimal
    pub sleep_benefit: f64,
    /// Rounded to one decimal, may be negative
    pub boost: f64,
}

impl From<&Scenario> for ScenarioBreakdown {
    fn from(scenario: &Scenario) -> Self {
        Self {
            kind: scenario.kind,
            study_hours: truncate_tenths(scenario.study_hours),
            sleep_hours: truncate_tenths(scenario.sleep_hours),
            cram_benefit: round_tenths(scenario.cram_benefit),
            sleep_benefit: round_tenths(scenario.sleep_benefit),
            boost: round_tenths(scenario.boost()),
        }
    }
}

/// Figures reported with every decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Hours until the exam, truncated to one decimal
    pub available_hours: f64,

    /// Study hours of the chosen plan scaled by the cognitive state factor,
    /// truncated to one decimal. Zero when the decision is to sleep.
    pub effective_study_hours: f64,

    /// Cognitive state factor as a whole percentage
    pub cognitive_state_percent: u32,

    /// Blended confidence (can exceed 100)
    pub adjusted_confidence: u32,
    pub confidence_band: ConfidenceBand,

    pub max_sleep: ScenarioBreakdown,
    pub strategic_split: ScenarioBreakdown,
}

impl Diagnostics {
    /// Compute diagnostics for a decided strategy.
    pub fn compute(strategy: Strategy, scenarios: &ScenarioSet, context: &StudyContext) -> Self {
        let study_hours = match strategy {
            Strategy::Sleep => 0.0,
            Strategy::StrategicCram => scenarios.strategic_split.study_hours,
        };

        Self {
            available_hours: truncate_tenths(context.available_hours),
            effective_study_hours: truncate_tenths(study_hours * context.cognitive_state_factor),
            cognitive_state_percent: to_percent(context.cognitive_state_factor),
            adjusted_confidence: context.final_confidence,
            confidence_band: context.confidence_band,
            max_sleep: ScenarioBreakdown::from(&scenarios.max_sleep),
            strategic_split: ScenarioBreakdown::from(&scenarios.strategic_split),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inputs::parse_student_input;
    use scenarios::{build_study_context, generate_scenarios, MaxSleepSource, StrategicSplitSource};

    #[test]
    fn test_truncate_tenths() {
        assert_eq!(truncate_tenths(2.0), 2.0);
        assert_eq!(truncate_tenths(4.99), 4.9);
        assert_eq!(truncate_tenths(100.0 / 60.0), 1.6);
        assert_eq!(truncate_tenths(0.0), 0.0);
    }

    #[test]
    fn test_to_percent() {
        assert_eq!(to_percent(0.5), 50);
        assert_eq!(to_percent(0.2), 20);
        assert_eq!(to_percent(1.0), 100);
        assert_eq!(to_percent(0.6 * 0.5), 30);
    }

    #[test]
    fn test_diagnostics_for_cram() {
        let input = parse_student_input("22:00", "09:00", 0.0, 50.0, &[0, 0, 0]).unwrap();
        let context = build_study_context(&input);
        let scenarios =
            generate_scenarios(&context, &MaxSleepSource::new(), &StrategicSplitSource::new());

        let diagnostics = Diagnostics::compute(Strategy::StrategicCram, &scenarios, &context);

        assert_eq!(diagnostics.available_hours, 11.0);
        assert_eq!(diagnostics.effective_study_hours, 1.5);
        assert_eq!(diagnostics.cognitive_state_percent, 50);
        assert_eq!(diagnostics.adjusted_confidence, 15);
        assert_eq!(diagnostics.max_sleep.boost, 25.0);
        assert_eq!(diagnostics.strategic_split.boost, 40.0);
        assert_eq!(diagnostics.strategic_split.study_hours, 3.0);
    }

    #[test]
    fn test_diagnostics_for_sleep_has_no_study() {
        let input = parse_student_input("05:00", "09:00", 0.0, 50.0, &[0, 0, 0]).unwrap();
        let context = build_study_context(&input);
        let scenarios =
            generate_scenarios(&context, &MaxSleepSource::new(), &StrategicSplitSource::new());

        let diagnostics = Diagnostics::compute(Strategy::Sleep, &scenarios, &context);

        assert_eq!(diagnostics.available_hours, 4.0);
        assert_eq!(diagnostics.effective_study_hours, 0.0);
        assert_eq!(diagnostics.max_sleep.sleep_hours, 3.0);
        assert_eq!(diagnostics.max_sleep.boost, -25.0);
    }
}
