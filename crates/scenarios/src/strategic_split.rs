//! Strategic Split Source - Study, Then Sleep
//!
//! Builds the plan that spends a bounded block on focused review and the
//! rest asleep. Study only gets the hours left over after protecting a
//! minimum night of sleep, and never more than the productive maximum.
//!
//! ## Algorithm
//! 1. `study_hours = clamp(available - min_sleep - routine_buffer, 0, max_study)`
//! 2. `sleep_hours = max(0, available - study_hours - routine_buffer)`
//! 3. `boost = cram_benefit(study_hours) + sleep_benefit(sleep_hours)`

use crate::benefit::{cram_benefit, sleep_benefit};
use crate::max_sleep::DEFAULT_ROUTINE_BUFFER_HOURS;
use crate::types::{Scenario, ScenarioKind, StudyContext};
use tracing::{debug, instrument};

/// Default sleep protected before any study time is granted
pub const DEFAULT_MIN_SLEEP_HOURS: f64 = 6.0;

/// Default cap on productive study hours
pub const DEFAULT_MAX_STUDY_HOURS: f64 = 3.0;

/// Generates the "strategic study + sleep" scenario
#[derive(Debug, Clone)]
pub struct StrategicSplitSource {
    routine_buffer_hours: f64,

    /// Sleep that study time may never eat into
    min_sleep_hours: f64,

    /// Study beyond this is not productive
    max_study_hours: f64,
}

impl StrategicSplitSource {
    pub fn new() -> Self {
        Self {
            routine_buffer_hours: DEFAULT_ROUTINE_BUFFER_HOURS,
            min_sleep_hours: DEFAULT_MIN_SLEEP_HOURS,
            max_study_hours: DEFAULT_MAX_STUDY_HOURS,
        }
    }

    /// Configure the routine buffer (default: 1.0)
    pub fn with_routine_buffer(mut self, hours: f64) -> Self {
        self.routine_buffer_hours = hours;
        self
    }

    /// Configure the protected minimum sleep (default: 6.0)
    pub fn with_min_sleep(mut self, hours: f64) -> Self {
        self.min_sleep_hours = hours;
        self
    }

    /// Configure the productive study cap (default: 3.0)
    pub fn with_max_study(mut self, hours: f64) -> Self {
        self.max_study_hours = hours;
        self
    }

    #[instrument(skip(self, context), fields(available_hours = context.available_hours))]
    pub fn build(&self, context: &StudyContext) -> Scenario {
        let mut scenario = Scenario::new(ScenarioKind::StrategicSplit);

        let spare = context.available_hours - self.min_sleep_hours - self.routine_buffer_hours;
        scenario.study_hours = spare.max(0.0).min(self.max_study_hours.max(0.0));
        scenario.sleep_hours =
            (context.available_hours - scenario.study_hours - self.routine_buffer_hours).max(0.0);

        scenario.cram_benefit = cram_benefit(
            scenario.study_hours,
            context.cognitive_state_factor,
            context.confidence_band,
        );
        scenario.sleep_benefit = sleep_benefit(scenario.sleep_hours);

        debug!(
            "Strategic Split scenario: study {:.2}h (cram {:.1}), sleep {:.2}h (sleep {:.1})",
            scenario.study_hours,
            scenario.cram_benefit,
            scenario.sleep_hours,
            scenario.sleep_benefit
        );
        scenario
    }
}

impl Default for StrategicSplitSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ConfidenceBand;
    use inputs::ClockTime;

    fn context(available_hours: f64, factor: f64, band: ConfidenceBand) -> StudyContext {
        StudyContext {
            current_time: ClockTime::new(22, 0).unwrap(),
            exam_time: ClockTime::new(9, 0).unwrap(),
            final_confidence: 15,
            confidence_band: band,
            available_hours,
            fatigue_factor: 1.0,
            time_of_day_factor: factor,
            cognitive_state_factor: factor,
        }
    }

    #[test]
    fn test_split_late_night_low_confidence() {
        let scenario = StrategicSplitSource::new().build(&context(11.0, 0.5, ConfidenceBand::Low));

        assert_eq!(scenario.study_hours, 3.0);
        assert_eq!(scenario.sleep_hours, 7.0);
        assert_eq!(scenario.cram_benefit, 25.0);
        assert_eq!(scenario.sleep_benefit, 15.0);
        assert_eq!(scenario.boost(), 40.0);
    }

    #[test]
    fn test_split_caps_study_hours() {
        let scenario = StrategicSplitSource::new().build(&context(20.0, 1.0, ConfidenceBand::Neutral));
        assert_eq!(scenario.study_hours, 3.0);
        assert_eq!(scenario.sleep_hours, 16.0);
    }

    #[test]
    fn test_split_protects_min_sleep() {
        // 8h available: 8 - 6 - 1 = 1h of study, 6h of sleep
        let scenario = StrategicSplitSource::new().build(&context(8.0, 1.0, ConfidenceBand::Neutral));
        assert_eq!(scenario.study_hours, 1.0);
        assert_eq!(scenario.sleep_hours, 6.0);
        assert_eq!(scenario.boost(), 35.0);
    }

    #[test]
    fn test_split_without_spare_time_is_all_sleep() {
        let scenario = StrategicSplitSource::new().build(&context(5.0, 1.0, ConfidenceBand::Low));
        assert_eq!(scenario.study_hours, 0.0);
        assert_eq!(scenario.sleep_hours, 4.0);
        assert_eq!(scenario.cram_benefit, 0.0);
        assert_eq!(scenario.boost(), 5.0);
    }

    #[test]
    fn test_split_with_custom_limits() {
        let scenario = StrategicSplitSource::new()
            .with_min_sleep(7.0)
            .with_max_study(2.0)
            .build(&context(12.0, 1.0, ConfidenceBand::Neutral));
        assert_eq!(scenario.study_hours, 2.0);
        assert_eq!(scenario.sleep_hours, 9.0);
        assert_eq!(scenario.cram_benefit, 32.0);
    }
}
