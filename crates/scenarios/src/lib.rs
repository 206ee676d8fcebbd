//! # Scenarios Crate
//!
//! This crate turns a student's input into the competing plans the engine
//! chooses between.
//!
//! ## Components
//!
//! ### Study Context
//! Derived once per input: blended confidence, hours until the exam and
//! the cognitive state factor (fatigue x time of day).
//!
//! ### Max Sleep Source
//! Go to bed now; every available hour minus the routine buffer is sleep.
//!
//! ### Strategic Split Source
//! Study for at most three productive hours, but only out of the time left
//! after protecting six hours of sleep; sleep the rest.
//!
//! ## Example Usage
//!
//! ```
//! use inputs::parse_student_input;
//! use scenarios::{build_study_context, MaxSleepSource, StrategicSplitSource};
//!
//! let input = parse_student_input("22:00", "09:00", 0.0, 50.0, &[0, 0, 0]).unwrap();
//! let context = build_study_context(&input);
//!
//! let max_sleep = MaxSleepSource::new().build(&context);
//! let split = StrategicSplitSource::new().build(&context);
//!
//! assert_eq!(max_sleep.boost(), 25.0);
//! assert_eq!(split.boost(), 40.0);
//! ```

// Public modules
pub mod types;
pub mod context;
pub mod benefit;
pub mod max_sleep;
pub mod strategic_split;

// Re-export commonly used types
pub use types::{ConfidenceBand, Scenario, ScenarioKind, ScenarioSet, StudyContext};
pub use context::build_study_context;
pub use benefit::{cram_benefit, sleep_benefit};
pub use max_sleep::MaxSleepSource;
pub use strategic_split::StrategicSplitSource;

/// Build both scenarios for a context
pub fn generate_scenarios(
    context: &StudyContext,
    max_sleep: &MaxSleepSource,
    strategic_split: &StrategicSplitSource,
) -> ScenarioSet {
    ScenarioSet {
        max_sleep: max_sleep.build(context),
        strategic_split: strategic_split.build(context),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inputs::parse_student_input;

    #[test]
    fn test_generate_scenarios() {
        let input = parse_student_input("22:00", "09:00", 0.0, 50.0, &[0, 0, 0]).unwrap();
        let context = build_study_context(&input);

        let set = generate_scenarios(
            &context,
            &MaxSleepSource::new(),
            &StrategicSplitSource::new(),
        );

        assert_eq!(set.max_sleep.kind, ScenarioKind::MaxSleep);
        assert_eq!(set.strategic_split.kind, ScenarioKind::StrategicSplit);
        assert_eq!(set.get(ScenarioKind::MaxSleep).boost(), 25.0);
        assert_eq!(set.get(ScenarioKind::StrategicSplit).boost(), 40.0);
    }

    #[test]
    fn test_source_defaults_match_new() {
        let context = build_study_context(
            &parse_student_input("20:00", "08:00", 3.0, 80.0, &[100, 67, 33]).unwrap(),
        );
        assert_eq!(
            MaxSleepSource::default().build(&context),
            MaxSleepSource::new().build(&context)
        );
        assert_eq!(
            StrategicSplitSource::default().build(&context),
            StrategicSplitSource::new().build(&context)
        );
    }
}
