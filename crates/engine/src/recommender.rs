//! # Recommendation Engine
//!
//! This module coordinates the whole decision:
//! 1. Build the study context (confidence, available hours, cognitive state)
//! 2. Generate both scenarios (Max Sleep + Strategic Split)
//! 3. Run the decision rules
//! 4. Compute diagnostics for the chosen strategy
//! 5. Fill the templates and return the decision record
//!
//! Every step is pure; the engine holds configuration only and can be
//! shared freely between threads.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::record::{projected_boost, DecisionRecord};
use crate::templates::Recommendation;
use inputs::{parse_student_input, ClockTime, StudentInput};
use pipeline::rules::{ShortWindowRule, SleepDominatesRule};
use pipeline::{Diagnostics, RuleOutcome, RulePipeline, Strategy};
use scenarios::{
    build_study_context, generate_scenarios, MaxSleepSource, ScenarioKind, ScenarioSet,
    StrategicSplitSource, StudyContext,
};

/// Everything computed for one input, for explain output and tests
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub context: StudyContext,
    pub scenarios: ScenarioSet,
    pub outcome: RuleOutcome,
    pub recommendation: Recommendation,
    pub record: DecisionRecord,
}

/// Main engine that coordinates the decision pipeline
#[derive(Clone)]
pub struct RecommendationEngine {
    config: EngineConfig,
    max_sleep: MaxSleepSource,
    strategic_split: StrategicSplitSource,
    rule_pipeline: Arc<RulePipeline>,
}

impl RecommendationEngine {
    /// Create an engine with all components configured from `config`.
    pub fn new(config: EngineConfig) -> Self {
        let max_sleep = MaxSleepSource::new().with_routine_buffer(config.routine_buffer_hours);
        let strategic_split = StrategicSplitSource::new()
            .with_routine_buffer(config.routine_buffer_hours)
            .with_min_sleep(config.min_sleep_hours)
            .with_max_study(config.max_study_hours);
        let rule_pipeline = Arc::new(
            RulePipeline::new()
                .add_rule(ShortWindowRule::new(config.short_window_hours))
                .add_rule(SleepDominatesRule::new(config.dominant_sleep_hours)),
        );

        Self {
            config,
            max_sleep,
            strategic_split,
            rule_pipeline,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Main entry point: recommend a strategy for a validated input.
    pub fn recommend(&self, input: &StudentInput) -> DecisionRecord {
        self.evaluate(input).record
    }

    /// Parse raw form values and recommend.
    ///
    /// # Arguments
    /// * `current_time` / `exam_time` - `HH:MM` strings
    /// * `hours_studied_today` - non-negative hours
    /// * `slider_confidence` - 0 to 100
    /// * `quiz_scores` - exactly three of 0, 33, 67, 100
    pub fn recommend_from_raw(
        &self,
        current_time: &str,
        exam_time: &str,
        hours_studied_today: f64,
        slider_confidence: f64,
        quiz_scores: &[u32],
    ) -> Result<DecisionRecord> {
        let input = parse_student_input(
            current_time,
            exam_time,
            hours_studied_today,
            slider_confidence,
            quiz_scores,
        )?;
        Ok(self.recommend(&input))
    }

    /// Run the full pipeline and keep every intermediate result.
    #[instrument(skip(self, input), fields(current = %input.current_time, exam = %input.exam_time))]
    pub fn evaluate(&self, input: &StudentInput) -> Evaluation {
        let context = build_study_context(input);
        debug!(
            "Built study context: available {:.2}h, confidence {}, cognitive state {:.2}",
            context.available_hours, context.final_confidence, context.cognitive_state_factor
        );

        let scenarios = generate_scenarios(&context, &self.max_sleep, &self.strategic_split);
        debug!(
            "Generated scenarios: max sleep {:.1}, strategic split {:.1}",
            scenarios.max_sleep.boost(),
            scenarios.strategic_split.boost()
        );

        let outcome = self.rule_pipeline.decide(&scenarios, &context);
        let diagnostics = Diagnostics::compute(outcome.verdict.strategy, &scenarios, &context);
        let recommendation = self.recommendation(&outcome, &scenarios, &context, &diagnostics);
        let record = self.build_record(&recommendation, &outcome, &scenarios, diagnostics);

        info!(
            "Recommended {} (boost {}, decided by {})",
            record.decision, record.projected_boost, record.decided_by
        );

        Evaluation {
            context,
            scenarios,
            outcome,
            recommendation,
            record,
        }
    }

    /// Fill in the record from the rendered template and diagnostics
    fn build_record(
        &self,
        recommendation: &Recommendation,
        outcome: &RuleOutcome,
        scenarios: &ScenarioSet,
        diagnostics: Diagnostics,
    ) -> DecisionRecord {
        let strategy = outcome.verdict.strategy;
        let chosen = match strategy {
            Strategy::Sleep => ScenarioKind::MaxSleep,
            Strategy::StrategicCram => ScenarioKind::StrategicSplit,
        };

        DecisionRecord {
            decision: strategy,
            reasoning: recommendation.reasoning(),
            projected_boost: projected_boost(scenarios.get(chosen).boost()),
            action_plan: recommendation.action_plan(),
            science_note: recommendation.science_note(),
            decided_by: outcome.verdict.rule.clone(),
            diagnostics,
        }
    }

    /// Turn the verdict into a template variant with concrete times.
    ///
    /// Half of the routine buffer is spent winding down before bed, the
    /// other half after the alarm, so the alarm lands half a buffer before
    /// the exam whenever the plan fits in the available time.
    fn recommendation(
        &self,
        outcome: &RuleOutcome,
        scenarios: &ScenarioSet,
        context: &StudyContext,
        diagnostics: &Diagnostics,
    ) -> Recommendation {
        let wind_down = self.config.routine_buffer_hours / 2.0;

        match outcome.verdict.strategy {
            Strategy::Sleep => {
                let sleep_hours = scenarios.max_sleep.sleep_hours;
                let clocks = PlanClocks::schedule(context, 0.0, sleep_hours, wind_down);
                Recommendation::Sleep {
                    reason: outcome.verdict.reason,
                    available_hours: diagnostics.available_hours,
                    sleep_hours,
                    bedtime: clocks.bedtime,
                    alarm: clocks.alarm,
                    cognitive_state_percent: diagnostics.cognitive_state_percent,
                    adjusted_confidence: diagnostics.adjusted_confidence,
                }
            }
            Strategy::StrategicCram => {
                let split = &scenarios.strategic_split;
                let clocks =
                    PlanClocks::schedule(context, split.study_hours, split.sleep_hours, wind_down);
                Recommendation::StrategicCram {
                    available_hours: diagnostics.available_hours,
                    study_hours: split.study_hours,
                    sleep_hours: split.sleep_hours,
                    study_until: clocks.study_until,
                    bedtime: clocks.bedtime,
                    alarm: clocks.alarm,
                    cognitive_state_percent: diagnostics.cognitive_state_percent,
                    adjusted_confidence: diagnostics.adjusted_confidence,
                    confidence_band: context.confidence_band,
                }
            }
        }
    }
}

/// Wall-clock milestones of a plan
struct PlanClocks {
    study_until: ClockTime,
    bedtime: ClockTime,
    alarm: ClockTime,
}

impl PlanClocks {
    /// Lay out study, wind-down and sleep from the current time.
    ///
    /// The wind-down only takes what is left after study and sleep, and
    /// every clock is an offset from the current time rounded once, so no
    /// milestone lands after the exam.
    fn schedule(context: &StudyContext, study_hours: f64, sleep_hours: f64, wind_down: f64) -> Self {
        let spare = (context.available_hours - study_hours - sleep_hours).max(0.0);
        let wind_down = wind_down.max(0.0).min(spare);
        let now = context.current_time;

        Self {
            study_until: now.plus_hours(study_hours),
            bedtime: now.plus_hours(study_hours + wind_down),
            alarm: now.plus_hours(study_hours + wind_down + sleep_hours),
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Recommend with the default configuration
pub fn recommend(input: &StudentInput) -> DecisionRecord {
    RecommendationEngine::default().recommend(input)
}

/// Parse raw values and recommend with the default configuration
pub fn recommend_from_raw(
    current_time: &str,
    exam_time: &str,
    hours_studied_today: f64,
    slider_confidence: f64,
    quiz_scores: &[u32],
) -> Result<DecisionRecord> {
    RecommendationEngine::default().recommend_from_raw(
        current_time,
        exam_time,
        hours_studied_today,
        slider_confidence,
        quiz_scores,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use pipeline::VerdictReason;

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    fn input(now: &str, exam: &str, studied: f64, slider: f64, quiz: &[u32]) -> StudentInput {
        parse_student_input(now, exam, studied, slider, quiz).unwrap()
    }

    // ============================================================================
    // Unit Tests: recommend
    // ============================================================================

    #[test]
    fn test_late_night_low_confidence_crams() {
        let engine = RecommendationEngine::default();
        let record = engine.recommend(&input("22:00", "09:00", 0.0, 50.0, &[0, 0, 0]));

        assert_eq!(record.decision, Strategy::StrategicCram);
        assert_eq!(record.projected_boost, 40);
        assert_eq!(record.decided_by, pipeline::FALLBACK_RULE);
        assert_eq!(record.diagnostics.available_hours, 11.0);
        assert_eq!(record.diagnostics.adjusted_confidence, 15);
        assert_eq!(record.diagnostics.cognitive_state_percent, 50);
    }

    #[test]
    fn test_cram_plan_times() {
        let record = recommend(&input("22:00", "09:00", 0.0, 50.0, &[0, 0, 0]));

        // 3h study until 01:00, 30 min wind down, 7h sleep, alarm 30 min before the exam
        assert!(record.action_plan[1].contains("01:00"));
        assert!(record.action_plan[2].contains("01:30"));
        assert!(record.action_plan[3].contains("08:30"));
    }

    #[test]
    fn test_short_window_sleeps() {
        let evaluation = RecommendationEngine::default()
            .evaluate(&input("05:00", "09:00", 0.0, 50.0, &[0, 0, 0]));

        assert_eq!(evaluation.record.decision, Strategy::Sleep);
        assert_eq!(evaluation.outcome.verdict.reason, VerdictReason::ShortWindow);
        assert_eq!(evaluation.record.diagnostics.available_hours, 4.0);
        // Max Sleep gets 3h (-25), reported as zero
        assert_eq!(evaluation.record.projected_boost, 0);
        assert!(evaluation.record.reasoning.contains("4.0 hours"));
    }

    fn assert_clocks_before_exam(evaluation: &Evaluation) {
        let now = evaluation.context.current_time;
        let until_exam = now.minutes_until(evaluation.context.exam_time);
        for clock in evaluation.recommendation.clock_times() {
            assert!(
                now.minutes_until(clock) <= until_exam,
                "{} falls after the {} exam",
                clock,
                evaluation.context.exam_time
            );
        }
    }

    #[test]
    fn test_minutes_before_exam_stays_awake() {
        let engine = RecommendationEngine::default();
        let evaluation = engine.evaluate(&input("08:45", "09:00", 0.0, 50.0, &[0, 0, 0]));

        assert_eq!(evaluation.record.decision, Strategy::Sleep);
        assert_clocks_before_exam(&evaluation);
        let plan = &evaluation.record.action_plan;
        assert!(plan.iter().all(|step| !step.contains("09:15")));
        assert!(plan.iter().all(|step| !step.contains("0 hours")));
        assert!(plan[1].starts_with("Stay awake"));
    }

    #[test]
    fn test_exam_now_has_no_clock_after_exam() {
        let evaluation = RecommendationEngine::default()
            .evaluate(&input("09:00", "09:00", 0.0, 50.0, &[0, 0, 0]));

        assert_eq!(evaluation.record.decision, Strategy::Sleep);
        assert_clocks_before_exam(&evaluation);
        assert!(evaluation.record.action_plan.iter().all(|step| !step.contains("09:30")));
    }

    #[test]
    fn test_clocks_fit_with_large_routine_buffer() {
        let config = EngineConfig {
            routine_buffer_hours: 3.0,
            short_window_hours: 0.0,
            ..EngineConfig::default()
        };
        let engine = RecommendationEngine::new(config);
        for (now, exam) in [("08:00", "09:00"), ("03:00", "09:00"), ("22:00", "09:00")] {
            assert_clocks_before_exam(&engine.evaluate(&input(now, exam, 0.0, 50.0, &[0, 0, 0])));
        }
    }

    #[test]
    fn test_tie_without_study_time_skips_study() {
        // 6h window: both plans sleep 5h (+5), the tie goes to the split with no study
        let evaluation = RecommendationEngine::default()
            .evaluate(&input("03:00", "09:00", 0.0, 50.0, &[0, 0, 0]));

        assert_eq!(evaluation.scenarios.max_sleep.boost(), 5.0);
        assert_eq!(evaluation.scenarios.strategic_split.boost(), 5.0);
        assert_eq!(evaluation.scenarios.strategic_split.study_hours, 0.0);

        let record = &evaluation.record;
        assert_eq!(record.decision, Strategy::StrategicCram);
        assert_eq!(record.projected_boost, 5);
        assert_eq!(record.diagnostics.effective_study_hours, 0.0);
        assert!(record.action_plan[0].starts_with("Skip new study"));
        assert!(record.action_plan.iter().all(|step| !step.contains("0 hours")));
        assert!(record.action_plan.iter().all(|step| !step.contains("Stop at")));
        // 30 min wind down, 5h sleep, alarm 30 min before the exam
        assert!(record.action_plan[2].contains("03:30"));
        assert!(record.action_plan[3].contains("08:30"));
        assert_clocks_before_exam(&evaluation);
    }

    #[test]
    fn test_sleep_dominates_when_exhausted_and_confident() {
        let record = recommend(&input("23:00", "09:00", 5.0, 100.0, &[100, 100, 0]));

        assert_eq!(record.decision, Strategy::Sleep);
        assert_eq!(record.decided_by, "SleepDominatesRule");
        assert_eq!(record.projected_boost, 25);
        assert_eq!(record.diagnostics.effective_study_hours, 0.0);
    }

    #[test]
    fn test_custom_config_changes_decision() {
        // With a 12h short window, 11 available hours is "short"
        let config = EngineConfig {
            short_window_hours: 12.0,
            ..EngineConfig::default()
        };
        let record = RecommendationEngine::new(config)
            .recommend(&input("22:00", "09:00", 0.0, 50.0, &[0, 0, 0]));
        assert_eq!(record.decision, Strategy::Sleep);
        assert_eq!(record.decided_by, "ShortWindowRule");
    }

    #[test]
    fn test_recommend_from_raw_rejects_bad_input() {
        let err = recommend_from_raw("25:00", "09:00", 0.0, 50.0, &[0, 0, 0]).unwrap_err();
        assert!(matches!(err, EngineError::Input(_)));

        let err = recommend_from_raw("22:00", "09:00", 0.0, 50.0, &[0, 50, 0]).unwrap_err();
        assert!(matches!(err, EngineError::Input(_)));
    }

    #[test]
    fn test_engine_is_clone_and_shares_rules() {
        let engine = RecommendationEngine::default();
        let clone = engine.clone();
        let input = input("20:00", "08:00", 1.0, 60.0, &[33, 67, 33]);
        assert_eq!(engine.recommend(&input), clone.recommend(&input));
    }
}
