//! Core traits for the decision pipeline.
//!
//! This module defines the DecisionRule trait that allows composable,
//! ordered rules to be applied to a scenario set.

use crate::verdict::Verdict;
use scenarios::{ScenarioSet, StudyContext};

/// Core trait for deciding between scenarios.
///
/// All rules must implement this trait to be used in the RulePipeline.
///
/// ## Design Note
/// - `Send + Sync` allows one pipeline to be shared across threads
/// - A rule either decides (`Some`) or abstains (`None`) and lets the next
///   rule look at the scenarios
pub trait DecisionRule: Send + Sync {
    /// Returns the name of this rule (for logging/debugging)
    fn name(&self) -> &str;

    /// Evaluate this rule against both scenarios.
    ///
    /// # Arguments
    /// * `scenarios` - The competing plans with their projected boosts
    /// * `context` - Derived input (available hours, confidence, ...)
    ///
    /// # Returns
    /// * `Some(Verdict)` - This rule decides the strategy
    /// * `None` - No opinion, defer to the next rule
    fn evaluate(&self, scenarios: &ScenarioSet, context: &StudyContext) -> Option<Verdict>;
}
