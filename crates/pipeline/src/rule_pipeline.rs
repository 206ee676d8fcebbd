//! The RulePipeline orchestrates multiple decision rules.
//!
//! This module provides the main RulePipeline struct that chains
//! rules together using the builder pattern.

use crate::rules::{ShortWindowRule, SleepDominatesRule};
use crate::traits::DecisionRule;
use crate::verdict::{Strategy, Verdict, VerdictReason};
use scenarios::{ScenarioSet, StudyContext};
use serde::{Deserialize, Serialize};
use tracing;

/// Rule name recorded when no rule decides
pub const FALLBACK_RULE: &str = "StrategicSplitDefault";

/// Whether a single rule fired during a decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTrace {
    pub rule: String,
    pub fired: bool,
}

/// The final verdict plus the per-rule trace that led to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub verdict: Verdict,
    pub trace: Vec<RuleTrace>,
}

/// Chains decision rules together into an ordered pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = RulePipeline::new()
///     .add_rule(ShortWindowRule::new(5.0))
///     .add_rule(SleepDominatesRule::new(6.0));
///
/// let outcome = pipeline.decide(&scenarios, &context);
/// ```
pub struct RulePipeline {
    rules: Vec<Box<dyn DecisionRule>>,
}

impl RulePipeline {
    /// Create a new empty RulePipeline.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The standard pipeline: short window first, then sleep dominance.
    pub fn standard() -> Self {
        Self::new()
            .add_rule(ShortWindowRule::default())
            .add_rule(SleepDominatesRule::default())
    }

    /// Add a rule to the pipeline (builder pattern).
    pub fn add_rule(mut self, rule: impl DecisionRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate the rules in order and return the first verdict.
    ///
    /// ## Algorithm
    /// 1. For each rule in order:
    ///    a. Evaluate it against the scenarios
    ///    b. Record whether it fired
    ///    c. Stop at the first verdict
    /// 2. If no rule fired, the Strategic Split wins
    ///
    /// Rules after the deciding one are not evaluated and do not appear
    /// in the trace.
    pub fn decide(&self, scenarios: &ScenarioSet, context: &StudyContext) -> RuleOutcome {
        let mut trace = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let verdict = rule.evaluate(scenarios, context);
            tracing::debug!(
                "Evaluated rule: {} (fired: {})",
                rule.name(),
                verdict.is_some()
            );
            trace.push(RuleTrace {
                rule: rule.name().to_string(),
                fired: verdict.is_some(),
            });

            if let Some(verdict) = verdict {
                return RuleOutcome { verdict, trace };
            }
        }

        tracing::debug!("No rule fired, falling back to {}", FALLBACK_RULE);
        RuleOutcome {
            verdict: Verdict::new(Strategy::StrategicCram, VerdictReason::SplitWins, FALLBACK_RULE),
            trace,
        }
    }
}

impl Default for RulePipeline {
    fn default() -> Self {
        Self::standard()
    }
}
