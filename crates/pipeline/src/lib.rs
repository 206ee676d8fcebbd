//! Pipeline for deciding between sleep and study scenarios.
//!
//! This crate provides:
//! - DecisionRule trait and implementations for choosing a strategy
//! - RulePipeline for composing rules in priority order
//! - Diagnostics for the rounded figures reported with a decision
//!
//! ## Architecture
//! The pipeline processes a scenario set in stages:
//! 1. Rules are evaluated in order; the first verdict wins
//! 2. Without a verdict, the Strategic Split is chosen
//! 3. Diagnostics are computed for the chosen strategy
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{Diagnostics, RulePipeline};
//! use pipeline::rules::*;
//!
//! let pipeline = RulePipeline::new()
//!     .add_rule(ShortWindowRule::new(5.0))
//!     .add_rule(SleepDominatesRule::new(6.0));
//!
//! let outcome = pipeline.decide(&scenarios, &context);
//! let diagnostics = Diagnostics::compute(outcome.verdict.strategy, &scenarios, &context);
//! ```

pub mod verdict;
pub mod traits;
pub mod rules;
pub mod rule_pipeline;
pub mod diagnostics;

// Re-export main types
pub use verdict::{Strategy, Verdict, VerdictReason};
pub use traits::DecisionRule;
pub use rule_pipeline::{RuleOutcome, RulePipeline, RuleTrace, FALLBACK_RULE};
pub use diagnostics::{Diagnostics, ScenarioBreakdown};
