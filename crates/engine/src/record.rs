//! The decision record returned for every recommendation.

use pipeline::{Diagnostics, Strategy};
use serde::{Deserialize, Serialize};

/// Final recommendation returned to the caller.
///
/// Plain data; identical inputs always produce identical records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub decision: Strategy,
    pub reasoning: String,
    /// Chosen plan's boost, rounded and never below zero
    pub projected_boost: u32,
    pub action_plan: Vec<String>,
    pub science_note: String,
    /// Name of the rule that made the decision
    pub decided_by: String,
    #[serde(flatten)]
    pub diagnostics: Diagnostics,
}

impl DecisionRecord {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Clamp a raw boost to the reported whole number
pub fn projected_boost(raw_boost: f64) -> u32 {
    raw_boost.round().max(0.0) as u32
}
