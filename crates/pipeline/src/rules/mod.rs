//! Decision rule implementations.
//!
//! Rules are evaluated in order by the RulePipeline; the first one that
//! returns a verdict decides.

pub mod short_window;
pub mod sleep_dominates;

// Re-export for convenience
pub use short_window::ShortWindowRule;
pub use sleep_dominates::SleepDominatesRule;
