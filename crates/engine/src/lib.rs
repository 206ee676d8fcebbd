//! # Engine Crate
//!
//! Orchestrates a full sleep-or-cram recommendation.
//!
//! ## Flow
//! 1. Validate the input (`inputs`)
//! 2. Build the study context and both scenarios (`scenarios`)
//! 3. Decide with the rule pipeline and compute diagnostics (`pipeline`)
//! 4. Render the chosen template into a `DecisionRecord`
//!
//! ## Example Usage
//!
//! ```
//! use engine::recommend_from_raw;
//! use pipeline::Strategy;
//!
//! let record = recommend_from_raw("22:00", "09:00", 0.0, 50.0, &[0, 0, 0]).unwrap();
//! assert_eq!(record.decision, Strategy::StrategicCram);
//! assert_eq!(record.projected_boost, 40);
//! ```

pub mod error;
pub mod config;
pub mod templates;
pub mod record;
pub mod recommender;
pub mod sweep;

pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use record::{projected_boost, DecisionRecord};
pub use recommender::{recommend, recommend_from_raw, Evaluation, RecommendationEngine};
pub use sweep::SweepPoint;
pub use templates::Recommendation;
