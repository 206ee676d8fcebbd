//! What-if sweep over start times.
//!
//! Re-evaluates one input for every start time from its current time up to
//! the exam, in fixed steps. Each point is an independent evaluation, so the
//! series is computed in parallel with rayon and returned in time order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{EngineError, Result};
use crate::recommender::RecommendationEngine;
use inputs::{ClockTime, StudentInput};
use pipeline::Strategy;

/// One evaluation in a sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub start_time: ClockTime,
    pub available_hours: f64,
    pub decision: Strategy,
    pub projected_boost: u32,
}

impl RecommendationEngine {
    /// Evaluate `input` starting every `step_minutes` until the exam.
    ///
    /// The first point is the input's own current time. An input whose
    /// current time equals the exam time yields that single point.
    #[instrument(skip(self, input), fields(current = %input.current_time, exam = %input.exam_time))]
    pub fn sweep(&self, input: &StudentInput, step_minutes: u32) -> Result<Vec<SweepPoint>> {
        if step_minutes == 0 {
            return Err(EngineError::InvalidSweepStep(step_minutes));
        }

        let total_minutes = input.current_time.minutes_until(input.exam_time);
        let offsets: Vec<u32> = (0..total_minutes.max(1))
            .step_by(step_minutes as usize)
            .collect();
        debug!("Sweeping {} start times", offsets.len());

        let points: Vec<SweepPoint> = offsets
            .par_iter()
            .map(|&offset| {
                let start_time = input.current_time.plus_minutes(offset);
                let record = self.recommend(&input.starting_at(start_time));
                SweepPoint {
                    start_time,
                    available_hours: record.diagnostics.available_hours,
                    decision: record.decision,
                    projected_boost: record.projected_boost,
                }
            })
            .collect();

        Ok(points)
    }
}
