//! Build a StudyContext from a StudentInput
//!
//! Everything the scenario sources need is derived here once:
//! - Blended confidence and its band
//! - Hours available before the exam (with overnight wrap)
//! - The cognitive state factor (fatigue x time of day)

use crate::types::{ConfidenceBand, StudyContext};
use inputs::StudentInput;

/// Weight of the quiz total in the confidence blend
pub const QUIZ_WEIGHT: f64 = 0.7;

/// Weight of the self-reported slider in the confidence blend
pub const SLIDER_WEIGHT: f64 = 0.3;

/// Build the derived context for one input.
///
/// ## Algorithm
/// 1. `final_confidence = round(0.7 * quiz_total + 0.3 * slider)`
/// 2. `available_hours = exam - current`, +24 when negative
/// 3. `cognitive_state_factor = fatigue_factor * time_of_day_factor`
pub fn build_study_context(input: &StudentInput) -> StudyContext {
    let final_confidence = blend_confidence(input.quiz_total(), input.slider_confidence);
    let fatigue = fatigue_factor(input.hours_studied_today);
    let time_of_day = time_of_day_factor(input.current_time.as_hours());

    StudyContext {
        current_time: input.current_time,
        exam_time: input.exam_time,
        final_confidence,
        confidence_band: ConfidenceBand::from_confidence(final_confidence),
        available_hours: input.available_hours(),
        fatigue_factor: fatigue,
        time_of_day_factor: time_of_day,
        cognitive_state_factor: fatigue * time_of_day,
    }
}

/// Blend quiz answers and the confidence slider.
///
/// The quiz total is a sum of three 0-100 answers, not an average, so the
/// result can exceed 100 (all answers 100 and slider 100 gives 240). The
/// value is deliberately left unclamped.
pub fn blend_confidence(quiz_total: u32, slider_confidence: f64) -> u32 {
    let blended = QUIZ_WEIGHT * quiz_total as f64 + SLIDER_WEIGHT * slider_confidence;
    blended.round().max(0.0) as u32
}

/// Penalty for hours already studied today
///
/// - 4h or more: 0.4
/// - 2.5h or more: 0.6
/// - otherwise: 1.0
pub fn fatigue_factor(hours_studied_today: f64) -> f64 {
    if hours_studied_today >= 4.0 {
        0.4
    } else if hours_studied_today >= 2.5 {
        0.6
    } else {
        1.0
    }
}

/// Penalty for studying late at night or in the early morning.
///
/// `current_hour` is fractional hours since midnight, so 04:30 (4.5) is
/// already outside the window while 04:00 is inside it.
pub fn time_of_day_factor(current_hour: f64) -> f64 {
    if current_hour >= 22.0 || current_hour <= 4.0 {
        0.5
    } else {
        1.0
    }
}
