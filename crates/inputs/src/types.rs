//! Core input types for the recommendation engine.
//!
//! This module defines everything a student tells us before an exam:
//! - `ClockTime`: a 24h wall-clock time (current time, exam time)
//! - `QuizAnswer`: one answer of the three-question self check
//! - `StudentInput`: the validated input record passed to the engine

use crate::error::{InputError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Constants
// =============================================================================

/// Minutes in one day, used for wrap-around arithmetic
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Number of questions in the self-check quiz
pub const QUIZ_QUESTION_COUNT: usize = 3;

/// Upper bound of the confidence slider
pub const MAX_SLIDER_CONFIDENCE: f64 = 100.0;

// =============================================================================
// Clock Time
// =============================================================================

/// A wall-clock time with minute resolution.
///
/// Serialized as an `"HH:MM"` string. Deserialization goes through the
/// same parser as the CLI, so an invalid time can never be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Create a clock time, rejecting hours above 23 and minutes above 59.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 {
            return Err(InputError::InvalidClock {
                value: format!("{hour:02}:{minute:02}"),
                reason: "hour must be between 0 and 23".to_string(),
            });
        }
        if minute > 59 {
            return Err(InputError::InvalidClock {
                value: format!("{hour:02}:{minute:02}"),
                reason: "minute must be between 0 and 59".to_string(),
            });
        }
        Ok(Self { hour, minute })
    }

    /// Build a clock time from minutes since midnight, wrapping past 24h.
    pub fn from_minutes(minutes: u32) -> Self {
        let minutes = minutes % MINUTES_PER_DAY;
        Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }

    /// Fractional hours since midnight, e.g. 22:30 -> 22.5
    pub fn as_hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0
    }

    /// Whole minutes from `self` until the next occurrence of `later`.
    ///
    /// Identical times give 0, so the result is always in `[0, 1440)`.
    pub fn minutes_until(&self, later: ClockTime) -> u32 {
        let diff = later.minutes_since_midnight() as i64 - self.minutes_since_midnight() as i64;
        diff.rem_euclid(MINUTES_PER_DAY as i64) as u32
    }

    /// Hours from `self` until the next occurrence of `later`.
    ///
    /// ## Algorithm
    /// `later - self` in hours, adding 24 when negative (overnight wrap).
    /// Example: 23:00 -> 01:00 is 2.0 hours.
    pub fn hours_until(&self, later: ClockTime) -> f64 {
        self.minutes_until(later) as f64 / 60.0
    }

    /// The clock time `hours` later, rounded to the nearest minute.
    ///
    /// Negative or non-finite offsets are treated as zero.
    pub fn plus_hours(&self, hours: f64) -> Self {
        let offset = if hours.is_finite() && hours > 0.0 {
            (hours * 60.0).round() as u64 % MINUTES_PER_DAY as u64
        } else {
            0
        };
        Self::from_minutes(self.minutes_since_midnight() + offset as u32)
    }

    /// The clock time `minutes` later, wrapping past midnight.
    pub fn plus_minutes(&self, minutes: u32) -> Self {
        Self::from_minutes(self.minutes_since_midnight() + minutes % MINUTES_PER_DAY)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

// =============================================================================
// Quiz Answers
// =============================================================================

/// One answer of the self-check quiz, already scaled to 0-100.
///
/// The four levels map to the scores 0, 33, 67 and 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum QuizAnswer {
    NotAtAll,
    Partially,
    Mostly,
    Completely,
}

impl QuizAnswer {
    /// All answers, lowest score first
    pub const ALL: [QuizAnswer; 4] = [
        QuizAnswer::NotAtAll,
        QuizAnswer::Partially,
        QuizAnswer::Mostly,
        QuizAnswer::Completely,
    ];

    pub fn score(self) -> u32 {
        match self {
            QuizAnswer::NotAtAll => 0,
            QuizAnswer::Partially => 33,
            QuizAnswer::Mostly => 67,
            QuizAnswer::Completely => 100,
        }
    }

    pub fn from_score(score: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|answer| answer.score() == score)
            .ok_or_else(|| InputError::InvalidQuizAnswer {
                value: score.to_string(),
            })
    }

    /// Short label accepted by the parser and shown in the CLI
    pub fn label(self) -> &'static str {
        match self {
            QuizAnswer::NotAtAll => "none",
            QuizAnswer::Partially => "some",
            QuizAnswer::Mostly => "most",
            QuizAnswer::Completely => "all",
        }
    }
}

impl TryFrom<u32> for QuizAnswer {
    type Error = InputError;

    fn try_from(score: u32) -> Result<Self> {
        Self::from_score(score)
    }
}

impl From<QuizAnswer> for u32 {
    fn from(answer: QuizAnswer) -> Self {
        answer.score()
    }
}

impl fmt::Display for QuizAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.score())
    }
}

// =============================================================================
// StudentInput - The Engine's Input Record
// =============================================================================

/// Everything the engine needs for one recommendation.
///
/// Build it with [`StudentInput::new`], which validates every field. The
/// engine treats a `StudentInput` as already valid and never fails on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentInput {
    pub current_time: ClockTime,
    /// Exam start; taken as the next occurrence after `current_time`
    pub exam_time: ClockTime,
    pub hours_studied_today: f64,
    /// Self-reported confidence from the slider, 0 to 100
    pub slider_confidence: f64,
    pub quiz_scores: [QuizAnswer; QUIZ_QUESTION_COUNT],
}

impl StudentInput {
    pub fn new(
        current_time: ClockTime,
        exam_time: ClockTime,
        hours_studied_today: f64,
        slider_confidence: f64,
        quiz_scores: [QuizAnswer; QUIZ_QUESTION_COUNT],
    ) -> Result<Self> {
        let input = Self {
            current_time,
            exam_time,
            hours_studied_today,
            slider_confidence,
            quiz_scores,
        };
        input.validate()?;
        Ok(input)
    }

    /// Check the numeric fields.
    ///
    /// Clock times and quiz answers are valid by construction.
    pub fn validate(&self) -> Result<()> {
        if !self.hours_studied_today.is_finite() {
            return Err(InputError::NotFinite {
                field: "hours_studied_today",
            });
        }
        if self.hours_studied_today < 0.0 {
            return Err(InputError::Negative {
                field: "hours_studied_today",
                value: self.hours_studied_today,
            });
        }
        if !self.slider_confidence.is_finite() {
            return Err(InputError::NotFinite {
                field: "slider_confidence",
            });
        }
        if !(0.0..=MAX_SLIDER_CONFIDENCE).contains(&self.slider_confidence) {
            return Err(InputError::OutOfRange {
                field: "slider_confidence",
                value: self.slider_confidence,
                min: 0.0,
                max: MAX_SLIDER_CONFIDENCE,
            });
        }
        Ok(())
    }

    /// Sum of the three quiz scores (0 to 300, not an average)
    pub fn quiz_total(&self) -> u32 {
        self.quiz_scores.iter().map(|answer| answer.score()).sum()
    }

    /// Hours until the exam, in `[0, 24)`
    pub fn available_hours(&self) -> f64 {
        self.current_time.hours_until(self.exam_time)
    }

    /// The same input with a different starting time
    pub fn starting_at(&self, current_time: ClockTime) -> Self {
        Self {
            current_time,
            ..self.clone()
        }
    }
}
