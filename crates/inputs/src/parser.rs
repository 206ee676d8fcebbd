//! Parsers for the textual forms of engine input.
//!
//! This module handles:
//! - Clock strings: `HH:MM` (24h, the hour may be a single digit)
//! - Quiz answers: a score (`0`, `33`, `67`, `100`) or a label (`none`, `some`, `most`, `all`)
//! - Quiz lists: three comma-separated answers, e.g. `0,33,100`

use crate::error::{InputError, Result};
use crate::types::*;
use std::str::FromStr;

impl FromStr for ClockTime {
    type Err = InputError;

    /// Parse a 24h clock string
    ///
    /// Example: "22:00" -> 22:00
    ///          "7:05"  -> 07:05
    ///          "7:5"   -> error (minutes need two digits)
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = |reason: &str| InputError::InvalidClock {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (hour_str, minute_str) = trimmed
            .split_once(':')
            .ok_or_else(|| invalid("expected HH:MM"))?;

        if hour_str.is_empty() || hour_str.len() > 2 || !hour_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("hour must be one or two digits"));
        }
        if minute_str.len() != 2 || !minute_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("minute must be exactly two digits"));
        }

        let hour: u8 = hour_str
            .parse()
            .map_err(|e| invalid(&format!("invalid hour: {}", e)))?;
        let minute: u8 = minute_str
            .parse()
            .map_err(|e| invalid(&format!("invalid minute: {}", e)))?;

        ClockTime::new(hour, minute).map_err(|_| invalid("time is outside 00:00-23:59"))
    }
}

impl FromStr for QuizAnswer {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(score) = trimmed.parse::<u32>() {
            return QuizAnswer::from_score(score);
        }
        let lowered = trimmed.to_ascii_lowercase();
        QuizAnswer::ALL
            .into_iter()
            .find(|answer| answer.label() == lowered)
            .ok_or_else(|| InputError::InvalidQuizAnswer {
                value: s.to_string(),
            })
    }
}

/// Parse comma-separated quiz answers
///
/// Example: "0,33,100" -> [NotAtAll, Partially, Completely]
pub fn parse_quiz_list(s: &str) -> Result<[QuizAnswer; QUIZ_QUESTION_COUNT]> {
    let answers = s
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse)
        .collect::<Result<Vec<QuizAnswer>>>()?;
    quiz_from_answers(answers)
}

/// Convert raw quiz scores into exactly three answers
pub fn quiz_from_scores(scores: &[u32]) -> Result<[QuizAnswer; QUIZ_QUESTION_COUNT]> {
    let answers = scores
        .iter()
        .map(|&score| QuizAnswer::from_score(score))
        .collect::<Result<Vec<QuizAnswer>>>()?;
    quiz_from_answers(answers)
}

fn quiz_from_answers(answers: Vec<QuizAnswer>) -> Result<[QuizAnswer; QUIZ_QUESTION_COUNT]> {
    let found = answers.len();
    answers
        .try_into()
        .map_err(|_| InputError::QuizCountMismatch {
            expected: QUIZ_QUESTION_COUNT,
            found,
        })
}

/// Parse and validate a full input record from its raw parts.
///
/// This is the single entry point used by front ends that collect
/// strings and numbers from a form or the command line.
pub fn parse_student_input(
    current_time: &str,
    exam_time: &str,
    hours_studied_today: f64,
    slider_confidence: f64,
    quiz_scores: &[u32],
) -> Result<StudentInput> {
    StudentInput::new(
        current_time.parse()?,
        exam_time.parse()?,
        hours_studied_today,
        slider_confidence,
        quiz_from_scores(quiz_scores)?,
    )
}
