//! # Inputs Crate
//!
//! This crate owns the student's input to the recommendation engine:
//! parsing it from text and validating it.
//!
//! ## Main Components
//!
//! - **types**: `ClockTime`, `QuizAnswer` and the `StudentInput` record
//! - **parser**: `HH:MM` clocks, quiz answers and quiz lists
//! - **error**: `InputError` for every way input can be malformed
//!
//! ## Example Usage
//!
//! ```
//! use inputs::parse_student_input;
//!
//! let input = parse_student_input("22:00", "09:00", 0.0, 50.0, &[0, 0, 0]).unwrap();
//! assert_eq!(input.available_hours(), 11.0);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{InputError, Result};
pub use parser::{parse_quiz_list, parse_student_input, quiz_from_scores};
pub use types::{
    ClockTime,
    QuizAnswer,
    StudentInput,
    MAX_SLIDER_CONFIDENCE,
    MINUTES_PER_DAY,
    QUIZ_QUESTION_COUNT,
};
