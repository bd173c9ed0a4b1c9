//! Error types for quiz construction and state transitions

use thiserror::Error;

/// Errors raised by the quiz core
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// A raw question could not be turned into a playable question
    #[error("Malformed question #{index}: {reason}")]
    MalformedQuestion {
        /// Zero-based position of the question in the API results
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// The trivia source returned no questions at all
    #[error("The trivia source returned no questions")]
    NoQuestions,

    /// An operation was attempted in a phase that does not allow it
    #[error("Cannot {operation} while the quiz is {phase}")]
    InvalidState {
        /// Operation that was attempted
        operation: &'static str,
        /// Phase the quiz was in
        phase: &'static str,
    },

    /// Submission was attempted before every question was answered
    #[error("Only {answered} of {total} questions answered")]
    IncompleteSelection {
        /// Questions with a selection
        answered: usize,
        /// Questions in the quiz
        total: usize,
    },

    /// No question with this id exists in the quiz
    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    /// The question exists but has no answer option with this id
    #[error("Unknown answer option {option} for question {question}")]
    UnknownOption {
        /// Question that was looked up
        question: String,
        /// Option id that was not found
        option: String,
    },
}

impl QuizError {
    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedQuestion { index, reason: reason.into() }
    }
}
