//! Quiz session state machine
//!
//! A controller lives for exactly one quiz attempt:
//! `Loading -> Error | InProgress`, then `InProgress -> Revealed`.
//! Starting over means building a new controller.

use uuid::Uuid;

use super::error::QuizError;
use super::question::{OptionId, QuestionId, QuestionSet, build_question_set};
use super::scorer::{self, Score};
use super::selection::SelectionTracker;
use super::view::{QuestionView, QuizView, ViewPhase};
use crate::trivia::{RawQuestion, TriviaError};

/// Number of questions requested per quiz
pub const QUIZ_SIZE: usize = 5;

/// Tag attached to an in-flight fetch so its result can be matched to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(Uuid);

/// Where a quiz session is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for the trivia source
    Loading,
    /// Fetch or construction failed
    Error {
        /// Display message
        message: String,
        /// Whether starting a new quiz may succeed
        retryable: bool,
    },
    /// Questions are on screen and accept selections
    InProgress,
    /// Answers were submitted and colored
    Revealed(Score),
}

impl QuizPhase {
    fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Error { .. } => "in an error state",
            Self::InProgress => "in progress",
            Self::Revealed(_) => "revealed",
        }
    }
}

/// Owns the question set and selections of one quiz attempt
#[derive(Debug)]
pub struct QuizController {
    ticket: FetchTicket,
    phase: QuizPhase,
    questions: QuestionSet,
    selections: SelectionTracker,
}

impl Default for QuizController {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizController {
    /// Start a new session in the `Loading` phase
    pub fn new() -> Self {
        Self {
            ticket: FetchTicket(Uuid::new_v4()),
            phase: QuizPhase::Loading,
            questions: QuestionSet::default(),
            selections: SelectionTracker::new(),
        }
    }

    /// Ticket identifying this session's fetch
    pub fn ticket(&self) -> FetchTicket {
        self.ticket
    }

    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn selections(&self) -> &SelectionTracker {
        &self.selections
    }

    /// Score, once revealed
    pub fn score(&self) -> Option<Score> {
        match self.phase {
            QuizPhase::Revealed(score) => Some(score),
            _ => None,
        }
    }

    /// Whether every question has a selection
    pub fn all_answered(&self) -> bool {
        !self.questions.is_empty() && self.selections.len() == self.questions.len()
    }

    /// Apply the outcome of the fetch issued for `ticket`
    ///
    /// Returns false when the result was discarded because it belongs to
    /// another session or this session is no longer loading.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<RawQuestion>, TriviaError>,
    ) -> bool {
        if ticket != self.ticket {
            tracing::debug!("Discarding fetch result for a different quiz session");
            return false;
        }
        if self.phase != QuizPhase::Loading {
            tracing::warn!("Discarding fetch result: quiz is {}", self.phase.name());
            return false;
        }

        match result {
            Ok(raw) => self.load(&raw),
            Err(e) => {
                tracing::error!("Failed to fetch questions: {}", e);
                let retryable = e.is_recoverable();
                self.phase = QuizPhase::Error { message: e.to_string(), retryable };
            }
        }
        true
    }

    fn load(&mut self, raw: &[RawQuestion]) {
        if raw.is_empty() {
            self.phase =
                QuizPhase::Error { message: QuizError::NoQuestions.to_string(), retryable: false };
            return;
        }

        match build_question_set(raw) {
            Ok(questions) => {
                tracing::info!("Loaded {} questions", questions.len());
                self.questions = questions;
                self.phase = QuizPhase::InProgress;
            }
            Err(e) => {
                tracing::error!("Could not build quiz: {}", e);
                self.phase = QuizPhase::Error { message: e.to_string(), retryable: false };
            }
        }
    }

    /// Choose `option_id` as the answer to `question_id`
    pub fn select_answer(
        &mut self,
        question_id: &QuestionId,
        option_id: &OptionId,
    ) -> Result<(), QuizError> {
        self.require_in_progress("select an answer")?;

        let question = self
            .questions
            .get_mut(question_id)
            .ok_or_else(|| QuizError::UnknownQuestion(question_id.to_string()))?;

        let is_correct = question
            .option(option_id)
            .map(|option| option.is_correct)
            .ok_or_else(|| QuizError::UnknownOption {
                question: question_id.to_string(),
                option: option_id.to_string(),
            })?;

        question.mark_selected(option_id);
        self.selections.select(question_id.clone(), option_id.clone(), is_correct);

        tracing::debug!(
            "Selected {} for {} ({}/{} answered)",
            option_id,
            question_id,
            self.selections.len(),
            self.questions.len()
        );
        Ok(())
    }

    /// Score the quiz and reveal the answers
    pub fn submit(&mut self) -> Result<Score, QuizError> {
        self.require_in_progress("submit")?;

        if !self.all_answered() {
            return Err(QuizError::IncompleteSelection {
                answered: self.selections.len(),
                total: self.questions.len(),
            });
        }

        let (score, revealed) = scorer::submit(&self.questions, &self.selections);
        self.questions = revealed;
        self.phase = QuizPhase::Revealed(score);

        tracing::info!("Quiz submitted, scored {}", score);
        Ok(score)
    }

    /// Derive a read-only snapshot for rendering
    pub fn view(&self) -> QuizView {
        let phase = match &self.phase {
            QuizPhase::Loading => ViewPhase::Loading,
            QuizPhase::Error { message, retryable } => {
                ViewPhase::Error { message: message.clone(), retryable: *retryable }
            }
            QuizPhase::InProgress => ViewPhase::InProgress,
            QuizPhase::Revealed(score) => ViewPhase::Revealed(*score),
        };

        QuizView {
            phase,
            questions: self.questions.iter().map(QuestionView::from).collect(),
            answered: self.selections.len(),
            total: self.questions.len(),
            can_submit: self.phase == QuizPhase::InProgress && self.all_answered(),
        }
    }

    fn require_in_progress(&self, operation: &'static str) -> Result<(), QuizError> {
        if self.phase == QuizPhase::InProgress {
            Ok(())
        } else {
            Err(QuizError::InvalidState { operation, phase: self.phase.name() })
        }
    }
}
