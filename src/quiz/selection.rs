//! Per-question answer selections

use super::question::{OptionId, QuestionId};

/// The user's chosen answer for one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub question_id: QuestionId,
    pub option_id: OptionId,
    pub is_correct: bool,
}

/// Records at most one selection per question
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selections: Vec<Selection>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert the selection for `question_id`
    pub fn select(&mut self, question_id: QuestionId, option_id: OptionId, is_correct: bool) {
        match self.selections.iter_mut().find(|s| s.question_id == question_id) {
            Some(existing) => {
                existing.option_id = option_id;
                existing.is_correct = is_correct;
            }
            None => self.selections.push(Selection { question_id, option_id, is_correct }),
        }
    }

    pub fn get(&self, question_id: &QuestionId) -> Option<&Selection> {
        self.selections.iter().find(|s| &s.question_id == question_id)
    }

    /// Whether `option_id` is the current choice for `question_id`
    pub fn is_selected(&self, question_id: &QuestionId, option_id: &OptionId) -> bool {
        self.get(question_id).is_some_and(|s| &s.option_id == option_id)
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Selection> {
        self.selections.iter()
    }

    /// Number of selections whose option is correct
    pub fn correct_count(&self) -> usize {
        self.selections.iter().filter(|s| s.is_correct).count()
    }
}
