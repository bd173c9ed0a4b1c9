//! Read-only snapshots of quiz state for rendering

use super::question::{OptionId, Question, QuestionId, RevealColor};
use super::scorer::Score;

/// Phase as seen by the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewPhase {
    Loading,
    Error { message: String, retryable: bool },
    InProgress,
    Revealed(Score),
}

/// Snapshot of a quiz session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView {
    pub phase: ViewPhase,
    pub questions: Vec<QuestionView>,
    /// Questions that have a selection
    pub answered: usize,
    pub total: usize,
    /// Whether "Check answers" is enabled
    pub can_submit: bool,
}

impl QuizView {
    /// Status line text for the current phase
    pub fn status(&self) -> String {
        match &self.phase {
            ViewPhase::Loading => "Loading...".to_string(),
            ViewPhase::Error { .. } => "Something went wrong when trying to get the data".to_string(),
            ViewPhase::InProgress => format!("{}/{} answered", self.answered, self.total),
            ViewPhase::Revealed(score) => format!("You scored {} correct answers", score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub id: QuestionId,
    pub text: String,
    /// "Category · difficulty", when known
    pub subtitle: Option<String>,
    pub answers: Vec<AnswerView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerView {
    pub id: OptionId,
    pub text: String,
    pub selected: bool,
    pub reveal: Option<RevealColor>,
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        let subtitle = match (&question.category, &question.difficulty) {
            (Some(category), Some(difficulty)) => Some(format!("{category} \u{b7} {difficulty}")),
            (Some(category), None) => Some(category.clone()),
            (None, Some(difficulty)) => Some(difficulty.clone()),
            (None, None) => None,
        };

        Self {
            id: question.id.clone(),
            text: question.text.clone(),
            subtitle,
            answers: question
                .answers
                .iter()
                .map(|answer| AnswerView {
                    id: answer.id.clone(),
                    text: answer.text.clone(),
                    selected: answer.is_selected,
                    reveal: answer.reveal,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::question::AnswerOption;

    fn question(category: Option<&str>, difficulty: Option<&str>) -> Question {
        let id = QuestionId::new("q");
        Question {
            answers: vec![AnswerOption {
                text: "yes".into(),
                id: OptionId::for_position(&id, 0),
                is_correct: true,
                is_selected: true,
                reveal: Some(RevealColor::Correct),
            }],
            id,
            text: "Really?".into(),
            category: category.map(Into::into),
            difficulty: difficulty.map(Into::into),
        }
    }

    #[test]
    fn subtitle_joins_category_and_difficulty() {
        let view = QuestionView::from(&question(Some("Science"), Some("hard")));
        assert_eq!(view.subtitle.as_deref(), Some("Science \u{b7} hard"));
        assert!(QuestionView::from(&question(None, None)).subtitle.is_none());
    }

    #[test]
    fn answer_flags_are_copied() {
        let view = QuestionView::from(&question(None, Some("easy")));
        assert!(view.answers[0].selected);
        assert_eq!(view.answers[0].reveal, Some(RevealColor::Correct));
    }

    #[test]
    fn status_reports_score() {
        let view = QuizView {
            phase: ViewPhase::Revealed(Score { correct: 3, total: 5 }),
            questions: vec![],
            answered: 5,
            total: 5,
            can_submit: false,
        };
        assert_eq!(view.status(), "You scored 3/5 correct answers");
    }
}
