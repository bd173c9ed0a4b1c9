//! Scoring and answer reveal

use std::fmt;

use super::question::{QuestionSet, RevealColor};
use super::selection::SelectionTracker;

/// Final result of a submitted quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// Score the selections and produce a color-tagged copy of the questions
///
/// Selected options are tagged by their own correctness; an unselected
/// correct option is tagged `Correct` so the right answer is always shown.
/// The caller is responsible for checking that every question is answered.
pub fn submit(questions: &QuestionSet, selections: &SelectionTracker) -> (Score, QuestionSet) {
    let score = Score { correct: selections.correct_count(), total: questions.len() };

    let mut revealed = questions.clone();
    for question in revealed.iter_mut() {
        let question_id = question.id.clone();
        for answer in &mut question.answers {
            let selected = selections.is_selected(&question_id, &answer.id);
            answer.reveal = match (selected, answer.is_correct) {
                (_, true) => Some(RevealColor::Correct),
                (true, false) => Some(RevealColor::Incorrect),
                (false, false) => None,
            };
        }
    }

    (score, revealed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::question::{AnswerOption, OptionId, Question, QuestionId};

    /// Question with `count` options, the one at `correct` being right
    fn question(name: &str, count: usize, correct: usize) -> Question {
        let id = QuestionId::new(name);
        let answers = (0..count)
            .map(|position| AnswerOption {
                text: format!("answer {position}"),
                id: OptionId::for_position(&id, position),
                is_correct: position == correct,
                is_selected: false,
                reveal: None,
            })
            .collect();
        Question { id, text: format!("{name}?"), category: None, difficulty: None, answers }
    }

    fn five_questions() -> QuestionSet {
        QuestionSet::new((0..5).map(|i| question(&format!("q{i}"), 4, i % 4)).collect())
    }

    fn pick(tracker: &mut SelectionTracker, set: &QuestionSet, index: usize, position: usize) {
        let question = &set.questions()[index];
        let answer = &question.answers[position];
        tracker.select(question.id.clone(), answer.id.clone(), answer.is_correct);
    }

    #[test]
    fn all_correct_scores_five() {
        let set = five_questions();
        let mut tracker = SelectionTracker::new();
        for i in 0..5 {
            pick(&mut tracker, &set, i, i % 4);
        }

        let (score, _) = submit(&set, &tracker);
        assert_eq!(score, Score { correct: 5, total: 5 });
        assert_eq!(score.to_string(), "5/5");
    }

    #[test]
    fn none_correct_scores_zero() {
        let set = five_questions();
        let mut tracker = SelectionTracker::new();
        for i in 0..5 {
            pick(&mut tracker, &set, i, (i + 1) % 4);
        }

        let (score, _) = submit(&set, &tracker);
        assert_eq!(score.correct, 0);
    }

    #[test]
    fn reveal_marks_missed_correct_answer() {
        let set = five_questions();
        let mut tracker = SelectionTracker::new();
        // q1's correct answer is position 1; pick 3 instead
        pick(&mut tracker, &set, 1, 3);

        let (_, revealed) = submit(&set, &tracker);
        let answers = &revealed.questions()[1].answers;
        assert_eq!(answers[3].reveal, Some(RevealColor::Incorrect));
        assert_eq!(answers[1].reveal, Some(RevealColor::Correct));
        assert_eq!(answers[0].reveal, None);
        assert_eq!(answers[2].reveal, None);
    }

    #[test]
    fn reveal_marks_selected_correct_answer() {
        let set = five_questions();
        let mut tracker = SelectionTracker::new();
        pick(&mut tracker, &set, 2, 2);

        let (_, revealed) = submit(&set, &tracker);
        let answers = &revealed.questions()[2].answers;
        let colored: Vec<_> = answers.iter().filter(|a| a.reveal.is_some()).collect();
        assert_eq!(colored.len(), 1);
        assert_eq!(colored[0].reveal, Some(RevealColor::Correct));
    }

    #[test]
    fn input_set_is_left_untouched() {
        let set = five_questions();
        let before = set.clone();
        let tracker = SelectionTracker::new();
        let _ = submit(&set, &tracker);
        assert_eq!(set, before);
    }
}
