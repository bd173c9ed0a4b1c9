//! Question set model and construction from raw API records

use std::fmt;

use rand::Rng;
use uuid::Uuid;

use super::decode::decode;
use super::error::QuizError;
use super::shuffle::shuffle_with;
use crate::trivia::RawQuestion;

/// Identity of a question within one quiz
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestionId(String);

impl QuestionId {
    /// Wrap an existing id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of an answer option, unique within its question
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionId(String);

impl OptionId {
    /// Option id for the answer at `position` in a question
    pub fn for_position(question: &QuestionId, position: usize) -> Self {
        Self(format!("{}-{}", question.as_str(), position))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Color applied to an option once answers are revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealColor {
    Correct,
    Incorrect,
}

/// One selectable answer under a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    /// Decoded answer text
    pub text: String,
    pub id: OptionId,
    pub is_correct: bool,
    pub is_selected: bool,
    /// Set only after the quiz is submitted
    pub reveal: Option<RevealColor>,
}

/// One trivia prompt with its shuffled answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    /// Decoded prompt
    pub text: String,
    /// Decoded category, when the source provides one
    pub category: Option<String>,
    /// Difficulty label, when the source provides one
    pub difficulty: Option<String>,
    /// Answers in display order; fixed once built
    pub answers: Vec<AnswerOption>,
}

impl Question {
    /// Find an answer option by id
    pub fn option(&self, option_id: &OptionId) -> Option<&AnswerOption> {
        self.answers.iter().find(|answer| &answer.id == option_id)
    }

    /// The option flagged as correct
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.answers.iter().find(|answer| answer.is_correct)
    }

    /// The option currently marked selected
    pub fn selected_option(&self) -> Option<&AnswerOption> {
        self.answers.iter().find(|answer| answer.is_selected)
    }

    /// Mark exactly one option selected; returns false if it does not exist
    pub fn mark_selected(&mut self, option_id: &OptionId) -> bool {
        if self.option(option_id).is_none() {
            return false;
        }
        for answer in &mut self.answers {
            answer.is_selected = &answer.id == option_id;
        }
        true
    }
}

/// The ordered questions of one quiz
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, question_id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| &question.id == question_id)
    }

    pub fn get_mut(&mut self, question_id: &QuestionId) -> Option<&mut Question> {
        self.questions.iter_mut().find(|question| &question.id == question_id)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Question> {
        self.questions.iter_mut()
    }
}

/// Build a question set with the thread-local generator
pub fn build_question_set(raw: &[RawQuestion]) -> Result<QuestionSet, QuizError> {
    build_question_set_with(raw, &mut rand::thread_rng())
}

/// Build a question set, shuffling answers with `rng`
pub fn build_question_set_with<R: Rng + ?Sized>(
    raw: &[RawQuestion],
    rng: &mut R,
) -> Result<QuestionSet, QuizError> {
    let questions = raw
        .iter()
        .enumerate()
        .map(|(index, item)| build_question(index, item, rng))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QuestionSet::new(questions))
}

fn build_question<R: Rng + ?Sized>(
    index: usize,
    raw: &RawQuestion,
    rng: &mut R,
) -> Result<Question, QuizError> {
    let correct_raw = raw
        .correct_answer
        .as_deref()
        .filter(|answer| !answer.trim().is_empty())
        .ok_or_else(|| QuizError::malformed(index, "missing correct answer"))?;

    if raw.incorrect_answers.is_empty() {
        return Err(QuizError::malformed(index, "no incorrect answers"));
    }

    let id = QuestionId::generate();

    let mut pool = Vec::with_capacity(raw.incorrect_answers.len() + 1);
    pool.push(correct_raw.to_string());
    pool.extend(raw.incorrect_answers.iter().cloned());

    // Compare decoded forms; the raw strings may escape the same text differently
    let correct = decode(correct_raw);
    let answers: Vec<AnswerOption> = shuffle_with(&pool, rng)
        .iter()
        .enumerate()
        .map(|(position, text)| {
            let text = decode(text);
            AnswerOption {
                is_correct: text == correct,
                id: OptionId::for_position(&id, position),
                is_selected: false,
                reveal: None,
                text,
            }
        })
        .collect();

    let correct_count = answers.iter().filter(|answer| answer.is_correct).count();
    if correct_count != 1 {
        return Err(QuizError::malformed(index, "correct answer also listed as incorrect"));
    }

    Ok(Question {
        id,
        text: decode(&raw.question),
        category: raw.category.as_deref().map(decode),
        difficulty: raw.difficulty.clone(),
        answers,
    })
}
