//! Data models for the trivia API response

use serde::Deserialize;

/// Response body of the trivia questions endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TriviaResponse {
    /// API status; 0 means success
    #[serde(default)]
    pub response_code: u8,
    /// Fetched questions
    #[serde(default)]
    pub results: Vec<RawQuestion>,
}

/// One question as delivered by the API (all text HTML-escaped)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawQuestion {
    /// Difficulty ("easy", "medium", "hard")
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Category name
    #[serde(default)]
    pub category: Option<String>,
    /// Question prompt
    pub question: String,
    /// The single correct answer
    #[serde(default)]
    pub correct_answer: Option<String>,
    /// All other answers
    #[serde(default)]
    pub incorrect_answers: Vec<String>,
}

impl RawQuestion {
    /// Build a raw question from its prompt and answers
    pub fn new(
        question: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            question: question.into(),
            correct_answer: Some(correct_answer.into()),
            incorrect_answers: incorrect_answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the difficulty
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }
}

/// Meaning of a non-zero `response_code`
pub fn describe_response_code(code: u8) -> &'static str {
    match code {
        0 => "success",
        1 => "not enough questions available for the query",
        2 => "invalid parameter",
        3 => "session token not found",
        4 => "session token exhausted",
        5 => "too many requests",
        _ => "unknown response code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_response_body() {
        let body = r#"{
            "response_code": 0,
            "results": [{
                "type": "multiple",
                "difficulty": "easy",
                "category": "Entertainment: Music",
                "question": "Which band sang &quot;Bohemian Rhapsody&quot;?",
                "correct_answer": "Queen",
                "incorrect_answers": ["ABBA", "The Beatles", "Led Zeppelin"]
            }]
        }"#;

        let response: TriviaResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.response_code, 0);
        assert_eq!(response.results.len(), 1);

        let question = &response.results[0];
        assert_eq!(question.difficulty.as_deref(), Some("easy"));
        assert_eq!(question.correct_answer.as_deref(), Some("Queen"));
        assert_eq!(question.incorrect_answers.len(), 3);
    }

    #[test]
    fn missing_answers_parse_as_empty() {
        let body = r#"{"response_code":0,"results":[{"question":"Q?"}]}"#;
        let response: TriviaResponse = serde_json::from_str(body).unwrap();
        let question = &response.results[0];
        assert_eq!(question.correct_answer, None);
        assert!(question.incorrect_answers.is_empty());
    }

    #[test]
    fn rate_limit_code_is_described() {
        assert_eq!(describe_response_code(5), "too many requests");
    }
}
