//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Question pool is empty")]
    EmptyQuestionPool,

    #[error("Session needs {requested} rounds but only {available} questions are available")]
    NotEnoughQuestions { requested: usize, available: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_enough_questions_display() {
        let error = DomainError::NotEnoughQuestions {
            requested: 6,
            available: 4,
        };
        assert_eq!(
            error.to_string(),
            "Session needs 6 rounds but only 4 questions are available"
        );
    }
}
