//! JSON question bank loader
//!
//! The bank is a JSON array of objects:
//!
//! ```json
//! [
//!   {
//!     "question": "Which planet is known as the Red Planet?",
//!     "options": ["Venus", "Mars", "Jupiter", "Mercury"],
//!     "correctAnswerIndex": 1
//!   }
//! ]
//! ```

use quiz_domain::{DomainError, Question};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Bundled question bank
const BUILTIN_QUESTIONS: &str = include_str!("../../data/questions.json");

/// Errors that can occur while loading a question bank
#[derive(Error, Debug)]
pub enum QuestionLoadError {
    #[error("Could not read question bank {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed question bank: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Question {position} is invalid: {source}")]
    InvalidQuestion {
        /// One-based position in the bank
        position: usize,
        #[source]
        source: DomainError,
    },

    #[error("Question bank contains no questions")]
    Empty,
}

/// One entry of the bank as stored on disk
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionRecord {
    question: String,
    options: Vec<String>,
    correct_answer_index: usize,
}

/// Loads and validates question banks
pub struct JsonQuestionLoader;

impl JsonQuestionLoader {
    /// Load a bank from a file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<Question>, QuestionLoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| QuestionLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let questions = Self::parse(&content)?;
        info!(
            "Loaded {} questions from {}",
            questions.len(),
            path.display()
        );
        Ok(questions)
    }

    /// The bank compiled into the binary
    pub fn builtin() -> Result<Vec<Question>, QuestionLoadError> {
        Self::parse(BUILTIN_QUESTIONS)
    }

    /// Parse and validate a bank held in memory
    pub fn parse(content: &str) -> Result<Vec<Question>, QuestionLoadError> {
        let records: Vec<QuestionRecord> = serde_json::from_str(content)?;
        if records.is_empty() {
            return Err(QuestionLoadError::Empty);
        }

        records
            .into_iter()
            .enumerate()
            .map(|(i, record)| {
                Question::try_new(record.question, record.options, record.correct_answer_index)
                    .map_err(|source| QuestionLoadError::InvalidQuestion {
                        position: i + 1,
                        source,
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_bank() {
        let json = r#"[
            {"question": "2 + 2?", "options": ["3", "4"], "correctAnswerIndex": 1},
            {"question": "Sky?", "options": ["Blue", "Green", "Red"], "correctAnswerIndex": 0}
        ]"#;

        let questions = JsonQuestionLoader::parse(json).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].correct_option(), "4");
        assert_eq!(questions[1].option_count(), 3);
    }

    #[test]
    fn test_invalid_entry_reports_position() {
        let json = r#"[
            {"question": "ok?", "options": ["a", "b"], "correctAnswerIndex": 0},
            {"question": "bad?", "options": ["a", "b"], "correctAnswerIndex": 5}
        ]"#;

        let err = JsonQuestionLoader::parse(json).unwrap_err();
        assert!(matches!(
            err,
            QuestionLoadError::InvalidQuestion { position: 2, .. }
        ));
    }

    #[test]
    fn test_negative_index_is_malformed() {
        let json = r#"[{"question": "q?", "options": ["a", "b"], "correctAnswerIndex": -1}]"#;
        assert!(matches!(
            JsonQuestionLoader::parse(json),
            Err(QuestionLoadError::Json(_))
        ));
    }

    #[test]
    fn test_empty_bank() {
        assert!(matches!(
            JsonQuestionLoader::parse("[]"),
            Err(QuestionLoadError::Empty)
        ));
    }

    #[test]
    fn test_builtin_bank_is_valid() {
        let questions = JsonQuestionLoader::builtin().unwrap();
        assert!(questions.len() >= 5);
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        std::fs::write(
            &path,
            r#"[{"question": "q?", "options": ["a", "b"], "correctAnswerIndex": 1}]"#,
        )
        .unwrap();

        let questions = JsonQuestionLoader::from_path(&path).unwrap();
        assert_eq!(questions.len(), 1);

        let missing = JsonQuestionLoader::from_path(dir.path().join("nope.json"));
        assert!(matches!(missing, Err(QuestionLoadError::Io { .. })));
    }
}
