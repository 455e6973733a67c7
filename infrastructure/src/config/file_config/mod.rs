//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types
//! once validated.

mod logging;
mod output;
mod questions;
mod quiz;

pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use questions::FileQuestionsConfig;
pub use quiz::FileQuizConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("quiz.deadline_seconds cannot be 0")]
    ZeroDeadline,

    #[error("quiz.rounds_per_session cannot be 0")]
    ZeroRounds,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Round count, deadline, shuffling
    pub quiz: FileQuizConfig,
    /// Question bank location
    pub questions: FileQuestionsConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Session transcript and diagnostics
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning every detected problem.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        if self.quiz.deadline_seconds == 0 {
            issues.push(ConfigValidationError::ZeroDeadline);
        }
        if self.quiz.rounds_per_session == 0 {
            issues.push(ConfigValidationError::ZeroRounds);
        }
        issues
    }

    /// Render the effective configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[quiz]
rounds_per_session = 4
deadline_seconds = 8

[questions]
path = "bank/questions.json"

[output]
color = false

[logging]
session_log = "logs/session.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.quiz.rounds_per_session, 4);
        assert_eq!(config.quiz.deadline_seconds, 8);
        assert_eq!(
            config.questions.path.as_deref(),
            Some(std::path::Path::new("bank/questions.json"))
        );
        assert!(!config.output.color);
        assert!(config.logging.session_log.is_some());
        assert!(config.logging.log_file.is_none());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[quiz]
deadline_seconds = 30
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.quiz.deadline_seconds, 30);
        // Defaults should apply
        assert_eq!(config.quiz.rounds_per_session, 5);
        assert!(config.questions.path.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_zero_values() {
        let mut config = FileConfig::default();
        config.quiz.deadline_seconds = 0;
        config.quiz.rounds_per_session = 0;
        assert_eq!(
            config.validate(),
            vec![
                ConfigValidationError::ZeroDeadline,
                ConfigValidationError::ZeroRounds
            ]
        );
    }

    #[test]
    fn test_to_toml_round_trips_sections() {
        let rendered = FileConfig::default().to_toml_string().unwrap();
        assert!(rendered.contains("[quiz]"));
        assert!(rendered.contains("deadline_seconds = 5"));
    }
}
