//! Quiz configuration from TOML (`[quiz]` section)

use quiz_application::QuizConfig;
use quiz_application::config::{DEFAULT_DEADLINE, DEFAULT_ROUNDS_PER_SESSION};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw quiz configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Rounds per session
    pub rounds_per_session: usize,
    /// Seconds allowed per question
    pub deadline_seconds: u64,
    /// Fixed shuffle seed (random when unset)
    pub shuffle_seed: Option<u64>,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            rounds_per_session: DEFAULT_ROUNDS_PER_SESSION,
            deadline_seconds: DEFAULT_DEADLINE.as_secs(),
            shuffle_seed: None,
        }
    }
}

impl FileQuizConfig {
    pub fn to_quiz_config(&self) -> QuizConfig {
        QuizConfig::default()
            .with_rounds_per_session(self.rounds_per_session)
            .with_deadline(Duration::from_secs(self.deadline_seconds))
            .with_shuffle_seed(self.shuffle_seed)
    }
}
