//! Quiz parameters: round count, answer deadline, shuffle seed.
//!
//! [`QuizConfig`] groups the static parameters that control
//! [`RunQuizUseCase`](crate::use_cases::run_quiz::RunQuizUseCase).

use quiz_domain::DomainError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of rounds per session.
pub const DEFAULT_ROUNDS_PER_SESSION: usize = 5;

/// Default time allowed per question.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(5);

/// Quiz loop control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Rounds played before the score is reported.
    pub rounds_per_session: usize,
    /// Time allowed to answer each question.
    pub deadline: Duration,
    /// Seed for question shuffling; `None` draws from OS entropy.
    pub shuffle_seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            rounds_per_session: DEFAULT_ROUNDS_PER_SESSION,
            deadline: DEFAULT_DEADLINE,
            shuffle_seed: None,
        }
    }
}

impl QuizConfig {
    // ==================== Builder Methods ====================

    pub fn with_rounds_per_session(mut self, rounds: usize) -> Self {
        self.rounds_per_session = rounds;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn with_shuffle_seed(mut self, seed: Option<u64>) -> Self {
        self.shuffle_seed = seed;
        self
    }

    /// Check the parameters against the size of the question pool.
    pub fn validate(&self, pool_size: usize) -> Result<(), DomainError> {
        if pool_size == 0 {
            return Err(DomainError::EmptyQuestionPool);
        }
        if self.rounds_per_session == 0 {
            return Err(DomainError::InvalidConfiguration(
                "rounds_per_session must be at least 1".to_string(),
            ));
        }
        if self.deadline.is_zero() {
            return Err(DomainError::InvalidConfiguration(
                "deadline must be greater than zero".to_string(),
            ));
        }
        if self.rounds_per_session > pool_size {
            return Err(DomainError::NotEnoughQuestions {
                requested: self.rounds_per_session,
                available: pool_size,
            });
        }
        Ok(())
    }
}
