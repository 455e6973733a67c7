//! Scoring of a resolution against its question

use super::resolution::Resolution;
use crate::core::question::Question;
use serde::Serialize;

/// How a round was judged
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Incorrect {
        chosen: usize,
        correct_answer: String,
    },
    TimedOut {
        correct_answer: String,
    },
}

impl Verdict {
    /// Judge `resolution` against `question`.
    ///
    /// Only an answer matching the correct index scores.
    pub fn check(question: &Question, resolution: Resolution) -> Self {
        match resolution {
            Resolution::Answered { index } if question.is_correct(index) => Verdict::Correct,
            Resolution::Answered { index } => Verdict::Incorrect {
                chosen: index,
                correct_answer: question.correct_option().to_string(),
            },
            Resolution::TimedOut => Verdict::TimedOut {
                correct_answer: question.correct_option().to_string(),
            },
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }

    /// Correct answer text, present on a miss
    pub fn correct_answer(&self) -> Option<&str> {
        match self {
            Verdict::Correct => None,
            Verdict::Incorrect { correct_answer, .. } | Verdict::TimedOut { correct_answer } => {
                Some(correct_answer)
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Correct => "correct",
            Verdict::Incorrect { .. } => "incorrect",
            Verdict::TimedOut { .. } => "timed_out",
        }
    }
}
