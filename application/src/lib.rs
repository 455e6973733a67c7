//! Application layer for timed-quiz
//!
//! This crate contains the deadline-bounded choice resolver, the round
//! orchestrator, port definitions and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::QuizConfig;
pub use ports::{
    input_source::InputSource,
    presenter::{NoPresenter, QuizPresenter},
    session_logger::{NoSessionLogger, SessionEvent, SessionLogger},
};
pub use use_cases::resolve_choice::{
    ChoiceResolver, DeadlineTimer, FeedEvent, LineFeed, ResolveError, ResolveOutcome,
};
pub use use_cases::run_quiz::{QuizReport, QuizSession, RunQuizError, RunQuizUseCase};
