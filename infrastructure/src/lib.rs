//! Infrastructure layer for timed-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading and
//! question bank parsing.

pub mod config;
pub mod input;
pub mod logging;
pub mod questions;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileQuestionsConfig, FileQuizConfig,
};
pub use input::LineReader;
pub use logging::JsonlSessionLogger;
pub use questions::{JsonQuestionLoader, QuestionLoadError};
