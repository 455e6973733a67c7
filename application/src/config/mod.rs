//! Application-level configuration.
//!
//! - [`QuizConfig`]: rounds per session, answer deadline, shuffle seed

pub mod quiz_config;

pub use quiz_config::{DEFAULT_DEADLINE, DEFAULT_ROUNDS_PER_SESSION, QuizConfig};
