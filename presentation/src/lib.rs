//! Presentation layer for timed-quiz
//!
//! This crate contains the CLI definition and the console presenter
//! that renders questions, verdicts and scores.

pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::presenter::ConsolePresenter;
