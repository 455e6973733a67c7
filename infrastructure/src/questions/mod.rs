//! Question bank adapters
//!
//! Banks are JSON files; a default bank is compiled into the binary so the
//! quiz can run without any file on disk.

mod json_loader;

pub use json_loader::{JsonQuestionLoader, QuestionLoadError};
