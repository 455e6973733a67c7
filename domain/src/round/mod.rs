//! A single question-and-answer cycle.
//!
//! - [`resolution::Resolution`]: `Answered` or `TimedOut`, one per resolver call
//! - [`choice::parse_choice`]: typed line to option index
//! - [`verdict::Verdict`]: scoring of a resolution
//! - [`state::RoundState`] / [`state::RoundOutcome`]: round lifecycle

pub mod choice;
pub mod resolution;
pub mod state;
pub mod verdict;
