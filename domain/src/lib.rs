//! Domain layer for timed-quiz
//!
//! This crate contains the quiz's entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Question**: immutable multiple-choice question, shared across rounds
//! - **Resolution**: the single outcome of a deadline-bounded choice
//! - **Round**: one question-presentation-and-answer cycle
//! - **Session**: `rounds_per_session` rounds, optionally replayed

pub mod core;
pub mod round;
pub mod session;

// Re-export commonly used types
pub use self::core::{
    error::DomainError,
    labels::{letter_index, option_letter},
    question::Question,
};
pub use round::{
    choice::{ChoiceError, parse_choice},
    resolution::{LateLine, ReadTicket, Resolution, TimeoutCause},
    state::{RoundOutcome, RoundState},
    verdict::Verdict,
};
pub use session::{
    replay::ReplayDecision,
    state::{SessionState, SessionSummary},
};
