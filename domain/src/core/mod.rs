//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated multiple-choice question
//! - [`labels`]: option letter labels
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod labels;
pub mod question;
