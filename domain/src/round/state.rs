//! Per-round state and outcome

use super::resolution::{Resolution, TimeoutCause};
use super::verdict::Verdict;
use crate::core::question::Question;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Transient state of the round being played.
///
/// Owned by the orchestrator for the lifetime of one round and consumed
/// into a [`RoundOutcome`] once the resolution is applied.
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Zero-based round index within the session
    pub index: usize,
    pub question: Arc<Question>,
    pub deadline: Duration,
    started_at: Instant,
}

impl RoundState {
    pub fn new(index: usize, question: Arc<Question>, deadline: Duration) -> Self {
        Self {
            index,
            question,
            deadline,
            started_at: Instant::now(),
        }
    }

    /// One-based number shown to the player
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Apply the resolution and close the round
    pub fn finish(self, resolution: Resolution, timeout_cause: Option<TimeoutCause>) -> RoundOutcome {
        let verdict = Verdict::check(&self.question, resolution);
        RoundOutcome {
            round: self.number(),
            elapsed: self.elapsed(),
            question: self.question,
            resolution,
            timeout_cause,
            verdict,
        }
    }
}

/// Final result of one round
#[derive(Debug, Clone, Serialize)]
pub struct RoundOutcome {
    /// One-based round number
    pub round: usize,
    pub question: Arc<Question>,
    pub resolution: Resolution,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_cause: Option<TimeoutCause>,
    pub verdict: Verdict,
    #[serde(serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl RoundOutcome {
    pub fn is_correct(&self) -> bool {
        self.verdict.is_correct()
    }
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}
