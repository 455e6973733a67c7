//! Port for structured session logging.
//!
//! Defines the [`SessionLogger`] trait for recording quiz events (sessions
//! started, rounds resolved, late input discarded) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures a machine-readable
//! transcript of play (JSONL).

use quiz_domain::{RoundOutcome, SessionSummary};
use serde::Serialize;

/// A structured quiz event.
///
/// Serializes as a flat object whose `type` field names the event. The
/// adapter adds the timestamp.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    SessionStarted {
        session: usize,
        rounds: usize,
        deadline_ms: u64,
        pool_size: usize,
    },
    RoundResolved {
        session: usize,
        /// Session score after this round
        score: usize,
        invalid_attempts: usize,
        #[serde(flatten)]
        outcome: RoundOutcome,
    },
    LateInputDiscarded {
        session: usize,
        round: usize,
        issued_by: u64,
        observed_by: u64,
        text: String,
    },
    SessionCompleted {
        #[serde(flatten)]
        summary: SessionSummary,
    },
}

impl SessionEvent {
    /// Value of the serialized `type` field
    pub fn event_type(&self) -> &'static str {
        match self {
            SessionEvent::SessionStarted { .. } => "session_started",
            SessionEvent::RoundResolved { .. } => "round_resolved",
            SessionEvent::LateInputDiscarded { .. } => "late_input_discarded",
            SessionEvent::SessionCompleted { .. } => "session_completed",
        }
    }
}

/// Sink for [`SessionEvent`]s.
///
/// `log` is synchronous and infallible; adapters swallow write failures so
/// that logging can never interrupt a round.
pub trait SessionLogger: Send + Sync {
    fn log(&self, event: SessionEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoSessionLogger;

impl SessionLogger for NoSessionLogger {
    fn log(&self, _event: SessionEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_matches_serialized_tag() {
        let event = SessionEvent::LateInputDiscarded {
            session: 1,
            round: 2,
            issued_by: 3,
            observed_by: 4,
            text: "B".to_string(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], event.event_type());
        assert_eq!(value["round"], 2);
        assert_eq!(value["text"], "B");
    }

    #[test]
    fn test_completed_event_flattens_summary() {
        let event = SessionEvent::SessionCompleted {
            summary: SessionSummary {
                session_number: 2,
                score: 3,
                total: 5,
                completed_rounds: 5,
                aborted: false,
            },
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "session_completed");
        assert_eq!(value["session_number"], 2);
        assert_eq!(value["score"], 3);
    }
}
