//! Resolution of a single timed choice

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one deadline-bounded choice.
///
/// Exactly one variant is produced per resolver invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// A valid option index arrived before the deadline
    Answered { index: usize },
    /// The deadline passed, or input ran out, without a valid answer
    TimedOut,
}

impl Resolution {
    pub fn answered(index: usize) -> Self {
        Self::Answered { index }
    }

    pub fn is_timed_out(&self) -> bool {
        matches!(self, Resolution::TimedOut)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Answered { index } => write!(f, "answered({})", index),
            Resolution::TimedOut => write!(f, "timed_out"),
        }
    }
}

/// Why a resolution ended up as [`Resolution::TimedOut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeoutCause {
    /// The deadline elapsed first
    Deadline,
    /// The input source was closed before a valid answer arrived
    InputExhausted,
}

/// Identity of one resolver invocation.
///
/// Every read issued against the shared input carries the ticket of the
/// invocation that issued it, so a late result can be told apart from the
/// current invocation's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReadTicket(u64);

impl ReadTicket {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ReadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A line that completed a read issued by an invocation that had already
/// resolved. It is reported but never interpreted as an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LateLine {
    /// Invocation that issued the read
    pub issued_by: ReadTicket,
    /// Invocation that was waiting when the line surfaced
    pub observed_by: ReadTicket,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_timed_out() {
        assert!(Resolution::TimedOut.is_timed_out());
        assert!(!Resolution::answered(0).is_timed_out());
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&Resolution::answered(1)).unwrap();
        assert_eq!(json, r#"{"kind":"answered","index":1}"#);
        let json = serde_json::to_string(&Resolution::TimedOut).unwrap();
        assert_eq!(json, r#"{"kind":"timed_out"}"#);
    }

    #[test]
    fn test_ticket_ordering() {
        let first = ReadTicket::new(1);
        let second = first.next();
        assert!(second > first);
        assert_eq!(second.id(), 2);
        assert_eq!(second.to_string(), "#2");
    }
}
