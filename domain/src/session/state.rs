//! Session-wide score tracking

use crate::round::state::RoundOutcome;
use serde::Serialize;
use std::fmt;

/// Score and progress of one pass through a session's rounds.
///
/// Mutated only by the orchestrator's sequential scoring step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// One-based session number (increments on each replay)
    pub session_number: usize,
    pub rounds_per_session: usize,
    score: usize,
    completed_rounds: usize,
    aborted: bool,
}

impl SessionState {
    pub fn new(rounds_per_session: usize) -> Self {
        Self {
            session_number: 1,
            rounds_per_session,
            score: 0,
            completed_rounds: 0,
            aborted: false,
        }
    }

    /// Fresh state for the next replay: score back to zero
    pub fn replay(&self) -> Self {
        Self {
            session_number: self.session_number + 1,
            ..Self::new(self.rounds_per_session)
        }
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn completed_rounds(&self) -> usize {
        self.completed_rounds
    }

    /// Index of the next round to play, if any remain
    pub fn next_round_index(&self) -> Option<usize> {
        (!self.aborted && self.completed_rounds < self.rounds_per_session)
            .then_some(self.completed_rounds)
    }

    pub fn is_finished(&self) -> bool {
        self.next_round_index().is_none()
    }

    pub fn record(&mut self, outcome: &RoundOutcome) {
        if outcome.is_correct() {
            self.score += 1;
        }
        self.completed_rounds += 1;
    }

    /// Stop before all rounds were played
    pub fn abort(&mut self) {
        self.aborted = true;
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            session_number: self.session_number,
            score: self.score,
            total: self.rounds_per_session,
            completed_rounds: self.completed_rounds,
            aborted: self.aborted,
        }
    }
}

/// Final score report of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub session_number: usize,
    pub score: usize,
    pub total: usize,
    pub completed_rounds: usize,
    pub aborted: bool,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.score, self.total)
    }
}
