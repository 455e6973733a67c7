//! Presentation port
//!
//! Rendering of questions, verdicts and scores is delegated to an adapter in
//! the presentation layer. The use cases only report what happened; they
//! never format text themselves.

use crate::config::QuizConfig;
use quiz_domain::{ChoiceError, LateLine, RoundOutcome, RoundState, SessionSummary};
use std::time::Duration;

/// Callbacks for everything the player sees during a quiz.
///
/// All calls happen on the orchestrator's task, in round order. The input
/// pump and deadline timer never call into the presenter directly.
pub trait QuizPresenter: Send + Sync {
    /// Called once before the first session
    fn on_welcome(&self, config: &QuizConfig);

    /// Render the question of a round (text and labelled options)
    fn on_question(&self, round: &RoundState);

    /// Ask the player for a choice; the deadline starts right after this
    fn on_choice_prompt(&self, option_count: usize, deadline: Duration);

    /// A typed line was not a usable choice; the round continues
    fn on_invalid_choice(&self, error: &ChoiceError);

    /// A line answered a read from an already-resolved round and was dropped
    fn on_late_input(&self, _line: &LateLine) {}

    /// Verdict of a finished round
    fn on_round_outcome(&self, outcome: &RoundOutcome);

    /// Final score of a session
    fn on_session_summary(&self, summary: &SessionSummary);

    /// Ask whether to play another session
    fn on_replay_prompt(&self);

    /// Called once after the last session
    fn on_farewell(&self) {}
}

/// No-op presenter for when nothing should be shown
pub struct NoPresenter;

impl QuizPresenter for NoPresenter {
    fn on_welcome(&self, _config: &QuizConfig) {}
    fn on_question(&self, _round: &RoundState) {}
    fn on_choice_prompt(&self, _option_count: usize, _deadline: Duration) {}
    fn on_invalid_choice(&self, _error: &ChoiceError) {}
    fn on_round_outcome(&self, _outcome: &RoundOutcome) {}
    fn on_session_summary(&self, _summary: &SessionSummary) {}
    fn on_replay_prompt(&self) {}
}
