//! Console presenter for the quiz

use super::console::ConsoleFormatter;
use crate::config::OutputConfig;
use quiz_application::{QuizConfig, QuizPresenter};
use quiz_domain::{ChoiceError, LateLine, RoundOutcome, RoundState, SessionSummary};
use std::io::{self, Write};
use std::time::Duration;

/// Renders quiz events to stdout.
///
/// Prompts are printed without a newline and flushed so the player types
/// on the same line.
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new(config: &OutputConfig) -> Self {
        if !config.color {
            colored::control::set_override(false);
        }
        Self
    }

    fn prompt(text: &str) {
        print!("{}", text);
        let _ = io::stdout().flush();
    }
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self::new(&OutputConfig::default())
    }
}

impl QuizPresenter for ConsolePresenter {
    fn on_welcome(&self, config: &QuizConfig) {
        println!("{}", ConsoleFormatter::welcome(config));
    }

    fn on_question(&self, round: &RoundState) {
        print!("{}", ConsoleFormatter::question(round));
    }

    fn on_choice_prompt(&self, option_count: usize, deadline: Duration) {
        Self::prompt(&ConsoleFormatter::choice_prompt(option_count, deadline));
    }

    fn on_invalid_choice(&self, error: &ChoiceError) {
        Self::prompt(&ConsoleFormatter::invalid_choice(error));
    }

    fn on_late_input(&self, line: &LateLine) {
        println!("{}", ConsoleFormatter::late_input(line));
    }

    fn on_round_outcome(&self, outcome: &RoundOutcome) {
        println!("{}", ConsoleFormatter::outcome(outcome));
    }

    fn on_session_summary(&self, summary: &SessionSummary) {
        println!("{}", ConsoleFormatter::summary(summary));
    }

    fn on_replay_prompt(&self) {
        Self::prompt(&ConsoleFormatter::replay_prompt());
    }

    fn on_farewell(&self) {
        println!("{}", ConsoleFormatter::farewell());
    }
}
