//! Console text for quiz events
//!
//! Pure string builders; [`ConsolePresenter`](super::presenter::ConsolePresenter)
//! decides where the text goes.

use colored::Colorize;
use quiz_application::QuizConfig;
use quiz_domain::{
    ChoiceError, LateLine, RoundOutcome, RoundState, SessionSummary, TimeoutCause, Verdict,
    option_letter,
};
use std::time::Duration;

/// Formats quiz events for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn welcome(config: &QuizConfig) -> String {
        format!(
            "{}\n{} questions per session, {} to answer each.\nAnswer with a letter or a number.\n",
            Self::header("Timed Quiz"),
            config.rounds_per_session,
            Self::duration(config.deadline).bold()
        )
    }

    pub fn question(round: &RoundState) -> String {
        let mut output = format!(
            "\n{} {}\n",
            format!("Question {}:", round.number()).cyan().bold(),
            round.question.text()
        );
        for (letter, option) in round.question.labelled_options() {
            output.push_str(&format!("  {}) {}\n", letter.to_string().yellow(), option));
        }
        output
    }

    /// Prompt line, printed without a trailing newline
    pub fn choice_prompt(option_count: usize, deadline: Duration) -> String {
        format!(
            "Your answer (A-{} or 1-{}, {}): ",
            option_letter(option_count.saturating_sub(1)),
            option_count,
            Self::duration(deadline)
        )
    }

    pub fn invalid_choice(error: &ChoiceError) -> String {
        format!("{} {}. Try again: ", "Invalid choice:".red(), error)
    }

    pub fn late_input(line: &LateLine) -> String {
        format!(
            "{}",
            format!("(ignored \"{}\": it arrived after the deadline)", line.text).dimmed()
        )
    }

    pub fn outcome(outcome: &RoundOutcome) -> String {
        match &outcome.verdict {
            Verdict::Correct => format!("{}", "Correct!".green().bold()),
            Verdict::Incorrect { correct_answer, .. } => format!(
                "{} The correct answer was: {}",
                "Wrong!".red().bold(),
                correct_answer.bold()
            ),
            Verdict::TimedOut { correct_answer } => {
                let reason = match outcome.timeout_cause {
                    Some(TimeoutCause::InputExhausted) => "No more input.",
                    _ => "Time's up!",
                };
                format!(
                    "\n{} The correct answer was: {}",
                    reason.yellow().bold(),
                    correct_answer.bold()
                )
            }
        }
    }

    pub fn summary(summary: &SessionSummary) -> String {
        let mut output = format!(
            "\n{} {}",
            "Your score:".cyan().bold(),
            format!("{}", summary).bold()
        );
        if summary.aborted {
            output.push_str(&format!(
                " {}",
                format!(
                    "(session ended after {} of {} rounds)",
                    summary.completed_rounds, summary.total
                )
                .dimmed()
            ));
        }
        output
    }

    /// Prompt line, printed without a trailing newline
    pub fn replay_prompt() -> String {
        "Play again? (y/n): ".to_string()
    }

    pub fn farewell() -> String {
        format!("{}", "Thanks for playing!".cyan())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(40);
        format!("{}\n{:^40}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    /// Whole seconds as `5s`, anything finer as `1.5s`
    fn duration(d: Duration) -> String {
        if d.subsec_millis() == 0 {
            format!("{}s", d.as_secs())
        } else {
            format!("{:.1}s", d.as_secs_f64())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::{Question, ReadTicket, Resolution};
    use std::sync::Arc;

    fn round() -> RoundState {
        let question = Question::try_new(
            "Capital of France?",
            vec!["Berlin".into(), "Paris".into(), "Rome".into()],
            1,
        )
        .unwrap();
        RoundState::new(1, Arc::new(question), Duration::from_secs(5))
    }

    #[test]
    fn test_question_lists_labelled_options() {
        let text = ConsoleFormatter::question(&round());
        assert!(text.contains("Question 2:"));
        assert!(text.contains("Capital of France?"));
        assert!(text.contains("Berlin"));
        assert!(text.contains("Rome"));
    }

    #[test]
    fn test_choice_prompt_shows_range_and_deadline() {
        let text = ConsoleFormatter::choice_prompt(3, Duration::from_secs(5));
        assert_eq!(text, "Your answer (A-C or 1-3, 5s): ");

        let text = ConsoleFormatter::choice_prompt(2, Duration::from_millis(1500));
        assert!(text.contains("1.5s"));
    }

    #[test]
    fn test_outcome_messages() {
        let correct = round().finish(Resolution::answered(1), None);
        assert!(ConsoleFormatter::outcome(&correct).contains("Correct!"));

        let wrong = round().finish(Resolution::answered(0), None);
        let text = ConsoleFormatter::outcome(&wrong);
        assert!(text.contains("Wrong!"));
        assert!(text.contains("Paris"));

        let late = round().finish(Resolution::TimedOut, Some(TimeoutCause::Deadline));
        let text = ConsoleFormatter::outcome(&late);
        assert!(text.contains("Time's up!"));
        assert!(text.contains("Paris"));

        let closed = round().finish(Resolution::TimedOut, Some(TimeoutCause::InputExhausted));
        assert!(ConsoleFormatter::outcome(&closed).contains("No more input."));
    }

    #[test]
    fn test_summary_mentions_early_end() {
        let mut summary = SessionSummary {
            session_number: 1,
            score: 3,
            total: 5,
            completed_rounds: 5,
            aborted: false,
        };
        let text = ConsoleFormatter::summary(&summary);
        assert!(text.contains("3/5"));
        assert!(!text.contains("ended after"));

        summary.aborted = true;
        summary.completed_rounds = 2;
        assert!(ConsoleFormatter::summary(&summary).contains("ended after 2 of 5"));
    }

    #[test]
    fn test_late_input_quotes_the_line() {
        let line = LateLine {
            issued_by: ReadTicket::new(1),
            observed_by: ReadTicket::new(2),
            text: "B".to_string(),
        };
        assert!(ConsoleFormatter::late_input(&line).contains("\"B\""));
    }
}
