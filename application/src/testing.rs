//! Test doubles shared by the use case tests.

use crate::config::QuizConfig;
use crate::ports::input_source::InputSource;
use crate::ports::presenter::QuizPresenter;
use crate::ports::session_logger::{SessionEvent, SessionLogger};
use quiz_domain::{ChoiceError, LateLine, Question, RoundOutcome, RoundState, SessionSummary};
use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Input backed by a channel: blocks until the test sends a line,
/// reports end of input once every sender is dropped.
pub struct ChannelSource {
    lines: mpsc::Receiver<String>,
}

impl ChannelSource {
    pub fn new() -> (mpsc::Sender<String>, Self) {
        let (tx, rx) = mpsc::channel();
        (tx, Self { lines: rx })
    }
}

impl InputSource for ChannelSource {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.recv().ok())
    }
}

/// Send `line` after `delay` without blocking the test task
pub fn send_after(tx: &mpsc::Sender<String>, delay: Duration, line: &str) {
    let tx = tx.clone();
    let line = line.to_string();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(line);
    });
}

/// Presenter that records one string per callback
#[derive(Default)]
pub struct RecordingPresenter {
    events: Mutex<Vec<String>>,
}

impl RecordingPresenter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.events()
            .iter()
            .filter(|e| e.starts_with(prefix))
            .count()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl QuizPresenter for RecordingPresenter {
    fn on_welcome(&self, config: &QuizConfig) {
        self.push(format!("welcome:{}", config.rounds_per_session));
    }

    fn on_question(&self, round: &RoundState) {
        self.push(format!("question:{}:{}", round.number(), round.question.text()));
    }

    fn on_choice_prompt(&self, option_count: usize, _deadline: Duration) {
        self.push(format!("prompt:{}", option_count));
    }

    fn on_invalid_choice(&self, error: &ChoiceError) {
        self.push(format!("invalid:{}", error));
    }

    fn on_late_input(&self, line: &LateLine) {
        self.push(format!("late:{}", line.text));
    }

    fn on_round_outcome(&self, outcome: &RoundOutcome) {
        self.push(format!("outcome:{}:{}", outcome.round, outcome.verdict.as_str()));
    }

    fn on_session_summary(&self, summary: &SessionSummary) {
        self.push(format!("summary:{}", summary));
    }

    fn on_replay_prompt(&self) {
        self.push("replay?".to_string());
    }

    fn on_farewell(&self) {
        self.push("farewell".to_string());
    }
}

/// Logger that keeps every event
#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<SessionEvent>>,
}

impl RecordingLogger {
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(SessionEvent::event_type)
            .collect()
    }

    /// Serialized form of every event of `event_type`
    pub fn payloads(&self, event_type: &str) -> Vec<serde_json::Value> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.event_type() == event_type)
            .map(|e| serde_json::to_value(e).unwrap())
            .collect()
    }
}

impl SessionLogger for RecordingLogger {
    fn log(&self, event: SessionEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Question whose correct answer is always option `A`
pub fn question(text: &str) -> Question {
    Question::try_new(
        text,
        vec![
            "right".to_string(),
            "wrong".to_string(),
            "also wrong".to_string(),
            "still wrong".to_string(),
        ],
        0,
    )
    .unwrap()
}

pub fn question_pool(size: usize) -> Vec<Question> {
    (1..=size).map(|i| question(&format!("Question {}", i))).collect()
}
