//! JSONL transcript of quiz sessions.
//!
//! Each [`SessionEvent`] becomes one line: its own fields (including the
//! `type` tag) plus an RFC 3339 `timestamp`. The file is opened in append
//! mode so transcripts of several runs accumulate.

use quiz_application::{SessionEvent, SessionLogger};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

#[derive(Serialize)]
struct TranscriptLine<'a> {
    timestamp: String,
    #[serde(flatten)]
    event: &'a SessionEvent,
}

/// Appends session events to a JSONL file.
///
/// `LineWriter` pushes every completed line to the file, so the transcript
/// is complete even if the process is interrupted.
pub struct JsonlSessionLogger {
    writer: Mutex<LineWriter<File>>,
    path: PathBuf,
}

impl JsonlSessionLogger {
    /// Open `path` for appending, creating it and its parent directories.
    pub fn new(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Mutex::new(LineWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionLogger for JsonlSessionLogger {
    fn log(&self, event: SessionEvent) {
        let line = TranscriptLine {
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            event: &event,
        };
        let json = match serde_json::to_string(&line) {
            Ok(json) => json,
            Err(e) => {
                warn!("Could not serialize {} event: {}", event.event_type(), e);
                return;
            }
        };

        if let Ok(mut writer) = self.writer.lock()
            && let Err(e) = writeln!(writer, "{}", json)
        {
            warn!("Could not write to {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::{Question, Resolution, RoundState, SessionSummary};
    use std::sync::Arc;
    use std::time::Duration;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn round_resolved() -> SessionEvent {
        let question =
            Question::try_new("2 + 2?", vec!["3".to_string(), "4".to_string()], 1).unwrap();
        let outcome = RoundState::new(0, Arc::new(question), Duration::from_secs(5))
            .finish(Resolution::answered(1), None);
        SessionEvent::RoundResolved {
            session: 1,
            score: 1,
            invalid_attempts: 0,
            outcome,
        }
    }

    #[test]
    fn test_writes_one_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("session.jsonl");
        let logger = JsonlSessionLogger::new(&path).unwrap();

        logger.log(round_resolved());
        logger.log(SessionEvent::SessionCompleted {
            summary: SessionSummary {
                session_number: 1,
                score: 1,
                total: 1,
                completed_rounds: 1,
                aborted: false,
            },
        });

        // No drop needed: each line is on disk once written
        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["type"], "round_resolved");
        assert_eq!(records[0]["round"], 1);
        assert_eq!(records[0]["verdict"]["verdict"], "correct");
        assert_eq!(records[0]["question"]["text"], "2 + 2?");
        assert!(records[0]["timestamp"].is_string());
        assert_eq!(records[1]["type"], "session_completed");
        assert_eq!(records[1]["score"], 1);
    }

    #[test]
    fn test_reopening_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.jsonl");

        for session in 1..=2 {
            let logger = JsonlSessionLogger::new(&path).unwrap();
            logger.log(SessionEvent::SessionStarted {
                session,
                rounds: 5,
                deadline_ms: 5_000,
                pool_size: 10,
            });
        }

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["session"], 2);
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        assert!(JsonlSessionLogger::new(blocker.join("session.jsonl")).is_err());
    }
}
