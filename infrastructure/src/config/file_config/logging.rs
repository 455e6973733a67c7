//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of every session
    pub session_log: Option<PathBuf>,
    /// Diagnostic (`tracing`) log file instead of stderr
    pub log_file: Option<PathBuf>,
}
