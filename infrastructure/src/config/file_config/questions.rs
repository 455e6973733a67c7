//! Question bank configuration from TOML (`[questions]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw question bank configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuestionsConfig {
    /// JSON question bank; the built-in bank is used when unset
    pub path: Option<PathBuf>,
}
