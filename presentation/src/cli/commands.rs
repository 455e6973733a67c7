//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for timed-quiz
#[derive(Parser, Debug)]
#[command(name = "timed-quiz")]
#[command(author, version, about = "Timed multiple-choice quiz in the terminal")]
#[command(long_about = r#"
Timed Quiz asks a series of multiple-choice questions. Each question must be
answered before its deadline; an answer that arrives too late scores nothing.

Answer with the option letter (A, b, ...) or its number (1, 2, ...).
After each session you can choose to play again.

Configuration files are loaded from (in priority order):
1. TIMED_QUIZ_* environment variables (e.g. TIMED_QUIZ_QUIZ__DEADLINE_SECONDS=10)
2. --config <path>     Explicit config file
3. ./quiz.toml         Project-level config
4. ~/.config/timed-quiz/config.toml   Global config

Example:
  timed-quiz
  timed-quiz --rounds 3 --deadline 10
  timed-quiz --questions my-bank.json --seed 42
"#)]
pub struct Cli {
    /// Question bank (JSON); the built-in bank is used when omitted
    #[arg(short, long, value_name = "PATH")]
    pub questions: Option<PathBuf>,

    /// Rounds per session
    #[arg(short, long, value_name = "N")]
    pub rounds: Option<usize>,

    /// Seconds allowed per question
    #[arg(short, long, value_name = "SECONDS")]
    pub deadline: Option<u64>,

    /// Fixed shuffle seed for reproducible question order
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Append a JSONL transcript of every session to this file
    #[arg(long, value_name = "PATH")]
    pub session_log: Option<PathBuf>,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}
