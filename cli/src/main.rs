//! CLI entrypoint for Timed Quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use quiz_application::{LineFeed, NoSessionLogger, RunQuizError, RunQuizUseCase, SessionLogger};
use quiz_domain::Question;
use quiz_infrastructure::{
    ConfigLoader, FileConfig, JsonQuestionLoader, JsonlSessionLogger, LineReader,
};
use quiz_presentation::{Cli, ConsolePresenter, OutputConfig};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        println!();
        println!("Effective configuration:");
        println!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let _log_guard = init_tracing(cli.verbose, config.logging.log_file.as_deref())?;
    info!("Starting Timed Quiz");

    let issues = config.validate();
    if !issues.is_empty() {
        let messages: Vec<String> = issues.iter().map(|e| e.to_string()).collect();
        bail!("Invalid configuration: {}", messages.join("; "));
    }

    let questions = load_questions(config.questions.path.as_deref())?;
    let quiz_config = config.quiz.to_quiz_config();

    // === Dependency Injection ===
    let presenter = Arc::new(ConsolePresenter::new(&OutputConfig {
        color: config.output.color,
    }));
    let logger: Arc<dyn SessionLogger> = match config.logging.session_log.as_deref() {
        Some(path) => match JsonlSessionLogger::new(path) {
            Ok(logger) => {
                info!("Session transcript: {}", logger.path().display());
                Arc::new(logger)
            }
            Err(e) => {
                warn!("Could not open session log {}: {}", path.display(), e);
                Arc::new(NoSessionLogger)
            }
        },
        None => Arc::new(NoSessionLogger),
    };
    let feed = LineFeed::spawn(LineReader::stdin()).context("Failed to start input reader")?;

    let cancellation = CancellationToken::new();
    tokio::spawn(cancel_on_signal(cancellation.clone()));

    let mut use_case = RunQuizUseCase::new(feed, presenter)
        .with_logger(logger)
        .with_cancellation(cancellation);

    match use_case.execute(questions, &quiz_config).await {
        Ok(report) => {
            if report.was_interrupted() {
                println!();
                println!("Quiz interrupted.");
            }
            info!("Played {} session(s)", report.sessions.len());
            Ok(())
        }
        Err(RunQuizError::Cancelled) => {
            println!();
            println!("Quiz interrupted.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Command-line flags take precedence over every config source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(rounds) = cli.rounds {
        config.quiz.rounds_per_session = rounds;
    }
    if let Some(deadline) = cli.deadline {
        config.quiz.deadline_seconds = deadline;
    }
    if cli.seed.is_some() {
        config.quiz.shuffle_seed = cli.seed;
    }
    if let Some(path) = &cli.questions {
        config.questions.path = Some(path.clone());
    }
    if let Some(path) = &cli.session_log {
        config.logging.session_log = Some(path.clone());
    }
    if let Some(path) = &cli.log_file {
        config.logging.log_file = Some(path.clone());
    }
    if cli.no_color {
        config.output.color = false;
    }
}

/// Initialize logging based on verbosity level
///
/// Diagnostics go to stderr unless a log file is configured; the returned
/// guard must live until exit so buffered lines are flushed.
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn load_questions(path: Option<&Path>) -> Result<Vec<Question>> {
    let questions = match path {
        Some(path) => JsonQuestionLoader::from_path(path)?,
        None => JsonQuestionLoader::builtin()?,
    };
    Ok(questions)
}

/// Cancel the quiz on Ctrl-C (or SIGTERM on unix)
async fn cancel_on_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Interrupt received, stopping quiz");
    token.cancel();
}
