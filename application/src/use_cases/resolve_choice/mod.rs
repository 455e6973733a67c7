//! Deadline-bounded choice resolution
//!
//! [`ChoiceResolver::resolve`] races the next line of input against a
//! [`DeadlineTimer`] and settles on exactly one [`Resolution`].
//!
//! # Race rules
//!
//! The race is a `biased` `tokio::select!` polled in a fixed order:
//!
//! 1. session cancellation
//! 2. the deadline
//! 3. input
//!
//! When the deadline and a line become ready in the same poll, the deadline
//! wins. The line stays tagged with this invocation's ticket and is dropped
//! as a late line by whoever reads next.
//!
//! Invalid lines are reported and the loop continues against the same
//! timer, so retrying can never push the round past its deadline.
//!
//! # Late input
//!
//! A blocking read cannot be interrupted, so a read issued by a round that
//! timed out stays in flight. Whatever it eventually returns is reported
//! through [`QuizPresenter::on_late_input`] and never scored.

mod deadline_timer;
mod line_feed;

pub use deadline_timer::DeadlineTimer;
pub use line_feed::{FeedEvent, LineFeed};

use crate::ports::presenter::{NoPresenter, QuizPresenter};
use quiz_domain::{LateLine, ReadTicket, Resolution, TimeoutCause, parse_choice};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Errors that escape a resolver call.
///
/// Input problems never show up here: they end as `Answered` or `TimedOut`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Operation cancelled")]
    Cancelled,
}

/// Everything known about one resolver invocation
#[derive(Debug, Clone)]
pub struct ResolveOutcome {
    pub ticket: ReadTicket,
    pub resolution: Resolution,
    /// Set when `resolution` is `TimedOut`
    pub timeout_cause: Option<TimeoutCause>,
    pub elapsed: Duration,
    /// Lines rejected by [`parse_choice`] during this invocation
    pub invalid_attempts: usize,
    /// Lines from earlier invocations discarded during this one
    pub late_lines: Vec<LateLine>,
}

/// Races input against a deadline, one question at a time.
///
/// Owns the [`LineFeed`], so two invocations can never read concurrently:
/// `resolve` takes `&mut self` and every resource it creates is released
/// before it returns.
pub struct ChoiceResolver {
    feed: LineFeed,
    presenter: Arc<dyn QuizPresenter>,
    cancellation_token: Option<CancellationToken>,
}

impl ChoiceResolver {
    pub fn new(feed: LineFeed) -> Self {
        Self {
            feed,
            presenter: Arc::new(NoPresenter),
            cancellation_token: None,
        }
    }

    /// Report invalid and late input through `presenter`
    pub fn with_presenter(mut self, presenter: Arc<dyn QuizPresenter>) -> Self {
        self.presenter = presenter;
        self
    }

    /// Set a cancellation token for graceful interruption
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn is_input_exhausted(&self) -> bool {
        self.feed.is_exhausted()
    }

    /// Wait for a valid choice among `option_count` options, or `deadline`.
    pub async fn resolve(
        &mut self,
        option_count: usize,
        deadline: Duration,
    ) -> Result<Resolution, ResolveError> {
        self.resolve_detailed(option_count, deadline)
            .await
            .map(|outcome| outcome.resolution)
    }

    /// Like [`resolve`](Self::resolve), with timing and discarded input
    pub async fn resolve_detailed(
        &mut self,
        option_count: usize,
        deadline: Duration,
    ) -> Result<ResolveOutcome, ResolveError> {
        if option_count == 0 {
            return Err(ResolveError::InvalidConfiguration(
                "option count must be at least 1".to_string(),
            ));
        }
        if deadline.is_zero() {
            return Err(ResolveError::InvalidConfiguration(
                "deadline must be greater than zero".to_string(),
            ));
        }
        self.check_cancelled()?;

        let ticket = self.feed.begin();
        if let Some(pending) = self.feed.read_in_flight() {
            debug!(
                "Read issued by {} is still pending; its line will be discarded",
                pending
            );
        }
        debug!(
            "Resolving invocation {} ({} options, {:?})",
            ticket, option_count, deadline
        );

        let started = Instant::now();
        self.race(ticket, option_count, DeadlineTimer::start(deadline), started)
            .await
    }

    /// Race input for `ticket` against `timer` until one side settles.
    async fn race(
        &mut self,
        ticket: ReadTicket,
        option_count: usize,
        mut timer: DeadlineTimer,
        started: Instant,
    ) -> Result<ResolveOutcome, ResolveError> {
        let mut invalid_attempts = 0usize;
        let mut late_lines = Vec::new();

        let (resolution, timeout_cause) = loop {
            let event = tokio::select! {
                biased;
                _ = cancelled(&self.cancellation_token) => {
                    info!("Invocation {} cancelled", ticket);
                    return Err(ResolveError::Cancelled);
                }
                _ = timer.fired() => {
                    break (Resolution::TimedOut, Some(TimeoutCause::Deadline));
                }
                event = self.feed.next_event(ticket) => event,
            };

            match event {
                FeedEvent::Line(text) => match parse_choice(&text, option_count) {
                    Ok(index) => break (Resolution::answered(index), None),
                    Err(e) => {
                        invalid_attempts += 1;
                        debug!(
                            "Invalid choice for invocation {}: {} ({:?} left)",
                            ticket,
                            e,
                            timer.remaining()
                        );
                        self.presenter.on_invalid_choice(&e);
                    }
                },
                FeedEvent::Late(line) => {
                    self.presenter.on_late_input(&line);
                    late_lines.push(line);
                }
                FeedEvent::Exhausted => {
                    break (Resolution::TimedOut, Some(TimeoutCause::InputExhausted));
                }
            }
        };
        timer.cancel();

        let elapsed = started.elapsed();
        info!(
            "Invocation {} resolved as {} after {:?}",
            ticket, resolution, elapsed
        );

        Ok(ResolveOutcome {
            ticket,
            resolution,
            timeout_cause,
            elapsed,
            invalid_attempts,
            late_lines,
        })
    }

    /// Read one line with no deadline, under a fresh ticket.
    ///
    /// Late lines are reported and skipped. Returns `Ok(None)` when the
    /// input is closed.
    pub async fn read_untimed(&mut self) -> Result<Option<String>, ResolveError> {
        self.check_cancelled()?;
        let ticket = self.feed.begin();

        loop {
            let event = tokio::select! {
                biased;
                _ = cancelled(&self.cancellation_token) => {
                    return Err(ResolveError::Cancelled);
                }
                event = self.feed.next_event(ticket) => event,
            };

            match event {
                FeedEvent::Line(text) => return Ok(Some(text)),
                FeedEvent::Late(line) => self.presenter.on_late_input(&line),
                FeedEvent::Exhausted => return Ok(None),
            }
        }
    }

    fn check_cancelled(&self) -> Result<(), ResolveError> {
        if let Some(token) = &self.cancellation_token
            && token.is_cancelled()
        {
            return Err(ResolveError::Cancelled);
        }
        Ok(())
    }
}

async fn cancelled(token: &Option<CancellationToken>) {
    match token {
        Some(token) => token.cancelled().await,
        None => std::future::pending().await,
    }
}
