//! Run Quiz use case
//!
//! Drives sessions of timed rounds: shuffle, present, resolve, score,
//! report, and ask whether to play again.
//!
//! ```text
//! execute()
//!   ├─ on_welcome
//!   └─ loop (one iteration per session)
//!        ├─ QuizSession::next_round()  × rounds_per_session
//!        │     shuffle copy of pool → pick position i
//!        │     on_question → on_choice_prompt → ChoiceResolver::resolve
//!        │     Verdict → SessionState::record → on_round_outcome
//!        ├─ on_session_summary
//!        └─ on_replay_prompt → read_untimed → ReplayDecision
//! ```
//!
//! Rounds are strictly sequential; the resolver has fully settled one
//! round (timer disarmed, late input tagged) before the next begins.

use crate::config::QuizConfig;
use crate::ports::presenter::QuizPresenter;
use crate::ports::session_logger::{NoSessionLogger, SessionEvent, SessionLogger};
use crate::use_cases::resolve_choice::{ChoiceResolver, LineFeed, ResolveError};
use quiz_domain::{
    DomainError, Question, ReplayDecision, RoundOutcome, RoundState, SessionState, SessionSummary,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur while running a quiz
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunQuizError {
    #[error("Invalid quiz configuration: {0}")]
    Configuration(#[from] DomainError),

    #[error("Operation cancelled")]
    Cancelled,
}

impl RunQuizError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunQuizError::Cancelled)
    }
}

impl From<ResolveError> for RunQuizError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::Cancelled => RunQuizError::Cancelled,
            ResolveError::InvalidConfiguration(msg) => {
                RunQuizError::Configuration(DomainError::InvalidConfiguration(msg))
            }
        }
    }
}

/// Scores of every session played in one [`RunQuizUseCase::execute`] call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizReport {
    pub sessions: Vec<SessionSummary>,
}

impl QuizReport {
    pub fn last(&self) -> Option<&SessionSummary> {
        self.sessions.last()
    }

    pub fn was_interrupted(&self) -> bool {
        self.sessions.iter().any(|s| s.aborted)
    }
}

/// Use case for running timed quiz sessions
pub struct RunQuizUseCase {
    resolver: ChoiceResolver,
    presenter: Arc<dyn QuizPresenter>,
    logger: Arc<dyn SessionLogger>,
    cancellation_token: Option<CancellationToken>,
    rng: StdRng,
}

impl RunQuizUseCase {
    pub fn new(feed: LineFeed, presenter: Arc<dyn QuizPresenter>) -> Self {
        Self {
            resolver: ChoiceResolver::new(feed).with_presenter(presenter.clone()),
            presenter,
            logger: Arc::new(NoSessionLogger),
            cancellation_token: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Record session events through `logger`
    pub fn with_logger(mut self, logger: Arc<dyn SessionLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Set a cancellation token for graceful interruption
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.resolver = self.resolver.with_cancellation(token.clone());
        self.cancellation_token = Some(token);
        self
    }

    /// Make question order reproducible
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Play sessions until the player declines a replay.
    pub async fn execute(
        &mut self,
        questions: Vec<Question>,
        config: &QuizConfig,
    ) -> Result<QuizReport, RunQuizError> {
        config.validate(questions.len())?;
        if let Some(seed) = config.shuffle_seed {
            self.rng = StdRng::seed_from_u64(seed);
        }

        let pool: Vec<Arc<Question>> = questions.into_iter().map(Arc::new).collect();
        info!(
            "Starting quiz: {} questions, {} rounds per session, {:?} per question",
            pool.len(),
            config.rounds_per_session,
            config.deadline
        );
        self.presenter.on_welcome(config);

        let mut report = QuizReport::default();
        let mut state = SessionState::new(config.rounds_per_session);

        loop {
            let mut session = self.session_with_state(&pool, config, state);
            let error = session.play_to_end().await;
            state = session.into_state();

            let summary = state.summary();
            self.presenter.on_session_summary(&summary);
            self.logger.log(SessionEvent::SessionCompleted { summary });
            report.sessions.push(summary);

            match error {
                None => {}
                Some(RunQuizError::Cancelled) => {
                    info!("Quiz cancelled during session {}", summary.session_number);
                    break;
                }
                Some(e) => return Err(e),
            }

            if !self.ask_replay().await?.play_again() {
                break;
            }
            state = state.replay();
        }

        self.presenter.on_farewell();
        Ok(report)
    }

    /// Start one session over `pool` as a lazy sequence of rounds.
    pub fn start_session<'a>(
        &'a mut self,
        pool: &'a [Arc<Question>],
        config: &QuizConfig,
    ) -> Result<QuizSession<'a>, RunQuizError> {
        config.validate(pool.len())?;
        Ok(self.session_with_state(pool, config, SessionState::new(config.rounds_per_session)))
    }

    fn session_with_state<'a>(
        &'a mut self,
        pool: &'a [Arc<Question>],
        config: &QuizConfig,
        state: SessionState,
    ) -> QuizSession<'a> {
        self.logger.log(SessionEvent::SessionStarted {
            session: state.session_number,
            rounds: state.rounds_per_session,
            deadline_ms: u64::try_from(config.deadline.as_millis()).unwrap_or(u64::MAX),
            pool_size: pool.len(),
        });
        QuizSession {
            use_case: self,
            pool,
            config: config.clone(),
            state,
        }
    }

    async fn ask_replay(&mut self) -> Result<ReplayDecision, RunQuizError> {
        self.presenter.on_replay_prompt();
        match self.resolver.read_untimed().await {
            Ok(answer) => Ok(ReplayDecision::from_answer(answer.as_deref())),
            // Interrupted at the prompt: same as declining
            Err(ResolveError::Cancelled) => Ok(ReplayDecision::Quit),
            Err(e) => Err(e.into()),
        }
    }

    /// Fresh uniform shuffle of the whole pool, then take position `index`
    fn pick_question(
        &mut self,
        pool: &[Arc<Question>],
        index: usize,
    ) -> Result<Arc<Question>, DomainError> {
        let mut shuffled = pool.to_vec();
        shuffled.shuffle(&mut self.rng);
        shuffled
            .get(index)
            .cloned()
            .ok_or(DomainError::NotEnoughQuestions {
                requested: index + 1,
                available: pool.len(),
            })
    }
}

/// One pass of `rounds_per_session` rounds.
///
/// Rounds are produced lazily by [`next_round`](Self::next_round); the
/// sequence is finite and ends after the last round or the first error.
pub struct QuizSession<'a> {
    use_case: &'a mut RunQuizUseCase,
    pool: &'a [Arc<Question>],
    config: QuizConfig,
    state: SessionState,
}

impl QuizSession<'_> {
    /// Play the next round, or `None` when the session is over.
    pub async fn next_round(&mut self) -> Option<Result<RoundOutcome, RunQuizError>> {
        let index = self.state.next_round_index()?;
        Some(self.play_round(index).await.inspect_err(|_| self.state.abort()))
    }

    /// Play every remaining round. Returns the error that stopped the
    /// session early, if any; the score so far is kept either way.
    pub async fn play_to_end(&mut self) -> Option<RunQuizError> {
        while let Some(result) = self.next_round().await {
            if let Err(e) = result {
                warn!("Session {} stopped early: {}", self.state.session_number, e);
                return Some(e);
            }
        }
        None
    }

    pub fn summary(&self) -> SessionSummary {
        self.state.summary()
    }

    pub fn into_state(self) -> SessionState {
        self.state
    }

    async fn play_round(&mut self, index: usize) -> Result<RoundOutcome, RunQuizError> {
        let use_case = &mut *self.use_case;
        let question = use_case.pick_question(self.pool, index)?;
        let round = RoundState::new(index, question, self.config.deadline);
        let option_count = round.question.option_count();

        debug!("Round {}: {}", round.number(), round.question.text());
        use_case.presenter.on_question(&round);
        use_case
            .presenter
            .on_choice_prompt(option_count, self.config.deadline);

        let resolved = use_case
            .resolver
            .resolve_detailed(option_count, self.config.deadline)
            .await?;

        for late in &resolved.late_lines {
            use_case.logger.log(SessionEvent::LateInputDiscarded {
                session: self.state.session_number,
                round: round.number(),
                issued_by: late.issued_by.id(),
                observed_by: late.observed_by.id(),
                text: late.text.clone(),
            });
        }

        let outcome = round.finish(resolved.resolution, resolved.timeout_cause);
        self.state.record(&outcome);
        use_case.presenter.on_round_outcome(&outcome);

        use_case.logger.log(SessionEvent::RoundResolved {
            session: self.state.session_number,
            score: self.state.score(),
            invalid_attempts: resolved.invalid_attempts,
            outcome: outcome.clone(),
        });

        Ok(outcome)
    }
}
