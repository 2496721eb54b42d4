//! Presentation-side session.
//!
//! A `Session` wraps one `RoundEngine` and enforces the two rules the
//! presentation layer owns:
//! - at most one reveal in flight: an outcome stays *pending* until the
//!   presentation acknowledges it, and reveals are refused meanwhile
//! - what happens after a round ends, chosen by `RestartPolicy`

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::status;
use crate::core::EngineError;
use crate::round::RoundEngine;
use crate::rules::{Guess, Outcome, OutcomeKind, RoundSnapshot};

/// What to do once a round has been lost or its deck has run out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestartPolicy {
    /// Start a new round as soon as the ending outcome is acknowledged.
    #[default]
    Immediate,
    /// Wait for an explicit `new_game`.
    Manual,
}

/// One player's game, from the presentation layer's point of view.
#[derive(Clone, Debug)]
pub struct Session {
    engine: RoundEngine,
    policy: RestartPolicy,
    pending: Option<Outcome>,
    rounds_started: u32,
    streak: u32,
}

impl Session {
    /// Wrap an engine. No round is started until `new_game`.
    #[must_use]
    pub fn new(engine: RoundEngine, policy: RestartPolicy) -> Self {
        Self {
            engine,
            policy,
            pending: None,
            rounds_started: 0,
            streak: 0,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    #[must_use]
    pub fn policy(&self) -> RestartPolicy {
        self.policy
    }

    /// The outcome waiting to be acknowledged, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&Outcome> {
        self.pending.as_ref()
    }

    /// Is a reveal still being shown?
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    /// Consecutive surviving reveals in the current round.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<RoundSnapshot> {
        self.engine.snapshot()
    }

    /// Start a fresh round, dropping whatever was in progress or pending.
    pub fn new_game(&mut self) -> Result<RoundSnapshot, EngineError> {
        let snapshot = self.engine.start_round()?;
        self.pending = None;
        self.streak = 0;
        self.rounds_started += 1;
        info!(
            round = self.rounds_started,
            reference = snapshot.reference.value(),
            "new round"
        );
        Ok(snapshot)
    }

    /// Reveal the next card. Refused while an earlier outcome is pending.
    pub fn reveal(&mut self, guess: Guess) -> Result<Outcome, EngineError> {
        if self.pending.is_some() {
            warn!(%guess, "reveal rejected: previous outcome not acknowledged");
            return Err(EngineError::RevealPending);
        }

        let outcome = self.engine.reveal(guess)?;
        match outcome.kind {
            OutcomeKind::Continue => self.streak += 1,
            OutcomeKind::Loss => info!(
                streak = self.streak,
                revealed = ?outcome.revealed,
                "round lost"
            ),
            OutcomeKind::DeckExhausted => info!(streak = self.streak, "deck exhausted"),
        }

        self.pending = Some(outcome);
        Ok(outcome)
    }

    /// Parse a guess from text and reveal.
    pub fn reveal_input(&mut self, input: &str) -> Result<Outcome, EngineError> {
        let guess: Guess = input.parse()?;
        self.reveal(guess)
    }

    /// Mark the pending outcome as shown.
    ///
    /// Returns the new round's snapshot when the restart policy started one.
    pub fn acknowledge(&mut self) -> Result<Option<RoundSnapshot>, EngineError> {
        let outcome = self.pending.take().ok_or(EngineError::NothingPending)?;

        if outcome.ends_round() && self.policy == RestartPolicy::Immediate {
            return self.new_game().map(Some);
        }
        Ok(None)
    }

    /// Status text for an outcome under this session's restart policy.
    #[must_use]
    pub fn status_line(&self, outcome: &Outcome) -> String {
        status::status_line(outcome, self.policy)
    }
}
