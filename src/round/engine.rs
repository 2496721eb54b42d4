//! The round engine.
//!
//! `RoundEngine` owns one `RoundState`, the RNG that shuffles its decks and
//! the rule set it plays by. It is synchronous: `start_round` and `reveal`
//! run to completion and return a definite result.
//!
//! ## Lifecycle
//!
//! ```
//! use hilo_engine::{Guess, OutcomeKind, RoundEngine, RuleSet};
//!
//! let mut engine = RoundEngine::new(RuleSet::strict(), 42);
//! let snapshot = engine.start_round().unwrap();
//! assert_eq!(snapshot.remaining, 20);
//!
//! let outcome = engine.reveal(Guess::Higher).unwrap();
//! assert_eq!(outcome.remaining, 19);
//! if outcome.kind == OutcomeKind::Loss {
//!     engine.start_round().unwrap();
//! }
//! ```

use tracing::debug;

use super::state::RoundState;
use crate::cards::Deck;
use crate::core::{EngineError, GameRng, RuleSet};
use crate::rules::{evaluate, Guess, Outcome, OutcomeKind, RoundSnapshot};

/// Drives one playthrough at a time.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    rules: RuleSet,
    rng: GameRng,
    state: Option<RoundState>,
}

impl RoundEngine {
    /// Create an engine with a fixed shuffle seed.
    #[must_use]
    pub fn new(rules: RuleSet, seed: u64) -> Self {
        Self {
            rules,
            rng: GameRng::new(seed),
            state: None,
        }
    }

    /// Create an engine seeded from OS entropy.
    #[must_use]
    pub fn from_entropy(rules: RuleSet) -> Self {
        Self {
            rules,
            rng: GameRng::from_entropy(),
            state: None,
        }
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Seed of the shuffle RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Current round, if one has been started.
    #[must_use]
    pub fn state(&self) -> Option<&RoundState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<RoundSnapshot> {
        self.state.as_ref().map(RoundState::snapshot)
    }

    /// Start a fresh round from a newly shuffled standard deck.
    ///
    /// Discards any previous round, lost or not.
    pub fn start_round(&mut self) -> Result<RoundSnapshot, EngineError> {
        let deck = Deck::shuffled(&mut self.rng);
        self.start_round_with(deck)
    }

    /// Start a round from a caller-supplied deck (last card on top).
    ///
    /// Rotates specials off the top until a number surfaces, then draws it
    /// as the opening reference. The previous round is kept if this fails.
    pub fn start_round_with(&mut self, mut deck: Deck) -> Result<RoundSnapshot, EngineError> {
        let rotations = deck.rotate_to_number(self.rules.rotation_limit)?;
        let reference = deck
            .draw()
            .and_then(|card| card.as_number())
            .ok_or(EngineError::NoNumberCard { attempts: rotations })?;

        let state = RoundState::new(deck, reference);
        let snapshot = state.snapshot();
        self.state = Some(state);

        debug!(
            seed = self.rng.seed(),
            rotations,
            reference = reference.value(),
            remaining = snapshot.remaining,
            "round started"
        );
        Ok(snapshot)
    }

    /// Draw the next card and evaluate `guess` against it.
    ///
    /// An empty deck yields `OutcomeKind::DeckExhausted` without drawing.
    /// A lost round refuses the call and stays untouched.
    pub fn reveal(&mut self, guess: Guess) -> Result<Outcome, EngineError> {
        let state = self.state.as_mut().ok_or(EngineError::NoRound)?;
        if state.is_lost() {
            return Err(EngineError::RevealWhileTerminal);
        }

        let reference = state.reference();
        let Some(drawn) = state.draw() else {
            debug!(reference = reference.value(), "deck exhausted");
            return Ok(Outcome::exhausted(reference));
        };

        let verdict = evaluate(drawn, guess, reference, &self.rules);
        let reference_after = verdict.next_reference(drawn, reference);
        state.set_reference(reference_after);

        let kind = verdict.kind();
        if kind == OutcomeKind::Loss {
            state.mark_lost();
        }

        debug!(
            %guess,
            card = %drawn,
            ?verdict,
            reference = reference_after.value(),
            remaining = state.remaining(),
            "card revealed"
        );

        Ok(Outcome {
            kind,
            verdict,
            revealed: Some(drawn),
            reference_after,
            remaining: state.remaining(),
        })
    }
}
