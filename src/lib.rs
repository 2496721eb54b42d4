//! # hilo-engine
//!
//! Round engine for a single-player "Higher/Lower/Blank" card-guessing game.
//!
//! ## The Game
//!
//! A 21-card deck holds the numbers 1–14 plus Blank, two Skips, two Passes
//! and two Reverses. A round opens on a number card (the *reference*). Each
//! turn the player calls Higher, Lower or Blank and the next card is
//! revealed:
//!
//! - a number in the called direction becomes the new reference
//! - Skip, Pass and Reverse pass through without judging the guess
//! - calling Blank is right only if the Blank comes up
//! - anything else loses the round
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: One `RoundState` per engine, owned by the engine.
//!    Callers get read-only snapshots.
//!
//! 2. **Rules as data**: The one rule the game's builds disagree on (is
//!    missing the Blank fatal?) is a `RuleSet` flag, not a code path.
//!
//! 3. **Presentation owns timing**: The engine reports `Loss` and
//!    `DeckExhausted`; restarting and pacing live in `session`.
//!
//! ## Modules
//!
//! - `core`: RNG, rule-set configuration, errors
//! - `cards`: Card values and the deck stack
//! - `rules`: Guesses, evaluation, outcomes
//! - `round`: Round state and the engine
//! - `session`: Reveal guard, restart policy, status text

pub mod cards;
pub mod core;
pub mod round;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{EngineError, GameRng, RuleSet, RuleSetName};

pub use crate::cards::{Card, Deck, Number, Special, STANDARD_DECK_SIZE};

pub use crate::rules::{evaluate, Guess, Outcome, OutcomeKind, RoundSnapshot, Verdict};

pub use crate::round::{RoundEngine, RoundState, RoundStatus};

pub use crate::session::{RestartPolicy, Session};
