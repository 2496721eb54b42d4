//! Game rules: guesses, evaluation, outcomes.
//!
//! Evaluation is pure. The round engine draws a card, asks `evaluate` for a
//! `Verdict`, and applies it to its own state. The rules never interpret
//! presentation concepts such as animation or restart timing.

pub mod evaluate;
pub mod guess;
pub mod outcome;

pub use evaluate::{evaluate, OutcomeKind, Verdict};
pub use guess::Guess;
pub use outcome::{Outcome, RoundSnapshot};
