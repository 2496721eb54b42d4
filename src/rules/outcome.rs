//! Read-only projections handed to the presentation layer.

use serde::{Deserialize, Serialize};

use super::evaluate::{OutcomeKind, Verdict};
use crate::cards::{Card, Number};

/// Round view right after `start_round`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// The opening number card.
    pub reference: Number,
    /// Cards left to draw.
    pub remaining: usize,
}

/// Result of one reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub verdict: Verdict,
    /// The drawn card. `None` only when the deck was exhausted.
    pub revealed: Option<Card>,
    /// Reference number once the verdict is applied.
    pub reference_after: Number,
    /// Cards left to draw.
    pub remaining: usize,
}

impl Outcome {
    /// Outcome for a reveal on an empty deck.
    #[must_use]
    pub fn exhausted(reference: Number) -> Self {
        Self {
            kind: OutcomeKind::DeckExhausted,
            verdict: Verdict::Exhausted,
            revealed: None,
            reference_after: reference,
            remaining: 0,
        }
    }

    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.kind == OutcomeKind::Loss
    }

    /// Does the caller need to start a new round?
    #[must_use]
    pub fn ends_round(&self) -> bool {
        matches!(self.kind, OutcomeKind::Loss | OutcomeKind::DeckExhausted)
    }
}
