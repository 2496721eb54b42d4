//! Guess evaluation.
//!
//! `evaluate` is a pure function of the drawn card, the guess, the current
//! reference number and the rule set. It never touches the deck; the round
//! engine draws the card and applies the resulting `Verdict`.

use serde::{Deserialize, Serialize};

use super::guess::Guess;
use crate::cards::{Card, Number, Special};
use crate::core::RuleSet;

/// How a round reacts to an outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeKind {
    /// The round goes on.
    Continue,
    /// The round is over.
    Loss,
    /// Nothing left to draw; the caller should start a new round.
    DeckExhausted,
}

/// Why a reveal ended the way it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Number drawn in the called direction; it becomes the reference.
    Correct,
    /// Blank drawn and called.
    CorrectBlank,
    /// Skip, Pass or Reverse drawn; the guess was not evaluated.
    PassThrough(Special),
    /// Blank drawn without being called, under lenient rules.
    BlankSurvived,
    /// Number drawn against the called direction.
    WrongDirection,
    /// Blank called but a number was drawn.
    CalledBlankOnNumber,
    /// Blank drawn without being called, under strict rules.
    MissedBlank,
    /// Empty deck; no card was drawn.
    Exhausted,
}

impl Verdict {
    #[must_use]
    pub fn kind(self) -> OutcomeKind {
        match self {
            Verdict::Correct
            | Verdict::CorrectBlank
            | Verdict::PassThrough(_)
            | Verdict::BlankSurvived => OutcomeKind::Continue,
            Verdict::WrongDirection | Verdict::CalledBlankOnNumber | Verdict::MissedBlank => {
                OutcomeKind::Loss
            }
            Verdict::Exhausted => OutcomeKind::DeckExhausted,
        }
    }

    /// The reference number after this verdict is applied.
    #[must_use]
    pub fn next_reference(self, drawn: Card, reference: Number) -> Number {
        match (self, drawn) {
            (Verdict::Correct, Card::Number(n)) => n,
            _ => reference,
        }
    }
}

/// Evaluate a drawn card against a guess.
#[must_use]
pub fn evaluate(drawn: Card, guess: Guess, reference: Number, rules: &RuleSet) -> Verdict {
    match drawn {
        Card::Number(_) if guess == Guess::Blank => Verdict::CalledBlankOnNumber,
        Card::Number(next) => {
            let correct = (guess == Guess::Higher && next > reference)
                || (guess == Guess::Lower && next < reference);
            if correct {
                Verdict::Correct
            } else {
                Verdict::WrongDirection
            }
        }
        Card::Special(Special::Blank) => {
            if guess == Guess::Blank {
                Verdict::CorrectBlank
            } else if rules.blank_is_strict {
                Verdict::MissedBlank
            } else {
                Verdict::BlankSurvived
            }
        }
        Card::Special(special) => Verdict::PassThrough(special),
    }
}
