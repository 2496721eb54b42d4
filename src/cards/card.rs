//! Card values.
//!
//! A card is either a number from 1 to 14 or one of four special cards.
//! The variant is explicit so rules never have to inspect a label to find
//! out what kind of card they hold.

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

/// Lowest number card.
pub const MIN_NUMBER: u8 = 1;
/// Highest number card.
pub const MAX_NUMBER: u8 = 14;

/// A validated number card value in `1..=14`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Number(u8);

impl Number {
    /// Create a number card value.
    pub fn new(value: u8) -> Result<Self, EngineError> {
        if (MIN_NUMBER..=MAX_NUMBER).contains(&value) {
            Ok(Self(value))
        } else {
            Err(EngineError::InvalidNumber(value))
        }
    }

    /// Get the raw value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All number values, ascending.
    pub fn all() -> impl Iterator<Item = Number> {
        (MIN_NUMBER..=MAX_NUMBER).map(Number)
    }
}

impl TryFrom<u8> for Number {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Number> for u8 {
    fn from(n: Number) -> Self {
        n.0
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-number cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Special {
    /// Must be called to survive drawing it.
    Blank,
    Skip,
    Pass,
    Reverse,
}

impl Special {
    /// How many copies of this card a standard deck holds.
    #[must_use]
    pub const fn copies(self) -> usize {
        match self {
            Special::Blank => 1,
            Special::Skip | Special::Pass | Special::Reverse => 2,
        }
    }

    /// Skip, Pass and Reverse pass through without evaluating the guess.
    #[must_use]
    pub const fn is_pass_through(self) -> bool {
        !matches!(self, Special::Blank)
    }

    pub const ALL: [Special; 4] = [Special::Blank, Special::Skip, Special::Pass, Special::Reverse];
}

impl std::fmt::Display for Special {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Special::Blank => "Blank",
            Special::Skip => "Skip",
            Special::Pass => "Pass",
            Special::Reverse => "Reverse",
        };
        f.write_str(label)
    }
}

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Number(Number),
    Special(Special),
}

impl Card {
    /// Number card shorthand.
    pub fn number(value: u8) -> Result<Self, EngineError> {
        Number::new(value).map(Card::Number)
    }

    /// The number value, if this is a number card.
    #[must_use]
    pub fn as_number(self) -> Option<Number> {
        match self {
            Card::Number(n) => Some(n),
            Card::Special(_) => None,
        }
    }

    /// The special identity, if this is a special card.
    #[must_use]
    pub fn as_special(self) -> Option<Special> {
        match self {
            Card::Special(s) => Some(s),
            Card::Number(_) => None,
        }
    }

    #[must_use]
    pub fn is_number(self) -> bool {
        matches!(self, Card::Number(_))
    }
}

impl From<Number> for Card {
    fn from(n: Number) -> Self {
        Card::Number(n)
    }
}

impl From<Special> for Card {
    fn from(s: Special) -> Self {
        Card::Special(s)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Number(n) => n.fmt(f),
            Card::Special(s) => s.fmt(f),
        }
    }
}
