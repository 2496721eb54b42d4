//! The draw stack.
//!
//! `Deck` is an ordered stack of cards. The top of the stack (the draw
//! position) is the end of the underlying vector, so drawing is a pop.
//!
//! ## Standard Composition
//!
//! Numbers 1–14 once each, Blank once, Skip/Pass/Reverse twice each:
//! 21 cards.

use serde::{Deserialize, Serialize};

use super::card::{Card, Number, Special};
use crate::core::{EngineError, GameRng};

/// Number of cards in a standard deck.
pub const STANDARD_DECK_SIZE: usize = 21;

/// An ordered stack of cards. The last element is the top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The standard 21-card deck in build order.
    ///
    /// Numbers come first in ascending order, then the specials. Callers
    /// shuffle before play.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards: Vec<Card> = Number::all().map(Card::Number).collect();
        for special in Special::ALL {
            cards.extend(std::iter::repeat(Card::Special(special)).take(special.copies()));
        }
        Self { cards }
    }

    /// A deck holding exactly these cards; the last card is on top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffle in place (Fisher–Yates).
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Build and shuffle a fresh standard deck.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::standard();
        deck.shuffle(rng);
        deck
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card at the draw position.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Move the top card to the bottom, keeping the order of the rest.
    pub fn rotate_top_to_bottom(&mut self) {
        if !self.cards.is_empty() {
            self.cards.rotate_right(1);
        }
    }

    /// Rotate until a number card is on top.
    ///
    /// Returns the number of rotations performed. Gives up with
    /// `EngineError::NoNumberCard` once `limit` rotations have not
    /// surfaced a number, or immediately on an empty deck.
    pub fn rotate_to_number(&mut self, limit: usize) -> Result<usize, EngineError> {
        let mut attempts = 0;
        loop {
            match self.top() {
                Some(card) if card.is_number() => return Ok(attempts),
                Some(_) if attempts < limit => {
                    self.rotate_top_to_bottom();
                    attempts += 1;
                }
                _ => return Err(EngineError::NoNumberCard { attempts }),
            }
        }
    }

    /// How many copies of `card` the deck holds.
    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.cards.iter().filter(|&&c| c == card).count()
    }

    /// Is this a permutation of the standard 21-card multiset?
    #[must_use]
    pub fn is_standard(&self) -> bool {
        self.len() == STANDARD_DECK_SIZE
            && Number::all().all(|n| self.count(Card::Number(n)) == 1)
            && Special::ALL
                .iter()
                .all(|&s| self.count(Card::Special(s)) == s.copies())
    }
}
