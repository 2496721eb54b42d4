//! Round state.
//!
//! One `RoundState` covers one playthrough of a deck. It is owned by a
//! `RoundEngine`; callers only ever see it through `&RoundState` or the
//! snapshot types.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck, Number};
use crate::rules::RoundSnapshot;

/// Whether the round can still be played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    #[default]
    InProgress,
    /// Terminal until a new round replaces the state.
    Lost,
}

/// Everything a single round tracks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    deck: Deck,
    reference: Number,
    status: RoundStatus,
    last_revealed: Option<Card>,
}

impl RoundState {
    /// A fresh in-progress round with the opening reference already drawn.
    #[must_use]
    pub fn new(deck: Deck, reference: Number) -> Self {
        Self {
            deck,
            reference,
            status: RoundStatus::InProgress,
            last_revealed: None,
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The number the next draw is compared against.
    #[must_use]
    pub fn reference(&self) -> Number {
        self.reference
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.status == RoundStatus::Lost
    }

    /// The card drawn by the most recent reveal.
    #[must_use]
    pub fn last_revealed(&self) -> Option<Card> {
        self.last_revealed
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            reference: self.reference,
            remaining: self.remaining(),
        }
    }

    // === Mutation (engine only) ===

    pub(crate) fn draw(&mut self) -> Option<Card> {
        let card = self.deck.draw()?;
        self.last_revealed = Some(card);
        Some(card)
    }

    pub(crate) fn set_reference(&mut self, reference: Number) {
        self.reference = reference;
    }

    pub(crate) fn mark_lost(&mut self) {
        self.status = RoundStatus::Lost;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Special;

    #[test]
    fn test_new_round_state() {
        let deck = Deck::from_cards(vec![Card::Special(Special::Skip), Card::number(3).unwrap()]);
        let state = RoundState::new(deck, Number::new(8).unwrap());

        assert_eq!(state.status(), RoundStatus::InProgress);
        assert_eq!(state.reference().value(), 8);
        assert_eq!(state.remaining(), 2);
        assert_eq!(state.last_revealed(), None);
        assert_eq!(
            state.snapshot(),
            RoundSnapshot {
                reference: Number::new(8).unwrap(),
                remaining: 2
            }
        );
    }

    #[test]
    fn test_draw_records_last_revealed() {
        let three = Card::number(3).unwrap();
        let mut state = RoundState::new(Deck::from_cards(vec![three]), Number::new(8).unwrap());

        assert_eq!(state.draw(), Some(three));
        assert_eq!(state.last_revealed(), Some(three));
        assert_eq!(state.draw(), None);
        assert_eq!(state.last_revealed(), Some(three));
    }

    #[test]
    fn test_mark_lost() {
        let mut state = RoundState::new(Deck::default(), Number::new(1).unwrap());
        state.mark_lost();
        assert!(state.is_lost());
    }
}
