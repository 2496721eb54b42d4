//! Card system: card values and the draw stack.
//!
//! ## Key Types
//!
//! - `Number`: Validated number value in 1..=14
//! - `Special`: Blank, Skip, Pass, Reverse
//! - `Card`: Tagged union of the two
//! - `Deck`: Ordered stack, top at the end

pub mod card;
pub mod deck;

pub use card::{Card, Number, Special, MAX_NUMBER, MIN_NUMBER};
pub use deck::{Deck, STANDARD_DECK_SIZE};
