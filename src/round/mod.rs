//! Round state and the engine that drives it.
//!
//! ## State Machine
//!
//! - `InProgress` → `InProgress`: correct guess, special pass-through,
//!   survived Blank, or an exhausted deck
//! - `InProgress` → `Lost`: wrong direction, Blank called on a number,
//!   missed Blank under strict rules
//! - `Lost` is terminal; `start_round` replaces the whole state

pub mod engine;
pub mod state;

pub use engine::RoundEngine;
pub use state::{RoundState, RoundStatus};
