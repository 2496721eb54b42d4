//! Core engine types: RNG, rule-set configuration, errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{RuleSet, RuleSetName, DEFAULT_ROTATION_LIMIT};
pub use error::EngineError;
pub use rng::GameRng;
