//! Engine error taxonomy.
//!
//! Every variant is a caller mistake. Losing a round is not an error; it is
//! reported through `OutcomeKind::Loss`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid guess {0:?}: expected higher, lower or blank")]
    InvalidGuess(String),

    #[error("number card {0} is outside 1..=14")]
    InvalidNumber(u8),

    #[error("unknown rule set {0:?}: expected strict or lenient")]
    UnknownRuleSet(String),

    #[error("the round is lost; start a new round before revealing")]
    RevealWhileTerminal,

    #[error("no round has been started")]
    NoRound,

    #[error("no number card reached the top after {attempts} rotations")]
    NoNumberCard { attempts: usize },

    #[error("the previous outcome has not been acknowledged")]
    RevealPending,

    #[error("there is no outcome waiting to be acknowledged")]
    NothingPending,
}
