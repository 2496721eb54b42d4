//! Player guesses.

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

/// What the player calls before the next card is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Guess {
    /// The next number is higher than the reference.
    Higher,
    /// The next number is lower than the reference.
    Lower,
    /// The next card is the Blank.
    Blank,
}

impl Guess {
    pub const ALL: [Guess; 3] = [Guess::Higher, Guess::Lower, Guess::Blank];
}

impl std::str::FromStr for Guess {
    type Err = EngineError;

    /// Accepts the full word or its first letter, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "higher" | "h" => Ok(Guess::Higher),
            "lower" | "l" => Ok(Guess::Lower),
            "blank" | "b" => Ok(Guess::Blank),
            _ => Err(EngineError::InvalidGuess(s.to_string())),
        }
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Guess::Higher => write!(f, "higher"),
            Guess::Lower => write!(f, "lower"),
            Guess::Blank => write!(f, "blank"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("higher".parse::<Guess>(), Ok(Guess::Higher));
        assert_eq!("L".parse::<Guess>(), Ok(Guess::Lower));
        assert_eq!(" Blank\n".parse::<Guess>(), Ok(Guess::Blank));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "same".parse::<Guess>(),
            Err(EngineError::InvalidGuess("same".to_string()))
        );
        assert!("".parse::<Guess>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for guess in Guess::ALL {
            assert_eq!(guess.to_string().parse::<Guess>(), Ok(guess));
        }
    }
}
