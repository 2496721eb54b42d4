//! Status-line text shown after each reveal.

use super::play::RestartPolicy;
use crate::rules::{Outcome, Verdict};

/// Prompt shown when a round opens.
pub const OPENING_PROMPT: &str = "Guess Higher, Lower, or Blank";

/// Remaining-card counter text.
#[must_use]
pub fn remaining_label(remaining: usize) -> String {
    format!("Deck: {remaining}")
}

/// Status text for an outcome.
///
/// Round-ending messages mention the restart only when the policy restarts
/// on its own.
#[must_use]
pub fn status_line(outcome: &Outcome, policy: RestartPolicy) -> String {
    let reference = outcome.reference_after;
    let auto = policy == RestartPolicy::Immediate;

    match outcome.verdict {
        Verdict::Correct => "Nice! Keep going.".to_string(),
        Verdict::CorrectBlank => "Correct: Blank! Previous number stays.".to_string(),
        Verdict::PassThrough(special) => {
            format!("{special}! Previous number ({reference}) stays, guess again.")
        }
        Verdict::BlankSurvived => {
            format!("Blank! Previous number ({reference}) stays, guess again.")
        }
        Verdict::WrongDirection | Verdict::CalledBlankOnNumber | Verdict::MissedBlank => {
            if auto {
                "Wrong guess, game over. New round...".to_string()
            } else {
                "Wrong guess, game over.".to_string()
            }
        }
        Verdict::Exhausted => {
            if auto {
                "Deck exhausted, reshuffling...".to_string()
            } else {
                "Deck exhausted. Start a new game.".to_string()
            }
        }
    }
}
