//! Presentation-side session: reveal guard, restart policy, status text.

mod play;
pub mod status;

pub use play::{RestartPolicy, Session};
pub use status::{remaining_label, status_line, OPENING_PROMPT};
