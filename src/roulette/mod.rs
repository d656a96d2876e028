// src/roulette/mod.rs
pub mod parse;
pub mod select;
pub mod session;

// Re-export commonly used types
pub use parse::parse_participants;
pub use select::{pick_winner, pick_winner_with_rng};
pub use session::RouletteState;

use thiserror::Error;

/// The only failure mode of the roulette: parsing degenerates to an empty
/// list and selection over a valid list cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RouletteError {
    #[error("at least 2 participants are required to spin the roulette")]
    InsufficientParticipants,
}
