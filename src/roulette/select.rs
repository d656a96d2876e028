// src/roulette/select.rs
use rand::prelude::*;

use super::RouletteError;

/// Picks one participant uniformly at random using the thread-local RNG.
///
/// Fewer than 2 participants is a validation failure; there is no point
/// spinning a wheel with one slice.
pub fn pick_winner(participants: &[String]) -> Result<String, RouletteError> {
    pick_winner_with_rng(participants, &mut thread_rng())
}

/// Same as [`pick_winner`] but with a caller-supplied RNG, so tests can
/// seed the selection.
pub fn pick_winner_with_rng<R: Rng + ?Sized>(
    participants: &[String],
    rng: &mut R,
) -> Result<String, RouletteError> {
    if participants.len() < 2 {
        return Err(RouletteError::InsufficientParticipants);
    }

    participants
        .choose(rng)
        .cloned()
        .ok_or(RouletteError::InsufficientParticipants)
}
