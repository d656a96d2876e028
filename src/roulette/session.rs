// src/roulette/session.rs
use rand::Rng;

use super::{parse_participants, pick_winner, pick_winner_with_rng, RouletteError};

/// Participant list and winner for one roulette session.
///
/// Owned by the UI layer's `AppState` and passed into the core explicitly;
/// there is no module-wide singleton. Invariant: `winner`, when present, is
/// always an element of `participants`.
#[derive(Debug, Clone, Default)]
pub struct RouletteState {
    pub participants: Vec<String>,
    pub winner: Option<String>,
}

impl RouletteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `input`, validates the participant count, and selects a
    /// winner uniformly at random.
    ///
    /// On success the parsed list and the winner replace the previous
    /// session. On validation failure the previous winner is cleared and
    /// the participant list is left untouched.
    pub fn spin(&mut self, input: &str) -> Result<String, RouletteError> {
        let participants = parse_participants(input);
        match pick_winner(&participants) {
            Ok(winner) => {
                self.participants = participants;
                self.winner = Some(winner.clone());
                Ok(winner)
            }
            Err(err) => {
                self.winner = None;
                Err(err)
            }
        }
    }

    /// [`RouletteState::spin`] with a caller-supplied RNG, for tests.
    pub fn spin_with_rng<R: Rng + ?Sized>(
        &mut self,
        input: &str,
        rng: &mut R,
    ) -> Result<String, RouletteError> {
        let participants = parse_participants(input);
        match pick_winner_with_rng(&participants, rng) {
            Ok(winner) => {
                self.participants = participants;
                self.winner = Some(winner.clone());
                Ok(winner)
            }
            Err(err) => {
                self.winner = None;
                Err(err)
            }
        }
    }
}
