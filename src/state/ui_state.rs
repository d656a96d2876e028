// src/state/ui_state.rs
use std::time::Instant;

/// How long the wheel spins before the winner is revealed. Purely
/// cosmetic; the winner is already chosen when the spin starts.
pub const SPIN_SECONDS: f32 = 2.0;

/// Presentation phase of the wheel. The suspense delay lives entirely
/// here, not in the selection logic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinPhase {
    Idle,
    Spinning { started: Instant },
    Revealed,
}

impl SpinPhase {
    pub fn is_spinning(&self) -> bool {
        matches!(self, SpinPhase::Spinning { .. })
    }
}
