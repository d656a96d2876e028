// src/state/mod.rs
use std::time::Instant;

use crate::chart::ChartSpec;
use crate::roulette::RouletteState;

pub mod ui_state;

pub use ui_state::{SpinPhase, SPIN_SECONDS};

// Core application state
#[derive(Debug)]
pub struct AppState {
    // Raw text input, parsed fresh on every spin
    pub names_input: String,

    // Roulette session data
    pub roulette: RouletteState,
    pub chart: Option<ChartSpec>,

    // Minimal UI state
    pub spin_phase: SpinPhase,
    pub error_message: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            names_input: String::new(),
            roulette: RouletteState::new(),
            chart: None,
            spin_phase: SpinPhase::Idle,
            error_message: None,
        }
    }

    /// Runs the core spin against the current text input and moves the UI
    /// into the spinning phase, or surfaces the validation error.
    ///
    /// The chart is built right away from the selected winner; the wheel
    /// view just withholds the reveal until the animation finishes.
    pub fn start_spin(&mut self) {
        match self.roulette.spin(&self.names_input) {
            Ok(winner) => {
                log::info!("winner selected: {}", winner);
                self.chart = Some(ChartSpec::build(&self.roulette.participants, &winner));
                self.spin_phase = SpinPhase::Spinning {
                    started: Instant::now(),
                };
                self.error_message = None;
            }
            Err(err) => {
                log::warn!("spin rejected: {}", err);
                self.chart = None;
                self.spin_phase = SpinPhase::Idle;
                self.error_message = Some(err.to_string());
            }
        }
    }

    /// Advances the spin animation, revealing the winner once the
    /// suspense delay has elapsed.
    pub fn tick(&mut self) {
        if let SpinPhase::Spinning { started } = self.spin_phase {
            if started.elapsed().as_secs_f32() >= SPIN_SECONDS {
                self.spin_phase = SpinPhase::Revealed;
            }
        }
    }
}
