// src/app.rs
use eframe::egui;

use crate::state::AppState;
use crate::ui;

pub struct RouletteApp {
    state: AppState,
}

impl RouletteApp {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for RouletteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.tick();
        if self.state.spin_phase.is_spinning() {
            // Keep repainting while the wheel animates.
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.heading("🎯 Roulette");
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::controls::show_controls_view(ui, &mut self.state);

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(8.0);

            ui::wheel::show_wheel_view(ui, &self.state);
        });

        // Show error modal if needed
        let error_msg = self.state.error_message.clone(); // Clone first
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }
}
