// src/ui/controls.rs
use eframe::egui;

use crate::roulette::parse_participants;
use crate::state::AppState;

pub fn show_controls_view(ui: &mut egui::Ui, state: &mut AppState) {
    let available_size = ui.available_size();

    egui::Grid::new("controls_grid")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            // Left panel - name entry
            ui.vertical(|ui| {
                ui.set_min_width(available_size.x * 0.6);

                ui.label("Enter the participants' names, separated by commas (,).");
                ui.add_space(4.0);
                ui.add(
                    egui::TextEdit::singleline(&mut state.names_input)
                        .hint_text("e.g. Alice, Bob, Carol")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);

                let spin_clicked = ui
                    .add_sized([ui.available_width(), 32.0], egui::Button::new("🎯 Spin!"))
                    .clicked();
                if spin_clicked && !state.spin_phase.is_spinning() {
                    state.start_spin();
                }
            });

            // Right panel - live preview of the parsed names
            ui.vertical(|ui| {
                ui.set_min_width(available_size.x * 0.35);

                ui.strong("Participants");
                ui.add_space(4.0);

                let preview = parse_participants(&state.names_input);
                if preview.is_empty() {
                    ui.label("Enter names to see the list here.");
                } else {
                    for name in &preview {
                        ui.label(format!("• {}", name));
                    }
                }
            });
            ui.end_row();
        });
}
