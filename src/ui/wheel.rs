// src/ui/wheel.rs
use eframe::egui;

use crate::chart::ChartSpec;
use crate::state::{AppState, SpinPhase, SPIN_SECONDS};

/// Full turns the wheel makes over the spin animation.
const SPIN_TURNS: f32 = 4.0;

/// Margin around the wheel reserved for the slice labels.
const LABEL_MARGIN: f32 = 48.0;

pub fn show_wheel_view(ui: &mut egui::Ui, state: &AppState) {
    let Some(chart) = &state.chart else {
        ui.centered_and_justified(|ui| {
            ui.label("Enter at least two names and spin the wheel");
        });
        return;
    };

    match state.spin_phase {
        SpinPhase::Spinning { started } => {
            ui.vertical_centered(|ui| {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Spinning the wheel…");
                });
                let rotation = wheel_rotation(started.elapsed().as_secs_f32());
                draw_donut(ui, chart, rotation, false);
            });
        }
        SpinPhase::Revealed => {
            ui.vertical_centered(|ui| {
                ui.heading(&chart.title);
                if let Some(winner) = &state.roulette.winner {
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("🎉 Congratulations, {}! 🎉", winner))
                            .color(egui::Color32::from_rgb(46, 125, 50))
                            .strong(),
                    );
                }
                ui.add_space(8.0);
                draw_donut(ui, chart, 0.0, true);
            });
        }
        SpinPhase::Idle => {
            ui.centered_and_justified(|ui| {
                ui.label("Enter at least two names and spin the wheel");
            });
        }
    }
}

/// Eased wheel angle in radians for the given animation time. Decelerates
/// to a stop after [`SPIN_TURNS`] full turns, landing on the same
/// orientation the revealed chart is drawn with.
fn wheel_rotation(elapsed: f32) -> f32 {
    let progress = (elapsed / SPIN_SECONDS).clamp(0.0, 1.0);
    let eased = 1.0 - (1.0 - progress).powi(3);
    SPIN_TURNS * std::f32::consts::TAU * eased
}

/// Renders the chart description as a donut. Before the reveal the slice
/// pull is suppressed and the center shows a placeholder instead of the
/// result annotation.
fn draw_donut(ui: &mut egui::Ui, chart: &ChartSpec, rotation: f32, reveal: bool) {
    let side = ui.available_width().min(420.0);
    let (response, painter) = ui.allocate_painter(egui::vec2(side, side), egui::Sense::hover());
    let rect = response.rect;

    let center = rect.center();
    let radius = rect.width().min(rect.height()) * 0.5 - LABEL_MARGIN;
    let inner = radius * chart.hole_fraction as f32;

    let total: f64 = chart.values.iter().sum();
    if total <= 0.0 {
        return;
    }

    // Start at 12 o'clock; screen coordinates are y-down, so angles grow
    // clockwise.
    let mut start = rotation - std::f32::consts::FRAC_PI_2;

    for (i, value) in chart.values.iter().enumerate() {
        let sweep = (value / total) as f32 * std::f32::consts::TAU;
        let mid = start + sweep * 0.5;

        let pull = if reveal {
            chart.pull.get(i).copied().unwrap_or(0.0) as f32
        } else {
            0.0
        };
        let offset = egui::Vec2::angled(mid) * (pull * radius);
        let color = chart
            .colors
            .get(i)
            .map(|c| color_from_hex(c))
            .unwrap_or(egui::Color32::GRAY);

        let mut mesh = egui::Mesh::default();
        add_ring_segment(&mut mesh, center + offset, inner, radius, start, start + sweep, color);
        painter.add(egui::Shape::mesh(mesh));

        if let Some(label) = chart.labels.get(i) {
            painter.text(
                center + offset + egui::Vec2::angled(mid) * (radius + 18.0),
                egui::Align2::CENTER_CENTER,
                label,
                egui::FontId::proportional(14.0),
                ui.visuals().strong_text_color(),
            );
        }

        start += sweep;
    }

    // Annotation inside the hole
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        if reveal { chart.center_annotation.as_str() } else { "?" },
        egui::FontId::proportional(20.0),
        ui.visuals().strong_text_color(),
    );
}

/// Tessellates one donut slice into the mesh as a fan of quads.
fn add_ring_segment(
    mesh: &mut egui::Mesh,
    center: egui::Pos2,
    inner: f32,
    outer: f32,
    start: f32,
    end: f32,
    color: egui::Color32,
) {
    let steps = (((end - start) / 0.05).ceil() as usize).max(2);
    let base = mesh.vertices.len() as u32;

    for i in 0..=steps {
        let angle = start + (end - start) * i as f32 / steps as f32;
        let dir = egui::Vec2::angled(angle);
        mesh.colored_vertex(center + dir * outer, color);
        mesh.colored_vertex(center + dir * inner, color);
    }
    for i in 0..steps as u32 {
        let o0 = base + 2 * i;
        mesh.add_triangle(o0, o0 + 1, o0 + 2);
        mesh.add_triangle(o0 + 1, o0 + 3, o0 + 2);
    }
}

fn color_from_hex(hex: &str) -> egui::Color32 {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return egui::Color32::GRAY;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
    egui::Color32::from_rgb(channel(0), channel(2), channel(4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_palette_colors() {
        assert_eq!(
            color_from_hex("#FFC300"),
            egui::Color32::from_rgb(0xFF, 0xC3, 0x00)
        );
        assert_eq!(
            color_from_hex("#581845"),
            egui::Color32::from_rgb(0x58, 0x18, 0x45)
        );
    }

    #[test]
    fn malformed_hex_falls_back_to_gray() {
        assert_eq!(color_from_hex("nope"), egui::Color32::GRAY);
        assert_eq!(color_from_hex("#FFF"), egui::Color32::GRAY);
    }

    #[test]
    fn rotation_eases_to_a_full_stop() {
        assert_eq!(wheel_rotation(0.0), 0.0);

        let full = SPIN_TURNS * std::f32::consts::TAU;
        assert!((wheel_rotation(SPIN_SECONDS) - full).abs() < 1e-3);
        // Past the end of the animation the wheel stays put.
        assert!((wheel_rotation(SPIN_SECONDS * 2.0) - full).abs() < 1e-3);

        // Monotonically increasing while spinning
        let mut last = 0.0;
        for step in 1..=20 {
            let angle = wheel_rotation(SPIN_SECONDS * step as f32 / 20.0);
            assert!(angle >= last);
            last = angle;
        }
    }
}
