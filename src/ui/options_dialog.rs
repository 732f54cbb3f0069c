//! Optionen-Dialog für Farben, Größen und Breiten.

use super::canvas::to_color32;
use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Punkte ──────────────────────────────────────
                    ui.collapsing("Punkte", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Radius:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.point_radius)
                                        .range(0.005..=0.1)
                                        .speed(0.001),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Hover-Vergrößerung:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.point_hover_scale)
                                        .range(1.0..=3.0)
                                        .speed(0.05),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Marker:", &mut opts.point_color);
                        changed |= color_edit(ui, "Einfüge-Vorschau:", &mut opts.hover_point_color);
                        changed |= color_edit(ui, "Gezogen:", &mut opts.drag_point_color);
                    });

                    // ── Linie ───────────────────────────────────────
                    ui.collapsing("Linie", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Breite (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.line_width_px)
                                        .range(0.5..=20.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Pick-Breite (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.pick_line_width_px)
                                        .range(2.0..=64.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Farbe:", &mut opts.line_color);
                    });

                    // ── Canvas ──────────────────────────────────────
                    ui.collapsing("Canvas", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Rand:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.viewport_padding)
                                        .range(0.0..=0.25)
                                        .speed(0.001),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Hintergrund:", &mut opts.background_color);
                        changed |= color_edit(ui, "Fläche:", &mut opts.surface_color);
                    });

                    // ── History ─────────────────────────────────────
                    ui.collapsing("History", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Undo-Tiefe (nach Neustart):");
                            changed |= ui
                                .add(egui::DragValue::new(&mut opts.history_depth).range(0..=1000))
                                .changed();
                        });
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            *color = c.to_srgba_unmultiplied().map(|channel| channel as f32 / 255.0);
            changed = true;
        }
    });
    changed
}
