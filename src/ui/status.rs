//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, HoverState};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Punkte: {}", state.curve.len()));

            ui.separator();

            match state.interaction.drag {
                Some(session) => {
                    let kind = if state.curve.is_endpoint(session.index) {
                        "Endpunkt"
                    } else {
                        "Punkt"
                    };
                    ui.label(format!(
                        "Drag: {} {} → ({:.3}, {:.3})",
                        kind, session.index, session.position.x, session.position.y
                    ));
                }
                None => match state.interaction.hover {
                    HoverState::Point(index) => {
                        ui.label(format!("Hover: Punkt {}", index));
                    }
                    HoverState::Line(pos) => {
                        ui.label(format!("Einfügen bei ({:.3}, {:.3})", pos.x, pos.y));
                    }
                    HoverState::None => {
                        ui.label("Bereit");
                    }
                },
            }

            ui.separator();

            ui.label(format!("Cursor: {}", state.cursor_affordance().label()));

            if let Some(ref path) = state.ui.current_file_path {
                ui.separator();
                let filename = std::path::Path::new(path)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown");
                ui.label(format!("Datei: {}", filename));
            }

            // Statusnachricht (z.B. Laden/Speichern)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("Commits: {}", state.notifier.notification_count()));
            });
        });
    });
}
