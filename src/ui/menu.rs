//! Top-Menü (File, Edit, Help).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let idle = !state.is_dragging();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.add_enabled(idle, egui::Button::new("Open...")).clicked() {
                    events.push(AppIntent::OpenFileRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Save").clicked() {
                    events.push(AppIntent::SaveRequested);
                    ui.close();
                }

                if ui.button("Save As...").clicked() {
                    events.push(AppIntent::SaveAsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            // Edit menu: Undo / Redo / Reset / Optionen
            ui.menu_button("Edit", |ui| {
                let can_undo = idle && state.can_undo();
                let can_redo = idle && state.can_redo();

                if ui
                    .add_enabled(can_undo, egui::Button::new("Undo (Ctrl+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(can_redo, egui::Button::new("Redo (Ctrl+Y / Shift+Cmd+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::RedoRequested);
                    ui.close();
                }

                ui.separator();

                if ui
                    .add_enabled(idle, egui::Button::new("Kurve zurücksetzen"))
                    .clicked()
                {
                    events.push(AppIntent::ResetCurveRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    log::info!("Curve Editor v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
