//! Keyboard-Shortcuts für den Canvas.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Hat ein Eingabefeld (z.B. im Optionen-Dialog) den Fokus, gehen die
/// Tasten an das Feld und es entstehen keine Intents.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    // Ctrl+O (Öffnen), Ctrl+S (Speichern), Ctrl+Shift+S (Speichern unter)
    let (key_o_pressed, key_s_pressed) =
        ui.input(|i| (i.key_pressed(egui::Key::O), i.key_pressed(egui::Key::S)));

    if modifiers.command && key_o_pressed {
        events.push(AppIntent::OpenFileRequested);
    }

    if modifiers.command && key_s_pressed {
        if modifiers.shift {
            events.push(AppIntent::SaveAsRequested);
        } else {
            events.push(AppIntent::SaveRequested);
        }
    }

    events
}

#[cfg(test)]
mod tests;
