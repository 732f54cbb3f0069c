//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.options = options;
    sync_history_depth(state);
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    sync_history_depth(state);
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Übernimmt eine geänderte Undo-Tiefe sofort in die History.
fn sync_history_depth(state: &mut AppState) {
    state.history.set_max_depth(state.options.history_depth);
}
