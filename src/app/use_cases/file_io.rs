//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::state::InteractionState;
use crate::app::AppState;
use anyhow::Context;

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Öffnet den Save-Datei-Dialog über UI-State.
pub fn request_save_file(state: &mut AppState) {
    state.ui.show_save_file_dialog = true;
}

/// Lädt eine Punktliste aus `path` und übernimmt sie als committete Liste.
///
/// Der Ladevorgang ist ein Commit: Undo-Snapshot und Benachrichtigung.
/// Bei einem Fehler bleibt der bisherige Zustand vollständig erhalten.
pub fn load_points_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let json_content = std::fs::read_to_string(&path)
        .with_context(|| format!("Datei konnte nicht gelesen werden: {}", path))?;
    let curve = crate::json::parse_points_json(&json_content)
        .with_context(|| format!("Ungültige Punktliste: {}", path))?;

    let point_count = curve.len();
    state.interaction = InteractionState::new();
    super::editing::commit_curve(state, curve);

    log::info!("Punktliste geladen: {} ({} Punkte)", path, point_count);
    state.ui.status_message = Some(format!("Geladen: {} ({} Punkte)", path, point_count));
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// Speichert die Punktliste.
///
/// `None` speichert unter dem aktuell bekannten Pfad (oder öffnet den Dialog).
/// `Some(p)` speichert explizit unter `p` und merkt sich den Pfad.
pub fn save_points_file(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    let Some(path) = path.or_else(|| state.ui.current_file_path.clone()) else {
        // Kein Pfad bekannt → Save As Dialog öffnen
        request_save_file(state);
        return Ok(());
    };

    let json_content = crate::json::write_points_json(&state.curve)?;
    std::fs::write(&path, json_content)
        .with_context(|| format!("Datei konnte nicht geschrieben werden: {}", path))?;

    log::info!("Punktliste gespeichert: {} ({} Punkte)", path, state.curve.len());
    state.ui.status_message = Some(format!("Gespeichert: {}", path));
    state.ui.current_file_path = Some(path);
    Ok(())
}
