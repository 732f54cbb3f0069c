//! Handler für Datei-Operationen (Öffnen, Speichern).

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Datei-Öffnen-Dialog.
pub fn request_open(state: &mut AppState) {
    use_cases::file_io::request_open_file(state);
}

/// Öffnet den Datei-Speichern-Dialog.
pub fn request_save(state: &mut AppState) {
    use_cases::file_io::request_save_file(state);
}

/// Lädt eine Punktliste aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_points_file(state, path)
}

/// Speichert die Punktliste unter dem übergebenen Pfad.
///
/// `None` speichert unter dem aktuell bekannten Pfad (oder öffnet den Dialog).
/// `Some(p)` speichert explizit unter dem neuen Pfad `p`.
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    use_cases::file_io::save_points_file(state, path)
}
