/// UI-bezogener Anwendungszustand (Dialoge, Pfade, Meldungen)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Datei-Öffnen-Dialog im nächsten Frame anzeigen
    pub show_file_dialog: bool,
    /// Datei-Speichern-Dialog im nächsten Frame anzeigen
    pub show_save_file_dialog: bool,
    /// Zuletzt geladener/gespeicherter Pfad
    pub current_file_path: Option<String>,
    /// Statusmeldung für die Status-Bar
    pub status_message: Option<String>,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
