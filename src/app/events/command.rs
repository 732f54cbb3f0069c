use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // ── Hover ───────────────────────────────────────────────────
    /// Punkt `index` als Hover-Ziel setzen (löscht Linien-Hover)
    SetPointHover { index: usize },
    /// Punkt-Hover entfernen
    ClearPointHover,
    /// Einfüge-Kandidat auf der Linie setzen (löscht Punkt-Hover)
    SetLineHover { pos: glam::Vec2 },
    /// Linien-Hover entfernen
    ClearLineHover,

    // ── Drag-Session ────────────────────────────────────────────
    /// Drag-Session für Punkt `index` starten (Grenze einfrieren)
    BeginPointDrag { index: usize },
    /// Vorgeschlagene Position aktualisieren (wird auf die Grenze begrenzt)
    UpdatePointDrag { pos: glam::Vec2 },
    /// Drag-Session committen und beenden
    CommitPointDrag,

    // ── Editing ─────────────────────────────────────────────────
    /// Neuen Punkt am Linien-Hover einfügen
    InsertPointAtHover,
    /// Kurve auf Standard zurücksetzen
    ResetCurve,
    /// Undo
    Undo,
    /// Redo
    Redo,

    // ── Datei-I/O ───────────────────────────────────────────────
    /// Datei-Öffnen-Dialog anfordern
    RequestOpenFileDialog,
    /// Datei-Speichern-Dialog anfordern
    RequestSaveFileDialog,
    /// Punktliste aus Datei laden
    LoadFile { path: String },
    /// Punktliste speichern (`None` = aktueller Pfad oder Dialog)
    SaveFile { path: Option<String> },

    // ── Dialoge & Anwendungssteuerung ───────────────────────────
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Neue Optionen übernehmen und persistieren
    ApplyOptions { options: EditorOptions },
    /// Optionen zurücksetzen und persistieren
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
