use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    // ── Pointer-Events vom Host-Renderer ────────────────────────
    /// Primärtaste über dem Punkt-Marker `index` gedrückt
    PointerDownOnPoint { index: usize },
    /// Mauszeiger bewegt sich über dem Punkt-Marker `index`
    PointerMoveOnPoint { index: usize },
    /// Mauszeiger hat den Punkt-Marker verlassen
    PointerLeftPoint,
    /// Mauszeiger bewegt sich über der Linie (nächster Linienpunkt, falls bekannt)
    PointerMoveOnLine { pos: Option<glam::Vec2> },
    /// Mauszeiger hat die Linie verlassen
    PointerLeftLine,
    /// Mauszeiger bewegt sich über der Interaktionsfläche (Domain-Koordinaten)
    PointerMoveOnSurface { pos: glam::Vec2 },
    /// Primärtaste irgendwo losgelassen
    PointerReleased,
    /// Klick auf die Linie (nicht auf einen Punkt)
    LineClicked,

    // ── Kurve & History ─────────────────────────────────────────
    /// Undo: Letzte Änderung rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Änderung wiederherstellen
    RedoRequested,
    /// Kurve auf `[(0,0), (1,1)]` zurücksetzen
    ResetCurveRequested,

    // ── Datei ───────────────────────────────────────────────────
    /// Punktliste öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Punktliste speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Punktliste unter neuem Pfad speichern
    SaveAsRequested,
    /// Datei wurde im Dialog ausgewählt (Laden)
    FileSelected { path: String },
    /// Speicherpfad wurde im Dialog ausgewählt
    SaveFilePathSelected { path: String },

    // ── Optionen & Anwendung ────────────────────────────────────
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden im Dialog geändert (Live-Übernahme)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
