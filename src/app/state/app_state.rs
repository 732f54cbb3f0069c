use crate::app::history::{EditHistory, Snapshot};
use crate::app::{ChangeNotifier, CommandLog};
use crate::core::CurvePoints;
use crate::shared::{CursorAffordance, EditorOptions};
use glam::Vec2;
use std::borrow::Cow;

use super::{InteractionState, UiState};

/// Hauptzustand des Kurven-Editors
pub struct AppState {
    /// Committete Steuerpunkt-Liste (nur durch Einfügen, Drag-Commit, Undo/Redo, Laden)
    pub curve: CurvePoints,
    /// Hover- und Drag-Zustand
    pub interaction: InteractionState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Farben, Größen, Breiten)
    pub options: EditorOptions,
    /// Beobachter für Änderungen der committeten Liste
    pub notifier: ChangeNotifier,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit der Standard-Kurve
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit vorgegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            curve: CurvePoints::new(),
            interaction: InteractionState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_depth),
            options,
            notifier: ChangeNotifier::new(),
            should_exit: false,
        }
    }

    /// Committete Punkte (für Rendering und Host).
    pub fn committed_points(&self) -> &[Vec2] {
        self.curve.as_slice()
    }

    /// Editing-Liste während eines Drags: committete Liste mit ersetzter
    /// Live-Position des gezogenen Punkts. `None` ohne aktive Drag-Session.
    pub fn editing_points(&self) -> Option<Vec<Vec2>> {
        self.interaction
            .drag
            .map(|session| self.curve.with_substituted(session.index, session.position))
    }

    /// Anzuzeigende Liste: Editing-Liste während eines Drags, sonst die committete.
    pub fn display_points(&self) -> Cow<'_, [Vec2]> {
        match self.editing_points() {
            Some(points) => Cow::Owned(points),
            None => Cow::Borrowed(self.curve.as_slice()),
        }
    }

    /// Abgeleiteter Cursor-Hinweis.
    pub fn cursor_affordance(&self) -> CursorAffordance {
        self.interaction.cursor()
    }

    /// Gibt `true` zurück, solange ein Punkt gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    /// Registriert den Beobachter für Änderungen (ersetzt einen vorherigen).
    pub fn set_observer(&mut self, observer: impl FnMut(&CurvePoints) + 'static) {
        self.notifier.set_observer(observer);
    }

    /// Entfernt den registrierten Beobachter.
    pub fn clear_observer(&mut self) {
        self.notifier.clear_observer();
    }

    /// Meldet die committete Liste synchron an den Beobachter.
    pub fn notify_observer(&mut self) {
        self.notifier.notify(&self.curve);
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
