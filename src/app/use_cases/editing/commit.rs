//! Gemeinsamer Commit-Pfad für alle Änderungen der Punktliste.

use crate::app::AppState;
use crate::core::CurvePoints;
use glam::Vec2;

/// Übernimmt eine Editing-Liste (Drag-Commit) als neue committete Liste.
///
/// Die Liste stammt aus einer begrenzten Drag-Position und erfüllt die
/// Invarianten bereits, daher keine erneute Prüfung.
pub fn commit_points(state: &mut AppState, points: Vec<Vec2>) {
    commit_curve(state, CurvePoints::from_points_unchecked(points));
}

/// Ersetzt die committete Liste, legt einen Undo-Snapshot an und
/// benachrichtigt den Beobachter synchron.
///
/// Auch eine inhaltlich unveränderte Liste gilt als Commit und wird
/// gemeldet; nur der Snapshot entfällt dann.
pub fn commit_curve(state: &mut AppState, curve: CurvePoints) {
    if curve != state.curve {
        state.record_undo_snapshot();
        state.curve = curve;
    }
    state.notify_observer();
}
