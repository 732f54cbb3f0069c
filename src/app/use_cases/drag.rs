//! Use-Case: Drag-Session eines Steuerpunkts (Idle → Dragging → Idle).

use crate::app::state::{DragSession, HoverState};
use crate::app::AppState;
use glam::Vec2;

/// Startet eine Drag-Session für den Punkt `index`.
///
/// Löscht den Hover-Zustand und friert die Bewegungsgrenze aus der
/// committeten Liste ein. Startposition ist die aktuelle Punktposition.
pub fn begin_point_drag(state: &mut AppState, index: usize) {
    if let Some(session) = state.interaction.drag {
        log::debug!(
            "Drag-Start auf Punkt {} ignoriert: Punkt {} wird bereits gezogen",
            index,
            session.index
        );
        return;
    }
    let Some(position) = state.curve.get(index) else {
        log::warn!(
            "Drag-Start auf ungültigen Index {} ignoriert ({} Punkte)",
            index,
            state.curve.len()
        );
        return;
    };

    let boundary = state.curve.boundary_for(index);
    if boundary.is_inverted() {
        log::warn!(
            "Bewegungsgrenze von Punkt {} ist invertiert (y {} > {}), y wird auf {} fixiert",
            index,
            boundary.y0,
            boundary.y1,
            boundary.y1
        );
    }

    state.interaction.hover = HoverState::None;
    state.interaction.drag = Some(DragSession {
        index,
        boundary,
        position,
    });
    let kind = if state.curve.is_endpoint(index) {
        "Endpunkt"
    } else {
        "Punkt"
    };
    log::debug!(
        "Drag gestartet: {} {} bei ({}, {})",
        kind,
        index,
        position.x,
        position.y
    );
}

/// Aktualisiert die vorgeschlagene Position (begrenzt auf die eingefrorene Grenze).
///
/// Die committete Liste bleibt unverändert.
pub fn update_point_drag(state: &mut AppState, pos: Vec2) {
    let Some(session) = state.interaction.drag.as_mut() else {
        log::debug!("Drag-Update ohne aktive Session ignoriert");
        return;
    };
    session.position = session.boundary.clamp(pos);
}

/// Beendet die Drag-Session und übernimmt die Editing-Liste als committete Liste.
///
/// Erzeugt einen Undo-Snapshot und benachrichtigt den Beobachter genau einmal.
pub fn commit_point_drag(state: &mut AppState) {
    let Some(session) = state.interaction.drag.take() else {
        log::debug!("Loslassen ohne aktive Drag-Session ignoriert");
        return;
    };

    let points = state.curve.with_substituted(session.index, session.position);
    super::editing::commit_points(state, points);
    log::info!(
        "Punkt {} verschoben nach ({:.3}, {:.3})",
        session.index,
        session.position.x,
        session.position.y
    );
}
