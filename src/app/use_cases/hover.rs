//! Use-Case: Hover-Zustand für Punkte und Linie.

use crate::app::state::HoverState;
use crate::app::AppState;
use glam::Vec2;

/// Setzt den Punkt-Hover auf `index` und löscht einen Linien-Hover.
pub fn set_point_hover(state: &mut AppState, index: usize) {
    if state.is_dragging() {
        log::debug!("Punkt-Hover während Drag ignoriert");
        return;
    }
    if index >= state.curve.len() {
        log::warn!(
            "Punkt-Hover auf ungültigen Index {} ignoriert ({} Punkte)",
            index,
            state.curve.len()
        );
        return;
    }
    state.interaction.hover = HoverState::Point(index);
}

/// Entfernt einen Punkt-Hover; ein Linien-Hover bleibt bestehen.
pub fn clear_point_hover(state: &mut AppState) {
    if matches!(state.interaction.hover, HoverState::Point(_)) {
        state.interaction.hover = HoverState::None;
    }
}

/// Setzt den Einfüge-Kandidaten auf der Linie und löscht einen Punkt-Hover.
pub fn set_line_hover(state: &mut AppState, pos: Vec2) {
    if state.is_dragging() {
        log::debug!("Linien-Hover während Drag ignoriert");
        return;
    }
    state.interaction.hover = HoverState::Line(pos);
}

/// Entfernt einen Linien-Hover; ein Punkt-Hover bleibt bestehen.
pub fn clear_line_hover(state: &mut AppState) {
    if matches!(state.interaction.hover, HoverState::Line(_)) {
        state.interaction.hover = HoverState::None;
    }
}
