//! Handler für Hover und Drag-Session.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Setzt den Punkt-Hover.
pub fn set_point_hover(state: &mut AppState, index: usize) {
    use_cases::hover::set_point_hover(state, index);
}

/// Entfernt den Punkt-Hover.
pub fn clear_point_hover(state: &mut AppState) {
    use_cases::hover::clear_point_hover(state);
}

/// Setzt den Linien-Hover (Einfüge-Kandidat).
pub fn set_line_hover(state: &mut AppState, pos: Vec2) {
    use_cases::hover::set_line_hover(state, pos);
}

/// Entfernt den Linien-Hover.
pub fn clear_line_hover(state: &mut AppState) {
    use_cases::hover::clear_line_hover(state);
}

/// Startet eine Drag-Session.
pub fn begin_drag(state: &mut AppState, index: usize) {
    use_cases::drag::begin_point_drag(state, index);
}

/// Aktualisiert die Drag-Position.
pub fn update_drag(state: &mut AppState, pos: Vec2) {
    use_cases::drag::update_point_drag(state, pos);
}

/// Committet die Drag-Session.
pub fn commit_drag(state: &mut AppState) {
    use_cases::drag::commit_point_drag(state);
}
