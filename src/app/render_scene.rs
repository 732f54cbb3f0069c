//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::CurveScene;

/// Baut eine CurveScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> CurveScene {
    let drag = state.interaction.drag;

    CurveScene {
        line_points: state.display_points().into_owned(),
        marker_points: state.committed_points().to_vec(),
        hidden_index: drag.map(|session| session.index),
        hovered_index: state.interaction.hover.hovered_index(),
        hover_point: state.interaction.hover.hover_point(),
        drag_point: drag.map(|session| session.position),
        cursor: state.cursor_affordance(),
        options: state.options.clone(),
    }
}
