//! Use-Case: Neuen Steuerpunkt am Linien-Hover einfügen.

use crate::app::AppState;

/// Fügt den aktuellen Linien-Hover-Punkt in die committete Liste ein.
///
/// Ohne Linien-Hover, während eines Drags oder ohne passendes
/// y-Intervall bleibt die Liste unverändert und es gibt keine Benachrichtigung.
pub fn insert_point_at_hover(state: &mut AppState) {
    if state.is_dragging() {
        log::debug!("Einfügen während Drag ignoriert");
        return;
    }
    let Some(pos) = state.interaction.hover.hover_point() else {
        log::debug!("Einfügen ohne Linien-Hover ignoriert");
        return;
    };
    let Some(index) = state.curve.insertion_index(pos.y) else {
        log::debug!("Kein passendes Intervall für y = {}, Liste unverändert", pos.y);
        return;
    };

    let mut curve = state.curve.clone();
    curve.insert_at(pos);
    super::commit_curve(state, curve);
    log::info!(
        "Punkt eingefügt an Index {} ({:.3}, {:.3}), jetzt {} Punkte",
        index,
        pos.x,
        pos.y,
        state.curve.len()
    );
}
