//! Use-Case: Kurve auf die Standard-Liste zurücksetzen.

use crate::app::AppState;
use crate::core::CurvePoints;

/// Setzt die committete Liste auf `[(0,0), (1,1)]` zurück (mit Undo-Snapshot).
pub fn reset_curve(state: &mut AppState) {
    if state.is_dragging() {
        log::debug!("Zurücksetzen während Drag ignoriert");
        return;
    }
    state.interaction.hover = Default::default();
    super::commit_curve(state, CurvePoints::new());
    log::info!("Kurve zurückgesetzt");
}
