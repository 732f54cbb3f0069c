//! Handler für Änderungen an der Punktliste.

use crate::app::use_cases;
use crate::app::AppState;

/// Fügt einen Punkt am Linien-Hover ein.
pub fn insert_point(state: &mut AppState) {
    use_cases::editing::insert_point_at_hover(state);
}

/// Setzt die Kurve auf die Standard-Liste zurück.
pub fn reset_curve(state: &mut AppState) {
    use_cases::editing::reset_curve(state);
}
