//! Render-Szene als expliziter Übergabevertrag zwischen App und Canvas.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::EditorOptions;
use super::CursorAffordance;
use glam::Vec2;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct CurveScene {
    /// Linienpunkte: Editing-Liste während eines Drags, sonst die committete Liste
    pub line_points: Vec<Vec2>,
    /// Committete Punkte für die Marker
    pub marker_points: Vec<Vec2>,
    /// Marker-Index, der im aktuellen Frame ausgeblendet wird (gezogener Punkt)
    pub hidden_index: Option<usize>,
    /// Marker-Index unter dem Mauszeiger
    pub hovered_index: Option<usize>,
    /// Einfüge-Vorschaupunkt auf der Linie
    pub hover_point: Option<Vec2>,
    /// Live-Position des gezogenen Punkts
    pub drag_point: Option<Vec2>,
    /// Abgeleiteter Cursor-Hinweis
    pub cursor: CursorAffordance,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl CurveScene {
    /// Gibt zurück, ob gerade ein Punkt gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.drag_point.is_some()
    }

    /// Iteriert über alle sichtbaren Marker `(index, position)`.
    pub fn visible_markers(&self) -> impl Iterator<Item = (usize, Vec2)> + '_ {
        self.marker_points
            .iter()
            .copied()
            .enumerate()
            .filter(move |(index, _)| Some(*index) != self.hidden_index)
    }
}
