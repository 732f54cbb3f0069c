use crate::core::Boundary;
use crate::shared::CursorAffordance;
use glam::Vec2;

/// Hover-Zustand: höchstens ein Ziel gleichzeitig.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HoverState {
    /// Kein Hover-Ziel
    #[default]
    None,
    /// Mauszeiger über der Linie: Kandidat für das Einfügen
    Line(Vec2),
    /// Mauszeiger über einem Punkt: Kandidat für einen Drag
    Point(usize),
}

impl HoverState {
    /// Einfüge-Kandidat auf der Linie, falls gesetzt.
    pub fn hover_point(&self) -> Option<Vec2> {
        match self {
            Self::Line(pos) => Some(*pos),
            _ => None,
        }
    }

    /// Index des gehoverten Punkts, falls gesetzt.
    pub fn hovered_index(&self) -> Option<usize> {
        match self {
            Self::Point(index) => Some(*index),
            _ => None,
        }
    }
}

/// Laufende Drag-Session eines einzelnen Punkts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Index des gezogenen Punkts
    pub index: usize,
    /// Beim Drag-Start eingefrorene Bewegungsgrenze
    pub boundary: Boundary,
    /// Aktuell vorgeschlagene (bereits begrenzte) Position
    pub position: Vec2,
}

/// Transienter Interaktionszustand des Canvas.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    /// Aktuelles Hover-Ziel
    pub hover: HoverState,
    /// Aktive Drag-Session (höchstens eine)
    pub drag: Option<DragSession>,
}

impl InteractionState {
    /// Erstellt einen Ruhezustand ohne Hover und Drag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, solange ein Punkt gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Cursor-Hinweis, rein aus dem Hover-Zustand abgeleitet.
    pub fn cursor(&self) -> CursorAffordance {
        match self.hover {
            HoverState::Line(_) => CursorAffordance::Crosshair,
            HoverState::Point(_) => CursorAffordance::Grab,
            HoverState::None => CursorAffordance::Default,
        }
    }
}
