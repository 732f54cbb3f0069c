//! Ziel-Klassifikation des Mauszeigers und Übergangs-Events.
//!
//! Rein funktional, ohne egui-Typen, damit die Übergänge testbar bleiben.

use crate::app::AppIntent;
use crate::core::{nearest_point_index, pick_line, CurveViewport};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Was sich im aktuellen Frame unter dem Mauszeiger befindet.
///
/// Priorität: Punkt vor Linie vor Fläche.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerTarget {
    /// Außerhalb des Canvas-Quadrats oder kein Zeiger
    #[default]
    Outside,
    /// Über dem Marker `index`
    Point(usize),
    /// Über der Pick-Linie; nächster Linienpunkt in Domain-Koordinaten
    Line(Vec2),
    /// Über der Interaktionsfläche; Domain-Position
    Surface(Vec2),
}

/// Klassifiziert eine Screen-Position.
///
/// Während eines Drags sind Marker und Pick-Linie aus dem Hit-Test
/// entfernt, es wird nur noch die Fläche gemeldet.
pub fn classify_target(
    points: &[Vec2],
    viewport: &CurveViewport,
    screen: Option<Vec2>,
    options: &EditorOptions,
    dragging: bool,
) -> PointerTarget {
    let Some(screen) = screen else {
        return PointerTarget::Outside;
    };
    if !viewport.contains_screen(screen) {
        return PointerTarget::Outside;
    }

    let pos = viewport.screen_to_domain(screen);
    if dragging {
        return PointerTarget::Surface(pos);
    }

    if let Some(index) = nearest_point_index(points, pos, options.point_radius, None) {
        return PointerTarget::Point(index);
    }

    let tolerance = viewport.pixels_to_domain(options.line_pick_tolerance_px());
    if let Some(hit) = pick_line(points, pos, tolerance) {
        return PointerTarget::Line(hit.point);
    }

    PointerTarget::Surface(pos)
}

/// Erzeugt Leave-/Move-Events für den Wechsel `prev` → `next`.
///
/// Ein unverändertes Ziel erzeugt keine Events. Eine Flächen-Bewegung wird
/// nur gemeldet, wenn sich der Zeiger tatsächlich bewegt hat (`moved`);
/// wechselt nur das Ziel, etwa beim Drag-Start unter ruhendem Zeiger,
/// entstehen allein die Leave-Events.
pub fn transition_intents(
    prev: PointerTarget,
    next: PointerTarget,
    moved: bool,
) -> Vec<AppIntent> {
    if prev == next {
        return Vec::new();
    }

    let mut events = Vec::new();

    if matches!(prev, PointerTarget::Point(_)) {
        events.push(AppIntent::PointerLeftPoint);
    }
    if matches!(prev, PointerTarget::Line(_)) && !matches!(next, PointerTarget::Line(_)) {
        events.push(AppIntent::PointerLeftLine);
    }

    match next {
        PointerTarget::Point(index) => events.push(AppIntent::PointerMoveOnPoint { index }),
        PointerTarget::Line(pos) => events.push(AppIntent::PointerMoveOnLine { pos: Some(pos) }),
        PointerTarget::Surface(pos) if moved => {
            events.push(AppIntent::PointerMoveOnSurface { pos })
        }
        PointerTarget::Surface(_) | PointerTarget::Outside => {}
    }

    events
}
