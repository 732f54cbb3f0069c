//! Bewegungsgrenzen für das Verschieben eines einzelnen Steuerpunkts.

use glam::Vec2;

/// Untere Grenze des normierten Kurvenbereichs (beide Achsen).
pub const DOMAIN_MIN: f32 = 0.0;
/// Obere Grenze des normierten Kurvenbereichs (beide Achsen).
pub const DOMAIN_MAX: f32 = 1.0;

/// Achsenparalleles Rechteck, in dem ein Punkt gezogen werden darf.
///
/// Die Grenzen stehen in Positions-Reihenfolge der Nachbarn, nicht sortiert:
/// `y0` stammt vom Vorgänger, `y1` vom Nachfolger. Ist `y0 > y1`, ist das
/// Intervall invertiert (siehe [`Boundary::clamp`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Boundary {
    /// Grenze des ersten Punkts: x frei, y fest auf 0.
    pub const FIRST: Self = Self {
        x0: DOMAIN_MIN,
        y0: DOMAIN_MIN,
        x1: DOMAIN_MAX,
        y1: DOMAIN_MIN,
    };

    /// Grenze des letzten Punkts: x frei, y fest auf 1.
    pub const LAST: Self = Self {
        x0: DOMAIN_MIN,
        y0: DOMAIN_MAX,
        x1: DOMAIN_MAX,
        y1: DOMAIN_MAX,
    };

    /// Erstellt eine Grenze aus den vier Rechteck-Werten.
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Begrenzt eine Rohposition achsenweise auf das Rechteck.
    ///
    /// Erst `max` gegen die untere, dann `min` gegen die obere Grenze.
    /// `f32::clamp` ist hier nicht verwendbar, da es bei `min > max` eine Panic auslöst.
    /// Bei invertiertem y-Intervall liefert die Reihenfolge immer `y1`.
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            pos.x.max(self.x0).min(self.x1),
            pos.y.max(self.y0).min(self.y1),
        )
    }

    /// Gibt `true` zurück, wenn das y-Intervall invertiert ist (`y0 > y1`).
    pub fn is_inverted(&self) -> bool {
        self.y0 > self.y1
    }
}

/// Berechnet die Bewegungsgrenze für den Punkt an `index`.
///
/// - erster Punkt: `[0,1]` in x, y fest auf 0
/// - letzter Punkt: `[0,1]` in x, y fest auf 1
/// - innere Punkte: x frei im Bereich, y zwischen Vorgänger und Nachfolger
///
/// Der Aufrufer garantiert `index < points.len()` und `points.len() >= 2`.
pub fn create_boundary(index: usize, points: &[Vec2]) -> Boundary {
    if index == 0 {
        return Boundary::FIRST;
    }

    if index == points.len() - 1 {
        return Boundary::LAST;
    }

    let prev = points[index - 1];
    let next = points[index + 1];

    // Nur y wird durch die Nachbarn begrenzt
    Boundary::new(DOMAIN_MIN, prev.y, DOMAIN_MAX, next.y)
}
