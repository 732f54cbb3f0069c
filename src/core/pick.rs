//! Hit-Tests auf Steuerpunkten und Polylinie (Domain-Koordinaten).

use glam::Vec2;

/// Treffer auf der Polylinie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineHit {
    /// Nächster Punkt auf der Linie
    pub point: Vec2,
    /// Index des Segments (`points[segment]..points[segment + 1]`)
    pub segment: usize,
    /// Abstand zwischen Abfrageposition und `point`
    pub distance: f32,
}

/// Findet den nächstgelegenen Steuerpunkt innerhalb von `radius`.
///
/// `skip` blendet einen Index aus (z.B. den gerade gezogenen Punkt).
/// Bei gleichem Abstand gewinnt der kleinere Index.
pub fn nearest_point_index(
    points: &[Vec2],
    pos: Vec2,
    radius: f32,
    skip: Option<usize>,
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;

    for (index, p) in points.iter().enumerate() {
        if Some(index) == skip {
            continue;
        }
        let distance = p.distance(pos);
        if distance > radius {
            continue;
        }
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }

    best.map(|(index, _)| index)
}

/// Projiziert `pos` auf ein Segment `a..b`.
fn closest_on_segment(a: Vec2, b: Vec2, pos: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return a;
    }
    let t = ((pos - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Nächster Punkt auf der gesamten Polylinie.
///
/// `None` bei weniger als zwei Punkten.
pub fn closest_point_on_polyline(points: &[Vec2], pos: Vec2) -> Option<LineHit> {
    let mut best: Option<LineHit> = None;

    for (segment, pair) in points.windows(2).enumerate() {
        let point = closest_on_segment(pair[0], pair[1], pos);
        let distance = point.distance(pos);
        if best.is_none_or(|hit| distance < hit.distance) {
            best = Some(LineHit {
                point,
                segment,
                distance,
            });
        }
    }

    best
}

/// Linien-Pick: nächster Linienpunkt, falls höchstens `max_distance` entfernt.
pub fn pick_line(points: &[Vec2], pos: Vec2, max_distance: f32) -> Option<LineHit> {
    closest_point_on_polyline(points, pos).filter(|hit| hit.distance <= max_distance)
}
