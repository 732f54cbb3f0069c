//! Core-Domänentypen: Steuerpunkte, Bewegungsgrenzen, Viewport, Picking.

pub mod boundary;
/// Core-Datenmodelle für den Kurven-Editor
///
/// - CurvePoints: geordnete Steuerpunkt-Liste mit Endpunkt-Invarianten
/// - Boundary: Bewegungsrechteck eines gezogenen Punkts
pub mod curve_points;
pub mod pick;
pub mod viewport;

pub use boundary::{create_boundary, Boundary, DOMAIN_MAX, DOMAIN_MIN};
pub use curve_points::CurvePoints;
pub use pick::{closest_point_on_polyline, nearest_point_index, pick_line, LineHit};
pub use viewport::CurveViewport;
