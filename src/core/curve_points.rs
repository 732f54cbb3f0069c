//! Geordnete Steuerpunkt-Liste der Kurve.

use super::boundary::{create_boundary, Boundary, DOMAIN_MAX, DOMAIN_MIN};
use anyhow::{bail, ensure};
use glam::Vec2;

/// Committete Steuerpunkt-Liste.
///
/// Die Reihenfolge definiert die Polylinie. Invarianten:
/// - mindestens zwei Punkte (die beiden Endpunkte)
/// - erster Punkt hat y = 0, letzter Punkt y = 1
/// - y ist entlang der Liste monoton nicht-fallend
///
/// Mutationen laufen ausschließlich über Einfügen und Drag-Commit,
/// die beide die Invarianten erhalten.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePoints {
    points: Vec<Vec2>,
}

impl CurvePoints {
    /// Erstellt die Standard-Kurve `[(0,0), (1,1)]`.
    pub fn new() -> Self {
        Self {
            points: vec![
                Vec2::new(DOMAIN_MIN, DOMAIN_MIN),
                Vec2::new(DOMAIN_MAX, DOMAIN_MAX),
            ],
        }
    }

    /// Erstellt eine Liste aus externen Punkten und prüft alle Invarianten.
    pub fn from_points(points: Vec<Vec2>) -> anyhow::Result<Self> {
        ensure!(
            points.len() >= 2,
            "Kurve braucht mindestens 2 Punkte, erhalten: {}",
            points.len()
        );

        for (index, p) in points.iter().enumerate() {
            ensure!(
                p.is_finite(),
                "Punkt {} hat ungültige Koordinaten ({}, {})",
                index,
                p.x,
                p.y
            );
            let in_domain = (DOMAIN_MIN..=DOMAIN_MAX).contains(&p.x)
                && (DOMAIN_MIN..=DOMAIN_MAX).contains(&p.y);
            ensure!(
                in_domain,
                "Punkt {} ({}, {}) liegt außerhalb von [0,1]x[0,1]",
                index,
                p.x,
                p.y
            );
        }

        let first_y = points[0].y;
        let last_y = points[points.len() - 1].y;
        if first_y != DOMAIN_MIN || last_y != DOMAIN_MAX {
            bail!(
                "Endpunkte müssen y = 0 und y = 1 haben, erhalten: {} und {}",
                first_y,
                last_y
            );
        }

        if let Some(index) = points.windows(2).position(|pair| pair[0].y > pair[1].y) {
            bail!(
                "y-Werte müssen monoton steigen: Punkt {} ({}) > Punkt {} ({})",
                index,
                points[index].y,
                index + 1,
                points[index + 1].y
            );
        }

        Ok(Self { points })
    }

    /// Übernimmt eine Liste ohne Prüfung (nur für Drag-Commit / Undo).
    pub(crate) fn from_points_unchecked(points: Vec<Vec2>) -> Self {
        debug_assert!(points.len() >= 2);
        Self { points }
    }

    /// Read-only Sicht auf alle Punkte.
    pub fn as_slice(&self) -> &[Vec2] {
        &self.points
    }

    /// Anzahl der Punkte (immer >= 2).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Immer `false`; vorhanden für Clippy-Konsistenz mit `len()`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Punkt an `index`, falls vorhanden.
    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    /// Gibt `true` zurück, wenn `index` ein Endpunkt ist.
    pub fn is_endpoint(&self, index: usize) -> bool {
        index == 0 || index == self.points.len() - 1
    }

    /// Bewegungsgrenze für den Punkt an `index` (Snapshot der aktuellen Liste).
    pub fn boundary_for(&self, index: usize) -> Boundary {
        create_boundary(index, &self.points)
    }

    /// Sucht die Einfügeposition für einen neuen Punkt mit Höhe `y`.
    ///
    /// Das ERSTE Nachbarpaar mit `current.y <= y <= next.y` (beidseitig
    /// inklusiv) gewinnt; zurückgegeben wird der Index direkt hinter `current`.
    /// `None`, wenn kein Paar passt.
    pub fn insertion_index(&self, y: f32) -> Option<usize> {
        self.points
            .windows(2)
            .position(|pair| pair[0].y <= y && pair[1].y >= y)
            .map(|index| index + 1)
    }

    /// Fügt `pos` an der per [`Self::insertion_index`] ermittelten Stelle ein.
    ///
    /// Gibt den Index des neuen Punkts zurück. Ohne passendes Intervall
    /// bleibt die Liste unverändert und es wird `None` geliefert.
    pub fn insert_at(&mut self, pos: Vec2) -> Option<usize> {
        let index = self.insertion_index(pos.y)?;
        self.points.insert(index, pos);
        Some(index)
    }

    /// Abgeleitete Sicht: Liste mit ersetztem Wert an `index`.
    ///
    /// Die committete Liste bleibt unberührt.
    pub fn with_substituted(&self, index: usize, pos: Vec2) -> Vec<Vec2> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, &p)| if i == index { pos } else { p })
            .collect()
    }

    /// Konvertiert die Liste in `[x, y]`-Paare (Format für Host-Callbacks und JSON).
    pub fn to_pairs(&self) -> Vec<[f32; 2]> {
        self.points.iter().map(|p| p.to_array()).collect()
    }
}

impl Default for CurvePoints {
    fn default() -> Self {
        Self::new()
    }
}
