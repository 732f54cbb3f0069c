//! Parser für JSON-Steuerpunkt-Listen.

use crate::core::CurvePoints;
use anyhow::{Context, Result};
use glam::Vec2;

/// Parst eine JSON-Punktliste und prüft die Kurven-Invarianten.
///
/// Erwartet `[[x, y], [x, y], ...]`. Endpunkte, Monotonie und
/// Wertebereich werden über [`CurvePoints::from_points`] validiert.
pub fn parse_points_json(json_content: &str) -> Result<CurvePoints> {
    let pairs: Vec<[f32; 2]> = serde_json::from_str(json_content)
        .context("JSON ist keine Liste von [x, y]-Paaren")?;

    let points: Vec<Vec2> = pairs.into_iter().map(Vec2::from_array).collect();
    let curve = CurvePoints::from_points(points).context("Punktliste verletzt Kurven-Invarianten")?;

    log::debug!("JSON geparst: {} Punkte", curve.len());
    Ok(curve)
}
