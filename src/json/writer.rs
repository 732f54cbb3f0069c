//! Writer für JSON-Steuerpunkt-Listen.

use crate::core::CurvePoints;
use anyhow::Result;

/// Schreibt die Punktliste als formatiertes JSON-Array von `[x, y]`-Paaren.
pub fn write_points_json(points: &CurvePoints) -> Result<String> {
    let mut output = serde_json::to_string_pretty(&points.to_pairs())?;
    output.push('\n');
    Ok(output)
}
