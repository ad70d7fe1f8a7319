use std::time::Duration;

use crate::foundation::core::GridDims;

/// Euclidean distance, in cells, from `(col, row)` to the grid center `(columns/2, rows/2)`.
pub fn distance_from_center(col: u32, row: u32, dims: GridDims) -> f64 {
    let dc = f64::from(col) - f64::from(dims.columns) / 2.0;
    let dr = f64::from(row) - f64::from(dims.rows) / 2.0;
    dc.hypot(dr)
}

/// Start delay of a tile entrance: `distance_from_center * step_secs`.
pub fn stagger_delay(col: u32, row: u32, dims: GridDims, step_secs: f64) -> Duration {
    let secs = distance_from_center(col, row, dims) * step_secs;
    if !secs.is_finite() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::from_secs_f64(secs)
}

#[cfg(test)]
#[path = "../../tests/unit/grid/stagger.rs"]
mod tests;
