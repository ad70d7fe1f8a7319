//! Scroll-linked variant of the grid entrance.
//!
//! Instead of a one-shot spring, tiles are scrubbed between their entrance pose and rest by how
//! far the grid's parent still extends below the viewport.

use crate::foundation::core::{Pose, TilePose};

/// `0` once the parent's bottom edge reaches the viewport bottom, `1` when it is at least one
/// viewport height below.
pub fn scroll_progress(parent_top: f64, parent_height: f64, window_height: f64) -> f64 {
    if window_height <= 0.0 || !window_height.is_finite() {
        return 0.0;
    }
    let remaining = (parent_top + parent_height - window_height).max(0.0);
    (remaining / window_height).min(1.0)
}

/// Tile state at `progress` (0 = rest, 1 = fully displaced, faded to 0.2 and scaled to 0.4).
pub fn scrub(initial: Pose, progress: f64) -> TilePose {
    let p = progress.clamp(0.0, 1.0);
    TilePose {
        pose: initial.scaled(p),
        opacity: 1.0 - 0.8 * p,
        scale: 1.0 - 0.6 * p,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/scroll.rs"]
mod tests;
