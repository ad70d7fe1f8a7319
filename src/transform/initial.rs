//! Viewport-relative entrance poses.

use crate::foundation::core::{GridDims, Pose, Rect, Viewport};

/// Tuning for [`compute_initial_transform`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransformParams {
    /// Linear scale of the in-plane displacement, in pixels.
    pub offset_distance: f64,
    /// Rotation, in degrees, reached at `distance_factor == 1`. Negative values reverse the
    /// direction of rotation.
    pub max_rotation: f64,
    /// Depth, in pixels, reached at `distance_factor == 1`.
    pub max_z_translation: f64,
}

impl TransformParams {
    /// Preset used by the hero image grid: far displacement, reversed rotation, pushed back.
    pub const GRID_ENTRANCE: Self = Self {
        offset_distance: 900.0,
        max_rotation: -160.0,
        max_z_translation: -3000.0,
    };
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            offset_distance: 250.0,
            max_rotation: 300.0,
            max_z_translation: 2000.0,
        }
    }
}

const TRANSLATE_DAMP: f64 = 0.8;
const ROTATE_BOOST: f64 = 1.5;

/// Distance of the cell center from the viewport center, relative to the half diagonal.
///
/// Not clamped: cells measured outside the viewport produce values above 1.
pub fn distance_factor(cell: Rect, viewport: Viewport) -> f64 {
    let offset = viewport.center() - cell.center();
    offset.hypot() / viewport.half_diagonal()
}

/// Initial pose of a tile, pushed away from the viewport center.
///
/// The in-plane direction follows the angle between the cell center and the viewport center.
/// Rotation and depth grow with [`distance_factor`], so a cell exactly at the center gets no
/// rotation and no depth. Elements left of center move left and tilt with positive `rotate_y`;
/// elements above center move up and tilt with negative `rotate_x`. A center line counts as
/// right/below.
pub fn compute_initial_transform(cell: Rect, viewport: Viewport, params: TransformParams) -> Pose {
    let center = viewport.center();
    let element = cell.center();

    let dx = center.x - element.x;
    let dy = center.y - element.y;
    let angle = dy.abs().atan2(dx.abs());

    let translate_x = angle.cos().abs() * params.offset_distance;
    let translate_y = angle.sin().abs() * params.offset_distance;

    let factor = distance_factor(cell, viewport);

    let left = element.x < center.x;
    let above = element.y < center.y;
    let sign_x = if left { -1.0 } else { 1.0 };
    let sign_y = if above { -1.0 } else { 1.0 };

    let rotate_x =
        sign_y * (translate_y / params.offset_distance) * params.max_rotation * factor;
    // rotateY opposes the horizontal direction of travel.
    let rotate_y =
        -sign_x * (translate_x / params.offset_distance) * params.max_rotation * factor;

    Pose {
        x: sign_x * translate_x * TRANSLATE_DAMP,
        y: sign_y * translate_y * TRANSLATE_DAMP,
        z: params.max_z_translation * factor * TRANSLATE_DAMP,
        rotate_x: rotate_x * ROTATE_BOOST,
        rotate_y: rotate_y * ROTATE_BOOST,
    }
}

/// Quadrant-based outward pose for cells without a usable measured transform.
///
/// With [`TransformParams::GRID_ENTRANCE`] this is `(±900, ±600, -3000, ±160, ±160)`.
pub fn fallback_pose(col: u32, row: u32, dims: GridDims, params: TransformParams) -> Pose {
    let half_c = dims.columns / 2;
    let half_r = dims.rows / 2;
    let left = col < half_c;
    let top = row < half_r;

    let offset = params.offset_distance.abs();
    let rotation = params.max_rotation.abs();

    Pose {
        x: if left { -offset } else { offset },
        y: (if top { -offset } else { offset }) * 2.0 / 3.0,
        z: params.max_z_translation,
        rotate_x: if top { rotation } else { -rotation },
        rotate_y: if left { -rotation } else { rotation },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/initial.rs"]
mod tests;
