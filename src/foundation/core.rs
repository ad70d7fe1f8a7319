use crate::foundation::error::{GridError, GridResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Visible area at evaluation time, in CSS pixels.
///
/// Construction rejects zero, negative and non-finite sizes, so every `Viewport` has a
/// well-defined center and a non-zero half diagonal.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Validated viewport of `width` x `height` pixels.
    pub fn new(width: f64, height: f64) -> GridResult<Self> {
        if !(width.is_finite() && height.is_finite()) {
            return Err(GridError::validation("viewport size must be finite"));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(GridError::validation(format!(
                "viewport must have a non-zero area, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Width in pixels.
    pub fn width(self) -> f64 {
        self.width
    }

    /// Height in pixels.
    pub fn height(self) -> f64 {
        self.height
    }

    /// Size as a `kurbo::Size`.
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Center point, in viewport coordinates.
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Distance from the center to a corner.
    pub fn half_diagonal(self) -> f64 {
        self.center().to_vec2().hypot()
    }

    /// `(0, 0)`-anchored rectangle covering the viewport.
    pub fn bounds(self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.size())
    }
}

/// Column/row counts of a grid. Cells are indexed row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct GridDims {
    /// Cells per row.
    pub columns: u32,
    /// Cells per column.
    pub rows: u32,
}

impl GridDims {
    /// Grid of `columns` x `rows` cells.
    pub fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// `columns * rows`, saturating.
    pub fn total_cells(self) -> usize {
        (self.columns as usize).saturating_mul(self.rows as usize)
    }

    /// `true` when either count is zero.
    pub fn is_empty(self) -> bool {
        self.total_cells() == 0
    }

    /// `(col, row)` for a cell index. Zero-column grids map everything to `(0, 0)`.
    pub fn cell_coords(self, index: usize) -> (u32, u32) {
        let cols = self.columns as usize;
        if cols == 0 {
            return (0, 0);
        }
        ((index % cols) as u32, (index / cols) as u32)
    }

    /// Row-major index of `(col, row)`. Inverse of [`GridDims::cell_coords`].
    pub fn cell_index(self, col: u32, row: u32) -> usize {
        (row as usize) * (self.columns as usize) + (col as usize)
    }
}

/// Spatial displacement and rotation of a tile relative to its resting position.
///
/// Translations are in pixels, rotations in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    /// Horizontal translation; negative moves left.
    pub x: f64,
    /// Vertical translation; negative moves up.
    pub y: f64,
    /// Depth translation; negative moves away from the viewer.
    pub z: f64,
    /// Rotation around the horizontal axis.
    pub rotate_x: f64,
    /// Rotation around the vertical axis.
    pub rotate_y: f64,
}

impl Pose {
    /// No displacement, no rotation.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// `true` when every component is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.z.is_finite()
            && self.rotate_x.is_finite()
            && self.rotate_y.is_finite()
    }

    /// Every component multiplied by `k`.
    pub fn scaled(self, k: f64) -> Self {
        Self {
            x: self.x * k,
            y: self.y * k,
            z: self.z * k,
            rotate_x: self.rotate_x * k,
            rotate_y: self.rotate_y * k,
        }
    }

    /// Component-wise linear interpolation; `t` is not clamped.
    pub fn lerp(self, to: Self, t: f64) -> Self {
        Self {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            z: lerp(self.z, to.z, t),
            rotate_x: lerp(self.rotate_x, to.rotate_x, t),
            rotate_y: lerp(self.rotate_y, to.rotate_y, t),
        }
    }
}

/// A [`Pose`] plus the opacity/scale channels animated alongside it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TilePose {
    /// Displacement and rotation.
    pub pose: Pose,
    /// 0 is invisible, 1 fully opaque.
    pub opacity: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl TilePose {
    /// Resting state every entrance animation converges to.
    pub const REST: Self = Self {
        pose: Pose::IDENTITY,
        opacity: 1.0,
        scale: 1.0,
    };

    /// Opacity a tile starts its entrance from.
    pub const ENTRANCE_OPACITY: f64 = 0.0;
    /// Scale a tile starts its entrance from.
    pub const ENTRANCE_SCALE: f64 = 0.4;

    /// Starting state of a tile entrance from `pose`.
    pub fn entrance(pose: Pose) -> Self {
        Self {
            pose,
            opacity: Self::ENTRANCE_OPACITY,
            scale: Self::ENTRANCE_SCALE,
        }
    }

    /// Interpolates every channel with the same `t`.
    pub fn lerp(self, to: Self, t: f64) -> Self {
        Self {
            pose: self.pose.lerp(to.pose, t),
            opacity: lerp(self.opacity, to.opacity, t),
            scale: lerp(self.scale, to.scale, t),
        }
    }
}

impl Default for TilePose {
    fn default() -> Self {
        Self::REST
    }
}

/// Serializes a `Duration` as fractional seconds.
pub(crate) fn duration_secs<S>(d: &std::time::Duration, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_f64(d.as_secs_f64())
}

#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
