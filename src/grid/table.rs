use std::sync::Arc;

use crate::{
    foundation::core::{GridDims, Pose, Viewport},
    foundation::error::{GridError, GridResult},
    layout::probe::GeometryProbe,
    transform::initial::{TransformParams, compute_initial_transform},
};

/// One precomputed entrance pose per cell index of a grid.
///
/// Built in one pass and never mutated afterwards. Cloning shares the pose storage, so readers
/// holding a table keep a consistent snapshot while the controller swaps in a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformTable {
    dims: GridDims,
    poses: Arc<[Pose]>,
}

impl TransformTable {
    /// Measure every cell of `dims` through `probe` and compute its entrance pose.
    ///
    /// Fails without a partial result if any cell cannot be measured.
    #[tracing::instrument(skip(probe, params), fields(columns = dims.columns, rows = dims.rows))]
    pub fn build(
        probe: &dyn GeometryProbe,
        viewport: Viewport,
        dims: GridDims,
        params: TransformParams,
    ) -> GridResult<Self> {
        let total = dims.total_cells();
        let mut poses = Vec::with_capacity(total);
        for cell in 0..total {
            let rect = probe.measure(cell).ok_or_else(|| {
                GridError::measurement(format!("probe has no geometry for cell {cell}/{total}"))
            })?;
            poses.push(compute_initial_transform(rect, viewport, params));
        }
        Ok(Self {
            dims,
            poses: poses.into(),
        })
    }

    /// Dims the table was measured for.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Number of poses; equals `dims().total_cells()`.
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// `true` for a zero-cell grid.
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// All poses by cell index, including non-finite ones.
    pub fn poses(&self) -> &[Pose] {
        &self.poses
    }

    /// Measured pose for `cell`, if present and finite.
    pub fn pose_for(&self, cell: usize) -> Option<Pose> {
        self.poses.get(cell).copied().filter(|p| p.is_finite())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/table.rs"]
mod tests;
