use crate::foundation::core::{GridDims, Point, Rect, Size, Viewport};

/// Geometry measurement capability: the rectangle of one probe cell, in viewport coordinates.
pub trait GeometryProbe {
    /// Rectangle of cell `cell_index`, or `None` if the cell has no layout.
    fn measure(&self, cell_index: usize) -> Option<Rect>;
}

/// Host that can lay out an invisible probe grid and report the current viewport.
///
/// The probe is discarded by dropping it.
pub trait LayoutHost {
    /// Probe grid produced by [`LayoutHost::build_probe`].
    type Probe: GeometryProbe;

    /// Current viewport.
    fn viewport(&self) -> Viewport;

    /// Lay out an invisible grid of `dims` and return its measurement handle.
    fn build_probe(&mut self, dims: GridDims) -> Self::Probe;
}

/// Gap-free grid of equal cells filling `container`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformGridProbe {
    dims: GridDims,
    container: Rect,
}

impl UniformGridProbe {
    /// Probe splitting `container` into `dims` equal cells.
    pub fn new(dims: GridDims, container: Rect) -> Self {
        Self { dims, container }
    }

    /// Full-width, full-height grid anchored at the viewport origin.
    pub fn covering(dims: GridDims, viewport: Viewport) -> Self {
        Self::new(dims, viewport.bounds())
    }

    /// Size of one cell; zero for an empty grid.
    pub fn cell_size(&self) -> Size {
        if self.dims.is_empty() {
            return Size::ZERO;
        }
        Size::new(
            self.container.width() / f64::from(self.dims.columns),
            self.container.height() / f64::from(self.dims.rows),
        )
    }
}

impl GeometryProbe for UniformGridProbe {
    fn measure(&self, cell_index: usize) -> Option<Rect> {
        if cell_index >= self.dims.total_cells() {
            return None;
        }
        let (col, row) = self.dims.cell_coords(cell_index);
        let size = self.cell_size();
        let origin = Point::new(
            self.container.x0 + f64::from(col) * size.width,
            self.container.y0 + f64::from(row) * size.height,
        );
        Some(Rect::from_origin_size(origin, size))
    }
}

/// [`LayoutHost`] backed by a fixed viewport and [`UniformGridProbe`]s.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformLayoutHost {
    viewport: Viewport,
}

impl UniformLayoutHost {
    /// Host reporting `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    /// Simulate a resize.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

impl LayoutHost for UniformLayoutHost {
    type Probe = UniformGridProbe;

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn build_probe(&mut self, dims: GridDims) -> UniformGridProbe {
        UniformGridProbe::covering(dims, self.viewport)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/probe.rs"]
mod tests;
