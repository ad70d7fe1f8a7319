use std::{fs::File, io::BufReader, path::Path};

use crate::{
    animation::spring::Spring,
    foundation::core::GridDims,
    foundation::error::{GridError, GridResult},
    layout::breakpoint::MediaQuery,
    transform::initial::TransformParams,
};

/// Options of the animated image grid.
///
/// Every field has a default, so `{}` is a valid config for the hero grid: 9x4 cells on
/// desktop, 3x4 on mobile, ten tiles.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Column count at or above the desktop breakpoint.
    pub columns_desktop: u32,
    /// Row count at or above the desktop breakpoint.
    pub rows_desktop: u32,
    /// Column count below the desktop breakpoint.
    pub columns_mobile: u32,
    /// Row count below the desktop breakpoint.
    pub rows_mobile: u32,
    /// Image references, cycled over the selected tiles.
    pub images: Vec<String>,
    /// Number of tiles to populate (clamped to the cell count).
    pub tile_count: usize,
    /// Container class passed through to the host.
    pub class_name: String,
    /// Viewport width (px) at which the desktop dims apply.
    pub desktop_min_width: f64,
    /// Settle delay before probing layout after a mount or breakpoint change.
    pub measure_delay_ms: u64,
    /// Seconds of delay per grid cell of distance from the grid center.
    pub stagger_step_secs: f64,
    /// Parameters fed to the transform calculator for every cell.
    pub transform: TransformParams,
    /// Spring shared by every tile entrance.
    pub spring: Spring,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns_desktop: 9,
            rows_desktop: 4,
            columns_mobile: 3,
            rows_mobile: 4,
            images: Vec::new(),
            tile_count: 10,
            class_name: String::new(),
            desktop_min_width: 1024.0,
            measure_delay_ms: 100,
            stagger_step_secs: 0.15,
            transform: TransformParams::GRID_ENTRANCE,
            spring: Spring::default(),
        }
    }
}

impl GridConfig {
    /// Upper bound on `columns * rows` for either breakpoint. Every measurement probes each
    /// cell, so the table cost grows with the cell count.
    pub const MAX_CELLS: usize = 4096;

    /// Parse and validate a config from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> GridResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| GridError::serde(format!("parse grid config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// [`GridConfig::from_reader`] over a string.
    pub fn from_json_str(s: &str) -> GridResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Read and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> GridResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GridError::validation(format!("open grid config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check dims, the cell bound, widths, the stagger step, transform parameters and the spring.
    pub fn validate(&self) -> GridResult<()> {
        for (name, v) in [
            ("columns_desktop", self.columns_desktop),
            ("rows_desktop", self.rows_desktop),
            ("columns_mobile", self.columns_mobile),
            ("rows_mobile", self.rows_mobile),
        ] {
            if v == 0 {
                return Err(GridError::validation(format!("{name} must be >= 1")));
            }
        }
        for (name, dims) in [("desktop", self.dims(true)), ("mobile", self.dims(false))] {
            if dims.total_cells() > Self::MAX_CELLS {
                return Err(GridError::validation(format!(
                    "{name} grid {}x{} exceeds {} cells",
                    dims.columns,
                    dims.rows,
                    Self::MAX_CELLS
                )));
            }
        }
        if !self.desktop_min_width.is_finite() || self.desktop_min_width < 0.0 {
            return Err(GridError::validation(
                "desktop_min_width must be a finite, non-negative width",
            ));
        }
        if !self.stagger_step_secs.is_finite() || self.stagger_step_secs < 0.0 {
            return Err(GridError::validation(
                "stagger_step_secs must be finite and >= 0",
            ));
        }
        let t = self.transform;
        if !(t.offset_distance.is_finite()
            && t.max_rotation.is_finite()
            && t.max_z_translation.is_finite())
        {
            return Err(GridError::validation("transform parameters must be finite"));
        }
        self.spring
            .validate()
            .map_err(|e| GridError::validation(format!("spring: {e}")))?;
        Ok(())
    }

    /// Media query selecting the desktop dims.
    pub fn desktop_query(&self) -> MediaQuery {
        MediaQuery::MinWidth(self.desktop_min_width)
    }

    /// Dims for the desktop or mobile breakpoint.
    pub fn dims(&self, desktop: bool) -> GridDims {
        if desktop {
            GridDims::new(self.columns_desktop, self.rows_desktop)
        } else {
            GridDims::new(self.columns_mobile, self.rows_mobile)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/config.rs"]
mod tests;
