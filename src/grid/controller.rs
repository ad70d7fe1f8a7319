use std::time::Duration;

use crate::{
    animation::{
        animator::{AnimationHandle, Animator},
        spring::Spring,
        tween::PoseTween,
    },
    foundation::core::{GridDims, TilePose, Viewport, duration_secs},
    foundation::error::{GridError, GridResult},
    foundation::math::Rng64,
    grid::{
        config::GridConfig,
        selection::{assign_tiles, select_cells},
        stagger::stagger_delay,
        table::TransformTable,
    },
    layout::{breakpoint::BreakpointWatcher, probe::LayoutHost},
    transform::initial::fallback_pose,
};

/// Measurement lifecycle of a [`GridController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No transform table.
    Unmeasured,
    /// A probe measurement is scheduled for `deadline`.
    Measuring {
        /// Host time at which [`GridController::poll`] runs the measurement.
        deadline: Duration,
    },
    /// A table for the active dims is installed.
    Ready,
}

/// Everything a host needs to render and animate one tile.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TilePlan {
    /// Row-major cell index.
    pub cell: usize,
    /// Column of `cell`.
    pub col: u32,
    /// Row of `cell`.
    pub row: u32,
    /// Image drawn in the tile.
    pub image: String,
    /// Entrance start state.
    pub initial: TilePose,
    /// Resting state, always [`TilePose::REST`].
    pub target: TilePose,
    /// Stagger delay before the spring starts.
    #[serde(serialize_with = "duration_secs")]
    pub delay: Duration,
    /// Spring shared by every tile of the grid.
    pub spring: Spring,
    /// `false` when `initial` is the quadrant fallback.
    pub measured: bool,
}

impl TilePlan {
    /// Entrance tween for this tile.
    pub fn tween(&self) -> PoseTween {
        PoseTween::new(self.initial, self.target, self.spring, self.delay)
    }
}

/// Drives the animated image grid: breakpoint tracking, deferred probe measurement, tile
/// selection and entrance animations.
///
/// The controller is single-threaded and clock-agnostic: every entry point takes `now` from the
/// host's monotonic clock.
#[derive(Debug)]
pub struct GridController {
    config: GridConfig,
    breakpoint: BreakpointWatcher,
    phase: Phase,
    mounted: bool,
    table: Option<TransformTable>,
    handles: Vec<AnimationHandle>,
}

impl GridController {
    /// Unmounted controller for a validated `config`.
    pub fn new(config: GridConfig) -> GridResult<Self> {
        config.validate()?;
        let breakpoint = BreakpointWatcher::new(config.desktop_query());
        Ok(Self {
            config,
            breakpoint,
            phase: Phase::Unmeasured,
            mounted: false,
            table: None,
            handles: Vec::new(),
        })
    }

    /// Validated config the controller was built with.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Current measurement phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Between [`GridController::mount`] and [`GridController::unmount`].
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the desktop breakpoint matched at the last observation.
    pub fn is_desktop(&self) -> bool {
        self.breakpoint.matches()
    }

    /// Dims for the active breakpoint.
    pub fn dims(&self) -> GridDims {
        self.config.dims(self.is_desktop())
    }

    /// Snapshot of the installed table. Snapshots stay valid across later rebuilds.
    pub fn transform_table(&self) -> Option<TransformTable> {
        self.table.clone()
    }

    /// Handles of the animations launched by the latest [`GridController::start`].
    pub fn handles(&self) -> &[AnimationHandle] {
        &self.handles
    }

    /// Attach to a host: evaluate the breakpoint and schedule the first measurement.
    #[tracing::instrument(skip(self))]
    pub fn mount(&mut self, now: Duration, viewport: Viewport) {
        self.mounted = true;
        self.breakpoint.observe(viewport);
        tracing::debug!(desktop = self.is_desktop(), "grid mounted");
        self.schedule_measurement(now);
    }

    /// Feed a viewport change. Restarts measurement and returns `true` when the breakpoint
    /// flipped; any pending measurement is preempted.
    pub fn on_viewport_change(&mut self, now: Duration, viewport: Viewport) -> bool {
        if !self.mounted {
            return false;
        }
        match self.breakpoint.observe(viewport) {
            Some(desktop) => {
                tracing::debug!(desktop, "breakpoint changed");
                self.schedule_measurement(now);
                true
            }
            None => false,
        }
    }

    /// Run a due measurement. Returns `true` when a new table was installed.
    pub fn poll<H: LayoutHost>(&mut self, now: Duration, host: &mut H) -> bool {
        match self.phase {
            Phase::Measuring { deadline } if now >= deadline => self.measure(host),
            _ => false,
        }
    }

    fn schedule_measurement(&mut self, now: Duration) {
        let deadline = now + Duration::from_millis(self.config.measure_delay_ms);
        tracing::debug!(deadline_ms = deadline.as_millis() as u64, "measurement scheduled");
        self.phase = Phase::Measuring { deadline };
    }

    fn measure<H: LayoutHost>(&mut self, host: &mut H) -> bool {
        let dims = self.dims();
        let viewport = host.viewport();
        let built = {
            let probe = host.build_probe(dims);
            TransformTable::build(&probe, viewport, dims, self.config.transform)
        };

        match built {
            Ok(table) => {
                tracing::debug!(cells = table.len(), "transform table swapped");
                self.table = Some(table);
                self.phase = Phase::Ready;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "grid measurement failed; keeping previous table");
                self.phase = if self.table.is_some() {
                    Phase::Ready
                } else {
                    Phase::Unmeasured
                };
                false
            }
        }
    }

    /// Select tiles and resolve their entrance parameters.
    ///
    /// Selection is redone on every call and does not wait for measurement: cells without a
    /// finite measured pose for the active dims use the quadrant fallback.
    pub fn plan(&self, rng: &mut Rng64) -> Vec<TilePlan> {
        let dims = self.dims();
        let cells = select_cells(self.config.tile_count, dims.total_cells(), rng);
        let table = self.table.as_ref().filter(|t| t.dims() == dims);

        assign_tiles(&cells, &self.config.images)
            .into_iter()
            .map(|slot| {
                let (col, row) = dims.cell_coords(slot.cell);
                let measured = table.and_then(|t| t.pose_for(slot.cell));
                let pose = measured
                    .unwrap_or_else(|| fallback_pose(col, row, dims, self.config.transform));
                TilePlan {
                    cell: slot.cell,
                    col,
                    row,
                    image: slot.image,
                    initial: TilePose::entrance(pose),
                    target: TilePose::REST,
                    delay: stagger_delay(col, row, dims, self.config.stagger_step_secs),
                    spring: self.config.spring,
                    measured: measured.is_some(),
                }
            })
            .collect()
    }

    /// Plan tiles and launch one entrance animation per tile.
    ///
    /// A new plan replaces the previous tiles, so animations from an earlier start are cancelled
    /// first. The controller only ever holds the handles of the current batch.
    #[tracing::instrument(skip(self, rng, animator))]
    pub fn start(
        &mut self,
        now: Duration,
        rng: &mut Rng64,
        animator: &mut dyn Animator,
    ) -> GridResult<Vec<(TilePlan, AnimationHandle)>> {
        if !self.mounted {
            return Err(GridError::animation("grid must be mounted before starting"));
        }
        let replaced = self.cancel_all(animator);
        if replaced > 0 {
            tracing::debug!(replaced, "previous entrance animations cancelled");
        }
        let launched: Vec<(TilePlan, AnimationHandle)> = self
            .plan(rng)
            .into_iter()
            .map(|plan| {
                let handle = animator.animate(plan.tween(), now);
                (plan, handle)
            })
            .collect();
        self.handles = launched.iter().map(|(_, h)| *h).collect();
        tracing::debug!(tiles = launched.len(), "entrance animations started");
        Ok(launched)
    }

    /// Tear down: drop any pending measurement, cancel owned animations, discard the table.
    pub fn unmount(&mut self, animator: &mut dyn Animator) {
        let cancelled = self.cancel_all(animator);
        self.phase = Phase::Unmeasured;
        self.table = None;
        self.mounted = false;
        tracing::debug!(cancelled, "grid unmounted");
    }

    /// Cancel every held handle; returns how many were still running.
    fn cancel_all(&mut self, animator: &mut dyn Animator) -> usize {
        self.handles
            .drain(..)
            .filter(|h| animator.cancel(*h))
            .count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/controller.rs"]
mod tests;
