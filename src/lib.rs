//! Entrance choreography for decorative image grids.
//!
//! Tiles of a grid fly in from a viewport-relative 3D pose and settle on a spring, staggered
//! outward from the grid center. Measurement and animation are injected through
//! [`LayoutHost`] and [`Animator`] so the core runs headless.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod foundation;
mod grid;
mod layout;
mod reveal;
mod transform;

pub use animation::animator::{AnimationHandle, Animator, FrameAnimator, FrameSample};
pub use animation::ease::Ease;
pub use animation::spring::{REST_DELTA, Spring};
pub use animation::tween::PoseTween;
pub use foundation::core::{GridDims, Point, Pose, Rect, Size, TilePose, Vec2, Viewport};
pub use foundation::error::{GridError, GridResult};
pub use foundation::math::Rng64;
pub use grid::config::GridConfig;
pub use grid::controller::{GridController, Phase, TilePlan};
pub use grid::scroll::{scroll_progress, scrub};
pub use grid::selection::{TileSlot, assign_tiles, select_cells};
pub use grid::stagger::{distance_from_center, stagger_delay};
pub use grid::table::TransformTable;
pub use layout::breakpoint::{BreakpointWatcher, MediaQuery};
pub use layout::probe::{GeometryProbe, LayoutHost, UniformGridProbe, UniformLayoutHost};
pub use reveal::parallax::{Parallax, viewport_crossing_progress};
pub use reveal::text::{
    BLUR_START_PX, CharReveal, CharStyle, DEFAULT_CHARS_ANIMATED, InViewProgress, LineReveal,
    TextReveal, WordReveal, plan_text_reveal,
};
pub use transform::css::{GRID_PERSPECTIVE_PX, css_perspective, css_transform};
pub use transform::initial::{
    TransformParams, compute_initial_transform, distance_factor, fallback_pose,
};
