//! CSS rendering of tile poses.

use std::fmt::Write as _;

use crate::foundation::core::TilePose;

/// Perspective applied by the grid container, in pixels.
pub const GRID_PERSPECTIVE_PX: f64 = 1500.0;

/// `transform` value for a tile, in the order the host applies it.
pub fn css_transform(tile: &TilePose) -> String {
    let p = tile.pose;
    let mut out = String::with_capacity(96);
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "translate3d({}px, {}px, {}px) rotateX({}deg) rotateY({}deg) scale({})",
        fmt_num(p.x),
        fmt_num(p.y),
        fmt_num(p.z),
        fmt_num(p.rotate_x),
        fmt_num(p.rotate_y),
        fmt_num(tile.scale),
    );
    out
}

/// `perspective` value for the grid container.
pub fn css_perspective() -> String {
    format!("{}px", fmt_num(GRID_PERSPECTIVE_PX))
}

/// Rounds to 4 decimals and normalizes `-0`, keeping output stable across platforms.
fn fmt_num(v: f64) -> String {
    let r = (v * 10_000.0).round() / 10_000.0;
    if r == 0.0 {
        return "0".to_string();
    }
    format!("{r}")
}

#[cfg(test)]
#[path = "../../tests/unit/transform/css.rs"]
mod tests;
