/// Progress of an element crossing the viewport: 0 when its top edge meets the viewport
/// bottom, 1 when its bottom edge leaves through the viewport top.
pub fn viewport_crossing_progress(top: f64, height: f64, window_height: f64) -> f64 {
    let span = window_height + height;
    if span <= 0.0 || !span.is_finite() {
        return 0.0;
    }
    ((window_height - top) / span).clamp(0.0, 1.0)
}

/// Vertical parallax for an image inside a clipping container.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Parallax {
    /// 1 = no movement; larger values move further.
    pub power: f64,
    /// Oversize factor hiding the container edges while the image moves.
    pub scale: f64,
}

impl Default for Parallax {
    fn default() -> Self {
        Self {
            power: 1.5,
            scale: 1.15,
        }
    }
}

impl Parallax {
    /// Half the travel, as a percentage of the image height.
    pub fn range_percent(&self) -> f64 {
        (self.power - 1.0) * 100.0 / 2.0
    }

    /// `translateY` percentage at crossing `progress`, from `-range` to `+range`.
    pub fn translate_y_percent(&self, progress: f64) -> f64 {
        let r = self.range_percent();
        -r + 2.0 * r * progress.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/parallax.rs"]
mod tests;
