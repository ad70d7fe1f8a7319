use std::time::Duration;

use crate::{
    animation::spring::{REST_DELTA, Spring},
    foundation::core::{TilePose, duration_secs},
};

/// One-shot spring transition between two tile poses.
///
/// Every channel (pose, opacity, scale) shares the same spring progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PoseTween {
    /// State held until the delay elapses.
    pub from: TilePose,
    /// State reached once the spring settles.
    pub to: TilePose,
    /// Spring shaping the transition.
    pub spring: Spring,
    /// Wait before the spring starts.
    #[serde(serialize_with = "duration_secs")]
    pub delay: Duration,
    #[serde(skip)]
    settle_secs: f64,
}

impl PoseTween {
    /// Tween from `from` to `to`. Settle time is computed once here.
    pub fn new(from: TilePose, to: TilePose, spring: Spring, delay: Duration) -> Self {
        Self {
            from,
            to,
            spring,
            delay,
            settle_secs: spring.settle_time(REST_DELTA),
        }
    }

    /// Delay plus the time the spring needs to come to rest.
    pub fn total_duration(&self) -> Duration {
        self.delay + Duration::from_secs_f64(self.settle_secs)
    }

    /// Pose `elapsed` after the tween was started. Holds `from` during the delay.
    pub fn sample(&self, elapsed: Duration) -> TilePose {
        if elapsed <= self.delay {
            return self.from;
        }
        if self.is_settled(elapsed) {
            return self.to;
        }
        let t = (elapsed - self.delay).as_secs_f64();
        self.from.lerp(self.to, self.spring.progress(t))
    }

    /// Whether the tween has reached its target `elapsed` after start.
    pub fn is_settled(&self, elapsed: Duration) -> bool {
        elapsed >= self.total_duration()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
