use std::{collections::BTreeMap, time::Duration};

use crate::{animation::tween::PoseTween, foundation::core::TilePose};

/// Opaque id of a launched animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct AnimationHandle(u64);

impl AnimationHandle {
    /// Raw id, unique per animator.
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Animation scheduling capability provided by the host runtime.
///
/// `now` is the host's monotonic clock, expressed as time since an arbitrary epoch.
pub trait Animator {
    /// Start `tween` at `now`. The tween's own delay applies on top.
    fn animate(&mut self, tween: PoseTween, now: Duration) -> AnimationHandle;

    /// Stop an animation. Returns `false` for unknown or already finished handles.
    fn cancel(&mut self, handle: AnimationHandle) -> bool;
}

/// Pose of one animation at a tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameSample {
    /// Animation this sample belongs to.
    pub handle: AnimationHandle,
    /// Tile state at the sampled instant.
    pub pose: TilePose,
    /// Set on the last sample an animation produces.
    pub finished: bool,
}

#[derive(Clone, Copy, Debug)]
struct Running {
    tween: PoseTween,
    started_at: Duration,
}

/// In-process [`Animator`] driven by explicit per-frame ticks.
#[derive(Debug, Default)]
pub struct FrameAnimator {
    next_id: u64,
    running: BTreeMap<AnimationHandle, Running>,
}

impl FrameAnimator {
    /// Animator with nothing running.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live animations.
    pub fn len(&self) -> usize {
        self.running.len()
    }

    /// `true` once every animation has finished or been cancelled.
    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }

    /// Whether `handle` is still live.
    pub fn is_running(&self, handle: AnimationHandle) -> bool {
        self.running.contains_key(&handle)
    }

    /// Sample every live animation at `now`, in launch order.
    ///
    /// Settled animations emit their exact target once, flagged `finished`, and are retired.
    pub fn tick(&mut self, now: Duration) -> Vec<FrameSample> {
        let mut out = Vec::with_capacity(self.running.len());
        let mut retired = Vec::new();
        for (&handle, run) in &self.running {
            let elapsed = now.saturating_sub(run.started_at);
            let finished = run.tween.is_settled(elapsed);
            out.push(FrameSample {
                handle,
                pose: run.tween.sample(elapsed),
                finished,
            });
            if finished {
                retired.push(handle);
            }
        }
        for handle in retired {
            self.running.remove(&handle);
            tracing::trace!(handle = handle.0, "animation settled");
        }
        out
    }
}

impl Animator for FrameAnimator {
    fn animate(&mut self, tween: PoseTween, now: Duration) -> AnimationHandle {
        let handle = AnimationHandle(self.next_id);
        self.next_id += 1;
        self.running.insert(
            handle,
            Running {
                tween,
                started_at: now,
            },
        );
        handle
    }

    fn cancel(&mut self, handle: AnimationHandle) -> bool {
        self.running.remove(&handle).is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
