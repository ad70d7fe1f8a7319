use crate::foundation::error::{GridError, GridResult};

/// Damped harmonic oscillator driving a value from 0 to 1.
///
/// The default matches the hero grid entrance: stiffness 60, damping 18, unit mass. That is
/// slightly overdamped (`zeta ≈ 1.16`), so tiles settle without overshoot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spring {
    /// Spring constant `k`.
    pub stiffness: f64,
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Mass `m`; defaults to 1 when omitted from JSON.
    #[serde(default = "default_mass")]
    pub mass: f64,
}

fn default_mass() -> f64 {
    1.0
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: 60.0,
            damping: 18.0,
            mass: 1.0,
        }
    }
}

/// Default rest threshold, as a fraction of the total travel.
pub const REST_DELTA: f64 = 0.001;

const SETTLE_SCAN_STEP_SECS: f64 = 1.0 / 240.0;
const SETTLE_SCAN_MAX_SECS: f64 = 30.0;

impl Spring {
    /// Validated constructor.
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> GridResult<Self> {
        let s = Self {
            stiffness,
            damping,
            mass,
        };
        s.validate()?;
        Ok(s)
    }

    /// Rejects non-finite values, non-positive stiffness or mass, and negative damping.
    pub fn validate(&self) -> GridResult<()> {
        if !(self.stiffness.is_finite() && self.damping.is_finite() && self.mass.is_finite()) {
            return Err(GridError::animation("spring parameters must be finite"));
        }
        if self.stiffness <= 0.0 {
            return Err(GridError::animation("spring stiffness must be > 0"));
        }
        if self.mass <= 0.0 {
            return Err(GridError::animation("spring mass must be > 0"));
        }
        if self.damping < 0.0 {
            return Err(GridError::animation("spring damping must be >= 0"));
        }
        Ok(())
    }

    /// Undamped angular frequency `sqrt(k / m)`, in rad/s.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness.max(0.0) / self.mass.max(1e-9)).sqrt()
    }

    /// `zeta`: below 1 overshoots, 1 is critical, above 1 creeps in.
    pub fn damping_ratio(&self) -> f64 {
        let k = self.stiffness.max(0.0);
        let m = self.mass.max(1e-9);
        self.damping.max(0.0) / (2.0 * (k * m).sqrt()).max(1e-9)
    }

    /// Step response at `t` seconds, starting at rest at 0 and converging to 1.
    pub fn progress(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let w0 = self.natural_frequency();
        if w0 == 0.0 {
            return 1.0;
        }
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-6 {
            // Critically damped.
            let e = (-w0 * t).exp();
            1.0 - e * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let e = (-zeta * w0 * t).exp();
            let k = zeta / (1.0 - zeta * zeta).sqrt();
            1.0 - e * ((wd * t).cos() + k * (wd * t).sin())
        } else {
            let z2 = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - z2);
            let r2 = -w0 * (zeta + z2);
            let c2 = (zeta + z2) / (2.0 * z2);
            let c1 = (zeta - z2) / (2.0 * z2);
            1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
        }
    }

    /// Earliest time after which the response stays within `rest_delta` of 1.
    ///
    /// Found by a fixed-step scan; springs that never settle report the scan cap.
    pub fn settle_time(&self, rest_delta: f64) -> f64 {
        let rest_delta = rest_delta.abs().max(1e-9);
        let steps = (SETTLE_SCAN_MAX_SECS / SETTLE_SCAN_STEP_SECS).ceil() as u64;
        let mut last_outside = 0.0;
        for i in 0..=steps {
            let t = (i as f64) * SETTLE_SCAN_STEP_SECS;
            if (1.0 - self.progress(t)).abs() >= rest_delta {
                last_outside = t;
            }
        }
        if last_outside >= SETTLE_SCAN_MAX_SECS {
            return SETTLE_SCAN_MAX_SECS;
        }
        (last_outside + SETTLE_SCAN_STEP_SECS).min(SETTLE_SCAN_MAX_SECS)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
