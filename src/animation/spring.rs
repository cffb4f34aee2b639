use crate::{
    foundation::core::Fps,
    foundation::error::{ReelError, ReelResult},
};

/// Parameters of a damped harmonic oscillator released from 0 toward 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Spring constant `k`.
    pub stiffness: f64,
    /// Mass `m`.
    pub mass: f64,
    /// Clamp the output so it never passes the target.
    #[serde(default)]
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            stiffness: 100.0,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Spring with the given damping, stiffness and mass, overshoot allowed.
    pub const fn new(damping: f64, stiffness: f64, mass: f64) -> Self {
        Self {
            damping,
            stiffness,
            mass,
            overshoot_clamping: false,
        }
    }

    /// Reject non-physical parameters.
    pub fn validate(&self) -> ReelResult<()> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ReelError::animation("spring mass must be > 0"));
        }
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(ReelError::animation("spring stiffness must be > 0"));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(ReelError::animation("spring damping must be >= 0"));
        }
        Ok(())
    }

    /// Damping ratio `zeta = c / (2 * sqrt(k * m))`.
    pub fn damping_ratio(&self) -> f64 {
        self.damping.max(0.0) / (2.0 * (self.stiffness.max(0.0) * self.mass.max(1e-9)).sqrt()).max(1e-9)
    }
}

/// Spring progress at `frame` (negative frames clamp to 0).
///
/// Closed-form step response of `m x'' + c x' + k (x - 1) = 0` with `x(0) = 0`, `v(0) = 0`,
/// evaluated at `frame / fps` seconds. Output is `0` at frame 0, tends to `1`, and overshoots
/// when underdamped unless `overshoot_clamping` is set.
///
/// Any damping ratio `>= 1` follows the critically damped curve, matching Remotion's
/// `spring()`: extra damping past critical does not slow the spring down.
pub fn spring(frame: f64, fps: Fps, config: SpringConfig) -> f64 {
    let t = fps.frames_to_secs(frame.max(0.0));
    let x = step_response(t, &config);
    if config.overshoot_clamping {
        x.min(1.0)
    } else {
        x
    }
}

fn step_response(t: f64, config: &SpringConfig) -> f64 {
    let w0 = (config.stiffness.max(0.0) / config.mass.max(1e-9)).sqrt();
    if !(w0.is_finite() && w0 > 0.0) {
        return 0.0;
    }
    let zeta = config.damping_ratio();

    if zeta < 1.0 {
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let e = (-zeta * w0 * t).exp();
        let k = zeta / (1.0 - zeta * zeta).sqrt();
        1.0 - e * ((wd * t).cos() + k * (wd * t).sin())
    } else {
        let e = (-w0 * t).exp();
        1.0 - e * (1.0 + w0 * t)
    }
}

/// A spring mapped onto an arbitrary value range and delayed by a number of frames.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringAnim {
    /// Oscillator parameters.
    pub config: SpringConfig,
    /// Value at rest before release.
    pub from: f64,
    /// Target value.
    pub to: f64,
    /// Frames to wait before release.
    pub delay_frames: f64,
}

impl SpringAnim {
    /// `0 -> 1` spring without delay.
    pub fn unit(config: SpringConfig) -> Self {
        Self {
            config,
            from: 0.0,
            to: 1.0,
            delay_frames: 0.0,
        }
    }

    /// Builder: value range.
    pub fn range(mut self, from: f64, to: f64) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Builder: release delay.
    pub fn delay(mut self, frames: f64) -> Self {
        self.delay_frames = frames;
        self
    }

    /// Sample at `frame`.
    pub fn sample(&self, frame: f64, fps: Fps) -> f64 {
        let p = spring(frame - self.delay_frames, fps, self.config);
        self.from + (self.to - self.from) * p
    }
}

/// Threshold used by [`measure_spring`] when callers have no preference.
pub const DEFAULT_SETTLE_THRESHOLD: f64 = 0.005;

/// Number of frames after which the spring stays within `threshold` of its target.
///
/// Scans at most one minute of frames; a spring that never settles in that window reports the
/// scan length.
pub fn measure_spring(fps: Fps, config: SpringConfig, threshold: f64) -> u64 {
    let limit = fps.secs_to_frames_floor(60.0).max(1);
    let threshold = threshold.abs();
    let mut last_unsettled = None;
    for f in 0..=limit {
        if (spring(f as f64, fps, config) - 1.0).abs() > threshold {
            last_unsettled = Some(f);
        }
    }
    match last_unsettled {
        Some(f) => (f + 1).min(limit),
        None => 0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
