use crate::animation::interpolate::interpolate_clamped;

/// A `(start, end)` frame window mapped to a clamped progress ratio.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimingWindow {
    /// Frame at which progress leaves 0.
    pub start: f64,
    /// Frame at which progress reaches 1.
    pub end: f64,
}

impl TimingWindow {
    /// Window `[start, end]`.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Window of `duration` frames starting at `start`.
    pub fn starting_at(start: f64, duration: f64) -> Self {
        Self::new(start, start + duration)
    }

    /// Window of element `index` in a staggered reveal: starts at `index * stagger`.
    pub fn staggered(index: usize, stagger: f64, duration: f64) -> Self {
        Self::starting_at(index as f64 * stagger, duration)
    }

    /// Progress in `[0, 1]`; 0 before `start`, 1 after `end`.
    pub fn progress(&self, frame: f64) -> f64 {
        interpolate_clamped(frame, [self.start, self.end], [0.0, 1.0])
    }
}

/// Frame relative to a child's origin: `global - offset`. Negative before the child starts.
pub fn local_frame(global: f64, offset: f64) -> f64 {
    global - offset
}

/// Square-wave blink: on for `period_frames`, off for the next `period_frames`.
pub fn blink_on(frame: f64, period_frames: f64) -> bool {
    if period_frames <= 0.0 {
        return true;
    }
    (frame / period_frames).floor().rem_euclid(2.0) == 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
