use crate::foundation::core::{Fps, FrameIndex, VideoConfig};

/// Timing context handed down the visual tree.
///
/// `frame` is local to the enclosing sequence and may be negative or fractional after a
/// shift; `global` always tracks the composition frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameCtx {
    /// Local frame.
    pub frame: f64,
    /// Composition frame.
    pub global: f64,
    /// Video configuration of the composition.
    pub config: VideoConfig,
}

impl FrameCtx {
    /// Root context for `frame`, clamped into the composition's frame range.
    pub fn root(frame: FrameIndex, config: VideoConfig) -> Self {
        let f = frame.0.min(config.last_frame().0) as f64;
        Self {
            frame: f,
            global: f,
            config,
        }
    }

    /// Child context whose local origin sits `offset` frames later.
    pub fn shifted(&self, offset: f64) -> Self {
        Self {
            frame: self.frame - offset,
            ..*self
        }
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.config.fps
    }

    /// Frame rate as `f64`.
    pub fn fps_f64(&self) -> f64 {
        self.config.fps.as_f64()
    }

    /// `secs * fps`, unrounded.
    pub fn secs(&self, secs: f64) -> f64 {
        secs * self.fps_f64()
    }

    /// `round(fps * secs)`, the usual way delays and durations are snapped to frames.
    pub fn round_secs(&self, secs: f64) -> f64 {
        (self.fps_f64() * secs).round()
    }

    /// Canvas width as `f64`.
    pub fn width(&self) -> f64 {
        f64::from(self.config.width)
    }

    /// Canvas height as `f64`.
    pub fn height(&self) -> f64 {
        f64::from(self.config.height)
    }

    /// Composition length in frames as `f64`.
    pub fn duration(&self) -> f64 {
        self.config.duration_in_frames as f64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/context.rs"]
mod tests;
