use crate::{
    animation::ease::Ease,
    foundation::error::{ReelError, ReelResult},
    foundation::math::lerp,
};

/// What happens to inputs outside the input range, per side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Extrapolate {
    /// Keep following the boundary segment linearly.
    #[default]
    Extend,
    /// Pin to the nearest output bound.
    Clamp,
    /// Return the input unchanged.
    Identity,
}

/// Options for [`interpolate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOpts {
    /// Easing applied to the normalized input inside the range.
    pub easing: Ease,
    /// Behavior below the first input bound.
    pub extrapolate_left: Extrapolate,
    /// Behavior above the last input bound.
    pub extrapolate_right: Extrapolate,
}

impl InterpolateOpts {
    /// Linear, extrapolating on both sides.
    pub fn extended() -> Self {
        Self::default()
    }

    /// Linear, clamped on both sides.
    pub fn clamped() -> Self {
        Self {
            easing: Ease::Linear,
            extrapolate_left: Extrapolate::Clamp,
            extrapolate_right: Extrapolate::Clamp,
        }
    }

    /// Replace the easing curve.
    pub fn with_easing(mut self, easing: Ease) -> Self {
        self.easing = easing;
        self
    }

    /// Set left-side extrapolation.
    pub fn left(mut self, mode: Extrapolate) -> Self {
        self.extrapolate_left = mode;
        self
    }

    /// Set right-side extrapolation.
    pub fn right(mut self, mode: Extrapolate) -> Self {
        self.extrapolate_right = mode;
        self
    }
}

/// Map `value` from `input` to `output`.
///
/// Inside the range the normalized input is eased before mapping. Outside, each side follows
/// its [`Extrapolate`] mode. A zero-width input range yields `output[0]`; callers always pass
/// distinct bounds.
pub fn interpolate(value: f64, input: [f64; 2], output: [f64; 2], opts: InterpolateOpts) -> f64 {
    let [in0, in1] = input;
    let [out0, out1] = output;
    let span = in1 - in0;
    if span == 0.0 {
        return out0;
    }

    let mut t = (value - in0) / span;
    if t < 0.0 {
        match opts.extrapolate_left {
            Extrapolate::Clamp => return out0,
            Extrapolate::Identity => return value,
            Extrapolate::Extend => {}
        }
    }
    if t > 1.0 {
        match opts.extrapolate_right {
            Extrapolate::Clamp => return out1,
            Extrapolate::Identity => return value,
            Extrapolate::Extend => {}
        }
    }

    if (0.0..=1.0).contains(&t) {
        t = opts.easing.apply(t);
    }
    lerp(out0, out1, t)
}

/// [`interpolate`] with clamping on both sides, the most common form.
pub fn interpolate_clamped(value: f64, input: [f64; 2], output: [f64; 2]) -> f64 {
    interpolate(value, input, output, InterpolateOpts::clamped())
}

/// Multi-point variant: selects the segment of `input` that contains `value` (or the boundary
/// segment when outside) and interpolates it.
///
/// Both ranges must have the same length (at least 2) and `input` must be strictly
/// increasing.
pub fn interpolate_multi(
    value: f64,
    input: &[f64],
    output: &[f64],
    opts: InterpolateOpts,
) -> ReelResult<f64> {
    if input.len() != output.len() {
        return Err(ReelError::animation(format!(
            "input range has {} points but output range has {}",
            input.len(),
            output.len()
        )));
    }
    if input.len() < 2 {
        return Err(ReelError::animation(
            "interpolation ranges need at least 2 points",
        ));
    }
    if !input.windows(2).all(|w| w[0] < w[1]) {
        return Err(ReelError::animation(
            "interpolation input range must be strictly increasing",
        ));
    }
    if input.iter().chain(output).any(|v| !v.is_finite()) {
        return Err(ReelError::animation(
            "interpolation ranges must be finite",
        ));
    }

    let last_segment = input.len() - 2;
    let seg = input[1..]
        .iter()
        .position(|&bound| value < bound)
        .unwrap_or(last_segment)
        .min(last_segment);

    let seg_opts = InterpolateOpts {
        easing: opts.easing,
        extrapolate_left: if seg == 0 {
            opts.extrapolate_left
        } else {
            Extrapolate::Extend
        },
        extrapolate_right: if seg == last_segment {
            opts.extrapolate_right
        } else {
            Extrapolate::Extend
        },
    };
    Ok(interpolate(
        value,
        [input[seg], input[seg + 1]],
        [output[seg], output[seg + 1]],
        seg_opts,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
