//! Reusable animated building blocks shared by the scenes.
//!
//! Each widget is a pure function of a local frame, the frame rate and static data. Widgets
//! that animate expose a `...State` value with the computed parameters so timing can be tested
//! without walking the visual tree.

pub(crate) mod card;
pub(crate) mod charts;
pub(crate) mod gauge;
pub(crate) mod terminal;

use crate::foundation::core::{Affine, Point};

/// Baseline of a single text line laid out in a line box starting at `top`.
///
/// Assumes the usual `0.8em` ascent with half-leading split evenly above and below.
pub(crate) fn baseline(top: f64, line_height: f64, font_size: f64) -> f64 {
    top + (line_height - font_size) * 0.5 + font_size * 0.8
}

/// Conjugate `inner` so it acts around `center` (CSS `transform-origin`).
pub(crate) fn about(center: Point, inner: Affine) -> Affine {
    Affine::translate(center.to_vec2()) * inner * Affine::translate(-center.to_vec2())
}
