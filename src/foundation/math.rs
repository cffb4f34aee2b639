use crate::foundation::core::{Affine, Rect};

pub(crate) fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Affine mapping `view` into `target` with SVG `xMidYMid meet` semantics.
pub(crate) fn fit_viewbox(view: Rect, target: Rect) -> Affine {
    let vw = view.width().max(1e-9);
    let vh = view.height().max(1e-9);
    let s = (target.width() / vw).min(target.height() / vh);
    let dx = target.x0 + (target.width() - vw * s) / 2.0;
    let dy = target.y0 + (target.height() - vh * s) / 2.0;
    Affine::translate((dx, dy)) * Affine::scale(s) * Affine::translate((-view.x0, -view.y0))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
