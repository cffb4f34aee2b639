use crate::foundation::core::{Affine, Point, Size};

/// CSS-style 3D transform of one element, flattened to 2D for rendering.
///
/// Models `perspective(p)` on the parent plus
/// `translateY(ty) translateZ(tz) rotateX(rx) rotateY(ry) scale(s)` on the element, with
/// `transform-origin` at `origin`. Positions are in parent space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Projection {
    /// Viewer distance from the `z = 0` plane.
    pub perspective: f64,
    /// Vanishing point.
    pub perspective_origin: Point,
    /// Transform origin.
    pub origin: Point,
    /// Element size; the half-extent axes drive the affine fit.
    pub extent: Size,
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub translate_y: f64,
    pub translate_z: f64,
    pub scale: f64,
}

impl Projection {
    /// Identity pose under `perspective`.
    pub fn new(perspective: f64, perspective_origin: Point, origin: Point, extent: Size) -> Self {
        Self {
            perspective,
            perspective_origin,
            origin,
            extent,
            rotate_x_deg: 0.0,
            rotate_y_deg: 0.0,
            translate_y: 0.0,
            translate_z: 0.0,
            scale: 1.0,
        }
    }

    /// Project a parent-space point of the untransformed element.
    pub fn project(&self, p: Point) -> Point {
        let (rx, ry) = (self.rotate_x_deg.to_radians(), self.rotate_y_deg.to_radians());

        let mut x = (p.x - self.origin.x) * self.scale;
        let mut y = (p.y - self.origin.y) * self.scale;
        let mut z = 0.0;

        let (sy, cy) = ry.sin_cos();
        (x, z) = (x * cy + z * sy, -x * sy + z * cy);

        let (sx, cx) = rx.sin_cos();
        (y, z) = (y * cx - z * sx, y * sx + z * cx);

        y += self.translate_y;
        z += self.translate_z;

        let ax = self.origin.x + x;
        let ay = self.origin.y + y;
        // Points at or behind the viewer are pinned just in front of it.
        let k = self.perspective / (self.perspective - z).max(1.0);
        Point::new(
            self.perspective_origin.x + (ax - self.perspective_origin.x) * k,
            self.perspective_origin.y + (ay - self.perspective_origin.y) * k,
        )
    }

    /// Affine that agrees with `project` at the origin and at the two half-extent axis points.
    pub fn to_affine(&self) -> Affine {
        let hw = (self.extent.width * 0.5).max(1.0);
        let hh = (self.extent.height * 0.5).max(1.0);
        let o = self.origin;

        let po = self.project(o);
        let px = self.project(Point::new(o.x + hw, o.y));
        let py = self.project(Point::new(o.x, o.y - hh));

        let ux = (px - po) / hw;
        let uy = (py - po) / -hh;

        let (a, b, c, d) = (ux.x, ux.y, uy.x, uy.y);
        let e = po.x - a * o.x - c * o.y;
        let f = po.y - b * o.x - d * o.y;
        Affine::new([a, b, c, d, e, f])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/projection.rs"]
mod tests;
