use crate::{
    foundation::core::{Affine, BezPath, Point, Rect, Rgba8},
    scene::{
        node::{Frame, Node, ObjectFit, TextAnchor},
        paint::{GradientStop, LineCap, Paint, Shadow, Stroke},
    },
};
use kurbo::PathEl;
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x5f3a_91c2_7d04_e86b;

/// Stable per-frame fingerprint used by static-frame elision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameFingerprint {
    pub hi: u64,
    pub lo: u64,
}

/// Hash everything that affects the pixels of `frame`.
///
/// The frame index is not hashed, so identical visuals at different times share a
/// fingerprint. Frames containing video are the exception: their pixels move with time.
pub fn fingerprint(frame: &Frame) -> FrameFingerprint {
    let mut h = StableHasher::new();
    if frame.video_count() > 0 {
        h.write_u64(frame.frame.0);
    }
    h.write_u32(frame.config.width);
    h.write_u32(frame.config.height);
    match frame.background {
        Some(c) => {
            h.write_u8(1);
            h.write_color(c);
        }
        None => h.write_u8(0),
    }
    write_node(&mut h, &frame.root);
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u16(&mut self, v: u16) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        // -0.0 and 0.0 paint the same.
        let v = if v == 0.0 { 0.0 } else { v };
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn write_color(&mut self, c: Rgba8) {
        self.write_bytes(&[c.r, c.g, c.b, c.a]);
    }

    fn write_point(&mut self, p: Point) {
        self.write_f64(p.x);
        self.write_f64(p.y);
    }

    fn write_rect(&mut self, r: Rect) {
        self.write_f64(r.x0);
        self.write_f64(r.y0);
        self.write_f64(r.x1);
        self.write_f64(r.y1);
    }

    fn write_affine(&mut self, a: Affine) {
        for c in a.as_coeffs() {
            self.write_f64(c);
        }
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_node(h: &mut StableHasher, node: &Node) {
    match node {
        Node::Group(g) => {
            h.write_u8(0);
            // Invisible subtrees contribute nothing to the pixels.
            if g.opacity <= 0.0 {
                h.write_u8(0);
                return;
            }
            h.write_u8(1);
            h.write_affine(g.effective_transform());
            h.write_f64(g.opacity);
            match g.clip {
                Some(c) => {
                    h.write_u8(1);
                    h.write_rect(c.rect);
                    h.write_f64(c.radius);
                }
                None => h.write_u8(0),
            }
            h.write_u64(g.children.len() as u64);
            for child in &g.children {
                write_node(h, child);
            }
        }
        Node::Rect(r) => {
            h.write_u8(1);
            h.write_rect(r.rect);
            h.write_f64(r.radius);
            write_opt_paint(h, r.fill.as_ref());
            write_opt_stroke(h, r.stroke.as_ref());
            write_opt_shadow(h, r.shadow.as_ref());
        }
        Node::Text(t) => {
            h.write_u8(2);
            h.write_str(&t.text);
            h.write_point(t.position);
            h.write_str(&t.style.family);
            h.write_f64(t.style.size);
            h.write_u16(t.style.weight);
            h.write_color(t.style.color);
            h.write_f64(t.style.letter_spacing);
            h.write_u8(match t.style.anchor {
                TextAnchor::Start => 0,
                TextAnchor::Middle => 1,
                TextAnchor::End => 2,
            });
        }
        Node::Image(i) => {
            h.write_u8(3);
            h.write_str(i.asset.as_str());
            h.write_rect(i.rect);
            write_fit(h, i.fit);
            write_opt_shadow(h, i.shadow.as_ref());
        }
        Node::Video(v) => {
            h.write_u8(4);
            h.write_str(v.asset.as_str());
            h.write_rect(v.rect);
            write_fit(h, v.fit);
            h.write_bool(v.looped);
            h.write_bool(v.muted);
        }
        Node::Path(p) => {
            h.write_u8(5);
            write_path(h, &p.path);
            write_opt_paint(h, p.fill.as_ref());
            write_opt_stroke(h, p.stroke.as_ref());
            match p.path_length {
                Some(l) => {
                    h.write_u8(1);
                    h.write_f64(l);
                }
                None => h.write_u8(0),
            }
            write_opt_shadow(h, p.shadow.as_ref());
        }
        Node::Line(l) => {
            h.write_u8(6);
            h.write_point(l.from);
            h.write_point(l.to);
            write_stroke(h, &l.stroke);
        }
    }
}

fn write_fit(h: &mut StableHasher, fit: ObjectFit) {
    h.write_u8(match fit {
        ObjectFit::Fill => 0,
        ObjectFit::Contain => 1,
        ObjectFit::Cover => 2,
    });
}

fn write_path(h: &mut StableHasher, path: &BezPath) {
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                h.write_u8(0);
                h.write_point(p);
            }
            PathEl::LineTo(p) => {
                h.write_u8(1);
                h.write_point(p);
            }
            PathEl::QuadTo(p1, p2) => {
                h.write_u8(2);
                h.write_point(p1);
                h.write_point(p2);
            }
            PathEl::CurveTo(p1, p2, p3) => {
                h.write_u8(3);
                h.write_point(p1);
                h.write_point(p2);
                h.write_point(p3);
            }
            PathEl::ClosePath => h.write_u8(4),
        }
    }
}

fn write_stops(h: &mut StableHasher, stops: &[GradientStop]) {
    h.write_u64(stops.len() as u64);
    for s in stops {
        h.write_f64(s.offset);
        h.write_color(s.color);
    }
}

fn write_paint(h: &mut StableHasher, paint: &Paint) {
    match paint {
        Paint::Solid(c) => {
            h.write_u8(0);
            h.write_color(*c);
        }
        Paint::LinearGradient(g) => {
            h.write_u8(1);
            h.write_point(g.start);
            h.write_point(g.end);
            write_stops(h, &g.stops);
        }
        Paint::RadialGradient(g) => {
            h.write_u8(2);
            h.write_point(g.center);
            h.write_f64(g.radius);
            write_stops(h, &g.stops);
        }
    }
}

fn write_opt_paint(h: &mut StableHasher, paint: Option<&Paint>) {
    match paint {
        Some(p) => {
            h.write_u8(1);
            write_paint(h, p);
        }
        None => h.write_u8(0),
    }
}

fn write_stroke(h: &mut StableHasher, s: &Stroke) {
    write_paint(h, &s.paint);
    h.write_f64(s.width);
    h.write_u8(match s.cap {
        LineCap::Butt => 0,
        LineCap::Round => 1,
        LineCap::Square => 2,
    });
    match &s.dash {
        Some(d) => {
            h.write_u8(1);
            h.write_u64(d.array.len() as u64);
            for v in &d.array {
                h.write_f64(*v);
            }
            h.write_f64(d.offset);
        }
        None => h.write_u8(0),
    }
}

fn write_opt_stroke(h: &mut StableHasher, s: Option<&Stroke>) {
    match s {
        Some(s) => {
            h.write_u8(1);
            write_stroke(h, s);
        }
        None => h.write_u8(0),
    }
}

fn write_opt_shadow(h: &mut StableHasher, s: Option<&Shadow>) {
    match s {
        Some(s) => {
            h.write_u8(1);
            h.write_f64(s.dx);
            h.write_f64(s.dy);
            h.write_f64(s.blur);
            h.write_color(s.color);
        }
        None => h.write_u8(0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/fingerprint.rs"]
mod tests;
