use crate::{
    foundation::core::{Affine, Rect, Rgba8},
    scene::{
        node::{ClipShape, Frame, Node, ObjectFit, PathNode, TextAnchor},
        paint::{GradientStop, LineCap, Paint, Shadow, Stroke},
    },
};
use kurbo::ParamCurveArclen;

const ARCLEN_ACCURACY: f64 = 1e-3;

impl Frame {
    /// Standalone SVG document of this frame.
    ///
    /// Video nodes have no SVG equivalent and are left out.
    pub fn to_svg(&self) -> String {
        let mut w = SvgWriter::default();
        if let Some(bg) = self.background {
            w.body.push_str(&format!(
                r#"<rect x="0" y="0" width="{}" height="{}"{}/>"#,
                self.config.width,
                self.config.height,
                solid_attrs("fill", bg)
            ));
        }
        w.node(&self.root);

        let mut out = String::with_capacity(w.defs.len() + w.body.len() + 256);
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.config.width,
            h = self.config.height,
        ));
        if !w.defs.is_empty() {
            out.push_str("<defs>");
            out.push_str(&w.defs);
            out.push_str("</defs>");
        }
        out.push_str(&w.body);
        out.push_str("</svg>");
        out
    }
}

#[derive(Default)]
struct SvgWriter {
    defs: String,
    body: String,
    next_id: u32,
}

impl SvgWriter {
    fn fresh_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}{}", self.next_id)
    }

    fn node(&mut self, node: &Node) {
        match node {
            Node::Group(g) => {
                if g.opacity <= 0.0 || g.children.is_empty() {
                    return;
                }
                let mut attrs = transform_attr(g.effective_transform());
                if g.opacity < 1.0 {
                    attrs.push_str(&format!(r#" opacity="{}""#, num(g.opacity)));
                }
                if let Some(clip) = g.clip {
                    let id = self.clip(clip);
                    attrs.push_str(&format!(r#" clip-path="url(#{id})""#));
                }
                self.body.push_str(&format!("<g{attrs}>"));
                for child in &g.children {
                    self.node(child);
                }
                self.body.push_str("</g>");
            }
            Node::Rect(r) => {
                let rect = r.rect.abs();
                let mut attrs = rect_geometry(rect);
                if r.radius > 0.0 {
                    attrs.push_str(&format!(r#" rx="{}""#, num(r.radius)));
                }
                attrs.push_str(&self.fill_attrs(r.fill.as_ref()));
                attrs.push_str(&self.stroke_attrs(r.stroke.as_ref(), 1.0));
                attrs.push_str(&self.shadow_attr(r.shadow.as_ref()));
                self.body.push_str(&format!("<rect{attrs}/>"));
            }
            Node::Text(t) => {
                if t.text.is_empty() {
                    return;
                }
                let s = &t.style;
                let mut attrs = format!(
                    r#" x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}""#,
                    num(t.position.x),
                    num(t.position.y),
                    escape(&s.family),
                    num(s.size),
                    s.weight
                );
                attrs.push_str(&solid_attrs("fill", s.color));
                if s.letter_spacing != 0.0 {
                    attrs.push_str(&format!(r#" letter-spacing="{}""#, num(s.letter_spacing)));
                }
                match s.anchor {
                    TextAnchor::Start => {}
                    TextAnchor::Middle => attrs.push_str(r#" text-anchor="middle""#),
                    TextAnchor::End => attrs.push_str(r#" text-anchor="end""#),
                }
                self.body.push_str(&format!(
                    r#"<text{attrs} xml:space="preserve">{}</text>"#,
                    escape(&t.text)
                ));
            }
            Node::Image(i) => {
                let mut attrs = rect_geometry(i.rect.abs());
                attrs.push_str(&format!(
                    r#" preserveAspectRatio="{}""#,
                    aspect_ratio(i.fit)
                ));
                attrs.push_str(&self.shadow_attr(i.shadow.as_ref()));
                self.body.push_str(&format!(
                    r#"<image{attrs} xlink:href="{}"/>"#,
                    escape(i.asset.as_str())
                ));
            }
            Node::Video(v) => {
                tracing::debug!(asset = v.asset.as_str(), "video node left out of svg export");
            }
            Node::Path(p) => {
                let scale = dash_scale(p);
                let mut attrs = format!(r#" d="{}""#, p.path.to_svg());
                attrs.push_str(&self.fill_attrs(p.fill.as_ref()));
                attrs.push_str(&self.stroke_attrs(p.stroke.as_ref(), scale));
                attrs.push_str(&self.shadow_attr(p.shadow.as_ref()));
                self.body.push_str(&format!("<path{attrs}/>"));
            }
            Node::Line(l) => {
                let mut attrs = format!(
                    r#" x1="{}" y1="{}" x2="{}" y2="{}""#,
                    num(l.from.x),
                    num(l.from.y),
                    num(l.to.x),
                    num(l.to.y)
                );
                attrs.push_str(&self.stroke_attrs(Some(&l.stroke), 1.0));
                self.body.push_str(&format!("<line{attrs}/>"));
            }
        }
    }

    fn clip(&mut self, clip: ClipShape) -> String {
        let id = self.fresh_id("clip");
        let mut attrs = rect_geometry(clip.rect.abs());
        if clip.radius > 0.0 {
            attrs.push_str(&format!(r#" rx="{}""#, num(clip.radius)));
        }
        self.defs
            .push_str(&format!(r#"<clipPath id="{id}"><rect{attrs}/></clipPath>"#));
        id
    }

    fn paint_attrs(&mut self, name: &str, paint: &Paint) -> String {
        match paint {
            Paint::Solid(c) => solid_attrs(name, *c),
            Paint::LinearGradient(g) => {
                let id = self.fresh_id("grad");
                self.defs.push_str(&format!(
                    r#"<linearGradient id="{id}" x1="{}" y1="{}" x2="{}" y2="{}">{}</linearGradient>"#,
                    num(g.start.x),
                    num(g.start.y),
                    num(g.end.x),
                    num(g.end.y),
                    stops(&g.stops)
                ));
                format!(r#" {name}="url(#{id})""#)
            }
            Paint::RadialGradient(g) => {
                let id = self.fresh_id("grad");
                self.defs.push_str(&format!(
                    r#"<radialGradient id="{id}" cx="{}" cy="{}" r="{}">{}</radialGradient>"#,
                    num(g.center.x),
                    num(g.center.y),
                    num(g.radius),
                    stops(&g.stops)
                ));
                format!(r#" {name}="url(#{id})""#)
            }
        }
    }

    fn fill_attrs(&mut self, fill: Option<&Paint>) -> String {
        match fill {
            Some(p) => self.paint_attrs("fill", p),
            None => r#" fill="none""#.to_owned(),
        }
    }

    fn stroke_attrs(&mut self, stroke: Option<&Stroke>, dash_scale: f64) -> String {
        let Some(s) = stroke else {
            return String::new();
        };
        let mut attrs = self.paint_attrs("stroke", &s.paint);
        attrs.push_str(&format!(r#" stroke-width="{}""#, num(s.width)));
        match s.cap {
            LineCap::Butt => {}
            LineCap::Round => attrs.push_str(r#" stroke-linecap="round""#),
            LineCap::Square => attrs.push_str(r#" stroke-linecap="square""#),
        }
        if let Some(d) = &s.dash {
            let array: Vec<String> = d.array.iter().map(|v| num(v * dash_scale)).collect();
            attrs.push_str(&format!(
                r#" stroke-dasharray="{}" stroke-dashoffset="{}""#,
                array.join(" "),
                num(d.offset * dash_scale)
            ));
        }
        attrs
    }

    fn shadow_attr(&mut self, shadow: Option<&Shadow>) -> String {
        let Some(s) = shadow else {
            return String::new();
        };
        let id = self.fresh_id("shadow");
        self.defs.push_str(&format!(
            r#"<filter id="{id}" x="-50%" y="-50%" width="200%" height="200%"><feDropShadow dx="{}" dy="{}" stdDeviation="{}" flood-color="{}" flood-opacity="{}"/></filter>"#,
            num(s.dx),
            num(s.dy),
            num(s.blur * 0.5),
            s.color.svg_color(),
            num(s.color.svg_opacity())
        ));
        format!(r#" filter="url(#{id})""#)
    }
}

/// Ratio of true arc length to the declared `path_length`.
fn dash_scale(p: &PathNode) -> f64 {
    match p.path_length {
        Some(declared) if declared > 0.0 => {
            let actual: f64 = p.path.segments().map(|s| s.arclen(ARCLEN_ACCURACY)).sum();
            actual / declared
        }
        _ => 1.0,
    }
}

fn solid_attrs(name: &str, c: Rgba8) -> String {
    let mut s = format!(r#" {name}="{}""#, c.svg_color());
    if c.a < 255 {
        s.push_str(&format!(r#" {name}-opacity="{}""#, num(c.svg_opacity())));
    }
    s
}

fn stops(stops: &[GradientStop]) -> String {
    stops
        .iter()
        .map(|s| {
            format!(
                r#"<stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
                num(s.offset.clamp(0.0, 1.0)),
                s.color.svg_color(),
                num(s.color.svg_opacity())
            )
        })
        .collect()
}

fn rect_geometry(r: Rect) -> String {
    format!(
        r#" x="{}" y="{}" width="{}" height="{}""#,
        num(r.x0),
        num(r.y0),
        num(r.width()),
        num(r.height())
    )
}

fn transform_attr(a: Affine) -> String {
    if a == Affine::IDENTITY {
        return String::new();
    }
    let c = a.as_coeffs();
    format!(
        r#" transform="matrix({} {} {} {} {} {})""#,
        num(c[0]),
        num(c[1]),
        num(c[2]),
        num(c[3]),
        num(c[4]),
        num(c[5])
    )
}

fn aspect_ratio(fit: ObjectFit) -> &'static str {
    match fit {
        ObjectFit::Fill => "none",
        ObjectFit::Contain => "xMidYMid meet",
        ObjectFit::Cover => "xMidYMid slice",
    }
}

/// Compact decimal: at most four fractional digits, no trailing zeros, no `-0`.
pub(crate) fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scene/svg.rs"]
mod tests;
