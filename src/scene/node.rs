use crate::{
    foundation::core::{Affine, BezPath, FrameIndex, Point, Rect, Rgba8, VideoConfig},
    scene::{
        paint::{Paint, Shadow, Stroke},
        projection::Projection,
    },
};

/// Logical static-asset path (for example `brand/remotion-logo.png`).
///
/// Resolved by the host against its asset root; never loaded by composition code.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AssetRef(pub String);

impl AssetRef {
    /// Wrap a logical path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Logical path as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Audio a host should mix under the frames of a composition.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AudioRef {
    /// Audio file.
    pub asset: AssetRef,
    /// Linear volume in `[0, 1]`.
    pub volume: f64,
}

/// How replaced content fills its box (CSS `object-fit`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectFit {
    /// Stretch to the box.
    Fill,
    /// Fit inside, preserving aspect ratio.
    #[default]
    Contain,
    /// Cover the box, preserving aspect ratio.
    Cover,
}

/// Horizontal text alignment relative to `TextNode::position`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Font and color of a text run.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    /// CSS font-family list.
    pub family: String,
    /// Font size in pixels.
    pub size: f64,
    /// CSS font weight.
    pub weight: u16,
    /// Fill color.
    pub color: Rgba8,
    /// Extra spacing between glyphs in pixels.
    pub letter_spacing: f64,
    /// Alignment.
    pub anchor: TextAnchor,
}

/// Monospace stack of the terminal widgets.
pub const MONO_FAMILY: &str = "SF Mono, Menlo, Monaco, Consolas, monospace";
/// Sans-serif stack used for headings and labels.
pub const SANS_FAMILY: &str = "Inter, Helvetica Neue, Arial, sans-serif";

impl TextStyle {
    /// Regular-weight style.
    pub fn new(family: &str, size: f64, color: Rgba8) -> Self {
        Self {
            family: family.to_owned(),
            size,
            weight: 400,
            color,
            letter_spacing: 0.0,
            anchor: TextAnchor::Start,
        }
    }

    /// Monospace style.
    pub fn mono(size: f64, color: Rgba8) -> Self {
        Self::new(MONO_FAMILY, size, color)
    }

    /// Sans-serif style.
    pub fn sans(size: f64, color: Rgba8) -> Self {
        Self::new(SANS_FAMILY, size, color)
    }

    /// Builder: font weight.
    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    /// Builder: letter spacing.
    pub fn letter_spacing(mut self, spacing: f64) -> Self {
        self.letter_spacing = spacing;
        self
    }

    /// Builder: alignment.
    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Advance width estimate used for layout (cursor placement, centering).
    ///
    /// Monospace fonts advance `0.6em` per char; proportional ones are approximated at
    /// `0.55em`.
    pub fn estimate_width(&self, text: &str) -> f64 {
        let per_char = if self.family == MONO_FAMILY { 0.6 } else { 0.55 };
        let n = text.chars().count() as f64;
        n * (self.size * per_char + self.letter_spacing)
    }
}

/// Rounded-rect clip applied to a group's children, in the group's local space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClipShape {
    /// Clip bounds.
    pub rect: Rect,
    /// Corner radius.
    pub radius: f64,
}

/// Container with its own transform, opacity, clip and optional 3D projection.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Group {
    /// 2D transform applied to children.
    pub transform: Affine,
    /// Group opacity in `[0, 1]`.
    pub opacity: f64,
    /// Optional clip in local space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip: Option<ClipShape>,
    /// Optional perspective transform, applied after `transform`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection: Option<Projection>,
    /// Child nodes, painted in order.
    pub children: Vec<Node>,
}

impl Group {
    /// Identity group.
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            transform: Affine::IDENTITY,
            opacity: 1.0,
            clip: None,
            projection: None,
            children,
        }
    }

    /// Builder: 2D transform.
    pub fn transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Builder: opacity, clamped to `[0, 1]`.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Builder: clip.
    pub fn clip(mut self, rect: Rect, radius: f64) -> Self {
        self.clip = Some(ClipShape { rect, radius });
        self
    }

    /// Builder: 3D projection.
    pub fn projection(mut self, projection: Projection) -> Self {
        self.projection = Some(projection);
        self
    }

    /// Effective 2D transform: projection (if any) composed over `transform`.
    pub fn effective_transform(&self) -> Affine {
        match &self.projection {
            Some(p) => p.to_affine() * self.transform,
            None => self.transform,
        }
    }
}

/// Filled and/or stroked rounded rectangle.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RectNode {
    /// Bounds.
    pub rect: Rect,
    /// Corner radius.
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

/// Single-line text run anchored at its baseline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextNode {
    pub text: String,
    /// Baseline anchor point.
    pub position: Point,
    pub style: TextStyle,
}

/// Raster or vector image asset.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageNode {
    pub asset: AssetRef,
    pub rect: Rect,
    pub fit: ObjectFit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

/// Video asset placed in the frame. Hosts sample it at the composition frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VideoNode {
    pub asset: AssetRef,
    pub rect: Rect,
    pub fit: ObjectFit,
    pub looped: bool,
    pub muted: bool,
}

/// Arbitrary path.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathNode {
    pub path: BezPath,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
    /// Author-declared total length; dash values are expressed in these units (SVG
    /// `pathLength`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

/// Straight stroked segment.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineNode {
    pub from: Point,
    pub to: Point,
    pub stroke: Stroke,
}

/// One node of the visual tree a composition produces per frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Group(Group),
    Rect(RectNode),
    Text(TextNode),
    Image(ImageNode),
    Video(VideoNode),
    Path(PathNode),
    Line(LineNode),
}

impl Node {
    /// Empty group; renders nothing.
    pub fn empty() -> Self {
        Self::Group(Group::new(Vec::new()))
    }

    /// Plain group of `children`.
    pub fn group(children: Vec<Node>) -> Self {
        Self::Group(Group::new(children))
    }

    /// Filled rounded rectangle.
    pub fn rect(rect: Rect, radius: f64, fill: impl Into<Paint>) -> Self {
        Self::Rect(RectNode {
            rect,
            radius,
            fill: Some(fill.into()),
            stroke: None,
            shadow: None,
        })
    }

    /// Text run at a baseline point.
    pub fn text(text: impl Into<String>, position: Point, style: TextStyle) -> Self {
        Self::Text(TextNode {
            text: text.into(),
            position,
            style,
        })
    }

    /// Image asset in `rect`.
    pub fn image(asset: impl Into<String>, rect: Rect, fit: ObjectFit) -> Self {
        Self::Image(ImageNode {
            asset: AssetRef::new(asset),
            rect,
            fit,
            shadow: None,
        })
    }

    /// Stroked straight line.
    pub fn line(from: Point, to: Point, stroke: Stroke) -> Self {
        Self::Line(LineNode { from, to, stroke })
    }

    /// Wrap in a group with `transform`; identity transforms are returned unchanged.
    pub fn transformed(self, transform: Affine) -> Self {
        if transform == Affine::IDENTITY {
            return self;
        }
        Self::Group(Group::new(vec![self]).transform(transform))
    }

    /// Wrap in a group with `opacity`; fully opaque nodes are returned unchanged.
    pub fn faded(self, opacity: f64) -> Self {
        if opacity >= 1.0 {
            return self;
        }
        Self::Group(Group::new(vec![self]).opacity(opacity))
    }

    /// Depth-first visit of this node and every descendant.
    pub fn visit(&self, f: &mut impl FnMut(&Node)) {
        f(self);
        if let Self::Group(g) = self {
            for child in &g.children {
                child.visit(f);
            }
        }
    }

    /// Every text run in paint order.
    pub fn texts(&self) -> Vec<&str> {
        fn walk<'a>(node: &'a Node, out: &mut Vec<&'a str>) {
            match node {
                Node::Text(t) => out.push(&t.text),
                Node::Group(g) => g.children.iter().for_each(|c| walk(c, out)),
                _ => {}
            }
        }
        let mut out = Vec::new();
        walk(self, &mut out);
        out
    }

    /// Every asset (image or video) referenced by this subtree.
    pub fn assets(&self) -> Vec<AssetRef> {
        let mut out = Vec::new();
        self.visit(&mut |n| match n {
            Node::Image(i) => out.push(i.asset.clone()),
            Node::Video(v) => out.push(v.asset.clone()),
            _ => {}
        });
        out
    }
}

/// Fully-determined visual state of one frame of a composition.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    pub config: VideoConfig,
    pub frame: FrameIndex,
    /// Solid backdrop under `root`; `None` is transparent.
    pub background: Option<Rgba8>,
    pub root: Node,
    /// Audio tracks active for the composition.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audio: Vec<AudioRef>,
}

impl Frame {
    /// Number of video nodes in the tree.
    pub fn video_count(&self) -> usize {
        let mut n = 0;
        self.root.visit(&mut |node| {
            if matches!(node, Node::Video(_)) {
                n += 1;
            }
        });
        n
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;
