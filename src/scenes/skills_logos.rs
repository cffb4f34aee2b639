use crate::{
    composition::{context::FrameCtx, registry::Composition},
    foundation::{
        core::{Affine, BezPath, FrameIndex, Point, Rect, Rgba8, VideoConfig},
        error::ReelResult,
    },
    scene::node::{Frame, Group, Node, ObjectFit, PathNode, TextStyle},
    widgets::baseline,
};

pub const REMOTION_LOGO: &str = "brand/remotion-logo.png";
pub const CLAUDE_LOGO: &str = "brand/claude-logo.svg";

const BACKGROUND: Rgba8 = Rgba8::rgb(0xf5, 0xf6, 0xf8);
const ROW_GAP: f64 = 32.0;
const PARTNER_GAP: f64 = 3.0;
const REMOTION_SIZE: f64 = 140.0;
const CLAUDE_SIZE: f64 = 90.0;
const PLUS_SIZE: f64 = 72.0;
const MARK_VIEW: Rect = Rect::new(0.0, 0.0, 32.0, 40.0);
const MARK_SIZE: (f64, f64) = (72.0, 90.0);

/// The OpenCode mark: a dark square inside a light frame, in a 32x40 view box.
fn opencode_mark() -> Node {
    let mut inner = BezPath::new();
    inner.move_to((24.0, 32.0));
    inner.line_to((8.0, 32.0));
    inner.line_to((8.0, 16.0));
    inner.line_to((24.0, 16.0));
    inner.close_path();

    let mut frame = BezPath::new();
    frame.move_to((24.0, 8.0));
    frame.line_to((8.0, 8.0));
    frame.line_to((8.0, 32.0));
    frame.line_to((24.0, 32.0));
    frame.close_path();
    frame.move_to((32.0, 40.0));
    frame.line_to((0.0, 40.0));
    frame.line_to((0.0, 0.0));
    frame.line_to((32.0, 0.0));
    frame.close_path();

    let fill = |path: BezPath, color: Rgba8| {
        Node::Path(PathNode {
            path,
            fill: Some(color.into()),
            stroke: None,
            path_length: None,
            shadow: None,
        })
    };
    let scale = Affine::scale_non_uniform(
        MARK_SIZE.0 / MARK_VIEW.width(),
        MARK_SIZE.1 / MARK_VIEW.height(),
    );
    Node::Group(
        Group::new(vec![
            fill(inner, Rgba8::rgb(0x4b, 0x46, 0x46)),
            fill(frame, Rgba8::rgb(0xf1, 0xec, 0xec)),
        ])
        .clip(MARK_VIEW, 0.0)
        .transform(scale),
    )
}

/// Remotion logo, a "+" and the partner logos in one centered row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillsLogos {
    config: VideoConfig,
}

impl SkillsLogos {
    pub const ID: &'static str = "SkillsLogos";

    pub fn new(config: VideoConfig) -> Self {
        Self { config }
    }

    pub(crate) fn factory(
        config: VideoConfig,
        props: serde_json::Value,
    ) -> ReelResult<Box<dyn Composition>> {
        super::expect_no_props(Self::ID, props)?;
        Ok(Box::new(Self::new(config)))
    }

    /// Full-canvas layer, background included so it can be nested.
    pub fn layer(ctx: &FrameCtx) -> Node {
        let (w, h) = (ctx.width(), ctx.height());
        let cy = h * 0.5;
        let plus_style = TextStyle::sans(PLUS_SIZE, Rgba8::rgb(0x6f, 0x75, 0x7c)).weight(600);
        let plus_w = plus_style.estimate_width("+");
        let row_w = REMOTION_SIZE
            + ROW_GAP
            + plus_w
            + ROW_GAP
            + CLAUDE_SIZE
            + PARTNER_GAP
            + MARK_SIZE.0;

        let mut x = (w - row_w) * 0.5;
        let remotion = Node::image(
            REMOTION_LOGO,
            Rect::from_origin_size((x, cy - REMOTION_SIZE * 0.5), (REMOTION_SIZE, REMOTION_SIZE)),
            ObjectFit::Contain,
        );
        x += REMOTION_SIZE + ROW_GAP;
        let plus = Node::text(
            "+",
            Point::new(x, baseline(cy - PLUS_SIZE * 0.5, PLUS_SIZE, PLUS_SIZE)),
            plus_style,
        );
        x += plus_w + ROW_GAP;
        let claude = Node::image(
            CLAUDE_LOGO,
            Rect::from_origin_size((x, cy - CLAUDE_SIZE * 0.5), (CLAUDE_SIZE, CLAUDE_SIZE)),
            ObjectFit::Contain,
        );
        x += CLAUDE_SIZE + PARTNER_GAP;
        let mark = opencode_mark().transformed(Affine::translate((x, cy - MARK_SIZE.1 * 0.5)));

        Node::group(vec![
            Node::rect(Rect::new(0.0, 0.0, w, h), 0.0, BACKGROUND),
            remotion,
            plus,
            claude,
            mark,
        ])
    }
}

impl Composition for SkillsLogos {
    fn id(&self) -> &str {
        Self::ID
    }

    fn config(&self) -> VideoConfig {
        self.config
    }

    fn render(&self, frame: FrameIndex) -> Frame {
        let ctx = FrameCtx::root(frame, self.config);
        Frame {
            config: self.config,
            frame,
            background: None,
            root: Self::layer(&ctx),
            audio: Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/skills_logos.rs"]
mod tests;
