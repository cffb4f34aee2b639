use crate::{
    animation::{
        ease::Ease,
        interpolate::{InterpolateOpts, interpolate, interpolate_clamped},
        spring::{SpringConfig, spring},
    },
    composition::{
        context::FrameCtx,
        registry::{Composition, parse_props},
    },
    foundation::{
        core::{Affine, FrameIndex, Point, Rect, Rgba8, VideoConfig},
        error::ReelResult,
        math::clamp,
    },
    scene::{
        node::{
            AssetRef, Frame, Group, ImageNode, Node, ObjectFit, RectNode, TextAnchor, TextStyle,
            VideoNode,
        },
        paint::Shadow,
    },
    scenes::OUTFIT_FAMILY,
    widgets::{about, baseline},
};

/// Spring that pops the button back after the press.
pub const RELEASE_SPRING: SpringConfig = SpringConfig::new(12.0, 200.0, 0.7);

const FALLBACK_BACKGROUND: Rgba8 = Rgba8::rgb(0x0b, 0x0b, 0x0b);
const BOX_W: f64 = 860.0;
const BOX_H: f64 = 140.0;
const BOX_BOTTOM: f64 = 70.0;
const PADDING_X: f64 = 28.0;
const ITEM_GAP: f64 = 24.0;
const AVATAR: f64 = 96.0;
const AVATAR_BORDER: f64 = 4.0;
const NAME_SIZE: f64 = 38.0;
const SUBS_SIZE: f64 = 20.0;
const BUTTON_W: f64 = 184.0;
const BUTTON_H: f64 = 44.0;

/// Props of [`YouTubeLowerThird`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LowerThirdProps {
    pub name: String,
    pub subscriber_count: String,
    pub avatar_url: String,
    /// Looping muted video behind the overlay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_video_url: Option<String>,
}

impl Default for LowerThirdProps {
    fn default() -> Self {
        Self {
            name: "Remotion".to_owned(),
            subscriber_count: "24.1K subscribers".to_owned(),
            avatar_url: "brand/remotion-logo.png".to_owned(),
            background_video_url: None,
        }
    }
}

impl LowerThirdProps {
    /// Background video, if one was given; only the empty string counts as absent.
    pub fn background_video(&self) -> Option<&str> {
        self.background_video_url
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}

/// Timing of the overlay at one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LowerThirdState {
    pub enter: f64,
    pub exit: f64,
    pub opacity: f64,
    pub translate_y: f64,
    pub press_start: f64,
    pub release_start: f64,
    pub button_scale: f64,
    pub subscribed: bool,
}

impl LowerThirdState {
    pub fn at(ctx: &FrameCtx) -> Self {
        let frame = ctx.frame;
        let fade = ctx.round_secs(0.7);
        let enter = interpolate(
            frame,
            [0.0, fade],
            [0.0, 1.0],
            InterpolateOpts::clamped().with_easing(Ease::OutCubic),
        );
        let out_start = ctx.duration() - fade - ctx.round_secs(0.2);
        let exit = interpolate(
            frame,
            [out_start, out_start + fade],
            [1.0, 0.0],
            InterpolateOpts::clamped().with_easing(Ease::InCubic),
        );

        let press_start = ctx.round_secs(1.6);
        let release_start = press_start + ctx.round_secs(0.22);
        let press = interpolate(
            frame,
            [press_start, release_start],
            [0.0, 1.0],
            InterpolateOpts::clamped().with_easing(Ease::OutQuad),
        );
        let release = spring(frame - release_start, ctx.fps(), RELEASE_SPRING);
        let scale = if frame < release_start {
            interpolate_clamped(press, [0.0, 1.0], [1.0, 0.92])
        } else {
            interpolate_clamped(release, [0.0, 1.0], [0.92, 1.0])
        };

        Self {
            enter,
            exit,
            opacity: enter * exit,
            translate_y: interpolate_clamped(enter, [0.0, 1.0], [90.0, 0.0]),
            press_start,
            release_start,
            button_scale: clamp(scale, 0.9, 1.05),
            subscribed: frame >= release_start,
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.subscribed { "Subscribed" } else { "Subscribe" }
    }
}

/// Channel card with an animated subscribe button over a video or a dark backdrop.
#[derive(Clone, Debug, PartialEq)]
pub struct YouTubeLowerThird {
    config: VideoConfig,
    props: LowerThirdProps,
}

impl YouTubeLowerThird {
    pub const ID: &'static str = "YouTubeLowerThird";

    pub fn new(config: VideoConfig, props: LowerThirdProps) -> Self {
        Self { config, props }
    }

    pub fn props(&self) -> &LowerThirdProps {
        &self.props
    }

    pub(crate) fn factory(
        config: VideoConfig,
        props: serde_json::Value,
    ) -> ReelResult<Box<dyn Composition>> {
        let props = parse_props::<LowerThirdProps>(Self::ID, props)?;
        Ok(Box::new(Self::new(config, props)))
    }

    fn avatar(&self) -> Node {
        let outer = AVATAR + AVATAR_BORDER * 2.0;
        let top = (BOX_H - outer) * 0.5;
        let ring = Rect::from_origin_size((PADDING_X, top), (outer, outer));
        let photo = ring.inset(-AVATAR_BORDER);
        Node::group(vec![
            Node::Rect(RectNode {
                rect: ring,
                radius: outer * 0.5,
                fill: Some(Rgba8::WHITE.into()),
                stroke: None,
                shadow: Some(Shadow::new(0.0, 8.0, 16.0, Rgba8::rgba(0, 0, 0, 0.18))),
            }),
            Node::Group(
                Group::new(vec![Node::Image(ImageNode {
                    asset: AssetRef::new(self.props.avatar_url.as_str()),
                    rect: photo,
                    fit: ObjectFit::Cover,
                    shadow: None,
                })])
                .clip(photo, AVATAR * 0.5),
            ),
        ])
    }

    fn labels(&self) -> Node {
        let x = PADDING_X + AVATAR + AVATAR_BORDER * 2.0 + ITEM_GAP;
        let name_lh = NAME_SIZE * 1.2;
        let subs_lh = SUBS_SIZE * 1.2;
        let column_h = name_lh + 6.0 + subs_lh;
        let top = (BOX_H - column_h) * 0.5;
        Node::group(vec![
            Node::text(
                self.props.name.as_str(),
                Point::new(x, baseline(top, name_lh, NAME_SIZE)),
                TextStyle::new(OUTFIT_FAMILY, NAME_SIZE, Rgba8::rgb(0x11, 0x11, 0x11))
                    .weight(700)
                    .letter_spacing(0.2),
            ),
            Node::text(
                self.props.subscriber_count.as_str(),
                Point::new(x, baseline(top + name_lh + 6.0, subs_lh, SUBS_SIZE)),
                TextStyle::new(OUTFIT_FAMILY, SUBS_SIZE, Rgba8::rgb(0x5b, 0x5b, 0x5b)).weight(500),
            ),
        ])
    }

    fn button(s: &LowerThirdState) -> Node {
        let rect = Rect::from_origin_size(
            (BOX_W - PADDING_X - BUTTON_W, (BOX_H - BUTTON_H) * 0.5),
            (BUTTON_W, BUTTON_H),
        );
        let center = rect.center();
        Node::group(vec![
            Node::Rect(RectNode {
                rect,
                radius: BUTTON_H * 0.5,
                fill: Some(Rgba8::rgb(0x0f, 0x0f, 0x0f).into()),
                stroke: None,
                shadow: Some(Shadow::new(0.0, 8.0, 18.0, Rgba8::rgba(0, 0, 0, 0.2))),
            }),
            Node::text(
                s.button_label(),
                Point::new(center.x, baseline(rect.y0, BUTTON_H, 16.0)),
                TextStyle::new(OUTFIT_FAMILY, 16.0, Rgba8::WHITE)
                    .weight(600)
                    .letter_spacing(0.2)
                    .anchor(TextAnchor::Middle),
            ),
        ])
        .transformed(about(center, Affine::scale(s.button_scale)))
    }

    pub fn layer(&self, ctx: &FrameCtx) -> Node {
        let s = LowerThirdState::at(ctx);
        let (w, h) = (ctx.width(), ctx.height());
        let mut children = Vec::with_capacity(2);

        if let Some(url) = self.props.background_video() {
            children.push(Node::Video(VideoNode {
                asset: AssetRef::new(url),
                rect: Rect::new(0.0, 0.0, w, h),
                fit: ObjectFit::Cover,
                looped: true,
                muted: true,
            }));
        }

        let card = Group::new(vec![
            Node::Rect(RectNode {
                rect: Rect::new(0.0, 0.0, BOX_W, BOX_H),
                radius: 28.0,
                fill: Some(Rgba8::WHITE.into()),
                stroke: None,
                shadow: Some(Shadow::new(0.0, 18.0, 40.0, Rgba8::rgba(0, 0, 0, 0.18))),
            }),
            self.avatar(),
            self.labels(),
            Self::button(&s),
        ])
        .transform(Affine::translate((
            (w - BOX_W) * 0.5,
            h - BOX_BOTTOM - BOX_H + s.translate_y,
        )))
        .opacity(s.opacity);
        children.push(Node::Group(card));

        Node::group(children)
    }
}

impl Composition for YouTubeLowerThird {
    fn id(&self) -> &str {
        Self::ID
    }

    fn config(&self) -> VideoConfig {
        self.config
    }

    #[tracing::instrument(skip(self), fields(id = Self::ID))]
    fn render(&self, frame: FrameIndex) -> Frame {
        let ctx = FrameCtx::root(frame, self.config);
        let background = match self.props.background_video() {
            Some(_) => None,
            None => Some(FALLBACK_BACKGROUND),
        };
        Frame {
            config: self.config,
            frame,
            background,
            root: self.layer(&ctx),
            audio: Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/lower_third.rs"]
mod tests;
