use crate::{
    animation::{
        interpolate::{InterpolateOpts, interpolate, interpolate_clamped},
        spring::{SpringConfig, spring},
    },
    composition::{context::FrameCtx, registry::Composition, sequence::Sequence},
    foundation::{
        core::{FrameIndex, Point, Rgba8, VideoConfig},
        error::ReelResult,
        math::clamp,
    },
    scene::{
        node::{Frame, Group, Node},
        projection::Projection,
    },
    scenes::{skills_reveal::SkillsReveal, terminal_prompt::TerminalPrompt},
    widgets::terminal::{TERMINAL_WINDOW_SIZE, output_end_frame},
};

pub const ENTRANCE_SPRING: SpringConfig = SpringConfig::new(16.0, 180.0, 1.0);
pub const FLIP_SPRING: SpringConfig = SpringConfig::new(14.0, 160.0, 1.0);

const PERSPECTIVE: f64 = 1400.0;
const BASE_TILT_X: f64 = 20.0;

/// 3D pose of the terminal at one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerminalMasterState {
    /// Frame at which the terminal starts flipping away.
    pub flip_start: u64,
    pub entrance: f64,
    /// Clamped flip spring.
    pub flip: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub translate_y: f64,
    pub translate_z: f64,
    pub scale: f64,
    pub terminal_opacity: f64,
}

impl TerminalMasterState {
    pub fn at(ctx: &FrameCtx) -> Self {
        let frame = ctx.frame;
        let fps = ctx.fps();
        let flip_start = output_end_frame(fps);
        let last = (ctx.duration() - 1.0).max(1.0);

        let entrance = spring(frame, fps, ENTRANCE_SPRING);
        let flip = clamp(
            spring((frame - flip_start as f64).max(0.0), fps, FLIP_SPRING),
            0.0,
            1.0,
        );
        let ext = |v, out| interpolate(v, [0.0, 1.0], out, InterpolateOpts::extended());

        let rotate_y = interpolate_clamped(frame, [0.0, last], [10.0, -10.0]);
        let scale_up = interpolate_clamped(frame, [0.0, last], [1.0, 1.03]);

        Self {
            flip_start,
            entrance,
            flip,
            rotate_x: BASE_TILT_X + interpolate_clamped(flip, [0.0, 1.0], [0.0, 55.0]),
            rotate_y,
            translate_y: ext(entrance, [ctx.height() * 0.7, 0.0]),
            translate_z: ext(entrance, [-120.0, 40.0])
                + interpolate_clamped(flip, [0.0, 1.0], [0.0, 90.0]),
            scale: scale_up * ext(entrance, [0.96, 1.02]),
            terminal_opacity: interpolate_clamped(flip, [0.0, 1.0], [1.0, 0.0]),
        }
    }

    /// Projection of the terminal layer, pivoting on its bottom-center.
    pub fn projection(&self, ctx: &FrameCtx) -> Projection {
        let (w, h) = (ctx.width(), ctx.height());
        Projection {
            rotate_x_deg: self.rotate_x,
            rotate_y_deg: self.rotate_y,
            translate_y: self.translate_y,
            translate_z: self.translate_z,
            scale: self.scale,
            ..Projection::new(
                PERSPECTIVE,
                Point::new(w * 0.5, h * 0.5),
                Point::new(w * 0.5, h),
                TERMINAL_WINDOW_SIZE,
            )
        }
    }
}

/// Terminal demo that flips back in 3D to reveal the skills announcement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerminalMaster {
    config: VideoConfig,
}

impl TerminalMaster {
    pub const ID: &'static str = "TerminalMaster";

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

    pub fn layer(ctx: &FrameCtx) -> Node {
        let s = TerminalMasterState::at(ctx);
        let mut children = Vec::with_capacity(2);

        if let Some(reveal) = Sequence::new(s.flip_start as i64).wrap(ctx, SkillsReveal::layer) {
            children.push(reveal);
        }
        if s.terminal_opacity > 0.0 {
            let terminal = Group::new(vec![TerminalPrompt::layer(ctx)])
                .projection(s.projection(ctx))
                .opacity(s.terminal_opacity);
            children.push(Node::Group(terminal));
        }

        Node::group(children)
    }
}

impl Composition for TerminalMaster {
    fn id(&self) -> &str {
        Self::ID
    }

    fn config(&self) -> VideoConfig {
        self.config
    }

    #[tracing::instrument(skip(self), fields(id = Self::ID))]
    fn render(&self, frame: FrameIndex) -> Frame {
        let ctx = FrameCtx::root(frame, self.config);
        Frame {
            config: self.config,
            frame,
            background: Some(Rgba8::WHITE),
            root: Self::layer(&ctx),
            audio: Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/terminal_master.rs"]
mod tests;
