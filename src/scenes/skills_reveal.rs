use crate::{
    animation::{
        ease::Ease,
        interpolate::{Extrapolate, InterpolateOpts, interpolate},
        spring::{SpringConfig, spring},
    },
    composition::{context::FrameCtx, sequence::Sequence},
    foundation::core::{Affine, Point, Rgba8},
    scene::node::{Node, TextAnchor, TextStyle},
    scenes::skills_logos::SkillsLogos,
    widgets::{about, baseline},
};

/// Spring shared by the title and the logo entrance.
pub const SKILLS_REVEAL_SPRING: SpringConfig = SpringConfig::new(120.0, 220.0, 1.1);
pub const SKILLS_TITLE: &str = "Agent Skill Now Available.";

const TITLE_FAMILY: &str = "GT Planar, Inter, Helvetica Neue, Arial, sans-serif";
const TITLE_SIZE: f64 = 80.0;

/// Timing of the reveal at one local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillsRevealState {
    /// Frames the title stays mounted.
    pub title_duration: f64,
    pub title_visible: bool,
    pub title_opacity: f64,
    pub title_translate: f64,
    pub title_scale: f64,
    pub logo_visible: bool,
    pub logo_opacity: f64,
    pub logo_scale: f64,
}

impl SkillsRevealState {
    pub fn at(ctx: &FrameCtx) -> Self {
        let frame = ctx.frame;
        let fps = ctx.fps();
        let title_duration = ctx.secs(2.0);
        let title_progress = spring(frame, fps, SKILLS_REVEAL_SPRING);
        let logo_progress = spring((frame - title_duration).max(0.0), fps, SKILLS_REVEAL_SPRING);
        let title_sequence = Sequence::new(0).with_duration(title_duration.round() as u64);

        Self {
            title_duration,
            title_visible: title_sequence.is_active(frame),
            title_opacity: interpolate(
                title_progress,
                [0.0, 1.0],
                [0.0, 1.0],
                InterpolateOpts::extended(),
            ),
            title_translate: interpolate(
                title_progress,
                [0.0, 1.0],
                [18.0, 0.0],
                InterpolateOpts::extended(),
            ),
            title_scale: interpolate(
                frame,
                [0.0, ctx.secs(0.5)],
                [0.96, 1.0],
                InterpolateOpts::extended()
                    .with_easing(Ease::OutCubic)
                    .right(Extrapolate::Clamp),
            ),
            logo_visible: frame >= title_duration,
            logo_opacity: logo_progress,
            logo_scale: interpolate(
                logo_progress,
                [0.0, 1.0],
                [0.92, 1.0],
                InterpolateOpts::extended(),
            ),
        }
    }
}

/// Title card, then the logo row, on a full-canvas layer.
pub struct SkillsReveal;

impl SkillsReveal {
    pub fn layer(ctx: &FrameCtx) -> Node {
        let s = SkillsRevealState::at(ctx);
        let center = Point::new(ctx.width() * 0.5, ctx.height() * 0.5);
        let mut children = Vec::new();

        if s.title_visible {
            let style = TextStyle::new(TITLE_FAMILY, TITLE_SIZE, Rgba8::rgb(0x1f, 0x23, 0x28))
                .weight(500)
                .letter_spacing(-0.5)
                .anchor(TextAnchor::Middle);
            let line_height = TITLE_SIZE * 1.2;
            let title = Node::text(
                SKILLS_TITLE,
                Point::new(center.x, baseline(center.y - line_height * 0.5, line_height, TITLE_SIZE)),
                style,
            );
            children.push(
                title
                    .transformed(
                        Affine::translate((0.0, s.title_translate))
                            * about(center, Affine::scale(s.title_scale)),
                    )
                    .faded(s.title_opacity),
            );
        }

        if s.logo_visible {
            let logos = Sequence::new(s.title_duration.round() as i64)
                .wrap(ctx, SkillsLogos::layer)
                .unwrap_or_else(Node::empty);
            children.push(
                logos
                    .transformed(about(center, Affine::scale(s.logo_scale)))
                    .faded(s.logo_opacity),
            );
        }

        Node::group(children)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/skills_reveal.rs"]
mod tests;
