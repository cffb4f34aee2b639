use crate::{
    composition::{
        context::FrameCtx,
        registry::Composition,
    },
    foundation::{
        core::{Affine, FrameIndex, VideoConfig},
        error::ReelResult,
    },
    scene::node::{Frame, Node},
    widgets::terminal::{TERMINAL_WINDOW_SIZE, terminal_window},
};

/// The terminal window typing the install command, centered on a transparent canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerminalPrompt {
    config: VideoConfig,
}

impl TerminalPrompt {
    pub const ID: &'static str = "TerminalPrompt";

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

    /// Full-canvas layer with the window centered; reused under a 3D transform by the master
    /// composition.
    pub fn layer(ctx: &FrameCtx) -> Node {
        let x = (ctx.width() - TERMINAL_WINDOW_SIZE.width) * 0.5;
        let y = (ctx.height() - TERMINAL_WINDOW_SIZE.height) * 0.5;
        terminal_window(ctx.frame, ctx.fps()).transformed(Affine::translate((x, y)))
    }
}

impl Composition for TerminalPrompt {
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
#[path = "../../tests/unit/scenes/terminal_prompt.rs"]
mod tests;
