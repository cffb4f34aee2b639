use crate::{composition::context::FrameCtx, scene::node::Node};

/// Time-shifted child window of a composition.
///
/// A child placed in a sequence sees its own frame 0 at parent frame `from` and is absent
/// outside `[from, from + duration)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Sequence {
    /// Parent frame at which the child starts.
    pub from: i64,
    /// Child lifetime; `None` lasts until the parent ends.
    pub duration: Option<u64>,
}

impl Sequence {
    /// Open-ended sequence starting at `from`.
    pub fn new(from: i64) -> Self {
        Self {
            from,
            duration: None,
        }
    }

    /// Builder: bounded lifetime.
    pub fn with_duration(mut self, duration: u64) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Whether the child is mounted at parent frame `frame`.
    pub fn is_active(&self, frame: f64) -> bool {
        let start = self.from as f64;
        if frame < start {
            return false;
        }
        match self.duration {
            Some(d) => frame < start + d as f64,
            None => true,
        }
    }

    /// Child-local frame while active.
    pub fn local_frame(&self, frame: f64) -> Option<f64> {
        self.is_active(frame).then(|| frame - self.from as f64)
    }

    /// Render the child with a shifted context, or nothing while inactive.
    pub fn wrap(&self, ctx: &FrameCtx, render: impl FnOnce(&FrameCtx) -> Node) -> Option<Node> {
        if !self.is_active(ctx.frame) {
            return None;
        }
        Some(render(&ctx.shifted(self.from as f64)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/sequence.rs"]
mod tests;
