use crate::{
    animation::{
        interpolate::interpolate_clamped,
        spring::{SpringConfig, spring},
    },
    foundation::{
        core::{Affine, Fps, Point, Rect, Rgba8, Size, Vec2},
        math::clamp,
    },
    scene::{
        node::{Group, Node, ObjectFit, RectNode},
        paint::{Shadow, Stroke},
    },
};

/// Entrance spring of a card that is not always visible.
pub const CARD_ENTRANCE_SPRING: SpringConfig = SpringConfig::new(28.0, 160.0, 0.9);

/// Global frames (inclusive) during which cards hold still.
///
/// Float, wobble and content float are zeroed here; rotation drift keeps going.
pub const STABLE_WINDOW: (f64, f64) = (90.0, 150.0);

const CARD_PADDING: f64 = 14.0;
const GRID_STEP: f64 = 22.0;

/// What fills the inside of a card.
pub enum CardContent<'a> {
    /// Static image covering the content box.
    Image(&'a str),
    /// Animated content drawn into a box of the given size at the card's local frame.
    Render(&'a dyn Fn(f64, Size) -> Node),
}

/// Floating dashboard card with idle motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidgetCard {
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Base rotation in degrees.
    pub rotation: f64,
    /// Frame at which the entrance starts.
    pub start_frame: f64,
    /// Idle-motion phase; defaults to `start_frame`.
    pub phase_offset: Option<f64>,
    /// Entrance offset the card slides in from.
    pub offset: Vec2,
    /// Card size.
    pub size: Size,
    /// Skip the entrance entirely.
    pub always_visible: bool,
}

/// Motion parameters of a card at one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidgetCardState {
    pub local_frame: f64,
    pub entrance: f64,
    pub opacity: f64,
    pub translate: Vec2,
    pub scale: f64,
    pub float: f64,
    pub wobble: f64,
    pub drift: f64,
    pub content_float: f64,
}

impl WidgetCard {
    /// `true` when `frame` lies in [`STABLE_WINDOW`].
    pub fn in_stable_window(frame: f64) -> bool {
        frame >= STABLE_WINDOW.0 && frame <= STABLE_WINDOW.1
    }

    /// Sample motion at global `frame`.
    pub fn state(&self, frame: f64, fps: Fps) -> WidgetCardState {
        let fps_f = fps.as_f64();
        let local_frame = if self.always_visible {
            frame
        } else {
            frame - self.start_frame
        };
        let entrance = if self.always_visible {
            1.0
        } else {
            clamp(spring(local_frame, fps, CARD_ENTRANCE_SPRING), 0.0, 1.0)
        };

        let phase = self.phase_offset.unwrap_or(self.start_frame);
        let t = frame + phase;
        let stable = Self::in_stable_window(frame);
        let hold = |v: f64| if stable { 0.0 } else { v };

        let (opacity, translate, scale) = if self.always_visible {
            (1.0, Vec2::ZERO, 1.0)
        } else {
            (
                interpolate_clamped(local_frame, [0.0, fps_f * 0.6], [0.0, 1.0]),
                self.offset * (1.0 - entrance),
                0.8 + 0.2 * entrance,
            )
        };

        WidgetCardState {
            local_frame,
            entrance,
            opacity,
            translate,
            scale,
            float: hold((t / 14.0).sin() * 6.0),
            wobble: hold((t / 40.0).cos() * 1.5),
            drift: t / (fps_f * 2.0) * 2.5,
            content_float: hold((t / 18.0).sin() * 2.2),
        }
    }

    /// Affine placing the card's local box (origin top-left) on the canvas.
    pub fn placement(&self, state: &WidgetCardState) -> Affine {
        let rotation = (self.rotation + state.wobble + state.drift).to_radians();
        Affine::translate((
            self.x + state.translate.x,
            self.y + state.translate.y + state.float,
        )) * Affine::scale(state.scale)
            * Affine::rotate(rotation)
            * Affine::translate((-self.size.width * 0.5, -self.size.height * 0.5))
    }

    /// Card at global `frame`.
    pub fn render(&self, frame: f64, fps: Fps, content: CardContent<'_>) -> Node {
        let state = self.state(frame, fps);
        let (w, h) = (self.size.width, self.size.height);
        let bounds = Rect::new(0.0, 0.0, w, h);
        let inner = Size::new(w - CARD_PADDING * 2.0, h - CARD_PADDING * 2.0);
        let inner_rect = Rect::from_origin_size(Point::ZERO, inner);

        let body = match content {
            CardContent::Image(src) => Node::image(src, inner_rect, ObjectFit::Cover),
            CardContent::Render(draw) => draw(state.local_frame, inner),
        };

        let content_box = Group::new(vec![body, grid_overlay(inner)])
            .clip(inner_rect, 14.0)
            .transform(Affine::translate((
                CARD_PADDING,
                CARD_PADDING + state.content_float,
            )));

        let card = Group::new(vec![
            Node::Rect(RectNode {
                rect: bounds,
                radius: 20.0,
                fill: Some(Rgba8::rgb(0x1b, 0x1c, 0x21).into()),
                stroke: None,
                shadow: Some(Shadow::new(0.0, 18.0, 32.0, Rgba8::rgba(0, 0, 0, 0.35))),
            }),
            Node::Group(Group::new(vec![Node::Group(content_box)]).clip(bounds, 20.0)),
            Node::Rect(RectNode {
                rect: bounds.inset(-0.5),
                radius: 20.0,
                fill: None,
                stroke: Some(Stroke::new(Rgba8::rgba(255, 255, 255, 0.08), 1.0)),
                shadow: None,
            }),
        ])
        .transform(self.placement(&state))
        .opacity(state.opacity);

        Node::Group(card)
    }
}

/// 22px grid at half opacity over the card content.
fn grid_overlay(size: Size) -> Node {
    let vertical = Stroke::new(Rgba8::rgba(255, 255, 255, 0.1), 1.0);
    let horizontal = Stroke::new(Rgba8::rgba(255, 255, 255, 0.08), 1.0);
    let mut lines = Vec::new();
    let mut x = 0.5;
    while x < size.width {
        lines.push(Node::line(
            Point::new(x, 0.0),
            Point::new(x, size.height),
            vertical.clone(),
        ));
        x += GRID_STEP;
    }
    let mut y = 0.5;
    while y < size.height {
        lines.push(Node::line(
            Point::new(0.0, y),
            Point::new(size.width, y),
            horizontal.clone(),
        ));
        y += GRID_STEP;
    }
    Node::Group(Group::new(lines).opacity(0.5))
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/card.rs"]
mod tests;
