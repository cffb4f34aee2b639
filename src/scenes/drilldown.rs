use crate::{
    animation::{
        interpolate::interpolate_clamped,
        typing::HeadlineTyping,
    },
    composition::{context::FrameCtx, registry::Composition},
    foundation::{
        core::{Affine, FrameIndex, Point, Rect, Rgba8, Size, Vec2, VideoConfig},
        error::ReelResult,
    },
    scene::{
        node::{AudioRef, AssetRef, Frame, Group, ImageNode, Node, ObjectFit, TextAnchor, TextStyle},
        paint::{GradientStop, LinearGradient, RadialGradient, Shadow, Stroke},
    },
    scenes::OUTFIT_FAMILY,
    widgets::{
        about, baseline,
        card::{CardContent, WidgetCard},
        charts::{CandlestickChart, HorizontalBarChart, StackedBarChart},
        gauge::{CpuGaugePair, GaugeArcs, StorageGauge},
    },
};

pub const DRILLDOWN_HEADLINE: &str = "I just joined";
pub const DRILLDOWN_SUBTITLE: &str = "Data Source and AI";
pub const DRILLDOWN_AUDIO: &str = "Graf/honey-kisses-413841.mp3";
pub const TABLE_IMAGE: &str = "Graf/grafana_table.webp";
pub const GEAR_IMAGE: &str = "Graf/blackGraf.webp";
pub const GRAFANA_LOGO: &str = "Graf/Grafana_actual.svg";

const INK: Rgba8 = Rgba8::rgb(0x0f, 0x0f, 0x0f);
const GRID_STEP: f64 = 44.0;
const STACK_GAP: f64 = 18.0;
const HEADLINE_SIZE: f64 = 96.0;
const SUBTITLE_SIZE: f64 = 36.0;
const GEAR_SIZE: f64 = 88.0;
const LOGO_SIZE: Size = Size::new(300.0, 64.0);

/// The six dashboard cards, in paint order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrilldownCard {
    Bars,
    Stacked,
    Table,
    CpuGauges,
    Candles,
    Storage,
}

impl DrilldownCard {
    pub const ALL: [Self; 6] = [
        Self::Bars,
        Self::Stacked,
        Self::Table,
        Self::CpuGauges,
        Self::Candles,
        Self::Storage,
    ];

    /// Idle-motion phase in seconds.
    fn phase_secs(self) -> f64 {
        match self {
            Self::Bars => 1.0,
            Self::Stacked => 1.2,
            Self::Table => 1.3,
            Self::Candles => 1.4,
            Self::CpuGauges => 1.5,
            Self::Storage => 1.6,
        }
    }

    /// Card geometry at `ctx`; only the gauge pair moves horizontally.
    pub fn card(self, ctx: &FrameCtx) -> WidgetCard {
        let phase = ctx.round_secs(self.phase_secs());
        let (x, y, rotation, offset, size) = match self {
            Self::Bars => (20.0, 60.0, 12.0, (-220.0, 0.0), (260.0, 150.0)),
            Self::Stacked => (1260.0, 60.0, -12.0, (220.0, 0.0), (260.0, 150.0)),
            Self::Table => (40.0, 330.0, 8.0, (-200.0, 0.0), (240.0, 140.0)),
            Self::CpuGauges => {
                let x = interpolate_clamped(ctx.frame - phase, [0.0, ctx.secs(1.4)], [1260.0, 1340.0]);
                (x, 330.0, -8.0, (260.0, 0.0), (380.0, 170.0))
            }
            Self::Candles => (150.0, 670.0, 10.0, (0.0, 220.0), (260.0, 150.0)),
            Self::Storage => (1130.0, 670.0, -10.0, (0.0, -220.0), (260.0, 150.0)),
        };
        WidgetCard {
            x,
            y,
            rotation,
            start_frame: 0.0,
            phase_offset: Some(phase),
            offset: Vec2::new(offset.0, offset.1),
            size: Size::new(size.0, size.1),
            always_visible: true,
        }
    }
}

/// Timing of the drilldown at one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DrilldownState {
    pub headline: String,
    pub title_opacity: f64,
    pub content_opacity: f64,
    pub gear_rotation: f64,
    pub gear_scale: f64,
    pub gear_opacity: f64,
    pub loader_fade: f64,
    pub logo_enter: f64,
}

impl DrilldownState {
    pub fn headline_typing(ctx: &FrameCtx) -> HeadlineTyping {
        let start = ctx.round_secs(1.0);
        HeadlineTyping {
            text: DRILLDOWN_HEADLINE.to_owned(),
            start_frame: start,
            end_frame: start + ctx.round_secs(1.2),
        }
    }

    pub fn at(ctx: &FrameCtx) -> Self {
        let frame = ctx.frame;
        let headline = Self::headline_typing(ctx).typed_text(frame).to_owned();
        Self {
            headline,
            title_opacity: interpolate_clamped(frame, [0.0, ctx.secs(1.0)], [0.0, 1.0]),
            content_opacity: interpolate_clamped(
                frame,
                [ctx.secs(0.8), ctx.secs(1.8)],
                [0.0, 1.0],
            ),
            gear_rotation: frame / ctx.secs(10.0) * 360.0,
            gear_scale: interpolate_clamped(frame, [0.0, ctx.secs(1.2)], [2.2, 1.0]),
            gear_opacity: interpolate_clamped(frame, [0.0, ctx.secs(0.6)], [0.0, 1.0]),
            loader_fade: interpolate_clamped(frame, [ctx.secs(1.6), ctx.secs(2.0)], [1.0, 0.0]),
            logo_enter: interpolate_clamped(frame, [ctx.secs(1.4), ctx.secs(2.0)], [0.0, 1.0]),
        }
    }
}

/// Warm gradient backdrop with a fine grid and two soft radial lights.
fn backdrop(size: Size) -> Node {
    let bounds = Rect::from_origin_size(Point::ZERO, size);
    let gradient = LinearGradient::css_angle(
        135.0,
        vec![
            GradientStop::new(0.0, Rgba8::rgb(0xf6, 0xd3, 0x7a)),
            GradientStop::new(0.58, Rgba8::rgb(0xf2, 0xa1, 0x4a)),
            GradientStop::new(1.0, Rgba8::rgb(0xef, 0x8d, 0x3a)),
        ],
    );

    let vertical = Stroke::new(Rgba8::rgba(255, 255, 255, 0.32), 1.0);
    let horizontal = Stroke::new(Rgba8::rgba(255, 255, 255, 0.28), 1.0);
    let mut lines = Vec::new();
    let mut x = 0.0;
    while x < size.width {
        lines.push(Node::line(Point::new(x, 0.0), Point::new(x, size.height), vertical.clone()));
        x += GRID_STEP;
    }
    let mut y = 0.0;
    while y < size.height {
        lines.push(Node::line(Point::new(0.0, y), Point::new(size.width, y), horizontal.clone()));
        y += GRID_STEP;
    }

    // Radii reach the farthest corner of the box.
    let light = |cx: f64, cy: f64, color: Rgba8, fade_at: f64| {
        let radius = (cx.max(1.0 - cx)).hypot(cy.max(1.0 - cy));
        Node::rect(
            bounds,
            0.0,
            RadialGradient {
                center: Point::new(cx, cy),
                radius,
                stops: vec![
                    GradientStop::new(0.0, color),
                    GradientStop::new(fade_at, color.with_alpha(0)),
                ],
            },
        )
    };

    Node::group(vec![
        Node::rect(bounds, 0.0, gradient),
        Node::Group(Group::new(lines).opacity(0.5)),
        light(0.3, 0.2, Rgba8::rgba(255, 255, 255, 0.35), 0.55),
        light(0.7, 0.8, Rgba8::rgba(0, 0, 0, 0.18), 0.6),
    ])
}

/// Drop shadow shared by the gear and the Grafana logo.
fn icon_shadow() -> Shadow {
    Shadow::new(0.0, 6.0, 12.0, Rgba8::rgba(0, 0, 0, 0.25))
}

fn shadowed_image(asset: &str, rect: Rect, shadow: Shadow) -> Node {
    Node::Image(ImageNode {
        asset: AssetRef::new(asset),
        rect,
        fit: ObjectFit::Contain,
        shadow: Some(shadow),
    })
}

/// Dashboard of floating cards around a typed headline and the Grafana logo.
#[derive(Clone, Debug, PartialEq)]
pub struct DrilldownRemoval {
    config: VideoConfig,
    arcs: GaugeArcs,
}

impl DrilldownRemoval {
    pub const ID: &'static str = "DrilldownRemoval";

    pub fn new(config: VideoConfig) -> ReelResult<Self> {
        Ok(Self {
            config,
            arcs: GaugeArcs::new()?,
        })
    }

    pub(crate) fn factory(
        config: VideoConfig,
        props: serde_json::Value,
    ) -> ReelResult<Box<dyn Composition>> {
        super::expect_no_props(Self::ID, props)?;
        Ok(Box::new(Self::new(config)?))
    }

    fn cards(&self, ctx: &FrameCtx) -> Node {
        let fps = ctx.fps();
        let bars = HorizontalBarChart::drilldown();
        let nodes = DrilldownCard::ALL
            .iter()
            .map(|&kind| {
                let card = kind.card(ctx);
                let draw_bars = |f, s| bars.render(f, fps, s);
                let draw_stacked = |f, s| StackedBarChart::render(f, fps, s);
                let draw_gauges = |f, s| CpuGaugePair::render(&self.arcs, f, fps, s);
                let draw_candles = |f, s| CandlestickChart::render(f, fps, s);
                let draw_storage = |f, s| StorageGauge::render(&self.arcs, f, fps, s);
                let content = match kind {
                    DrilldownCard::Bars => CardContent::Render(&draw_bars),
                    DrilldownCard::Stacked => CardContent::Render(&draw_stacked),
                    DrilldownCard::Table => CardContent::Image(TABLE_IMAGE),
                    DrilldownCard::CpuGauges => CardContent::Render(&draw_gauges),
                    DrilldownCard::Candles => CardContent::Render(&draw_candles),
                    DrilldownCard::Storage => CardContent::Render(&draw_storage),
                };
                card.render(ctx.frame, fps, content)
            })
            .collect();
        Node::group(nodes)
    }

    /// Headline, subtitle, loader gear and logo stacked around the canvas center.
    fn center_stack(ctx: &FrameCtx, s: &DrilldownState) -> Node {
        let cx = ctx.width() * 0.5;
        let headline_lh = HEADLINE_SIZE * 1.1;
        let subtitle_lh = SUBTITLE_SIZE * 1.2;
        let stack_h = headline_lh
            + STACK_GAP
            + subtitle_lh
            + STACK_GAP
            + GEAR_SIZE
            + STACK_GAP
            - 6.0
            + LOGO_SIZE.height;
        let mut top = (ctx.height() - stack_h) * 0.5;

        let headline = Node::text(
            s.headline.clone(),
            Point::new(cx, baseline(top, headline_lh, HEADLINE_SIZE)),
            TextStyle::new(OUTFIT_FAMILY, HEADLINE_SIZE, INK)
                .weight(700)
                .anchor(TextAnchor::Middle),
        )
        .faded(s.title_opacity * s.content_opacity);
        top += headline_lh + STACK_GAP;

        let subtitle = Node::text(
            DRILLDOWN_SUBTITLE,
            Point::new(cx, baseline(top, subtitle_lh, SUBTITLE_SIZE)),
            TextStyle::new(OUTFIT_FAMILY, SUBTITLE_SIZE, INK)
                .weight(500)
                .anchor(TextAnchor::Middle),
        )
        .faded(s.title_opacity * s.content_opacity);
        top += subtitle_lh + STACK_GAP;

        let gear_rect = Rect::from_origin_size((cx - GEAR_SIZE * 0.5, top), (GEAR_SIZE, GEAR_SIZE));
        let gear = shadowed_image(
            GEAR_IMAGE,
            gear_rect,
            icon_shadow(),
        )
        .transformed(about(
            gear_rect.center(),
            Affine::rotate(s.gear_rotation.to_radians()) * Affine::scale(s.gear_scale),
        ))
        .faded(s.gear_opacity * s.loader_fade);
        top += GEAR_SIZE + STACK_GAP - 6.0;

        let logo = shadowed_image(
            GRAFANA_LOGO,
            Rect::from_origin_size((cx - LOGO_SIZE.width * 0.5, top), LOGO_SIZE),
            icon_shadow(),
        )
        .transformed(Affine::translate((
            0.0,
            interpolate_clamped(s.logo_enter, [0.0, 1.0], [8.0, 0.0]),
        )))
        .faded(s.title_opacity * s.content_opacity * s.logo_enter);

        Node::group(vec![headline, subtitle, gear, logo])
    }

    pub fn layer(&self, ctx: &FrameCtx) -> Node {
        let s = DrilldownState::at(ctx);
        Node::group(vec![
            backdrop(Size::new(ctx.width(), ctx.height())),
            self.cards(ctx).faded(s.content_opacity),
            Self::center_stack(ctx, &s),
        ])
    }
}

impl Composition for DrilldownRemoval {
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
            background: None,
            root: self.layer(&ctx),
            audio: vec![AudioRef {
                asset: AssetRef::new(DRILLDOWN_AUDIO),
                volume: 0.6,
            }],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/drilldown.rs"]
mod tests;
