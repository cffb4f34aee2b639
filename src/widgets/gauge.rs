use crate::{
    animation::{
        interpolate::interpolate_clamped,
        spring::{SpringConfig, spring},
    },
    foundation::{
        core::{Affine, BezPath, Fps, Point, Rect, Rgba8, Size},
        error::{ReelError, ReelResult},
        math::{clamp, fit_viewbox},
    },
    scene::{
        node::{Group, Node, PathNode, RectNode, TextAnchor, TextStyle},
        paint::{Dash, GradientStop, LineCap, LinearGradient, Paint, Shadow, Stroke},
    },
    widgets::{about, baseline},
};

/// Spring driving the CPU gauges.
pub const CPU_GAUGE_SPRING: SpringConfig = SpringConfig::new(24.0, 140.0, 0.8);
/// Spring driving the storage gauge.
pub const STORAGE_GAUGE_SPRING: SpringConfig = SpringConfig::new(22.0, 120.0, 0.9);

const CPU_ARC: &str = "M 20 96 A 70 70 0 0 1 180 96";
const STORAGE_ARC: &str = "M 20 96 A 80 80 0 0 1 180 96";
const GAUGE_VIEW: Rect = Rect::new(0.0, 0.0, 200.0, 120.0);
const TRACK: Rgba8 = Rgba8::rgb(0x1b, 0x22, 0x2c);

fn arc(d: &str) -> ReelResult<BezPath> {
    BezPath::from_svg(d).map_err(|e| ReelError::validation(format!("gauge arc '{d}': {e}")))
}

/// Parsed gauge arcs, shared by every gauge of a composition.
#[derive(Clone, Debug, PartialEq)]
pub struct GaugeArcs {
    /// Radius-70 arc of the CPU gauges.
    pub cpu: BezPath,
    /// Radius-80 arc of the storage gauge.
    pub storage: BezPath,
}

impl GaugeArcs {
    /// Parse both arcs.
    pub fn new() -> ReelResult<Self> {
        Ok(Self {
            cpu: arc(CPU_ARC)?,
            storage: arc(STORAGE_ARC)?,
        })
    }
}

/// Background track plus an accent arc revealed up to `progress` of its length.
fn gauge_arcs(
    path: &BezPath,
    width: f64,
    accent: Paint,
    progress: f64,
    glow: Option<Shadow>,
) -> Vec<Node> {
    vec![
        Node::Path(PathNode {
            path: path.clone(),
            fill: None,
            stroke: Some(Stroke::new(TRACK, width).cap(LineCap::Round)),
            path_length: None,
            shadow: None,
        }),
        Node::Path(PathNode {
            path: path.clone(),
            fill: None,
            stroke: Some(
                Stroke::new(accent, width)
                    .cap(LineCap::Round)
                    .dash(Dash::reveal(progress)),
            ),
            path_length: Some(1.0),
            shadow: glow,
        }),
    ]
}

/// Semicircular percentage gauge with a title.
#[derive(Clone, Debug, PartialEq)]
pub struct CpuGauge {
    pub title: String,
    /// Percent shown before the spring releases.
    pub start: f64,
    /// Percent the spring settles on.
    pub end: f64,
    pub accent: Rgba8,
    pub delay_frames: f64,
}

/// Computed parameters of a [`CpuGauge`] at one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CpuGaugeState {
    /// Spring progress clamped to `[0, 1]`.
    pub progress: f64,
    pub percent: f64,
    /// Fraction of the arc drawn.
    pub arc_progress: f64,
    pub float: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl CpuGauge {
    /// Sample at `local_frame`.
    pub fn state(&self, local_frame: f64, fps: Fps) -> CpuGaugeState {
        let raw = spring((local_frame - self.delay_frames).max(0.0), fps, CPU_GAUGE_SPRING);
        let progress = clamp(raw, 0.0, 1.0);
        let percent = interpolate_clamped(progress, [0.0, 1.0], [self.start, self.end]);
        CpuGaugeState {
            progress,
            percent,
            arc_progress: clamp(percent / 100.0, 0.0, 1.0),
            float: ((local_frame + self.delay_frames) / 12.0).sin() * 2.5,
            scale: interpolate_clamped(progress, [0.0, 1.0], [0.9, 1.0]),
            opacity: progress,
        }
    }

    /// Gauge panel in a box of `size`.
    pub fn render(&self, arcs: &GaugeArcs, local_frame: f64, fps: Fps, size: Size) -> Node {
        let s = self.state(local_frame, fps);
        let bounds = Rect::from_origin_size(Point::ZERO, size);
        let (pad_x, pad_y) = (12.0, 10.0);
        let title_h = 16.0;
        let area = Rect::new(pad_x, pad_y + title_h + 6.0, size.width - pad_x, size.height - pad_y);

        let dial = Node::group(gauge_arcs(
            &arcs.cpu,
            12.0,
            self.accent.into(),
            s.arc_progress,
            None,
        ))
        .transformed(fit_viewbox(GAUGE_VIEW, area));

        let panel = Group::new(vec![
            Node::Rect(RectNode {
                rect: bounds.inset(-0.5),
                radius: 14.0,
                fill: Some(Rgba8::rgb(0x11, 0x16, 0x1c).into()),
                stroke: Some(Stroke::new(Rgba8::rgb(0x1f, 0x26, 0x30), 1.0)),
                shadow: None,
            }),
            Node::text(
                self.title.clone(),
                Point::new(pad_x, baseline(pad_y, title_h, 13.0)),
                TextStyle::sans(13.0, Rgba8::rgb(0xf0, 0xf4, 0xfa)).letter_spacing(0.2),
            ),
            dial,
            Node::text(
                format!("{:.1}%", s.percent),
                Point::new(
                    area.center().x,
                    area.y0 + area.height() * 0.58 + 24.0 * 0.8,
                ),
                TextStyle::sans(24.0, self.accent)
                    .weight(600)
                    .anchor(TextAnchor::Middle),
            ),
        ])
        .transform(
            Affine::translate((0.0, s.float))
                * about(bounds.center(), Affine::scale(s.scale)),
        )
        .opacity(s.opacity);

        Node::Group(panel)
    }
}

/// Requests and limits gauges side by side.
pub struct CpuGaugePair;

impl CpuGaugePair {
    /// The two gauges; limits release `0.2 s` later.
    pub fn gauges(fps: Fps) -> [CpuGauge; 2] {
        [
            CpuGauge {
                title: "CPU Requests usage".to_owned(),
                start: 20.0,
                end: 70.0,
                accent: Rgba8::rgba(87, 148, 242, 0.95),
                delay_frames: 0.0,
            },
            CpuGauge {
                title: "CPU Limits usage".to_owned(),
                start: 28.0,
                end: 62.0,
                accent: Rgba8::rgba(124, 199, 118, 0.95),
                delay_frames: (fps.as_f64() * 0.2).round(),
            },
        ]
    }

    /// Both panels in a box of `size`, 10px apart.
    pub fn render(arcs: &GaugeArcs, local_frame: f64, fps: Fps, size: Size) -> Node {
        let gap = 10.0;
        let cell = Size::new((size.width - gap) * 0.5, size.height);
        let nodes = Self::gauges(fps)
            .iter()
            .enumerate()
            .map(|(i, gauge)| {
                let x = i as f64 * (cell.width + gap);
                gauge
                    .render(arcs, local_frame, fps, cell)
                    .transformed(Affine::translate((x, 0.0)))
            })
            .collect();
        Node::group(nodes)
    }
}

/// Disk usage gauge, 42 to 93.7 of 120 GB.
pub struct StorageGauge;

/// Computed parameters of the [`StorageGauge`] at one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StorageGaugeState {
    pub progress: f64,
    /// Used gigabytes.
    pub value: f64,
    /// `value / max`, clamped.
    pub ratio: f64,
    /// Opacity of the arc glow.
    pub glow: f64,
}

impl StorageGauge {
    /// Capacity in GB.
    pub const MAX: f64 = 120.0;

    /// Sample at `local_frame`.
    pub fn state(local_frame: f64, fps: Fps) -> StorageGaugeState {
        let progress = clamp(spring(local_frame, fps, STORAGE_GAUGE_SPRING), 0.0, 1.0);
        let value = interpolate_clamped(progress, [0.0, 1.0], [42.0, 93.7]);
        StorageGaugeState {
            progress,
            value,
            ratio: clamp(value / Self::MAX, 0.0, 1.0),
            glow: interpolate_clamped(progress, [0.0, 1.0], [0.0, 0.9]),
        }
    }

    /// Gauge in a box of `size`.
    pub fn render(arcs: &GaugeArcs, local_frame: f64, fps: Fps, size: Size) -> Node {
        let s = Self::state(local_frame, fps);
        let bounds = Rect::from_origin_size(Point::ZERO, size);
        let gradient = LinearGradient {
            start: Point::new(0.0, 0.0),
            end: Point::new(1.0, 0.0),
            stops: vec![
                GradientStop::new(0.0, Rgba8::rgb(0x6f, 0xdc, 0x6f)),
                GradientStop::new(0.55, Rgba8::rgb(0xff, 0xb3, 0x47)),
                GradientStop::new(1.0, Rgba8::rgb(0xff, 0x5b, 0x6b)),
            ],
        };
        let glow = Shadow::new(0.0, 0.0, 8.0, Rgba8::rgba(255, 120, 120, s.glow));
        let fit = fit_viewbox(GAUGE_VIEW, bounds);
        let dial = Node::group(gauge_arcs(
            &arcs.storage,
            14.0,
            gradient.into(),
            s.ratio,
            Some(glow),
        ))
        .transformed(fit);

        // Labels sit inside the arc bowl, pulled up over the lower part of the view box.
        let bowl = fit * Point::new(100.0, 96.0);
        let label_y = bowl.y - 14.0;
        Node::group(vec![
            dial,
            Node::text(
                format!("{:.1} GB", s.value),
                Point::new(bounds.center().x, label_y),
                TextStyle::sans(28.0, Rgba8::rgb(0xff, 0x5b, 0x6b))
                    .weight(700)
                    .letter_spacing(0.2)
                    .anchor(TextAnchor::Middle),
            ),
            Node::text(
                "sda6",
                Point::new(bounds.center().x, label_y + 20.0),
                TextStyle::sans(14.0, Rgba8::rgba(255, 255, 255, 0.6)).anchor(TextAnchor::Middle),
            ),
        ])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/gauge.rs"]
mod tests;
