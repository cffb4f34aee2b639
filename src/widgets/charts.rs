use crate::{
    animation::{interpolate::interpolate_clamped, timing::TimingWindow},
    foundation::{
        core::{Affine, Fps, Point, Rect, Rgba8, Size},
        math::fit_viewbox,
    },
    scene::{
        node::{Group, Node, RectNode, TextAnchor, TextStyle},
        paint::{GradientStop, LineCap, LinearGradient, Shadow, Stroke},
    },
    widgets::{about, baseline},
};

fn bar_shadow() -> Shadow {
    Shadow::new(0.0, 4.0, 10.0, Rgba8::rgba(0, 0, 0, 0.35))
}

/// Horizontal bars growing left to right, one after another.
#[derive(Clone, Debug, PartialEq)]
pub struct HorizontalBarChart {
    /// Bar values; the largest fills the track.
    pub values: Vec<f64>,
}

impl HorizontalBarChart {
    const ROW_HEIGHT: f64 = 17.0;
    const ROW_GAP: f64 = 8.0;
    const LABEL_WIDTH: f64 = 44.0;

    /// Values shown on the drilldown dashboard.
    pub fn drilldown() -> Self {
        Self {
            values: vec![78.9, 78.0, 66.6, 21.7, 70.5],
        }
    }

    /// Grow window of bar `index`: starts every `0.1 s`, grows for `0.5 s`.
    pub fn bar_window(index: usize, fps: Fps) -> TimingWindow {
        let fps = fps.as_f64();
        TimingWindow::staggered(index, fps * 0.1, fps * 0.5)
    }

    /// Width of each bar as a percentage of its track at `local_frame`.
    pub fn width_percents(&self, local_frame: f64, fps: Fps) -> Vec<f64> {
        let max = self.values.iter().copied().fold(f64::MIN, f64::max);
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let progress = Self::bar_window(i, fps).progress(local_frame);
                if max > 0.0 { v / max * 100.0 * progress } else { 0.0 }
            })
            .collect()
    }

    /// Chart laid out in a box of `size`.
    pub fn render(&self, local_frame: f64, fps: Fps, size: Size) -> Node {
        let (pad_x, pad_y) = (8.0, 4.0);
        let n = self.values.len() as f64;
        let block = n * Self::ROW_HEIGHT + (n - 1.0).max(0.0) * Self::ROW_GAP;
        let top0 = pad_y + ((size.height - pad_y * 2.0) - block) * 0.5;
        let track_w = (size.width - pad_x * 2.0 - Self::ROW_GAP - Self::LABEL_WIDTH).max(0.0);

        let fill = LinearGradient::css_angle(
            90.0,
            vec![
                GradientStop::new(0.0, Rgba8::rgb(0xff, 0xb3, 0x47)),
                GradientStop::new(0.55, Rgba8::rgb(0xff, 0x8b, 0x3d)),
                GradientStop::new(1.0, Rgba8::rgb(0xff, 0x6d, 0x2a)),
            ],
        );
        let label = TextStyle::sans(14.0, Rgba8::rgba(255, 255, 255, 0.7)).anchor(TextAnchor::End);

        let mut rows = Vec::new();
        for (i, (value, pct)) in self
            .values
            .iter()
            .zip(self.width_percents(local_frame, fps))
            .enumerate()
        {
            let top = top0 + i as f64 * (Self::ROW_HEIGHT + Self::ROW_GAP);
            let bar_top = top + (Self::ROW_HEIGHT - 10.0) * 0.5;
            let track = Rect::new(pad_x, bar_top, pad_x + track_w, bar_top + 10.0);
            rows.push(Node::rect(track, 5.0, Rgba8::rgba(255, 255, 255, 0.08)));
            let bar_w = track_w * pct / 100.0;
            if bar_w > 0.0 {
                rows.push(Node::Group(
                    Group::new(vec![Node::Rect(RectNode {
                        rect: Rect::new(pad_x, bar_top, pad_x + bar_w, bar_top + 10.0),
                        radius: 5.0,
                        fill: Some(fill.clone().into()),
                        stroke: None,
                        shadow: Some(bar_shadow()),
                    })])
                    .clip(track, 5.0),
                ));
            }
            rows.push(Node::text(
                format!("{value:.1}"),
                Point::new(size.width - pad_x, baseline(top, Self::ROW_HEIGHT, 14.0)),
                label.clone(),
            ));
        }
        Node::group(rows)
    }
}

/// Five stacked columns rising from the baseline.
pub struct StackedBarChart;

impl StackedBarChart {
    /// Segment shares per column, bottom to top.
    pub const COLUMNS: [[f64; 4]; 5] = [
        [0.35, 0.25, 0.2, 0.2],
        [0.25, 0.3, 0.2, 0.25],
        [0.3, 0.2, 0.25, 0.25],
        [0.2, 0.3, 0.3, 0.2],
        [0.25, 0.25, 0.3, 0.2],
    ];
    const COLORS: [Rgba8; 4] = [
        Rgba8::rgb(0xf5, 0x5b, 0x57),
        Rgba8::rgb(0xff, 0x9b, 0x3d),
        Rgba8::rgb(0x5f, 0xd0, 0x8e),
        Rgba8::rgb(0x5a, 0xa9, 0xff),
    ];
    const COLUMN_WIDTH: f64 = 22.0;
    const SEGMENT_GAP: f64 = 4.0;

    /// Vertical scale of each column at `local_frame` (`0.1 s` stagger, `0.6 s` growth).
    pub fn column_progress(local_frame: f64, fps: Fps) -> [f64; 5] {
        let fps = fps.as_f64();
        std::array::from_fn(|i| TimingWindow::staggered(i, fps * 0.1, fps * 0.6).progress(local_frame))
    }

    /// Chart laid out in a box of `size`.
    pub fn render(local_frame: f64, fps: Fps, size: Size) -> Node {
        let (pad_x, pad_y) = (12.0, 8.0);
        let inner_w = size.width - pad_x * 2.0;
        let col_h = size.height - pad_y * 2.0;
        let bottom = size.height - pad_y;
        let n = Self::COLUMNS.len() as f64;
        let spacing = ((inner_w - n * Self::COLUMN_WIDTH) / (n - 1.0)).max(0.0);

        let mut columns = Vec::new();
        for (i, (segments, progress)) in Self::COLUMNS
            .iter()
            .zip(Self::column_progress(local_frame, fps))
            .enumerate()
        {
            if progress <= 0.0 {
                continue;
            }
            let x = pad_x + i as f64 * (Self::COLUMN_WIDTH + spacing);
            let mut y = bottom;
            let mut nodes = Vec::new();
            for (share, color) in segments.iter().zip(Self::COLORS) {
                let seg_h = share * col_h;
                nodes.push(Node::Rect(RectNode {
                    rect: Rect::new(x, y - seg_h, x + Self::COLUMN_WIDTH, y),
                    radius: 6.0,
                    fill: Some(color.into()),
                    stroke: None,
                    shadow: Some(bar_shadow()),
                }));
                y -= seg_h + Self::SEGMENT_GAP;
            }
            let grow = about(
                Point::new(x + Self::COLUMN_WIDTH * 0.5, bottom),
                Affine::scale_non_uniform(1.0, progress),
            );
            columns.push(Node::Group(Group::new(nodes).transform(grow)));
        }
        Node::group(columns)
    }
}

/// One OHLC sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    const fn new(open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            open,
            high,
            low,
            close,
        }
    }

    /// Closed at or above the open.
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// Candle body and wick positions in view-box units at one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandleGeometry {
    pub x: f64,
    pub body_top: f64,
    pub body_height: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub up: bool,
}

/// Ten candles growing out of their body bottoms inside a 220x120 view box.
pub struct CandlestickChart;

impl CandlestickChart {
    pub const DATA: [Candle; 10] = [
        Candle::new(92.0, 108.0, 86.0, 102.0),
        Candle::new(102.0, 114.0, 98.0, 110.0),
        Candle::new(110.0, 118.0, 104.0, 106.0),
        Candle::new(106.0, 112.0, 96.0, 99.0),
        Candle::new(99.0, 111.0, 94.0, 109.0),
        Candle::new(109.0, 116.0, 101.0, 112.0),
        Candle::new(112.0, 120.0, 108.0, 115.0),
        Candle::new(115.0, 122.0, 109.0, 111.0),
        Candle::new(111.0, 118.0, 103.0, 105.0),
        Candle::new(105.0, 112.0, 98.0, 100.0),
    ];
    pub const VIEW: Size = Size::new(220.0, 120.0);
    const PAD_X: f64 = 12.0;
    const PAD_Y: f64 = 14.0;
    const MIN_VALUE: f64 = 86.0;
    const MAX_VALUE: f64 = 122.0;
    const BODY_WIDTH: f64 = 10.0;
    const UP: Rgba8 = Rgba8::rgb(0x7c, 0xc7, 0x76);
    const DOWN: Rgba8 = Rgba8::rgb(0xf2, 0x49, 0x5c);

    fn usable() -> Size {
        Size::new(
            Self::VIEW.width - Self::PAD_X * 2.0,
            Self::VIEW.height - Self::PAD_Y * 2.0,
        )
    }

    fn value_to_y(value: f64) -> f64 {
        Self::PAD_Y
            + (Self::MAX_VALUE - value) / (Self::MAX_VALUE - Self::MIN_VALUE) * Self::usable().height
    }

    /// Opacity of the whole candle set (`2.2 s` fade).
    pub fn reveal(local_frame: f64, fps: Fps) -> f64 {
        interpolate_clamped(local_frame, [0.0, fps.as_f64() * 2.2], [0.0, 1.0])
    }

    /// Growth of candle `index` (`0.12 s` stagger, `0.6 s` growth).
    pub fn candle_progress(index: usize, local_frame: f64, fps: Fps) -> f64 {
        let fps = fps.as_f64();
        TimingWindow::staggered(index, fps * 0.12, fps * 0.6).progress(local_frame)
    }

    /// Geometry of candle `index` at growth `progress`.
    pub fn geometry(index: usize, progress: f64) -> CandleGeometry {
        let c = Self::DATA[index % Self::DATA.len()];
        let last = (Self::DATA.len() - 1) as f64;
        let x = Self::PAD_X + index as f64 / last * Self::usable().width;
        let body_top = Self::value_to_y(c.open.max(c.close));
        let body_bottom = Self::value_to_y(c.open.min(c.close));
        let wick_top = Self::value_to_y(c.high);
        let wick_bottom = Self::value_to_y(c.low);
        let current_top = body_bottom - (body_bottom - body_top) * progress;
        CandleGeometry {
            x,
            body_top: current_top,
            body_height: (body_bottom - current_top).max(3.0),
            wick_top: body_bottom - (body_bottom - wick_top) * progress,
            wick_bottom: body_bottom + (wick_bottom - body_bottom) * progress,
            up: c.is_up(),
        }
    }

    /// Chart fitted into a box of `size`.
    pub fn render(local_frame: f64, fps: Fps, size: Size) -> Node {
        let (vw, vh) = (Self::VIEW.width, Self::VIEW.height);
        let grid = Stroke::new(Rgba8::rgba(255, 255, 255, 0.12), 1.0);
        let mut view = vec![Node::rect(
            Rect::new(0.0, 0.0, vw, vh),
            0.0,
            Rgba8::rgb(0x11, 0x16, 0x1c),
        )];
        for frac in [0.25, 0.5, 0.75] {
            let y = Self::PAD_Y + Self::usable().height * frac;
            view.push(Node::line(
                Point::new(Self::PAD_X, y),
                Point::new(vw - Self::PAD_X, y),
                grid.clone(),
            ));
        }

        let reveal = Self::reveal(local_frame, fps);
        for i in 0..Self::DATA.len() {
            let g = Self::geometry(i, Self::candle_progress(i, local_frame, fps));
            let color = if g.up { Self::UP } else { Self::DOWN };
            view.push(
                Node::group(vec![
                    Node::line(
                        Point::new(g.x, g.wick_top),
                        Point::new(g.x, g.wick_bottom),
                        Stroke::new(color, 2.0).cap(LineCap::Round),
                    ),
                    Node::rect(
                        Rect::new(
                            g.x - Self::BODY_WIDTH * 0.5,
                            g.body_top,
                            g.x + Self::BODY_WIDTH * 0.5,
                            g.body_top + g.body_height,
                        ),
                        2.0,
                        color,
                    ),
                ])
                .faded(reveal),
            );
        }

        let bounds = Rect::from_origin_size(Point::ZERO, size);
        let fitted = Node::group(view).transformed(fit_viewbox(Rect::new(0.0, 0.0, vw, vh), bounds));
        Node::Group(
            Group::new(vec![
                Node::rect(bounds, 12.0, Rgba8::rgb(0x11, 0x16, 0x1c)),
                fitted,
            ])
            .clip(bounds, 12.0),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/charts.rs"]
mod tests;
