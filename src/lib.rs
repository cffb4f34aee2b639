//! promoreel builds short promo videos as pure functions of a frame index.
//!
//! Every composition maps `(frame, props)` to a [`Frame`]: a small visual tree of groups,
//! shapes, text and asset references. Nothing is stateful, so any frame can be rendered in
//! isolation and in any order.
//!
//! - Animation primitives: [`interpolate`], [`spring`], [`TypingEffect`], [`LineReveal`]
//! - Sequencing: [`Sequence`] and [`FrameCtx`]
//! - Built-in compositions behind a [`Registry`]
//! - Preview output: [`Frame::to_svg`] and [`rasterize`] (via `resvg`)
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod composition;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod scenes;
pub(crate) mod widgets;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Rgba8, Size, Vec2,
    VideoConfig,
};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::interpolate::{
    Extrapolate, InterpolateOpts, interpolate, interpolate_clamped, interpolate_multi,
};
pub use crate::animation::spring::{
    DEFAULT_SETTLE_THRESHOLD, SpringAnim, SpringConfig, measure_spring, spring,
};
pub use crate::animation::timing::{TimingWindow, blink_on, local_frame};
pub use crate::animation::typing::{HeadlineTyping, LineReveal, TypingCursor, TypingEffect};

pub use crate::scene::fingerprint::{FrameFingerprint, fingerprint};
pub use crate::scene::node::{
    AssetRef, AudioRef, ClipShape, Frame, Group, ImageNode, LineNode, MONO_FAMILY, Node,
    ObjectFit, PathNode, RectNode, SANS_FAMILY, TextAnchor, TextNode, TextStyle, VideoNode,
};
pub use crate::scene::paint::{
    Dash, GradientStop, LineCap, LinearGradient, Paint, RadialGradient, Shadow, Stroke,
};
pub use crate::scene::projection::Projection;

pub use crate::composition::context::FrameCtx;
pub use crate::composition::registry::{
    Composition, CompositionFactory, Registry, RegistryEntry,
};
pub use crate::composition::sequence::Sequence;

pub use crate::widgets::card::{
    CARD_ENTRANCE_SPRING, CardContent, STABLE_WINDOW, WidgetCard, WidgetCardState,
};
pub use crate::widgets::charts::{
    Candle, CandleGeometry, CandlestickChart, HorizontalBarChart, StackedBarChart,
};
pub use crate::widgets::gauge::{
    CPU_GAUGE_SPRING, CpuGauge, CpuGaugePair, CpuGaugeState, GaugeArcs, STORAGE_GAUGE_SPRING,
    StorageGauge, StorageGaugeState,
};
pub use crate::widgets::terminal::{
    TERMINAL_COMMAND, TERMINAL_OUTPUT_LINE_COUNT, TERMINAL_PROMPT, TERMINAL_SECONDS_PER_CHAR,
    TERMINAL_SECONDS_PER_LINE, TERMINAL_WINDOW_SIZE, TerminalContentState, command_typing,
    output_end_frame, output_lines, output_reveal, terminal_content, terminal_cursor,
    terminal_window,
};

pub use crate::scenes::drilldown::{DrilldownCard, DrilldownRemoval, DrilldownState};
pub use crate::scenes::lower_third::{LowerThirdProps, LowerThirdState, YouTubeLowerThird};
pub use crate::scenes::skills_logos::SkillsLogos;
pub use crate::scenes::skills_reveal::{SkillsReveal, SkillsRevealState};
pub use crate::scenes::terminal_master::{TerminalMaster, TerminalMasterState};
pub use crate::scenes::terminal_prompt::TerminalPrompt;

pub use crate::render::pipeline::{
    RenderStats, RenderThreading, render_frame, render_range, render_range_with,
    write_png_sequence,
};
pub use crate::render::raster::{FrameRGBA, RasterOpts, Rasterizer, rasterize};
