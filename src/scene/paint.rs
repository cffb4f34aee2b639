use crate::foundation::core::{Point, Rgba8};

/// One color stop of a gradient; `offset` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientStop {
    /// Position along the gradient.
    pub offset: f64,
    /// Stop color.
    pub color: Rgba8,
}

impl GradientStop {
    /// Stop at `offset`.
    pub fn new(offset: f64, color: Rgba8) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient in object-bounding-box units (`(0,0)` top-left, `(1,1)` bottom-right).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinearGradient {
    /// Gradient start.
    pub start: Point,
    /// Gradient end.
    pub end: Point,
    /// Color stops, ascending offsets.
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Gradient following a CSS `linear-gradient(<angle>deg, ...)` direction.
    ///
    /// `0deg` points up, `90deg` points right.
    pub fn css_angle(angle_deg: f64, stops: Vec<GradientStop>) -> Self {
        let a = angle_deg.to_radians();
        let (dx, dy) = (a.sin() * 0.5, -a.cos() * 0.5);
        Self {
            start: Point::new(0.5 - dx, 0.5 - dy),
            end: Point::new(0.5 + dx, 0.5 + dy),
            stops,
        }
    }
}

/// Radial gradient in object-bounding-box units.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RadialGradient {
    /// Circle center.
    pub center: Point,
    /// Circle radius.
    pub radius: f64,
    /// Color stops, ascending offsets.
    pub stops: Vec<GradientStop>,
}

/// Fill or stroke source.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    /// Flat color.
    Solid(Rgba8),
    /// Linear gradient.
    LinearGradient(LinearGradient),
    /// Radial gradient.
    RadialGradient(RadialGradient),
}

impl From<Rgba8> for Paint {
    fn from(c: Rgba8) -> Self {
        Self::Solid(c)
    }
}

impl From<LinearGradient> for Paint {
    fn from(g: LinearGradient) -> Self {
        Self::LinearGradient(g)
    }
}

impl From<RadialGradient> for Paint {
    fn from(g: RadialGradient) -> Self {
        Self::RadialGradient(g)
    }
}

/// Stroke end caps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    /// Flat end at the endpoint.
    #[default]
    Butt,
    /// Half-disc past the endpoint.
    Round,
    /// Half-square past the endpoint.
    Square,
}

/// Dash pattern; in path-length units when the path sets `path_length`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dash {
    /// Alternating dash and gap lengths.
    pub array: Vec<f64>,
    /// Pattern offset.
    pub offset: f64,
}

impl Dash {
    /// Single dash covering `progress` of a path normalized to length 1.
    ///
    /// Equivalent to `stroke-dasharray: 1; stroke-dashoffset: 1 - progress` on a
    /// `pathLength = 1` path.
    pub fn reveal(progress: f64) -> Self {
        Self {
            array: vec![1.0],
            offset: 1.0 - progress.clamp(0.0, 1.0),
        }
    }
}

/// Stroke style.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    /// Stroke paint.
    pub paint: Paint,
    /// Width in user units.
    pub width: f64,
    /// End caps.
    #[serde(default)]
    pub cap: LineCap,
    /// Optional dash pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<Dash>,
}

impl Stroke {
    /// Solid stroke of `width`.
    pub fn new(paint: impl Into<Paint>, width: f64) -> Self {
        Self {
            paint: paint.into(),
            width,
            cap: LineCap::Butt,
            dash: None,
        }
    }

    /// Builder: end caps.
    pub fn cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Builder: dash pattern.
    pub fn dash(mut self, dash: Dash) -> Self {
        self.dash = Some(dash);
        self
    }
}

/// Drop shadow behind a shape (CSS `box-shadow` / `drop-shadow`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shadow {
    /// Horizontal offset.
    pub dx: f64,
    /// Vertical offset.
    pub dy: f64,
    /// Blur radius.
    pub blur: f64,
    /// Shadow color.
    pub color: Rgba8,
}

impl Shadow {
    /// Shadow offset by `(dx, dy)` with `blur` radius.
    pub fn new(dx: f64, dy: f64, blur: f64, color: Rgba8) -> Self {
        Self {
            dx,
            dy,
            blur,
            color,
        }
    }
}
