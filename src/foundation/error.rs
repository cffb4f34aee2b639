/// Convenience result type used across promoreel.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy.
///
/// Timing math never fails; these errors only describe configuration mistakes and host-side
/// rendering/IO failures.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid configuration values (fps, durations, ranges, colors).
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid animation parameters (mismatched interpolation ranges, bad spring config).
    #[error("animation error: {0}")]
    Animation(String),

    /// Unknown composition id.
    #[error("lookup error: {0}")]
    Lookup(String),

    /// Props that do not match a composition's prop contract.
    #[error("props error: {0}")]
    Props(String),

    /// Rasterization or output failures.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ReelError::Lookup`] value.
    pub fn lookup(msg: impl Into<String>) -> Self {
        Self::Lookup(msg.into())
    }

    /// Build a [`ReelError::Props`] value.
    pub fn props(msg: impl Into<String>) -> Self {
        Self::Props(msg.into())
    }

    /// Build a [`ReelError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ReelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
