/// Convenience result type used across Galley.
pub type GalleyResult<T> = Result<T, GalleyError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Note that a render pass itself never fails on bad design data: unknown
/// material tags and degenerate geometry degrade visually instead (base shape
/// only, or an empty frame). These variants cover the caller-facing surface:
/// explicit validation, backend limits, and IO.
#[derive(thiserror::Error, Debug)]
pub enum GalleyError {
    /// Invalid user-provided design data rejected by explicit validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while composing a scene plan.
    #[error("scene error: {0}")]
    Scene(String),

    /// Errors while executing a plan on a raster backend.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GalleyError {
    /// Build a [`GalleyError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GalleyError::Scene`] value.
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }

    /// Build a [`GalleyError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GalleyError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
