/// Crate-wide result type.
pub type InkResult<T> = Result<T, InkError>;

/// Errors surfaced by the engine, the renderer and the script runner.
#[derive(thiserror::Error, Debug)]
pub enum InkError {
    /// Rejected input (canvas size, line parameters, builder preconditions).
    #[error("validation error: {0}")]
    Validation(String),

    /// Failure while rasterizing or compositing a render plan.
    #[error("render error: {0}")]
    Render(String),

    /// Malformed script or config JSON.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Opaque upstream error (image decoding, filesystem access).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InkError {
    /// Build a [`InkError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`InkError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`InkError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
