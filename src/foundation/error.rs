/// Convenience result type used across the crate.
pub type WispResult<T> = Result<T, WispError>;

/// Top-level error type.
#[derive(thiserror::Error, Debug)]
pub enum WispError {
    /// A configuration value is out of range or inconsistent.
    #[error("validation error: {0}")]
    Validation(String),

    /// A pipeline stage received inputs it cannot process.
    #[error("render error: {0}")]
    Render(String),

    /// A sink failed to encode or write the finished raster.
    #[error("encode error: {0}")]
    Encode(String),

    /// Configuration (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WispError {
    /// Build a [`WispError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WispError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`WispError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`WispError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
