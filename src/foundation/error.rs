/// Convenience result type used across scanfx.
pub type ScanResult<T> = Result<T, ScanError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Invalid timeline, activation or playback configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Malformed sample sequences handed to the recorder or player.
    #[error("timeline error: {0}")]
    Timeline(String),

    /// Degenerate activation geometry (for example a vertical forward vector).
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScanError {
    /// Build a [`ScanError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ScanError::Timeline`] value.
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    /// Build a [`ScanError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`ScanError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
