/// Result alias used across the crate.
pub type GridResult<T> = Result<T, GridError>;

/// Crate-wide error type.
///
/// Errors only surface at construction and configuration boundaries. The animation path itself
/// absorbs bad geometry and timing races into fallback poses.
#[derive(thiserror::Error, Debug)]
pub enum GridError {
    /// Invalid configuration or input value.
    #[error("validation error: {0}")]
    Validation(String),

    /// A layout host could not produce geometry for a probe cell.
    #[error("measurement error: {0}")]
    Measurement(String),

    /// Invalid animation parameters or handle usage.
    #[error("animation error: {0}")]
    Animation(String),

    /// Config (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error with preserved source context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GridError {
    /// Construct [`GridError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Construct [`GridError::Measurement`].
    pub fn measurement(msg: impl Into<String>) -> Self {
        Self::Measurement(msg.into())
    }

    /// Construct [`GridError::Animation`].
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Construct [`GridError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
