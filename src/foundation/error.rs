/// Convenience result type used across reelgraph.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy used by compiler and executor APIs.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// No image sources were supplied.
    #[error("invalid input count: at least one image source is required")]
    InvalidInputCount,

    /// Transition duration was zero, negative, or not finite.
    #[error("invalid transition duration: {0} (must be finite and > 0)")]
    InvalidTransitionDuration(f64),

    /// Invalid user-provided settings or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Structural filter-graph violation (duplicate label, dangling pad, ...).
    #[error("filter graph error: {0}")]
    Graph(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// The external encoder could not be started or reported failure.
    #[error("execution error: {0}")]
    Execution(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Graph`] value.
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`ReelError::Execution`] value.
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
