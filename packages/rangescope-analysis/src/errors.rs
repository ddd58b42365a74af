//! Error types for rangescope-analysis
//!
//! Provides unified error handling across the crate. The traversal itself is
//! infallible: unknown variables degrade to the unbounded range rather than
//! raising. Errors only arise at the configuration and reporting rim.

use thiserror::Error;

/// Main error type for range analysis operations
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Report serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        AnalysisError::Config(msg.into())
    }
}

/// Result type alias for range analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
