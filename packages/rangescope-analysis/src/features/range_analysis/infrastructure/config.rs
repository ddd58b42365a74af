//! Analyser Configuration

use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, Result};

/// Configuration for a `RangeAnalyser` run
///
/// The default configuration tracks every variable and preserves the
/// analysis semantics exactly; the cap exists for callers feeding in very
/// large generated programs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AnalyserConfig {
    /// Cap on distinct tracked variables; `None` tracks every name
    pub max_tracked_vars: Option<usize>,
}

impl AnalyserConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of distinct tracked variables
    pub fn with_max_tracked_vars(mut self, limit: usize) -> Self {
        self.max_tracked_vars = Some(limit);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_tracked_vars == Some(0) {
            return Err(AnalysisError::config(
                "max_tracked_vars must be at least 1 when set",
            ));
        }
        Ok(())
    }
}
