//! Analysis Report
//!
//! Serialisable snapshot of the final variable bindings of one run.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::range::Range;
use super::state::{State, VarId};
use crate::errors::Result;

/// Final binding for one variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableRange {
    /// Variable name
    pub name: VarId,
    /// Interval of possible values at program end
    pub range: Range,
}

/// Result of analysing one program: final bindings sorted by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AnalysisReport {
    pub variables: Vec<VariableRange>,
}

impl AnalysisReport {
    /// Build a report from the final state of a run
    pub fn from_state(state: &State) -> Self {
        let mut variables: Vec<VariableRange> = state
            .iter()
            .map(|(name, range)| VariableRange {
                name: name.clone(),
                range: *range,
            })
            .collect();
        variables.sort_by(|a, b| a.name.cmp(&b.name));
        Self { variables }
    }

    /// Look up the reported range for `name`
    pub fn range_of(&self, name: &str) -> Option<Range> {
        self.variables
            .iter()
            .find(|binding| binding.name == name)
            .map(|binding| binding.range)
    }

    /// Serialise the report to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for binding in &self.variables {
            writeln!(f, "{} ∈ {}", binding.name, binding.range)?;
        }
        Ok(())
    }
}
