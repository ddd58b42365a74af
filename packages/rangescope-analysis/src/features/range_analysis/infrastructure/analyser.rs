//! Range Analyser
//!
//! Drives the abstract interpretation of one program: owns the `State` for
//! the run, threads it through the statement sequence, and snapshots the
//! final bindings into an `AnalysisReport`.
//!
//! ## Example
//!
//! ```rust
//! use rangescope_analysis::{IntegerExpression, Program, RangeAnalyser, Statement};
//!
//! let program = Program::new(vec![
//!     Statement::assignment("x", IntegerExpression::constant(5)),
//! ]);
//!
//! let report = RangeAnalyser::new().run(&program);
//! assert_eq!(report.range_of("x").unwrap().as_singleton(), Some(5));
//! ```

use tracing::debug;

use super::config::AnalyserConfig;
use crate::features::ast::domain::statement::Program;
use crate::features::range_analysis::domain::{AnalysisReport, State};

/// Abstract interpreter for one program run
///
/// The analyser is the exclusive owner of its `State`; concurrent analyses
/// each get their own analyser. AST nodes are immutable and can be shared
/// across runs freely.
pub struct RangeAnalyser {
    state: State,
}

impl Default for RangeAnalyser {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeAnalyser {
    /// Create an analyser with an empty, unlimited state
    pub fn new() -> Self {
        Self {
            state: State::new(),
        }
    }

    /// Create an analyser from a configuration
    pub fn with_config(config: &AnalyserConfig) -> Self {
        let state = match config.max_tracked_vars {
            Some(limit) => State::with_var_limit(limit),
            None => State::new(),
        };
        Self { state }
    }

    /// Create an analyser over pre-existing bindings
    pub fn with_state(state: State) -> Self {
        Self { state }
    }

    /// Thread the state through `program` and report the final bindings
    pub fn run(&mut self, program: &Program) -> AnalysisReport {
        debug!(
            statements = program.statements.len(),
            "starting range analysis"
        );
        program.analyse(&mut self.state);
        debug!(variables = self.state.len(), "range analysis complete");
        AnalysisReport::from_state(&self.state)
    }

    /// Current state (the final state once `run` has returned)
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Consume the analyser, yielding its state
    pub fn into_state(self) -> State {
        self.state
    }
}
