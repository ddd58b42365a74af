//! Range Analysis Feature
//!
//! Static range analysis: a restricted abstract interpretation that
//! computes a conservative interval of possible values for each integer
//! variable without executing the program.
//!
//! ## Architecture
//!
//! ```text
//! range_analysis
//! ├── domain/           # Range (interval lattice), State (store), AnalysisReport
//! ├── application/      # RangeAnalysisUseCase
//! └── infrastructure/   # RangeAnalyser, AnalyserConfig
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use rangescope_analysis::{
//!     IntegerExpression, Program, RangeAnalysisUseCase, RangeAnalysisUseCaseImpl, Statement,
//! };
//!
//! let program = Program::new(vec![
//!     Statement::definition("x"),
//!     Statement::assignment("y", IntegerExpression::constant(5)),
//! ]);
//!
//! let report = RangeAnalysisUseCaseImpl::new().analyse(&program);
//! assert!(report.range_of("x").unwrap().unbounded);
//! assert_eq!(report.range_of("y").unwrap().as_singleton(), Some(5));
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export application layer
pub use application::{RangeAnalysisUseCase, RangeAnalysisUseCaseImpl};

// Domain models
pub use domain::{AnalysisReport, Range, State, VarId, VariableRange};

// Infrastructure
pub use infrastructure::{AnalyserConfig, RangeAnalyser};
