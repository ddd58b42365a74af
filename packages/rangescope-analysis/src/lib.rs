/*
 * Rangescope Analysis - Static Range Analysis Engine
 *
 * Feature-First Hexagonal Architecture:
 * - features/ast/            : AST node families + canonical rendering
 * - features/range_analysis/ : interval domain, state store, analyser
 *
 * The engine computes, without executing a program, a conservative interval
 * of possible values for each integer variable by threading one abstract
 * state through the statement sequence.
 */

pub mod errors;
pub mod features;

pub use errors::{AnalysisError, Result};

// Re-exports for convenience

// AST node families
pub use features::ast::{Block, BooleanExpression, IntegerExpression, Program, Statement};

// Range analysis
pub use features::range_analysis::{
    AnalyserConfig, AnalysisReport, Range, RangeAnalyser, RangeAnalysisUseCase,
    RangeAnalysisUseCaseImpl, State, VarId, VariableRange,
};
