//! Range Analysis UseCase

use crate::features::ast::domain::statement::Program;
use crate::features::range_analysis::domain::AnalysisReport;
use crate::features::range_analysis::infrastructure::{AnalyserConfig, RangeAnalyser};

/// Range Analysis UseCase Trait
pub trait RangeAnalysisUseCase: Send + Sync {
    fn analyse(&self, program: &Program) -> AnalysisReport;
}

/// Range Analysis UseCase Implementation
///
/// Creates a fresh `State` per call, so one instance may serve concurrent
/// callers.
#[derive(Debug, Clone, Default)]
pub struct RangeAnalysisUseCaseImpl {
    config: AnalyserConfig,
}

impl RangeAnalysisUseCaseImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalyserConfig) -> Self {
        Self { config }
    }
}

impl RangeAnalysisUseCase for RangeAnalysisUseCaseImpl {
    fn analyse(&self, program: &Program) -> AnalysisReport {
        RangeAnalyser::with_config(&self.config).run(program)
    }
}
