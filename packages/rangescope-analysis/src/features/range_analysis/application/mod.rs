//! Range Analysis Application Layer

pub mod range_analysis_usecase;

pub use range_analysis_usecase::{RangeAnalysisUseCase, RangeAnalysisUseCaseImpl};
