//! Command implementations

pub mod analyze;
pub mod check;
pub mod simple;

pub use analyze::{AnalysisResult, AnalyzeError, analyze_guess};
pub use check::{CheckResult, check_guess};
pub use simple::run_simple;
