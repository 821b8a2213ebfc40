//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod export;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze};
pub use benchmark::{BenchmarkResult, run_benchmark, select_targets};
pub use export::export_corpus;
pub use simple::run_simple;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
