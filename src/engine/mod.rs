// ============================================================================
// Engine Module
// Pure ratio calculations and the analysis orchestration around them
// ============================================================================

pub mod analyzer;
pub mod ratios;

pub use analyzer::ProfitAnalyzer;
pub use ratios::{
    assess_performance, debt_to_equity, interest_coverage, profit_margin, return_on_assets,
    return_on_equity,
};
