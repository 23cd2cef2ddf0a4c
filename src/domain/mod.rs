// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod report;
pub mod statement;
pub mod tax;
pub mod verdict;

pub use report::AnalysisReport;
pub use statement::FinancialStatement;
pub use tax::TaxPolicy;
pub use verdict::{FundingRecommendation, PerformanceVerdict};
