// ============================================================================
// Analysis Report
// The artifact produced by one profit analysis run
// ============================================================================

use crate::numeric::{MonetaryAmount, RatioResult, RatioValue};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::verdict::{FundingRecommendation, PerformanceVerdict};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete result of analyzing one financial statement.
///
/// Each ratio is carried as its own `Result` so a single undefined ratio
/// (e.g. zero equity) never blocks the others; the renderer substitutes
/// "N/A" for the failed entries.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisReport {
    /// Unique report identifier
    pub id: Uuid,

    /// When the analysis ran
    pub generated_at: DateTime<Utc>,

    /// Revenue as supplied
    pub revenue: MonetaryAmount,

    /// EBIT as supplied
    pub ebit: MonetaryAmount,

    /// Earnings before tax (EBIT minus interest expense)
    pub ebt: MonetaryAmount,

    /// Tax owed under the configured policy
    pub tax_value: MonetaryAmount,

    /// Net profit after tax
    pub net_profit: MonetaryAmount,

    /// Debt-to-equity ratio (raw ratio)
    pub debt_to_equity: RatioResult<RatioValue>,

    /// Return on assets (raw fraction; scale ×100 for display)
    pub return_on_assets: RatioResult<RatioValue>,

    /// Return on equity (raw fraction; scale ×100 for display)
    pub return_on_equity: RatioResult<RatioValue>,

    /// Interest coverage ratio (raw ratio)
    pub interest_coverage: RatioResult<RatioValue>,

    /// Profit margin, already scaled as a percentage
    pub profit_margin: RatioResult<RatioValue>,

    /// Verdict against the industry benchmark
    pub performance: PerformanceVerdict,

    /// Funding recommendation derived from the verdict
    pub recommendation: FundingRecommendation,
}

impl AnalysisReport {
    /// Number of ratios that computed successfully (0..=5).
    pub fn defined_ratio_count(&self) -> usize {
        [
            &self.debt_to_equity,
            &self.return_on_assets,
            &self.return_on_equity,
            &self.interest_coverage,
            &self.profit_margin,
        ]
        .iter()
        .filter(|r| r.is_ok())
        .count()
    }
}
