// ============================================================================
// Financial Statement
// Value object grouping the caller-supplied statement figures
// ============================================================================

use crate::numeric::MonetaryAmount;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The six statement figures a caller supplies for one analysis.
///
/// All figures are expected to be non-negative exact decimals; the input
/// boundary ([`crate::numeric::parse_amount`] or a form handler) owns that
/// rule and [`validate`](Self::validate) re-checks it. The ratio functions
/// themselves never inspect sign.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FinancialStatement {
    /// Total revenue for the period
    pub revenue: MonetaryAmount,

    /// Earnings before interest and taxes
    pub ebit: MonetaryAmount,

    /// Annual interest expense
    pub interest_expense: MonetaryAmount,

    /// Total liabilities
    pub total_liabilities: MonetaryAmount,

    /// Total shareholders' equity
    pub shareholders_equity: MonetaryAmount,

    /// Average total assets over the period
    pub average_total_assets: MonetaryAmount,
}

impl FinancialStatement {
    /// Create a statement from its six figures.
    pub fn new(
        revenue: MonetaryAmount,
        ebit: MonetaryAmount,
        interest_expense: MonetaryAmount,
        total_liabilities: MonetaryAmount,
        shareholders_equity: MonetaryAmount,
        average_total_assets: MonetaryAmount,
    ) -> Self {
        Self {
            revenue,
            ebit,
            interest_expense,
            total_liabilities,
            shareholders_equity,
            average_total_assets,
        }
    }

    /// Earnings before tax: EBIT minus interest expense.
    pub fn ebt(&self) -> MonetaryAmount {
        self.ebit - self.interest_expense
    }

    /// Validate the caller-side non-negativity rule.
    ///
    /// Zero values are allowed; the affected ratios fail individually with
    /// a typed error instead of being rejected up front.
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("Revenue", self.revenue),
            ("EBIT", self.ebit),
            ("Interest expense", self.interest_expense),
            ("Total liabilities", self.total_liabilities),
            ("Shareholders' equity", self.shareholders_equity),
            ("Average total assets", self.average_total_assets),
        ];

        for (name, value) in fields {
            if value < Decimal::ZERO {
                return Err(format!("{} cannot be negative", name));
            }
        }

        Ok(())
    }
}
