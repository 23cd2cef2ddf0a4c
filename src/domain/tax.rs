// ============================================================================
// Tax Policy
// Proportional tax applied to earnings before tax
// ============================================================================

use crate::numeric::MonetaryAmount;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A flat proportional tax applied to earnings before tax.
///
/// Configuration, not engine state: callers construct a policy once and
/// pass it to the analyzer, so the rate is never hardwired into the
/// calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaxPolicy {
    /// Tax rate as a fraction (0.25 means 25%)
    pub rate: Decimal,
}

impl TaxPolicy {
    /// Create a policy with the given fractional rate.
    pub fn new(rate: Decimal) -> Self {
        Self { rate }
    }

    /// The 25% flat rate used by the profit-analysis application.
    pub fn standard() -> Self {
        Self::new(Decimal::new(25, 2))
    }

    /// Net profit: EBT after tax, `ebt × (1 − rate)`.
    pub fn net_profit(&self, ebt: MonetaryAmount) -> MonetaryAmount {
        ebt * (Decimal::ONE - self.rate)
    }

    /// Tax owed on the given EBT, `rate × ebt`.
    pub fn tax_value(&self, ebt: MonetaryAmount) -> MonetaryAmount {
        self.rate * ebt
    }

    /// Validate that the rate is a sensible fraction.
    pub fn validate(&self) -> Result<(), String> {
        if self.rate < Decimal::ZERO || self.rate > Decimal::ONE {
            return Err("Tax rate must be between 0 and 1".to_string());
        }
        Ok(())
    }
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
