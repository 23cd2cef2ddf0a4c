// ============================================================================
// Numeric Errors
// Error types for decimal ratio calculations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies which divisor operand was zero in a failed ratio calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ZeroDivisor {
    /// Shareholders' equity (debt-to-equity, return on equity)
    ShareholdersEquity,
    /// Average total assets (return on assets)
    AverageTotalAssets,
    /// Interest expense (interest coverage)
    InterestExpense,
    /// Revenue (profit margin)
    Revenue,
}

impl ZeroDivisor {
    /// Human-readable operand name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            ZeroDivisor::ShareholdersEquity => "shareholders' equity",
            ZeroDivisor::AverageTotalAssets => "average total assets",
            ZeroDivisor::InterestExpense => "interest expense",
            ZeroDivisor::Revenue => "revenue",
        }
    }
}

/// Errors that can occur during ratio calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RatioError {
    /// A division had a zero divisor, so the ratio is undefined
    DivisionUndefined(ZeroDivisor),
    /// Input text was empty, non-numeric, or negative (caller boundary only)
    InvalidInput,
}

impl fmt::Display for RatioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatioError::DivisionUndefined(divisor) => {
                write!(f, "ratio undefined: {} is zero", divisor.name())
            },
            RatioError::InvalidInput => {
                write!(f, "invalid input: expected a non-negative decimal value")
            },
        }
    }
}

impl std::error::Error for RatioError {}

/// Result type alias for ratio calculations
pub type RatioResult<T> = Result<T, RatioError>;
