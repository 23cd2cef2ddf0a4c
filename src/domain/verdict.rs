// ============================================================================
// Performance Verdict
// Benchmark comparison outcomes and the derived funding recommendation
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of comparing a company's profit margin to an industry benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PerformanceVerdict {
    /// Profit margin strictly below the benchmark
    Poor,
    /// Profit margin at or above the benchmark (ties count as exceptional)
    Exceptional,
    /// Profit margin was undefined, so no comparison is possible
    Unassessable,
}

impl fmt::Display for PerformanceVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformanceVerdict::Poor => write!(f, "Poor"),
            PerformanceVerdict::Exceptional => write!(f, "Exceptional"),
            PerformanceVerdict::Unassessable => {
                write!(f, "Cannot assess (profit margin undefined)")
            },
        }
    }
}

/// Funding recommendation derived from the performance verdict.
///
/// Only exceptional performers are recommended for funding; poor and
/// unassessable companies are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FundingRecommendation {
    Eligible,
    NotEligible,
}

impl From<PerformanceVerdict> for FundingRecommendation {
    fn from(verdict: PerformanceVerdict) -> Self {
        match verdict {
            PerformanceVerdict::Exceptional => FundingRecommendation::Eligible,
            PerformanceVerdict::Poor | PerformanceVerdict::Unassessable => {
                FundingRecommendation::NotEligible
            },
        }
    }
}

impl fmt::Display for FundingRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FundingRecommendation::Eligible => write!(f, "Eligible"),
            FundingRecommendation::NotEligible => write!(f, "Not Eligible"),
        }
    }
}
