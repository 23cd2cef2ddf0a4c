// ============================================================================
// Ratio Calculations
// Pure decimal arithmetic over validated statement figures
// ============================================================================

use crate::domain::PerformanceVerdict;
use crate::numeric::{MonetaryAmount, RatioError, RatioResult, RatioValue, ZeroDivisor};
use rust_decimal::Decimal;

/// Debt-to-equity ratio: `total_liabilities / shareholders_equity`.
///
/// Measures financial leverage.
///
/// # Errors
/// `DivisionUndefined(ShareholdersEquity)` when equity is exactly zero.
#[inline]
pub fn debt_to_equity(
    total_liabilities: MonetaryAmount,
    shareholders_equity: MonetaryAmount,
) -> RatioResult<RatioValue> {
    if shareholders_equity.is_zero() {
        return Err(RatioError::DivisionUndefined(ZeroDivisor::ShareholdersEquity));
    }
    Ok(total_liabilities / shareholders_equity)
}

/// Return on assets: `net_profit / average_total_assets`.
///
/// Returns the raw fraction; callers scale ×100 for percentage display.
///
/// # Errors
/// `DivisionUndefined(AverageTotalAssets)` when assets are exactly zero.
#[inline]
pub fn return_on_assets(
    net_profit: MonetaryAmount,
    average_total_assets: MonetaryAmount,
) -> RatioResult<RatioValue> {
    if average_total_assets.is_zero() {
        return Err(RatioError::DivisionUndefined(ZeroDivisor::AverageTotalAssets));
    }
    Ok(net_profit / average_total_assets)
}

/// Return on equity: `net_profit / shareholders_equity`.
///
/// Returns the raw fraction; callers scale ×100 for percentage display.
///
/// # Errors
/// `DivisionUndefined(ShareholdersEquity)` when equity is exactly zero.
#[inline]
pub fn return_on_equity(
    net_profit: MonetaryAmount,
    shareholders_equity: MonetaryAmount,
) -> RatioResult<RatioValue> {
    if shareholders_equity.is_zero() {
        return Err(RatioError::DivisionUndefined(ZeroDivisor::ShareholdersEquity));
    }
    Ok(net_profit / shareholders_equity)
}

/// Interest coverage ratio: `ebit / interest_expense`.
///
/// Known conflation: zero interest expense always fails, even though a
/// debt-free company with positive EBIT has a well-defined infinite
/// coverage. Only EBIT = 0 with interest = 0 is truly 0/0. Both cases are
/// reported as `DivisionUndefined(InterestExpense)`.
///
/// # Errors
/// `DivisionUndefined(InterestExpense)` when interest is exactly zero.
#[inline]
pub fn interest_coverage(
    ebit: MonetaryAmount,
    interest_expense: MonetaryAmount,
) -> RatioResult<RatioValue> {
    if interest_expense.is_zero() {
        return Err(RatioError::DivisionUndefined(ZeroDivisor::InterestExpense));
    }
    Ok(ebit / interest_expense)
}

/// Profit margin: `(net_profit / revenue) × 100`.
///
/// Unlike [`return_on_assets`] and [`return_on_equity`], this returns a
/// pre-scaled percentage (11.25 means 11.25%), matching the benchmark
/// scale expected by [`assess_performance`].
///
/// # Errors
/// `DivisionUndefined(Revenue)` when revenue is exactly zero.
#[inline]
pub fn profit_margin(
    net_profit: MonetaryAmount,
    revenue: MonetaryAmount,
) -> RatioResult<RatioValue> {
    if revenue.is_zero() {
        return Err(RatioError::DivisionUndefined(ZeroDivisor::Revenue));
    }
    Ok((net_profit / revenue) * Decimal::ONE_HUNDRED)
}

/// Compare a profit margin against an industry benchmark.
///
/// Both inputs are on the percentage scale (15.0 means 15%). An undefined
/// margin degrades to `Unassessable`; `Decimal` has no NaN or infinity, so
/// the failed computation is the only way a margin can be unusable. A
/// margin equal to the benchmark counts as `Exceptional`.
pub fn assess_performance(
    profit_margin: &RatioResult<RatioValue>,
    benchmark: RatioValue,
) -> PerformanceVerdict {
    match profit_margin {
        Err(_) => PerformanceVerdict::Unassessable,
        Ok(margin) if *margin < benchmark => PerformanceVerdict::Poor,
        Ok(_) => PerformanceVerdict::Exceptional,
    }
}
