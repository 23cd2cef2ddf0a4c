// ============================================================================
// Monetary Amounts
// Exact decimal value types and boundary parsing for statement figures
// ============================================================================

use super::errors::{RatioError, RatioResult};
use rust_decimal::Decimal;

/// An exact decimal number representing currency or a raw count
/// (revenue, EBIT, liabilities, equity, assets, interest).
///
/// Non-negative when obtained via [`parse_amount`]; the ratio functions
/// themselves do not enforce sign, only division validity.
pub type MonetaryAmount = Decimal;

/// An exact decimal number representing a computed ratio or percentage.
///
/// An undefined ratio is an explicit [`RatioError::DivisionUndefined`]
/// rather than infinity or NaN; `Decimal` has neither, so an undefined
/// result can never leak through as a value.
///
/// [`RatioError::DivisionUndefined`]: super::RatioError::DivisionUndefined
pub type RatioValue = Decimal;

/// Parse a statement figure from user-supplied text.
///
/// This is the input-collector boundary: it trims surrounding whitespace
/// and rejects empty, non-numeric, and negative entries so that the ratio
/// functions only ever see validated non-negative decimals.
///
/// # Errors
/// Returns `InvalidInput` if the text is empty, does not parse as an exact
/// decimal, or is negative.
pub fn parse_amount(input: &str) -> RatioResult<MonetaryAmount> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(RatioError::InvalidInput);
    }

    let value = Decimal::from_str_exact(trimmed).map_err(|_| RatioError::InvalidInput)?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(RatioError::InvalidInput);
    }

    Ok(value)
}
