// ============================================================================
// Numeric Module
// Exact decimal arithmetic types for financial ratio calculations
// ============================================================================
//
// This module provides:
// - MonetaryAmount/RatioValue: exact decimal aliases over rust_decimal
// - RatioError/ZeroDivisor: error types for undefined calculations
// - parse_amount: validated boundary parsing for user-supplied figures
//
// Design principles:
// - No floating-point operations
// - Every division validates its divisor and returns Result (no panics)
// - Undefined results are typed failures, never NaN or infinity

mod amount;
mod errors;

pub use amount::{parse_amount, MonetaryAmount, RatioValue};
pub use errors::{RatioError, RatioResult, ZeroDivisor};
