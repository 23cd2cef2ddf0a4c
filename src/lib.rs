// ============================================================================
// Ratio Engine Library
// Deterministic financial ratio calculations over exact decimal arithmetic
// ============================================================================

//! # Ratio Engine
//!
//! A deterministic, side-effect-free calculation library for standard
//! solvency and profitability ratios.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** via `rust_decimal` (never binary floating
//!   point, so financial figures round-trip without drift)
//! - **Typed failures** for undefined ratios: a zero divisor yields a
//!   `DivisionUndefined` error naming the operand, never NaN or infinity
//! - **Per-ratio isolation**: one undefined ratio never blocks the others
//! - **Observer seam** for logging each outcome (`tracing`-backed)
//!
//! ## Example
//!
//! ```rust
//! use ratio_engine::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let statement = FinancialStatement::new(
//!     Decimal::from(100_000), // revenue
//!     Decimal::from(20_000),  // EBIT
//!     Decimal::from(5_000),   // interest expense
//!     Decimal::from(50_000),  // total liabilities
//!     Decimal::from(100_000), // shareholders' equity
//!     Decimal::from(200_000), // average total assets
//! );
//!
//! let analyzer = ProfitAnalyzer::standard();
//! let report = analyzer.analyze(&statement, Decimal::from(15));
//!
//! assert_eq!(report.net_profit, Decimal::from(11_250));
//! assert_eq!(report.debt_to_equity.unwrap(), Decimal::new(5, 1));
//! println!("{}", ratio_engine::render::render_report(&report));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod render;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        AnalysisReport, FinancialStatement, FundingRecommendation, PerformanceVerdict, TaxPolicy,
    };
    pub use crate::engine::{
        assess_performance, debt_to_equity, interest_coverage, profit_margin, return_on_assets,
        return_on_equity, ProfitAnalyzer,
    };
    pub use crate::interfaces::{
        AnalysisEvent, AnalysisObserver, LoggingObserver, NoOpObserver, RatioKind,
    };
    pub use crate::numeric::{
        parse_amount, MonetaryAmount, RatioError, RatioResult, RatioValue, ZeroDivisor,
    };
}
