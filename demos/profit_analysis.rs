// ============================================================================
// Profit Analysis Example
// ============================================================================

use ratio_engine::prelude::*;
use ratio_engine::render;
use rust_decimal::Decimal;
use std::sync::Arc;

fn main() {
    println!("=== Profit Analysis Example ===\n");

    let analyzer = ProfitAnalyzer::new(TaxPolicy::standard(), Arc::new(LoggingObserver));

    // A statement with every figure well-defined
    let statement = FinancialStatement::new(
        Decimal::from(100_000), // revenue
        Decimal::from(20_000),  // EBIT
        Decimal::from(5_000),   // interest expense
        Decimal::from(50_000),  // total liabilities
        Decimal::from(100_000), // shareholders' equity
        Decimal::from(200_000), // average total assets
    );

    if let Err(reason) = statement.validate() {
        eprintln!("Invalid statement: {}", reason);
        return;
    }

    let benchmark = Decimal::from(15); // 15% industry profit margin
    let report = analyzer.analyze(&statement, benchmark);
    println!("{}", render::render_report(&report));

    // A zero-equity statement: the equity-divided ratios come back N/A,
    // the rest of the report is unaffected
    println!("=== Zero-Equity Statement ===\n");

    let distressed = FinancialStatement::new(
        Decimal::from(80_000),
        Decimal::from(12_000),
        Decimal::from(3_000),
        Decimal::from(95_000),
        Decimal::ZERO,
        Decimal::from(150_000),
    );

    let report = analyzer.analyze(&distressed, benchmark);
    println!("{}", render::render_report(&report));
}
