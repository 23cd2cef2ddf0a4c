// ============================================================================
// Render Module
// Fixed two-decimal display formatting for amounts, ratios, and reports
// ============================================================================

use crate::domain::AnalysisReport;
use crate::numeric::{MonetaryAmount, RatioResult, RatioValue};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Write as _;

/// Marker substituted for any ratio whose calculation failed.
pub const NOT_AVAILABLE: &str = "N/A";

/// Currency prefix used by the report renderer.
pub const CURRENCY_PREFIX: &str = "P";

/// Format a monetary amount with thousands grouping and two decimals.
///
/// Display rounding is half-up; the underlying report values stay exact.
pub fn format_amount(value: MonetaryAmount) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded);

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
}

/// Format a raw ratio value (e.g. debt-to-equity, interest coverage),
/// substituting the N/A marker when the calculation failed.
pub fn display_ratio(result: &RatioResult<RatioValue>) -> String {
    match result {
        Ok(value) => format_amount(*value),
        Err(_) => NOT_AVAILABLE.to_string(),
    }
}

/// Format an already-percentage-scaled value with a percent suffix.
pub fn display_percent(result: &RatioResult<RatioValue>) -> String {
    match result {
        Ok(value) => format!("{}%", format_amount(*value)),
        Err(_) => NOT_AVAILABLE.to_string(),
    }
}

/// Format a raw fraction (ROA/ROE) as a percentage.
///
/// This is where the caller-side ×100 scaling for the unscaled ratios
/// happens; `profit_margin` arrives pre-scaled and uses
/// [`display_percent`] directly.
pub fn display_fraction_as_percent(result: &RatioResult<RatioValue>) -> String {
    match result {
        Ok(value) => format!("{}%", format_amount(*value * Decimal::ONE_HUNDRED)),
        Err(_) => NOT_AVAILABLE.to_string(),
    }
}

/// Render the full result block for one analysis report.
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    writeln!(out, "--- Profit Analysis Results ---").unwrap();
    writeln!(out, "Revenue          = {}{}", CURRENCY_PREFIX, format_amount(report.revenue))
        .unwrap();
    writeln!(out, "EBIT             = {}{}", CURRENCY_PREFIX, format_amount(report.ebit)).unwrap();
    writeln!(out, "EBT              = {}{}", CURRENCY_PREFIX, format_amount(report.ebt)).unwrap();
    writeln!(out, "Tax Value        = {}{}", CURRENCY_PREFIX, format_amount(report.tax_value))
        .unwrap();
    writeln!(out, "Net Profit       = {}{}", CURRENCY_PREFIX, format_amount(report.net_profit))
        .unwrap();
    writeln!(out, "------------------------------------").unwrap();
    writeln!(out, "Debt-to-Equity   = {}", display_ratio(&report.debt_to_equity)).unwrap();
    writeln!(
        out,
        "Return on Assets = {}",
        display_fraction_as_percent(&report.return_on_assets)
    )
    .unwrap();
    writeln!(
        out,
        "Return on Equity = {}",
        display_fraction_as_percent(&report.return_on_equity)
    )
    .unwrap();
    writeln!(out, "Interest Cover   = {}", display_ratio(&report.interest_coverage)).unwrap();
    writeln!(out, "Profit Margin    = {}", display_percent(&report.profit_margin)).unwrap();
    writeln!(out, "Company Performance: {}", report.performance).unwrap();
    writeln!(out, "Funding Recommendation: {}", report.recommendation).unwrap();

    out
}

/// Insert comma separators every three digits, right to left.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FinancialStatement, TaxPolicy};
    use crate::engine::ProfitAnalyzer;
    use crate::interfaces::NoOpObserver;
    use crate::numeric::{RatioError, ZeroDivisor};
    use std::sync::Arc;

    #[test]
    fn test_format_amount_grouping() {
        assert_eq!(format_amount(Decimal::from(100_000)), "100,000.00");
        assert_eq!(format_amount(Decimal::new(123_456_789, 2)), "1,234,567.89");
        assert_eq!(format_amount(Decimal::from(999)), "999.00");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_format_amount_rounds_half_up() {
        // 5.625 rounds away from zero at two decimals
        assert_eq!(format_amount(Decimal::new(5625, 3)), "5.63");
        assert_eq!(format_amount(Decimal::new(-5625, 3)), "-5.63");
    }

    #[test]
    fn test_display_ratio_substitutes_na() {
        let failed: RatioResult<RatioValue> =
            Err(RatioError::DivisionUndefined(ZeroDivisor::ShareholdersEquity));
        assert_eq!(display_ratio(&failed), "N/A");
        assert_eq!(display_ratio(&Ok(Decimal::new(5, 1))), "0.50");
    }

    #[test]
    fn test_fraction_scaling_for_display() {
        // ROA arrives as a raw fraction and is scaled here
        assert_eq!(display_fraction_as_percent(&Ok(Decimal::new(5625, 5))), "5.63%");
        // Profit margin arrives pre-scaled
        assert_eq!(display_percent(&Ok(Decimal::new(1125, 2))), "11.25%");
    }

    #[test]
    fn test_render_report_full_block() {
        let statement = FinancialStatement::new(
            Decimal::from(100_000),
            Decimal::from(20_000),
            Decimal::from(5_000),
            Decimal::from(50_000),
            Decimal::from(100_000),
            Decimal::from(200_000),
        );
        let analyzer = ProfitAnalyzer::new(TaxPolicy::standard(), Arc::new(NoOpObserver));
        let report = analyzer.analyze(&statement, Decimal::from(15));

        let rendered = render_report(&report);

        assert!(rendered.contains("Revenue          = P100,000.00"));
        assert!(rendered.contains("Net Profit       = P11,250.00"));
        assert!(rendered.contains("Debt-to-Equity   = 0.50"));
        assert!(rendered.contains("Return on Assets = 5.63%"));
        assert!(rendered.contains("Return on Equity = 11.25%"));
        assert!(rendered.contains("Interest Cover   = 4.00"));
        assert!(rendered.contains("Profit Margin    = 11.25%"));
        assert!(rendered.contains("Company Performance: Poor"));
        assert!(rendered.contains("Funding Recommendation: Not Eligible"));
    }

    #[test]
    fn test_render_report_with_undefined_ratios() {
        let statement = FinancialStatement::new(
            Decimal::from(100_000),
            Decimal::from(20_000),
            Decimal::from(5_000),
            Decimal::from(50_000),
            Decimal::ZERO,
            Decimal::from(200_000),
        );
        let report = ProfitAnalyzer::standard().analyze(&statement, Decimal::from(15));

        let rendered = render_report(&report);

        assert!(rendered.contains("Debt-to-Equity   = N/A"));
        assert!(rendered.contains("Return on Equity = N/A"));
        assert!(rendered.contains("Interest Cover   = 4.00"));
    }
}
