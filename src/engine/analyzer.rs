// ============================================================================
// Profit Analyzer
// Core orchestration: derived figures, independent ratios, assessment
// ============================================================================

use crate::domain::{AnalysisReport, FinancialStatement, FundingRecommendation, TaxPolicy};
use crate::interfaces::{AnalysisEvent, AnalysisObserver, RatioKind};
use crate::numeric::{RatioResult, RatioValue};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::ratios;

/// Runs a complete profit analysis over one financial statement.
///
/// Each ratio is computed independently: an undefined ratio is recorded as
/// its typed error and never blocks the remaining calculations, mirroring
/// the per-field isolation the surrounding application relies on.
pub struct ProfitAnalyzer {
    /// Tax policy used to derive EBT-based figures
    tax_policy: TaxPolicy,

    /// Observer for per-ratio and assessment events
    observer: Arc<dyn AnalysisObserver>,
}

impl ProfitAnalyzer {
    /// Create an analyzer with an explicit tax policy and observer.
    pub fn new(tax_policy: TaxPolicy, observer: Arc<dyn AnalysisObserver>) -> Self {
        Self {
            tax_policy,
            observer,
        }
    }

    /// Create an analyzer with the standard 25% tax policy and no observer.
    pub fn standard() -> Self {
        Self::new(TaxPolicy::standard(), Arc::new(crate::interfaces::NoOpObserver))
    }

    /// The configured tax policy.
    pub fn tax_policy(&self) -> TaxPolicy {
        self.tax_policy
    }

    /// Analyze a statement against an industry profit-margin benchmark
    /// (percentage scale, e.g. 15 for 15%).
    pub fn analyze(
        &self,
        statement: &FinancialStatement,
        benchmark: RatioValue,
    ) -> AnalysisReport {
        let mut events = Vec::new();

        // Derived figures feeding the ratio calculations
        let ebt = statement.ebt();
        let net_profit = self.tax_policy.net_profit(ebt);
        let tax_value = self.tax_policy.tax_value(ebt);

        let debt_to_equity = Self::record(
            &mut events,
            RatioKind::DebtToEquity,
            ratios::debt_to_equity(statement.total_liabilities, statement.shareholders_equity),
        );
        let return_on_assets = Self::record(
            &mut events,
            RatioKind::ReturnOnAssets,
            ratios::return_on_assets(net_profit, statement.average_total_assets),
        );
        let return_on_equity = Self::record(
            &mut events,
            RatioKind::ReturnOnEquity,
            ratios::return_on_equity(net_profit, statement.shareholders_equity),
        );
        let interest_coverage = Self::record(
            &mut events,
            RatioKind::InterestCoverage,
            ratios::interest_coverage(statement.ebit, statement.interest_expense),
        );
        let profit_margin = Self::record(
            &mut events,
            RatioKind::ProfitMargin,
            ratios::profit_margin(net_profit, statement.revenue),
        );

        let performance = ratios::assess_performance(&profit_margin, benchmark);
        events.push(AnalysisEvent::PerformanceAssessed {
            verdict: performance,
            benchmark,
            timestamp: Utc::now(),
        });

        self.observer.on_events(events);

        AnalysisReport {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            revenue: statement.revenue,
            ebit: statement.ebit,
            ebt,
            tax_value,
            net_profit,
            debt_to_equity,
            return_on_assets,
            return_on_equity,
            interest_coverage,
            profit_margin,
            performance,
            recommendation: FundingRecommendation::from(performance),
        }
    }

    /// Record one ratio outcome as an event and pass the result through.
    fn record(
        events: &mut Vec<AnalysisEvent>,
        ratio: RatioKind,
        result: RatioResult<RatioValue>,
    ) -> RatioResult<RatioValue> {
        match result {
            Ok(value) => events.push(AnalysisEvent::RatioComputed {
                ratio,
                value,
                timestamp: Utc::now(),
            }),
            Err(error) => events.push(AnalysisEvent::RatioUndefined {
                ratio,
                error,
                timestamp: Utc::now(),
            }),
        }
        result
    }
}
