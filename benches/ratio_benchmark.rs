// ============================================================================
// Ratio Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Ratio Kernel - Individual ratio calculations
// 2. Full Analysis - End-to-end statement analysis through the analyzer
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ratio_engine::prelude::*;
use rust_decimal::Decimal;

// ============================================================================
// Ratio Kernel Benchmarks
// ============================================================================

fn benchmark_ratio_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("ratio_kernel");

    let liabilities = Decimal::from(50_000);
    let equity = Decimal::from(100_000);
    let net_profit = Decimal::from(11_250);
    let assets = Decimal::from(200_000);
    let ebit = Decimal::from(20_000);
    let interest = Decimal::from(5_000);
    let revenue = Decimal::from(100_000);

    group.bench_function("debt_to_equity", |b| {
        b.iter(|| black_box(debt_to_equity(black_box(liabilities), black_box(equity))))
    });

    group.bench_function("return_on_assets", |b| {
        b.iter(|| black_box(return_on_assets(black_box(net_profit), black_box(assets))))
    });

    group.bench_function("interest_coverage", |b| {
        b.iter(|| black_box(interest_coverage(black_box(ebit), black_box(interest))))
    });

    group.bench_function("profit_margin", |b| {
        b.iter(|| black_box(profit_margin(black_box(net_profit), black_box(revenue))))
    });

    group.bench_function("assess_performance", |b| {
        let margin: RatioResult<RatioValue> = Ok(Decimal::new(1125, 2));
        let benchmark = Decimal::from(15);
        b.iter(|| black_box(assess_performance(black_box(&margin), black_box(benchmark))))
    });

    group.finish();
}

// ============================================================================
// Full Analysis Benchmarks
// ============================================================================

fn benchmark_full_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_analysis");

    let analyzer = ProfitAnalyzer::standard();
    let statement = FinancialStatement::new(
        Decimal::from(100_000),
        Decimal::from(20_000),
        Decimal::from(5_000),
        Decimal::from(50_000),
        Decimal::from(100_000),
        Decimal::from(200_000),
    );
    let benchmark = Decimal::from(15);

    group.bench_function("analyze", |b| {
        b.iter(|| black_box(analyzer.analyze(black_box(&statement), black_box(benchmark))))
    });

    // Zero equity exercises the failure path for two of the five ratios
    let distressed = FinancialStatement::new(
        Decimal::from(100_000),
        Decimal::from(20_000),
        Decimal::from(5_000),
        Decimal::from(50_000),
        Decimal::ZERO,
        Decimal::from(200_000),
    );

    group.bench_function("analyze_with_undefined_ratios", |b| {
        b.iter(|| black_box(analyzer.analyze(black_box(&distressed), black_box(benchmark))))
    });

    group.finish();
}

criterion_group!(benches, benchmark_ratio_kernel, benchmark_full_analysis);
criterion_main!(benches);
