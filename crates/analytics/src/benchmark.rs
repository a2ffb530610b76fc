use core_types::{
    Benchmark, BenchmarkMetric, BenchmarkStatus, Industry, IndustryBenchmarks, Thresholds,
};
use rust_decimal::Decimal;

/// Places `value` in one of four tiers.
///
/// Tiers are checked from excellent down to warning and the first match wins.
/// With `inverse` set (lower is better, e.g. CAC) a tier matches when the
/// value is at or below its threshold; otherwise when it is at or above.
pub fn get_benchmark_status(
    value: Decimal,
    thresholds: &Thresholds,
    inverse: bool,
) -> BenchmarkStatus {
    let meets = |threshold: Decimal| {
        if inverse {
            value <= threshold
        } else {
            value >= threshold
        }
    };

    if meets(thresholds.excellent) {
        BenchmarkStatus::Excellent
    } else if meets(thresholds.good) {
        BenchmarkStatus::Good
    } else if meets(thresholds.warning) {
        BenchmarkStatus::Warning
    } else {
        BenchmarkStatus::Poor
    }
}

/// Judges a metric against an industry table and attaches a recommendation.
pub fn assess(
    industry: Industry,
    metric: BenchmarkMetric,
    value: Decimal,
    table: &IndustryBenchmarks,
) -> Benchmark {
    let status = get_benchmark_status(value, table.thresholds(metric), metric.is_inverse());
    tracing::debug!(%industry, %metric, %value, %status, "Benchmark assessed");

    Benchmark {
        metric,
        value,
        status,
        industry,
        recommendation: recommendation(metric, status).to_string(),
    }
}

pub fn recommendation(metric: BenchmarkMetric, status: BenchmarkStatus) -> &'static str {
    use BenchmarkMetric::*;
    use BenchmarkStatus::*;

    match (metric, status) {
        (Cac, Excellent | Good) => {
            "Acquisition is efficient; consider scaling the channels that deliver it."
        }
        (Cac, Warning) => "Review channel mix and shift budget toward the lowest-CAC channels.",
        (Cac, Poor) => {
            "Acquisition cost is too high; pause underperforming channels and improve conversion."
        }
        (LtvCacRatio, Excellent) => {
            "Strong unit economics; there is room to invest more in growth."
        }
        (LtvCacRatio, Good) => "Healthy unit economics; keep monitoring retention and CAC.",
        (LtvCacRatio, Warning) => {
            "Unit economics are thin; raise retention or lower acquisition cost."
        }
        (LtvCacRatio, Poor) => {
            "Each customer costs more than they return; fix retention or pricing before scaling."
        }
        (Retention, Excellent | Good) => "Retention is solid; use loyal customers for referrals.",
        (Retention, Warning) => "Retention is slipping; investigate churn reasons and onboarding.",
        (Retention, Poor) => {
            "Churn is high; prioritise the customer experience over new acquisition."
        }
        (GrossMargin, Excellent | Good) => "Margins support growth spending.",
        (GrossMargin, Warning) => "Margins are tight; review pricing and variable costs.",
        (GrossMargin, Poor) => {
            "Margins cannot fund growth; restructure pricing or cost of delivery."
        }
    }
}
