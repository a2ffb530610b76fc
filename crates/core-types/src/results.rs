use crate::enums::{BenchmarkMetric, BenchmarkStatus, Industry, RoiVerdict, StepPerformance};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenResults {
    pub contribution_margin: Decimal,
    pub break_even_units: u64,
    pub break_even_revenue: Decimal,
    /// Units above (positive) or below (negative) break-even. `None` without current sales.
    pub safety_margin: Option<Decimal>,
    pub safety_margin_percent: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelCac {
    pub name: String,
    pub cac: Decimal,
    /// Share of all acquired customers that came through this channel, in percent.
    pub efficiency: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacResults {
    pub total_cac: Decimal,
    pub channel_cacs: Option<Vec<ChannelCac>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LtvResults {
    /// Expected number of periods a customer stays.
    pub customer_lifespan: Decimal,
    pub total_purchases: Decimal,
    pub gross_ltv: Decimal,
    pub net_ltv: Decimal,
    pub ltv_cac_ratio: Option<Decimal>,
    /// Months of gross-margin revenue needed to earn back the acquisition cost.
    pub payback_months: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiResults {
    pub net_profit: Decimal,
    pub roi_percent: Decimal,
    pub net_margin: Decimal,
    /// Amount returned for each currency unit invested.
    pub return_per_unit: Decimal,
    pub verdict: RoiVerdict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SroiResults {
    pub gross_value: Decimal,
    pub net_value: Decimal,
    pub sroi: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStepResult {
    pub name: String,
    pub value: u64,
    pub conversion_rate: Decimal,
    pub benchmark: Option<Decimal>,
    pub performance: StepPerformance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelResults {
    pub steps: Vec<FunnelStepResult>,
    pub global_conversion: Decimal,
    /// Names of the steps classified as poor, in funnel order.
    pub leakage_points: Vec<String>,
    /// Extra customers at the last step if the first leak converted 10% better.
    pub first_leak_uplift: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketingChannelResults {
    pub name: String,
    pub ctr: Decimal,
    pub cpl: Decimal,
    pub cac: Decimal,
    pub conversion_rate: Decimal,
    pub revenue: Decimal,
    pub roi: Decimal,
    pub efficiency_score: Decimal,
}

/// A metric value judged against an industry table, with advice attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub metric: BenchmarkMetric,
    pub value: Decimal,
    pub status: BenchmarkStatus,
    pub industry: Industry,
    pub recommendation: String,
}
