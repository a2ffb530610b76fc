use crate::format::{format_currency, format_number, format_percent, format_ratio};
use analytics::{ChannelLeaders, cheapest_channel};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, Table};
use core_types::{
    Benchmark, BenchmarkMetric, BenchmarkStatus, BreakEvenResults, CacResults, FunnelResults,
    Industry, IndustryBenchmarks, LtvResults, MarketingChannelResults, RoiResults, RoiVerdict,
    SroiResults, StepPerformance,
};
use rust_decimal::Decimal;

/// Renders result records as terminal tables, with amounts in one currency.
#[derive(Debug, Clone)]
pub struct TableRenderer {
    currency: String,
}

impl TableRenderer {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    fn money(&self, value: Decimal) -> String {
        format_currency(value, &self.currency)
    }

    pub fn break_even(&self, r: &BreakEvenResults) -> Table {
        let mut table = metric_table();
        table.add_row(value_row("Contribution margin", self.money(r.contribution_margin)));
        table.add_row(value_row(
            "Break-even units",
            format_number(Decimal::from(r.break_even_units)),
        ));
        table.add_row(value_row("Break-even revenue", self.money(r.break_even_revenue)));
        if let (Some(margin), Some(pct)) = (r.safety_margin, r.safety_margin_percent) {
            let position = if margin > Decimal::ZERO {
                "above break-even"
            } else {
                "below break-even"
            };
            table.add_row(value_row(
                "Safety margin",
                format!("{} units ({}, {})", format_number(margin), format_percent(pct), position),
            ));
        }
        table
    }

    pub fn cac(&self, r: &CacResults) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["Channel", "CAC", "Share of customers"]);
        let cheapest = cheapest_channel(r).map(|c| c.name.as_str());
        for channel in r.channel_cacs.iter().flatten() {
            let name = if cheapest == Some(channel.name.as_str()) {
                format!("{} (cheapest)", channel.name)
            } else {
                channel.name.clone()
            };
            table.add_row(vec![
                Cell::new(name),
                right(self.money(channel.cac)),
                right(format_percent(channel.efficiency)),
            ]);
        }
        table.add_row(vec![
            Cell::new("Total"),
            right(self.money(r.total_cac)),
            right(format_percent(Decimal::ONE_HUNDRED)),
        ]);
        table
    }

    pub fn ltv(&self, r: &LtvResults) -> Table {
        let mut table = metric_table();
        table.add_row(value_row(
            "Customer lifespan (periods)",
            r.customer_lifespan.round_dp(1).to_string(),
        ));
        table.add_row(value_row("Total purchases", r.total_purchases.round_dp(1).to_string()));
        table.add_row(value_row("Gross LTV", self.money(r.gross_ltv)));
        table.add_row(value_row("Net LTV", self.money(r.net_ltv)));
        if let Some(ratio) = r.ltv_cac_ratio {
            table.add_row(value_row("LTV:CAC", format_ratio(ratio)));
        }
        if let Some(months) = r.payback_months {
            table.add_row(value_row("Payback (months)", months.round_dp(1).to_string()));
        }
        table
    }

    pub fn roi(&self, r: &RoiResults) -> Table {
        let mut table = metric_table();
        table.add_row(value_row("Net profit", self.money(r.net_profit)));
        table.add_row(value_row("ROI", format_percent(r.roi_percent)));
        table.add_row(value_row("Net margin", format_percent(r.net_margin)));
        table.add_row(value_row("Return per 1 invested", self.money(r.return_per_unit)));
        table.add_row(vec![
            Cell::new("Verdict"),
            Cell::new(r.verdict)
                .fg(verdict_color(r.verdict))
                .set_alignment(CellAlignment::Right),
        ]);
        table
    }

    pub fn sroi(&self, r: &SroiResults) -> Table {
        let mut table = metric_table();
        table.add_row(value_row("Gross social value", self.money(r.gross_value)));
        table.add_row(value_row("Net social value", self.money(r.net_value)));
        table.add_row(value_row("SROI", format_ratio(r.sroi)));
        table
    }

    pub fn funnel(&self, r: &FunnelResults) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["Step", "Value", "Conversion", "Benchmark", "Performance"]);
        for step in &r.steps {
            table.add_row(vec![
                Cell::new(&step.name),
                right(format_number(Decimal::from(step.value))),
                right(format_percent(step.conversion_rate)),
                right(step.benchmark.map(format_percent).unwrap_or_else(|| "-".to_string())),
                Cell::new(step.performance).fg(performance_color(step.performance)),
            ]);
        }
        table.add_row(vec![
            Cell::new("Global conversion"),
            Cell::new(""),
            right(format_percent(r.global_conversion)),
            Cell::new(""),
            Cell::new(""),
        ]);
        if let (Some(leak), Some(uplift)) = (r.leakage_points.first(), r.first_leak_uplift) {
            table.add_row(vec![
                Cell::new(format!("+10% at {}", leak)),
                right(format!("+{}", format_number(Decimal::from(uplift)))),
                Cell::new("final customers"),
                Cell::new(""),
                Cell::new(""),
            ]);
        }
        table
    }

    pub fn channels(&self, results: &[MarketingChannelResults]) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec![
            "Channel",
            "CTR",
            "CPL",
            "CAC",
            "Conversion",
            "ROI",
            "Score",
        ]);
        for r in results {
            table.add_row(vec![
                Cell::new(&r.name),
                right(format_percent(r.ctr)),
                right(self.money(r.cpl)),
                right(self.money(r.cac)),
                right(format_percent(r.conversion_rate)),
                right(format_percent(r.roi)),
                right(r.efficiency_score.round_dp(1).to_string()),
            ]);
        }
        table
    }

    pub fn channel_leaders(&self, leaders: &ChannelLeaders<'_>) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["Leader", "Channel", "Value"]);
        let rows = [
            ("Best ROI", leaders.best_roi.map(|c| (c, format_percent(c.roi)))),
            ("Lowest CAC", leaders.lowest_cac.map(|c| (c, self.money(c.cac)))),
            (
                "Best conversion",
                leaders.best_conversion.map(|c| (c, format_percent(c.conversion_rate))),
            ),
            (
                "Most efficient",
                leaders.most_efficient.map(|c| (c, c.efficiency_score.round_dp(1).to_string())),
            ),
        ];
        for (label, leader) in rows {
            if let Some((channel, value)) = leader {
                table.add_row(vec![Cell::new(label), Cell::new(&channel.name), right(value)]);
            }
        }
        table
    }

    pub fn assessments(&self, rows: &[Benchmark]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["Metric", "Value", "Status", "Recommendation"]);
        for b in rows {
            table.add_row(vec![
                Cell::new(metric_label(b.metric)),
                right(self.metric_value(b.metric, b.value)),
                Cell::new(b.status).fg(status_color(b.status)),
                Cell::new(&b.recommendation),
            ]);
        }
        table
    }

    pub fn industry(&self, industry: Industry, table_data: &IndustryBenchmarks) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec![
            format!("{} metric", industry),
            "Excellent".to_string(),
            "Good".to_string(),
            "Warning".to_string(),
        ]);
        for metric in BenchmarkMetric::ALL {
            let t = table_data.thresholds(metric);
            table.add_row(vec![
                Cell::new(metric_label(metric)),
                right(self.metric_value(metric, t.excellent)),
                right(self.metric_value(metric, t.good)),
                right(self.metric_value(metric, t.warning)),
            ]);
        }
        table
    }

    fn metric_value(&self, metric: BenchmarkMetric, value: Decimal) -> String {
        match metric {
            BenchmarkMetric::Cac => self.money(value),
            BenchmarkMetric::LtvCacRatio => format_ratio(value),
            BenchmarkMetric::Retention | BenchmarkMetric::GrossMargin => format_percent(value),
        }
    }
}

fn metric_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Metric", "Value"]);
    table
}

fn value_row(label: &str, value: String) -> Vec<Cell> {
    vec![Cell::new(label), right(value)]
}

fn right(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

fn metric_label(metric: BenchmarkMetric) -> &'static str {
    match metric {
        BenchmarkMetric::Cac => "CAC",
        BenchmarkMetric::LtvCacRatio => "LTV:CAC",
        BenchmarkMetric::Retention => "Retention",
        BenchmarkMetric::GrossMargin => "Gross margin",
    }
}

fn status_color(status: BenchmarkStatus) -> Color {
    if status.is_healthy() {
        Color::Green
    } else if status == BenchmarkStatus::Warning {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn verdict_color(verdict: RoiVerdict) -> Color {
    match verdict {
        RoiVerdict::Exceptional => Color::Green,
        RoiVerdict::Positive => Color::Yellow,
        RoiVerdict::Negative => Color::Red,
    }
}

fn performance_color(performance: StepPerformance) -> Color {
    match performance {
        StepPerformance::Good => Color::Green,
        StepPerformance::Warning => Color::Yellow,
        StepPerformance::Poor => Color::Red,
    }
}
