use analytics::{
    ChannelLeaders, assess, calculate_break_even, calculate_cac, calculate_funnel, calculate_ltv,
    calculate_marketing_channels, calculate_roi, calculate_sroi,
};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use comfy_table::Table;
use configuration::{ConfigArgs, Settings};
use core_types::{
    Benchmark, BenchmarkMetric, BreakEvenInputs, CacInputs, ChannelSpend, FunnelStep, Industry,
    IndustryBenchmarks, LtvInputs, MarketingChannel, MarketingChannelResults, RoiInputs,
    SroiInputs,
};
use report::TableRenderer;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod samples;

/// The main entry point for the KPI dashboard.
fn main() -> Result<()> {
    // Logs go to stderr so that `--json` output on stdout stays machine readable.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let settings = cli
        .settings
        .load()
        .context("Failed to load dashboard settings")?;
    let dashboard = Dashboard::new(settings, cli.json);

    match cli.command {
        Commands::BreakEven(args) => dashboard.break_even(args)?,
        Commands::Cac(args) => dashboard.cac(args)?,
        Commands::Ltv(args) => dashboard.ltv(args)?,
        Commands::Roi(args) => dashboard.roi(args)?,
        Commands::Sroi(args) => dashboard.sroi(args)?,
        Commands::Funnel(args) => dashboard.funnel(args)?,
        Commands::Channels(args) => dashboard.channels(args)?,
        Commands::Benchmarks(args) => dashboard.benchmarks(args)?,
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Business KPI calculators: break-even, CAC, LTV, ROI, SROI, funnels and channels.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    settings: ConfigArgs,

    /// Print the result record as JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Units and revenue needed to cover fixed costs.
    BreakEven(BreakEvenArgs),
    /// Customer acquisition cost, overall and per channel.
    Cac(CacArgs),
    /// Customer lifetime value and the LTV:CAC ratio.
    Ltv(LtvArgs),
    /// Return on investment.
    Roi(RoiArgs),
    /// Social return on investment.
    Sroi(SroiArgs),
    /// Step-by-step conversion of a sales funnel.
    Funnel(FunnelArgs),
    /// Side-by-side comparison of marketing channels.
    Channels(ChannelsArgs),
    /// Show an industry benchmark table, or grade one figure against it.
    Benchmarks(BenchmarksArgs),
}

#[derive(Args)]
struct BreakEvenArgs {
    /// Fixed costs for the period.
    #[arg(long, required_unless_present = "example")]
    fixed_costs: Option<Decimal>,
    /// Variable cost of one unit.
    #[arg(long, required_unless_present = "example")]
    variable_cost: Option<Decimal>,
    /// Selling price of one unit.
    #[arg(long, required_unless_present = "example")]
    price: Option<Decimal>,
    /// Units currently sold; adds the safety margin.
    #[arg(long)]
    current_sales: Option<u64>,
    /// Use the education pilot figures.
    #[arg(long)]
    example: bool,
}

impl BreakEvenArgs {
    fn inputs(self) -> Result<BreakEvenInputs> {
        if self.example {
            return Ok(samples::break_even());
        }
        Ok(BreakEvenInputs {
            fixed_costs: required(self.fixed_costs, "fixed-costs")?,
            variable_cost_per_unit: required(self.variable_cost, "variable-cost")?,
            price_per_unit: required(self.price, "price")?,
            current_sales: self.current_sales,
        })
    }
}

#[derive(Args)]
struct CacArgs {
    /// Total marketing and sales spend.
    #[arg(long, required_unless_present = "example")]
    investment: Option<Decimal>,
    /// Customers acquired with that spend.
    #[arg(long, required_unless_present = "example")]
    customers: Option<u64>,
    /// Per-channel spend as `name:investment:customers` (repeatable).
    #[arg(long = "channel")]
    channels: Vec<ChannelSpend>,
    /// Use the education pilot figures.
    #[arg(long)]
    example: bool,
}

impl CacArgs {
    fn inputs(self) -> Result<CacInputs> {
        if self.example {
            return Ok(samples::cac());
        }

        let (channels, skipped): (Vec<_>, Vec<_>) =
            self.channels.into_iter().partition(|c| c.customers > 0);
        for channel in &skipped {
            tracing::info!(channel = %channel.name, "Skipping channel without customers");
        }

        Ok(CacInputs {
            total_marketing_investment: required(self.investment, "investment")?,
            customers_acquired: required(self.customers, "customers")?,
            channels: (!channels.is_empty()).then_some(channels),
        })
    }
}

#[derive(Args)]
struct LtvArgs {
    /// Average value of one purchase.
    #[arg(long, required_unless_present = "example")]
    price: Option<Decimal>,
    /// Purchases per customer per period.
    #[arg(long, required_unless_present = "example")]
    frequency: Option<Decimal>,
    /// Percent of customers kept from one period to the next (below 100).
    #[arg(long, required_unless_present = "example")]
    retention: Option<Decimal>,
    /// Gross margin in percent.
    #[arg(long, required_unless_present = "example")]
    gross_margin: Option<Decimal>,
    /// Acquisition cost to compare against; adds the LTV:CAC ratio and payback.
    #[arg(long)]
    cac: Option<Decimal>,
    /// Use the education pilot figures.
    #[arg(long)]
    example: bool,
}

impl LtvArgs {
    fn inputs(self) -> Result<(LtvInputs, Option<Decimal>)> {
        if self.example {
            return Ok((samples::ltv(), self.cac.or(Some(samples::LTV_CAC))));
        }
        let inputs = LtvInputs {
            average_purchase_price: required(self.price, "price")?,
            purchase_frequency: required(self.frequency, "frequency")?,
            retention_rate: required(self.retention, "retention")?,
            gross_margin: required(self.gross_margin, "gross-margin")?,
        };
        Ok((inputs, self.cac))
    }
}

#[derive(Args)]
struct RoiArgs {
    /// Total amount invested.
    #[arg(long, required_unless_present = "example")]
    investment: Option<Decimal>,
    /// Revenue generated by the investment.
    #[arg(long, required_unless_present = "example")]
    revenue: Option<Decimal>,
    /// Operating costs for the same period.
    #[arg(long, required_unless_present = "example")]
    operational_costs: Option<Decimal>,
    /// Use the education pilot figures.
    #[arg(long)]
    example: bool,
}

impl RoiArgs {
    fn inputs(self) -> Result<RoiInputs> {
        if self.example {
            return Ok(samples::roi());
        }
        Ok(RoiInputs {
            total_investment: required(self.investment, "investment")?,
            revenue_generated: required(self.revenue, "revenue")?,
            operational_costs: required(self.operational_costs, "operational-costs")?,
        })
    }
}

#[derive(Args)]
struct SroiArgs {
    /// Amount invested in the social programme.
    #[arg(long, required_unless_present = "example")]
    investment: Option<Decimal>,
    /// People who benefit directly.
    #[arg(long, required_unless_present = "example")]
    beneficiaries: Option<u64>,
    /// Monetised value created per beneficiary.
    #[arg(long, required_unless_present = "example")]
    value_per_beneficiary: Option<Decimal>,
    /// Percent of the outcome that would have happened anyway.
    #[arg(long, default_value = "0")]
    deadweight: Decimal,
    /// Percent of the outcome credited to this programme.
    #[arg(long, default_value = "100")]
    attribution: Decimal,
    /// Use the education pilot figures.
    #[arg(long)]
    example: bool,
}

impl SroiArgs {
    fn inputs(self) -> Result<SroiInputs> {
        if self.example {
            return Ok(samples::sroi());
        }
        Ok(SroiInputs {
            social_investment: required(self.investment, "investment")?,
            direct_beneficiaries: required(self.beneficiaries, "beneficiaries")?,
            value_per_beneficiary: required(self.value_per_beneficiary, "value-per-beneficiary")?,
            deadweight: self.deadweight,
            attribution: self.attribution,
        })
    }
}

#[derive(Args)]
struct FunnelArgs {
    /// A funnel step as `name:value[:benchmark]`, in funnel order (repeatable).
    #[arg(long = "step", required_unless_present = "example")]
    steps: Vec<FunnelStep>,
    /// Use the education pilot figures.
    #[arg(long)]
    example: bool,
}

#[derive(Args)]
struct ChannelsArgs {
    /// A channel as `name:investment:impressions:clicks:leads:conversions` (repeatable).
    #[arg(long = "channel", required_unless_present = "example")]
    channels: Vec<MarketingChannel>,
    /// Revenue attributed to each conversion.
    #[arg(long, required_unless_present = "example")]
    average_revenue: Option<Decimal>,
    /// Use the education pilot figures.
    #[arg(long)]
    example: bool,
}

#[derive(Args)]
struct BenchmarksArgs {
    /// Metric to grade: cac, ltv_cac_ratio, retention or gross_margin.
    #[arg(long, requires = "value")]
    metric: Option<BenchmarkMetric>,
    /// The figure to grade.
    #[arg(long, requires = "metric", allow_negative_numbers = true)]
    value: Option<Decimal>,
    /// Show the tables of every industry.
    #[arg(long, conflicts_with = "metric")]
    all: bool,
}

fn required<T>(value: Option<T>, flag: &str) -> Result<T> {
    value.with_context(|| format!("--{} is required unless --example is given", flag))
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// A calculation result with the benchmark grades that apply to it.
#[derive(Serialize)]
struct Output<'a, T> {
    results: &'a T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    assessments: Vec<Benchmark>,
}

#[derive(Serialize)]
struct ChannelComparison<'a> {
    channels: &'a [MarketingChannelResults],
    leaders: ChannelLeaders<'a>,
}

struct Dashboard {
    settings: Settings,
    renderer: TableRenderer,
    json: bool,
}

impl Dashboard {
    fn new(settings: Settings, json: bool) -> Self {
        let renderer = TableRenderer::new(settings.display.currency_symbol.clone());
        tracing::info!(industry = %settings.industry, "Dashboard ready");
        Self {
            settings,
            renderer,
            json,
        }
    }

    fn grade(&self, metric: BenchmarkMetric, value: Decimal) -> Benchmark {
        let industry = self.settings.industry;
        assess(industry, metric, value, &self.settings.benchmarks_for(industry))
    }

    fn break_even(&self, args: BreakEvenArgs) -> Result<()> {
        let inputs = args.inputs()?;
        let results = calculate_break_even(&inputs).context("Break-even calculation failed")?;
        self.emit(
            &Output { results: &results, assessments: vec![] },
            vec![self.renderer.break_even(&results)],
        )
    }

    fn cac(&self, args: CacArgs) -> Result<()> {
        let inputs = args.inputs()?;
        let results = calculate_cac(&inputs).context("CAC calculation failed")?;
        let assessments = vec![self.grade(BenchmarkMetric::Cac, results.total_cac)];
        let tables = vec![
            self.renderer.cac(&results),
            self.renderer.assessments(&assessments),
        ];
        self.emit(&Output { results: &results, assessments }, tables)
    }

    fn ltv(&self, args: LtvArgs) -> Result<()> {
        let (inputs, cac) = args.inputs()?;
        let results = calculate_ltv(&inputs, cac).context("LTV calculation failed")?;

        let mut assessments = Vec::with_capacity(3);
        if let Some(ratio) = results.ltv_cac_ratio {
            assessments.push(self.grade(BenchmarkMetric::LtvCacRatio, ratio));
        }
        assessments.push(self.grade(BenchmarkMetric::Retention, inputs.retention_rate));
        assessments.push(self.grade(BenchmarkMetric::GrossMargin, inputs.gross_margin));

        let tables = vec![
            self.renderer.ltv(&results),
            self.renderer.assessments(&assessments),
        ];
        self.emit(&Output { results: &results, assessments }, tables)
    }

    fn roi(&self, args: RoiArgs) -> Result<()> {
        let inputs = args.inputs()?;
        let results = calculate_roi(&inputs).context("ROI calculation failed")?;
        self.emit(
            &Output { results: &results, assessments: vec![] },
            vec![self.renderer.roi(&results)],
        )
    }

    fn sroi(&self, args: SroiArgs) -> Result<()> {
        let inputs = args.inputs()?;
        let results = calculate_sroi(&inputs).context("SROI calculation failed")?;
        self.emit(
            &Output { results: &results, assessments: vec![] },
            vec![self.renderer.sroi(&results)],
        )
    }

    fn funnel(&self, args: FunnelArgs) -> Result<()> {
        let steps = if args.example {
            samples::funnel()
        } else {
            args.steps
        };
        let results = calculate_funnel(&steps).context("Funnel calculation failed")?;
        if !results.leakage_points.is_empty() {
            tracing::info!(leaks = ?results.leakage_points, "Funnel has leakage points");
        }
        self.emit(
            &Output { results: &results, assessments: vec![] },
            vec![self.renderer.funnel(&results)],
        )
    }

    fn channels(&self, args: ChannelsArgs) -> Result<()> {
        let (channels, average_revenue) = if args.example {
            (samples::channels(), samples::AVERAGE_REVENUE)
        } else {
            (args.channels, required(args.average_revenue, "average-revenue")?)
        };
        let results = calculate_marketing_channels(&channels, average_revenue)
            .context("Channel comparison failed")?;
        let leaders = ChannelLeaders::from_results(&results);

        let tables = vec![
            self.renderer.channels(&results),
            self.renderer.channel_leaders(&leaders),
        ];
        self.emit(&ChannelComparison { channels: &results, leaders }, tables)
    }

    fn benchmarks(&self, args: BenchmarksArgs) -> Result<()> {
        if let (Some(metric), Some(value)) = (args.metric, args.value) {
            let assessment = self.grade(metric, value);
            let table = self.renderer.assessments(std::slice::from_ref(&assessment));
            return self.emit(&assessment, vec![table]);
        }

        let industries: Vec<Industry> = if args.all {
            Industry::ALL.to_vec()
        } else {
            vec![self.settings.industry]
        };
        let tables: BTreeMap<Industry, IndustryBenchmarks> = industries
            .into_iter()
            .map(|industry| (industry, self.settings.benchmarks_for(industry)))
            .collect();
        let rendered = tables
            .iter()
            .map(|(industry, table)| self.renderer.industry(*industry, table))
            .collect();
        self.emit(&tables, rendered)
    }

    /// Prints either the JSON form of `output` or the rendered tables.
    fn emit<T: Serialize>(&self, output: &T, tables: Vec<Table>) -> Result<()> {
        if self.json {
            let json = serde_json::to_string_pretty(output).context("Failed to encode JSON")?;
            println!("{}", json);
        } else {
            for table in tables {
                println!("{}", table);
            }
        }
        Ok(())
    }
}
