use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Cost structure for a single-product break-even analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenInputs {
    pub fixed_costs: Decimal,
    pub variable_cost_per_unit: Decimal,
    pub price_per_unit: Decimal,
    /// Units currently sold per period; enables the safety-margin figures.
    #[serde(default)]
    pub current_sales: Option<u64>,
}

/// Spend and customers for one acquisition channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSpend {
    pub name: String,
    pub investment: Decimal,
    pub customers: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacInputs {
    pub total_marketing_investment: Decimal,
    pub customers_acquired: u64,
    #[serde(default)]
    pub channels: Option<Vec<ChannelSpend>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LtvInputs {
    pub average_purchase_price: Decimal,
    /// Purchases per period.
    pub purchase_frequency: Decimal,
    /// Percent of customers retained each period, strictly below 100.
    pub retention_rate: Decimal,
    /// Percent.
    pub gross_margin: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    pub total_investment: Decimal,
    pub revenue_generated: Decimal,
    pub operational_costs: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SroiInputs {
    pub social_investment: Decimal,
    pub direct_beneficiaries: u64,
    pub value_per_beneficiary: Decimal,
    /// Percent of the outcome that would have happened anyway.
    pub deadweight: Decimal,
    /// Percent of the outcome credited to this intervention.
    pub attribution: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStep {
    pub name: String,
    pub value: u64,
    /// Target conversion rate from the previous step, in percent.
    #[serde(default)]
    pub benchmark: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketingChannel {
    pub name: String,
    pub investment: Decimal,
    pub impressions: u64,
    pub clicks: u64,
    pub leads: u64,
    pub conversions: u64,
}

// --- Compact `name:field:field` parsing used by the command line ---

fn split_fields<'a>(
    record: &'static str,
    s: &'a str,
    arity: &[usize],
) -> Result<Vec<&'a str>, CoreError> {
    let fields: Vec<&str> = s.split(':').map(str::trim).collect();
    if !arity.contains(&fields.len()) {
        return Err(CoreError::InvalidInput(
            record.to_string(),
            format!(
                "expected {:?} ':'-separated fields, got {} in '{}'",
                arity,
                fields.len(),
                s
            ),
        ));
    }
    if fields[0].is_empty() {
        return Err(CoreError::InvalidInput(
            record.to_string(),
            "name must not be empty".to_string(),
        ));
    }
    Ok(fields)
}

fn parse_decimal(field: &str, raw: &str) -> Result<Decimal, CoreError> {
    Decimal::from_str(raw)
        .map_err(|e| CoreError::InvalidInput(field.to_string(), format!("'{}': {}", raw, e)))
}

fn parse_count(field: &str, raw: &str) -> Result<u64, CoreError> {
    raw.parse::<u64>()
        .map_err(|e| CoreError::InvalidInput(field.to_string(), format!("'{}': {}", raw, e)))
}

/// Parses `name:investment:customers`.
impl FromStr for ChannelSpend {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let f = split_fields("channel", s, &[3])?;
        Ok(Self {
            name: f[0].to_string(),
            investment: parse_decimal("investment", f[1])?,
            customers: parse_count("customers", f[2])?,
        })
    }
}

/// Parses `name:value` or `name:value:benchmark`.
impl FromStr for FunnelStep {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let f = split_fields("step", s, &[2, 3])?;
        let benchmark = match f.get(2) {
            Some(raw) if !raw.is_empty() => Some(parse_decimal("benchmark", raw)?),
            _ => None,
        };
        Ok(Self {
            name: f[0].to_string(),
            value: parse_count("value", f[1])?,
            benchmark,
        })
    }
}

/// Parses `name:investment:impressions:clicks:leads:conversions`.
impl FromStr for MarketingChannel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let f = split_fields("marketing channel", s, &[6])?;
        Ok(Self {
            name: f[0].to_string(),
            investment: parse_decimal("investment", f[1])?,
            impressions: parse_count("impressions", f[2])?,
            clicks: parse_count("clicks", f[3])?,
            leads: parse_count("leads", f[4])?,
            conversions: parse_count("conversions", f[5])?,
        })
    }
}
