//! Figures from the education pilot, loaded by `--example`.
//!
//! They describe a small academy that spent S/1,500 on four channels and
//! enrolled 289 students.

use core_types::{
    BreakEvenInputs, CacInputs, ChannelSpend, FunnelStep, LtvInputs, MarketingChannel, RoiInputs,
    SroiInputs,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// CAC fed into the LTV example, the pilot's total CAC rounded to cents.
pub const LTV_CAC: Decimal = dec!(5.19);

/// Revenue attributed to each conversion in the channel comparison.
pub const AVERAGE_REVENUE: Decimal = dec!(75);

pub fn break_even() -> BreakEvenInputs {
    BreakEvenInputs {
        fixed_costs: dec!(14057),
        variable_cost_per_unit: dec!(13.11),
        price_per_unit: dec!(37.50),
        current_sales: Some(289),
    }
}

pub fn cac() -> CacInputs {
    let spend = |name: &str, investment: Decimal, customers: u64| ChannelSpend {
        name: name.to_string(),
        investment,
        customers,
    };

    CacInputs {
        total_marketing_investment: dec!(1500),
        customers_acquired: 289,
        channels: Some(vec![
            spend("Facebook Ads", dec!(720), 139),
            spend("Instagram Ads", dec!(420), 81),
            spend("Google Ads", dec!(300), 58),
            spend("Organic", dec!(60), 11),
        ]),
    }
}

pub fn ltv() -> LtvInputs {
    LtvInputs {
        average_purchase_price: dec!(75),
        purchase_frequency: dec!(4),
        retention_rate: dec!(70),
        gross_margin: dec!(75),
    }
}

pub fn roi() -> RoiInputs {
    RoiInputs {
        total_investment: dec!(5000),
        revenue_generated: dec!(21656),
        operational_costs: dec!(3500),
    }
}

pub fn sroi() -> SroiInputs {
    SroiInputs {
        social_investment: dec!(5000),
        direct_beneficiaries: 289,
        value_per_beneficiary: dec!(676),
        deadweight: dec!(10),
        attribution: dec!(80),
    }
}

pub fn funnel() -> Vec<FunnelStep> {
    let step = |name: &str, value: u64, benchmark: Option<Decimal>| FunnelStep {
        name: name.to_string(),
        value,
        benchmark,
    };

    vec![
        step("Leads", 1700, None),
        step("Contacted", 870, Some(dec!(60))),
        step("Interested", 510, Some(dec!(60))),
        step("Enrolled", 289, Some(dec!(50))),
    ]
}

pub fn channels() -> Vec<MarketingChannel> {
    let channel = |name: &str, investment: Decimal, reach: [u64; 4]| MarketingChannel {
        name: name.to_string(),
        investment,
        impressions: reach[0],
        clicks: reach[1],
        leads: reach[2],
        conversions: reach[3],
    };

    vec![
        channel("Facebook Ads", dec!(720), [48000, 4800, 816, 139]),
        channel("Instagram Ads", dec!(420), [28000, 2800, 476, 81]),
        channel("Google Ads", dec!(300), [20000, 2000, 340, 58]),
        channel("Organic", dec!(60), [4000, 400, 68, 11]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_customers_add_up_to_total() {
        let inputs = cac();
        let channel_total: u64 = inputs.channels.iter().flatten().map(|c| c.customers).sum();
        assert_eq!(channel_total, inputs.customers_acquired);

        let spend: Decimal = inputs.channels.iter().flatten().map(|c| c.investment).sum();
        assert_eq!(spend, inputs.total_marketing_investment);
    }

    #[test]
    fn test_comparison_matches_acquisition_channels() {
        let conversions: Vec<_> = channels().iter().map(|c| c.conversions).collect();
        let customers: Vec<_> = cac().channels.unwrap().iter().map(|c| c.customers).collect();
        assert_eq!(conversions, customers);
    }
}
