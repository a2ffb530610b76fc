use crate::error::AnalyticsError;
use crate::util::{div, ensure_non_negative, ensure_percent, fraction, mul, percent, sub};
use core_types::{CacInputs, CacResults, ChannelCac, LtvInputs, LtvResults};
use rust_decimal::Decimal;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Calculates the blended customer acquisition cost and, when a channel
/// breakdown is given, the cost and customer share of each channel.
///
/// Channels are returned in input order. A channel with zero customers is an
/// error; callers that want to ignore such channels should drop them first.
pub fn calculate_cac(inputs: &CacInputs) -> Result<CacResults, AnalyticsError> {
    ensure_non_negative("total_marketing_investment", inputs.total_marketing_investment)?;

    let customers_acquired = Decimal::from(inputs.customers_acquired);
    let total_cac = div(inputs.total_marketing_investment, customers_acquired, "total_cac")?;

    let channel_cacs = match &inputs.channels {
        Some(channels) => {
            let mut out = Vec::with_capacity(channels.len());
            for channel in channels {
                ensure_non_negative("channel.investment", channel.investment)?;
                let customers = Decimal::from(channel.customers);
                out.push(ChannelCac {
                    name: channel.name.clone(),
                    cac: div(channel.investment, customers, &format!("cac[{}]", channel.name))?,
                    efficiency: percent(
                        customers,
                        customers_acquired,
                        &format!("efficiency[{}]", channel.name),
                    )?,
                });
            }
            Some(out)
        }
        None => None,
    };

    tracing::debug!(
        %total_cac,
        channels = channel_cacs.as_ref().map_or(0, Vec::len),
        "CAC computed"
    );

    Ok(CacResults {
        total_cac,
        channel_cacs,
    })
}

/// The channel with the lowest acquisition cost; the earliest one wins a tie.
pub fn cheapest_channel(results: &CacResults) -> Option<&ChannelCac> {
    results.channel_cacs.as_deref()?.iter().min_by_key(|c| c.cac)
}

/// Calculates customer lifetime value from purchase behaviour and retention.
///
/// `cac`, when given and non-zero, adds the LTV:CAC ratio and the payback
/// period in months.
pub fn calculate_ltv(
    inputs: &LtvInputs,
    cac: Option<Decimal>,
) -> Result<LtvResults, AnalyticsError> {
    if inputs.retention_rate >= Decimal::ONE_HUNDRED {
        tracing::warn!(
            retention_rate = %inputs.retention_rate,
            "LTV undefined: retention at or above 100%"
        );
        return Err(AnalyticsError::RetentionOutOfRange(inputs.retention_rate));
    }
    ensure_percent("retention_rate", inputs.retention_rate)?;
    ensure_percent("gross_margin", inputs.gross_margin)?;
    ensure_non_negative("average_purchase_price", inputs.average_purchase_price)?;
    ensure_non_negative("purchase_frequency", inputs.purchase_frequency)?;
    if let Some(cac) = cac {
        ensure_non_negative("cac", cac)?;
    }

    let churn = sub(Decimal::ONE, fraction(inputs.retention_rate), "customer_lifespan")?;
    let customer_lifespan = div(Decimal::ONE, churn, "customer_lifespan")?;
    let total_purchases = mul(customer_lifespan, inputs.purchase_frequency, "total_purchases")?;
    let gross_ltv = mul(inputs.average_purchase_price, total_purchases, "gross_ltv")?;
    let net_ltv = mul(gross_ltv, fraction(inputs.gross_margin), "net_ltv")?;

    let cac = cac.filter(|c| !c.is_zero());
    let ltv_cac_ratio = cac.map(|c| div(net_ltv, c, "ltv_cac_ratio")).transpose()?;
    let payback_months = cac.and_then(|c| payback_months(inputs, c));

    tracing::debug!(
        %customer_lifespan,
        %total_purchases,
        %gross_ltv,
        %net_ltv,
        ?ltv_cac_ratio,
        "LTV computed"
    );

    Ok(LtvResults {
        customer_lifespan,
        total_purchases,
        gross_ltv,
        net_ltv,
        ltv_cac_ratio,
        payback_months,
    })
}

/// `cac / (price * margin) * 12 / frequency`, or `None` when a factor is zero.
fn payback_months(inputs: &LtvInputs, cac: Decimal) -> Option<Decimal> {
    let margin_per_purchase = inputs
        .average_purchase_price
        .checked_mul(fraction(inputs.gross_margin))?;
    if margin_per_purchase.is_zero() || inputs.purchase_frequency.is_zero() {
        return None;
    }
    cac.checked_div(margin_per_purchase)?
        .checked_mul(MONTHS_PER_YEAR)?
        .checked_div(inputs.purchase_frequency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::ChannelSpend;
    use rust_decimal_macros::dec;

    fn pilot_channels() -> Vec<ChannelSpend> {
        vec![
            ChannelSpend { name: "Facebook Ads".into(), investment: dec!(720), customers: 139 },
            ChannelSpend { name: "Instagram Ads".into(), investment: dec!(420), customers: 81 },
            ChannelSpend { name: "Google Ads".into(), investment: dec!(300), customers: 58 },
            ChannelSpend { name: "Organic".into(), investment: dec!(60), customers: 11 },
        ]
    }

    fn pilot_ltv() -> LtvInputs {
        LtvInputs {
            average_purchase_price: dec!(75),
            purchase_frequency: dec!(4),
            retention_rate: dec!(70),
            gross_margin: dec!(75),
        }
    }

    #[test]
    fn test_total_cac() {
        let results = calculate_cac(&CacInputs {
            total_marketing_investment: dec!(1500),
            customers_acquired: 289,
            channels: None,
        })
        .unwrap();

        assert_eq!(results.total_cac.round_dp(2), dec!(5.19));
        assert!(results.channel_cacs.is_none());
    }

    #[test]
    fn test_channel_breakdown_keeps_input_order() {
        let results = calculate_cac(&CacInputs {
            total_marketing_investment: dec!(1500),
            customers_acquired: 289,
            channels: Some(pilot_channels()),
        })
        .unwrap();

        let channels = results.channel_cacs.as_ref().unwrap();
        let names: Vec<_> = channels.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Facebook Ads", "Instagram Ads", "Google Ads", "Organic"]);

        assert_eq!(channels[0].cac.round_dp(2), dec!(5.18));
        assert_eq!(channels[0].efficiency.round_dp(2), dec!(48.10));

        let share: Decimal = channels.iter().map(|c| c.efficiency).sum();
        assert_eq!(share.round_dp(6), dec!(100));

        assert_eq!(cheapest_channel(&results).unwrap().name, "Google Ads");
    }

    #[test]
    fn test_zero_customers_is_an_error() {
        let err = calculate_cac(&CacInputs {
            total_marketing_investment: dec!(1500),
            customers_acquired: 0,
            channels: None,
        })
        .unwrap_err();
        assert_eq!(err, AnalyticsError::DivisionByZero("total_cac".into()));

        let mut channels = pilot_channels();
        channels[3].customers = 0;
        let err = calculate_cac(&CacInputs {
            total_marketing_investment: dec!(1500),
            customers_acquired: 278,
            channels: Some(channels),
        })
        .unwrap_err();
        assert_eq!(err, AnalyticsError::DivisionByZero("cac[Organic]".into()));
    }

    #[test]
    fn test_ltv_pilot_scenario() {
        let results = calculate_ltv(&pilot_ltv(), Some(dec!(5.19))).unwrap();

        assert_eq!(results.customer_lifespan.round_dp(4), dec!(3.3333));
        assert_eq!(results.total_purchases.round_dp(4), dec!(13.3333));
        assert_eq!(results.gross_ltv.round_dp(2), dec!(1000));
        assert_eq!(results.net_ltv.round_dp(2), dec!(750));
        assert_eq!(results.ltv_cac_ratio.unwrap().round_dp(1), dec!(144.5));
        // 5.19 / 56.25 * 12 / 4
        assert_eq!(results.payback_months.unwrap().round_dp(2), dec!(0.28));
    }

    #[test]
    fn test_ltv_without_cac_omits_ratio() {
        let results = calculate_ltv(&pilot_ltv(), None).unwrap();
        assert_eq!(results.ltv_cac_ratio, None);
        assert_eq!(results.payback_months, None);

        let zero = calculate_ltv(&pilot_ltv(), Some(Decimal::ZERO)).unwrap();
        assert_eq!(zero.ltv_cac_ratio, None);
    }

    #[test]
    fn test_ltv_zero_retention_is_single_period() {
        let mut inputs = pilot_ltv();
        inputs.retention_rate = Decimal::ZERO;
        let results = calculate_ltv(&inputs, None).unwrap();
        assert_eq!(results.customer_lifespan, Decimal::ONE);
        assert_eq!(results.gross_ltv, dec!(300));
    }

    #[test]
    fn test_ltv_rejects_full_retention() {
        let mut inputs = pilot_ltv();
        inputs.retention_rate = dec!(100);
        assert_eq!(
            calculate_ltv(&inputs, None),
            Err(AnalyticsError::RetentionOutOfRange(dec!(100)))
        );
    }

    #[test]
    fn test_ltv_rejects_out_of_range_inputs() {
        let mut inputs = pilot_ltv();
        inputs.retention_rate = dec!(-10);
        assert_eq!(
            calculate_ltv(&inputs, None),
            Err(AnalyticsError::PercentOutOfRange {
                field: "retention_rate",
                value: dec!(-10)
            })
        );

        let mut inputs = pilot_ltv();
        inputs.gross_margin = dec!(250);
        assert!(matches!(
            calculate_ltv(&inputs, None),
            Err(AnalyticsError::PercentOutOfRange { field: "gross_margin", .. })
        ));

        let mut inputs = pilot_ltv();
        inputs.average_purchase_price = dec!(-75);
        assert!(matches!(
            calculate_ltv(&inputs, None),
            Err(AnalyticsError::NegativeInput { field: "average_purchase_price", .. })
        ));

        let mut inputs = pilot_ltv();
        inputs.purchase_frequency = dec!(-4);
        assert!(matches!(
            calculate_ltv(&inputs, None),
            Err(AnalyticsError::NegativeInput { field: "purchase_frequency", .. })
        ));

        assert_eq!(
            calculate_ltv(&pilot_ltv(), Some(dec!(-5))),
            Err(AnalyticsError::NegativeInput {
                field: "cac",
                value: dec!(-5)
            })
        );
    }

    #[test]
    fn test_payback_needs_margin_and_frequency() {
        let mut inputs = pilot_ltv();
        inputs.gross_margin = Decimal::ZERO;
        let results = calculate_ltv(&inputs, Some(dec!(5.19))).unwrap();
        assert_eq!(results.payback_months, None);
    }
}
