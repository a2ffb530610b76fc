use crate::error::AnalyticsError;
use crate::util::{div, ensure_non_negative, mul, percent, sub};
use core_types::{MarketingChannel, MarketingChannelResults};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

// Efficiency score weights and caps.
const CAC_WEIGHT: Decimal = dec!(0.4);
const CONVERSION_WEIGHT: Decimal = dec!(0.3);
const ROI_WEIGHT: Decimal = dec!(0.3);
const CAC_CAP: Decimal = dec!(100);
const ROI_SCORE_CAP: Decimal = dec!(100);
const ROI_SCALE: Decimal = dec!(10);

/// Compares marketing channels on reach, cost and return.
///
/// `average_revenue` is the revenue attributed to each conversion and is shared
/// by all channels. Results are returned in input order.
pub fn calculate_marketing_channels(
    channels: &[MarketingChannel],
    average_revenue: Decimal,
) -> Result<Vec<MarketingChannelResults>, AnalyticsError> {
    ensure_non_negative("average_revenue", average_revenue)?;

    channels
        .iter()
        .map(|channel| evaluate_channel(channel, average_revenue))
        .collect()
}

fn evaluate_channel(
    channel: &MarketingChannel,
    average_revenue: Decimal,
) -> Result<MarketingChannelResults, AnalyticsError> {
    ensure_non_negative("investment", channel.investment)?;

    let metric = |name: &str| format!("{}[{}]", name, channel.name);
    let impressions = Decimal::from(channel.impressions);
    let clicks = Decimal::from(channel.clicks);
    let leads = Decimal::from(channel.leads);
    let conversions = Decimal::from(channel.conversions);

    let ctr = percent(clicks, impressions, &metric("ctr"))?;
    let cpl = div(channel.investment, leads, &metric("cpl"))?;
    let cac = div(channel.investment, conversions, &metric("cac"))?;
    let conversion_rate = percent(conversions, leads, &metric("conversion_rate"))?;
    let revenue = mul(conversions, average_revenue, &metric("revenue"))?;
    let profit = sub(revenue, channel.investment, &metric("roi"))?;
    let roi = percent(profit, channel.investment, &metric("roi"))?;
    let efficiency_score = efficiency_score(cac, conversion_rate, roi);

    tracing::debug!(
        channel = %channel.name,
        %ctr,
        %cac,
        %conversion_rate,
        %roi,
        %efficiency_score,
        "Channel evaluated"
    );

    Ok(MarketingChannelResults {
        name: channel.name.clone(),
        ctr,
        cpl,
        cac,
        conversion_rate,
        revenue,
        roi,
        efficiency_score,
    })
}

/// `(100 - min(cac, 100)) * 0.4 + conversion_rate * 0.3 + min(roi / 10, 100) * 0.3`
pub fn efficiency_score(cac: Decimal, conversion_rate: Decimal, roi: Decimal) -> Decimal {
    let cac_score = Decimal::ONE_HUNDRED - cac.min(CAC_CAP);
    let roi_score = (roi / ROI_SCALE).min(ROI_SCORE_CAP);
    cac_score * CAC_WEIGHT + conversion_rate * CONVERSION_WEIGHT + roi_score * ROI_WEIGHT
}

/// The standout channels of a comparison, without reordering it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelLeaders<'a> {
    pub best_roi: Option<&'a MarketingChannelResults>,
    pub lowest_cac: Option<&'a MarketingChannelResults>,
    pub best_conversion: Option<&'a MarketingChannelResults>,
    pub most_efficient: Option<&'a MarketingChannelResults>,
}

impl<'a> ChannelLeaders<'a> {
    pub fn from_results(results: &'a [MarketingChannelResults]) -> Self {
        Self {
            best_roi: leader(results, |r| r.roi, true),
            lowest_cac: leader(results, |r| r.cac, false),
            best_conversion: leader(results, |r| r.conversion_rate, true),
            most_efficient: leader(results, |r| r.efficiency_score, true),
        }
    }
}

/// First channel with the best value of `key`; later ties never replace it.
fn leader<'a, F>(
    results: &'a [MarketingChannelResults],
    key: F,
    higher_is_better: bool,
) -> Option<&'a MarketingChannelResults>
where
    F: Fn(&MarketingChannelResults) -> Decimal,
{
    results.iter().fold(None, |best, candidate| match best {
        Some(current) => {
            let (current_value, candidate_value) = (key(current), key(candidate));
            let better = if higher_is_better {
                candidate_value > current_value
            } else {
                candidate_value < current_value
            };
            Some(if better { candidate } else { current })
        }
        None => Some(candidate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(
        name: &str,
        investment: Decimal,
        impressions: u64,
        clicks: u64,
        leads: u64,
        conversions: u64,
    ) -> MarketingChannel {
        MarketingChannel {
            name: name.to_string(),
            investment,
            impressions,
            clicks,
            leads,
            conversions,
        }
    }

    fn pilot_channels() -> Vec<MarketingChannel> {
        vec![
            channel("Facebook Ads", dec!(720), 48000, 4800, 816, 139),
            channel("Instagram Ads", dec!(420), 28000, 2800, 476, 81),
            channel("Google Ads", dec!(300), 20000, 2000, 340, 58),
            channel("Organic", dec!(60), 4000, 400, 68, 11),
        ]
    }

    #[test]
    fn test_facebook_channel_metrics() {
        let results = calculate_marketing_channels(&pilot_channels(), dec!(75)).unwrap();
        let facebook = &results[0];

        assert_eq!(facebook.name, "Facebook Ads");
        assert_eq!(facebook.ctr, dec!(10));
        assert_eq!(facebook.cpl.round_dp(2), dec!(0.88));
        assert_eq!(facebook.cac.round_dp(2), dec!(5.18));
        assert_eq!(facebook.conversion_rate.round_dp(2), dec!(17.03));
        assert_eq!(facebook.revenue, dec!(10425));
        assert_eq!(facebook.roi.round_dp(2), dec!(1347.92));
        // ROI score is capped at 100, so it contributes exactly 30 points.
        assert_eq!(facebook.efficiency_score.round_dp(2), dec!(73.04));
    }

    #[test]
    fn test_results_keep_input_order() {
        let results = calculate_marketing_channels(&pilot_channels(), dec!(75)).unwrap();
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Facebook Ads", "Instagram Ads", "Google Ads", "Organic"]);
    }

    #[test]
    fn test_efficiency_score_weights_and_caps() {
        // cac 20 -> 80 * 0.4; conversion 10 -> 3; roi 500 -> 50 * 0.3
        assert_eq!(efficiency_score(dec!(20), dec!(10), dec!(500)), dec!(50));
        // Expensive channels bottom out at zero on the CAC component.
        assert_eq!(efficiency_score(dec!(250), Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
        // Losses are not floored.
        assert_eq!(efficiency_score(dec!(100), Decimal::ZERO, dec!(-50)), dec!(-1.5));
    }

    #[test]
    fn test_channel_leaders() {
        let results = calculate_marketing_channels(&pilot_channels(), dec!(75)).unwrap();
        let leaders = ChannelLeaders::from_results(&results);

        assert_eq!(leaders.best_roi.unwrap().name, "Google Ads");
        assert_eq!(leaders.lowest_cac.unwrap().name, "Google Ads");
        assert_eq!(leaders.best_conversion.unwrap().name, "Google Ads");
        assert_eq!(leaders.most_efficient.unwrap().name, "Google Ads");
    }

    #[test]
    fn test_leader_ties_go_to_first_channel() {
        let twins = vec![
            channel("A", dec!(100), 1000, 100, 50, 10),
            channel("B", dec!(100), 1000, 100, 50, 10),
        ];
        let results = calculate_marketing_channels(&twins, dec!(20)).unwrap();
        let leaders = ChannelLeaders::from_results(&results);
        assert_eq!(leaders.best_roi.unwrap().name, "A");
        assert_eq!(leaders.lowest_cac.unwrap().name, "A");
    }

    #[test]
    fn test_no_channels_no_leaders() {
        let leaders = ChannelLeaders::from_results(&[]);
        assert!(leaders.best_roi.is_none());
        assert!(leaders.most_efficient.is_none());
    }

    #[test]
    fn test_zero_denominators_name_the_channel() {
        let mut channels = pilot_channels();
        channels[1].conversions = 0;
        assert_eq!(
            calculate_marketing_channels(&channels, dec!(75)),
            Err(AnalyticsError::DivisionByZero("cac[Instagram Ads]".into()))
        );

        let free = vec![channel("Referral", Decimal::ZERO, 10, 1, 1, 1)];
        assert_eq!(
            calculate_marketing_channels(&free, dec!(75)),
            Err(AnalyticsError::DivisionByZero("roi[Referral]".into()))
        );
    }
}
