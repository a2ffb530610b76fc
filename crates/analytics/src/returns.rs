use crate::error::AnalyticsError;
use crate::util::{div, ensure_non_negative, ensure_percent, fraction, mul, percent, sub};
use core_types::{RoiInputs, RoiResults, RoiVerdict, SroiInputs, SroiResults};
use rust_decimal::Decimal;

/// Calculates return on investment.
///
/// `total_investment` is treated as a cost on top of `operational_costs`: it is
/// subtracted from net profit before dividing by itself.
pub fn calculate_roi(inputs: &RoiInputs) -> Result<RoiResults, AnalyticsError> {
    ensure_non_negative("total_investment", inputs.total_investment)?;
    ensure_non_negative("revenue_generated", inputs.revenue_generated)?;
    ensure_non_negative("operational_costs", inputs.operational_costs)?;

    let net_profit = sub(inputs.revenue_generated, inputs.operational_costs, "net_profit")?;
    let gain = sub(net_profit, inputs.total_investment, "roi_percent")?;
    let roi_percent = percent(gain, inputs.total_investment, "roi_percent")?;
    let net_margin = percent(net_profit, inputs.revenue_generated, "net_margin")?;
    let return_per_unit = Decimal::ONE + fraction(roi_percent);
    let verdict = roi_verdict(roi_percent);

    tracing::debug!(%net_profit, %roi_percent, %net_margin, %verdict, "ROI computed");

    Ok(RoiResults {
        net_profit,
        roi_percent,
        net_margin,
        return_per_unit,
        verdict,
    })
}

/// Exceptional from 100% up, positive from 0%, negative below.
pub fn roi_verdict(roi_percent: Decimal) -> RoiVerdict {
    if roi_percent >= Decimal::ONE_HUNDRED {
        RoiVerdict::Exceptional
    } else if roi_percent >= Decimal::ZERO {
        RoiVerdict::Positive
    } else {
        RoiVerdict::Negative
    }
}

/// Calculates social return on investment, discounted for deadweight and attribution.
///
/// The result is a ratio of net social value to investment, not a percentage.
pub fn calculate_sroi(inputs: &SroiInputs) -> Result<SroiResults, AnalyticsError> {
    ensure_non_negative("social_investment", inputs.social_investment)?;
    ensure_non_negative("value_per_beneficiary", inputs.value_per_beneficiary)?;
    ensure_percent("deadweight", inputs.deadweight)?;
    ensure_percent("attribution", inputs.attribution)?;

    let gross_value = mul(
        Decimal::from(inputs.direct_beneficiaries),
        inputs.value_per_beneficiary,
        "gross_value",
    )?;
    let retained = Decimal::ONE - fraction(inputs.deadweight);
    let net_value = mul(
        mul(gross_value, retained, "net_value")?,
        fraction(inputs.attribution),
        "net_value",
    )?;
    let sroi = div(net_value, inputs.social_investment, "sroi")?;

    tracing::debug!(%gross_value, %net_value, %sroi, "SROI computed");

    Ok(SroiResults {
        gross_value,
        net_value,
        sroi,
    })
}
