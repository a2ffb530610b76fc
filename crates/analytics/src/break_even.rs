use crate::error::AnalyticsError;
use crate::util::{div, ensure_non_negative, mul, percent};
use core_types::{BreakEvenInputs, BreakEvenResults};
use rust_decimal::prelude::*;

/// Calculates the unit volume at which revenue covers fixed plus variable costs.
///
/// The break-even unit count is rounded up, and both the break-even revenue and
/// the safety margin are derived from that rounded count. Current sales of zero
/// are treated as "not provided".
pub fn calculate_break_even(inputs: &BreakEvenInputs) -> Result<BreakEvenResults, AnalyticsError> {
    ensure_non_negative("fixed_costs", inputs.fixed_costs)?;
    ensure_non_negative("variable_cost_per_unit", inputs.variable_cost_per_unit)?;
    ensure_non_negative("price_per_unit", inputs.price_per_unit)?;

    if inputs.price_per_unit <= inputs.variable_cost_per_unit {
        tracing::warn!(
            price = %inputs.price_per_unit,
            variable_cost = %inputs.variable_cost_per_unit,
            "Break-even undefined: price does not exceed variable cost"
        );
        return Err(AnalyticsError::NonPositiveMargin {
            price: inputs.price_per_unit,
            variable_cost: inputs.variable_cost_per_unit,
        });
    }

    let contribution_margin = inputs.price_per_unit - inputs.variable_cost_per_unit;
    let exact_units = div(inputs.fixed_costs, contribution_margin, "break_even_units")?;
    let break_even_units = exact_units
        .ceil()
        .to_u64()
        .ok_or_else(|| AnalyticsError::Overflow("break_even_units".to_string()))?;
    let break_even_revenue = mul(
        Decimal::from(break_even_units),
        inputs.price_per_unit,
        "break_even_revenue",
    )?;

    tracing::debug!(
        %contribution_margin,
        %exact_units,
        break_even_units,
        %break_even_revenue,
        "Break-even computed"
    );

    let (safety_margin, safety_margin_percent) = match inputs.current_sales.filter(|s| *s > 0) {
        Some(sales) => {
            let sales = Decimal::from(sales);
            let margin = sales - Decimal::from(break_even_units);
            let margin_pct = percent(margin, sales, "safety_margin_percent")?;
            (Some(margin), Some(margin_pct))
        }
        None => (None, None),
    };

    Ok(BreakEvenResults {
        contribution_margin,
        break_even_units,
        break_even_revenue,
        safety_margin,
        safety_margin_percent,
    })
}
