use crate::error::AnalyticsError;
use crate::util::percent;
use core_types::{FunnelResults, FunnelStep, FunnelStepResult, StepPerformance};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Conversion rate at or above which an unbenchmarked step is good.
const DEFAULT_GOOD_RATE: Decimal = dec!(50);
/// Conversion rate at or above which an unbenchmarked step is only a warning.
const DEFAULT_WARNING_RATE: Decimal = dec!(30);
/// Fraction of a step's benchmark that still counts as a warning rather than poor.
const BENCHMARK_WARNING_FACTOR: Decimal = dec!(0.8);

/// Calculates step-to-step conversion for an ordered funnel and flags the
/// steps that leak.
///
/// The first step converts at 100% by definition. Each step is classified on
/// its own against its benchmark, or against fixed 50/30 cut-offs when it has none.
pub fn calculate_funnel(steps: &[FunnelStep]) -> Result<FunnelResults, AnalyticsError> {
    let (first, last) = match (steps.first(), steps.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(AnalyticsError::NotEnoughData(
                "a funnel needs at least one step".to_string(),
            ));
        }
    };

    let mut results = Vec::with_capacity(steps.len());
    let mut previous: Option<&FunnelStep> = None;

    for step in steps {
        let conversion_rate = match previous {
            None => Decimal::ONE_HUNDRED,
            Some(prev) => percent(
                Decimal::from(step.value),
                Decimal::from(prev.value),
                &format!("conversion_rate[{}]", step.name),
            )?,
        };
        let performance = classify_step(conversion_rate, step.benchmark);

        tracing::debug!(
            step = %step.name,
            %conversion_rate,
            %performance,
            "Funnel step classified"
        );

        results.push(FunnelStepResult {
            name: step.name.clone(),
            value: step.value,
            conversion_rate,
            benchmark: step.benchmark,
            performance,
        });
        previous = Some(step);
    }

    let global_conversion = if steps.len() > 1 {
        percent(
            Decimal::from(last.value),
            Decimal::from(first.value),
            "global_conversion",
        )?
    } else {
        Decimal::ONE_HUNDRED
    };

    let leakage_points: Vec<String> = results
        .iter()
        .filter(|s| s.performance == StepPerformance::Poor)
        .map(|s| s.name.clone())
        .collect();
    let first_leak_uplift = (!leakage_points.is_empty()).then(|| leak_uplift(last.value));

    Ok(FunnelResults {
        steps: results,
        global_conversion,
        leakage_points,
        first_leak_uplift,
    })
}

/// A tenth of the final step, rounded half up.
fn leak_uplift(final_value: u64) -> u64 {
    final_value / 10 + u64::from(final_value % 10 >= 5)
}

/// Classifies one step's conversion rate. A zero benchmark counts as no benchmark.
pub fn classify_step(conversion_rate: Decimal, benchmark: Option<Decimal>) -> StepPerformance {
    match benchmark.filter(|b| !b.is_zero()) {
        Some(benchmark) => {
            if conversion_rate >= benchmark {
                StepPerformance::Good
            } else if conversion_rate >= benchmark * BENCHMARK_WARNING_FACTOR {
                StepPerformance::Warning
            } else {
                StepPerformance::Poor
            }
        }
        None => {
            if conversion_rate >= DEFAULT_GOOD_RATE {
                StepPerformance::Good
            } else if conversion_rate >= DEFAULT_WARNING_RATE {
                StepPerformance::Warning
            } else {
                StepPerformance::Poor
            }
        }
    }
}
