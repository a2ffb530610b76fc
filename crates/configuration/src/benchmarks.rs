use core_types::{Industry, IndustryBenchmarks, Thresholds};
use rust_decimal_macros::dec;

/// Returns the built-in benchmark table for an industry.
///
/// CAC thresholds are in currency units and ascend (lower is better); the
/// remaining rows are ratios or percentages and descend.
pub fn builtin_benchmarks(industry: Industry) -> IndustryBenchmarks {
    match industry {
        Industry::Education => IndustryBenchmarks {
            cac: Thresholds::new(dec!(20), dec!(40), dec!(60)),
            ltv_cac_ratio: Thresholds::new(dec!(5), dec!(3), dec!(2)),
            retention: Thresholds::new(dec!(75), dec!(65), dec!(50)),
            gross_margin: Thresholds::new(dec!(70), dec!(60), dec!(50)),
        },
        Industry::Saas => IndustryBenchmarks {
            cac: Thresholds::new(dec!(200), dec!(350), dec!(500)),
            ltv_cac_ratio: Thresholds::new(dec!(5), dec!(3), dec!(2)),
            retention: Thresholds::new(dec!(95), dec!(90), dec!(85)),
            gross_margin: Thresholds::new(dec!(85), dec!(75), dec!(65)),
        },
        Industry::Ecommerce => IndustryBenchmarks {
            cac: Thresholds::new(dec!(15), dec!(30), dec!(50)),
            ltv_cac_ratio: Thresholds::new(dec!(4), dec!(3), dec!(2)),
            retention: Thresholds::new(dec!(40), dec!(30), dec!(20)),
            gross_margin: Thresholds::new(dec!(45), dec!(35), dec!(25)),
        },
    }
}
