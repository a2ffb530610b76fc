use crate::enums::BenchmarkMetric;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cut-off values for the excellent, good and warning tiers of one metric.
///
/// For inverse metrics (lower is better) the values ascend; for the others they descend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub excellent: Decimal,
    pub good: Decimal,
    pub warning: Decimal,
}

impl Thresholds {
    pub const fn new(excellent: Decimal, good: Decimal, warning: Decimal) -> Self {
        Self {
            excellent,
            good,
            warning,
        }
    }

    /// Whether the tiers are ordered consistently with the metric's direction.
    pub fn is_ordered(&self, inverse: bool) -> bool {
        if inverse {
            self.excellent <= self.good && self.good <= self.warning
        } else {
            self.excellent >= self.good && self.good >= self.warning
        }
    }
}

/// One industry's benchmark table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndustryBenchmarks {
    pub cac: Thresholds,
    pub ltv_cac_ratio: Thresholds,
    pub retention: Thresholds,
    pub gross_margin: Thresholds,
}

impl IndustryBenchmarks {
    pub fn thresholds(&self, metric: BenchmarkMetric) -> &Thresholds {
        match metric {
            BenchmarkMetric::Cac => &self.cac,
            BenchmarkMetric::LtvCacRatio => &self.ltv_cac_ratio,
            BenchmarkMetric::Retention => &self.retention,
            BenchmarkMetric::GrossMargin => &self.gross_margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ordering_depends_on_direction() {
        let ascending = Thresholds::new(dec!(20), dec!(40), dec!(60));
        assert!(ascending.is_ordered(true));
        assert!(!ascending.is_ordered(false));

        let descending = Thresholds::new(dec!(5), dec!(3), dec!(2));
        assert!(descending.is_ordered(false));
        assert!(!descending.is_ordered(true));
    }
}
