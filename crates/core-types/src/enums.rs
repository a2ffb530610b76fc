use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Four-tier verdict of a metric against an industry threshold triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkStatus {
    Excellent,
    Good,
    Warning,
    Poor,
}

impl BenchmarkStatus {
    /// True for the two tiers a dashboard shows as healthy.
    pub fn is_healthy(&self) -> bool {
        matches!(self, BenchmarkStatus::Excellent | BenchmarkStatus::Good)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BenchmarkStatus::Excellent => "excellent",
            BenchmarkStatus::Good => "good",
            BenchmarkStatus::Warning => "warning",
            BenchmarkStatus::Poor => "poor",
        }
    }
}

impl fmt::Display for BenchmarkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a single funnel step's conversion rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepPerformance {
    Good,
    Warning,
    Poor,
}

impl fmt::Display for StepPerformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StepPerformance::Good => "good",
            StepPerformance::Warning => "warning",
            StepPerformance::Poor => "poor",
        };
        f.write_str(label)
    }
}

/// Overall reading of an ROI percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoiVerdict {
    /// The investment at least doubled.
    Exceptional,
    Positive,
    Negative,
}

impl fmt::Display for RoiVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RoiVerdict::Exceptional => "exceptional",
            RoiVerdict::Positive => "positive",
            RoiVerdict::Negative => "negative",
        };
        f.write_str(label)
    }
}

/// Industries that ship with a built-in benchmark table.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    #[default]
    Education,
    Saas,
    Ecommerce,
}

impl Industry {
    pub const ALL: [Industry; 3] = [Industry::Education, Industry::Saas, Industry::Ecommerce];

    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Education => "education",
            Industry::Saas => "saas",
            Industry::Ecommerce => "ecommerce",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Industry {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "education" => Ok(Industry::Education),
            "saas" => Ok(Industry::Saas),
            "ecommerce" | "e-commerce" => Ok(Industry::Ecommerce),
            other => Err(CoreError::UnknownVariant {
                kind: "industry",
                value: other.to_string(),
            }),
        }
    }
}

/// A metric that has a row in the industry benchmark tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkMetric {
    Cac,
    LtvCacRatio,
    Retention,
    GrossMargin,
}

impl BenchmarkMetric {
    pub const ALL: [BenchmarkMetric; 4] = [
        BenchmarkMetric::Cac,
        BenchmarkMetric::LtvCacRatio,
        BenchmarkMetric::Retention,
        BenchmarkMetric::GrossMargin,
    ];

    /// Lower is better for acquisition cost; higher is better for everything else.
    pub fn is_inverse(&self) -> bool {
        matches!(self, BenchmarkMetric::Cac)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BenchmarkMetric::Cac => "cac",
            BenchmarkMetric::LtvCacRatio => "ltv_cac_ratio",
            BenchmarkMetric::Retention => "retention",
            BenchmarkMetric::GrossMargin => "gross_margin",
        }
    }
}

impl fmt::Display for BenchmarkMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BenchmarkMetric {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "cac" => Ok(BenchmarkMetric::Cac),
            "ltv_cac_ratio" | "ltv_cac" => Ok(BenchmarkMetric::LtvCacRatio),
            "retention" => Ok(BenchmarkMetric::Retention),
            "gross_margin" => Ok(BenchmarkMetric::GrossMargin),
            other => Err(CoreError::UnknownVariant {
                kind: "metric",
                value: other.to_string(),
            }),
        }
    }
}
