use crate::benchmarks::builtin_benchmarks;
use crate::error::ConfigError;
use core_types::{BenchmarkMetric, Industry, IndustryBenchmarks};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The root configuration structure for the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub display: Display,
    /// Industry whose benchmark table is used when none is given on the command line.
    #[serde(default)]
    pub industry: Industry,
    /// Per-industry replacements for the built-in tables.
    #[serde(default)]
    pub benchmarks: HashMap<Industry, IndustryBenchmarks>,
}

/// How numbers are rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Display {
    /// Prefix for currency amounts (e.g., "S/", "$").
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

/// Currency prefix used when none is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "S/";

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for Display {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Settings {
    /// The effective table for an industry: an override if configured, else the built-in one.
    pub fn benchmarks_for(&self, industry: Industry) -> IndustryBenchmarks {
        self.benchmarks
            .get(&industry)
            .copied()
            .unwrap_or_else(|| builtin_benchmarks(industry))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.currency_symbol.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "display.currency_symbol must not be empty".to_string(),
            ));
        }

        for (industry, table) in &self.benchmarks {
            for metric in BenchmarkMetric::ALL {
                if !table.thresholds(metric).is_ordered(metric.is_inverse()) {
                    let direction = if metric.is_inverse() {
                        "ascending"
                    } else {
                        "descending"
                    };
                    return Err(ConfigError::ValidationError(format!(
                        "benchmarks.{}.{} must be {} from excellent to warning",
                        industry, metric, direction
                    )));
                }
            }
        }

        Ok(())
    }
}
