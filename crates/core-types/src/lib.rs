//! Plain value records shared by every crate in the dashboard.
//!
//! Each calculator takes one of the `*Inputs` records and produces the matching
//! `*Results` record. Nothing in here performs a calculation.

pub mod enums;
pub mod error;
pub mod inputs;
pub mod results;
pub mod thresholds;

// Re-export the core types to provide a clean public API.
pub use enums::{BenchmarkMetric, BenchmarkStatus, Industry, RoiVerdict, StepPerformance};
pub use error::CoreError;
pub use inputs::{
    BreakEvenInputs, CacInputs, ChannelSpend, FunnelStep, LtvInputs, MarketingChannel, RoiInputs,
    SroiInputs,
};
pub use results::{
    Benchmark, BreakEvenResults, CacResults, ChannelCac, FunnelResults, FunnelStepResult,
    LtvResults, MarketingChannelResults, RoiResults, SroiResults,
};
pub use thresholds::{IndustryBenchmarks, Thresholds};
