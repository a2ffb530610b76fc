//! # KPI Analytics
//!
//! This crate holds every business-metric calculation the dashboard performs:
//! break-even, customer acquisition cost, lifetime value, ROI and social ROI,
//! conversion funnels and marketing-channel comparison, plus the benchmark
//! classifier that grades a metric against an industry table.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It depends only on `core-types`
//!   (Layer 0) and knows nothing about configuration files or the terminal.
//! - **Stateless Calculation:** Every calculator is a free function from an input
//!   record to a result record. Calling one twice with the same input gives the
//!   same output.
//! - **Checked Arithmetic:** Inputs that would divide by zero, overflow, or make a
//!   formula meaningless are rejected with an `AnalyticsError` instead of panicking.

pub mod acquisition;
pub mod benchmark;
pub mod break_even;
pub mod channels;
pub mod error;
pub mod funnel;
pub mod returns;
mod util;

// Re-export the key components to create a clean, public-facing API.
pub use acquisition::{calculate_cac, calculate_ltv, cheapest_channel};
pub use benchmark::{assess, get_benchmark_status, recommendation};
pub use break_even::calculate_break_even;
pub use channels::{ChannelLeaders, calculate_marketing_channels, efficiency_score};
pub use error::AnalyticsError;
pub use funnel::{calculate_funnel, classify_step};
pub use returns::{calculate_roi, calculate_sroi, roi_verdict};
