//! # Report
//!
//! Turns analytics results into something a person can read: rounded,
//! currency-prefixed figures and colour-coded terminal tables.
//!
//! ## Architectural Principles
//!
//! - **Layer 2 Presentation:** Depends on `core-types` and `analytics` and performs
//!   no calculation of its own beyond rounding for display.
//! - **Display Only:** Figures are rounded here and nowhere else, so JSON output of
//!   the same results keeps full precision.

pub mod format;
pub mod tables;

pub use format::{format_currency, format_number, format_percent, format_ratio};
pub use tables::TableRenderer;
