//! Shared types for the Nasma metrics dashboard
//!
//! This crate contains the types shared between the client core and the
//! server: the response envelope, the per-metric row shapes, the chart
//! configuration handed to the charting layer, and the common error enum.

pub mod chart_config;
pub mod envelope;
pub mod errors;
pub mod metrics;

pub use chart_config::{ChartConfig, ChartKind, SeriesSpec};
pub use envelope::ApiEnvelope;
pub use errors::{DashboardError, DashboardResult};
pub use metrics::*;
