pub mod api;
pub mod config;
pub mod coverage;
pub mod dataset;
pub mod editable;
pub mod metrics;

pub use api::*;
pub use config::*;
pub use coverage::*;
pub use dataset::*;
pub use editable::*;
pub use metrics::*;
