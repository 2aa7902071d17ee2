//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod llm;
pub mod metrics;
pub mod repositories;

pub use llm::{ChatRequest, LlmClient};
pub use metrics::MetricsProvider;
pub use repositories::{AssetRepository, LicenseRepository};
