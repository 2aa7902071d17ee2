//! Simulated collaborator adapters

pub mod metrics;

pub use metrics::SimulatedMetricsProvider;
