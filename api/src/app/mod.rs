//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod asset_service;
pub mod license_renderer;
pub mod license_service;
pub mod scoring;
pub mod scoring_config;
pub mod snapshot_service;

pub use asset_service::AssetService;
pub use license_renderer::{describe_terms, render_description};
pub use license_service::{fallback_terms, LicenseService};
pub use scoring::{compute_score, reward_for_grade, reward_for_score};
pub use snapshot_service::{supported_platforms, PlatformInfo, SnapshotService};
// Re-export scoring config for public API (constants used by consumers)
#[allow(unused_imports)]
pub use scoring_config::*;
