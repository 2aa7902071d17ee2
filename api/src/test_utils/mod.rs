//! Test utilities
//!
//! In-memory port implementations and fixture factories used by unit and
//! integration tests.

pub mod fixtures;
pub mod mocks;

pub use fixtures::{test_answers, test_asset, test_snapshot, test_terms};
pub use mocks::{
    FixedMetricsProvider, InMemoryAssetRepository, InMemoryLicenseRepository, ScriptedLlmClient,
};
