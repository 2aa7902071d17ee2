//! License terms value object
//!
//! The machine-readable usage-rights contract shared with persistence and
//! the on-chain registration flow. Field names on the wire are camelCase,
//! matching the dashboard and the stored JSON.

use serde::{Deserialize, Serialize};

/// Structured usage-rights terms for a content asset
///
/// `commercial_use`, `derivatives`, `attribution`, `territory`, `channels`
/// and `timeframe` are required on deserialization; a payload missing any
/// of them is rejected. `share_alike` and `royalty` default when absent -
/// the upstream contract never required them and stored records exist
/// without them, so tightening this would reject valid data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseTerms {
    pub commercial_use: bool,
    pub derivatives: bool,
    pub attribution: bool,
    #[serde(default)]
    pub share_alike: bool,
    /// Free-form region identifiers; empty only in degenerate records
    pub territory: Vec<String>,
    /// Free-form distribution-channel identifiers
    pub channels: Vec<String>,
    /// License duration in months; 0 means perpetual
    pub timeframe: u32,
    /// Royalty percentage in [0, 100]; None or 0 means no royalty
    #[serde(default)]
    pub royalty: Option<u8>,
}
