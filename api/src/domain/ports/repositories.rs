//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    AssetId, IpAsset, License, LicenseTerms, NewAsset, NewLicense, ScoreResult,
};
use crate::error::DomainError;

/// Repository for IP asset entities
#[async_trait]
pub trait AssetRepository: Send + Sync {
    /// Find an asset by ID
    async fn find_by_id(&self, id: &AssetId) -> Result<Option<IpAsset>, DomainError>;

    /// List assets, newest first, optionally filtered by creator address
    async fn list(
        &self,
        creator: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<IpAsset>, DomainError>;

    /// Register a new asset
    async fn create(&self, asset: &NewAsset) -> Result<IpAsset, DomainError>;

    /// Persist a computed score on an asset
    async fn update_score(&self, id: &AssetId, result: &ScoreResult) -> Result<(), DomainError>;

    /// Persist the creator's settled license terms on an asset
    async fn update_license_terms(
        &self,
        id: &AssetId,
        terms: &LicenseTerms,
    ) -> Result<(), DomainError>;
}

/// Repository for issued licenses
#[async_trait]
pub trait LicenseRepository: Send + Sync {
    /// Issue a new license
    async fn create(&self, license: &NewLicense) -> Result<License, DomainError>;

    /// List licenses issued on an asset, newest first
    async fn find_by_asset(&self, asset_id: &AssetId) -> Result<Vec<License>, DomainError>;

    /// List licenses held by a licensee address, newest first
    async fn find_by_licensee(&self, licensee: &str) -> Result<Vec<License>, DomainError>;
}
