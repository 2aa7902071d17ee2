//! Asset service
//!
//! Orchestrates the IP asset lifecycle: registration, engagement scoring,
//! settling license terms, and issuing licenses to licensees.

use std::sync::Arc;

use crate::app::scoring::compute_score;
use crate::domain::entities::{
    AssetId, IpAsset, License, LicenseTerms, NewAsset, NewLicense, ScoreResult, SocialSnapshot,
};
use crate::domain::ports::{AssetRepository, LicenseRepository};
use crate::error::{AppError, DomainError};

/// Service for managing IP assets and their licenses
pub struct AssetService<AR, LR>
where
    AR: AssetRepository,
    LR: LicenseRepository,
{
    assets: Arc<AR>,
    licenses: Arc<LR>,
}

impl<AR, LR> AssetService<AR, LR>
where
    AR: AssetRepository,
    LR: LicenseRepository,
{
    pub fn new(assets: Arc<AR>, licenses: Arc<LR>) -> Self {
        Self { assets, licenses }
    }

    /// Register a new asset
    pub async fn register(&self, new_asset: NewAsset) -> Result<IpAsset, AppError> {
        if new_asset.creator.trim().is_empty() {
            return Err(DomainError::Validation("creator address is required".to_string()).into());
        }
        if new_asset.title.trim().is_empty() {
            return Err(DomainError::Validation("title is required".to_string()).into());
        }

        let asset = self.assets.create(&new_asset).await?;
        tracing::info!("Registered asset {} for {}", asset.id, asset.creator);
        Ok(asset)
    }

    /// Get one asset
    pub async fn get(&self, id: &AssetId) -> Result<Option<IpAsset>, AppError> {
        Ok(self.assets.find_by_id(id).await?)
    }

    /// List assets, optionally restricted to one creator
    pub async fn list(
        &self,
        creator: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<IpAsset>, AppError> {
        Ok(self.assets.list(creator, limit, offset).await?)
    }

    /// Score an engagement snapshot and persist the result on the asset
    pub async fn attach_score(
        &self,
        id: &AssetId,
        snapshot: &SocialSnapshot,
    ) -> Result<ScoreResult, AppError> {
        let asset = self
            .assets
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))?;

        let result = compute_score(snapshot);
        self.assets.update_score(&asset.id, &result).await?;

        tracing::info!(
            "Scored asset {}: {} (grade {}, reward {})",
            asset.id,
            result.score,
            result.grade,
            result.reward_amount
        );
        Ok(result)
    }

    /// Persist the creator's settled license terms on the asset
    pub async fn attach_license_terms(
        &self,
        id: &AssetId,
        terms: &LicenseTerms,
    ) -> Result<(), AppError> {
        if self.assets.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Asset {} not found", id)));
        }

        self.assets.update_license_terms(id, terms).await?;
        Ok(())
    }

    /// Issue a license on an asset to a licensee
    ///
    /// With no explicit terms, the asset's settled terms are used; issuing
    /// on an asset that has none is a validation error.
    pub async fn issue_license(
        &self,
        asset_id: &AssetId,
        licensee: &str,
        terms: Option<LicenseTerms>,
    ) -> Result<License, AppError> {
        if licensee.trim().is_empty() {
            return Err(DomainError::Validation("licensee address is required".to_string()).into());
        }

        let asset = self
            .assets
            .find_by_id(asset_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", asset_id)))?;

        let terms = match terms.or(asset.license_terms) {
            Some(terms) => terms,
            None => {
                return Err(DomainError::Validation(
                    "asset has no license terms to issue under".to_string(),
                )
                .into())
            }
        };

        let license = self
            .licenses
            .create(&NewLicense {
                asset_id: asset.id,
                licensee: licensee.to_string(),
                terms,
            })
            .await?;

        tracing::info!("Issued license {} on asset {}", license.id, asset.id);
        Ok(license)
    }

    /// List licenses issued on an asset
    pub async fn licenses_for_asset(&self, asset_id: &AssetId) -> Result<Vec<License>, AppError> {
        Ok(self.licenses.find_by_asset(asset_id).await?)
    }

    /// List licenses held by a licensee address
    pub async fn licenses_for_licensee(&self, licensee: &str) -> Result<Vec<License>, AppError> {
        Ok(self.licenses.find_by_licensee(licensee).await?)
    }
}
