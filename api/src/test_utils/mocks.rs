//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::domain::entities::{
    AssetId, IpAsset, License, LicenseId, LicenseTerms, NewAsset, NewLicense, ScoreResult,
    SocialSnapshot,
};
use crate::domain::ports::{
    AssetRepository, ChatRequest, LicenseRepository, LlmClient, MetricsProvider,
};
use crate::error::{DomainError, LlmError};

// ============================================================================
// In-Memory Asset Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryAssetRepository {
    assets: Arc<RwLock<HashMap<AssetId, IpAsset>>>,
}

impl InMemoryAssetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an asset for testing
    pub fn with_asset(self, asset: IpAsset) -> Self {
        {
            let mut assets = self.assets.write().unwrap();
            assets.insert(asset.id, asset);
        }
        self
    }
}

#[async_trait]
impl AssetRepository for InMemoryAssetRepository {
    async fn find_by_id(&self, id: &AssetId) -> Result<Option<IpAsset>, DomainError> {
        let assets = self.assets.read().unwrap();
        Ok(assets.get(id).cloned())
    }

    async fn list(
        &self,
        creator: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<IpAsset>, DomainError> {
        let assets = self.assets.read().unwrap();
        let mut matching: Vec<IpAsset> = assets
            .values()
            .filter(|a| creator.map_or(true, |c| a.creator == c))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn create(&self, new_asset: &NewAsset) -> Result<IpAsset, DomainError> {
        let asset = IpAsset {
            id: AssetId(Uuid::new_v4()),
            creator: new_asset.creator.clone(),
            title: new_asset.title.clone(),
            description: new_asset.description.clone(),
            content_type: new_asset.content_type,
            ipfs_hash: new_asset.ipfs_hash.clone(),
            score: None,
            grade: None,
            reward_amount: None,
            license_terms: None,
            created_at: Utc::now(),
        };

        let mut assets = self.assets.write().unwrap();
        assets.insert(asset.id, asset.clone());
        Ok(asset)
    }

    async fn update_score(&self, id: &AssetId, result: &ScoreResult) -> Result<(), DomainError> {
        let mut assets = self.assets.write().unwrap();
        let asset = assets
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;
        asset.score = Some(result.score);
        asset.grade = Some(result.grade);
        asset.reward_amount = Some(result.reward_amount);
        Ok(())
    }

    async fn update_license_terms(
        &self,
        id: &AssetId,
        terms: &LicenseTerms,
    ) -> Result<(), DomainError> {
        let mut assets = self.assets.write().unwrap();
        let asset = assets
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;
        asset.license_terms = Some(terms.clone());
        Ok(())
    }
}

// ============================================================================
// In-Memory License Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryLicenseRepository {
    licenses: Arc<RwLock<Vec<License>>>,
}

impl InMemoryLicenseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LicenseRepository for InMemoryLicenseRepository {
    async fn create(&self, new_license: &NewLicense) -> Result<License, DomainError> {
        let license = License {
            id: LicenseId(Uuid::new_v4()),
            asset_id: new_license.asset_id,
            licensee: new_license.licensee.clone(),
            terms: new_license.terms.clone(),
            created_at: Utc::now(),
        };

        let mut licenses = self.licenses.write().unwrap();
        licenses.push(license.clone());
        Ok(license)
    }

    async fn find_by_asset(&self, asset_id: &AssetId) -> Result<Vec<License>, DomainError> {
        let licenses = self.licenses.read().unwrap();
        let mut matching: Vec<License> = licenses
            .iter()
            .filter(|l| l.asset_id == *asset_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn find_by_licensee(&self, licensee: &str) -> Result<Vec<License>, DomainError> {
        let licenses = self.licenses.read().unwrap();
        let mut matching: Vec<License> = licenses
            .iter()
            .filter(|l| l.licensee == licensee)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }
}

// ============================================================================
// Scripted LLM Client
// ============================================================================

/// LLM client that replays a fixed reply (or fails) for every completion
///
/// Named Scripted rather than Mock to avoid clashing with the mockall-
/// generated `MockLlmClient` on the port trait.
pub struct ScriptedLlmClient {
    reply: Option<String>,
}

impl ScriptedLlmClient {
    /// Always reply with the given text
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
        }
    }

    /// Always fail as if the collaborator were unreachable
    pub fn failing() -> Self {
        Self { reply: None }
    }
}

#[async_trait]
impl LlmClient for ScriptedLlmClient {
    async fn complete(&self, _request: ChatRequest) -> Result<String, LlmError> {
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(LlmError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            }),
        }
    }
}

// ============================================================================
// Fixed Metrics Provider
// ============================================================================

/// Metrics provider returning a fixed snapshot for any URL
pub struct FixedMetricsProvider(pub SocialSnapshot);

#[async_trait]
impl MetricsProvider for FixedMetricsProvider {
    async fn fetch(&self, _url: &str) -> Result<SocialSnapshot, DomainError> {
        Ok(self.0)
    }
}
