//! PostgreSQL adapter for AssetRepository
//!
//! NOTE: This file requires running `make db-migrate` to create the
//! `ip_assets` table before it will run.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::domain::entities::{
    AssetId, ContentType, IpAsset, LicenseTerms, NewAsset, ScoreResult,
};
use crate::domain::ports::AssetRepository;
use crate::entity::ip_assets;
use crate::error::DomainError;

/// PostgreSQL implementation of AssetRepository
pub struct PostgresAssetRepository {
    db: DatabaseConnection,
}

impl PostgresAssetRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AssetRepository for PostgresAssetRepository {
    async fn find_by_id(&self, id: &AssetId) -> Result<Option<IpAsset>, DomainError> {
        let result = ip_assets::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn list(
        &self,
        creator: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<IpAsset>, DomainError> {
        let mut query = ip_assets::Entity::find();

        if let Some(creator) = creator {
            query = query.filter(ip_assets::Column::Creator.eq(creator));
        }

        let results = query
            .order_by_desc(ip_assets::Column::CreatedAt)
            .offset(offset as u64)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, asset: &NewAsset) -> Result<IpAsset, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = ip_assets::ActiveModel {
            id: Set(id),
            creator: Set(asset.creator.clone()),
            title: Set(asset.title.clone()),
            description: Set(asset.description.clone()),
            content_type: Set(asset.content_type.to_string()),
            ipfs_hash: Set(asset.ipfs_hash.clone()),
            score: Set(None),
            grade: Set(None),
            reward_amount: Set(None),
            license_terms: Set(None),
            created_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update_score(&self, id: &AssetId, result: &ScoreResult) -> Result<(), DomainError> {
        let model = ip_assets::ActiveModel {
            id: Set(id.0),
            score: Set(Some(result.score as i32)),
            grade: Set(Some(result.grade.to_string())),
            reward_amount: Set(Some(result.reward_amount as i32)),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn update_license_terms(
        &self,
        id: &AssetId,
        terms: &LicenseTerms,
    ) -> Result<(), DomainError> {
        let terms_json = serde_json::to_value(terms)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let model = ip_assets::ActiveModel {
            id: Set(id.0),
            license_terms: Set(Some(terms_json)),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

impl From<ip_assets::Model> for IpAsset {
    fn from(model: ip_assets::Model) -> Self {
        IpAsset {
            id: AssetId(model.id),
            creator: model.creator,
            title: model.title,
            description: model.description,
            content_type: model.content_type.parse().unwrap_or(ContentType::Image),
            ipfs_hash: model.ipfs_hash,
            score: model.score.map(|s| s as u32),
            grade: model.grade.and_then(|g| g.parse().ok()),
            reward_amount: model.reward_amount.map(|r| r as u32),
            license_terms: model
                .license_terms
                .and_then(|v| serde_json::from_value(v).ok()),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
