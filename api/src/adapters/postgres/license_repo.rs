//! PostgreSQL adapter for LicenseRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{AssetId, License, LicenseId, LicenseTerms, NewLicense};
use crate::domain::ports::LicenseRepository;
use crate::entity::licenses;
use crate::error::DomainError;

/// PostgreSQL implementation of LicenseRepository
pub struct PostgresLicenseRepository {
    db: DatabaseConnection,
}

impl PostgresLicenseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LicenseRepository for PostgresLicenseRepository {
    async fn create(&self, license: &NewLicense) -> Result<License, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();
        let terms = &license.terms;

        let model = licenses::ActiveModel {
            id: Set(id),
            asset_id: Set(license.asset_id.0),
            licensee: Set(license.licensee.clone()),
            commercial_use: Set(terms.commercial_use),
            derivatives: Set(terms.derivatives),
            attribution: Set(terms.attribution),
            share_alike: Set(terms.share_alike),
            territory: Set(serde_json::json!(terms.territory)),
            channels: Set(serde_json::json!(terms.channels)),
            timeframe: Set(terms.timeframe as i32),
            royalty: Set(terms.royalty.map(|r| r as i32)),
            created_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn find_by_asset(&self, asset_id: &AssetId) -> Result<Vec<License>, DomainError> {
        let results = licenses::Entity::find()
            .filter(licenses::Column::AssetId.eq(asset_id.0))
            .order_by_desc(licenses::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_licensee(&self, licensee: &str) -> Result<Vec<License>, DomainError> {
        let results = licenses::Entity::find()
            .filter(licenses::Column::Licensee.eq(licensee))
            .order_by_desc(licenses::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

impl From<licenses::Model> for License {
    fn from(model: licenses::Model) -> Self {
        License {
            id: LicenseId(model.id),
            asset_id: AssetId(model.asset_id),
            licensee: model.licensee,
            terms: LicenseTerms {
                commercial_use: model.commercial_use,
                derivatives: model.derivatives,
                attribution: model.attribution,
                share_alike: model.share_alike,
                territory: serde_json::from_value(model.territory).unwrap_or_default(),
                channels: serde_json::from_value(model.channels).unwrap_or_default(),
                timeframe: model.timeframe.max(0) as u32,
                royalty: model.royalty.map(|r| r.clamp(0, 100) as u8),
            },
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
