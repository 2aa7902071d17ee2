//! Asset handlers
//!
//! Endpoints for registering IP assets and attaching scores and license
//! terms to them.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{
    AssetId, ContentType, IpAsset, LicenseTerms, NewAsset, SocialSnapshot,
};
use crate::error::AppError;
use crate::AppState;

/// Request to register a new asset
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetRequest {
    pub creator: String,
    pub title: String,
    pub description: Option<String>,
    pub content_type: ContentType,
    pub ipfs_hash: Option<String>,
}

/// An asset as returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetResponse {
    pub id: String,
    pub creator: String,
    pub title: String,
    pub description: Option<String>,
    pub content_type: ContentType,
    pub ipfs_hash: Option<String>,
    pub score: Option<u32>,
    pub grade: Option<String>,
    pub reward_amount: Option<u32>,
    pub license_terms: Option<LicenseTerms>,
    pub created_at: String,
}

impl From<IpAsset> for AssetResponse {
    fn from(asset: IpAsset) -> Self {
        AssetResponse {
            id: asset.id.to_string(),
            creator: asset.creator,
            title: asset.title,
            description: asset.description,
            content_type: asset.content_type,
            ipfs_hash: asset.ipfs_hash,
            score: asset.score,
            grade: asset.grade.map(|g| g.to_string()),
            reward_amount: asset.reward_amount,
            license_terms: asset.license_terms,
            created_at: asset.created_at.to_rfc3339(),
        }
    }
}

/// Query parameters for listing assets
#[derive(Debug, Deserialize)]
pub struct ListAssetsQuery {
    pub creator: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    20
}

/// Response for a scored asset
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreAssetResponse {
    pub success: bool,
    pub score: u32,
    pub grade: String,
    pub reward_amount: u32,
}

/// Envelope for mutations with no payload
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// POST /assets
///
/// Register a new IP asset.
pub async fn create_asset(
    State(state): State<AppState>,
    Json(request): Json<CreateAssetRequest>,
) -> Result<Json<AssetResponse>, AppError> {
    let asset = state
        .asset_service
        .register(NewAsset {
            creator: request.creator,
            title: request.title,
            description: request.description,
            content_type: request.content_type,
            ipfs_hash: request.ipfs_hash,
        })
        .await?;

    Ok(Json(asset.into()))
}

/// GET /assets
///
/// List assets, newest first, optionally filtered by creator address.
pub async fn list_assets(
    State(state): State<AppState>,
    Query(query): Query<ListAssetsQuery>,
) -> Result<Json<Vec<AssetResponse>>, AppError> {
    let assets = state
        .asset_service
        .list(query.creator.as_deref(), query.limit, query.offset)
        .await?;

    Ok(Json(assets.into_iter().map(Into::into).collect()))
}

/// GET /assets/:id
///
/// Get one asset.
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssetResponse>, AppError> {
    let asset = state
        .asset_service
        .get(&AssetId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))?;

    Ok(Json(asset.into()))
}

/// POST /assets/:id/score
///
/// Score an engagement snapshot and persist the result on the asset.
pub async fn score_asset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(snapshot): Json<SocialSnapshot>,
) -> Result<Json<ScoreAssetResponse>, AppError> {
    let result = state
        .asset_service
        .attach_score(&AssetId(id), &snapshot)
        .await?;

    Ok(Json(ScoreAssetResponse {
        success: true,
        score: result.score,
        grade: result.grade.to_string(),
        reward_amount: result.reward_amount,
    }))
}

/// PUT /assets/:id/license
///
/// Persist the creator's settled license terms on the asset.
pub async fn set_asset_license(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(terms): Json<LicenseTerms>,
) -> Result<Json<SuccessResponse>, AppError> {
    state
        .asset_service
        .attach_license_terms(&AssetId(id), &terms)
        .await?;

    Ok(Json(SuccessResponse { success: true }))
}
