//! Social ingestion handlers
//!
//! Endpoints for resolving a content URL to an engagement snapshot.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::app::{supported_platforms, PlatformInfo};
use crate::domain::entities::SocialSnapshot;
use crate::error::AppError;
use crate::AppState;

/// Request to parse a content URL
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseRequest {
    pub social_url: String,
}

/// Response for a parsed content URL
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResponse {
    pub success: bool,
    #[serde(flatten)]
    pub snapshot: SocialSnapshot,
    pub source_url: String,
    pub parsed_at: String,
}

/// Response listing supported platforms
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformsResponse {
    pub supported_platforms: &'static [PlatformInfo],
}

/// POST /social/parse
///
/// Identify the platform behind a content URL and fetch an engagement
/// snapshot for it. 400 on anything that is not an absolute http(s) URL.
pub async fn post_parse(
    State(state): State<AppState>,
    Json(request): Json<ParseRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    if request.social_url.trim().is_empty() {
        return Err(AppError::BadRequest("socialUrl is required".to_string()));
    }

    let snapshot = state.snapshot_service.parse(&request.social_url).await?;

    Ok(Json(ParseResponse {
        success: true,
        snapshot,
        source_url: request.social_url,
        parsed_at: Utc::now().to_rfc3339(),
    }))
}

/// GET /social/platforms
///
/// List the platforms the parser can identify, with example URLs.
pub async fn get_platforms() -> Json<PlatformsResponse> {
    Json(PlatformsResponse {
        supported_platforms: supported_platforms(),
    })
}
