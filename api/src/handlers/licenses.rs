//! Licensing handlers
//!
//! Endpoints for the license questionnaire, AI-assisted terms generation,
//! and licenses issued on assets.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::license_renderer::{describe_terms, render_description};
use crate::domain::entities::{Answers, AssetId, License, LicenseTerms, Question};
use crate::error::AppError;
use crate::AppState;

/// Response for the question catalog
#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: &'static [Question],
}

/// Request to generate license terms from questionnaire answers
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub answers: Answers,
}

/// Response for generated license terms
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub terms: LicenseTerms,
    pub description: String,
}

/// Request to issue a license on an asset
#[derive(Debug, Deserialize)]
pub struct IssueLicenseRequest {
    pub licensee: String,
    /// Explicit terms; defaults to the asset's settled terms when omitted
    #[serde(default)]
    pub terms: Option<LicenseTerms>,
}

/// An issued license as returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseResponse {
    pub id: String,
    pub asset_id: String,
    pub licensee: String,
    pub terms: LicenseTerms,
    pub description_lines: Vec<String>,
    pub created_at: String,
}

impl From<License> for LicenseResponse {
    fn from(license: License) -> Self {
        let description_lines = describe_terms(&license.terms);
        LicenseResponse {
            id: license.id.to_string(),
            asset_id: license.asset_id.to_string(),
            licensee: license.licensee,
            terms: license.terms,
            description_lines,
            created_at: license.created_at.to_rfc3339(),
        }
    }
}

/// Query parameters for listing licenses
#[derive(Debug, Deserialize)]
pub struct ListLicensesQuery {
    pub licensee: String,
}

/// GET /licenses/questions
///
/// The fixed licensing questionnaire, in presentation order.
pub async fn get_questions(State(state): State<AppState>) -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        success: true,
        questions: state.license_service.questions(),
    })
}

/// POST /licenses/generate
///
/// Generate license terms from questionnaire answers. Never fails on
/// collaborator problems - the conservative fallback terms are returned
/// instead, so this endpoint always produces usable terms.
pub async fn post_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if request.answers.is_empty() {
        return Err(AppError::BadRequest("answers must not be empty".to_string()));
    }

    let terms = state.license_service.resolve(&request.answers).await;
    let description = render_description(&terms);

    Ok(Json(GenerateResponse {
        success: true,
        terms,
        description,
    }))
}

/// POST /assets/:id/licenses
///
/// Issue a license on an asset to a licensee.
pub async fn issue_license(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<IssueLicenseRequest>,
) -> Result<Json<LicenseResponse>, AppError> {
    let license = state
        .asset_service
        .issue_license(&AssetId(id), &request.licensee, request.terms)
        .await?;

    Ok(Json(license.into()))
}

/// GET /assets/:id/licenses
///
/// List licenses issued on an asset.
pub async fn list_asset_licenses(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<LicenseResponse>>, AppError> {
    let licenses = state.asset_service.licenses_for_asset(&AssetId(id)).await?;
    Ok(Json(licenses.into_iter().map(Into::into).collect()))
}

/// GET /licenses?licensee=0x...
///
/// List licenses held by a licensee address.
pub async fn list_licenses(
    State(state): State<AppState>,
    Query(query): Query<ListLicensesQuery>,
) -> Result<Json<Vec<LicenseResponse>>, AppError> {
    let licenses = state
        .asset_service
        .licenses_for_licensee(&query.licensee)
        .await?;
    Ok(Json(licenses.into_iter().map(Into::into).collect()))
}
