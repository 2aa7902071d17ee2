//! Scoring handlers
//!
//! Endpoints for computing content scores from engagement snapshots.
//! Scoring is pure, so these handlers carry no state.

use axum::Json;
use serde::Serialize;

use crate::app::scoring::{compute_score, reward_for_grade};
use crate::domain::entities::{Grade, SocialSnapshot};
use crate::error::AppError;

/// Response for a score computation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub success: bool,
    pub score: u32,
    pub grade: String,
    pub grade_label: String,
    pub reward_amount: u32,
}

/// One row of the tier table
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierRow {
    pub grade: String,
    pub label: String,
    pub min_score: u32,
    pub reward_amount: u32,
}

/// POST /score
///
/// Compute score, grade and reward for an engagement snapshot.
/// Unknown platforms fold to `other`; the endpoint is total over any
/// well-formed snapshot body.
pub async fn post_score(
    Json(snapshot): Json<SocialSnapshot>,
) -> Result<Json<ScoreResponse>, AppError> {
    let result = compute_score(&snapshot);

    Ok(Json(ScoreResponse {
        success: true,
        score: result.score,
        grade: result.grade.to_string(),
        grade_label: result.grade.label().to_string(),
        reward_amount: result.reward_amount,
    }))
}

/// GET /score/tiers
///
/// The grade/reward tier table, highest tier first.
pub async fn get_score_tiers() -> Json<Vec<TierRow>> {
    let tiers = [Grade::S, Grade::A, Grade::B, Grade::C, Grade::D];

    Json(
        tiers
            .into_iter()
            .map(|grade| TierRow {
                grade: grade.to_string(),
                label: grade.label().to_string(),
                min_score: grade.min_score(),
                reward_amount: reward_for_grade(grade),
            })
            .collect(),
    )
}
