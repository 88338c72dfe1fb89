use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::criteria::repo::{get_criteria, upsert_criteria};
use crate::criteria::validation::criteria_problems;
use crate::errors::AppError;
use crate::models::criteria::SearchCriteria;
use crate::routes::UserIdQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateCriteriaRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub criteria: SearchCriteria,
}

#[derive(Debug, Serialize)]
pub struct CriteriaResponse {
    pub user_id: Uuid,
    pub criteria: SearchCriteria,
    /// `None` when nothing is stored yet and `criteria` is the default.
    pub updated_at: Option<DateTime<Utc>>,
}

/// GET /api/v1/search-criteria
pub async fn handle_get_criteria(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<CriteriaResponse>, AppError> {
    let row = get_criteria(&state.db, params.user_id).await?;
    let updated_at = row.as_ref().map(|r| r.updated_at);
    let criteria = row.map(SearchCriteria::from).unwrap_or_default();

    Ok(Json(CriteriaResponse {
        user_id: params.user_id,
        criteria,
        updated_at,
    }))
}

/// PUT /api/v1/search-criteria
pub async fn handle_update_criteria(
    State(state): State<AppState>,
    Json(req): Json<UpdateCriteriaRequest>,
) -> Result<Json<CriteriaResponse>, AppError> {
    let problems = criteria_problems(&req.criteria, &state.sources);
    if !problems.is_empty() {
        return Err(AppError::Validation(problems.join("; ")));
    }

    let row = upsert_criteria(&state.db, req.user_id, &req.criteria).await?;
    info!("Updated search criteria for user {}", req.user_id);

    Ok(Json(CriteriaResponse {
        user_id: req.user_id,
        updated_at: Some(row.updated_at),
        criteria: row.into(),
    }))
}
