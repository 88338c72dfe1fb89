use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{UserProfile, UserProfileRow};
use crate::profile::repo::{get_profile, upsert_profile};
use crate::routes::UserIdQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub profile: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub profile: UserProfile,
    /// Skills as the matcher will see them.
    pub normalized_skills: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserProfileRow> for ProfileResponse {
    fn from(row: UserProfileRow) -> Self {
        let user_id = row.user_id;
        let updated_at = row.updated_at;
        let profile = UserProfile::from(row);
        Self {
            user_id,
            normalized_skills: profile.normalized_skills(),
            profile,
            updated_at,
        }
    }
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ProfileResponse>, AppError> {
    let row = get_profile(&state.db, params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {} not found", params.user_id)))?;
    Ok(Json(row.into()))
}

/// PUT /api/v1/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    if let (Some(min), Some(max)) = (
        req.profile.salary_expectation_min,
        req.profile.salary_expectation_max,
    ) {
        if min > max {
            return Err(AppError::Validation(format!(
                "salary_expectation_min ({min}) exceeds salary_expectation_max ({max})"
            )));
        }
    }

    let row = upsert_profile(&state.db, req.user_id, &req.profile).await?;
    info!("Updated profile for user {}", req.user_id);
    Ok(Json(row.into()))
}
