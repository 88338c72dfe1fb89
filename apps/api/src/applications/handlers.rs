use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::applications::repo::{
    create_application, delete_application, get_application, list_applications, list_statuses,
    update_status, NewApplication,
};
use crate::applications::stats::{compute_application_stats, ApplicationStats};
use crate::errors::AppError;
use crate::jobs::repo::get_listing;
use crate::models::application::{ApplicationRow, ApplicationStatus};
use crate::models::listing::Platform;
use crate::routes::UserIdQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateApplicationRequest {
    pub user_id: Uuid,
    pub platform: Platform,
    pub external_id: String,
    pub resume_id: Option<Uuid>,
    pub cover_letter: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListApplicationsQuery {
    pub user_id: Uuid,
    pub status: Option<ApplicationStatus>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub user_id: Uuid,
    pub status: ApplicationStatus,
    pub notes: Option<String>,
}

/// POST /api/v1/applications
pub async fn handle_create_application(
    State(state): State<AppState>,
    Json(req): Json<CreateApplicationRequest>,
) -> Result<(StatusCode, Json<ApplicationRow>), AppError> {
    if get_listing(&state.db, req.platform, &req.external_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound(format!(
            "Job {}/{} not found",
            req.platform, req.external_id
        )));
    }

    let row = create_application(
        &state.db,
        &NewApplication {
            user_id: req.user_id,
            platform: req.platform,
            external_id: &req.external_id,
            resume_id: req.resume_id,
            cover_letter: req.cover_letter.as_deref(),
            notes: req.notes.as_deref(),
        },
    )
    .await?;

    info!(
        "Created application {} for user {} on {}/{}",
        row.id, req.user_id, req.platform, req.external_id
    );
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Query(params): Query<ListApplicationsQuery>,
) -> Result<Json<Vec<ApplicationRow>>, AppError> {
    let rows = list_applications(&state.db, params.user_id, params.status).await?;
    Ok(Json(rows))
}

/// GET /api/v1/applications/:id
pub async fn handle_get_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ApplicationRow>, AppError> {
    let row = get_application(&state.db, id, params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;
    Ok(Json(row))
}

/// PATCH /api/v1/applications/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<ApplicationRow>, AppError> {
    let row = update_status(&state.db, id, req.user_id, req.status, req.notes.as_deref())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;

    info!("Application {id} moved to {}", req.status);
    Ok(Json(row))
}

/// DELETE /api/v1/applications/:id
pub async fn handle_delete_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    if delete_application(&state.db, id, params.user_id).await? {
        info!("Deleted application {id}");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Application {id} not found")))
    }
}

/// GET /api/v1/stats/applications
pub async fn handle_application_stats(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ApplicationStats>, AppError> {
    let statuses: Vec<ApplicationStatus> = list_statuses(&state.db, params.user_id)
        .await?
        .iter()
        .filter_map(|raw| match raw.parse::<ApplicationStatus>() {
            Ok(status) => Some(status),
            Err(e) => {
                warn!("Skipping application with {e}");
                None
            }
        })
        .collect();

    Ok(Json(compute_application_stats(&statuses)))
}
