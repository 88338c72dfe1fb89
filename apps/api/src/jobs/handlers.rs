//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::jobs::repo::get_listing;
use crate::jobs::search::{run_search, SearchRequest, SearchResponse};
use crate::matching::filter::{JobFilter, JobFilters};
use crate::matching::relevance::score_and_rank;
use crate::models::criteria::SearchCriteria;
use crate::models::listing::{JobListing, Platform, ScoredListing};
use crate::models::profile::UserProfile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub criteria: SearchCriteria,
    pub profile: Option<UserProfile>,
    pub listings: Vec<JobListing>,
}

#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    pub filters: JobFilters,
    pub listings: Vec<JobListing>,
}

#[derive(Debug, Serialize)]
pub struct PlatformsResponse {
    pub platforms: Vec<Platform>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs/platforms
pub async fn handle_platforms(State(state): State<AppState>) -> Json<PlatformsResponse> {
    Json(PlatformsResponse {
        platforms: state.sources.supported_platforms(),
    })
}

/// POST /api/v1/jobs/search
///
/// Fans out to the resolved platform sources, ranks the union against the
/// user's stored criteria and profile, and stores the gathered listings.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    Ok(Json(run_search(&state, request).await?))
}

/// POST /api/v1/jobs/match
///
/// Ranks caller-supplied listings against caller-supplied criteria. No storage access.
pub async fn handle_match(Json(request): Json<MatchRequest>) -> Json<Vec<ScoredListing>> {
    Json(score_and_rank(
        &request.criteria,
        request.profile.as_ref(),
        request.listings,
    ))
}

/// POST /api/v1/jobs/filter
pub async fn handle_filter(Json(request): Json<FilterRequest>) -> Json<Vec<JobListing>> {
    Json(JobFilter::new(request.filters).filter(request.listings))
}

/// GET /api/v1/jobs/:platform/:external_id
pub async fn handle_get_listing(
    State(state): State<AppState>,
    Path((platform, external_id)): Path<(String, String)>,
) -> Result<Json<JobListing>, AppError> {
    let platform: Platform = platform
        .parse()
        .map_err(|e: crate::models::UnknownVariant| AppError::Validation(e.to_string()))?;

    let listing = get_listing(&state.db, platform, &external_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {platform}/{external_id} not found")))?;

    Ok(Json(listing))
}
