//! Job Search: gathers listings from platform sources and ranks them for a user.
//!
//! Flow: validate request → load criteria + profile snapshot → resolve platforms →
//!       gather_listings → score_and_rank → persist listings → respond.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::criteria::repo::load_criteria;
use crate::errors::AppError;
use crate::jobs::repo::upsert_listings;
use crate::matching::relevance::score_and_rank;
use crate::models::listing::{JobListing, Platform, ScoredListing};
use crate::profile::repo::load_profile;
use crate::sources::{gather_listings, ListingQuery, SourceOutcome, SourceRegistry};
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub location: String,
    pub max_results: Option<usize>,
    pub platforms: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<ScoredListing>,
    pub sources: Vec<SourceOutcome>,
    pub total: usize,
    pub matched: usize,
}

/// Checks what can be checked without touching storage.
pub fn validate_search(request: &SearchRequest, sources: &SourceRegistry) -> Result<(), AppError> {
    let has_keyword = request.keywords.iter().any(|k| !k.trim().is_empty());
    if !has_keyword && request.location.trim().is_empty() {
        return Err(AppError::Validation(
            "Provide at least one keyword or a location".to_string(),
        ));
    }

    if request.max_results == Some(0) {
        return Err(AppError::Validation(
            "max_results must be at least 1".to_string(),
        ));
    }

    if let Some(platforms) = &request.platforms {
        for key in platforms {
            if let Err(e) = sources.create(key) {
                return Err(AppError::Validation(e.to_string()));
            }
        }
    }

    Ok(())
}

/// Request platforms win, then the user's stored platforms, then the configured default.
pub fn resolve_platforms(
    requested: Option<&[String]>,
    stored: &[String],
    fallback: &[Platform],
) -> Vec<String> {
    match requested {
        Some(keys) if !keys.is_empty() => keys.to_vec(),
        _ if !stored.is_empty() => stored.to_vec(),
        _ => fallback.iter().map(|p| p.as_str().to_string()).collect(),
    }
}

pub async fn run_search(state: &AppState, request: SearchRequest) -> Result<SearchResponse, AppError> {
    validate_search(&request, &state.sources)?;

    let criteria = load_criteria(&state.db, request.user_id).await?;
    let profile = load_profile(&state.db, request.user_id).await?;

    let platforms = resolve_platforms(
        request.platforms.as_deref(),
        &criteria.platforms,
        &state.config.search_platforms,
    );
    let sources = state
        .sources
        .create_all(platforms.as_slice())
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let query = ListingQuery {
        keywords: request
            .keywords
            .iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect(),
        location: request.location.trim().to_string(),
        max_results: request
            .max_results
            .unwrap_or(state.config.default_max_results),
    };

    info!(
        "Searching {} platform(s) for user {}: keywords={:?} location={:?}",
        sources.len(),
        request.user_id,
        query.keywords,
        query.location
    );
    let report = gather_listings(sources, query, state.config.source_timeout).await;
    let failed = report.failed_sources();

    let results = score_and_rank(&criteria, profile.as_ref(), report.listings);
    let matched = results.iter().filter(|s| s.matched).count();
    info!(
        "Search for user {}: {} listings gathered, {} matched, {} source(s) failed",
        request.user_id,
        results.len(),
        matched,
        failed
    );

    let gathered: Vec<&JobListing> = results.iter().map(|s| &s.listing).collect();
    upsert_listings(&state.db, &gathered).await?;

    Ok(SearchResponse {
        total: results.len(),
        matched,
        results,
        sources: report.outcomes,
    })
}
