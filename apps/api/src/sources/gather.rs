use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use crate::models::listing::{JobListing, Platform};
use crate::sources::{ListingQuery, ListingSource, SourceError};

/// How one source fared during a gather.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceOutcome {
    pub platform: Platform,
    /// Listings contributed after truncation; 0 on failure.
    pub listings: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Union of every successful batch plus one outcome per source.
#[derive(Debug, Default)]
pub struct GatherReport {
    /// Concatenated in source order; the matcher establishes the visible order.
    pub listings: Vec<JobListing>,
    pub outcomes: Vec<SourceOutcome>,
}

impl GatherReport {
    pub fn failed_sources(&self) -> usize {
        self.outcomes.iter().filter(|o| o.error.is_some()).count()
    }
}

/// Queries every source concurrently and merges what succeeds.
///
/// Each source runs in its own task under `timeout`. An error, a timeout, or a
/// panicked task is logged and recorded in the report; it never aborts the
/// other sources.
pub async fn gather_listings(
    sources: Vec<Arc<dyn ListingSource>>,
    query: ListingQuery,
    timeout: Duration,
) -> GatherReport {
    let query = Arc::new(query);

    let handles: Vec<_> = sources
        .into_iter()
        .map(|source| {
            let platform = source.platform();
            let query = Arc::clone(&query);
            let handle = tokio::spawn(async move {
                match tokio::time::timeout(timeout, source.search(&query)).await {
                    Ok(result) => result,
                    Err(_) => Err(SourceError::Timeout { platform, timeout }),
                }
            });
            (platform, handle)
        })
        .collect();

    let mut report = GatherReport::default();

    for (platform, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(e) => Err(SourceError::Aborted {
                platform,
                message: e.to_string(),
            }),
        };

        match result {
            Ok(mut listings) => {
                listings.truncate(query.max_results);
                info!("Source {platform} returned {} listings", listings.len());
                report.outcomes.push(SourceOutcome {
                    platform,
                    listings: listings.len(),
                    error: None,
                });
                report.listings.extend(listings);
            }
            Err(e) => {
                warn!("Source {platform} failed, continuing without it: {e}");
                report.outcomes.push(SourceOutcome {
                    platform,
                    listings: 0,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    report
}
