//! Listing Sources: per-platform adapters that produce normalized listing batches.
//!
//! Each adapter maps its platform's raw representation into `JobListing`.
//! Callers pick adapters by key through `SourceRegistry` and fan out with
//! `gather_listings`, which isolates failures per source.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::listing::{JobListing, Platform};

pub mod gather;
pub mod platforms;
pub mod registry;

pub use gather::{gather_listings, SourceOutcome};
pub use registry::SourceRegistry;

/// What to ask every source for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingQuery {
    pub keywords: Vec<String>,
    pub location: String,
    /// Per-source cap; longer batches are truncated.
    pub max_results: usize,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Unsupported platform: {requested}. Supported platforms: {supported}")]
    UnsupportedPlatform { requested: String, supported: String },

    #[error("{platform} fetch failed: {message}")]
    Fetch { platform: Platform, message: String },

    #[error("{platform} timed out after {timeout:?}")]
    Timeout { platform: Platform, timeout: Duration },

    #[error("{platform} source task aborted: {message}")]
    Aborted { platform: Platform, message: String },
}

/// A platform adapter. Implement this to add a platform without touching the
/// search handler or the matcher.
#[async_trait]
pub trait ListingSource: Send + Sync {
    fn platform(&self) -> Platform;

    async fn search(&self, query: &ListingQuery) -> Result<Vec<JobListing>, SourceError>;
}
