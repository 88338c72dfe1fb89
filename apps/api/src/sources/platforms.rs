//! Built-in platform adapters.
//!
//! Fetching and page parsing are not wired up yet: every adapter answers with
//! an empty batch so the search pipeline runs end to end.

use async_trait::async_trait;
use tracing::debug;

use crate::models::listing::{JobListing, Platform};
use crate::sources::{ListingQuery, ListingSource, SourceError};

#[derive(Debug, Default)]
pub struct LinkedInSource;

#[derive(Debug, Default)]
pub struct IndeedSource;

#[derive(Debug, Default)]
pub struct GlassdoorSource;

#[derive(Debug, Default)]
pub struct HelloWorkSource;

#[derive(Debug, Default)]
pub struct JobTeaserSource;

#[derive(Debug, Default)]
pub struct WelcomeToTheJungleSource;

#[async_trait]
impl ListingSource for LinkedInSource {
    fn platform(&self) -> Platform {
        Platform::Linkedin
    }

    async fn search(&self, query: &ListingQuery) -> Result<Vec<JobListing>, SourceError> {
        Ok(empty_batch(self.platform(), query))
    }
}

#[async_trait]
impl ListingSource for IndeedSource {
    fn platform(&self) -> Platform {
        Platform::Indeed
    }

    async fn search(&self, query: &ListingQuery) -> Result<Vec<JobListing>, SourceError> {
        Ok(empty_batch(self.platform(), query))
    }
}

#[async_trait]
impl ListingSource for GlassdoorSource {
    fn platform(&self) -> Platform {
        Platform::Glassdoor
    }

    async fn search(&self, query: &ListingQuery) -> Result<Vec<JobListing>, SourceError> {
        Ok(empty_batch(self.platform(), query))
    }
}

#[async_trait]
impl ListingSource for HelloWorkSource {
    fn platform(&self) -> Platform {
        Platform::HelloWork
    }

    async fn search(&self, query: &ListingQuery) -> Result<Vec<JobListing>, SourceError> {
        Ok(empty_batch(self.platform(), query))
    }
}

#[async_trait]
impl ListingSource for JobTeaserSource {
    fn platform(&self) -> Platform {
        Platform::JobTeaser
    }

    async fn search(&self, query: &ListingQuery) -> Result<Vec<JobListing>, SourceError> {
        Ok(empty_batch(self.platform(), query))
    }
}

#[async_trait]
impl ListingSource for WelcomeToTheJungleSource {
    fn platform(&self) -> Platform {
        Platform::WelcomeToTheJungle
    }

    async fn search(&self, query: &ListingQuery) -> Result<Vec<JobListing>, SourceError> {
        Ok(empty_batch(self.platform(), query))
    }
}

fn empty_batch(platform: Platform, query: &ListingQuery) -> Vec<JobListing> {
    debug!(
        "No fetcher wired for {platform}; keywords={:?} location={:?} -> 0 listings",
        query.keywords, query.location
    );
    Vec::new()
}
