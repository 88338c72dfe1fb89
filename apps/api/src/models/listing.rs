use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::{null_as_default, UnknownVariant};

/// Job platform a listing was gathered from.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Linkedin,
    Indeed,
    Glassdoor,
    Monster,
    HelloWork,
    JobTeaser,
    WelcomeToTheJungle,
    #[default]
    Other,
}

impl Platform {
    pub const ALL: [Platform; 8] = [
        Platform::Linkedin,
        Platform::Indeed,
        Platform::Glassdoor,
        Platform::Monster,
        Platform::HelloWork,
        Platform::JobTeaser,
        Platform::WelcomeToTheJungle,
        Platform::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linkedin => "linkedin",
            Platform::Indeed => "indeed",
            Platform::Glassdoor => "glassdoor",
            Platform::Monster => "monster",
            Platform::HelloWork => "hello_work",
            Platform::JobTeaser => "job_teaser",
            Platform::WelcomeToTheJungle => "welcome_to_the_jungle",
            Platform::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive: `LinkedIn` and `linkedin` name the same platform.
impl FromStr for Platform {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == key)
            .ok_or_else(|| UnknownVariant::new("platform", s))
    }
}

/// A normalized job listing as produced by a listing source.
///
/// Only `title`, `description`, `location`, `job_type` and `is_remote` feed
/// relevance scoring; the remaining fields pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    /// Platform-scoped external identifier.
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Free-form label as published by the platform, compared verbatim.
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", alias = "remote")]
    pub is_remote: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platform: Platform,
    #[serde(default)]
    pub salary: Option<f64>,
    #[serde(default)]
    pub salary_currency: Option<String>,
    #[serde(default)]
    pub posted_date: Option<DateTime<Utc>>,
}

/// A listing annotated by the relevance matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredListing {
    #[serde(flatten)]
    pub listing: JobListing,
    /// In `[0, 100]`, one decimal place.
    pub relevance_score: f64,
    pub matched: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobListingRow {
    pub platform: String,
    pub external_id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub description: String,
    pub job_type: Option<String>,
    pub is_remote: bool,
    pub url: String,
    pub salary: Option<f64>,
    pub salary_currency: Option<String>,
    pub posted_date: Option<DateTime<Utc>>,
    pub fetched_at: DateTime<Utc>,
}

impl From<JobListingRow> for JobListing {
    fn from(row: JobListingRow) -> Self {
        JobListing {
            id: row.external_id,
            title: row.title,
            company: row.company,
            location: row.location,
            description: row.description,
            job_type: row.job_type,
            is_remote: row.is_remote,
            url: row.url,
            platform: row.platform.parse().unwrap_or_default(),
            salary: row.salary,
            salary_currency: row.salary_currency,
            posted_date: row.posted_date,
        }
    }
}
