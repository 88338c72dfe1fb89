use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::{null_as_default, UnknownVariant};

/// Employment type a user can search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Temporary,
    Internship,
    Freelance,
}

impl JobType {
    pub const ALL: [JobType; 6] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Temporary,
        JobType::Internship,
        JobType::Freelance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Temporary => "temporary",
            JobType::Internship => "internship",
            JobType::Freelance => "freelance",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("job type", s))
    }
}

/// A user's stored search criteria.
///
/// Every field has a neutral default, so partial payloads deserialize cleanly
/// and an absent field simply contributes nothing to relevance scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    pub domain: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub sectors: Vec<String>,
    pub location: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub preferred_locations: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub remote_only: bool,
    #[serde(deserialize_with = "blank_as_none")]
    pub job_type: Option<JobType>,
    pub internship_duration: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub required_keywords: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub excluded_keywords: Vec<String>,
    pub preferred_start_date: Option<NaiveDate>,
    pub earliest_start_date: Option<NaiveDate>,
    pub latest_start_date: Option<NaiveDate>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub salary_currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub platforms: Vec<String>,
    pub min_experience_years: Option<i32>,
    pub max_experience_years: Option<i32>,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            domain: None,
            sectors: Vec::new(),
            location: None,
            preferred_locations: Vec::new(),
            remote_only: false,
            job_type: None,
            internship_duration: None,
            required_keywords: Vec::new(),
            excluded_keywords: Vec::new(),
            preferred_start_date: None,
            earliest_start_date: None,
            latest_start_date: None,
            min_salary: None,
            max_salary: None,
            salary_currency: "EUR".to_string(),
            platforms: Vec::new(),
            min_experience_years: None,
            max_experience_years: None,
        }
    }
}

/// Forms post `""` for "no job type selected".
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<JobType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SearchCriteriaRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub domain: Option<String>,
    pub sectors: Vec<String>,
    pub location: Option<String>,
    pub preferred_locations: Vec<String>,
    pub remote_only: bool,
    pub job_type: Option<String>,
    pub internship_duration: Option<String>,
    pub required_keywords: Vec<String>,
    pub excluded_keywords: Vec<String>,
    pub preferred_start_date: Option<NaiveDate>,
    pub earliest_start_date: Option<NaiveDate>,
    pub latest_start_date: Option<NaiveDate>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub salary_currency: String,
    pub platforms: Vec<String>,
    pub min_experience_years: Option<i32>,
    pub max_experience_years: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SearchCriteriaRow> for SearchCriteria {
    fn from(row: SearchCriteriaRow) -> Self {
        SearchCriteria {
            domain: row.domain,
            sectors: row.sectors,
            location: row.location,
            preferred_locations: row.preferred_locations,
            remote_only: row.remote_only,
            // A value outside the enumeration can only come from a manual edit; treat as unset.
            job_type: row.job_type.as_deref().and_then(|t| t.parse().ok()),
            internship_duration: row.internship_duration,
            required_keywords: row.required_keywords,
            excluded_keywords: row.excluded_keywords,
            preferred_start_date: row.preferred_start_date,
            earliest_start_date: row.earliest_start_date,
            latest_start_date: row.latest_start_date,
            min_salary: row.min_salary,
            max_salary: row.max_salary,
            salary_currency: row.salary_currency,
            platforms: row.platforms,
            min_experience_years: row.min_experience_years,
            max_experience_years: row.max_experience_years,
        }
    }
}
