use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::null_as_default;

/// Profile skills as they arrive from forms, resume extraction, or storage.
///
/// Stored skills are text holding either a JSON array or a comma-separated
/// list; API clients may also send a proper array. Anything else is kept
/// verbatim and normalizes to whatever strings can be salvaged from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Skills {
    List(Vec<String>),
    Raw(String),
    Unrecognized(Value),
}

impl Skills {
    /// Normalizes to the sequence the matcher counts against.
    ///
    /// Raw text is tried as a JSON array of strings first, then split on commas
    /// with each piece trimmed. Entries are otherwise kept as given, blanks
    /// included, since they count towards coverage. Empty text yields nothing.
    /// Never fails.
    pub fn normalize(&self) -> Vec<String> {
        match self {
            Skills::List(items) => items.clone(),
            Skills::Raw(raw) => normalize_raw(raw),
            Skills::Unrecognized(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            Skills::Unrecognized(_) => Vec::new(),
        }
    }

    /// Text form written to the `user_profiles.skills` column.
    pub fn to_storage(&self) -> String {
        match self {
            Skills::Raw(raw) => raw.clone(),
            other => serde_json::to_string(&other.normalize()).unwrap_or_default(),
        }
    }
}

fn normalize_raw(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    serde_json::from_str::<Vec<String>>(raw).unwrap_or_else(|_| {
        raw.split(',')
            .map(|s| s.trim().to_string())
            .collect()
    })
}

/// Extended user profile. Only `skills` feeds relevance scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub current_position: Option<String>,
    pub current_company: Option<String>,
    pub years_of_experience: Option<i32>,
    pub education: Option<String>,
    pub skills: Option<Skills>,
    pub languages: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub preferred_job_types: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub preferred_locations: Vec<String>,
    pub salary_expectation_min: Option<f64>,
    pub salary_expectation_max: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub remote_preference: bool,
    pub bio: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub portfolio_url: Option<String>,
}

impl UserProfile {
    pub fn normalized_skills(&self) -> Vec<String> {
        self.skills.as_ref().map(Skills::normalize).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfileRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub current_position: Option<String>,
    pub current_company: Option<String>,
    pub years_of_experience: Option<i32>,
    pub education: Option<String>,
    pub skills: Option<String>,
    pub languages: Option<String>,
    pub preferred_job_types: Vec<String>,
    pub preferred_locations: Vec<String>,
    pub salary_expectation_min: Option<f64>,
    pub salary_expectation_max: Option<f64>,
    pub remote_preference: bool,
    pub bio: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserProfileRow> for UserProfile {
    fn from(row: UserProfileRow) -> Self {
        UserProfile {
            current_position: row.current_position,
            current_company: row.current_company,
            years_of_experience: row.years_of_experience,
            education: row.education,
            skills: row.skills.map(Skills::Raw),
            languages: row.languages,
            preferred_job_types: row.preferred_job_types,
            preferred_locations: row.preferred_locations,
            salary_expectation_min: row.salary_expectation_min,
            salary_expectation_max: row.salary_expectation_max,
            remote_preference: row.remote_preference,
            bio: row.bio,
            linkedin_url: row.linkedin_url,
            github_url: row.github_url,
            portfolio_url: row.portfolio_url,
        }
    }
}
