//! Relevance Matcher: scores job listings against a user's search criteria and profile.
//!
//! Scoring is an additive point budget over independent factors, clamped to
//! `[0, 100]` and rounded to one decimal. Pure: no storage, no network, no state
//! carried between listings.

use crate::models::criteria::SearchCriteria;
use crate::models::listing::{JobListing, ScoredListing};
use crate::models::profile::UserProfile;

/// Listings scoring at or above this are flagged `matched`.
pub const MATCH_THRESHOLD: f64 = 50.0;

const MAX_SCORE: f64 = 100.0;

const LOCATION_POINTS: f64 = 20.0;
const PREFERRED_LOCATION_POINTS: f64 = 15.0;
const REMOTE_REQUESTED_POINTS: f64 = 10.0;
const REMOTE_BONUS_POINTS: f64 = 5.0;
const JOB_TYPE_POINTS: f64 = 15.0;
const KEYWORD_POINTS: f64 = 30.0;
const EXCLUDED_PENALTY: f64 = -50.0;
const DOMAIN_POINTS: f64 = 15.0;
const SKILL_POINTS: f64 = 10.0;

// ────────────────────────────────────────────────────────────────────────────
// Score breakdown
// ────────────────────────────────────────────────────────────────────────────

/// Points contributed by each factor for a single listing, before clamping.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    /// Direct (20) or preferred (15) location match; never both.
    pub location: f64,
    pub remote: f64,
    pub job_type: f64,
    pub keywords: f64,
    /// 0 or -50, however many excluded keywords hit.
    pub excluded: f64,
    pub domain: f64,
    pub skills: f64,
}

impl ScoreBreakdown {
    pub fn raw_total(&self) -> f64 {
        self.location
            + self.remote
            + self.job_type
            + self.keywords
            + self.excluded
            + self.domain
            + self.skills
    }

    /// Clamped to `[0, 100]` and rounded to one decimal place.
    pub fn total(&self) -> f64 {
        round_one_decimal(self.raw_total().clamp(0.0, MAX_SCORE))
    }
}

/// Rounds to one decimal from the exact binary value, ties to even, so
/// `1.25` becomes `1.2` and `0.35` (stored just below) becomes `0.3`.
pub(crate) fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

// ────────────────────────────────────────────────────────────────────────────
// Matcher
// ────────────────────────────────────────────────────────────────────────────

/// Scores listings for one (criteria, profile) snapshot.
///
/// Text inputs are lowercased once at construction, so scoring a batch does
/// not repeat that work per listing. List entries are kept as given: a blank
/// entry is a substring of everything and counts like any other.
#[derive(Debug, Clone)]
pub struct RelevanceMatcher<'a> {
    criteria: &'a SearchCriteria,
    location: Option<String>,
    preferred_locations: Vec<String>,
    required_keywords: Vec<String>,
    excluded_keywords: Vec<String>,
    domain: Option<String>,
    skills: Vec<String>,
}

impl<'a> RelevanceMatcher<'a> {
    pub fn new(criteria: &'a SearchCriteria, profile: Option<&UserProfile>) -> Self {
        let skills = profile
            .map(UserProfile::normalized_skills)
            .unwrap_or_default();

        Self {
            criteria,
            location: lower_present(criteria.location.as_deref()),
            preferred_locations: lower_all(&criteria.preferred_locations),
            required_keywords: lower_all(&criteria.required_keywords),
            excluded_keywords: lower_all(&criteria.excluded_keywords),
            domain: lower_present(criteria.domain.as_deref()),
            skills: lower_all(&skills),
        }
    }

    /// Final relevance score for one listing.
    pub fn score(&self, listing: &JobListing) -> f64 {
        self.breakdown(listing).total()
    }

    pub fn breakdown(&self, listing: &JobListing) -> ScoreBreakdown {
        let listing_location = listing
            .location
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();
        let text = format!("{} {}", listing.title, listing.description).to_lowercase();

        ScoreBreakdown {
            location: self.location_points(&listing_location),
            remote: self.remote_points(listing.is_remote),
            job_type: self.job_type_points(listing.job_type.as_deref()),
            keywords: coverage_points(&self.required_keywords, &text, KEYWORD_POINTS),
            excluded: if self.excluded_keywords.iter().any(|kw| text.contains(kw)) {
                EXCLUDED_PENALTY
            } else {
                0.0
            },
            domain: match &self.domain {
                Some(domain) if text.contains(domain.as_str()) => DOMAIN_POINTS,
                _ => 0.0,
            },
            skills: coverage_points(&self.skills, &text, SKILL_POINTS),
        }
    }

    /// Scores every listing, flags matches, and sorts by descending score.
    /// The sort is stable: listings with equal scores keep their input order.
    pub fn rank(&self, listings: Vec<JobListing>) -> Vec<ScoredListing> {
        let mut scored: Vec<ScoredListing> = listings
            .into_iter()
            .map(|listing| {
                let relevance_score = self.score(&listing);
                ScoredListing {
                    listing,
                    relevance_score,
                    matched: relevance_score >= MATCH_THRESHOLD,
                }
            })
            .collect();

        scored.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
        scored
    }

    /// Only scored when a location is wanted. Direct match wins; the preferred
    /// list is consulted when it misses. An absent listing location is the
    /// empty string, which every wanted location contains.
    fn location_points(&self, listing_location: &str) -> f64 {
        let Some(wanted) = &self.location else {
            return 0.0;
        };
        if listing_location.contains(wanted.as_str()) || wanted.contains(listing_location) {
            return LOCATION_POINTS;
        }

        if self
            .preferred_locations
            .iter()
            .any(|preferred| listing_location.contains(preferred.as_str()))
        {
            PREFERRED_LOCATION_POINTS
        } else {
            0.0
        }
    }

    fn remote_points(&self, listing_is_remote: bool) -> f64 {
        match (self.criteria.remote_only, listing_is_remote) {
            (true, true) => REMOTE_REQUESTED_POINTS,
            (false, true) => REMOTE_BONUS_POINTS,
            (_, false) => 0.0,
        }
    }

    /// Exact, case-sensitive comparison against the enumeration's wire form.
    fn job_type_points(&self, listing_job_type: Option<&str>) -> f64 {
        match (self.criteria.job_type, listing_job_type) {
            (Some(wanted), Some(actual)) if wanted.as_str() == actual => JOB_TYPE_POINTS,
            _ => 0.0,
        }
    }
}

/// Convenience wrapper: build a matcher for one snapshot and rank a batch.
pub fn score_and_rank(
    criteria: &SearchCriteria,
    profile: Option<&UserProfile>,
    listings: Vec<JobListing>,
) -> Vec<ScoredListing> {
    RelevanceMatcher::new(criteria, profile).rank(listings)
}

/// `(matched / total) * max_points`, or 0 when there is nothing to match.
fn coverage_points(terms: &[String], text: &str, max_points: f64) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }
    let matched = terms.iter().filter(|term| text.contains(term.as_str())).count();
    ((matched as f64 / terms.len() as f64) * max_points).min(max_points)
}

/// An empty string counts as absent.
fn lower_present(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_lowercase)
}

fn lower_all(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.to_lowercase()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
