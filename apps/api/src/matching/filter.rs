//! Job Filter: boolean include/exclude gate over listings. No scoring, no ranking.

use serde::{Deserialize, Serialize};

use crate::models::listing::JobListing;
use crate::models::null_as_default;

/// Independent predicates, all of which a listing must satisfy.
/// Unset or zero bounds and empty lists disable their predicate. Keywords are
/// matched as given, so a blank entry excludes everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobFilters {
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub job_types: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub remote_only: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub excluded_keywords: Vec<String>,
}

pub struct JobFilter {
    filters: JobFilters,
    excluded_keywords: Vec<String>,
}

impl JobFilter {
    pub fn new(filters: JobFilters) -> Self {
        let excluded_keywords = filters
            .excluded_keywords
            .iter()
            .map(|kw| kw.to_lowercase())
            .collect();
        Self {
            filters,
            excluded_keywords,
        }
    }

    /// Keeps the listings that pass every predicate, in input order.
    pub fn filter(&self, listings: Vec<JobListing>) -> Vec<JobListing> {
        listings.into_iter().filter(|l| self.matches(l)).collect()
    }

    pub fn matches(&self, listing: &JobListing) -> bool {
        // A listing without a salary counts as 0: a minimum excludes it, a maximum does not.
        let salary = listing.salary.unwrap_or(0.0);
        if let Some(min) = active_bound(self.filters.min_salary) {
            if salary < min {
                return false;
            }
        }
        if let Some(max) = active_bound(self.filters.max_salary) {
            if salary > max {
                return false;
            }
        }

        if !self.filters.job_types.is_empty() {
            let allowed = listing
                .job_type
                .as_ref()
                .is_some_and(|t| self.filters.job_types.contains(t));
            if !allowed {
                return false;
            }
        }

        if self.filters.remote_only && !listing.is_remote {
            return false;
        }

        if !self.excluded_keywords.is_empty() {
            let text = format!("{} {}", listing.title, listing.description).to_lowercase();
            if self
                .excluded_keywords
                .iter()
                .any(|kw| text.contains(kw.as_str()))
            {
                return false;
            }
        }

        true
    }
}

fn active_bound(bound: Option<f64>) -> Option<f64> {
    bound.filter(|b| *b > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::Platform;

    fn make_listing(id: &str, title: &str, salary: Option<f64>) -> JobListing {
        JobListing {
            id: id.to_string(),
            title: title.to_string(),
            company: "Initech".to_string(),
            location: Some("Remote".to_string()),
            description: String::new(),
            job_type: Some("full-time".to_string()),
            is_remote: true,
            url: String::new(),
            platform: Platform::Indeed,
            salary,
            salary_currency: Some("EUR".to_string()),
            posted_date: None,
        }
    }

    fn ids(listings: &[JobListing]) -> Vec<&str> {
        listings.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filters_keep_everything() {
        let listings = vec![make_listing("a", "Dev", None), make_listing("b", "Ops", Some(1.0))];
        let kept = JobFilter::new(JobFilters::default()).filter(listings.clone());
        assert_eq!(kept, listings);
    }

    #[test]
    fn test_min_salary_excludes_listings_without_salary() {
        let filter = JobFilter::new(JobFilters {
            min_salary: Some(40_000.0),
            ..JobFilters::default()
        });
        let kept = filter.filter(vec![
            make_listing("none", "Dev", None),
            make_listing("low", "Dev", Some(30_000.0)),
            make_listing("ok", "Dev", Some(45_000.0)),
        ]);
        assert_eq!(ids(&kept), vec!["ok"]);
    }

    #[test]
    fn test_max_salary_keeps_listings_without_salary() {
        let filter = JobFilter::new(JobFilters {
            max_salary: Some(60_000.0),
            ..JobFilters::default()
        });
        let kept = filter.filter(vec![
            make_listing("none", "Dev", None),
            make_listing("high", "Dev", Some(90_000.0)),
            make_listing("edge", "Dev", Some(60_000.0)),
        ]);
        assert_eq!(ids(&kept), vec!["none", "edge"]);
    }

    #[test]
    fn test_job_type_membership() {
        let filter = JobFilter::new(JobFilters {
            job_types: vec!["contract".to_string(), "freelance".to_string()],
            ..JobFilters::default()
        });
        let mut contract = make_listing("c", "Dev", None);
        contract.job_type = Some("contract".to_string());
        let mut untyped = make_listing("u", "Dev", None);
        untyped.job_type = None;

        let kept = filter.filter(vec![make_listing("f", "Dev", None), contract, untyped]);
        assert_eq!(ids(&kept), vec!["c"]);
    }

    #[test]
    fn test_remote_only_requires_remote() {
        let filter = JobFilter::new(JobFilters {
            remote_only: true,
            ..JobFilters::default()
        });
        let mut onsite = make_listing("onsite", "Dev", None);
        onsite.is_remote = false;
        let kept = filter.filter(vec![onsite, make_listing("remote", "Dev", None)]);
        assert_eq!(ids(&kept), vec!["remote"]);
    }

    #[test]
    fn test_excluded_keyword_in_description_disqualifies() {
        let filter = JobFilter::new(JobFilters {
            excluded_keywords: vec!["Unpaid".to_string()],
            ..JobFilters::default()
        });
        let mut unpaid = make_listing("x", "Intern", None);
        unpaid.description = "This is an UNPAID role".to_string();
        assert!(!filter.matches(&unpaid));
        assert!(filter.matches(&make_listing("y", "Intern", None)));
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let filter = JobFilter::new(JobFilters {
            min_salary: Some(50_000.0),
            remote_only: true,
            excluded_keywords: vec!["senior".to_string()],
            ..JobFilters::default()
        });
        let kept = filter.filter(vec![
            make_listing("pass", "Engineer", Some(55_000.0)),
            make_listing("senior", "Senior Engineer", Some(80_000.0)),
            make_listing("cheap", "Engineer", Some(20_000.0)),
        ]);
        assert_eq!(ids(&kept), vec!["pass"]);
    }

    #[test]
    fn test_null_filters_disable_their_predicates() {
        let filters: JobFilters = serde_json::from_str(
            r#"{"job_types": null, "remote_only": null, "excluded_keywords": null}"#,
        )
        .unwrap();
        assert_eq!(filters, JobFilters::default());
    }

    #[test]
    fn test_blank_excluded_keyword_excludes_everything() {
        let filter = JobFilter::new(JobFilters {
            excluded_keywords: vec![String::new()],
            ..JobFilters::default()
        });
        assert!(!filter.matches(&make_listing("a", "Dev", None)));
    }
}
