//! Application statistics: status tallies plus response and acceptance rates.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::matching::relevance::round_one_decimal;
use crate::models::application::ApplicationStatus;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationStats {
    pub total: usize,
    pub submitted: usize,
    /// Applications still waiting on an outcome: draft, pending, submitted or reviewed.
    pub pending: usize,
    pub accepted: usize,
    pub rejected: usize,
    /// Percentage of applications that got an answer (accepted or rejected).
    pub response_rate: f64,
    pub acceptance_rate: f64,
    /// One entry per status, zero-filled.
    pub status_counts: BTreeMap<String, usize>,
}

pub fn compute_application_stats(statuses: &[ApplicationStatus]) -> ApplicationStats {
    let mut status_counts: BTreeMap<String, usize> = ApplicationStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), 0))
        .collect();
    for status in statuses {
        *status_counts.entry(status.as_str().to_string()).or_default() += 1;
    }

    let count = |status: ApplicationStatus| status_counts[status.as_str()];
    let total = statuses.len();
    let submitted = count(ApplicationStatus::Submitted);
    let accepted = count(ApplicationStatus::Accepted);
    let rejected = count(ApplicationStatus::Rejected);
    let pending = count(ApplicationStatus::Draft)
        + count(ApplicationStatus::Pending)
        + submitted
        + count(ApplicationStatus::Reviewed);

    ApplicationStats {
        total,
        submitted,
        pending,
        accepted,
        rejected,
        response_rate: percentage(accepted + rejected, total),
        acceptance_rate: percentage(accepted, total),
        status_counts,
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_one_decimal(part as f64 / total as f64 * 100.0)
}
