use crate::models::criteria::SearchCriteria;
use crate::sources::SourceRegistry;

/// Returns every consistency problem in `criteria`; empty means valid.
pub fn criteria_problems(criteria: &SearchCriteria, sources: &SourceRegistry) -> Vec<String> {
    let mut problems = Vec::new();

    if let (Some(min), Some(max)) = (criteria.min_salary, criteria.max_salary) {
        if min > max {
            problems.push(format!("min_salary ({min}) exceeds max_salary ({max})"));
        }
    }

    if let (Some(min), Some(max)) = (criteria.min_experience_years, criteria.max_experience_years)
    {
        if min > max {
            problems.push(format!(
                "min_experience_years ({min}) exceeds max_experience_years ({max})"
            ));
        }
    }

    if let (Some(earliest), Some(latest)) =
        (criteria.earliest_start_date, criteria.latest_start_date)
    {
        if earliest > latest {
            problems.push(format!(
                "earliest_start_date ({earliest}) is after latest_start_date ({latest})"
            ));
        }
    }

    for platform in &criteria.platforms {
        if !sources.is_supported(platform) {
            problems.push(format!("unsupported platform '{platform}'"));
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_default_criteria_are_valid() {
        let problems = criteria_problems(&SearchCriteria::default(), &SourceRegistry::with_defaults());
        assert!(problems.is_empty(), "{problems:?}");
    }

    #[test]
    fn test_inverted_salary_range() {
        let criteria = SearchCriteria {
            min_salary: Some(60_000.0),
            max_salary: Some(40_000.0),
            ..SearchCriteria::default()
        };
        let problems = criteria_problems(&criteria, &SourceRegistry::with_defaults());
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("min_salary"));
    }

    #[test]
    fn test_single_bound_is_fine() {
        let criteria = SearchCriteria {
            min_salary: Some(60_000.0),
            max_experience_years: Some(2),
            ..SearchCriteria::default()
        };
        assert!(criteria_problems(&criteria, &SourceRegistry::with_defaults()).is_empty());
    }

    #[test]
    fn test_inverted_experience_and_dates_are_all_reported() {
        let criteria = SearchCriteria {
            min_experience_years: Some(5),
            max_experience_years: Some(1),
            earliest_start_date: NaiveDate::from_ymd_opt(2026, 9, 1),
            latest_start_date: NaiveDate::from_ymd_opt(2026, 6, 1),
            ..SearchCriteria::default()
        };
        let problems = criteria_problems(&criteria, &SourceRegistry::with_defaults());
        assert_eq!(problems.len(), 2, "{problems:?}");
    }

    #[test]
    fn test_unsupported_platform_is_reported() {
        let criteria = SearchCriteria {
            platforms: vec!["LinkedIn".to_string(), "monster".to_string()],
            ..SearchCriteria::default()
        };
        let problems = criteria_problems(&criteria, &SourceRegistry::with_defaults());
        assert_eq!(problems, vec!["unsupported platform 'monster'".to_string()]);
    }
}
