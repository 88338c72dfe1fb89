use sqlx::PgPool;
use uuid::Uuid;

use crate::models::criteria::{SearchCriteria, SearchCriteriaRow};

pub async fn get_criteria(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<SearchCriteriaRow>, sqlx::Error> {
    sqlx::query_as::<_, SearchCriteriaRow>("SELECT * FROM search_criteria WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Stored criteria for a user, or the neutral default when none are stored.
pub async fn load_criteria(pool: &PgPool, user_id: Uuid) -> Result<SearchCriteria, sqlx::Error> {
    Ok(get_criteria(pool, user_id)
        .await?
        .map(SearchCriteria::from)
        .unwrap_or_default())
}

/// Replaces the user's criteria wholesale, creating the row on first write.
pub async fn upsert_criteria(
    pool: &PgPool,
    user_id: Uuid,
    criteria: &SearchCriteria,
) -> Result<SearchCriteriaRow, sqlx::Error> {
    sqlx::query_as::<_, SearchCriteriaRow>(
        r#"
        INSERT INTO search_criteria
            (user_id, domain, sectors, location, preferred_locations, remote_only,
             job_type, internship_duration, required_keywords, excluded_keywords,
             preferred_start_date, earliest_start_date, latest_start_date,
             min_salary, max_salary, salary_currency, platforms,
             min_experience_years, max_experience_years)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                $11, $12, $13, $14, $15, $16, $17, $18, $19)
        ON CONFLICT (user_id) DO UPDATE SET
            domain = EXCLUDED.domain,
            sectors = EXCLUDED.sectors,
            location = EXCLUDED.location,
            preferred_locations = EXCLUDED.preferred_locations,
            remote_only = EXCLUDED.remote_only,
            job_type = EXCLUDED.job_type,
            internship_duration = EXCLUDED.internship_duration,
            required_keywords = EXCLUDED.required_keywords,
            excluded_keywords = EXCLUDED.excluded_keywords,
            preferred_start_date = EXCLUDED.preferred_start_date,
            earliest_start_date = EXCLUDED.earliest_start_date,
            latest_start_date = EXCLUDED.latest_start_date,
            min_salary = EXCLUDED.min_salary,
            max_salary = EXCLUDED.max_salary,
            salary_currency = EXCLUDED.salary_currency,
            platforms = EXCLUDED.platforms,
            min_experience_years = EXCLUDED.min_experience_years,
            max_experience_years = EXCLUDED.max_experience_years,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&criteria.domain)
    .bind(&criteria.sectors)
    .bind(&criteria.location)
    .bind(&criteria.preferred_locations)
    .bind(criteria.remote_only)
    .bind(criteria.job_type.map(|t| t.as_str()))
    .bind(&criteria.internship_duration)
    .bind(&criteria.required_keywords)
    .bind(&criteria.excluded_keywords)
    .bind(criteria.preferred_start_date)
    .bind(criteria.earliest_start_date)
    .bind(criteria.latest_start_date)
    .bind(criteria.min_salary)
    .bind(criteria.max_salary)
    .bind(&criteria.salary_currency)
    .bind(&criteria.platforms)
    .bind(criteria.min_experience_years)
    .bind(criteria.max_experience_years)
    .fetch_one(pool)
    .await
}
