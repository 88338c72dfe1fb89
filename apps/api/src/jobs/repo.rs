use sqlx::PgPool;
use tracing::debug;

use crate::models::listing::{JobListing, JobListingRow, Platform};

/// Inserts or refreshes listings keyed by `(platform, external_id)`.
pub async fn upsert_listings(pool: &PgPool, listings: &[&JobListing]) -> Result<usize, sqlx::Error> {
    let mut written = 0;

    for listing in listings {
        sqlx::query(
            r#"
            INSERT INTO job_listings
                (platform, external_id, title, company, location, description,
                 job_type, is_remote, url, salary, salary_currency, posted_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (platform, external_id) DO UPDATE SET
                title = EXCLUDED.title,
                company = EXCLUDED.company,
                location = EXCLUDED.location,
                description = EXCLUDED.description,
                job_type = EXCLUDED.job_type,
                is_remote = EXCLUDED.is_remote,
                url = EXCLUDED.url,
                salary = EXCLUDED.salary,
                salary_currency = EXCLUDED.salary_currency,
                posted_date = EXCLUDED.posted_date,
                fetched_at = now()
            "#,
        )
        .bind(listing.platform.as_str())
        .bind(&listing.id)
        .bind(&listing.title)
        .bind(&listing.company)
        .bind(&listing.location)
        .bind(&listing.description)
        .bind(&listing.job_type)
        .bind(listing.is_remote)
        .bind(&listing.url)
        .bind(listing.salary)
        .bind(&listing.salary_currency)
        .bind(listing.posted_date)
        .execute(pool)
        .await?;
        written += 1;
    }

    debug!("Upserted {written} job listings");
    Ok(written)
}

pub async fn get_listing(
    pool: &PgPool,
    platform: Platform,
    external_id: &str,
) -> Result<Option<JobListing>, sqlx::Error> {
    let row = sqlx::query_as::<_, JobListingRow>(
        "SELECT * FROM job_listings WHERE platform = $1 AND external_id = $2",
    )
    .bind(platform.as_str())
    .bind(external_id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(JobListing::from))
}
