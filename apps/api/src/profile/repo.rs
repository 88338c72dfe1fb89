use sqlx::PgPool;
use uuid::Uuid;

use crate::models::profile::{Skills, UserProfile, UserProfileRow};

pub async fn get_profile(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<UserProfileRow>, sqlx::Error> {
    sqlx::query_as::<_, UserProfileRow>("SELECT * FROM user_profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Profile snapshot for matching; `None` when the user has no profile.
pub async fn load_profile(pool: &PgPool, user_id: Uuid) -> Result<Option<UserProfile>, sqlx::Error> {
    Ok(get_profile(pool, user_id).await?.map(UserProfile::from))
}

pub async fn upsert_profile(
    pool: &PgPool,
    user_id: Uuid,
    profile: &UserProfile,
) -> Result<UserProfileRow, sqlx::Error> {
    let skills = profile.skills.as_ref().map(Skills::to_storage);

    sqlx::query_as::<_, UserProfileRow>(
        r#"
        INSERT INTO user_profiles
            (user_id, current_position, current_company, years_of_experience, education,
             skills, languages, preferred_job_types, preferred_locations,
             salary_expectation_min, salary_expectation_max, remote_preference,
             bio, linkedin_url, github_url, portfolio_url)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
        ON CONFLICT (user_id) DO UPDATE SET
            current_position = EXCLUDED.current_position,
            current_company = EXCLUDED.current_company,
            years_of_experience = EXCLUDED.years_of_experience,
            education = EXCLUDED.education,
            skills = EXCLUDED.skills,
            languages = EXCLUDED.languages,
            preferred_job_types = EXCLUDED.preferred_job_types,
            preferred_locations = EXCLUDED.preferred_locations,
            salary_expectation_min = EXCLUDED.salary_expectation_min,
            salary_expectation_max = EXCLUDED.salary_expectation_max,
            remote_preference = EXCLUDED.remote_preference,
            bio = EXCLUDED.bio,
            linkedin_url = EXCLUDED.linkedin_url,
            github_url = EXCLUDED.github_url,
            portfolio_url = EXCLUDED.portfolio_url,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&profile.current_position)
    .bind(&profile.current_company)
    .bind(profile.years_of_experience)
    .bind(&profile.education)
    .bind(skills)
    .bind(&profile.languages)
    .bind(&profile.preferred_job_types)
    .bind(&profile.preferred_locations)
    .bind(profile.salary_expectation_min)
    .bind(profile.salary_expectation_max)
    .bind(profile.remote_preference)
    .bind(&profile.bio)
    .bind(&profile.linkedin_url)
    .bind(&profile.github_url)
    .bind(&profile.portfolio_url)
    .fetch_one(pool)
    .await
}
