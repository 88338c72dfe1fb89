use sqlx::PgPool;
use uuid::Uuid;

use crate::models::application::{ApplicationRow, ApplicationStatus};
use crate::models::listing::Platform;

pub struct NewApplication<'a> {
    pub user_id: Uuid,
    pub platform: Platform,
    pub external_id: &'a str,
    pub resume_id: Option<Uuid>,
    pub cover_letter: Option<&'a str>,
    pub notes: Option<&'a str>,
}

pub async fn create_application(
    pool: &PgPool,
    new: &NewApplication<'_>,
) -> Result<ApplicationRow, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        r#"
        INSERT INTO applications
            (user_id, job_platform, job_external_id, resume_id, status, cover_letter, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(new.user_id)
    .bind(new.platform.as_str())
    .bind(new.external_id)
    .bind(new.resume_id)
    .bind(ApplicationStatus::Draft.as_str())
    .bind(new.cover_letter)
    .bind(new.notes)
    .fetch_one(pool)
    .await
}

/// Newest first, optionally narrowed to one status.
pub async fn list_applications(
    pool: &PgPool,
    user_id: Uuid,
    status: Option<ApplicationStatus>,
) -> Result<Vec<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        r#"
        SELECT * FROM applications
        WHERE user_id = $1 AND ($2::text IS NULL OR status = $2)
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .bind(status.map(|s| s.as_str()))
    .fetch_all(pool)
    .await
}

pub async fn get_application(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> Result<Option<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        "SELECT * FROM applications WHERE id = $1 AND user_id = $2",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Moves an application to `status`. `submitted_at` is stamped on the first
/// move into `submitted` and kept afterwards; `notes` is replaced only when given.
pub async fn update_status(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
    status: ApplicationStatus,
    notes: Option<&str>,
) -> Result<Option<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        r#"
        UPDATE applications SET
            status = $3,
            submitted_at = CASE
                WHEN $3 = 'submitted' AND submitted_at IS NULL THEN now()
                ELSE submitted_at
            END,
            notes = COALESCE($4, notes),
            updated_at = now()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(status.as_str())
    .bind(notes)
    .fetch_optional(pool)
    .await
}

/// Returns whether a row was deleted.
pub async fn delete_application(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM applications WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn list_statuses(pool: &PgPool, user_id: Uuid) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT status FROM applications WHERE user_id = $1")
        .bind(user_id)
        .fetch_all(pool)
        .await
}
