use crate::models::DbSchedule;
use argon2::{Argon2, PasswordVerifier};
use chrono::Utc;
use eyre::{eyre, Result};
use lawbook_core::{errors::LawbookError, models::availability::WeeklyAvailability};
use sqlx::{types::Json, Pool, Postgres};
use uuid::Uuid;

/// Inserts or replaces a lawyer's weekly availability.
pub async fn upsert_schedule(
    pool: &Pool<Postgres>,
    lawyer_id: Uuid,
    availability: &WeeklyAvailability,
    password_hash: Option<&str>,
    timezone: &str,
) -> Result<DbSchedule> {
    let now = Utc::now();

    tracing::debug!(
        "Saving schedule: lawyer_id={}, has_password={}, timezone={}",
        lawyer_id,
        password_hash.is_some(),
        timezone
    );

    let schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        INSERT INTO lawyer_schedules (lawyer_id, availability, password_hash, timezone, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $5)
        ON CONFLICT (lawyer_id) DO UPDATE
        SET availability = EXCLUDED.availability,
            password_hash = EXCLUDED.password_hash,
            timezone = EXCLUDED.timezone,
            updated_at = EXCLUDED.updated_at
        RETURNING lawyer_id, availability, password_hash, timezone, created_at, updated_at
        "#,
    )
    .bind(lawyer_id)
    .bind(Json(availability))
    .bind(password_hash)
    .bind(timezone)
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Schedule saved: lawyer_id={}", lawyer_id);
    Ok(schedule)
}

pub async fn get_schedule_by_lawyer_id(
    pool: &Pool<Postgres>,
    lawyer_id: Uuid,
) -> Result<Option<DbSchedule>> {
    tracing::debug!("Getting schedule for lawyer: {}", lawyer_id);

    let schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT lawyer_id, availability, password_hash, timezone, created_at, updated_at
        FROM lawyer_schedules
        WHERE lawyer_id = $1
        "#,
    )
    .bind(lawyer_id)
    .fetch_optional(pool)
    .await?;

    if schedule.is_none() {
        tracing::debug!("No schedule saved for lawyer: {}", lawyer_id);
    }

    Ok(schedule)
}

/// Checks `password` against the schedule's stored Argon2 hash. A schedule
/// without a password accepts anything.
pub async fn verify_password(pool: &Pool<Postgres>, lawyer_id: Uuid, password: &str) -> Result<bool> {
    let schedule = get_schedule_by_lawyer_id(pool, lawyer_id)
        .await?
        .ok_or_else(|| {
            LawbookError::NotFound(format!("Schedule for lawyer {} not found", lawyer_id))
        })?;

    match schedule.password_hash {
        Some(hash) => verify_hash(&hash, password),
        None => Ok(true),
    }
}

pub fn verify_hash(hash: &str, password: &str) -> Result<bool> {
    let parsed_hash =
        argon2::PasswordHash::new(hash).map_err(|e| eyre!("Invalid password hash: {}", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
