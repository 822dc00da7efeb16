//! # Authentication Module
//!
//! Edit passwords for lawyer schedules. Passwords are hashed with Argon2 and
//! checked through the store before a protected schedule is replaced.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use eyre::Result;
use lawbook_core::{errors::LawbookError, models::schedule::LawyerSchedule};
use lawbook_db::Store;

/// Hashes a password with a fresh random salt, returning a PHC string.
///
/// # Example
///
/// ```
/// use lawbook_api::middleware::auth::hash_password;
///
/// let hashed = hash_password("s3cret").unwrap();
/// assert!(hashed.starts_with("$argon2"));
/// ```
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Makes sure the caller may act for the lawyer owning `schedule`: replace
/// it, or confirm and complete their bookings.
///
/// Unprotected schedules are always editable. Protected ones need the
/// current password.
///
/// # Errors
///
/// * `LawbookError::Authentication` - password missing or wrong
pub async fn authorize_schedule_edit(
    store: &dyn Store,
    schedule: &LawyerSchedule,
    password: Option<&str>,
) -> Result<(), LawbookError> {
    if schedule.password_hash.is_none() {
        return Ok(());
    }

    let password = password.ok_or_else(|| {
        LawbookError::Authentication("This schedule is password protected".to_string())
    })?;

    let is_valid = store
        .verify_password(schedule.lawyer_id, password.to_string())
        .await?;
    if !is_valid {
        return Err(LawbookError::Authentication("Invalid password".to_string()));
    }

    Ok(())
}
