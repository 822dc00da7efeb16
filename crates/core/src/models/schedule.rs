use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::availability::WeeklyAvailability;

/// Timezone used to decide what "today" is when none is configured.
pub const DEFAULT_TIMEZONE: &str = "Asia/Ho_Chi_Minh";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LawyerSchedule {
    pub lawyer_id: Uuid,
    pub availability: WeeklyAvailability,
    pub password_hash: Option<String>,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateScheduleRequest {
    pub availability: WeeklyAvailability,
    /// Current edit password, required once the schedule is protected.
    pub password: Option<String>,
    /// Sets or replaces the edit password.
    pub new_password: Option<String>,
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetScheduleResponse {
    pub lawyer_id: Uuid,
    pub availability: WeeklyAvailability,
    pub is_protected: bool,
    pub timezone: String,
    pub updated_at: Option<DateTime<Utc>>,
}

impl GetScheduleResponse {
    /// Response for a lawyer who never saved a schedule: every day off.
    pub fn empty(lawyer_id: Uuid) -> Self {
        Self {
            lawyer_id,
            availability: WeeklyAvailability::default(),
            is_protected: false,
            timezone: DEFAULT_TIMEZONE.to_string(),
            updated_at: None,
        }
    }
}

impl From<LawyerSchedule> for GetScheduleResponse {
    fn from(schedule: LawyerSchedule) -> Self {
        Self {
            lawyer_id: schedule.lawyer_id,
            availability: schedule.availability,
            is_protected: schedule.password_hash.is_some(),
            timezone: schedule.timezone,
            updated_at: Some(schedule.updated_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateScheduleResponse {
    pub lawyer_id: Uuid,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPasswordRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPasswordResponse {
    pub valid: bool,
}
