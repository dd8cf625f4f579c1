use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use super::time::ReminderTime;
use crate::error::{PersistError, Result};

/// Database-agnostic reminder record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub session_id: String,
    pub medicine_name: String,
    pub dosage: String,
    pub time: ReminderTime,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a reminder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReminder {
    pub session_id: String,
    pub medicine_name: String,
    pub dosage: String,
    pub time: ReminderTime,
}

impl NewReminder {
    /// Build from raw form values; every field must be non-blank
    pub fn from_form(
        session_id: &str,
        medicine_name: &str,
        dosage: &str,
        time: &str,
    ) -> Result<Self> {
        let session_id = required("session_id", session_id)?;
        let medicine_name = required("medicine_name", medicine_name)?;
        let dosage = required("dosage", dosage)?;
        let time = required("time", time)?.parse()?;
        
        Ok(Self {
            session_id,
            medicine_name,
            dosage,
            time,
        })
    }
    
    /// Attach storage-assigned identity and timestamp
    pub fn into_reminder(self, id: String, created_at: DateTime<Utc>) -> Reminder {
        Reminder {
            id,
            session_id: self.session_id,
            medicine_name: self.medicine_name,
            dosage: self.dosage,
            time: self.time,
            created_at,
        }
    }
}

fn required(field: &'static str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(PersistError::MissingField(field));
    }
    Ok(value.to_string())
}

/// Sort reminders ascending by time of day
/// 
/// Stable, so reminders at the same time keep their creation order.
pub fn sort_by_time(reminders: &mut [Reminder]) {
    reminders.sort_by_key(|r| r.time);
}
