use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::models::{Reminder, ReminderTime};

/// MongoDB-specific reminder document (uses ObjectId)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoReminder {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub session_id: String,
    pub medicine_name: String,
    pub dosage: String,
    pub time: ReminderTime,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl From<MongoReminder> for Reminder {
    fn from(doc: MongoReminder) -> Self {
        Self {
            id: doc.id.to_hex(),
            session_id: doc.session_id,
            medicine_name: doc.medicine_name,
            dosage: doc.dosage,
            time: doc.time,
            created_at: doc.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    
    #[test]
    fn test_document_field_names() {
        let doc = MongoReminder {
            id: ObjectId::new(),
            session_id: "user_1700000000123456".to_string(),
            medicine_name: "Metformin".to_string(),
            dosage: "500mg".to_string(),
            time: "07:30".parse().unwrap(),
            created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        };
        
        let bson_doc = bson::to_document(&doc).unwrap();
        assert_eq!(bson_doc.get_str("time").unwrap(), "07:30");
        assert_eq!(bson_doc.get_str("session_id").unwrap(), "user_1700000000123456");
        assert!(bson_doc.get_datetime("created_at").is_ok());
        assert!(bson_doc.get_object_id("_id").is_ok());
        
        let back: MongoReminder = bson::from_document(bson_doc).unwrap();
        let reminder: Reminder = back.into();
        assert_eq!(reminder.time.to_string(), "07:30");
        assert_eq!(reminder.created_at.timestamp(), 1_700_000_000);
    }
}
