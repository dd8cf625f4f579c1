use mongodb::{Client, Collection, bson::doc, bson::oid::ObjectId};
use futures::TryStreamExt;
use chrono::Utc;

use crate::dbs::mongo::models::MongoReminder;
use crate::models::NewReminder;
use crate::error::Result;
use crate::REMINDERS_COLLECTION;

#[derive(Clone)]
pub struct MongoReminderRepository {
    collection: Collection<MongoReminder>,
}

impl MongoReminderRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection(REMINDERS_COLLECTION);
        Self { collection }
    }
    
    /// Insert a reminder, stamping `created_at` with the current time
    pub async fn insert(&self, reminder: NewReminder) -> Result<MongoReminder> {
        let doc = MongoReminder {
            id: ObjectId::new(),
            session_id: reminder.session_id,
            medicine_name: reminder.medicine_name,
            dosage: reminder.dosage,
            time: reminder.time,
            created_at: Utc::now(),
        };
        
        self.collection.insert_one(&doc).await?;
        Ok(doc)
    }
    
    /// List reminders for a session ordered by creation time
    pub async fn list_by_session(&self, session_id: &str) -> Result<Vec<MongoReminder>> {
        let filter = doc! { "session_id": session_id };
        let reminders = self.collection
            .find(filter)
            .sort(doc! { "created_at": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(reminders)
    }
}
