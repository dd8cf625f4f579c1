use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::{NewReminder, Reminder};
use crate::trait_client::ReminderStore;

/// Process-local reminder store
/// 
/// Used when no database is configured for development, and in tests.
#[derive(Debug, Default)]
pub struct InMemoryReminderStore {
    reminders: RwLock<Vec<Reminder>>,
}

impl InMemoryReminderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReminderStore for InMemoryReminderStore {
    async fn add_reminder(&self, reminder: NewReminder) -> Result<Reminder> {
        let stored = reminder.into_reminder(uuid::Uuid::new_v4().to_string(), Utc::now());
        self.reminders.write().await.push(stored.clone());
        Ok(stored)
    }
    
    async fn list_reminders(&self, session_id: &str) -> Result<Vec<Reminder>> {
        let mut found: Vec<Reminder> = self
            .reminders
            .read()
            .await
            .iter()
            .filter(|r| r.session_id == session_id)
            .cloned()
            .collect();
        found.sort_by_key(|r| r.created_at);
        Ok(found)
    }
    
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
