use async_trait::async_trait;
use crate::error::Result;
use crate::models::{NewReminder, Reminder};

/// Trait for reminder persistence
/// 
/// Reminders are created and listed, never updated or deleted. Implementations
/// stamp `created_at` themselves at insert time.
#[async_trait]
pub trait ReminderStore: Send + Sync {
    /// Insert a reminder and return the stored record
    async fn add_reminder(&self, reminder: NewReminder) -> Result<Reminder>;
    
    /// All reminders for a session, oldest first by `created_at`
    async fn list_reminders(&self, session_id: &str) -> Result<Vec<Reminder>>;
    
    /// Lightweight reachability check
    async fn ping(&self) -> Result<()>;
}
