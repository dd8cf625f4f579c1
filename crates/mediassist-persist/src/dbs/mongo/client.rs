use mongodb::{Client, bson::doc};
use async_trait::async_trait;

use crate::trait_client::ReminderStore;
use crate::models::{NewReminder, Reminder};
use crate::dbs::mongo::repository::MongoReminderRepository;
use crate::error::{Result, PersistError};

pub struct MongoReminderStore {
    client: Client,
    database: String,
    repo: MongoReminderRepository,
}

impl MongoReminderStore {
    /// Create client for the given connection string
    /// 
    /// The driver connects lazily; use `ping` to verify reachability.
    pub async fn connect(mongodb_uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongodb_uri)
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;
        
        let repo = MongoReminderRepository::new(&client, database);
        
        Ok(Self {
            client,
            database: database.to_string(),
            repo,
        })
    }
}

#[async_trait]
impl ReminderStore for MongoReminderStore {
    async fn add_reminder(&self, reminder: NewReminder) -> Result<Reminder> {
        let stored = self.repo.insert(reminder).await?;
        tracing::debug!(reminder_id = %stored.id, "Reminder inserted");
        Ok(stored.into())
    }
    
    async fn list_reminders(&self, session_id: &str) -> Result<Vec<Reminder>> {
        let docs = self.repo.list_by_session(session_id).await?;
        Ok(docs.into_iter().map(Reminder::from).collect())
    }
    
    async fn ping(&self) -> Result<()> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}
