pub mod models;
pub mod trait_client;
pub mod dbs;
pub mod error;

pub use models::{NewReminder, Reminder, ReminderTime, sort_by_time};
pub use trait_client::ReminderStore;
pub use dbs::memory::InMemoryReminderStore;
#[cfg(feature = "mongodb")]
pub use dbs::mongo::MongoReminderStore;
pub use error::{PersistError, Result};

/// Collection holding reminder documents
pub const REMINDERS_COLLECTION: &str = "reminders";
