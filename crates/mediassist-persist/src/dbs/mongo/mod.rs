pub mod client;
pub mod models;
pub mod repository;

pub use client::MongoReminderStore;
pub use models::MongoReminder;
pub use repository::MongoReminderRepository;
