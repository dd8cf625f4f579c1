pub mod chat;
pub mod clinics;
pub mod health;
pub mod page;
pub mod reminders;
pub mod session;
