pub mod reminder;
pub mod time;

pub use reminder::{NewReminder, Reminder, sort_by_time};
pub use time::ReminderTime;
