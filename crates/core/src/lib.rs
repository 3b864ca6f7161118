mod error;
mod job_schedulers;
mod reminder;
mod shared;

pub use error::ReminderError;
pub use job_schedulers::{send_due_reminders, start_due_reminders_job, DueReminderTracker};
pub use reminder::{NewReminder, ReminderChanges, ReminderController};
