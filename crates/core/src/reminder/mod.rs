mod complete_reminder;
mod controller;
mod create_reminder;
mod delete_reminders;
pub(crate) mod get_reminders;
mod snooze_reminder;
mod toggle_reminder;
mod update_reminder;

pub use controller::{NewReminder, ReminderChanges, ReminderController};
