mod date;
mod filter;
mod grouping;
mod recurrence;
mod reminder;
mod shared;

pub use filter::{filter_reminders, InvalidFilterError, ReminderCounts, ReminderFilter};
pub use grouping::{group_reminders, ReminderBucket, ReminderGroup};
pub use recurrence::{Recurrence, RecurrenceError, ReminderFrequency};
pub use reminder::{
    Reminder, ReminderCategory, ReminderStatus, SnoozeError, SNOOZE_LIMIT_MINUTES,
};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use shared::weekday::{InvalidWeekDayError, WeekDay};
