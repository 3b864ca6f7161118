mod notifier;

pub use notifier::{IReminderNotifier, LogReminderNotifier};
