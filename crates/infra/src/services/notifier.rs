use checkin_reminders_domain::Reminder;
use tracing::info;

/// Delivery of a due `Reminder` to the people it concerns, e.g. by push, email or sms.
/// Fire and forget, the reminder engine does not track delivery.
#[async_trait::async_trait]
pub trait IReminderNotifier: Send + Sync {
    async fn notify_due(&self, reminder: &Reminder) -> anyhow::Result<()>;
}

/// Notifier that only records due reminders in the logs
pub struct LogReminderNotifier {}

#[async_trait::async_trait]
impl IReminderNotifier for LogReminderNotifier {
    async fn notify_due(&self, reminder: &Reminder) -> anyhow::Result<()> {
        info!(
            reminder_id = %reminder.id,
            user_id = %reminder.user_id,
            scheduled_for = %reminder.scheduled_for,
            "Reminder is due: {}",
            reminder.title
        );
        Ok(())
    }
}
