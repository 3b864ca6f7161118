use crate::{reminder::get_reminders::GetRemindersUseCase, shared::usecase::execute};
use checkin_reminders_domain::{filter_reminders, Reminder, ReminderFilter, ID};
use checkin_reminders_infra::ReminderContext;
use chrono::NaiveDateTime;
use futures::future::join_all;
use std::collections::HashSet;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{error, info};

/// Remembers which reminders were already reported as due, so that a
/// `Reminder` is only reported once per time it becomes overdue.
#[derive(Debug, Default)]
pub struct DueReminderTracker {
    notified: HashSet<(ID, NaiveDateTime)>,
}

impl DueReminderTracker {
    /// Takes the currently overdue reminders and returns the ones that were not
    /// overdue at the previous call. Reminders that left the overdue state, e.g.
    /// by being snoozed or rescheduled, are forgotten and reported again
    /// when they become due the next time.
    pub fn newly_due<'a>(
        &mut self,
        overdue: Vec<&'a Reminder>,
        now: NaiveDateTime,
    ) -> Vec<&'a Reminder> {
        let current: HashSet<_> = overdue
            .iter()
            .map(|r| (r.id, r.effective_time(now)))
            .collect();
        let newly_due = overdue
            .into_iter()
            .filter(|r| !self.notified.contains(&(r.id, r.effective_time(now))))
            .collect();
        self.notified = current;
        newly_due
    }
}

pub fn start_due_reminders_job(ctx: ReminderContext) -> JoinHandle<()> {
    tokio::spawn(async move {
        let owner_id = ctx.config.owner_id;
        let mut tracker = DueReminderTracker::default();
        let mut poll_interval = interval(Duration::from_secs(ctx.config.due_poll_interval_secs));
        info!(
            owner_id = %owner_id,
            interval_secs = ctx.config.due_poll_interval_secs,
            "Due reminders job started"
        );
        loop {
            poll_interval.tick().await;
            send_due_reminders(&ctx, &owner_id, &mut tracker).await;
        }
    })
}

/// Notifies about every reminder of the user that became due since the last run.
/// Returns how many reminders were sent to the notifier.
pub async fn send_due_reminders(
    ctx: &ReminderContext,
    user_id: &ID,
    tracker: &mut DueReminderTracker,
) -> usize {
    let usecase = GetRemindersUseCase { user_id: *user_id };
    let reminders = match execute(usecase, ctx).await {
        Ok(reminders) => reminders,
        Err(_) => return 0,
    };

    let now = ctx.sys.now();
    let overdue = filter_reminders(&reminders, ReminderFilter::Overdue, now);
    let due = tracker.newly_due(overdue, now);

    let results = join_all(due.iter().map(|r| ctx.notifier.notify_due(r))).await;
    for (reminder, res) in due.iter().zip(results) {
        if let Err(e) = res {
            error!(
                reminder_id = %reminder.id,
                "Error notifying about due reminder: {:?}",
                e
            );
        }
    }
    due.len()
}
