use super::{
    complete_reminder::CompleteReminderUseCase, create_reminder::CreateReminderUseCase,
    delete_reminders::DeleteRemindersUseCase, get_reminders::GetRemindersUseCase,
    snooze_reminder::SnoozeReminderUseCase, toggle_reminder::ToggleReminderUseCase,
    update_reminder::UpdateReminderUseCase,
};
use crate::error::ReminderError;
use crate::shared::usecase::execute;
use checkin_reminders_domain::{
    filter_reminders, group_reminders, Recurrence, Reminder, ReminderCategory, ReminderCounts,
    ReminderFilter, ReminderGroup, ID,
};
use checkin_reminders_infra::ReminderContext;
use chrono::NaiveDateTime;

/// Input for `ReminderController::create`
#[derive(Debug, Clone)]
pub struct NewReminder {
    pub title: String,
    pub message: String,
    pub category: ReminderCategory,
    pub recurrence: Recurrence,
    pub scheduled_for: Option<NaiveDateTime>,
}

/// Partial update for `ReminderController::update`, `None` leaves a field as is
#[derive(Debug, Clone, Default)]
pub struct ReminderChanges {
    pub title: Option<String>,
    pub message: Option<String>,
    pub category: Option<ReminderCategory>,
    pub recurrence: Option<Recurrence>,
    pub scheduled_for: Option<NaiveDateTime>,
}

/// Owns the reminder collection of a single user.
///
/// Every mutation is written to the store first. The in-memory collection
/// only changes after the store accepted the change, so a failed write
/// leaves it exactly as it was.
pub struct ReminderController {
    ctx: ReminderContext,
    user_id: ID,
    reminders: Vec<Reminder>,
}

impl ReminderController {
    pub async fn load(ctx: ReminderContext, user_id: ID) -> Result<Self, ReminderError> {
        let mut controller = Self {
            ctx,
            user_id,
            reminders: Vec::new(),
        };
        controller.reload().await?;
        Ok(controller)
    }

    pub async fn reload(&mut self) -> Result<(), ReminderError> {
        let usecase = GetRemindersUseCase {
            user_id: self.user_id,
        };
        self.reminders = execute(usecase, &self.ctx).await?;
        self.sort();
        Ok(())
    }

    pub fn user_id(&self) -> &ID {
        &self.user_id
    }

    /// The collection ordered by `scheduled_for`
    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn find(&self, reminder_id: &ID) -> Option<&Reminder> {
        self.reminders.iter().find(|r| r.id == *reminder_id)
    }

    pub fn now(&self) -> NaiveDateTime {
        self.ctx.sys.now()
    }

    pub fn filtered(&self, filter: ReminderFilter) -> Vec<&Reminder> {
        filter_reminders(&self.reminders, filter, self.now())
    }

    pub fn grouped(&self, filter: ReminderFilter) -> Vec<ReminderGroup<'_>> {
        let now = self.now();
        group_reminders(filter_reminders(&self.reminders, filter, now), now)
    }

    pub fn counts(&self) -> ReminderCounts {
        ReminderCounts::new(&self.reminders, self.now())
    }

    pub async fn create(&mut self, new_reminder: NewReminder) -> Result<Reminder, ReminderError> {
        let NewReminder {
            title,
            message,
            category,
            recurrence,
            scheduled_for,
        } = new_reminder;
        let usecase = CreateReminderUseCase {
            user_id: self.user_id,
            title,
            message,
            category,
            recurrence,
            scheduled_for,
        };
        let reminder = execute(usecase, &self.ctx).await?;
        self.upsert(reminder.clone());
        Ok(reminder)
    }

    pub async fn update(
        &mut self,
        reminder_id: &ID,
        changes: ReminderChanges,
    ) -> Result<Reminder, ReminderError> {
        let ReminderChanges {
            title,
            message,
            category,
            recurrence,
            scheduled_for,
        } = changes;
        let usecase = UpdateReminderUseCase {
            user_id: self.user_id,
            reminder_id: *reminder_id,
            title,
            message,
            category,
            recurrence,
            scheduled_for,
        };
        let reminder = execute(usecase, &self.ctx).await?;
        self.upsert(reminder.clone());
        Ok(reminder)
    }

    /// Completing an already completed reminder returns it unchanged
    pub async fn complete(&mut self, reminder_id: &ID) -> Result<Reminder, ReminderError> {
        let usecase = CompleteReminderUseCase {
            user_id: self.user_id,
            reminder_id: *reminder_id,
        };
        let reminder = execute(usecase, &self.ctx).await?;
        self.upsert(reminder.clone());
        Ok(reminder)
    }

    pub async fn snooze(
        &mut self,
        reminder_id: &ID,
        minutes: i64,
    ) -> Result<Reminder, ReminderError> {
        let usecase = SnoozeReminderUseCase {
            user_id: self.user_id,
            reminder_id: *reminder_id,
            minutes,
        };
        let reminder = execute(usecase, &self.ctx).await?;
        self.upsert(reminder.clone());
        Ok(reminder)
    }

    pub async fn toggle(&mut self, reminder_id: &ID) -> Result<Reminder, ReminderError> {
        let usecase = ToggleReminderUseCase {
            user_id: self.user_id,
            reminder_id: *reminder_id,
        };
        let reminder = execute(usecase, &self.ctx).await?;
        self.upsert(reminder.clone());
        Ok(reminder)
    }

    /// Unknown ids are ignored
    pub async fn delete(&mut self, reminder_id: &ID) -> Result<(), ReminderError> {
        self.delete_many(&[*reminder_id]).await.map(|_| ())
    }

    /// Returns how many reminders were removed. Either all of the listed
    /// reminders are removed or, on failure, none of them.
    pub async fn delete_many(&mut self, reminder_ids: &[ID]) -> Result<usize, ReminderError> {
        let usecase = DeleteRemindersUseCase {
            user_id: self.user_id,
            reminder_ids: reminder_ids.to_vec(),
        };
        let deleted = execute(usecase, &self.ctx).await?;
        self.reminders
            .retain(|r| !deleted.iter().any(|d| d.id == r.id));
        Ok(deleted.len())
    }

    fn upsert(&mut self, reminder: Reminder) {
        match self.reminders.iter_mut().find(|r| r.id == reminder.id) {
            Some(existing) => *existing = reminder,
            None => self.reminders.push(reminder),
        }
        self.sort();
    }

    fn sort(&mut self) {
        self.reminders
            .sort_by(|a, b| (a.scheduled_for, a.created_at).cmp(&(b.scheduled_for, b.created_at)));
    }
}
