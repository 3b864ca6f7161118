use crate::error::ReminderError;
use crate::shared::usecase::UseCase;
use checkin_reminders_domain::{Recurrence, RecurrenceError, Reminder, ReminderCategory, ID};
use checkin_reminders_infra::ReminderContext;
use chrono::NaiveDateTime;
use tracing::info;

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub user_id: ID,
    pub title: String,
    pub message: String,
    pub category: ReminderCategory,
    pub recurrence: Recurrence,
    /// Required for `Once` and `Custom` reminders, computed from the
    /// recurrence rule for the others when left out
    pub scheduled_for: Option<NaiveDateTime>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmptyTitle,
    EmptyMessage,
    InvalidRecurrence(RecurrenceError),
    MissingScheduledTime,
    StorageError,
}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyTitle => Self::Validation("The reminder title is empty".into()),
            UseCaseError::EmptyMessage => {
                Self::Validation("The reminder message is empty".into())
            }
            UseCaseError::InvalidRecurrence(e) => Self::Validation(e.to_string()),
            UseCaseError::MissingScheduledTime => Self::Validation(
                "One-off and custom reminders need an explicit time to be scheduled for".into(),
            ),
            UseCaseError::StorageError => Self::storage(),
        }
    }
}

#[async_trait::async_trait]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        if self.title.trim().is_empty() {
            return Err(UseCaseError::EmptyTitle);
        }
        if self.message.trim().is_empty() {
            return Err(UseCaseError::EmptyMessage);
        }
        self.recurrence
            .validate()
            .map_err(UseCaseError::InvalidRecurrence)?;

        let now = ctx.sys.now();
        let scheduled_for = match self.scheduled_for {
            Some(scheduled_for) => scheduled_for,
            None if self.recurrence.needs_explicit_time() => {
                return Err(UseCaseError::MissingScheduledTime)
            }
            None => self
                .recurrence
                .next_occurrence(now, now)
                .map_err(UseCaseError::InvalidRecurrence)?,
        };

        let reminder = Reminder::new(
            self.user_id,
            &self.title,
            &self.message,
            self.category,
            self.recurrence.clone(),
            scheduled_for,
            now,
        );

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        info!(
            reminder_id = %reminder.id,
            frequency = ?reminder.recurrence.frequency(),
            scheduled_for = %reminder.scheduled_for,
            "Reminder created"
        );
        Ok(reminder)
    }
}
