use crate::error::ReminderError;
use crate::shared::usecase::UseCase;
use checkin_reminders_domain::{Reminder, SnoozeError, ID};
use checkin_reminders_infra::ReminderContext;
use tracing::info;

#[derive(Debug)]
pub struct SnoozeReminderUseCase {
    pub user_id: ID,
    pub reminder_id: ID,
    pub minutes: i64,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidDuration { minutes: i64, max: i64 },
    NotFound(ID),
    NotActive(ID),
    StorageError,
}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidDuration { minutes, max } => Self::Validation(format!(
                "A reminder can be snoozed between 1 and {} minutes, got: {}",
                max, minutes
            )),
            UseCaseError::NotFound(reminder_id) => Self::NotFound(reminder_id),
            UseCaseError::NotActive(reminder_id) => Self::Validation(format!(
                "The reminder with id: {} is paused or completed and cannot be snoozed",
                reminder_id
            )),
            UseCaseError::StorageError => Self::storage(),
        }
    }
}

#[async_trait::async_trait]
impl UseCase for SnoozeReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseError;

    const NAME: &'static str = "SnoozeReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let max = ctx.config.max_snooze_minutes;
        if self.minutes <= 0 || self.minutes > max {
            return Err(UseCaseError::InvalidDuration {
                minutes: self.minutes,
                max,
            });
        }

        let mut r = match ctx.repos.reminders.find(&self.reminder_id).await {
            Ok(Some(r)) if r.user_id == self.user_id => r,
            Ok(_) => return Err(UseCaseError::NotFound(self.reminder_id)),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        let reminder_id = r.id;
        r.snooze(self.minutes, ctx.sys.now())
            .map_err(|e| match e {
                SnoozeError::InvalidDuration(minutes) => {
                    UseCaseError::InvalidDuration { minutes, max }
                }
                SnoozeError::NotActive => UseCaseError::NotActive(reminder_id),
            })?;

        ctx.repos
            .reminders
            .save(&r)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        info!(
            reminder_id = %r.id,
            minutes = self.minutes,
            "Reminder snoozed"
        );
        Ok(r)
    }
}
