use crate::error::ReminderError;
use crate::shared::usecase::UseCase;
use checkin_reminders_domain::{Reminder, ID};
use checkin_reminders_infra::ReminderContext;

/// Pauses an active or snoozed `Reminder`, or resumes a paused one
#[derive(Debug)]
pub struct ToggleReminderUseCase {
    pub user_id: ID,
    pub reminder_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    AlreadyCompleted(ID),
    StorageError,
}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(reminder_id),
            UseCaseError::AlreadyCompleted(reminder_id) => Self::Validation(format!(
                "The reminder with id: {} is completed and cannot be paused or resumed",
                reminder_id
            )),
            UseCaseError::StorageError => Self::storage(),
        }
    }
}

#[async_trait::async_trait]
impl UseCase for ToggleReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseError;

    const NAME: &'static str = "ToggleReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let mut r = match ctx.repos.reminders.find(&self.reminder_id).await {
            Ok(Some(r)) if r.user_id == self.user_id => r,
            Ok(_) => return Err(UseCaseError::NotFound(self.reminder_id)),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        if !r.toggle_active(ctx.sys.now()) {
            return Err(UseCaseError::AlreadyCompleted(r.id));
        }

        ctx.repos
            .reminders
            .save(&r)
            .await
            .map(|_| r.clone())
            .map_err(|_| UseCaseError::StorageError)
    }
}
