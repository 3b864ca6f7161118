use crate::error::ReminderError;
use crate::shared::usecase::UseCase;
use checkin_reminders_domain::{Reminder, ID};
use checkin_reminders_infra::ReminderContext;
use tracing::info;

#[derive(Debug)]
pub struct CompleteReminderUseCase {
    pub user_id: ID,
    pub reminder_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(reminder_id),
            UseCaseError::StorageError => Self::storage(),
        }
    }
}

#[async_trait::async_trait]
impl UseCase for CompleteReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseError;

    const NAME: &'static str = "CompleteReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let mut r = match ctx.repos.reminders.find(&self.reminder_id).await {
            Ok(Some(r)) if r.user_id == self.user_id => r,
            Ok(_) => return Err(UseCaseError::NotFound(self.reminder_id)),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        if !r.complete(ctx.sys.now()) {
            // Already completed, nothing to write
            return Ok(r);
        }

        ctx.repos
            .reminders
            .save(&r)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        info!(reminder_id = %r.id, "Reminder completed");
        Ok(r)
    }
}
