use crate::error::ReminderError;
use crate::shared::usecase::UseCase;
use checkin_reminders_domain::{Recurrence, RecurrenceError, Reminder, ReminderCategory, ID};
use checkin_reminders_infra::ReminderContext;
use chrono::NaiveDateTime;

#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub user_id: ID,
    pub reminder_id: ID,
    pub title: Option<String>,
    pub message: Option<String>,
    pub category: Option<ReminderCategory>,
    pub recurrence: Option<Recurrence>,
    pub scheduled_for: Option<NaiveDateTime>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    EmptyTitle,
    EmptyMessage,
    InvalidRecurrence(RecurrenceError),
    StorageError,
}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(reminder_id),
            UseCaseError::EmptyTitle => Self::Validation("The reminder title is empty".into()),
            UseCaseError::EmptyMessage => {
                Self::Validation("The reminder message is empty".into())
            }
            UseCaseError::InvalidRecurrence(e) => Self::Validation(e.to_string()),
            UseCaseError::StorageError => Self::storage(),
        }
    }
}

#[async_trait::async_trait]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseError;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let UpdateReminderUseCase {
            user_id,
            reminder_id,
            title,
            message,
            category,
            recurrence,
            scheduled_for,
        } = self;

        let mut r = match ctx.repos.reminders.find(reminder_id).await {
            Ok(Some(r)) if r.user_id == *user_id => r,
            Ok(_) => return Err(UseCaseError::NotFound(*reminder_id)),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        if let Some(title) = title {
            if title.trim().is_empty() {
                return Err(UseCaseError::EmptyTitle);
            }
            r.title = title.trim().to_string();
        }
        if let Some(message) = message {
            if message.trim().is_empty() {
                return Err(UseCaseError::EmptyMessage);
            }
            r.message = message.trim().to_string();
        }
        if let Some(category) = category {
            r.category = *category;
        }

        let mut rule_changed = false;
        if let Some(recurrence) = recurrence {
            recurrence
                .validate()
                .map_err(UseCaseError::InvalidRecurrence)?;
            if r.recurrence != *recurrence {
                r.recurrence = recurrence.clone();
                rule_changed = true;
            }
        }

        let now = ctx.sys.now();
        match scheduled_for {
            Some(scheduled_for) => r.scheduled_for = *scheduled_for,
            None if rule_changed => r
                .reschedule(now)
                .map_err(UseCaseError::InvalidRecurrence)?,
            None => (),
        }

        r.updated_at = now;

        ctx.repos
            .reminders
            .save(&r)
            .await
            .map(|_| r.clone())
            .map_err(|_| UseCaseError::StorageError)
    }
}
