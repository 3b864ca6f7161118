use crate::error::ReminderError;
use crate::shared::usecase::UseCase;
use checkin_reminders_domain::{Reminder, ID};
use checkin_reminders_infra::ReminderContext;
use tracing::{info, warn};

/// Deletes every listed `Reminder` owned by the user. Ids that do not resolve
/// to one of the user's reminders are skipped.
#[derive(Debug)]
pub struct DeleteRemindersUseCase {
    pub user_id: ID,
    pub reminder_ids: Vec<ID>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::storage(),
        }
    }
}

impl DeleteRemindersUseCase {
    /// Puts back what was already deleted when a later deletion fails
    async fn restore(&self, deleted: &[Reminder], ctx: &ReminderContext) {
        for r in deleted {
            if let Err(e) = ctx.repos.reminders.insert(r).await {
                warn!(
                    reminder_id = %r.id,
                    "Unable to restore reminder after a failed delete: {:?}",
                    e
                );
            }
        }
    }
}

#[async_trait::async_trait]
impl UseCase for DeleteRemindersUseCase {
    /// The reminders that were removed
    type Response = Vec<Reminder>;

    type Errors = UseCaseError;

    const NAME: &'static str = "DeleteReminders";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let mut deleted: Vec<Reminder> = Vec::with_capacity(self.reminder_ids.len());

        for reminder_id in &self.reminder_ids {
            if deleted.iter().any(|r| r.id == *reminder_id) {
                continue;
            }
            let owned = match ctx.repos.reminders.find(reminder_id).await {
                Ok(Some(r)) => r.user_id == self.user_id,
                Ok(None) => false,
                Err(_) => {
                    self.restore(&deleted, ctx).await;
                    return Err(UseCaseError::StorageError);
                }
            };
            if !owned {
                continue;
            }
            match ctx.repos.reminders.delete(reminder_id).await {
                Ok(Some(r)) => deleted.push(r),
                Ok(None) => (),
                Err(_) => {
                    self.restore(&deleted, ctx).await;
                    return Err(UseCaseError::StorageError);
                }
            }
        }

        if !deleted.is_empty() {
            info!(count = deleted.len(), "Reminders deleted");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use checkin_reminders_domain::{Recurrence, ReminderCategory};
    use checkin_reminders_infra::setup_context;
    use chrono::{Duration, Local};

    fn reminder(user_id: ID, title: &str) -> Reminder {
        let now = Local::now().naive_local();
        Reminder::new(
            user_id,
            title,
            "message",
            ReminderCategory::Custom,
            Recurrence::Once,
            now + Duration::days(1),
            now,
        )
    }

    #[tokio::test]
    async fn deletes_two_of_three() {
        let ctx = setup_context().await;
        let user_id = ID::new();
        let reminders: Vec<_> = ["a", "b", "c"]
            .iter()
            .map(|title| reminder(user_id, title))
            .collect();
        for r in &reminders {
            ctx.repos.reminders.insert(r).await.unwrap();
        }

        let mut usecase = DeleteRemindersUseCase {
            user_id,
            reminder_ids: vec![reminders[0].id, reminders[2].id],
        };
        let deleted = usecase.execute(&ctx).await.unwrap();
        assert_eq!(deleted.len(), 2);

        let left = ctx.repos.reminders.find_by_user(&user_id).await.unwrap();
        assert_eq!(left, vec![reminders[1].clone()]);
    }

    #[tokio::test]
    async fn skips_unknown_and_foreign_ids() {
        let ctx = setup_context().await;
        let user_id = ID::new();
        let mine = reminder(user_id, "mine");
        let theirs = reminder(ID::new(), "theirs");
        ctx.repos.reminders.insert(&mine).await.unwrap();
        ctx.repos.reminders.insert(&theirs).await.unwrap();

        let mut usecase = DeleteRemindersUseCase {
            user_id,
            reminder_ids: vec![ID::new(), theirs.id, mine.id, mine.id],
        };
        let deleted = usecase.execute(&ctx).await.unwrap();
        assert_eq!(deleted, vec![mine.clone()]);
        assert_eq!(
            ctx.repos.reminders.find(&theirs.id).await.unwrap(),
            Some(theirs)
        );

        let mut nothing = DeleteRemindersUseCase {
            user_id,
            reminder_ids: vec![mine.id],
        };
        assert!(nothing.execute(&ctx).await.unwrap().is_empty());
    }
}
