mod inmemory;

use checkin_reminders_domain::{Reminder, ID};
pub use inmemory::InMemoryReminderRepo;

/// Storage of `Reminder`s. Every query is scoped to a single owner.
#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()>;
    /// Returns the deleted `Reminder`, or `None` when there was nothing to delete
    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
    /// All `Reminder`s of the user ordered by `scheduled_for`
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Reminder>>;
}
