use checkin_reminders_domain::ID;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ReminderError {
    #[error("Invalid data provided: Error message: `{0}`")]
    Validation(String),
    #[error("The reminder store is unavailable. Error message: `{0}`")]
    Persistence(String),
    #[error("The reminder with id: {0}, was not found.")]
    NotFound(ID),
}

impl ReminderError {
    pub fn storage() -> Self {
        Self::Persistence("The reminder store did not accept the change".into())
    }
}
