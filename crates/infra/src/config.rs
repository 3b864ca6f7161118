use checkin_reminders_domain::{ID, SNOOZE_LIMIT_MINUTES};
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// The `User` whose reminders are watched by the due reminders job
    pub owner_id: ID,
    /// How often, in seconds, the due reminders job checks for reminders
    /// that became due since the last run
    pub due_poll_interval_secs: u64,
    /// Upper limit for how many minutes a `Reminder` can be snoozed.
    /// Anything longer than this should rather be rescheduled.
    pub max_snooze_minutes: i64,
}

const DEFAULT_DUE_POLL_INTERVAL_SECS: u64 = 60;
const DEFAULT_MAX_SNOOZE_MINUTES: i64 = 60 * 24 * 7; // 7 days

impl Config {
    pub fn new() -> Self {
        let owner_id = match std::env::var("REMINDERS_OWNER_ID") {
            Ok(id) => match id.parse::<ID>() {
                Ok(id) => Some(id),
                Err(e) => {
                    warn!("The given REMINDERS_OWNER_ID is not valid: {}.", e);
                    None
                }
            },
            Err(_) => None,
        };
        let owner_id = owner_id.unwrap_or_else(|| {
            info!("Did not find a valid REMINDERS_OWNER_ID environment variable. Going to create one.");
            let id = ID::new();
            info!("Owner id for the due reminders job was generated and set to: {}", id);
            id
        });

        let due_poll_interval_secs =
            parse_env_or("DUE_POLL_INTERVAL_SECS", DEFAULT_DUE_POLL_INTERVAL_SECS)
                .max(1);
        let max_snooze_minutes = bounded_max_snooze_minutes(parse_env_or(
            "MAX_SNOOZE_MINUTES",
            DEFAULT_MAX_SNOOZE_MINUTES,
        ));

        Self {
            owner_id,
            due_poll_interval_secs,
            max_snooze_minutes,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_env_or<T>(name: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    let value = match std::env::var(name) {
        Ok(value) => value,
        Err(_) => return default,
    };
    match value.parse::<T>() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!(
                "The given {}: {} is not valid, falling back to the default: {}.",
                name, value, default
            );
            default
        }
    }
}

fn bounded_max_snooze_minutes(minutes: i64) -> i64 {
    if minutes < 1 {
        warn!(
            "The given MAX_SNOOZE_MINUTES: {} is not valid, falling back to the default: {}.",
            minutes, DEFAULT_MAX_SNOOZE_MINUTES
        );
        return DEFAULT_MAX_SNOOZE_MINUTES;
    }
    if minutes > SNOOZE_LIMIT_MINUTES {
        warn!(
            "The given MAX_SNOOZE_MINUTES: {} is above the limit, using: {}.",
            minutes, SNOOZE_LIMIT_MINUTES
        );
        return SNOOZE_LIMIT_MINUTES;
    }
    minutes
}
