use crate::recurrence::{Recurrence, RecurrenceError};
use crate::shared::entity::{Entity, ID};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest snooze a `Reminder` accepts, one year
pub const SNOOZE_LIMIT_MINUTES: i64 = 60 * 24 * 365;

#[derive(Error, Debug, PartialEq)]
pub enum SnoozeError {
    #[error("A reminder can be snoozed between 1 and {} minutes, got: {0}", SNOOZE_LIMIT_MINUTES)]
    InvalidDuration(i64),
    #[error("Only active reminders can be snoozed")]
    NotActive,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ReminderCategory {
    CheckIn,
    Habit,
    ActionItem,
    PartnerMoment,
    Custom,
}

/// Where a `Reminder` is in its lifecycle.
///
/// A reminder is always in exactly one of these states, which is what keeps
/// "completed but active" or "snoozed but disabled" from ever being stored.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ReminderStatus {
    Active,
    /// Turned off by the user, kept around for history
    Paused,
    Snoozed {
        until: NaiveDateTime,
    },
    Completed {
        at: NaiveDateTime,
    },
}

impl ReminderStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active | Self::Snoozed { .. })
    }

    /// Only true while the snooze has not run out yet
    pub fn is_snoozed(&self, now: NaiveDateTime) -> bool {
        matches!(self.snooze_until(), Some(until) if until > now)
    }

    pub fn snooze_until(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Snoozed { until } => Some(*until),
            _ => None,
        }
    }

    pub fn completed_at(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Completed { at } => Some(*at),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: ID,
    /// The `User` owning this `Reminder`
    pub user_id: ID,
    pub title: String,
    pub message: String,
    pub category: ReminderCategory,
    pub recurrence: Recurrence,
    /// The next time this `Reminder` fires
    pub scheduled_for: NaiveDateTime,
    pub status: ReminderStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Reminder {
    pub fn new(
        user_id: ID,
        title: &str,
        message: &str,
        category: ReminderCategory,
        recurrence: Recurrence,
        scheduled_for: NaiveDateTime,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            id: Default::default(),
            user_id,
            title: title.trim().to_string(),
            message: message.trim().to_string(),
            category,
            recurrence,
            scheduled_for,
            status: ReminderStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// The instant used when filtering and grouping: the snooze deadline
    /// while it is still ahead of `now`, otherwise `scheduled_for`
    pub fn effective_time(&self, now: NaiveDateTime) -> NaiveDateTime {
        match self.status.snooze_until() {
            Some(until) if until > now => until,
            _ => self.scheduled_for,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status.completed_at().is_some()
    }

    /// Re-derives `scheduled_for` from the recurrence rule
    pub fn reschedule(&mut self, now: NaiveDateTime) -> Result<(), RecurrenceError> {
        self.scheduled_for = self.recurrence.next_occurrence(self.scheduled_for, now)?;
        Ok(())
    }

    /// Returns `false` without touching the reminder when it was already completed
    pub fn complete(&mut self, now: NaiveDateTime) -> bool {
        if self.is_completed() {
            return false;
        }
        self.status = ReminderStatus::Completed { at: now };
        self.updated_at = now;
        true
    }

    /// Paused and completed reminders cannot be snoozed
    pub fn snooze(&mut self, minutes: i64, now: NaiveDateTime) -> Result<(), SnoozeError> {
        if minutes <= 0 || minutes > SNOOZE_LIMIT_MINUTES {
            return Err(SnoozeError::InvalidDuration(minutes));
        }
        if !self.status.is_active() {
            return Err(SnoozeError::NotActive);
        }
        let until = now
            .checked_add_signed(Duration::minutes(minutes))
            .ok_or(SnoozeError::InvalidDuration(minutes))?;
        self.status = ReminderStatus::Snoozed { until };
        self.updated_at = now;
        Ok(())
    }

    /// Flips between active and paused. Completed reminders stay completed
    /// and `false` is returned.
    pub fn toggle_active(&mut self, now: NaiveDateTime) -> bool {
        self.status = match self.status {
            ReminderStatus::Active | ReminderStatus::Snoozed { .. } => ReminderStatus::Paused,
            ReminderStatus::Paused => ReminderStatus::Active,
            ReminderStatus::Completed { .. } => return false,
        };
        self.updated_at = now;
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn datetime(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 14)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn reminder(scheduled_for: NaiveDateTime) -> Reminder {
        Reminder::new(
            ID::new(),
            "  Weekly check-in ",
            "How are we doing?",
            ReminderCategory::CheckIn,
            Recurrence::Once,
            scheduled_for,
            datetime(8, 0),
        )
    }

    #[test]
    fn new_reminders_are_active_and_trimmed() {
        let r = reminder(datetime(19, 0));
        assert_eq!(r.title, "Weekly check-in");
        assert_eq!(r.status, ReminderStatus::Active);
        assert!(r.status.is_active());
        assert!(!r.is_completed());
        assert_eq!(r.created_at, r.updated_at);
    }

    #[test]
    fn effective_time_prefers_running_snooze() {
        let mut r = reminder(datetime(9, 0));
        let now = datetime(10, 0);
        assert_eq!(r.effective_time(now), datetime(9, 0));

        assert_eq!(r.snooze(30, now), Ok(()));
        assert_eq!(r.effective_time(now), datetime(10, 30));
        assert!(r.status.is_snoozed(now));

        // Snooze ran out, falls back to the schedule
        let later = datetime(11, 0);
        assert!(!r.status.is_snoozed(later));
        assert_eq!(r.effective_time(later), datetime(9, 0));
    }

    #[test]
    fn complete_is_idempotent() {
        let mut r = reminder(datetime(9, 0));
        assert!(r.complete(datetime(10, 0)));
        assert!(!r.complete(datetime(11, 0)));
        assert_eq!(r.status.completed_at(), Some(datetime(10, 0)));
        assert_eq!(r.updated_at, datetime(10, 0));
        assert!(!r.status.is_active());
    }

    #[test]
    fn toggle_never_resurrects_completion() {
        let mut r = reminder(datetime(9, 0));
        assert!(r.toggle_active(datetime(10, 0)));
        assert_eq!(r.status, ReminderStatus::Paused);
        assert_eq!(r.snooze(10, datetime(10, 0)), Err(SnoozeError::NotActive));
        assert!(r.toggle_active(datetime(10, 5)));
        assert_eq!(r.status, ReminderStatus::Active);

        r.complete(datetime(11, 0));
        assert!(!r.toggle_active(datetime(12, 0)));
        assert_eq!(r.status.completed_at(), Some(datetime(11, 0)));
    }

    #[test]
    fn snooze_rejects_durations_out_of_range() {
        let mut r = reminder(datetime(9, 0));
        for minutes in [0, -1, SNOOZE_LIMIT_MINUTES + 1, 1_000_000_000_000, i64::MAX].iter() {
            assert_eq!(
                r.snooze(*minutes, datetime(10, 0)),
                Err(SnoozeError::InvalidDuration(*minutes))
            );
        }
        assert_eq!(r.status, ReminderStatus::Active);
        assert_eq!(r.updated_at, datetime(8, 0));

        assert_eq!(r.snooze(SNOOZE_LIMIT_MINUTES, datetime(10, 0)), Ok(()));
        assert_eq!(
            r.status.snooze_until(),
            Some(datetime(10, 0) + Duration::days(365))
        );
    }

    #[test]
    fn snooze_past_the_calendar_range_is_an_error() {
        let mut r = reminder(datetime(9, 0));
        let end_of_time = chrono::naive::MAX_DATETIME;
        assert_eq!(
            r.snooze(60, end_of_time),
            Err(SnoozeError::InvalidDuration(60))
        );
    }

    #[test]
    fn reschedule_uses_the_rule() {
        let mut r = reminder(datetime(9, 0));
        r.recurrence = Recurrence::Daily {
            at: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
        };
        r.reschedule(datetime(20, 0)).unwrap();
        assert_eq!(
            r.scheduled_for,
            NaiveDate::from_ymd_opt(2026, 10, 15)
                .unwrap()
                .and_hms_opt(19, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn serializes_in_camel_case() {
        let r = reminder(datetime(9, 0));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["category"], "check-in");
        assert_eq!(json["status"]["state"], "active");
        assert_eq!(json["recurrence"]["frequency"], "once");
        assert!(json.get("scheduledFor").is_some());
        assert!(json.get("userId").is_some());
    }
}
