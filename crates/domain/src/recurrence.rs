use crate::date::{add_months_clamped, clamped_date};
use crate::shared::weekday::WeekDay;
use chrono::{prelude::*, Duration};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReminderFrequency {
    Once,
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Custom,
}

/// The rule deciding when a `Reminder` fires next.
///
/// `Once` and `Custom` reminders carry their instant in `Reminder::scheduled_for`
/// and are never recomputed. Every other variant owns the time of day it fires at.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "frequency", rename_all = "lowercase")]
pub enum Recurrence {
    Once,
    Daily {
        at: NaiveTime,
    },
    Weekly {
        at: NaiveTime,
        #[serde(rename = "daysOfWeek")]
        days: Vec<WeekDay>,
    },
    Biweekly {
        at: NaiveTime,
    },
    Monthly {
        at: NaiveTime,
        #[serde(rename = "dayOfMonth")]
        day_of_month: u32,
    },
    Custom,
}

#[derive(Error, Debug, PartialEq)]
pub enum RecurrenceError {
    #[error("A weekly reminder needs at least one day of the week")]
    EmptyWeekdays,
    #[error("Day of month must be between 1 and 31, got: {0}")]
    InvalidDayOfMonth(u32),
    #[error("Reminder time must be given in whole minutes, got: {0}")]
    InvalidTimeOfDay(NaiveTime),
    #[error("The next occurrence falls outside of the supported calendar range")]
    OutOfRange,
}

impl Recurrence {
    pub fn frequency(&self) -> ReminderFrequency {
        match self {
            Self::Once => ReminderFrequency::Once,
            Self::Daily { .. } => ReminderFrequency::Daily,
            Self::Weekly { .. } => ReminderFrequency::Weekly,
            Self::Biweekly { .. } => ReminderFrequency::Biweekly,
            Self::Monthly { .. } => ReminderFrequency::Monthly,
            Self::Custom => ReminderFrequency::Custom,
        }
    }

    pub fn time_of_day(&self) -> Option<NaiveTime> {
        match self {
            Self::Daily { at }
            | Self::Weekly { at, .. }
            | Self::Biweekly { at }
            | Self::Monthly { at, .. } => Some(*at),
            Self::Once | Self::Custom => None,
        }
    }

    /// `Once` and `Custom` rules cannot derive an instant on their own
    pub fn needs_explicit_time(&self) -> bool {
        matches!(self, Self::Once | Self::Custom)
    }

    pub fn validate(&self) -> Result<(), RecurrenceError> {
        if let Some(at) = self.time_of_day() {
            if at.second() != 0 || at.nanosecond() != 0 {
                return Err(RecurrenceError::InvalidTimeOfDay(at));
            }
        }
        match self {
            Self::Weekly { days, .. } if days.is_empty() => Err(RecurrenceError::EmptyWeekdays),
            Self::Monthly { day_of_month, .. } if !(1..=31).contains(day_of_month) => {
                Err(RecurrenceError::InvalidDayOfMonth(*day_of_month))
            }
            _ => Ok(()),
        }
    }

    /// Computes the next instant this rule fires at, strictly after `reference`.
    ///
    /// `scheduled_for` is the instant currently stored on the reminder and is
    /// returned unchanged for `Once` and `Custom` rules.
    pub fn next_occurrence(
        &self,
        scheduled_for: NaiveDateTime,
        reference: NaiveDateTime,
    ) -> Result<NaiveDateTime, RecurrenceError> {
        self.validate()?;

        let today = reference.date();
        match self {
            Self::Once | Self::Custom => Ok(scheduled_for),
            Self::Daily { at } => advance_if_passed(today.and_time(*at), reference, 1),
            Self::Biweekly { at } => advance_if_passed(today.and_time(*at), reference, 14),
            Self::Weekly { at, days } => (0..=7)
                .filter_map(|offset| today.checked_add_signed(Duration::days(offset)))
                .find(|date| {
                    days.contains(&WeekDay::from(date.weekday())) && date.and_time(*at) > reference
                })
                .map(|date| date.and_time(*at))
                .ok_or(RecurrenceError::OutOfRange),
            Self::Monthly { at, day_of_month } => {
                let this_month = clamped_date(today.year(), today.month(), *day_of_month)
                    .ok_or(RecurrenceError::OutOfRange)?
                    .and_time(*at);
                if this_month > reference {
                    return Ok(this_month);
                }
                add_months_clamped(today, 1, *day_of_month)
                    .map(|date| date.and_time(*at))
                    .ok_or(RecurrenceError::OutOfRange)
            }
        }
    }
}

fn advance_if_passed(
    candidate: NaiveDateTime,
    reference: NaiveDateTime,
    days: i64,
) -> Result<NaiveDateTime, RecurrenceError> {
    if candidate > reference {
        return Ok(candidate);
    }
    let date = candidate
        .date()
        .checked_add_signed(Duration::days(days))
        .ok_or(RecurrenceError::OutOfRange)?;
    Ok(date.and_time(candidate.time()))
}
