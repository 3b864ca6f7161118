use crate::reminder::Reminder;
use chrono::NaiveDateTime;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, str::FromStr};
use thiserror::Error;

/// The views a reminder list can be filtered by
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReminderFilter {
    /// Every active, not completed reminder
    All,
    Upcoming,
    Overdue,
    Completed,
}

impl Default for ReminderFilter {
    fn default() -> Self {
        Self::All
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Unknown reminder filter: {0}")]
pub struct InvalidFilterError(String);

impl FromStr for ReminderFilter {
    type Err = InvalidFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "active" => Ok(Self::All),
            "upcoming" => Ok(Self::Upcoming),
            "overdue" => Ok(Self::Overdue),
            "completed" => Ok(Self::Completed),
            _ => Err(InvalidFilterError(s.to_string())),
        }
    }
}

impl ReminderFilter {
    pub fn matches(&self, reminder: &Reminder, now: NaiveDateTime) -> bool {
        let listed = !reminder.is_completed() && reminder.status.is_active();
        match self {
            Self::All => listed,
            Self::Upcoming => listed && reminder.effective_time(now) > now,
            Self::Overdue => listed && reminder.effective_time(now) <= now,
            Self::Completed => reminder.is_completed(),
        }
    }
}

/// Ascending by effective time, ties broken by creation so that the order is stable
pub fn by_effective_time(a: &Reminder, b: &Reminder, now: NaiveDateTime) -> Ordering {
    a.effective_time(now)
        .cmp(&b.effective_time(now))
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

fn by_most_recently_completed(a: &Reminder, b: &Reminder) -> Ordering {
    b.status
        .completed_at()
        .cmp(&a.status.completed_at())
        .then_with(|| a.id.cmp(&b.id))
}

pub fn filter_reminders<'a>(
    reminders: &'a [Reminder],
    filter: ReminderFilter,
    now: NaiveDateTime,
) -> Vec<&'a Reminder> {
    let matching = reminders.iter().filter(|r| filter.matches(r, now));
    match filter {
        ReminderFilter::Completed => matching
            .sorted_by(|a, b| by_most_recently_completed(a, b))
            .collect(),
        _ => matching
            .sorted_by(|a, b| by_effective_time(a, b, now))
            .collect(),
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderCounts {
    pub active: usize,
    pub upcoming: usize,
    pub overdue: usize,
    pub completed: usize,
}

impl ReminderCounts {
    pub fn new(reminders: &[Reminder], now: NaiveDateTime) -> Self {
        let count = |filter: ReminderFilter| {
            reminders
                .iter()
                .filter(|r| filter.matches(r, now))
                .count()
        };
        Self {
            active: count(ReminderFilter::All),
            upcoming: count(ReminderFilter::Upcoming),
            overdue: count(ReminderFilter::Overdue),
            completed: count(ReminderFilter::Completed),
        }
    }

    pub fn get(&self, filter: ReminderFilter) -> usize {
        match filter {
            ReminderFilter::All => self.active,
            ReminderFilter::Upcoming => self.upcoming,
            ReminderFilter::Overdue => self.overdue,
            ReminderFilter::Completed => self.completed,
        }
    }
}
