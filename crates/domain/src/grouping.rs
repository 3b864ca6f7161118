use crate::filter::by_effective_time;
use crate::reminder::Reminder;
use crate::shared::weekday::WeekDay;
use chrono::{Datelike, NaiveDateTime};
use itertools::Itertools;
use serde::Serialize;

/// The day-based section a `Reminder` is listed under.
///
/// The derived ordering is the order sections are presented in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ReminderBucket {
    Overdue,
    /// Completed reminders from a previous day
    Earlier,
    Today,
    Tomorrow,
    /// Two to six days ahead, labeled with the weekday name
    ThisWeek { days_ahead: i64, weekday: WeekDay },
    Later,
}

impl ReminderBucket {
    pub fn for_reminder(reminder: &Reminder, now: NaiveDateTime) -> Self {
        let at = reminder.effective_time(now);
        if at <= now && !reminder.is_completed() {
            return Self::Overdue;
        }
        // Calendar days, not a rolling 24 hour window
        let days_ahead = at.date().signed_duration_since(now.date()).num_days();
        match days_ahead {
            d if d < 0 => Self::Earlier,
            0 => Self::Today,
            1 => Self::Tomorrow,
            2..=6 => Self::ThisWeek {
                days_ahead,
                weekday: WeekDay::from(at.weekday()),
            },
            _ => Self::Later,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Self::Overdue => "Overdue".into(),
            Self::Earlier => "Earlier".into(),
            Self::Today => "Today".into(),
            Self::Tomorrow => "Tomorrow".into(),
            Self::ThisWeek { weekday, .. } => weekday.name().into(),
            Self::Later => "Later".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReminderGroup<'a> {
    pub title: String,
    pub bucket: ReminderBucket,
    pub reminders: Vec<&'a Reminder>,
}

/// Splits an already filtered list into day sections. Sections without
/// reminders are left out.
pub fn group_reminders<'a>(
    reminders: Vec<&'a Reminder>,
    now: NaiveDateTime,
) -> Vec<ReminderGroup<'a>> {
    let keyed = reminders
        .into_iter()
        .map(|r| (ReminderBucket::for_reminder(r, now), r))
        .sorted_by(|(bucket_a, a), (bucket_b, b)| {
            bucket_a
                .cmp(bucket_b)
                .then_with(|| by_effective_time(a, b, now))
        });

    let by_bucket = keyed.group_by(|(bucket, _)| *bucket);
    let groups: Vec<_> = by_bucket
        .into_iter()
        .map(|(bucket, items)| ReminderGroup {
            title: bucket.title(),
            bucket,
            reminders: items.map(|(_, r)| r).collect(),
        })
        .collect();
    groups
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::filter::{filter_reminders, ReminderFilter};
    use crate::{Recurrence, ReminderCategory, ID};
    use chrono::{Duration, NaiveDate};
    use std::collections::HashSet;

    // A Wednesday
    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn reminder(title: &str, offset_minutes: i64) -> Reminder {
        Reminder::new(
            ID::new(),
            title,
            "message",
            ReminderCategory::CheckIn,
            Recurrence::Once,
            now() + Duration::minutes(offset_minutes),
            now() - Duration::days(2),
        )
    }

    fn titles(groups: &[ReminderGroup]) -> Vec<String> {
        groups.iter().map(|g| g.title.clone()).collect()
    }

    #[test]
    fn overdue_and_today_stay_apart() {
        let reminders = vec![reminder("late", -60), reminder("tonight", 120)];
        let filtered = filter_reminders(&reminders, ReminderFilter::All, now());
        let groups = group_reminders(filtered, now());

        assert_eq!(titles(&groups), vec!["Overdue", "Today"]);
        assert_eq!(groups[0].reminders[0].title, "late");
        assert_eq!(groups[1].reminders[0].title, "tonight");
    }

    #[test]
    fn buckets_follow_calendar_days() {
        let hour = 60;
        let day = 24 * hour;
        let reminders = vec![
            reminder("later", 10 * day),
            reminder("saturday", 3 * day),
            reminder("tomorrow morning", 12 * hour + 30),
            reminder("just before midnight", 11 * hour + 59),
            reminder("friday", 2 * day),
            reminder("tuesday", 6 * day),
            reminder("next wednesday", 7 * day),
        ];
        let filtered = filter_reminders(&reminders, ReminderFilter::All, now());
        let groups = group_reminders(filtered, now());

        assert_eq!(
            titles(&groups),
            vec!["Today", "Tomorrow", "Friday", "Saturday", "Tuesday", "Later"]
        );
        assert_eq!(groups[0].reminders[0].title, "just before midnight");
        assert_eq!(groups[1].reminders[0].title, "tomorrow morning");
        let later: Vec<_> = groups[5].reminders.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(later, vec!["next wednesday", "later"]);
    }

    #[test]
    fn completed_reminders_are_never_overdue() {
        let mut yesterday = reminder("yesterday", -24 * 60);
        yesterday.complete(now() - Duration::hours(20));
        let mut this_morning = reminder("this morning", -120);
        this_morning.complete(now() - Duration::hours(1));
        let reminders = vec![yesterday, this_morning];

        let filtered = filter_reminders(&reminders, ReminderFilter::Completed, now());
        let groups = group_reminders(filtered, now());
        assert_eq!(titles(&groups), vec!["Earlier", "Today"]);
    }

    #[test]
    fn groups_are_a_lossless_partition() {
        let mut reminders: Vec<Reminder> = (-30..30)
            .map(|i| reminder(&format!("r{}", i), i * 173))
            .collect();
        reminders[3].snooze(45, now()).unwrap();
        reminders[40].toggle_active(now());
        reminders[50].complete(now());

        for step in 0..48 {
            let at = now() + Duration::minutes(step * 47 - 24 * 60);
            for filter in [
                ReminderFilter::All,
                ReminderFilter::Upcoming,
                ReminderFilter::Overdue,
                ReminderFilter::Completed,
            ]
            .iter()
            {
                let filtered = filter_reminders(&reminders, *filter, at);
                let expected: HashSet<ID> = filtered.iter().map(|r| r.id).collect();
                let groups = group_reminders(filtered.clone(), at);

                let mut seen = HashSet::new();
                let mut total = 0;
                for window in groups.windows(2) {
                    assert!(window[0].bucket < window[1].bucket);
                }
                for group in &groups {
                    assert!(!group.reminders.is_empty());
                    for pair in group.reminders.windows(2) {
                        assert!(pair[0].effective_time(at) <= pair[1].effective_time(at));
                    }
                    for r in &group.reminders {
                        seen.insert(r.id);
                        total += 1;
                    }
                }
                assert_eq!(total, filtered.len());
                assert_eq!(seen, expected);
            }
        }
    }

    #[test]
    fn empty_input_gives_no_groups() {
        assert!(group_reminders(vec![], now()).is_empty());
    }
}
