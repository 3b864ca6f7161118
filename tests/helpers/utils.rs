use checkin_reminders_domain::ReminderGroup;
use chrono::{NaiveDate, NaiveDateTime};

pub fn datetime(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("Valid datetime")
}

pub fn group_titles(groups: &[ReminderGroup]) -> Vec<String> {
    groups.iter().map(|g| g.title.clone()).collect()
}
