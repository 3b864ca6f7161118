use chrono::prelude::*;

pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

// month: January -> 1
pub fn get_month_length(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// The date with the given day in the given month, clamped to the last
/// day of that month when the month is too short.
pub fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let day = day.min(get_month_length(year, month)).max(1);
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Moves `months` calendar months forward keeping the day of month where
/// possible. `day` is the preferred day, so a 31st rule that was clamped
/// to the 30th in April lands on the 31st again in May.
pub fn add_months_clamped(date: NaiveDate, months: u32, day: u32) -> Option<NaiveDate> {
    let month0 = date.month0() + months;
    let year = date.year() + (month0 / 12) as i32;
    let month = month0 % 12 + 1;
    clamped_date(year, month, day)
}
