use chrono::Weekday;
use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// A day of the week where `0` is Sunday and `6` is Saturday
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekDay(usize);

impl WeekDay {
    pub fn new(weekday: usize) -> Result<Self, InvalidWeekDayError> {
        if !Self::is_valid_weekday(weekday) {
            return Err(InvalidWeekDayError::OutOfRange(weekday));
        }
        Ok(Self(weekday))
    }

    pub fn index(&self) -> usize {
        self.0
    }

    pub fn name(&self) -> &'static str {
        match self.0 {
            0 => "Sunday",
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            _ => "Saturday",
        }
    }

    fn is_valid_weekday(wday: usize) -> bool {
        wday <= 6
    }
}

impl From<Weekday> for WeekDay {
    fn from(weekday: Weekday) -> Self {
        Self(weekday.num_days_from_sunday() as usize)
    }
}

impl From<WeekDay> for Weekday {
    fn from(weekday: WeekDay) -> Self {
        match weekday.0 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }
}

impl Display for WeekDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", weekday_to_str(self.0))
    }
}

fn str_to_weekday(d: &str) -> Result<usize, InvalidWeekDayError> {
    match d.to_uppercase().as_str() {
        "SU" => Ok(0),
        "MO" => Ok(1),
        "TU" => Ok(2),
        "WE" => Ok(3),
        "TH" => Ok(4),
        "FR" => Ok(5),
        "SA" => Ok(6),
        _ => Err(InvalidWeekDayError::InvalidWeekdayIdentifier(d.to_string())),
    }
}

fn weekday_to_str(wday: usize) -> &'static str {
    match wday {
        0 => "SU",
        1 => "MO",
        2 => "TU",
        3 => "WE",
        4 => "TH",
        5 => "FR",
        _ => "SA",
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidWeekDayError {
    #[error("Invalid weekday specified: {0}")]
    InvalidWeekdayIdentifier(String),
    #[error("Weekday index must be between 0 (Sunday) and 6 (Saturday), got: {0}")]
    OutOfRange(usize),
}

impl FromStr for WeekDay {
    type Err = InvalidWeekDayError;

    /// Accepts either the two letter form (`SU`, `MO`, ...) or a weekday index
    fn from_str(day: &str) -> Result<Self, Self::Err> {
        match day.parse::<usize>() {
            Ok(index) => WeekDay::new(index),
            Err(_) => str_to_weekday(day).map(Self),
        }
    }
}

impl Serialize for WeekDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for WeekDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct WeekDayVisitor;

        impl<'de> Visitor<'de> for WeekDayVisitor {
            type Value = WeekDay;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A weekday index (0-6) or its two letter representation")
            }

            fn visit_str<E>(self, value: &str) -> Result<WeekDay, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<WeekDay>()
                    .map_err(|_| E::custom(format!("Malformed weekday: {}", value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<WeekDay, E>
            where
                E: serde::de::Error,
            {
                WeekDay::new(value as usize)
                    .map_err(|_| E::custom(format!("Malformed weekday: {}", value)))
            }
        }

        deserializer.deserialize_any(WeekDayVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_valid_weekday_str_correctly() {
        assert_eq!("su".parse::<WeekDay>().unwrap(), WeekDay::new(0).unwrap());
        assert_eq!("MO".parse::<WeekDay>().unwrap(), WeekDay::new(1).unwrap());
        assert_eq!("sa".parse::<WeekDay>().unwrap(), WeekDay::new(6).unwrap());
        assert_eq!("3".parse::<WeekDay>().unwrap(), WeekDay::new(3).unwrap());
    }

    #[test]
    fn parses_invalid_weekday_str_correctly() {
        assert!("".parse::<WeekDay>().is_err());
        assert!("-1".parse::<WeekDay>().is_err());
        assert!("7".parse::<WeekDay>().is_err());
        assert!("mon".parse::<WeekDay>().is_err());
        assert!("1mo".parse::<WeekDay>().is_err());
    }

    #[test]
    fn converts_between_chrono_weekdays() {
        assert_eq!(WeekDay::from(Weekday::Sun).index(), 0);
        assert_eq!(WeekDay::from(Weekday::Sat).index(), 6);
        for index in 0..7 {
            let day = WeekDay::new(index).unwrap();
            assert_eq!(WeekDay::from(Weekday::from(day)), day);
        }
    }

    #[test]
    fn serializes_weekday() {
        assert_eq!(WeekDay::new(0).unwrap().to_string(), "SU");
        assert_eq!(WeekDay::new(3).unwrap().to_string(), "WE");
        assert_eq!(
            serde_json::from_str::<WeekDay>("5").unwrap(),
            WeekDay::new(5).unwrap()
        );
        assert_eq!(
            serde_json::from_str::<WeekDay>("\"fr\"").unwrap(),
            WeekDay::new(5).unwrap()
        );
        assert!(serde_json::from_str::<WeekDay>("9").is_err());
    }
}
