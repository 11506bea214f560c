//! Calendar dates as they appear in generated records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DateParseError;

/// A calendar date rendered as `YYYY-MM-DD`.
///
/// Month and day are always written with two digits. The generator only
/// produces days in `1..=30`, so no month-length validation is performed
/// beyond the `1..=31` range check on parsing.
///
/// # Example
///
/// ```
/// use student_records::RecordDate;
///
/// let date = RecordDate::new(2024, 3, 7);
/// assert_eq!(date.to_string(), "2024-03-07");
/// assert_eq!("2024-03-07".parse::<RecordDate>(), Ok(date));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordDate {
    year: u16,
    month: u8,
    day: u8,
}

impl RecordDate {
    /// Creates a date from its components.
    #[must_use]
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(self) -> u16 {
        self.year
    }

    /// Returns the month (1-12).
    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of the month.
    #[must_use]
    pub const fn day(self) -> u8 {
        self.day
    }
}

impl fmt::Display for RecordDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for RecordDate {
    type Err = DateParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || DateParseError::Malformed {
            value: value.to_owned(),
        };

        let mut parts = value.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(invalid());
        }

        let parsed_year: u16 = year.parse().map_err(|_| invalid())?;
        let parsed_month: u8 = month.parse().map_err(|_| invalid())?;
        let parsed_day: u8 = day.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&parsed_month) || !(1..=31).contains(&parsed_day) {
            return Err(DateParseError::OutOfRange {
                value: value.to_owned(),
            });
        }

        Ok(Self::new(parsed_year, parsed_month, parsed_day))
    }
}

impl TryFrom<String> for RecordDate {
    type Error = DateParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecordDate> for String {
    fn from(date: RecordDate) -> Self {
        date.to_string()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(RecordDate::new(2024, 1, 1), "2024-01-01")]
    #[case(RecordDate::new(2024, 12, 28), "2024-12-28")]
    #[case(RecordDate::new(1998, 9, 5), "1998-09-05")]
    fn displays_zero_padded(#[case] date: RecordDate, #[case] expected: &str) {
        assert_eq!(date.to_string(), expected);
    }

    #[rstest]
    #[case("2024-1-01")]
    #[case("24-01-01")]
    #[case("2024/01/01")]
    #[case("2024-01-01-01")]
    #[case("2024-aa-01")]
    #[case("")]
    fn rejects_malformed_dates(#[case] value: &str) {
        assert_eq!(
            value.parse::<RecordDate>(),
            Err(DateParseError::Malformed {
                value: value.to_owned()
            })
        );
    }

    #[rstest]
    #[case("2024-13-01")]
    #[case("2024-00-10")]
    #[case("2024-02-32")]
    fn rejects_out_of_range_components(#[case] value: &str) {
        assert_eq!(
            value.parse::<RecordDate>(),
            Err(DateParseError::OutOfRange {
                value: value.to_owned()
            })
        );
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&RecordDate::new(2020, 7, 6)).expect("serialize");
        assert_eq!(json, "\"2020-07-06\"");

        let parsed: RecordDate = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, RecordDate::new(2020, 7, 6));
    }

    #[test]
    fn deserializing_invalid_date_fails() {
        let result = serde_json::from_str::<RecordDate>("\"2020-7-6\"");
        assert!(result.is_err());
    }
}
