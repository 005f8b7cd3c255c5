//! The date a view is showing

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date selected by the user, as sent to the API.
///
/// Held as the raw string so that whatever the user picked is forwarded
/// verbatim; the backend decides what a valid date is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedDate(String);

impl SelectedDate {
    pub fn new(date: impl Into<String>) -> Self {
        Self(date.into())
    }

    /// Today's date in the local time zone
    pub fn today() -> Self {
        Self::from(Local::now().date_naive())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse as `YYYY-MM-DD`, if it is one
    pub fn as_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.0.trim(), DATE_FORMAT).ok()
    }

    /// The date `days` days away, if this is a calendar date
    pub fn shift_days(&self, days: i64) -> Option<Self> {
        let date = self.as_naive_date()?;
        date.checked_add_signed(Duration::days(days)).map(Self::from)
    }
}

impl Default for SelectedDate {
    fn default() -> Self {
        Self::today()
    }
}

impl From<NaiveDate> for SelectedDate {
    fn from(date: NaiveDate) -> Self {
        Self(date.format(DATE_FORMAT).to_string())
    }
}

impl From<String> for SelectedDate {
    fn from(date: String) -> Self {
        Self(date)
    }
}

impl From<&str> for SelectedDate {
    fn from(date: &str) -> Self {
        Self(date.to_string())
    }
}

impl AsRef<str> for SelectedDate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SelectedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_is_iso_date() {
        let today = SelectedDate::today();
        assert_eq!(today.as_str().len(), 10);
        assert!(today.as_naive_date().is_some());
    }

    #[test]
    fn test_shift_days() {
        let date = SelectedDate::from("2024-01-01");

        assert_eq!(date.shift_days(-1), Some(SelectedDate::from("2023-12-31")));
        assert_eq!(date.shift_days(31), Some(SelectedDate::from("2024-02-01")));
    }

    #[test]
    fn test_arbitrary_strings_are_kept() {
        let date = SelectedDate::from("not-a-date");

        assert_eq!(date.as_str(), "not-a-date");
        assert_eq!(date.as_naive_date(), None);
        assert_eq!(date.shift_days(1), None);
    }
}
