//! The calendar day a habit screen is showing.
//!
//! Day boundaries are taken in the zone of a `Clock`, so the date sent to the
//! API, the labels and the "is past" check all follow the user's own day.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, SecondsFormat, Utc};
use thiserror::Error;

use crate::time::Clock;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DayParseError {
    #[error("date cannot be empty")]
    Empty,
    #[error("invalid date {raw:?}: expected YYYY-MM-DD or an RFC 3339 timestamp")]
    Invalid { raw: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HabitDay {
    date: NaiveDate,
}

impl HabitDay {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// The local day containing the clock's current instant.
    #[must_use]
    pub fn today(clock: &Clock) -> Self {
        Self::new(clock.today())
    }

    /// Parse either a plain `YYYY-MM-DD` date or an RFC 3339 timestamp.
    ///
    /// A timestamp names the calendar day at its own offset.
    ///
    /// # Errors
    ///
    /// Returns `DayParseError` if the input is empty or matches neither format.
    pub fn parse(raw: &str) -> Result<Self, DayParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DayParseError::Empty);
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(Self::new(date));
        }
        DateTime::parse_from_rfc3339(trimmed)
            .map(|at| Self::new(at.date_naive()))
            .map_err(|_| DayParseError::Invalid {
                raw: trimmed.to_string(),
            })
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Local midnight of the day in the clock's zone.
    #[must_use]
    pub fn start_of_day(&self, clock: &Clock) -> DateTime<Utc> {
        clock.start_of(self.date)
    }

    /// Last millisecond of the local day (23:59:59.999).
    #[must_use]
    pub fn end_of_day(&self, clock: &Clock) -> DateTime<Utc> {
        let next = match self.date.succ_opt() {
            Some(next) => clock.start_of(next),
            None => self.start_of_day(clock) + Duration::days(1),
        };
        next - Duration::milliseconds(1)
    }

    /// ISO-8601 value for the `date` query parameter: local midnight in UTC,
    /// e.g. `2026-10-16T05:00:00.000Z` for a clock at UTC-5.
    #[must_use]
    pub fn query_value(&self, clock: &Clock) -> String {
        self.start_of_day(clock)
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Full weekday name, e.g. `Friday`.
    #[must_use]
    pub fn weekday_label(&self) -> String {
        self.date.format("%A").to_string()
    }

    /// `DD/MM`, e.g. `16/10`.
    #[must_use]
    pub fn day_month_label(&self) -> String {
        self.date.format("%d/%m").to_string()
    }

    /// True when the whole local day lies strictly before the clock's now.
    #[must_use]
    pub fn is_past(&self, clock: &Clock) -> bool {
        self.end_of_day(clock) < clock.now()
    }
}

impl fmt::Display for HabitDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))
    }
}

impl FromStr for HabitDay {
    type Err = DayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
