mod calendar;
mod config;
mod consts;
mod grid;
mod holder;
mod navigation;
mod prelude;
mod range;
mod selection;
mod types;

#[cfg(test)]
mod test_utils;

pub use calendar::{BookingCalendar, CalendarView, MonthPane, ViewCell};
pub use config::CalendarConfig;
pub use consts::*;
pub use grid::{Cell, MonthGrid};
pub use holder::{RangeHolder, RangeUpdate, SharedRange};
pub use navigation::NavigationGuard;
pub use range::{DateRange, RangeError, SelectionState, StayRange};
pub use selection::{CellStatus, ClickOutcome, SelectionEngine, on_click};
pub use types::{Day, Month, Year, YearMonth, days_in_month, first_weekday_offset, is_leap_year};

use crate::prelude::*;
use jiff::{Span, civil};
use std::str::FromStr;

/// A local calendar day with no time-of-day component.
///
/// Field order makes the derived ordering chronological. Displays and
/// serializes as `YYYY-MM-DD`, and [`FromStr`] accepts exactly that form, so
/// `date.to_string().parse()` always gives `date` back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{}-{}", year, month, day)]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from a year, a 1-based month and a day of month.
    ///
    /// # Errors
    /// Returns `ParseError` if any component is out of range for the calendar.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Components must already be checked against each other.
    pub(crate) const fn from_valid(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Drops the time of day from a local civil datetime.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` for years before 1.
    pub fn normalize(datetime: civil::DateTime) -> Result<Self, ParseError> {
        Self::try_from(datetime.date())
    }

    /// The calendar day of a zoned timestamp, in the timestamp's own zone.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` for years before 1.
    pub fn from_zoned(zoned: &jiff::Zoned) -> Result<Self, ParseError> {
        Self::try_from(zoned.date())
    }

    /// Today's date in the system time zone.
    ///
    /// Calendar views capture this once and pass it around; nothing in this
    /// crate reads the clock on its own.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the clock reports a year before 1.
    pub fn today() -> Result<Self, ParseError> {
        Self::from_zoned(&jiff::Zoned::now())
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// The month this date falls in.
    pub const fn year_month(&self) -> YearMonth {
        YearMonth::from_parts(self.year, self.month)
    }

    /// Monday-first weekday: 0 is Monday, 6 is Sunday.
    pub fn weekday_offset(&self) -> u8 {
        self.civil().weekday().to_monday_zero_offset().unsigned_abs()
    }

    /// Shifts the date by `days` (negative moves backward).
    /// Returns `None` if the result leaves the `1..=MAX_YEAR` range.
    pub fn add_days(&self, days: i64) -> Option<Self> {
        let span = Span::new().try_days(days).ok()?;
        let shifted = self.civil().checked_add(span).ok()?;
        Self::try_from(shifted).ok()
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: Self) -> i64 {
        // Date subtraction yields a span in whole days
        i64::from((other.civil() - self.civil()).get_days())
    }

    // Every CalendarDate is a valid civil date with a year in 1..=9999.
    #[allow(clippy::cast_possible_wrap)]
    fn civil(self) -> civil::Date {
        civil::date(self.year.get() as i16, self.month.get() as i8, self.day.get() as i8)
    }
}

impl From<CalendarDate> for civil::Date {
    fn from(date: CalendarDate) -> Self {
        date.civil()
    }
}

/// Parses one fixed-width, all-digit date component.
fn parse_component<T: FromStr>(part: &str, width: usize, input: &str) -> Result<T, ParseError> {
    if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(input.to_owned()));
    }
    part.parse::<T>().map_err(|_| ParseError::InvalidFormat(input.to_owned()))
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Accepts `YYYY-MM-DD` with zero-padded month and day; surrounding
    /// whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} {DATE_SEPARATOR} separators in {s}",
                parts.len() - 1
            )));
        };

        let year = parse_component::<u16>(year, 4, s)?;
        let month = parse_component::<u8>(month, 2, s)?;
        let day = parse_component::<u8>(day, 2, s)?;
        Self::new(year, month, day)
    }
}

impl TryFrom<civil::Date> for CalendarDate {
    type Error = ParseError;

    fn try_from(date: civil::Date) -> Result<Self, Self::Error> {
        let year =
            u16::try_from(date.year()).map_err(|_| ParseError::InvalidYear(i32::from(date.year())))?;
        // jiff months and days are always positive
        Self::new(year, date.month().unsigned_abs(), date.day().unsigned_abs())
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
