use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY,
};
use crate::{CalendarDate, ParseError, prelude::*};
use serde::Serialize;
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        match NonZeroU16::new(value) {
            Some(year) if value <= MAX_YEAR => Ok(Self(year)),
            _ => Err(ParseError::InvalidYear(i32::from(value))),
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.get())
    }
}

/// A calendar month, stored 1-based (January = 1).
///
/// Grid and navigation code that counts months from zero goes through
/// [`Month::from_index`] and [`Month::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month from its 1-based number.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        match NonZeroU8::new(value) {
            Some(month) if value <= MAX_MONTH => Ok(Self(month)),
            _ => Err(ParseError::InvalidMonth(value)),
        }
    }

    /// Creates a Month from a 0-based index (January = 0).
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the index is 12 or more. The
    /// reported value is the 1-based month number.
    pub fn from_index(index: u8) -> Result<Self, ParseError> {
        Self::new(index.saturating_add(1))
    }

    /// Returns the 1-based month number
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the 0-based month index
    #[inline]
    pub const fn index(self) -> u8 {
        self.0.get() - 1
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

/// A day of month, validated against its year and month on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };
        match NonZeroU8::new(value) {
            Some(day) if value <= days_in_month(year.get(), month.get()) => Ok(Self(day)),
            _ => Err(invalid),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

/// A (year, month) pair; the unit the calendar pages through.
///
/// Ordered chronologically. Serializes as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{}", year, month)]
pub struct YearMonth {
    year:  Year,
    month: Month,
}

impl YearMonth {
    pub const fn from_parts(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// Creates a month from a year and a 1-based month number.
    ///
    /// # Errors
    /// Returns `ParseError` if either component is out of range.
    pub fn new(year: u16, month: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
        })
    }

    /// Creates a month from a year and a 0-based month index.
    ///
    /// # Errors
    /// Returns `ParseError` if either component is out of range.
    pub fn from_index(year: u16, month_index: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::from_index(month_index)?,
        })
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year.get(), self.month.get())
    }

    /// Number of blank cells before the 1st in a Monday-first week.
    pub fn first_weekday_offset(&self) -> u8 {
        self.first_day().weekday_offset()
    }

    pub const fn first_day(&self) -> CalendarDate {
        CalendarDate::from_valid(self.year, self.month, Day(NonZeroU8::MIN))
    }

    /// Every day of the month in order, starting with the 1st.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> + use<> {
        let Self { year, month } = *self;
        (MIN_DAY..=self.days_in_month())
            .filter_map(NonZeroU8::new)
            .map(move |day| CalendarDate::from_valid(year, month, Day(day)))
    }

    /// Returns `true` if `date` falls in this month.
    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year_month() == *self
    }

    /// The following month, rolling into January of the next year.
    /// Returns `None` past December of `MAX_YEAR`.
    pub fn next(&self) -> Option<Self> {
        let (year, month) = next_month(self.year.get(), self.month.get())?;
        Self::new(year, month).ok()
    }

    /// The preceding month, rolling back into December of the previous year.
    /// Returns `None` before January of year 1.
    pub fn prev(&self) -> Option<Self> {
        let (year, month) = prev_month(self.year.get(), self.month.get())?;
        Self::new(year, month).ok()
    }
}

impl Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in a month, with `month` 1-based.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Monday-first weekday of the 1st of a month (`month` 1-based):
/// 0 means Monday, 6 means Sunday.
///
/// # Errors
/// Returns `ParseError` if the year or month is out of range.
pub fn first_weekday_offset(year: u16, month: u8) -> Result<u8, ParseError> {
    YearMonth::new(year, month).map(|month| month.first_weekday_offset())
}

fn next_month(year: u16, month: u8) -> Option<(u16, u8)> {
    if month == DECEMBER {
        (year < MAX_YEAR).then_some((year + 1, JANUARY))
    } else {
        Some((year, month + 1))
    }
}

fn prev_month(year: u16, month: u8) -> Option<(u16, u8)> {
    if month == JANUARY {
        (year > 1).then_some((year - 1, DECEMBER))
    } else {
        Some((year, month - 1))
    }
}
