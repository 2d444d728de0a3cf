use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, ParseError, prelude::*};

/// A complete stay: check-out is always strictly after check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{checkin}/{checkout}")]
pub struct StayRange {
    checkin:  CalendarDate,
    checkout: CalendarDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Check-out is on or before check-in.
    #[error("Invalid stay: check-out ({checkout}) must be after check-in ({checkin})")]
    InvalidRange {
        checkin:  CalendarDate,
        checkout: CalendarDate,
    },

    /// Check-out given without a check-in.
    #[error("Check-out ({checkout}) given without a check-in date")]
    MissingCheckin { checkout: CalendarDate },

    /// Error parsing date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

impl StayRange {
    /// # Errors
    /// Returns `RangeError::InvalidRange` if `checkout <= checkin`.
    pub fn new(checkin: CalendarDate, checkout: CalendarDate) -> Result<Self, RangeError> {
        if checkout <= checkin {
            return Err(RangeError::InvalidRange { checkin, checkout });
        }
        Ok(Self { checkin, checkout })
    }

    pub const fn checkin(&self) -> CalendarDate {
        self.checkin
    }

    pub const fn checkout(&self) -> CalendarDate {
        self.checkout
    }

    /// Nights between check-in and check-out; always at least 1.
    pub fn nights(&self) -> u64 {
        self.checkin.days_until(self.checkout).unsigned_abs()
    }

    /// Range fill: after check-in, up to and including check-out.
    pub fn fills(&self, date: CalendarDate) -> bool {
        self.checkin < date && date <= self.checkout
    }

    /// Returns `true` if `date` is the check-in or check-out day.
    pub fn is_endpoint(&self, date: CalendarDate) -> bool {
        date == self.checkin || date == self.checkout
    }
}

/// Which half of the range the next click will set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionState {
    Empty,
    Partial,
    Full,
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "empty",
            Self::Partial => "partial",
            Self::Full => "full",
        })
    }
}

/// The committed check-in/check-out selection.
///
/// Serializes as `{"checkin": "...", "checkout": "..."}` with empty strings
/// for absent dates, the shape the booking flow stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RangeFields", into = "RangeFields")]
pub enum DateRange {
    #[default]
    Empty,
    Partial(CalendarDate),
    Full(StayRange),
}

impl DateRange {
    pub const fn state(&self) -> SelectionState {
        match self {
            Self::Empty => SelectionState::Empty,
            Self::Partial(_) => SelectionState::Partial,
            Self::Full(_) => SelectionState::Full,
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn checkin(&self) -> Option<CalendarDate> {
        match self {
            Self::Empty => None,
            Self::Partial(checkin) => Some(*checkin),
            Self::Full(stay) => Some(stay.checkin()),
        }
    }

    pub const fn checkout(&self) -> Option<CalendarDate> {
        match self {
            Self::Full(stay) => Some(stay.checkout()),
            Self::Empty | Self::Partial(_) => None,
        }
    }

    pub const fn stay(&self) -> Option<StayRange> {
        match self {
            Self::Full(stay) => Some(*stay),
            Self::Empty | Self::Partial(_) => None,
        }
    }

    /// Earliest selectable check-out while only check-in is set.
    pub fn min_checkout(&self) -> Option<CalendarDate> {
        match self {
            Self::Partial(checkin) => checkin.add_days(1),
            Self::Empty | Self::Full(_) => None,
        }
    }

    /// Builds a range from `YYYY-MM-DD` strings where `""` means absent.
    ///
    /// # Errors
    /// Returns `RangeError` if either date fails to parse, if check-out is
    /// set without check-in, or if check-out is not after check-in.
    pub fn from_strings(checkin: &str, checkout: &str) -> Result<Self, RangeError> {
        let checkin = parse_optional(checkin)?;
        let checkout = parse_optional(checkout)?;
        match (checkin, checkout) {
            (None, None) => Ok(Self::Empty),
            (Some(checkin), None) => Ok(Self::Partial(checkin)),
            (None, Some(checkout)) => Err(RangeError::MissingCheckin { checkout }),
            (Some(checkin), Some(checkout)) => StayRange::new(checkin, checkout).map(Self::Full),
        }
    }

    /// `(checkin, checkout)` as `YYYY-MM-DD`, with `""` for absent dates.
    pub fn to_strings(&self) -> (String, String) {
        let format = |date: Option<CalendarDate>| date.map(|d| d.to_string()).unwrap_or_default();
        (format(self.checkin()), format(self.checkout()))
    }
}

impl From<StayRange> for DateRange {
    fn from(stay: StayRange) -> Self {
        Self::Full(stay)
    }
}

fn parse_optional(value: &str) -> Result<Option<CalendarDate>, ParseError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    value.parse().map(Some)
}

#[derive(Serialize, Deserialize)]
struct RangeFields {
    #[serde(default)]
    checkin:  String,
    #[serde(default)]
    checkout: String,
}

impl TryFrom<RangeFields> for DateRange {
    type Error = RangeError;

    fn try_from(fields: RangeFields) -> Result<Self, Self::Error> {
        Self::from_strings(&fields.checkin, &fields.checkout)
    }
}

impl From<DateRange> for RangeFields {
    fn from(range: DateRange) -> Self {
        let (checkin, checkout) = range.to_strings();
        Self { checkin, checkout }
    }
}
