//! The booking flow's shared check-in/check-out fields.

use serde::{Deserialize, Serialize};

use crate::{DateRange, RangeError};

/// A partial write to a [`RangeHolder`].
///
/// `None` leaves a field as it is; `Some("")` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkin:  Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout: Option<String>,
}

impl RangeUpdate {
    /// Writes both fields from `range`.
    pub fn from_range(range: &DateRange) -> Self {
        let (checkin, checkout) = range.to_strings();
        Self {
            checkin:  Some(checkin),
            checkout: Some(checkout),
        }
    }

    /// Clears both fields.
    pub fn cleared() -> Self {
        Self::from_range(&DateRange::Empty)
    }

    #[must_use]
    pub fn checkin(mut self, value: impl Into<String>) -> Self {
        self.checkin = Some(value.into());
        self
    }

    #[must_use]
    pub fn checkout(mut self, value: impl Into<String>) -> Self {
        self.checkout = Some(value.into());
        self
    }
}

/// Where the surrounding booking flow keeps the selected dates, as
/// `YYYY-MM-DD` strings (empty when unset).
pub trait RangeHolder {
    fn checkin_date(&self) -> &str;
    fn checkout_date(&self) -> &str;
    fn set_range(&mut self, update: RangeUpdate);

    /// Parses the stored strings.
    ///
    /// # Errors
    /// Returns `RangeError` if the stored strings do not form a valid range.
    fn range(&self) -> Result<DateRange, RangeError> {
        DateRange::from_strings(self.checkin_date(), self.checkout_date())
    }
}

impl<H: RangeHolder + ?Sized> RangeHolder for &mut H {
    fn checkin_date(&self) -> &str {
        (**self).checkin_date()
    }

    fn checkout_date(&self) -> &str {
        (**self).checkout_date()
    }

    fn set_range(&mut self, update: RangeUpdate) {
        (**self).set_range(update);
    }
}

/// In-memory [`RangeHolder`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedRange {
    #[serde(default)]
    checkin_date:  String,
    #[serde(default)]
    checkout_date: String,
}

impl SharedRange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Holder seeded with raw strings, as restored from a URL or form.
    pub fn with_dates(checkin: impl Into<String>, checkout: impl Into<String>) -> Self {
        Self {
            checkin_date:  checkin.into(),
            checkout_date: checkout.into(),
        }
    }
}

impl RangeHolder for SharedRange {
    fn checkin_date(&self) -> &str {
        &self.checkin_date
    }

    fn checkout_date(&self) -> &str {
        &self.checkout_date
    }

    fn set_range(&mut self, update: RangeUpdate) {
        if let Some(checkin) = update.checkin {
            self.checkin_date = checkin;
        }
        if let Some(checkout) = update.checkout {
            self.checkout_date = checkout;
        }
    }
}
