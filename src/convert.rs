use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::consts::{MAX_YEAR, MIN_YEAR};
use crate::prelude::*;
use crate::{CalendarKind, DateParts};

/// Outcome of a validation or conversion: the date, or a [`ConversionError`].
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Stable machine-readable error codes exposed to UI consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    #[display(fmt = "INVALID_GREGORIAN_DATE")]
    InvalidGregorianDate,
    #[display(fmt = "INVALID_JALALI_DATE")]
    InvalidJalaliDate,
    #[display(fmt = "INVALID_ISLAMIC_DATE")]
    InvalidIslamicDate,
    #[display(fmt = "DATE_OUT_OF_RANGE")]
    DateOutOfRange,
}

impl ErrorCode {
    /// The validation error code for dates rejected under `calendar`
    pub const fn invalid_date(calendar: CalendarKind) -> Self {
        match calendar {
            CalendarKind::Gregorian => Self::InvalidGregorianDate,
            CalendarKind::Jalali => Self::InvalidJalaliDate,
            CalendarKind::Islamic => Self::InvalidIslamicDate,
        }
    }
}

/// Error type for calendar validation and conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The input is not a valid date in its declared calendar.
    #[error("Invalid {calendar} date: {date}")]
    InvalidDate {
        calendar: CalendarKind,
        date:     DateParts,
    },

    /// The converted date falls outside the supported year range.
    #[error(
        "Date {date} ({from}) has no {to} equivalent within years {min}-{max}",
        min = MIN_YEAR,
        max = MAX_YEAR
    )]
    OutOfRange {
        from: CalendarKind,
        to:   CalendarKind,
        date: DateParts,
    },
}

impl ConversionError {
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidDate { calendar, .. } => ErrorCode::invalid_date(*calendar),
            Self::OutOfRange { .. } => ErrorCode::DateOutOfRange,
        }
    }
}

impl Serialize for ConversionError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("ConversionError", 2)?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// A conversion as submitted by the date converter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub from: CalendarKind,
    pub to:   CalendarKind,
    pub date: DateParts,
}

impl ConversionRequest {
    pub const fn new(from: CalendarKind, to: CalendarKind, date: DateParts) -> Self {
        Self { from, to, date }
    }

    /// Runs [`convert_date`] on this request
    ///
    /// # Errors
    /// See [`convert_date`].
    pub fn convert(&self) -> ConversionResult<DateParts> {
        convert_date(self.from, self.to, self.date)
    }
}

/// Checks `date` against `calendar` and hands it back unchanged when valid.
///
/// # Errors
/// Returns `ConversionError::InvalidDate` if the year is outside
/// `MIN_YEAR..=MAX_YEAR`, the month is not 1-12, or the day exceeds the
/// leap-aware month length.
pub fn validate(calendar: CalendarKind, date: DateParts) -> ConversionResult<DateParts> {
    if calendar.is_valid_date(date) {
        Ok(date)
    } else {
        debug!(%calendar, %date, "rejected invalid date");
        Err(ConversionError::InvalidDate { calendar, date })
    }
}

/// Converts `date` from one calendar to another through the shared day number.
///
/// Converting a calendar to itself only validates.
///
/// # Errors
/// Returns `ConversionError::InvalidDate` if `date` is not valid in `from`,
/// or `ConversionError::OutOfRange` if the result lies outside the supported
/// year range of `to`.
pub fn convert_date(
    from: CalendarKind,
    to: CalendarKind,
    date: DateParts,
) -> ConversionResult<DateParts> {
    let date = validate(from, date)?;
    if from == to {
        return Ok(date);
    }

    let day = from.to_day_number(date);
    let converted = to.from_day_number(day);
    if !to.is_valid_date(converted) {
        debug!(%from, %to, %date, %converted, "converted date out of range");
        return Err(ConversionError::OutOfRange { from, to, date });
    }

    trace!(%from, %to, %date, %converted, %day, "converted");
    Ok(converted)
}

/// Validates `date` under `calendar` and normalizes it to Gregorian, the
/// pivot calendar for [`arithmetic`](crate::arithmetic).
///
/// # Errors
/// Same as [`convert_date`].
pub fn to_gregorian(calendar: CalendarKind, date: DateParts) -> ConversionResult<DateParts> {
    convert_date(calendar, CalendarKind::Gregorian, date)
}

/// # Errors
/// Returns `INVALID_JALALI_DATE` for invalid input.
pub fn jalali_to_gregorian(date: DateParts) -> ConversionResult<DateParts> {
    convert_date(CalendarKind::Jalali, CalendarKind::Gregorian, date)
}

/// # Errors
/// Returns `INVALID_GREGORIAN_DATE` for invalid input and `DATE_OUT_OF_RANGE`
/// for Gregorian dates before the Jalali epoch (March 622).
pub fn gregorian_to_jalali(date: DateParts) -> ConversionResult<DateParts> {
    convert_date(CalendarKind::Gregorian, CalendarKind::Jalali, date)
}

/// # Errors
/// Returns `INVALID_GREGORIAN_DATE` for invalid input and `DATE_OUT_OF_RANGE`
/// for Gregorian dates before the Islamic epoch (July 622).
pub fn gregorian_to_islamic(date: DateParts) -> ConversionResult<DateParts> {
    convert_date(CalendarKind::Gregorian, CalendarKind::Islamic, date)
}

/// # Errors
/// Returns `INVALID_ISLAMIC_DATE` for invalid input and `DATE_OUT_OF_RANGE`
/// when the Gregorian year would pass `MAX_YEAR`.
pub fn islamic_to_gregorian(date: DateParts) -> ConversionResult<DateParts> {
    convert_date(CalendarKind::Islamic, CalendarKind::Gregorian, date)
}

/// # Errors
/// Returns `INVALID_JALALI_DATE` for invalid input and `DATE_OUT_OF_RANGE`
/// for the first months of Jalali year 1, which precede Muharram 1.
pub fn jalali_to_islamic(date: DateParts) -> ConversionResult<DateParts> {
    convert_date(CalendarKind::Jalali, CalendarKind::Islamic, date)
}

/// # Errors
/// Returns `INVALID_ISLAMIC_DATE` for invalid input.
pub fn islamic_to_jalali(date: DateParts) -> ConversionResult<DateParts> {
    convert_date(CalendarKind::Islamic, CalendarKind::Jalali, date)
}
