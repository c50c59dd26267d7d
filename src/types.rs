use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A calendar-agnostic `(year, month, day)` triple.
///
/// Whether a value is valid depends on the calendar it is read under; see
/// [`CalendarKind::is_valid_date`](crate::CalendarKind::is_valid_date).
/// Ordering is lexicographic on `(year, month, day)`, which matches
/// chronological ordering within a single calendar.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    From,
    Into,
)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct DateParts {
    pub year:  i32,
    pub month: u8,
    pub day:   u8,
}

impl DateParts {
    /// Creates a new triple without validating it against any calendar
    #[inline]
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Builds a triple from wide intermediates produced by the day-number
    /// converters. Month and day always come out of a month table, so only
    /// the year can leave the `i32` range and it saturates.
    pub(crate) fn from_wide(year: i64, month: i64, day: i64) -> Self {
        Self {
            year:  saturating_year(year),
            month: u8::try_from(month).unwrap_or(u8::MAX),
            day:   u8::try_from(day).unwrap_or(u8::MAX),
        }
    }
}

/// Integer count of days where day 1 is Gregorian 0001-01-01.
///
/// Shared by every calendar in this crate, so it is the only representation
/// in which dates from different calendars can be compared or subtracted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    From,
    Into,
)]
#[serde(transparent)]
pub struct DayNumber(i64);

impl DayNumber {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw day count
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Add<i64> for DayNumber {
    type Output = Self;

    fn add(self, days: i64) -> Self::Output {
        Self(self.0.saturating_add(days))
    }
}

impl Sub for DayNumber {
    type Output = i64;

    fn sub(self, other: Self) -> Self::Output {
        self.0.saturating_sub(other.0)
    }
}

pub(crate) fn saturating_year(year: i64) -> i32 {
    i32::try_from(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX })
}
