use crate::consts::{GREGORIAN_MONTH_NAMES, ISLAMIC_MONTH_NAMES, JALALI_MONTH_NAMES, MAX_MONTH};
use crate::prelude::*;
use crate::types::{DateParts, DayNumber};
use crate::{ParseError, gregorian, islamic, jalali};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The calendars a [`DateParts`] value can be interpreted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    /// Proleptic Gregorian calendar
    #[display(fmt = "gregorian")]
    Gregorian,
    /// Solar Hijri calendar, 33-year arithmetic leap cycle
    #[display(fmt = "jalali")]
    Jalali,
    /// Tabular lunar Hijri calendar
    #[display(fmt = "islamic")]
    Islamic,
}

impl CalendarKind {
    pub const ALL: [Self; 3] = [Self::Gregorian, Self::Jalali, Self::Islamic];

    pub fn is_leap_year(self, year: i32) -> bool {
        match self {
            Self::Gregorian => gregorian::is_leap_year(year),
            Self::Jalali => jalali::is_leap_year(year),
            Self::Islamic => islamic::is_leap_year(year),
        }
    }

    /// Number of days in the month, 0 if `month` is not 1-12
    pub fn days_in_month(self, year: i32, month: u8) -> u8 {
        match self {
            Self::Gregorian => gregorian::days_in_month(year, month),
            Self::Jalali => jalali::days_in_month(year, month),
            Self::Islamic => islamic::days_in_month(year, month),
        }
    }

    pub fn days_in_year(self, year: i32) -> u16 {
        match self {
            Self::Gregorian => gregorian::days_in_year(year),
            Self::Jalali => jalali::days_in_year(year),
            Self::Islamic => islamic::days_in_year(year),
        }
    }

    /// Checks the year range, the month range and the leap-aware day count
    pub fn is_valid_date(self, date: DateParts) -> bool {
        match self {
            Self::Gregorian => gregorian::is_valid_date(date),
            Self::Jalali => jalali::is_valid_date(date),
            Self::Islamic => islamic::is_valid_date(date),
        }
    }

    /// Absolute day number of `date` read under this calendar.
    /// The date is not validated.
    pub fn to_day_number(self, date: DateParts) -> DayNumber {
        match self {
            Self::Gregorian => gregorian::to_day_number(date),
            Self::Jalali => jalali::to_day_number(date),
            Self::Islamic => islamic::to_day_number(date),
        }
    }

    pub fn from_day_number(self, day: DayNumber) -> DateParts {
        match self {
            Self::Gregorian => gregorian::from_day_number(day),
            Self::Jalali => jalali::from_day_number(day),
            Self::Islamic => islamic::from_day_number(day),
        }
    }

    /// Persian name of `month`, if it is 1-12
    pub fn month_name(self, month: u8) -> Option<&'static str> {
        if month == 0 || month > MAX_MONTH {
            return None;
        }
        let names = match self {
            Self::Gregorian => &GREGORIAN_MONTH_NAMES,
            Self::Jalali => &JALALI_MONTH_NAMES,
            Self::Islamic => &ISLAMIC_MONTH_NAMES,
        };
        names.get(usize::from(month - 1)).copied()
    }

    /// Persian name of the calendar itself
    pub const fn persian_name(self) -> &'static str {
        match self {
            Self::Gregorian => "میلادی",
            Self::Jalali => "شمسی",
            Self::Islamic => "قمری",
        }
    }
}

impl FromStr for CalendarKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "gregorian" => Ok(Self::Gregorian),
            "jalali" | "persian" | "shamsi" => Ok(Self::Jalali),
            "islamic" | "hijri" | "qamari" => Ok(Self::Islamic),
            _ => Err(ParseError::UnknownCalendar(trimmed.to_owned())),
        }
    }
}
