//! Proleptic Gregorian calendar rules and day-number conversion.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_GREGORIAN_CYCLE, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MARCH_ZERO_DAY_NUMBER, MAX_MONTH, MAX_YEAR, MIN_DAY,
    MIN_YEAR,
};
use crate::types::{DateParts, DayNumber};

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`, or 0 if the month is not 1-12
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    if month == 0 || month > MAX_MONTH {
        0
    } else if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

pub const fn is_valid_date(date: DateParts) -> bool {
    date.year >= MIN_YEAR
        && date.year <= MAX_YEAR
        && date.day >= MIN_DAY
        && date.day <= days_in_month(date.year, date.month)
}

/// Day number of a Gregorian date.
///
/// Works on a civil year shifted to start in March so that the leap day is
/// the last day of the year, which turns month lengths into the closed form
/// `(153 * m + 2) / 5`.
pub fn to_day_number(date: DateParts) -> DayNumber {
    let month = i64::from(date.month);
    let year = i64::from(date.year) - i64::from(month <= i64::from(FEBRUARY));
    let cycle_years = i64::from(GREGORIAN_CYCLE);

    let era = year.div_euclid(cycle_years);
    let year_of_era = year.rem_euclid(cycle_years); // [0, 399]
    let shifted_month = (month + 9) % 12; // March = 0
    let day_of_year = (153 * shifted_month + 2) / 5 + i64::from(date.day) - 1; // [0, 365]
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    DayNumber::new(MARCH_ZERO_DAY_NUMBER + era * DAYS_PER_GREGORIAN_CYCLE + day_of_era)
}

/// Gregorian date of a day number. Total for every `i64` input that does
/// not overflow the shift to the March-based era.
pub fn from_day_number(day: DayNumber) -> DateParts {
    let shifted = day.get().saturating_sub(MARCH_ZERO_DAY_NUMBER);

    let era = shifted.div_euclid(DAYS_PER_GREGORIAN_CYCLE);
    let day_of_era = shifted.rem_euclid(DAYS_PER_GREGORIAN_CYCLE); // [0, 146096]
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153; // [0, 11]
    let day_of_month = day_of_year - (153 * shifted_month + 2) / 5 + 1; // [1, 31]
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = era * i64::from(GREGORIAN_CYCLE) + year_of_era + i64::from(month <= 2);

    DateParts::from_wide(year, month, day_of_month)
}
