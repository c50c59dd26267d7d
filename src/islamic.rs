//! Tabular (arithmetic) Islamic calendar.
//!
//! Uses one fixed 30-year leap scheme: a year is leap when
//! `(11 * year + 14) mod 30 < 11`, which puts the leap years at
//! 2, 5, 7, 10, 13, 16, 18, 21, 24, 26 and 29 of each cycle. Real-world
//! observance follows moon sighting and can differ by a day or two.

use crate::consts::{
    DAYS_PER_ISLAMIC_CYCLE, ISLAMIC_CYCLE_YEARS, ISLAMIC_EPOCH, ISLAMIC_LONG_MONTH_DAYS,
    ISLAMIC_SHORT_MONTH_DAYS, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::types::{DateParts, DayNumber};

/// Leap years in each 30-year cycle
const LEAPS_PER_CYCLE: i64 = 11;
/// Days in an odd/even month pair
const DAYS_PER_MONTH_PAIR: i64 = ISLAMIC_LONG_MONTH_DAYS as i64 + ISLAMIC_SHORT_MONTH_DAYS as i64;

pub fn is_leap_year(year: i32) -> bool {
    (11 * i64::from(year) + 14).rem_euclid(ISLAMIC_CYCLE_YEARS) < LEAPS_PER_CYCLE
}

/// Number of days in `month` of `year`, or 0 if the month is not 1-12
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        MAX_MONTH if is_leap_year(year) => ISLAMIC_LONG_MONTH_DAYS,
        1..=MAX_MONTH if month % 2 == 1 => ISLAMIC_LONG_MONTH_DAYS,
        1..=MAX_MONTH => ISLAMIC_SHORT_MONTH_DAYS,
        _ => 0,
    }
}

pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 355 } else { 354 }
}

pub fn is_valid_date(date: DateParts) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&date.year)
        && date.day >= MIN_DAY
        && date.day <= days_in_month(date.year, date.month)
}

/// Days from Muharram 1 of year 1 to Muharram 1 of `year`
fn days_before_year(year: i64) -> i64 {
    354 * (year - 1) + (3 + 11 * year).div_euclid(ISLAMIC_CYCLE_YEARS)
}

fn days_before_month(month: i64) -> i64 {
    i64::from(ISLAMIC_SHORT_MONTH_DAYS) * (month - 1) + month / 2
}

pub fn to_day_number(date: DateParts) -> DayNumber {
    DayNumber::new(
        ISLAMIC_EPOCH
            + days_before_year(i64::from(date.year))
            + days_before_month(i64::from(date.month))
            + i64::from(date.day)
            - 1,
    )
}

pub fn from_day_number(day: DayNumber) -> DateParts {
    let elapsed = day.get().saturating_sub(ISLAMIC_EPOCH);

    // Mean-year estimate is never off by more than one year
    let mut year = ISLAMIC_CYCLE_YEARS
        .saturating_mul(elapsed)
        .saturating_add(10_646)
        .div_euclid(DAYS_PER_ISLAMIC_CYCLE);
    if days_before_year(year) > elapsed {
        year -= 1;
    } else if days_before_year(year + 1) <= elapsed {
        year += 1;
    }

    let day_of_year = elapsed - days_before_year(year);
    let last_month_start = days_before_month(i64::from(MAX_MONTH));
    let (month, day_of_month) = if day_of_year >= last_month_start {
        (i64::from(MAX_MONTH), day_of_year - last_month_start + 1)
    } else {
        let pair = day_of_year / DAYS_PER_MONTH_PAIR;
        let rest = day_of_year % DAYS_PER_MONTH_PAIR;
        let long_month = i64::from(ISLAMIC_LONG_MONTH_DAYS);
        if rest < long_month {
            (2 * pair + 1, rest + 1)
        } else {
            (2 * pair + 2, rest - long_month + 1)
        }
    };

    DateParts::from_wide(year, month, day_of_month)
}
