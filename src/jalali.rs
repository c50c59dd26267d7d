//! Solar Hijri (Jalali) calendar on the arithmetic 33-year leap cycle.

use crate::consts::{
    DAYS_PER_JALALI_CYCLE, JALALI_CYCLE_YEARS, JALALI_EPOCH, JALALI_ESFAND_DAYS,
    JALALI_LEAP_REMAINDERS, JALALI_LONG_MONTH_DAYS, JALALI_SHORT_MONTH_DAYS, MAX_MONTH, MAX_YEAR,
    MIN_DAY, MIN_YEAR,
};
use crate::types::{DateParts, DayNumber};

/// Months 1-6 are 31 days long, so month 7 starts on day-of-year 186 (0-based)
const FIRST_HALF_DAYS: i64 = 6 * JALALI_LONG_MONTH_DAYS as i64;
const LEAPS_PER_CYCLE: i64 = JALALI_LEAP_REMAINDERS.len() as i64;

/// Leap iff `year mod 33` is one of the cycle's leap remainders.
pub fn is_leap_year(year: i32) -> bool {
    JALALI_LEAP_REMAINDERS.contains(&i64::from(year).rem_euclid(JALALI_CYCLE_YEARS))
}

/// Number of days in `month` of `year`, or 0 if the month is not 1-12
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1..=6 => JALALI_LONG_MONTH_DAYS,
        7..=11 => JALALI_SHORT_MONTH_DAYS,
        MAX_MONTH if is_leap_year(year) => JALALI_ESFAND_DAYS + 1,
        MAX_MONTH => JALALI_ESFAND_DAYS,
        _ => 0,
    }
}

pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

pub fn is_valid_date(date: DateParts) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&date.year)
        && date.day >= MIN_DAY
        && date.day <= days_in_month(date.year, date.month)
}

/// Days from Farvardin 1 of year 1 to Farvardin 1 of `year`
fn days_before_year(year: i64) -> i64 {
    let elapsed = year - 1;
    let cycles = elapsed.div_euclid(JALALI_CYCLE_YEARS);
    let into_cycle = elapsed.rem_euclid(JALALI_CYCLE_YEARS);
    let partial_leaps: i64 = JALALI_LEAP_REMAINDERS
        .iter()
        .map(|&remainder| i64::from(remainder <= into_cycle))
        .sum();

    365 * elapsed + cycles * LEAPS_PER_CYCLE + partial_leaps
}

fn days_before_month(month: i64) -> i64 {
    if month <= 7 {
        i64::from(JALALI_LONG_MONTH_DAYS) * (month - 1)
    } else {
        FIRST_HALF_DAYS + i64::from(JALALI_SHORT_MONTH_DAYS) * (month - 7)
    }
}

pub fn to_day_number(date: DateParts) -> DayNumber {
    DayNumber::new(
        JALALI_EPOCH
            + days_before_year(i64::from(date.year))
            + days_before_month(i64::from(date.month))
            + i64::from(date.day)
            - 1,
    )
}

pub fn from_day_number(day: DayNumber) -> DateParts {
    let elapsed = day.get().saturating_sub(JALALI_EPOCH);

    // Mean-year estimate is never off by more than one year
    let mut year = 1 + JALALI_CYCLE_YEARS
        .saturating_mul(elapsed)
        .saturating_add(JALALI_CYCLE_YEARS - 1)
        .div_euclid(DAYS_PER_JALALI_CYCLE);
    if days_before_year(year) > elapsed {
        year -= 1;
    } else if days_before_year(year + 1) <= elapsed {
        year += 1;
    }

    let day_of_year = elapsed - days_before_year(year);
    let long_month = i64::from(JALALI_LONG_MONTH_DAYS);
    let short_month = i64::from(JALALI_SHORT_MONTH_DAYS);
    let (month, day_of_month) = if day_of_year < FIRST_HALF_DAYS {
        (day_of_year / long_month + 1, day_of_year % long_month + 1)
    } else {
        let rest = day_of_year - FIRST_HALF_DAYS;
        (rest / short_month + 7, rest % short_month + 1)
    };

    DateParts::from_wide(year, month, day_of_month)
}
