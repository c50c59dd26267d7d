//! Date arithmetic on Gregorian [`DateParts`].
//!
//! Every function here assumes its input is already a valid Gregorian date
//! (see [`convert::to_gregorian`](crate::convert::to_gregorian)) and is total:
//! none of them validate or return errors.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_PER_WEEK, FIRST_MONTH, MAX_MONTH, MIN_DAY, REFERENCE_SATURDAY, WEEKDAY_NAMES};
use crate::gregorian;
use crate::prelude::*;
use crate::types::{DateParts, DayNumber, saturating_year};

const MONTHS_PER_YEAR: i64 = MAX_MONTH as i64;

/// A calendar-aware span between two dates. All components share one sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[display(fmt = "{years}y {months}m {days}d")]
pub struct DateDifference {
    pub years:  i64,
    pub months: i64,
    pub days:   i64,
}

impl DateDifference {
    pub const fn new(years: i64, months: i64, days: i64) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    const fn negate(self) -> Self {
        Self::new(-self.years, -self.months, -self.days)
    }
}

/// Days of the week, Saturday first as in the Persian week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    const ORDER: [Self; 7] = [
        Self::Saturday,
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Weekday of an absolute day number. Works in any calendar.
    pub fn from_day_number(day: DayNumber) -> Self {
        let index = (day.get() - REFERENCE_SATURDAY).rem_euclid(DAYS_PER_WEEK);
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ORDER.get(i).copied())
            .unwrap_or(Self::Saturday)
    }

    /// 0 for Saturday through 6 for Friday
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn persian_name(self) -> &'static str {
        WEEKDAY_NAMES[self.index()]
    }
}

/// Lexicographic comparison on `(year, month, day)`
pub fn compare_date_parts(a: DateParts, b: DateParts) -> Ordering {
    a.cmp(&b)
}

/// Signed number of days from `a` to `b`; positive when `b` is later
pub fn difference_in_days(a: DateParts, b: DateParts) -> i64 {
    gregorian::to_day_number(b) - gregorian::to_day_number(a)
}

/// Years, months and days from `a` to `b`.
///
/// Whole months are counted first by stepping `a` forward with the day
/// clamped to the month length, so 2023-01-31 to 2023-02-28 is exactly one
/// month. The remainder is days. When `b` precedes `a` every component is
/// negative.
pub fn difference_in_ymd(a: DateParts, b: DateParts) -> DateDifference {
    if b < a {
        return difference_in_ymd(b, a).negate();
    }

    let mut months = (i64::from(b.year) - i64::from(a.year)) * MONTHS_PER_YEAR
        + i64::from(b.month)
        - i64::from(a.month);
    let mut anchor = add_months(a, months);
    if anchor > b {
        months -= 1;
        anchor = add_months(a, months);
    }

    DateDifference::new(
        months.div_euclid(MONTHS_PER_YEAR),
        months.rem_euclid(MONTHS_PER_YEAR),
        difference_in_days(anchor, b),
    )
}

/// Adds `days` (possibly negative) across month and year boundaries
pub fn add_days(date: DateParts, days: i64) -> DateParts {
    gregorian::from_day_number(gregorian::to_day_number(date) + days)
}

/// Adds `months` (possibly negative), clamping the day to the target month
pub fn add_months(date: DateParts, months: i64) -> DateParts {
    let total = i64::from(date.year) * MONTHS_PER_YEAR + i64::from(date.month) - 1 + months;
    let year = saturating_year(total.div_euclid(MONTHS_PER_YEAR));
    let month = u8::try_from(total.rem_euclid(MONTHS_PER_YEAR) + 1).unwrap_or(FIRST_MONTH);
    let day = date.day.min(gregorian::days_in_month(year, month)).max(MIN_DAY);

    DateParts::new(year, month, day)
}

/// 1-based ordinal of `date` within its year
pub fn day_of_year(date: DateParts) -> u16 {
    let new_year = DateParts::new(date.year, FIRST_MONTH, MIN_DAY);
    u16::try_from(difference_in_days(new_year, date) + 1).unwrap_or(0)
}

pub fn weekday(date: DateParts) -> Weekday {
    Weekday::from_day_number(gregorian::to_day_number(date))
}

/// Persian weekday name of `date`
pub fn weekday_name(date: DateParts) -> &'static str {
    weekday(date).persian_name()
}

pub const fn days_in_gregorian_year(year: i32) -> u16 {
    gregorian::days_in_year(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u8, day: u8) -> DateParts {
        DateParts::new(year, month, day)
    }

    #[test]
    fn test_compare_date_parts() {
        assert_eq!(compare_date_parts(d(2024, 1, 1), d(2024, 1, 2)), Ordering::Less);
        assert_eq!(compare_date_parts(d(2024, 1, 1), d(2024, 1, 1)), Ordering::Equal);
        assert_eq!(compare_date_parts(d(2025, 1, 1), d(2024, 12, 31)), Ordering::Greater);
    }

    #[test]
    fn test_comparison_consistency() {
        let dates = [
            d(1999, 12, 31),
            d(2000, 1, 1),
            d(2000, 2, 29),
            d(2024, 1, 31),
            d(2024, 2, 1),
            d(2024, 3, 20),
        ];
        for &a in &dates {
            for &b in &dates {
                assert_eq!(compare_date_parts(a, b), compare_date_parts(b, a).reverse());
                assert_eq!(
                    compare_date_parts(a, b),
                    0.cmp(&difference_in_days(a, b)),
                    "{a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn test_difference_in_days() {
        assert_eq!(difference_in_days(d(2024, 1, 1), d(2024, 12, 31)), 365);
        assert_eq!(difference_in_days(d(2023, 1, 1), d(2023, 12, 31)), 364);
        assert_eq!(difference_in_days(d(2024, 3, 1), d(2024, 2, 28)), -2);
        assert_eq!(difference_in_days(d(2000, 1, 1), d(2000, 1, 1)), 0);
    }

    #[test]
    fn test_difference_in_ymd_cases() {
        struct TestCase {
            from: DateParts,
            to: DateParts,
            expected: DateDifference,
        }

        let cases = [
            TestCase {
                from: d(2024, 1, 31),
                to: d(2024, 2, 1),
                expected: DateDifference::new(0, 0, 1),
            },
            TestCase {
                from: d(2023, 1, 31),
                to: d(2023, 2, 28),
                expected: DateDifference::new(0, 1, 0),
            },
            TestCase {
                from: d(2023, 1, 31),
                to: d(2023, 3, 1),
                expected: DateDifference::new(0, 1, 1),
            },
            TestCase {
                from: d(1990, 5, 15),
                to: d(2024, 3, 20),
                expected: DateDifference::new(33, 10, 5),
            },
            TestCase {
                from: d(2020, 2, 29),
                to: d(2021, 2, 28),
                expected: DateDifference::new(1, 0, 0),
            },
            TestCase {
                from: d(2023, 12, 31),
                to: d(2024, 1, 1),
                expected: DateDifference::new(0, 0, 1),
            },
            TestCase {
                from: d(2024, 3, 20),
                to: d(2024, 3, 20),
                expected: DateDifference::default(),
            },
        ];

        for case in &cases {
            assert_eq!(
                difference_in_ymd(case.from, case.to),
                case.expected,
                "{} -> {}",
                case.from,
                case.to
            );
        }
    }

    #[test]
    fn test_difference_in_ymd_reversed_is_negated() {
        assert_eq!(
            difference_in_ymd(d(2024, 3, 20), d(1990, 5, 15)),
            DateDifference::new(-33, -10, -5)
        );
    }

    #[test]
    fn test_add_days_leap_boundaries() {
        assert_eq!(add_days(d(2024, 2, 28), 1), d(2024, 2, 29));
        assert_eq!(add_days(d(2024, 2, 28), 2), d(2024, 3, 1));
        assert_eq!(add_days(d(2023, 2, 28), 1), d(2023, 3, 1));
        assert_eq!(add_days(d(2023, 12, 31), 1), d(2024, 1, 1));
        assert_eq!(add_days(d(2024, 3, 1), -1), d(2024, 2, 29));
        assert_eq!(add_days(d(2024, 1, 1), -1), d(2023, 12, 31));
        assert_eq!(add_days(d(2024, 1, 1), 366), d(2025, 1, 1));
        assert_eq!(add_days(d(2024, 3, 20), 0), d(2024, 3, 20));
    }

    #[test]
    fn test_add_days_matches_difference() {
        let start = d(2024, 3, 20);
        for offset in [-1000, -59, -1, 1, 31, 365, 10_000] {
            let end = add_days(start, offset);
            assert_eq!(difference_in_days(start, end), offset, "offset {offset}");
        }
    }

    #[test]
    fn test_add_months_clamps() {
        assert_eq!(add_months(d(2023, 1, 31), 1), d(2023, 2, 28));
        assert_eq!(add_months(d(2024, 1, 31), 1), d(2024, 2, 29));
        assert_eq!(add_months(d(2024, 3, 31), -1), d(2024, 2, 29));
        assert_eq!(add_months(d(2024, 11, 15), 2), d(2025, 1, 15));
        assert_eq!(add_months(d(2024, 1, 15), -1), d(2023, 12, 15));
        assert_eq!(add_months(d(2024, 5, 10), 24), d(2026, 5, 10));
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(day_of_year(d(2024, 1, 1)), 1);
        assert_eq!(day_of_year(d(2024, 3, 20)), 80);
        assert_eq!(day_of_year(d(2024, 12, 31)), 366);
        assert_eq!(day_of_year(d(2023, 12, 31)), 365);
    }

    #[test]
    fn test_weekday() {
        assert_eq!(weekday(d(2000, 1, 1)), Weekday::Saturday);
        assert_eq!(weekday(d(2024, 3, 20)), Weekday::Wednesday);
        assert_eq!(weekday(d(1979, 2, 11)), Weekday::Sunday);
        assert_eq!(weekday(d(2025, 3, 21)), Weekday::Friday);
        assert_eq!(weekday(d(1999, 12, 31)), Weekday::Friday);
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(d(2024, 3, 20)), "چهارشنبه");
        assert_eq!(weekday_name(d(2000, 1, 1)), "شنبه");
        assert_eq!(weekday_name(d(2025, 3, 21)), "جمعه");
    }

    #[test]
    fn test_weekday_cycles_through_all_names() {
        let names: Vec<&str> = (0..7).map(|i| weekday_name(add_days(d(2000, 1, 1), i))).collect();
        assert_eq!(names, WEEKDAY_NAMES.to_vec());
    }

    #[test]
    fn test_days_in_gregorian_year() {
        assert_eq!(days_in_gregorian_year(2024), 366);
        assert_eq!(days_in_gregorian_year(2023), 365);
        assert_eq!(days_in_gregorian_year(2000), 366);
        assert_eq!(days_in_gregorian_year(1900), 365);
    }

    #[test]
    fn test_difference_serde() {
        let json = serde_json::to_string(&DateDifference::new(1, 2, 3)).unwrap();
        assert_eq!(json, r#"{"years":1,"months":2,"days":3}"#);
    }
}
