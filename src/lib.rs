pub mod arithmetic;
mod calendar;
mod consts;
pub mod convert;
mod digits;
pub mod gregorian;
pub mod islamic;
pub mod jalali;
mod prelude;
mod types;

pub use arithmetic::{
    DateDifference, Weekday, add_days, add_months, compare_date_parts, day_of_year,
    days_in_gregorian_year, difference_in_days, difference_in_ymd, weekday, weekday_name,
};
pub use calendar::CalendarKind;
pub use consts::*;
pub use convert::{
    ConversionError, ConversionRequest, ConversionResult, ErrorCode, convert_date,
    gregorian_to_islamic, gregorian_to_jalali, islamic_to_gregorian, islamic_to_jalali,
    jalali_to_gregorian, jalali_to_islamic, to_gregorian, validate,
};
pub use digits::{normalize_digits, to_persian_digits};
pub use types::{DateParts, DayNumber};

use crate::prelude::*;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid number: {_0}")]
    InvalidNumber(String),
    #[display(fmt = "Unknown calendar: {_0}")]
    UnknownCalendar(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl DateParts {
    /// Renders as `YYYY/MM/DD` with Persian digits, e.g. `۱۴۰۳/۰۱/۰۱`
    pub fn to_persian_string(&self) -> String {
        to_persian_digits(&format!(
            "{:04}{PERSIAN_DATE_SEPARATOR}{:02}{PERSIAN_DATE_SEPARATOR}{:02}",
            self.year, self.month, self.day
        ))
    }

    /// Helper to parse a numeric component with better error messages
    fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
        s.parse::<T>()
            .map_err(|_| ParseError::InvalidNumber(s.to_owned()))
    }
}

/// Parses `YYYY-MM-DD` or `YYYY/MM/DD`. Persian and Arabic-Indic digits are
/// accepted. The result is not validated against any calendar.
impl FromStr for DateParts {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_digits(s);
        let trimmed = normalized.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // One separator kind per string
        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(PERSIAN_DATE_SEPARATOR);
        let separator = match (has_hyphen, has_slash) {
            (true, false) => DATE_SEPARATOR,
            (false, true) => PERSIAN_DATE_SEPARATOR,
            (true, true) => {
                return Err(ParseError::InvalidFormat(format!(
                    "Mixed delimiters ({DATE_SEPARATOR} and {PERSIAN_DATE_SEPARATOR})"
                )));
            }
            (false, false) => return Err(ParseError::InvalidFormat(trimmed.to_owned())),
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        match parts.as_slice() {
            [year, month, day] => Ok(Self::new(
                Self::parse_component(year)?,
                Self::parse_component(month)?,
                Self::parse_component(day)?,
            )),
            _ => Err(ParseError::InvalidFormat(format!(
                "Expected 2 {separator} separators, found {}",
                parts.len() - 1
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        let date = "2024-03-20".parse::<DateParts>().unwrap();
        assert_eq!(date, DateParts::new(2024, 3, 20));
    }

    #[test]
    fn test_parse_persian_style_date() {
        let date = "1403/01/01".parse::<DateParts>().unwrap();
        assert_eq!(date, DateParts::new(1403, 1, 1));
    }

    #[test]
    fn test_parse_persian_digits() {
        let date = "۱۴۰۳/۱۲/۳۰".parse::<DateParts>().unwrap();
        assert_eq!(date, DateParts::new(1403, 12, 30));

        let date = "١٤٤٥-٠٩-١٠".parse::<DateParts>().unwrap();
        assert_eq!(date, DateParts::new(1445, 9, 10));
    }

    #[test]
    fn test_parse_with_whitespace() {
        let date = " 1403 / 1 / 1 ".parse::<DateParts>().unwrap();
        assert_eq!(date, DateParts::new(1403, 1, 1));
    }

    #[test]
    fn test_parse_does_not_validate_calendar() {
        // Syntactically fine, but not a date in any calendar
        let date = "1400-12-31".parse::<DateParts>().unwrap();
        assert!(!CalendarKind::Jalali.is_valid_date(date));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!("".parse::<DateParts>(), Err(ParseError::EmptyInput));
        assert_eq!("   ".parse::<DateParts>(), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_parse_mixed_delimiters() {
        let result = "1403-01/01".parse::<DateParts>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_wrong_component_count() {
        assert!(matches!(
            "1403-01".parse::<DateParts>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1403-01-01-01".parse::<DateParts>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1403".parse::<DateParts>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_bad_tokens() {
        assert_eq!(
            "1403-xx-01".parse::<DateParts>(),
            Err(ParseError::InvalidNumber("xx".to_owned()))
        );
        assert_eq!(
            "1403-01-300".parse::<DateParts>(),
            Err(ParseError::InvalidNumber("300".to_owned()))
        );
        assert_eq!(
            "1403-1.5-01".parse::<DateParts>(),
            Err(ParseError::InvalidNumber("1.5".to_owned()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let date = DateParts::new(1403, 1, 1);
        assert_eq!(date.to_string().parse::<DateParts>().unwrap(), date);
    }

    #[test]
    fn test_to_persian_string() {
        assert_eq!(DateParts::new(1403, 1, 1).to_persian_string(), "۱۴۰۳/۰۱/۰۱");
    }

    #[test]
    fn test_parse_error_display() {
        assert_eq!(ParseError::EmptyInput.to_string(), "Empty date string");
        assert_eq!(
            ParseError::InvalidNumber("xx".to_owned()).to_string(),
            "Invalid number: xx"
        );
    }

    #[test]
    fn test_parse_then_convert() {
        let date: DateParts = "۱۴۰۳/۰۱/۰۱".parse().unwrap();
        let gregorian = convert_date(CalendarKind::Jalali, CalendarKind::Gregorian, date).unwrap();
        assert_eq!(gregorian.to_string(), "2024-03-20");
        assert_eq!(weekday_name(gregorian), "چهارشنبه");
    }

    #[test]
    fn test_age_from_jalali_birthday() {
        let birth = to_gregorian(CalendarKind::Jalali, DateParts::new(1369, 2, 25)).unwrap();
        let today = to_gregorian(CalendarKind::Jalali, DateParts::new(1403, 1, 1)).unwrap();
        let age = difference_in_ymd(birth, today);
        assert_eq!(age.years, 33);
        assert!(age.months >= 0 && age.days >= 0);
    }
}
