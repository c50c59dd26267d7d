/// Minimum supported year (inclusive), in every calendar
pub const MIN_YEAR: i32 = 1;
/// Maximum supported year (inclusive), in every calendar
pub const MAX_YEAR: i32 = 9999;

/// Maximum valid month (the twelfth month in every supported calendar)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January / Farvardin / Muharram
pub const FIRST_MONTH: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;
/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;
/// Day number of 0000-03-01, the start of the shifted civil year
pub(crate) const MARCH_ZERO_DAY_NUMBER: i64 = -305;

/// Jalali years are leap when `year mod 33` is one of these remainders
pub(crate) const JALALI_LEAP_REMAINDERS: [i64; 8] = [1, 5, 9, 13, 17, 22, 26, 30];
/// Length of the Jalali leap cycle in years
pub(crate) const JALALI_CYCLE_YEARS: i64 = 33;
/// Days in one 33-year Jalali cycle (33 * 365 + 8)
pub(crate) const DAYS_PER_JALALI_CYCLE: i64 = 12_053;
/// Day number of Farvardin 1, year 1
pub(crate) const JALALI_EPOCH: i64 = 226_895;
/// Days in each of the first six Jalali months
pub(crate) const JALALI_LONG_MONTH_DAYS: u8 = 31;
/// Days in Jalali months seven through eleven
pub(crate) const JALALI_SHORT_MONTH_DAYS: u8 = 30;
/// Days in Esfand outside leap years
pub(crate) const JALALI_ESFAND_DAYS: u8 = 29;

/// Length of the tabular Islamic leap cycle in years
pub(crate) const ISLAMIC_CYCLE_YEARS: i64 = 30;
/// Days in one 30-year Islamic cycle (30 * 354 + 11)
pub(crate) const DAYS_PER_ISLAMIC_CYCLE: i64 = 10_631;
/// Day number of Muharram 1, year 1 (civil epoch)
pub(crate) const ISLAMIC_EPOCH: i64 = 227_015;
/// Days in odd-numbered Islamic months
pub(crate) const ISLAMIC_LONG_MONTH_DAYS: u8 = 30;
/// Days in even-numbered Islamic months
pub(crate) const ISLAMIC_SHORT_MONTH_DAYS: u8 = 29;

/// Day number of a known Saturday (2000-01-01)
pub(crate) const REFERENCE_SATURDAY: i64 = 730_120;
/// Days in a week
pub(crate) const DAYS_PER_WEEK: i64 = 7;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Date component separator used in Persian-style dates
pub const PERSIAN_DATE_SEPARATOR: char = '/';

/// Persian weekday names, Saturday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه\u{200c}شنبه",
    "چهارشنبه",
    "پنجشنبه",
    "جمعه",
];

/// Persian names of the Jalali months
pub const JALALI_MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Persian names of the Islamic months
pub const ISLAMIC_MONTH_NAMES: [&str; 12] = [
    "محرم",
    "صفر",
    "ربیع\u{200c}الاول",
    "ربیع\u{200c}الثانی",
    "جمادی\u{200c}الاول",
    "جمادی\u{200c}الثانی",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذی\u{200c}القعده",
    "ذی\u{200c}الحجه",
];

/// Persian names of the Gregorian months
pub const GREGORIAN_MONTH_NAMES: [&str; 12] = [
    "ژانویه",
    "فوریه",
    "مارس",
    "آوریل",
    "مه",
    "ژوئن",
    "ژوئیه",
    "اوت",
    "سپتامبر",
    "اکتبر",
    "نوامبر",
    "دسامبر",
];
