//! Conversion between ASCII, Persian and Arabic-Indic digits.

const PERSIAN_ZERO: u32 = '۰' as u32;
const ARABIC_INDIC_ZERO: u32 = '٠' as u32;

fn digit_value(c: char) -> Option<u32> {
    let code = c as u32;
    match c {
        '0'..='9' => Some(code - '0' as u32),
        '۰'..='۹' => Some(code - PERSIAN_ZERO),
        '٠'..='٩' => Some(code - ARABIC_INDIC_ZERO),
        _ => None,
    }
}

/// Replaces Persian and Arabic-Indic digits with ASCII digits
pub fn normalize_digits(s: &str) -> String {
    s.chars()
        .map(|c| digit_value(c).and_then(|v| char::from_digit(v, 10)).unwrap_or(c))
        .collect()
}

/// Replaces ASCII and Arabic-Indic digits with Persian digits
pub fn to_persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| {
            digit_value(c)
                .and_then(|v| char::from_u32(PERSIAN_ZERO + v))
                .unwrap_or(c)
        })
        .collect()
}
