//! Month naming helpers.

use chrono::Month;

/// Number of months on the vertical axis.
pub const MONTHS_PER_YEAR: usize = 12;

/// Full English month name for a zero-based month index (0 = January).
pub fn month_name(index: usize) -> Option<&'static str> {
    let number = u8::try_from(index + 1).ok()?;
    Month::try_from(number).ok().map(|m| m.name())
}

/// Four-digit year label, zero padded like a `%Y` time format.
pub fn year_label(year: i32) -> String {
    if year < 0 {
        format!("-{:04}", year.unsigned_abs())
    } else {
        format!("{:04}", year)
    }
}
