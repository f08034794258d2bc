//! Segment formatting for reference tokens.
//!
//! Every segment is built from fixed-width, zero-padded two-digit fields so the
//! token keeps a constant shape regardless of the instant it was generated at.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Two-digit, zero-padded rendering of a calendar or clock field.
#[inline]
fn two_digits(n: u32) -> String {
    format!("{:02}", n % 100)
}

/// Format the date part of an instant as `YYMMDD`.
///
/// Only the last two digits of the year are kept; month is 1-indexed.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use refwidget_types::formatting::format_date_segment;
/// let at = NaiveDate::from_ymd_opt(2025, 9, 17).unwrap().and_hms_opt(10, 15, 45).unwrap();
/// assert_eq!(format_date_segment(&at), "250917");
/// let at = NaiveDate::from_ymd_opt(2003, 1, 5).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(format_date_segment(&at), "030105");
/// ```
pub fn format_date_segment(at: &NaiveDateTime) -> String {
    let year = at.year().rem_euclid(100) as u32;
    format!(
        "{}{}{}",
        two_digits(year),
        two_digits(at.month()),
        two_digits(at.day())
    )
}

/// Format the time part of an instant as `HHMMSS` on a 24 hour clock.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use refwidget_types::formatting::format_time_segment;
/// let at = NaiveDate::from_ymd_opt(2025, 9, 17).unwrap().and_hms_opt(10, 15, 45).unwrap();
/// assert_eq!(format_time_segment(&at), "101545");
/// let at = NaiveDate::from_ymd_opt(2025, 9, 17).unwrap().and_hms_opt(23, 4, 9).unwrap();
/// assert_eq!(format_time_segment(&at), "230409");
/// ```
pub fn format_time_segment(at: &NaiveDateTime) -> String {
    format!(
        "{}{}{}",
        two_digits(at.hour()),
        two_digits(at.minute()),
        two_digits(at.second())
    )
}
