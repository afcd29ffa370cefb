use alloc::format;
use alloc::string::String;
use alloc::string::ToString;

use chrono::{Datelike, NaiveDate};
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::normalize_hours_24;

/// Rendered in place of a time that could not be computed.
pub const PLACEHOLDER: &str = "-----";

/// Compute the astronomical Julian Day at 0h UT of a calendar date.
///
/// Uses the proleptic Gregorian calendar throughout. No longitude or time zone
/// correction is applied; the solver adds the event's day fraction on top.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use prayer_calculator::julian_day;
///
/// let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// assert_eq!(julian_day(date), 2451544.5);
/// ```
pub fn julian_day(date: NaiveDate) -> f64 {
    let mut year = date.year();
    let mut month = date.month();
    let day = date.day();

    // If month is January or February, treat them as month 13/14 of the
    // previous year (standard step in the Julian Day algorithm).
    if month <= 2 {
        month += 12;
        year -= 1;
    }

    let century = year / 100;
    let gregorian = 2 - century + century / 4;

    (365.25 * (f64::from(year) + 4716.0)).floor() + (30.6001 * f64::from(month + 1)).floor() + f64::from(day)
        + f64::from(gregorian)
        - 1524.5
}

/// Formats a fractional hour of the day as zero-padded `HH:mm`.
///
/// Half a minute is added before truncating, so `4.9999` renders as `05:00`
/// and never as `04:60`. Values outside [0, 24) wrap around midnight. `NaN`
/// renders as [`PLACEHOLDER`].
///
/// ```
/// use prayer_calculator::format_hours;
///
/// assert_eq!(format_hours(13.25), "13:15");
/// assert_eq!(format_hours(-0.5), "23:30");
/// assert_eq!(format_hours(f64::NAN), "-----");
/// ```
pub fn format_hours(hours: f64) -> String {
    if hours.is_nan() {
        return PLACEHOLDER.to_string();
    }
    let hours = normalize_hours_24(hours + 0.5 / 60.0);
    let whole = hours.trunc();
    let minutes = ((hours - whole) * 60.0).trunc();
    format!("{:02}:{:02}", whole as u32, minutes as u32)
}

/// Normalizes an engine time string to `HH:mm:ss`.
///
/// `HH:mm` gains a `:00` suffix, `HH:mm:ss` and the placeholder pass through
/// unchanged. Anything else is returned trimmed but otherwise untouched.
pub fn normalize_to_hhmmss(time: &str) -> String {
    let time = time.trim();
    if time == PLACEHOLDER || is_clock(time, 3) {
        return time.to_string();
    }
    if is_clock(time, 2) {
        return format!("{time}:00");
    }
    time.to_string()
}

/// True for `fields` groups of exactly two ASCII digits separated by `:`.
fn is_clock(time: &str, fields: usize) -> bool {
    let mut count = 0;
    for part in time.split(':') {
        if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        count += 1;
    }
    count == fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn julian_day_for_known_dates() {
        let jd = |y, m, d| julian_day(NaiveDate::from_ymd_opt(y, m, d).unwrap());
        assert_eq!(jd(2000, 1, 1), 2451544.5);
        assert_eq!(jd(2025, 3, 21), 2460755.5);
        assert_eq!(jd(2025, 1, 1), 2460676.5);
        assert_eq!(jd(2024, 2, 29) + 1.0, jd(2024, 3, 1));
    }

    #[test]
    fn rounding_bias_carries_into_the_hour() {
        assert_eq!(format_hours(4.999_999_9), "05:00");
        assert_eq!(format_hours(4.9916), "04:59");
        assert_eq!(format_hours(23.995), "00:00");
        assert_eq!(format_hours(12.0), "12:00");
    }

    #[test]
    fn out_of_range_hours_wrap() {
        assert_eq!(format_hours(-0.001), "00:00");
        assert_eq!(format_hours(25.5), "01:30");
        assert_eq!(format_hours(-1.0), "23:00");
    }

    #[test]
    fn undefined_hours_use_placeholder() {
        assert_eq!(format_hours(f64::NAN), PLACEHOLDER);
    }

    #[test]
    fn normalizes_clock_strings() {
        assert_eq!(normalize_to_hhmmss("05:11"), "05:11:00");
        assert_eq!(normalize_to_hhmmss(" 05:11 "), "05:11:00");
        assert_eq!(normalize_to_hhmmss("05:11:42"), "05:11:42");
        assert_eq!(normalize_to_hhmmss(PLACEHOLDER), PLACEHOLDER);
        assert_eq!(normalize_to_hhmmss("5:11"), "5:11");
        assert_eq!(normalize_to_hhmmss("garbage"), "garbage");
    }
}
