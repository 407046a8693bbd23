//! Gregorian calendar ↔ Julian Day conversion.
//!
//! Algorithm: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7.
//! Only the Gregorian calendar is supported, so dates are restricted to
//! [`MIN_YEAR`]..=[`MAX_YEAR`].

use crate::error::TimeError;

/// Julian Day of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// First supported year (Gregorian calendar adoption).
pub const MIN_YEAR: i32 = 1582;

/// Last supported year.
pub const MAX_YEAR: i32 = 2100;

/// Whether `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`. Returns 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Check that a calendar date lies in the supported range and exists.
pub fn validate_date(year: i32, month: u32, day: u32) -> Result<(), TimeError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(TimeError::YearOutOfRange(year));
    }
    if !(1..=12).contains(&month) {
        return Err(TimeError::InvalidMonth(month));
    }
    if day == 0 || day > days_in_month(year, month) {
        return Err(TimeError::InvalidDay { year, month, day });
    }
    Ok(())
}

/// Check a civil time of day (leap seconds are not representable).
pub fn validate_time_of_day(hour: u32, minute: u32, second: u32) -> Result<(), TimeError> {
    if hour > 23 || minute > 59 || second > 59 {
        return Err(TimeError::InvalidTimeOfDay {
            hour,
            minute,
            second,
        });
    }
    Ok(())
}

/// Unchecked Gregorian calendar date to Julian Day.
///
/// `day_frac` may carry the time of day as a fraction (e.g. 1.5 = noon on
/// the 1st).
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Julian Day for a validated civil date and time of day.
///
/// Fails when the date is outside [`MIN_YEAR`]..=[`MAX_YEAR`], the month or
/// day does not exist, or the time of day is out of range.
pub fn julian_day(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<f64, TimeError> {
    validate_date(year, month, day)?;
    validate_time_of_day(hour, minute, second)?;
    let day_frac = day as f64
        + hour as f64 / 24.0
        + minute as f64 / 1440.0
        + second as f64 / SECONDS_PER_DAY;
    Ok(calendar_to_jd(year, month, day_frac))
}

/// Julian Day to Gregorian calendar `(year, month, day_frac)`.
///
/// Inverse of [`calendar_to_jd`] (Meeus Ch. 7).
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd5 = jd + 0.5;
    let z = jd5.floor();
    let f = jd5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = (if e < 14.0 { e - 1.0 } else { e - 13.0 }) as u32;
    let year = (if month > 2 { c - 4716.0 } else { c - 4715.0 }) as i32;
    (year, month, day_frac)
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
