//! Calendar and sidereal-time conversions for the chart pipeline.
//!
//! This crate provides:
//! - Gregorian calendar ↔ Julian Day conversion with date validation
//! - Julian centuries since J2000.0
//! - Greenwich Mean and Local Sidereal Time
//! - Mean obliquity of the ecliptic at a Julian Day

pub mod error;
pub mod julian;
pub mod sidereal;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, MAX_YEAR, MIN_YEAR, SECONDS_PER_DAY, calendar_to_jd,
    days_in_month, is_leap_year, jd_to_calendar, julian_centuries, julian_day, validate_date,
    validate_time_of_day,
};
pub use sidereal::{gmst_deg, local_sidereal_time_deg, obliquity_deg};

/// Day of the week for a Julian Day, 0 = Sunday .. 6 = Saturday.
///
/// The civil day starts at midnight, i.e. at JD x.5.
pub fn weekday_index(jd: f64) -> u8 {
    ((jd + 1.5).floor() as i64).rem_euclid(7) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_was_saturday() {
        assert_eq!(weekday_index(J2000_JD), 6);
    }

    #[test]
    fn weekday_changes_at_midnight() {
        // 2024-Mar-20 was a Wednesday.
        let midnight = julian_day(2024, 3, 20, 0, 0, 0).unwrap();
        let late = julian_day(2024, 3, 20, 23, 59, 59).unwrap();
        assert_eq!(weekday_index(midnight), 3);
        assert_eq!(weekday_index(late), 3);
        assert_eq!(weekday_index(midnight - 1e-6), 2);
    }
}
