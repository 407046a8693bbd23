//! Error types for calendar and sidereal-time computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from Julian Day or sidereal-time computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Year outside the supported Gregorian range.
    YearOutOfRange(i32),
    /// Month outside 1..=12.
    InvalidMonth(u32),
    /// Day does not exist in the given month/year.
    InvalidDay { year: i32, month: u32, day: u32 },
    /// Hour, minute or second outside its range.
    InvalidTimeOfDay { hour: u32, minute: u32, second: u32 },
    /// A non-finite value reached a time computation.
    NonFinite(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearOutOfRange(y) => write!(
                f,
                "year {y} outside supported range {}..={}",
                crate::julian::MIN_YEAR,
                crate::julian::MAX_YEAR
            ),
            Self::InvalidMonth(m) => write!(f, "month {m} outside 1..=12"),
            Self::InvalidDay { year, month, day } => {
                write!(f, "day {day} does not exist in {year:04}-{month:02}")
            }
            Self::InvalidTimeOfDay {
                hour,
                minute,
                second,
            } => write!(f, "invalid time of day {hour:02}:{minute:02}:{second:02}"),
            Self::NonFinite(what) => write!(f, "non-finite {what}"),
        }
    }
}

impl Error for TimeError {}
