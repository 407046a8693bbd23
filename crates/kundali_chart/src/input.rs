//! Birth data accepted by the chart pipeline.

use kundali_time::{TimeError, validate_date, validate_time_of_day};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted distance of a civil time zone from UTC, in hours.
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

/// Civil birth date, time and place.
///
/// Without `utc_offset_hours` the date and time are taken as UT. With it,
/// they are local civil time and `UT = local − offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Geographic latitude, degrees north positive.
    pub latitude_deg: f64,
    /// Geographic longitude, degrees east positive.
    pub longitude_deg: f64,
    /// Offset of the civil time from UTC in hours (east positive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset_hours: Option<f64>,
}

/// Reasons a [`BirthInput`] is rejected before any computation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum InputError {
    #[error("invalid birth date or time")]
    DateTime(#[from] TimeError),
    #[error("latitude {0} outside [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} outside [-180, 180]")]
    Longitude(f64),
    #[error("utc offset {0}h outside [-14, 14]")]
    UtcOffset(f64),
}

impl BirthInput {
    /// Birth data in UT.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            latitude_deg,
            longitude_deg,
            utc_offset_hours: None,
        }
    }

    /// Same birth data, read as local civil time at the given UTC offset.
    pub fn with_utc_offset(self, hours: f64) -> Self {
        Self {
            utc_offset_hours: Some(hours),
            ..self
        }
    }

    /// UTC offset in days, zero when the input is already UT.
    pub fn utc_offset_days(&self) -> f64 {
        self.utc_offset_hours.unwrap_or(0.0) / 24.0
    }

    /// Check every field against its domain.
    pub fn validate(&self) -> Result<(), InputError> {
        validate_date(self.year, self.month, self.day)?;
        validate_time_of_day(self.hour, self.minute, self.second)?;
        // NaN fails the range checks below.
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(InputError::Latitude(self.latitude_deg));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(InputError::Longitude(self.longitude_deg));
        }
        if let Some(offset) = self.utc_offset_hours {
            if !(-MAX_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS).contains(&offset) {
                return Err(InputError::UtcOffset(offset));
            }
        }
        Ok(())
    }
}
