//! Lagna (Ascendant) and MC (Midheaven) computation.
//!
//! Standard spherical astronomy formulas for the ecliptic longitude of the
//! Lagna and MC from local sidereal time, geographic latitude and obliquity.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13;
//! Montenbruck & Pfleger.

use kundali_frames::{normalize_360, to_degrees, to_radians};
use serde::Serialize;

use crate::error::{VedicError, ensure_finite};
use crate::rashi::{Rashi, rashi_from_longitude};

/// Latitude beyond which the ascendant becomes numerically unstable.
///
/// Inside the polar circles the ecliptic can coincide with the horizon; the
/// formula still returns a finite value, but callers may want to flag it.
pub const POLAR_LATITUDE_DEG: f64 = 66.5;

/// Whether a latitude lies inside a polar circle.
pub fn is_polar(latitude_deg: f64) -> bool {
    latitude_deg.abs() > POLAR_LATITUDE_DEG
}

fn validate_latitude(latitude_deg: f64) -> Result<f64, VedicError> {
    let lat = ensure_finite(latitude_deg, "latitude")?;
    if !(-90.0..=90.0).contains(&lat) {
        return Err(VedicError::InvalidLocation("latitude must be in [-90, 90]"));
    }
    Ok(lat)
}

/// Ecliptic longitude of the Lagna (Ascendant) in degrees [0, 360).
///
/// Formula (Meeus Ch. 13):
/// `Asc = atan2(-cos(LST), sin(LST)*cos(eps) + tan(phi)*sin(eps))`
pub fn ascendant_deg(
    lst_deg: f64,
    latitude_deg: f64,
    obliquity_deg: f64,
) -> Result<f64, VedicError> {
    let lst = to_radians(ensure_finite(lst_deg, "local sidereal time")?);
    let phi = to_radians(validate_latitude(latitude_deg)?);
    let eps = to_radians(ensure_finite(obliquity_deg, "obliquity")?);

    let asc = f64::atan2(-lst.cos(), lst.sin() * eps.cos() + phi.tan() * eps.sin());
    Ok(normalize_360(to_degrees(asc)))
}

/// Ecliptic longitude of the MC (Midheaven) in degrees [0, 360).
///
/// Formula: `MC = atan2(sin(LST), cos(LST)*cos(eps))`
pub fn midheaven_deg(lst_deg: f64, obliquity_deg: f64) -> Result<f64, VedicError> {
    let lst = to_radians(ensure_finite(lst_deg, "local sidereal time")?);
    let eps = to_radians(ensure_finite(obliquity_deg, "obliquity")?);

    let mc = f64::atan2(lst.sin(), lst.cos() * eps.cos());
    Ok(normalize_360(to_degrees(mc)))
}

/// Sidereal ascendant with its sign decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ascendant {
    /// Sidereal longitude, degrees [0, 360).
    pub longitude_deg: f64,
    /// Rashi containing the ascendant.
    pub rashi: Rashi,
    /// 0-based sign index, `floor(longitude / 30)`.
    pub sign: u8,
    /// Degrees within the sign [0, 30).
    pub degree_in_sign: f64,
}

impl Ascendant {
    pub fn from_longitude(longitude_deg: f64) -> Self {
        let info = rashi_from_longitude(longitude_deg);
        Self {
            longitude_deg: normalize_360(longitude_deg),
            rashi: info.rashi,
            sign: info.rashi_index,
            degree_in_sign: info.degrees_in_rashi,
        }
    }
}
