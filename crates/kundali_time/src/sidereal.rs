//! Greenwich Mean Sidereal Time and Local Sidereal Time.
//!
//! GMST relates clock time to the orientation of the celestial sphere; LST
//! adds the observer's east longitude and is the right ascension currently
//! on the local meridian (RAMC).
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4 (IAU 1982
//! expression in Julian centuries). Public domain.

use kundali_frames::{mean_obliquity_deg, normalize_360};

use crate::julian::{J2000_JD, julian_centuries};

/// Greenwich Mean Sidereal Time in degrees, range [0, 360).
///
/// θ₀ = 280.46061837 + 360.98564736629·(JD − 2451545) + 0.000387933·T²
///      − T³/38710000
///
/// where T = Julian centuries since J2000.0.
pub fn gmst_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let t2 = t * t;
    let t3 = t2 * t;
    let theta = 280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JD) + 0.000_387_933 * t2
        - t3 / 38_710_000.0;
    normalize_360(theta)
}

/// Local Sidereal Time from GMST and observer east longitude, in degrees.
///
/// LST = GMST + longitude_east. Returns [0, 360).
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    normalize_360(gmst_deg + longitude_east_deg)
}

/// Mean obliquity of the ecliptic at a Julian Day, in degrees.
pub fn obliquity_deg(jd: f64) -> f64 {
    mean_obliquity_deg(julian_centuries(jd))
}
