//! Ecliptic ↔ equatorial coordinate conversion.
//!
//! Formulas: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 13.1–13.4.
//! All angles in degrees; the obliquity is supplied by the caller so that
//! either a fixed J2000 value or the epoch's mean obliquity can be used.

use crate::angle::normalize_360;

/// Ecliptic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticCoords {
    /// Ecliptic longitude in degrees, range [0, 360).
    pub lon_deg: f64,
    /// Ecliptic latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
}

/// Equatorial coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension in degrees, range [0, 360).
    pub ra_deg: f64,
    /// Declination in degrees, range [-90, 90].
    pub dec_deg: f64,
}

/// Convert ecliptic (λ, β) to equatorial (α, δ).
///
/// tan α = (sin λ cos ε − tan β sin ε) / cos λ
/// sin δ = sin β cos ε + cos β sin ε sin λ
pub fn ecliptic_to_equatorial(ecl: &EclipticCoords, obliquity_deg: f64) -> EquatorialCoords {
    let lon = ecl.lon_deg.to_radians();
    let lat = ecl.lat_deg.to_radians();
    let (sin_e, cos_e) = obliquity_deg.to_radians().sin_cos();

    let ra = f64::atan2(lon.sin() * cos_e - lat.tan() * sin_e, lon.cos());
    let sin_dec = lat.sin() * cos_e + lat.cos() * sin_e * lon.sin();

    EquatorialCoords {
        ra_deg: normalize_360(ra.to_degrees()),
        dec_deg: sin_dec.clamp(-1.0, 1.0).asin().to_degrees(),
    }
}

/// Convert equatorial (α, δ) to ecliptic (λ, β).
///
/// tan λ = (sin α cos ε + tan δ sin ε) / cos α
/// sin β = sin δ cos ε − cos δ sin ε sin α
pub fn equatorial_to_ecliptic(eq: &EquatorialCoords, obliquity_deg: f64) -> EclipticCoords {
    let ra = eq.ra_deg.to_radians();
    let dec = eq.dec_deg.to_radians();
    let (sin_e, cos_e) = obliquity_deg.to_radians().sin_cos();

    let lon = f64::atan2(ra.sin() * cos_e + dec.tan() * sin_e, ra.cos());
    let sin_lat = dec.sin() * cos_e - dec.cos() * sin_e * ra.sin();

    EclipticCoords {
        lon_deg: normalize_360(lon.to_degrees()),
        lat_deg: sin_lat.clamp(-1.0, 1.0).asin().to_degrees(),
    }
}
