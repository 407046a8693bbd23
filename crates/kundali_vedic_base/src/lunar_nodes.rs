//! Lunar node (Rahu/Ketu) longitude computation.
//!
//! Mean ascending node (Rahu) from Meeus, "Astronomical Algorithms" (2nd
//! ed), Eq. 47.7, truncated to its linear term:
//! Ω = 125.04452° − 1934.136261°·T.
//!
//! Ketu is always exactly Rahu + 180°.

use kundali_frames::normalize_360;
use kundali_time::J2000_JD;

/// Mean longitude of the ascending node at J2000.0, degrees.
pub const RAHU_J2000_DEG: f64 = 125.044_52;

/// Daily motion of the mean node, degrees/day (negative: regressing).
pub const NODE_DAILY_MOTION_DEG: f64 = -0.052_953_764_846;

/// Mean Rahu tropical longitude in degrees [0, 360).
pub fn mean_rahu_deg(jd: f64) -> f64 {
    normalize_360(RAHU_J2000_DEG + NODE_DAILY_MOTION_DEG * (jd - J2000_JD))
}

/// Mean Ketu tropical longitude in degrees [0, 360).
pub fn mean_ketu_deg(jd: f64) -> f64 {
    normalize_360(mean_rahu_deg(jd) + 180.0)
}
