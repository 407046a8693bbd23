//! Degree arithmetic shared by every stage of the chart pipeline.
//!
//! Every angle handed between components is normalized with
//! [`normalize_360`] first, so callers can rely on the [0, 360) range.

/// Convert degrees to radians.
#[inline]
pub fn to_radians(deg: f64) -> f64 {
    deg.to_radians()
}

/// Convert radians to degrees.
#[inline]
pub fn to_degrees(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Normalize an angle to [0, 360) degrees.
///
/// Negative inputs wrap upward. Values that round to exactly 360.0 after
/// wrapping (e.g. `-1e-17`) collapse to 0.0 so the upper bound stays open.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to (-180, 180] degrees.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Shortest angular distance between two longitudes, in [0, 180].
pub fn angular_separation(a_deg: f64, b_deg: f64) -> f64 {
    normalize_to_pm180(a_deg - b_deg).abs()
}
