//! Mean obliquity of the ecliptic.
//!
//! Source: IAU 1980 expression as published in Meeus, "Astronomical
//! Algorithms" (2nd ed), Eq. 22.2. Public domain.

/// Mean obliquity at J2000.0 in degrees (23° 26′ 21.448″).
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_111_111_11;

/// Mean obliquity of the ecliptic in degrees.
///
/// `t` = Julian centuries since J2000.0.
///
/// ε₀ = 23°26′21.448″ − 46.8150″·T − 0.00059″·T² + 0.001813″·T³
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let arcsec = -46.8150 * t - 0.00059 * t2 + 0.001813 * t3;
    OBLIQUITY_J2000_DEG + arcsec / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        assert!((mean_obliquity_deg(0.0) - OBLIQUITY_J2000_DEG).abs() < 1e-15);
    }

    #[test]
    fn decreases_forward() {
        // ~47″ per century
        let diff = mean_obliquity_deg(0.0) - mean_obliquity_deg(1.0);
        assert!((diff - 46.8 / 3600.0).abs() < 1e-3, "diff = {diff}");
    }

    #[test]
    fn meeus_example_1987() {
        // Meeus Ex. 22.a: 1987-Apr-10 0h TD, T = -0.127296372348
        let eps = mean_obliquity_deg(-0.127_296_372_348);
        let expected = 23.0 + 26.0 / 60.0 + 27.407 / 3600.0;
        assert!((eps - expected).abs() < 1e-5, "eps = {eps}");
    }
}
