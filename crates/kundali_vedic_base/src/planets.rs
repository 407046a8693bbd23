//! Simplified tropical positions of the nine grahas.
//!
//! Every body moves uniformly along the ecliptic: a mean longitude at
//! J2000.0 plus a fixed daily motion times the elapsed days. Mean elements
//! are the linear terms of the mean-longitude series in Meeus,
//! "Astronomical Algorithms" (2nd ed), Chapters 25, 31 and 47.
//!
//! Known limitation: uniform motion cannot produce stations, so only the
//! lunar nodes (whose mean motion is negative) are ever flagged retrograde.
//! The flag is `false` for every other body regardless of its real state.
//! Latitude is always 0.

use kundali_frames::normalize_360;
use kundali_time::J2000_JD;
use serde::Serialize;

use crate::error::{VedicError, ensure_finite};
use crate::graha::{ALL_GRAHAS, Graha};
use crate::lunar_nodes::{NODE_DAILY_MOTION_DEG, RAHU_J2000_DEG, mean_ketu_deg, mean_rahu_deg};

/// Mean-motion elements of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanMotion {
    /// Mean tropical longitude at J2000.0, degrees.
    pub epoch_longitude_deg: f64,
    /// Mean daily motion, degrees/day.
    pub daily_motion_deg: f64,
}

/// Mean-motion elements for a graha.
///
/// Ketu shares Rahu's motion; its epoch longitude is Rahu's + 180°.
pub const fn mean_motion(graha: Graha) -> MeanMotion {
    let (epoch_longitude_deg, daily_motion_deg) = match graha {
        Graha::Surya => (280.466_46, 0.985_647_360_164),
        Graha::Chandra => (218.316_447_7, 13.176_396_474_585),
        Graha::Mangal => (355.433, 0.524_032_835_901),
        Graha::Buddh => (252.250_906, 4.092_377_063_630),
        Graha::Guru => (34.351_484, 0.083_091_188_901),
        Graha::Shukra => (181.979_801, 1.602_168_734_571),
        Graha::Shani => (50.077_471, 0.033_459_652_137),
        Graha::Rahu => (RAHU_J2000_DEG, NODE_DAILY_MOTION_DEG),
        Graha::Ketu => (RAHU_J2000_DEG + 180.0, NODE_DAILY_MOTION_DEG),
    };
    MeanMotion {
        epoch_longitude_deg,
        daily_motion_deg,
    }
}

/// Tropical ecliptic position of a graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TropicalPosition {
    pub graha: Graha,
    /// Tropical ecliptic longitude, degrees [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude, degrees (always 0 in this model).
    pub latitude_deg: f64,
    /// Longitude speed, degrees/day.
    pub speed_deg_per_day: f64,
    /// Whether the graha is moving backwards along the ecliptic.
    pub retrograde: bool,
}

/// Tropical position of one graha at a Julian Day.
pub fn tropical_position(graha: Graha, jd: f64) -> Result<TropicalPosition, VedicError> {
    let jd = ensure_finite(jd, "julian day")?;
    let motion = mean_motion(graha);

    // Nodes go through lunar_nodes so Ketu stays exactly opposite Rahu.
    let longitude_deg = match graha {
        Graha::Rahu => mean_rahu_deg(jd),
        Graha::Ketu => mean_ketu_deg(jd),
        _ => normalize_360(motion.epoch_longitude_deg + motion.daily_motion_deg * (jd - J2000_JD)),
    };

    Ok(TropicalPosition {
        graha,
        longitude_deg,
        latitude_deg: 0.0,
        speed_deg_per_day: motion.daily_motion_deg,
        retrograde: motion.daily_motion_deg < 0.0,
    })
}

/// Tropical positions of all nine grahas, in [`ALL_GRAHAS`] order.
pub fn tropical_positions(jd: f64) -> Result<[TropicalPosition; 9], VedicError> {
    let mut out = [tropical_position(Graha::Surya, jd)?; 9];
    for (slot, &graha) in out.iter_mut().zip(ALL_GRAHAS.iter()).skip(1) {
        *slot = tropical_position(graha, jd)?;
    }
    Ok(out)
}
