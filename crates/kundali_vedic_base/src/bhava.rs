//! Bhava (house) cusps in the whole-sign system.
//!
//! House 1 is the whole rashi containing the ascendant; each following
//! house is the next rashi. Cusps are therefore multiples of 30 degrees.

use kundali_frames::normalize_360;
use serde::Serialize;

use crate::error::VedicError;
use crate::rashi::{RASHI_SPAN, rashi_from_longitude};

/// Number of houses.
pub const HOUSE_COUNT: usize = 12;

/// Twelve house cusp longitudes, house 1 first, each in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseCusps([f64; HOUSE_COUNT]);

impl HouseCusps {
    /// Whole-sign cusps for a sidereal ascendant.
    pub fn whole_sign(ascendant_deg: f64) -> Self {
        let first = rashi_from_longitude(ascendant_deg).rashi_index as f64 * RASHI_SPAN;
        let mut cusps = [0.0; HOUSE_COUNT];
        for (k, cusp) in cusps.iter_mut().enumerate() {
            *cusp = normalize_360(first + RASHI_SPAN * k as f64);
        }
        Self(cusps)
    }

    /// All cusps, house 1 first.
    pub fn as_array(&self) -> &[f64; HOUSE_COUNT] {
        &self.0
    }

    /// Cusp of a 1-based house number.
    pub fn cusp(&self, house: u8) -> Result<f64, VedicError> {
        match house {
            1..=12 => Ok(self.0[house as usize - 1]),
            _ => Err(VedicError::HouseOutOfRange(house)),
        }
    }

    /// House (1..=12) containing a longitude.
    pub fn house_of(&self, longitude_deg: f64) -> u8 {
        house_of(longitude_deg, self)
    }
}

/// Whole-sign cusps for a sidereal ascendant.
pub fn whole_sign_houses(ascendant_deg: f64) -> HouseCusps {
    HouseCusps::whole_sign(ascendant_deg)
}

/// House (1..=12) whose half-open interval `[cusp_i, cusp_i+1)` contains
/// the longitude.
///
/// Cusps are whole rashis, so the house is the rashi offset from house 1.
/// Both rashis come from [`rashi_from_longitude`], which keeps a planet's
/// house in step with its sign even a few ULP below a cusp.
pub fn house_of(longitude_deg: f64, cusps: &HouseCusps) -> u8 {
    let sign = rashi_from_longitude(longitude_deg).rashi_index as i32;
    let first = rashi_from_longitude(cusps.0[0]).rashi_index as i32;
    (sign - first).rem_euclid(HOUSE_COUNT as i32) as u8 + 1
}
