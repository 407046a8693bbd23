//! Tropical to sidereal longitude conversion.
//!
//! `sidereal = normalize(tropical − ayanamsha)`. The sign is always
//! re-derived from the sidereal value, never carried over from the
//! tropical one.

use std::collections::BTreeMap;

use kundali_frames::normalize_360;

use crate::error::{VedicError, ensure_finite};
use crate::graha::Graha;
use crate::rashi::{RashiInfo, rashi_from_longitude};

/// Sidereal longitude in degrees [0, 360).
pub fn to_sidereal(tropical_deg: f64, ayanamsha_deg: f64) -> Result<f64, VedicError> {
    let tropical = ensure_finite(tropical_deg, "tropical longitude")?;
    let aya = ensure_finite(ayanamsha_deg, "ayanamsha")?;
    Ok(normalize_360(tropical - aya))
}

/// Sidereal rashi position for a tropical longitude.
pub fn sidereal_rashi(tropical_deg: f64, ayanamsha_deg: f64) -> Result<RashiInfo, VedicError> {
    to_sidereal(tropical_deg, ayanamsha_deg).map(rashi_from_longitude)
}

/// Convert a whole map of tropical longitudes with one ayanamsha.
pub fn tropical_to_sidereal(
    tropical: &BTreeMap<Graha, f64>,
    ayanamsha_deg: f64,
) -> Result<BTreeMap<Graha, f64>, VedicError> {
    tropical
        .iter()
        .map(|(&graha, &lon)| Ok((graha, to_sidereal(lon, ayanamsha_deg)?)))
        .collect()
}
