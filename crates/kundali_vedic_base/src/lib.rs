//! Sidereal (Vedic) chart primitives built on the time and frame crates.
//!
//! This crate provides:
//! - Ayanamsha for six sidereal reference systems
//! - Mean-motion tropical positions of the nine grahas
//! - Tropical to sidereal conversion, rashi and DMS decomposition
//! - Lagna, MC and whole-sign bhava cusps
//! - The 27-nakshatra reference table with pada lookup
//! - Tithi, karana, yoga and vaar
//! - Classical aspects with a fixed orb
//!
//! Every function is pure; all reference tables are immutable statics.

pub mod aspect;
pub mod ayanamsha;
pub mod bhava;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod lunar_nodes;
pub mod nakshatra;
pub mod panchang;
pub mod planets;
pub mod rashi;
pub mod sidereal;

pub use aspect::{ALL_ASPECTS, Aspect, AspectKind, DEFAULT_ORB_DEG, aspect_between};
pub use ayanamsha::{ALL_SYSTEMS, AyanamshaSystem, ayanamsha_deg, lahiri_deg};
pub use bhava::{HOUSE_COUNT, HouseCusps, house_of, whole_sign_houses};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, rashi_lord};
pub use lagna::{Ascendant, POLAR_LATITUDE_DEG, ascendant_deg, is_polar, midheaven_deg};
pub use lunar_nodes::{mean_ketu_deg, mean_rahu_deg};
pub use nakshatra::{
    ALL_NAKSHATRAS, Gana, NAKSHATRA_SPAN_27, NAKSHATRA_TABLE, Nakshatra, NakshatraData,
    NakshatraInfo, NakshatraNature, PADA_SPAN, check_nakshatra_table, nakshatra_by_name,
    nakshatra_by_number, nakshatra_from_longitude,
};
pub use panchang::{
    KARANA_SEGMENT_DEG, Karana, KaranaInfo, Paksha, TITHI_SEGMENT_DEG, Tithi, TithiInfo, Vaar,
    YOGA_SEGMENT_DEG, Yoga, YogaInfo, karana_from_elongation, tithi_from_elongation,
    tithi_from_longitudes, yoga_from_sum,
};
pub use planets::{MeanMotion, TropicalPosition, mean_motion, tropical_position, tropical_positions};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude,
};
pub use sidereal::{sidereal_rashi, to_sidereal, tropical_to_sidereal};
