//! Angle arithmetic and coordinate frame helpers for chart computations.
//!
//! Provides:
//! - Degree/radian conversion and normalization to [0, 360)
//! - Mean obliquity of the ecliptic
//! - Ecliptic ↔ equatorial coordinate conversions

pub mod angle;
pub mod equatorial;
pub mod obliquity;

pub use angle::{angular_separation, normalize_360, normalize_to_pm180, to_degrees, to_radians};
pub use equatorial::{
    EclipticCoords, EquatorialCoords, ecliptic_to_equatorial, equatorial_to_ecliptic,
};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg};
