//! Classical angular aspects with a fixed orb.
//!
//! Unlike graha drishti (which is directional and planet-specific), these
//! aspects depend only on the shortest angular distance between two points.

use kundali_frames::angular_separation;
use serde::Serialize;

/// Default orb in degrees.
pub const DEFAULT_ORB_DEG: f64 = 8.0;

/// The five classical aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// All aspects, in ascending angle order.
pub const ALL_ASPECTS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
];

impl AspectKind {
    /// Exact angle of the aspect in degrees.
    pub const fn angle_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Sextile => "sextile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Opposition => "opposition",
        }
    }
}

/// A matched aspect between two longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aspect {
    pub kind: AspectKind,
    /// Shortest angular distance between the two points [0, 180].
    pub separation_deg: f64,
    /// |separation − exact angle|, always within the orb.
    pub orb_deg: f64,
}

/// Aspect formed by two longitudes, if any lies within `orb_deg`.
///
/// With orbs of 15° or more adjacent aspects overlap; the closest one wins.
pub fn aspect_between(a_deg: f64, b_deg: f64, orb_deg: f64) -> Option<Aspect> {
    let separation_deg = angular_separation(a_deg, b_deg);
    ALL_ASPECTS
        .iter()
        .map(|&kind| Aspect {
            kind,
            separation_deg,
            orb_deg: (separation_deg - kind.angle_deg()).abs(),
        })
        .filter(|a| a.orb_deg <= orb_deg)
        .min_by(|x, y| x.orb_deg.total_cmp(&y.orb_deg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_aspects() {
        for kind in ALL_ASPECTS {
            let a = aspect_between(10.0, 10.0 + kind.angle_deg(), DEFAULT_ORB_DEG).unwrap();
            assert_eq!(a.kind, kind);
            assert!(a.orb_deg < 1e-9);
        }
    }

    #[test]
    fn across_zero() {
        let a = aspect_between(355.0, 3.0, DEFAULT_ORB_DEG).unwrap();
        assert_eq!(a.kind, AspectKind::Conjunction);
        assert!((a.orb_deg - 8.0).abs() < 1e-9);
    }

    #[test]
    fn outside_orb() {
        assert_eq!(aspect_between(0.0, 40.0, DEFAULT_ORB_DEG), None);
        assert_eq!(aspect_between(0.0, 150.0, DEFAULT_ORB_DEG), None);
    }

    #[test]
    fn symmetric() {
        let ab = aspect_between(12.0, 127.0, DEFAULT_ORB_DEG);
        let ba = aspect_between(127.0, 12.0, DEFAULT_ORB_DEG);
        assert_eq!(ab, ba);
        assert_eq!(ab.map(|a| a.kind), Some(AspectKind::Trine));
    }

    #[test]
    fn closest_wins_with_wide_orb() {
        let a = aspect_between(0.0, 80.0, 20.0).unwrap();
        assert_eq!(a.kind, AspectKind::Square);
    }
}
