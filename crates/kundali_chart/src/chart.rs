//! The assembled birth chart and its lookup accessors.

use std::collections::BTreeMap;

use kundali_vedic_base::{
    Ascendant, Aspect, Dms, Graha, HouseCusps, KaranaInfo, NakshatraInfo, Rashi, TithiInfo, Vaar,
    VedicError, YogaInfo, aspect_between,
};
use serde::Serialize;

use crate::config::ChartConfig;
use crate::input::BirthInput;

/// Sidereal position of one graha in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub graha: Graha,
    /// Sidereal ecliptic longitude, degrees [0, 360).
    pub longitude_deg: f64,
    /// Tropical ecliptic longitude, degrees [0, 360).
    pub tropical_longitude_deg: f64,
    /// Ecliptic latitude, degrees.
    pub latitude_deg: f64,
    /// Longitude speed, degrees/day.
    pub speed_deg_per_day: f64,
    pub rashi: Rashi,
    /// 0-based sign index, `floor(longitude / 30)`.
    pub sign: u8,
    /// Degrees within the sign [0, 30).
    pub degree_in_sign: f64,
    pub dms: Dms,
    /// Whole-sign house, 1..=12.
    pub house: u8,
    /// Only the lunar nodes are ever flagged; see `kundali_vedic_base::planets`.
    pub retrograde: bool,
    /// Right ascension of the tropical position, degrees [0, 360).
    pub right_ascension_deg: f64,
    /// Declination of the tropical position, degrees.
    pub declination_deg: f64,
    pub nakshatra: NakshatraInfo,
}

/// An aspect from a chart planet to a queried longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetAspect {
    pub graha: Graha,
    pub aspect: Aspect,
}

/// A complete sidereal birth chart.
///
/// Built once by [`crate::generate_chart`] and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthChart {
    pub(crate) input: BirthInput,
    pub(crate) config: ChartConfig,
    pub(crate) julian_day: f64,
    pub(crate) ayanamsha_deg: f64,
    pub(crate) gmst_deg: f64,
    pub(crate) lst_deg: f64,
    pub(crate) obliquity_deg: f64,
    pub(crate) ascendant: Ascendant,
    pub(crate) midheaven_deg: f64,
    pub(crate) house_cusps: HouseCusps,
    pub(crate) planets: BTreeMap<Graha, PlanetPosition>,
    pub(crate) moon_nakshatra: NakshatraInfo,
    pub(crate) tithi: TithiInfo,
    pub(crate) karana: KaranaInfo,
    pub(crate) yoga: YogaInfo,
    pub(crate) vaar: Vaar,
}

impl BirthChart {
    pub fn input(&self) -> &BirthInput {
        &self.input
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Julian Day (UT) of birth.
    pub fn julian_day(&self) -> f64 {
        self.julian_day
    }

    pub fn ayanamsha_deg(&self) -> f64 {
        self.ayanamsha_deg
    }

    pub fn gmst_deg(&self) -> f64 {
        self.gmst_deg
    }

    /// Local sidereal time, degrees [0, 360).
    pub fn lst_deg(&self) -> f64 {
        self.lst_deg
    }

    pub fn obliquity_deg(&self) -> f64 {
        self.obliquity_deg
    }

    /// Sidereal ascendant.
    pub fn ascendant(&self) -> &Ascendant {
        &self.ascendant
    }

    /// Sidereal midheaven, degrees [0, 360).
    pub fn midheaven_deg(&self) -> f64 {
        self.midheaven_deg
    }

    pub fn house_cusps(&self) -> &HouseCusps {
        &self.house_cusps
    }

    /// All nine planet positions keyed by graha.
    pub fn planets(&self) -> &BTreeMap<Graha, PlanetPosition> {
        &self.planets
    }

    pub fn planet(&self, graha: Graha) -> Option<&PlanetPosition> {
        self.planets.get(&graha)
    }

    pub fn moon_nakshatra(&self) -> &NakshatraInfo {
        &self.moon_nakshatra
    }

    pub fn tithi(&self) -> &TithiInfo {
        &self.tithi
    }

    pub fn karana(&self) -> &KaranaInfo {
        &self.karana
    }

    pub fn yoga(&self) -> &YogaInfo {
        &self.yoga
    }

    /// Weekday of the civil birth date.
    pub fn vaar(&self) -> Vaar {
        self.vaar
    }

    /// House (1..=12) containing a sidereal longitude.
    pub fn house_of(&self, longitude_deg: f64) -> u8 {
        self.house_cusps.house_of(longitude_deg)
    }

    /// Grahas occupying a house, in graha order.
    pub fn planets_in_house(&self, house: u8) -> Result<Vec<Graha>, VedicError> {
        if !(1..=12).contains(&house) {
            return Err(VedicError::HouseOutOfRange(house));
        }
        Ok(self
            .planets
            .values()
            .filter(|p| p.house == house)
            .map(|p| p.graha)
            .collect())
    }

    /// Planets aspecting a sidereal longitude within the configured orb.
    pub fn aspects_to(&self, longitude_deg: f64) -> Vec<PlanetAspect> {
        self.planets
            .values()
            .filter_map(|p| {
                aspect_between(p.longitude_deg, longitude_deg, self.config.aspect_orb_deg)
                    .map(|aspect| PlanetAspect {
                        graha: p.graha,
                        aspect,
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_chart;
    use kundali_vedic_base::AspectKind;

    fn chart() -> BirthChart {
        generate_chart(&BirthInput::new(1990, 5, 15, 14, 30, 0, 28.6139, 77.2090)).unwrap()
    }

    #[test]
    fn every_planet_in_exactly_one_house() {
        let c = chart();
        let total: usize = (1..=12)
            .map(|h| c.planets_in_house(h).unwrap().len())
            .sum();
        assert_eq!(total, 9);
    }

    #[test]
    fn house_lookup_matches_planet_house() {
        let c = chart();
        for p in c.planets().values() {
            assert_eq!(c.house_of(p.longitude_deg), p.house);
            assert!(c.planets_in_house(p.house).unwrap().contains(&p.graha));
        }
    }

    #[test]
    fn invalid_house_rejected() {
        let c = chart();
        assert_eq!(c.planets_in_house(0), Err(VedicError::HouseOutOfRange(0)));
        assert_eq!(c.planets_in_house(13), Err(VedicError::HouseOutOfRange(13)));
    }

    #[test]
    fn planet_conjoins_its_own_longitude() {
        let c = chart();
        let sun = c.planet(Graha::Surya).unwrap();
        let aspects = c.aspects_to(sun.longitude_deg);
        assert!(aspects.iter().any(|a| a.graha == Graha::Surya
            && a.aspect.kind == AspectKind::Conjunction
            && a.aspect.orb_deg < 1e-9));
    }

    #[test]
    fn nodes_oppose_each_other() {
        let c = chart();
        let rahu = c.planet(Graha::Rahu).unwrap();
        let aspects = c.aspects_to(rahu.longitude_deg);
        let ketu = aspects.iter().find(|a| a.graha == Graha::Ketu).unwrap();
        assert_eq!(ketu.aspect.kind, AspectKind::Opposition);
    }

    #[test]
    fn aspect_orb_from_config() {
        let c = chart();
        for a in c.aspects_to(123.4) {
            assert!(a.aspect.orb_deg <= c.config().aspect_orb_deg);
        }
    }
}
