//! The chart pipeline as explicit stage functions.
//!
//! `Validate → Astronomical → ChartElements → PlanetaryData → LunarData →
//! Assemble`. Each stage consumes the outputs of earlier stages and either
//! returns its own output or a [`ChartError`] tagged with the stage. There
//! is no retry and no state carried between calls.

use std::collections::BTreeMap;

use kundali_frames::{EclipticCoords, ecliptic_to_equatorial, normalize_360};
use kundali_time::{
    TimeError, gmst_deg, julian_day, local_sidereal_time_deg, obliquity_deg, weekday_index,
};
use kundali_vedic_base::{
    Ascendant, Graha, HouseCusps, KaranaInfo, NakshatraInfo, TithiInfo, TropicalPosition, Vaar,
    YogaInfo, ascendant_deg, ayanamsha_deg, is_polar,
    karana_from_elongation, midheaven_deg, nakshatra_from_longitude, rashi_from_longitude,
    tithi_from_longitudes, to_sidereal, tropical_positions, whole_sign_houses, yoga_from_sum,
};
use log::{debug, info, warn};

use crate::chart::{BirthChart, PlanetPosition};
use crate::config::ChartConfig;
use crate::error::{ChartError, Stage};
use crate::input::BirthInput;

/// Time quantities shared by every later stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Astronomical {
    /// Julian Day of the civil input, before removing the UTC offset.
    pub local_jd: f64,
    /// Julian Day in UT.
    pub jd: f64,
    pub ayanamsha_deg: f64,
    pub gmst_deg: f64,
    pub lst_deg: f64,
    pub obliquity_deg: f64,
}

/// Sidereal angles and houses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartElements {
    pub ascendant: Ascendant,
    pub midheaven_deg: f64,
    pub house_cusps: HouseCusps,
}

/// Positions of the nine grahas, in [`kundali_vedic_base::ALL_GRAHAS`] order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetaryData {
    pub positions: [PlanetPosition; 9],
}

impl PlanetaryData {
    pub fn get(&self, graha: Graha) -> &PlanetPosition {
        &self.positions[graha.index() as usize]
    }
}

/// Lunar-calendar elements at the birth instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarData {
    pub moon_nakshatra: NakshatraInfo,
    pub tithi: TithiInfo,
    pub karana: KaranaInfo,
    pub yoga: YogaInfo,
    pub vaar: Vaar,
}

/// Reject malformed input or settings before any computation.
pub fn validate(input: &BirthInput, config: &ChartConfig) -> Result<(), ChartError> {
    input.validate()?;
    config.validate()?;
    debug!(
        "validated birth input {:04}-{:02}-{:02} {:02}:{:02}:{:02} at ({}, {})",
        input.year,
        input.month,
        input.day,
        input.hour,
        input.minute,
        input.second,
        input.latitude_deg,
        input.longitude_deg
    );
    Ok(())
}

/// Julian Day, ayanamsha, sidereal time and obliquity.
pub fn astronomical(input: &BirthInput, config: &ChartConfig) -> Result<Astronomical, ChartError> {
    let local_jd = julian_day(
        input.year,
        input.month,
        input.day,
        input.hour,
        input.minute,
        input.second,
    )
    .map_err(ChartError::Astronomical)?;
    let jd = local_jd - input.utc_offset_days();
    if !jd.is_finite() {
        return Err(ChartError::Astronomical(TimeError::NonFinite("julian day")));
    }

    let ayanamsha = ayanamsha_deg(config.ayanamsha, input.year as f64);
    let gmst = gmst_deg(jd);
    let lst = local_sidereal_time_deg(gmst, input.longitude_deg);
    let obliquity = obliquity_deg(jd);

    debug!(
        "astronomical: jd={jd:.6} {}={ayanamsha:.6} gmst={gmst:.6} lst={lst:.6} eps={obliquity:.6}",
        config.ayanamsha.name()
    );
    Ok(Astronomical {
        local_jd,
        jd,
        ayanamsha_deg: ayanamsha,
        gmst_deg: gmst,
        lst_deg: lst,
        obliquity_deg: obliquity,
    })
}

/// Sidereal ascendant, midheaven and whole-sign houses.
pub fn chart_elements(
    input: &BirthInput,
    astro: &Astronomical,
) -> Result<ChartElements, ChartError> {
    let fail = || ChartError::calculation(Stage::ChartElements);

    if is_polar(input.latitude_deg) {
        warn!(
            "latitude {} is inside a polar circle; ascendant may be unstable",
            input.latitude_deg
        );
    }

    let asc_tropical = ascendant_deg(astro.lst_deg, input.latitude_deg, astro.obliquity_deg)
        .map_err(fail())?;
    let asc = to_sidereal(asc_tropical, astro.ayanamsha_deg).map_err(fail())?;
    let mc_tropical = midheaven_deg(astro.lst_deg, astro.obliquity_deg).map_err(fail())?;
    let mc = to_sidereal(mc_tropical, astro.ayanamsha_deg).map_err(fail())?;

    let ascendant = Ascendant::from_longitude(asc);
    let house_cusps = whole_sign_houses(asc);

    debug!(
        "chart elements: asc={asc:.6} ({}) mc={mc:.6}",
        ascendant.rashi.name()
    );
    Ok(ChartElements {
        ascendant,
        midheaven_deg: mc,
        house_cusps,
    })
}

fn place(
    tp: &TropicalPosition,
    astro: &Astronomical,
    elements: &ChartElements,
) -> Result<PlanetPosition, ChartError> {
    let lon = to_sidereal(tp.longitude_deg, astro.ayanamsha_deg).map_err(ChartError::Planetary)?;
    let rashi = rashi_from_longitude(lon);
    let eq = ecliptic_to_equatorial(
        &EclipticCoords {
            lon_deg: tp.longitude_deg,
            lat_deg: tp.latitude_deg,
        },
        astro.obliquity_deg,
    );
    Ok(PlanetPosition {
        graha: tp.graha,
        longitude_deg: lon,
        tropical_longitude_deg: tp.longitude_deg,
        latitude_deg: tp.latitude_deg,
        speed_deg_per_day: tp.speed_deg_per_day,
        rashi: rashi.rashi,
        sign: rashi.rashi_index,
        degree_in_sign: rashi.degrees_in_rashi,
        dms: rashi.dms,
        house: elements.house_cusps.house_of(lon),
        retrograde: tp.retrograde,
        right_ascension_deg: normalize_360(eq.ra_deg),
        declination_deg: eq.dec_deg,
        nakshatra: nakshatra_from_longitude(lon),
    })
}

/// Tropical positions converted to sidereal and placed in houses.
pub fn planetary_data(
    astro: &Astronomical,
    elements: &ChartElements,
) -> Result<PlanetaryData, ChartError> {
    let tropical = tropical_positions(astro.jd).map_err(ChartError::Planetary)?;

    let mut positions = [place(&tropical[0], astro, elements)?; 9];
    for (slot, tp) in positions.iter_mut().zip(&tropical).skip(1) {
        *slot = place(tp, astro, elements)?;
    }

    debug!(
        "planetary data: sun={:.6} moon={:.6} rahu={:.6}",
        positions[Graha::Surya.index() as usize].longitude_deg,
        positions[Graha::Chandra.index() as usize].longitude_deg,
        positions[Graha::Rahu.index() as usize].longitude_deg
    );
    Ok(PlanetaryData { positions })
}

/// Moon nakshatra, tithi, karana, yoga and vaar.
///
/// Total over normalized longitudes, so it never returns `Err`; the
/// `Result` keeps the stage signatures uniform.
pub fn lunar_data(astro: &Astronomical, planets: &PlanetaryData) -> Result<LunarData, ChartError> {
    let sun = planets.get(Graha::Surya).longitude_deg;
    let moon = planets.get(Graha::Chandra).longitude_deg;

    let tithi = tithi_from_longitudes(moon, sun);
    let lunar = LunarData {
        moon_nakshatra: nakshatra_from_longitude(moon),
        tithi,
        karana: karana_from_elongation(moon - sun),
        yoga: yoga_from_sum(sun + moon),
        vaar: Vaar::from_weekday(weekday_index(astro.local_jd)),
    };

    debug!(
        "lunar data: nakshatra={} pada={} tithi={} ({}) yoga={}",
        lunar.moon_nakshatra.name,
        lunar.moon_nakshatra.pada,
        tithi.number,
        tithi.name(),
        lunar.yoga.yoga.name()
    );
    Ok(lunar)
}

/// Combine the stage outputs into the immutable chart.
///
/// Never returns `Err`: every graha key is distinct, so the map always
/// holds all nine positions.
pub fn assemble(
    input: &BirthInput,
    config: &ChartConfig,
    astro: Astronomical,
    elements: ChartElements,
    planets: PlanetaryData,
    lunar: LunarData,
) -> Result<BirthChart, ChartError> {
    let planets: BTreeMap<Graha, PlanetPosition> =
        planets.positions.into_iter().map(|p| (p.graha, p)).collect();

    Ok(BirthChart {
        input: *input,
        config: *config,
        julian_day: astro.jd,
        ayanamsha_deg: astro.ayanamsha_deg,
        gmst_deg: astro.gmst_deg,
        lst_deg: astro.lst_deg,
        obliquity_deg: astro.obliquity_deg,
        ascendant: elements.ascendant,
        midheaven_deg: elements.midheaven_deg,
        house_cusps: elements.house_cusps,
        planets,
        moon_nakshatra: lunar.moon_nakshatra,
        tithi: lunar.tithi,
        karana: lunar.karana,
        yoga: lunar.yoga,
        vaar: lunar.vaar,
    })
}

/// Compute a chart with the default configuration.
pub fn generate_chart(input: &BirthInput) -> Result<BirthChart, ChartError> {
    generate_chart_with(input, &ChartConfig::default())
}

/// Compute a chart with an explicit configuration.
pub fn generate_chart_with(
    input: &BirthInput,
    config: &ChartConfig,
) -> Result<BirthChart, ChartError> {
    validate(input, config)?;
    let astro = astronomical(input, config)?;
    let elements = chart_elements(input, &astro)?;
    let planets = planetary_data(&astro, &elements)?;
    let lunar = lunar_data(&astro, &planets)?;
    let chart = assemble(input, config, astro, elements, planets, lunar)?;

    info!(
        "chart generated: jd={:.6} lagna={} moon={} tithi={}",
        chart.julian_day(),
        chart.ascendant().rashi.name(),
        chart.moon_nakshatra().name,
        chart.tithi().number
    );
    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InvalidConfig;
    use kundali_vedic_base::{ALL_GRAHAS, AyanamshaSystem, VedicError};

    fn delhi() -> BirthInput {
        BirthInput::new(1990, 5, 15, 14, 30, 0, 28.6139, 77.2090)
    }

    #[test]
    fn astronomical_stage_reports_bad_date() {
        // Bypasses validation, so the time layer raises the error itself.
        let mut input = delhi();
        input.month = 13;
        let err = astronomical(&input, &ChartConfig::default()).unwrap_err();
        assert_eq!(err, ChartError::Astronomical(TimeError::InvalidMonth(13)));
        assert_eq!(err.stage(), Stage::Astronomical);
    }

    #[test]
    fn chart_elements_stage_reports_bad_latitude() {
        let mut input = delhi();
        let astro = astronomical(&input, &ChartConfig::default()).unwrap();
        input.latitude_deg = 95.0;
        let err = chart_elements(&input, &astro).unwrap_err();
        assert_eq!(err.stage(), Stage::ChartElements);
        assert!(matches!(
            err,
            ChartError::Calculation {
                source: VedicError::InvalidLocation(_),
                ..
            }
        ));
    }

    #[test]
    fn planetary_stage_reports_non_finite_jd() {
        let input = delhi();
        let mut astro = astronomical(&input, &ChartConfig::default()).unwrap();
        let elements = chart_elements(&input, &astro).unwrap();
        astro.jd = f64::NAN;
        let err = planetary_data(&astro, &elements).unwrap_err();
        assert_eq!(err.stage(), Stage::PlanetaryData);
    }

    #[test]
    fn validation_runs_first() {
        let mut input = delhi();
        input.year = 2101;
        let err = generate_chart(&input).unwrap_err();
        assert_eq!(err.stage(), Stage::Validate);
    }

    #[test]
    fn out_of_range_orb_rejected_before_computation() {
        for orb in [500.0, -3.0, f64::NAN] {
            let config = ChartConfig {
                aspect_orb_deg: orb,
                ..ChartConfig::default()
            };
            let err = generate_chart_with(&delhi(), &config).unwrap_err();
            assert_eq!(err.stage(), Stage::Validate);
            assert!(matches!(err, ChartError::Config(InvalidConfig::AspectOrb(_))));
        }
    }

    #[test]
    fn assembled_chart_holds_every_graha() {
        let chart = generate_chart(&delhi()).unwrap();
        let keys: Vec<Graha> = chart.planets().keys().copied().collect();
        assert_eq!(keys, ALL_GRAHAS.to_vec());
    }

    #[test]
    fn utc_offset_shifts_to_same_instant() {
        let ut = generate_chart(&delhi()).unwrap();
        let local = BirthInput {
            hour: 20,
            minute: 0,
            ..delhi()
        }
        .with_utc_offset(5.5);
        let local = generate_chart(&local).unwrap();
        assert!((ut.julian_day() - local.julian_day()).abs() < 1e-8);
        for (g, p) in ut.planets() {
            let q = local.planet(*g).unwrap();
            assert!((p.longitude_deg - q.longitude_deg).abs() < 1e-6, "{g}");
        }
        assert!((ut.ascendant().longitude_deg - local.ascendant().longitude_deg).abs() < 1e-6);
    }

    #[test]
    fn ayanamsha_system_changes_sidereal_positions() {
        let lahiri = generate_chart(&delhi()).unwrap();
        let config = ChartConfig::default().with_ayanamsha(AyanamshaSystem::Raman);
        let raman = generate_chart_with(&delhi(), &config).unwrap();
        let diff = lahiri.ayanamsha_deg() - raman.ayanamsha_deg();
        assert!((diff - (23.853 - 22.370)).abs() < 1e-9);
        let sun_l = lahiri.planet(Graha::Surya).unwrap();
        let sun_r = raman.planet(Graha::Surya).unwrap();
        assert_eq!(sun_l.tropical_longitude_deg, sun_r.tropical_longitude_deg);
        assert!((normalize_360(sun_r.longitude_deg - sun_l.longitude_deg) - diff).abs() < 1e-9);
    }

    #[test]
    fn sidereal_sign_rederived() {
        let chart = generate_chart(&delhi()).unwrap();
        for p in chart.planets().values() {
            assert_eq!(p.sign, (p.longitude_deg / 30.0).floor() as u8);
            assert!((p.degree_in_sign - (p.longitude_deg - 30.0 * p.sign as f64)).abs() < 1e-9);
        }
    }

    #[test]
    fn lunar_elements_consistent() {
        let input = delhi();
        let config = ChartConfig::default();
        let astro = astronomical(&input, &config).unwrap();
        let elements = chart_elements(&input, &astro).unwrap();
        let planets = planetary_data(&astro, &elements).unwrap();
        let lunar = lunar_data(&astro, &planets).unwrap();
        assert_eq!(lunar.moon_nakshatra, planets.get(Graha::Chandra).nakshatra);
        // 1990-05-15 was a Tuesday.
        assert_eq!(lunar.vaar, Vaar::Mangalavaar);
        let karana_tithi = lunar.karana.karana_index / 2 + 1;
        assert_eq!(karana_tithi, lunar.tithi.number);
    }
}
