//! End-to-end chart generation for a known birth.

use kundali_chart::{BirthInput, generate_chart};
use kundali_vedic_base::{ALL_GRAHAS, Graha};

fn delhi_1990() -> BirthInput {
    BirthInput::new(1990, 5, 15, 14, 30, 0, 28.6139, 77.2090)
}

#[test]
fn chart_shape() {
    let chart = generate_chart(&delhi_1990()).unwrap();

    assert_eq!(chart.house_cusps().as_array().len(), 12);
    assert_eq!(chart.planets().len(), 9);
    for g in ALL_GRAHAS {
        assert!(chart.planet(g).is_some(), "{g} missing");
    }

    let nak = chart.moon_nakshatra();
    assert!((1..=27).contains(&nak.number));
    assert!((1..=4).contains(&nak.pada));
    assert!((1..=30).contains(&chart.tithi().number));
}

#[test]
fn deterministic() {
    let a = generate_chart(&delhi_1990()).unwrap();
    let b = generate_chart(&delhi_1990()).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn reference_quantities() {
    let chart = generate_chart(&delhi_1990()).unwrap();
    // 1990-05-15 14:30 UT.
    assert!((chart.julian_day() - 2_448_027.104_166_7).abs() < 1e-6);
    // Lahiri for 1990: 23.853 − 10 × 0.013969.
    assert!((chart.ayanamsha_deg() - 23.7133).abs() < 1e-3);
    for v in [chart.gmst_deg(), chart.lst_deg(), chart.midheaven_deg()] {
        assert!((0.0..360.0).contains(&v));
    }
    assert!((chart.lst_deg() - (chart.gmst_deg() + 77.2090).rem_euclid(360.0)).abs() < 1e-9);
}

#[test]
fn ascendant_in_first_house_and_cusps_whole_sign() {
    let chart = generate_chart(&delhi_1990()).unwrap();
    let asc = chart.ascendant();
    assert_eq!(chart.house_of(asc.longitude_deg), 1);
    assert_eq!(asc.sign, (asc.longitude_deg / 30.0).floor() as u8);
    let cusps = chart.house_cusps().as_array();
    assert_eq!(cusps[0], asc.sign as f64 * 30.0);
    for c in cusps {
        assert_eq!(c % 30.0, 0.0);
    }
}

#[test]
fn node_flags_and_opposition() {
    let chart = generate_chart(&delhi_1990()).unwrap();
    let rahu = chart.planet(Graha::Rahu).unwrap();
    let ketu = chart.planet(Graha::Ketu).unwrap();
    assert!(rahu.retrograde && ketu.retrograde);
    let d = (rahu.longitude_deg - ketu.longitude_deg).rem_euclid(360.0);
    assert!((d - 180.0).abs() < 1e-9);
    for g in ALL_GRAHAS.iter().filter(|g| !g.is_node()) {
        assert!(!chart.planet(*g).unwrap().retrograde);
    }
}

#[test]
fn moon_nakshatra_matches_moon_position() {
    let chart = generate_chart(&delhi_1990()).unwrap();
    let moon = chart.planet(Graha::Chandra).unwrap();
    assert_eq!(chart.moon_nakshatra(), &moon.nakshatra);
}

#[test]
fn chart_serializes_with_graha_keys() {
    let chart = generate_chart(&delhi_1990()).unwrap();
    let value = serde_json::to_value(&chart).unwrap();
    assert!(value["planets"]["Surya"]["longitude_deg"].is_number());
    assert_eq!(value["house_cusps"].as_array().unwrap().len(), 12);
    assert_eq!(value["input"]["year"], 1990);
}

#[test]
fn input_round_trips_through_json() {
    let input = delhi_1990().with_utc_offset(5.5);
    let text = serde_json::to_string(&input).unwrap();
    let back: BirthInput = serde_json::from_str(&text).unwrap();
    assert_eq!(back, input);

    let bare: BirthInput = serde_json::from_str(
        r#"{"year":1990,"month":5,"day":15,"hour":14,"minute":30,"second":0,
            "latitude_deg":28.6139,"longitude_deg":77.209}"#,
    )
    .unwrap();
    assert_eq!(bare.utc_offset_hours, None);
}
