//! Properties that must hold for every chart.

use std::thread;

use kundali_chart::{BirthChart, BirthInput, generate_chart};
use kundali_frames::angular_separation;
use kundali_vedic_base::Graha;

fn sample_inputs() -> Vec<BirthInput> {
    let mut out = Vec::new();
    for (k, year) in (1582..=2100).step_by(37).enumerate() {
        let k = k as u32;
        out.push(BirthInput::new(
            year,
            k % 12 + 1,
            k % 28 + 1,
            (k * 5) % 24,
            (k * 13) % 60,
            (k * 29) % 60,
            -60.0 + (k as f64 * 9.7) % 120.0,
            -180.0 + (k as f64 * 47.3) % 360.0,
        ));
    }
    out
}

#[test]
fn nodes_opposite_in_every_chart() {
    for input in sample_inputs() {
        let chart = generate_chart(&input).unwrap();
        let rahu = chart.planet(Graha::Rahu).unwrap().longitude_deg;
        let ketu = chart.planet(Graha::Ketu).unwrap().longitude_deg;
        let sep = angular_separation(rahu, ketu);
        assert!((sep - 180.0).abs() < 1e-9, "{input:?}: {sep}");
    }
}

#[test]
fn all_angles_normalized() {
    for input in sample_inputs() {
        let chart = generate_chart(&input).unwrap();
        for p in chart.planets().values() {
            assert!((0.0..360.0).contains(&p.longitude_deg));
            assert!((0.0..360.0).contains(&p.tropical_longitude_deg));
            assert!((0.0..360.0).contains(&p.right_ascension_deg));
            assert!((0.0..30.0).contains(&p.degree_in_sign));
            assert!((1..=12).contains(&p.house));
            assert!(p.declination_deg.abs() <= 24.0);
        }
        assert!((0.0..360.0).contains(&chart.ascendant().longitude_deg));
        assert!((0.0..360.0).contains(&chart.lst_deg()));
    }
}

#[test]
fn houses_partition_every_chart() {
    for input in sample_inputs() {
        let chart = generate_chart(&input).unwrap();
        let mut counts = [0u32; 12];
        for d in 0..360 {
            let h = chart.house_of(d as f64);
            counts[h as usize - 1] += 1;
        }
        assert_eq!(counts, [30; 12], "{input:?}");
        let cusps = chart.house_cusps().as_array();
        for k in 0..12 {
            let diff = (cusps[(k + 1) % 12] - cusps[k]).rem_euclid(360.0);
            assert!((diff - 30.0).abs() < 1e-9);
        }
    }
}

#[test]
fn planet_house_follows_sign_offset() {
    for input in sample_inputs() {
        let chart = generate_chart(&input).unwrap();
        let asc_sign = chart.ascendant().sign as i32;
        assert_eq!(chart.house_of(chart.ascendant().longitude_deg), 1, "{input:?}");
        for p in chart.planets().values() {
            let expected = (p.sign as i32 - asc_sign).rem_euclid(12) as u8 + 1;
            assert_eq!(p.house, expected, "{input:?} {}", p.graha);
        }
    }
}

#[test]
fn concurrent_generation_matches_sequential() {
    let inputs = sample_inputs();
    let sequential: Vec<BirthChart> = inputs.iter().map(|i| generate_chart(i).unwrap()).collect();

    let parallel: Vec<BirthChart> = thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| s.spawn(move || generate_chart(input).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}

#[test]
fn chart_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BirthChart>();
    assert_send_sync::<BirthInput>();
    assert_send_sync::<kundali_chart::ChartError>();
}
