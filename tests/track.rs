use chrono::{DateTime, Duration, TimeZone, Utc};
use trackplot::data::track::{derive_fields, haversine_distance};
use trackplot::{Channel, Navigation, Sample, Selection, Track, TrackSource, UnitSystem};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 5, 1, 12, 0, 0).unwrap()
}

fn raw(i: i64) -> Sample {
    Sample {
        time: t0() + Duration::seconds(i),
        lat: 47.0 + i as f64 * 1e-4,
        lon: 8.0,
        h_msl: 3000.0 - 50.0 * i as f64,
        vel_n: 12.0,
        vel_d: 50.0,
        ..Default::default()
    }
}

#[test]
fn new_track_sorts_and_drops_duplicate_timestamps() {
    let mut input: Vec<Sample> = [4, 1, 3, 0, 2].into_iter().map(raw).collect();
    input.push(Sample { h_msl: -1.0, ..raw(3) });
    let track = Track::new(input);

    assert_eq!(track.sample_count(), 5);
    let times: Vec<f64> = track.samples().iter().map(|dp| dp.t).collect();
    assert_eq!(times, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    assert!(track.samples().windows(2).all(|w| w[0].time < w[1].time));
}

#[test]
fn derived_fields_of_a_straight_descent() {
    let track = Track::new((0..6).map(raw).collect());
    let samples = track.samples();

    // Elevation is measured against the last sample.
    assert_eq!(track.ground(), 2750.0);
    assert_eq!(samples[0].z, 250.0);
    assert_eq!(samples[5].z, 0.0);

    let step = haversine_distance(47.0, 8.0, 47.0001, 8.0);
    assert!((samples[1].dist_2d - step).abs() < 1e-6);
    assert!((samples[5].dist_2d - 5.0 * step).abs() < 1e-3);
    assert!((samples[1].dist_3d - step.hypot(50.0)).abs() < 1e-6);
    assert!(samples.windows(2).all(|w| w[0].dist_2d < w[1].dist_2d));

    for dp in samples {
        // Constant velocity: no acceleration, lift and drag balance gravity.
        assert!(dp.accel.abs() < 1e-9);
        assert!(dp.course.abs() < 1e-9);
        let dive = dp.dive_angle().to_radians();
        assert!((dp.lift - dive.cos()).abs() < 1e-9);
        assert!((dp.drag - dive.sin()).abs() < 1e-9);
    }

    // Descending at 50 m/s converts potential energy at g * 50 W/kg.
    assert!((samples[2].energy_rate + 9.806_65 * 50.0).abs() < 1e-6);
}

#[test]
fn course_is_continuous_across_south() {
    let mut samples: Vec<Sample> = (0..4)
        .map(|i| Sample {
            time: t0() + Duration::seconds(i),
            vel_n: -10.0,
            vel_e: if i < 2 { 1.0 } else { -1.0 },
            ..Default::default()
        })
        .collect();
    derive_fields(&mut samples, None, 0.0);
    assert!(samples[1].course > 170.0 && samples[1].course < 180.0);
    assert!(samples[2].course > 180.0 && samples[2].course < 190.0);
    assert!((samples[2].course - samples[1].course).abs() < 20.0);
}

#[test]
fn set_zero_shifts_elapsed_time_and_navigation() {
    let mut track = Track::new((0..6).map(raw).collect());
    track.set_time_range(1.0, 4.0);
    track.set_interval_mark(2.0, 5.0);

    track.set_zero(2.0);
    assert_eq!(track.samples()[2].t, 0.0);
    assert_eq!(track.samples()[0].t, -2.0);
    assert_eq!(track.time_range().lower, -1.0);
    assert_eq!(track.time_range().upper, 2.0);
    assert_eq!(track.selection(), Selection::Interval(0.0, 3.0));
}

#[test]
fn set_ground_moves_elevation_reference() {
    let mut track = Track::new((0..6).map(raw).collect());
    track.set_ground(0.0);
    assert_eq!(track.ground(), 3000.0);
    assert_eq!(track.samples()[0].z, 0.0);
    assert_eq!(track.samples()[4].z, -200.0);

    // Half way between samples: interpolated height.
    track.set_ground(1.5);
    assert_eq!(track.ground(), 2925.0);
}

#[test]
fn time_range_is_normalized() {
    let mut track = Track::new((0..6).map(raw).collect());
    track.set_time_range(4.0, 1.0);
    assert_eq!(track.time_range().lower, 1.0);
    assert_eq!(track.time_range().upper, 4.0);
}

#[test]
fn units_change_display_values_only() {
    let track = Track::new((0..3).map(raw).collect()).with_units(UnitSystem::Imperial);
    let dp = track.sample_at(0).unwrap();
    assert_eq!(dp.z, 100.0);
    let ft = Channel::Elevation.value(dp, track.unit_system());
    assert!((ft - 328.083_989_5).abs() < 1e-6);
}

#[test]
fn empty_track_is_harmless() {
    let mut track = Track::new(Vec::new());
    assert!(track.is_empty());
    assert!(track.sample_at(0).is_none());
    track.set_zero(3.0);
    track.set_ground(3.0);
    assert_eq!(track.optimal_sample_count(), 0);
}
