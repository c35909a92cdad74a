use trackplot::{Channel, Sample, UnitSystem, WindowAggregator};

fn linear_samples() -> Vec<Sample> {
    (0..3)
        .map(|i| Sample {
            t: i as f64,
            z: 10.0 * i as f64,
            ..Default::default()
        })
        .collect()
}

// Unevenly spaced samples with a non-linear ground distance and a bumpy elevation.
fn uneven_samples() -> Vec<Sample> {
    let times = [0.0, 0.4, 1.0, 2.5, 2.6, 4.0, 5.5, 7.0];
    times
        .iter()
        .enumerate()
        .map(|(i, &t)| Sample {
            t,
            z: 100.0 - 3.0 * t * t + if i % 2 == 0 { 5.0 } else { -5.0 },
            dist_2d: 12.0 * t + 0.5 * t * t,
            dist_3d: 15.0 * t + 0.5 * t * t,
            vel_d: 2.0 * t,
            ..Default::default()
        })
        .collect()
}

#[test]
fn linear_window_statistics() {
    let samples = linear_samples();
    let agg = WindowAggregator::new(&samples, Channel::Time, UnitSystem::Metric);
    let s = agg.aggregate(0.0, 2.0, Channel::Elevation).unwrap();
    assert!((s.min - 0.0).abs() < 1e-9);
    assert!((s.max - 20.0).abs() < 1e-9);
    assert!((s.mean - 10.0).abs() < 1e-9);
    assert!((s.delta - 20.0).abs() < 1e-9);
    assert!((s.value_at_end - 20.0).abs() < 1e-9);
}

#[test]
fn partial_edges_use_interpolated_boundaries() {
    let samples = linear_samples();
    let agg = WindowAggregator::new(&samples, Channel::Time, UnitSystem::Metric);
    let s = agg.aggregate(0.5, 1.5, Channel::Elevation).unwrap();
    assert!((s.min - 5.0).abs() < 1e-9);
    assert!((s.max - 15.0).abs() < 1e-9);
    assert!((s.mean - 10.0).abs() < 1e-9);
    assert!((s.delta - 10.0).abs() < 1e-9);
}

#[test]
fn window_beyond_the_track_clamps_to_the_ends() {
    let samples = linear_samples();
    let agg = WindowAggregator::new(&samples, Channel::Time, UnitSystem::Metric);
    let s = agg.aggregate(-5.0, 50.0, Channel::Elevation).unwrap();
    assert!((s.min - 0.0).abs() < 1e-9);
    assert!((s.max - 20.0).abs() < 1e-9);
    assert!((s.mean - 10.0).abs() < 1e-9);
}

#[test]
fn mean_lies_between_min_and_max() {
    let samples = uneven_samples();
    for axis in Channel::AXES {
        let agg = WindowAggregator::new(&samples, axis, UnitSystem::Metric);
        let span = axis.value(samples.last().unwrap(), UnitSystem::Metric);
        for a in 0..12 {
            for b in 0..12 {
                let start = span * a as f64 / 11.0;
                let end = span * b as f64 / 11.0;
                for ch in [Channel::Elevation, Channel::VerticalSpeed] {
                    let s = agg.aggregate(start, end, ch).unwrap();
                    assert!(s.min <= s.mean && s.mean <= s.max, "{axis} [{start}, {end}] {s:?}");
                }
            }
        }
    }
}

#[test]
fn mean_is_weighted_by_time_not_by_axis() {
    let samples = uneven_samples();
    let last = samples.last().unwrap();

    let by_time = WindowAggregator::new(&samples, Channel::Time, UnitSystem::Metric)
        .aggregate(0.0, last.t, Channel::Elevation)
        .unwrap();
    let by_distance = WindowAggregator::new(&samples, Channel::Distance2D, UnitSystem::Metric)
        .aggregate(0.0, last.dist_2d, Channel::Elevation)
        .unwrap();

    assert!((by_time.mean - by_distance.mean).abs() < 1e-9);
    assert!((by_time.min - by_distance.min).abs() < 1e-9);
    assert!((by_time.max - by_distance.max).abs() < 1e-9);
}

#[test]
fn zero_width_window_collapses_to_the_point_value() {
    let samples = uneven_samples();
    let agg = WindowAggregator::new(&samples, Channel::Time, UnitSystem::Metric);
    for x in [0.0, 0.7, 2.5, 6.1, 7.0] {
        let s = agg.aggregate(x, x, Channel::Elevation).unwrap();
        assert_eq!(s.delta, 0.0);
        assert_eq!(s.min, s.value_at_end);
        assert_eq!(s.mean, s.value_at_end);
        assert_eq!(s.max, s.value_at_end);
    }
}

#[test]
fn shrinking_window_converges_to_the_midpoint_value() {
    let samples = uneven_samples();
    let agg = WindowAggregator::new(&samples, Channel::Time, UnitSystem::Metric);
    let mid = 3.3;
    let at_mid = agg.aggregate(mid, mid, Channel::Elevation).unwrap().value_at_end;
    let eps = 1e-6;
    let s = agg.aggregate(mid - eps, mid + eps, Channel::Elevation).unwrap();
    assert!((s.mean - at_mid).abs() < 1e-4);
}

#[test]
fn single_sample_track() {
    let samples = vec![Sample {
        t: 4.0,
        z: 42.0,
        ..Default::default()
    }];
    let agg = WindowAggregator::new(&samples, Channel::Time, UnitSystem::Metric);
    for (start, end) in [(0.0, 10.0), (4.0, 4.0), (10.0, 0.0), (-1.0, 3.0)] {
        let s = agg.aggregate(start, end, Channel::Elevation).unwrap();
        assert_eq!(s.delta, 0.0);
        assert_eq!(s.min, 42.0);
        assert_eq!(s.mean, 42.0);
        assert_eq!(s.max, 42.0);
    }
}

#[test]
fn aggregate_all_matches_single_channel_results() {
    let samples = uneven_samples();
    let agg = WindowAggregator::new(&samples, Channel::Distance3D, UnitSystem::Imperial);
    let channels = [Channel::Elevation, Channel::VerticalSpeed, Channel::GlideRatio];
    let all = agg.aggregate_all(10.0, 60.0, &channels);
    assert_eq!(all.len(), channels.len());
    for (ch, stats) in all {
        assert_eq!(Some(stats), agg.aggregate(10.0, 60.0, ch));
    }
}

#[test]
fn stats_are_reported_in_display_units() {
    let samples = linear_samples();
    let agg = WindowAggregator::new(&samples, Channel::Time, UnitSystem::Imperial);
    let s = agg.aggregate(0.0, 2.0, Channel::Elevation).unwrap();
    assert!((s.max - 20.0 * 3.280_839_895).abs() < 1e-6);
}
