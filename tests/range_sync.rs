use chrono::{DateTime, Duration, TimeZone, Utc};
use trackplot::{AxisRange, Channel, RangeSync, Sample, TimeRange, UnitSystem};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 5, 1, 12, 0, 0).unwrap()
}

// Strictly increasing distances with a varying rate, so the mapping is not linear.
fn samples() -> Vec<Sample> {
    (0..20)
        .map(|i| {
            let t = i as f64 * 0.5;
            Sample {
                time: t0() + Duration::milliseconds(500 * i),
                t,
                dist_2d: 20.0 * t + 3.0 * (t * 1.3).sin() + 0.2 * t * t,
                dist_3d: 30.0 * t + 0.3 * t * t,
                ..Default::default()
            }
        })
        .collect()
}

#[test]
fn time_axis_is_the_identity() {
    let samples = samples();
    let sync = RangeSync::new(&samples, UnitSystem::Metric);
    let r = sync
        .to_axis_range(Channel::Time, TimeRange::new(1.25, 7.75))
        .unwrap();
    assert_eq!(r, AxisRange::new(1.25, 7.75));
}

#[test]
fn round_trip_through_every_axis() {
    let samples = samples();
    for units in [UnitSystem::Metric, UnitSystem::Imperial] {
        let sync = RangeSync::new(&samples, units);
        for axis in Channel::AXES {
            for (a, b) in [(0.0, 9.5), (0.3, 4.1), (2.0, 2.0), (7.7, 1.2), (5.0, 5.25)] {
                let time = TimeRange::new(a, b);
                let axis_range = sync.to_axis_range(axis, time).unwrap();
                let back = sync.to_time_range(axis, axis_range).unwrap();
                assert!(
                    (back.lower - a).abs() < 1e-6 && (back.upper - b).abs() < 1e-6,
                    "{axis} {units}: ({a}, {b}) -> {axis_range:?} -> {back:?}"
                );
            }
        }
    }
}

#[test]
fn convert_between_distance_axes_preserves_time() {
    let samples = samples();
    let sync = RangeSync::new(&samples, UnitSystem::Metric);
    let time = TimeRange::new(1.1, 6.6);
    let d2 = sync.to_axis_range(Channel::Distance2D, time).unwrap();
    let d3 = sync.convert(Channel::Distance2D, Channel::Distance3D, d2).unwrap();
    let back = sync.to_time_range(Channel::Distance3D, d3).unwrap();
    assert!((back.lower - 1.1).abs() < 1e-6);
    assert!((back.upper - 6.6).abs() < 1e-6);
}

#[test]
fn coordinates_outside_the_track_clamp() {
    let samples = samples();
    let sync = RangeSync::new(&samples, UnitSystem::Metric);
    assert_eq!(sync.time_at(Channel::Distance2D, -100.0), Some(0.0));
    assert_eq!(sync.time_at(Channel::Distance2D, 1e9), Some(9.5));
}

#[test]
fn empty_track_has_no_ranges() {
    let sync = RangeSync::new(&[], UnitSystem::Metric);
    assert!(sync.to_axis_range(Channel::Time, TimeRange::new(0.0, 1.0)).is_none());
    assert!(sync.to_time_range(Channel::Distance2D, AxisRange::new(0.0, 1.0)).is_none());
}
