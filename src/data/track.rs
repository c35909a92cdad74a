//! Track: the data-holding collaborator.
//!
//! The query types in this crate never own samples. They borrow them from a
//! [`TrackSource`] and publish navigation changes through [`Navigation`].
//! [`Track`] is the in-memory implementation of both.

use chrono::{DateTime, Utc};
use tracing::{debug, trace, warn};

use crate::data::channel::Channel;
use crate::data::range::TimeRange;
use crate::data::resolver::IndexResolver;
use crate::data::sample::Sample;
use crate::data::selection::Selection;
use crate::data::units::{UnitSystem, GRAVITY};

/// Read access to an ordered sample sequence.
pub trait TrackSource {
    /// Samples ordered strictly by timestamp.
    fn samples(&self) -> &[Sample];

    /// Optional reference trajectory, aggregated separately from the main samples.
    fn optimal_samples(&self) -> &[Sample] {
        &[]
    }

    fn unit_system(&self) -> UnitSystem;

    fn sample_count(&self) -> usize {
        self.samples().len()
    }

    fn sample_at(&self, i: usize) -> Option<&Sample> {
        self.samples().get(i)
    }

    fn optimal_sample_count(&self) -> usize {
        self.optimal_samples().len()
    }

    fn optimal_sample_at(&self, i: usize) -> Option<&Sample> {
        self.optimal_samples().get(i)
    }
}

/// The shared navigation state, kept in elapsed time.
pub trait Navigation {
    fn time_range(&self) -> TimeRange;
    fn set_time_range(&mut self, lower: f64, upper: f64);
    fn selection(&self) -> Selection;
    fn set_point_mark(&mut self, t: f64);
    fn set_interval_mark(&mut self, t0: f64, t1: f64);
    fn clear_mark(&mut self);
}

/// In-memory track with its navigation state.
#[derive(Debug, Clone, Default)]
pub struct Track {
    samples: Vec<Sample>,
    optimal: Vec<Sample>,
    units: UnitSystem,
    zero: Option<DateTime<Utc>>,
    ground: f64,
    range: TimeRange,
    selection: Selection,
}

impl Track {
    /// Build a track from raw samples.
    ///
    /// Samples are sorted by timestamp; samples repeating an earlier timestamp
    /// are dropped. Elapsed time starts at the first sample and elevation is
    /// measured against the last sample's height.
    pub fn new(mut samples: Vec<Sample>) -> Self {
        samples.sort_by_key(|dp| dp.time);
        let before = samples.len();
        samples.dedup_by_key(|dp| dp.time);
        let dropped = before - samples.len();
        if dropped > 0 {
            warn!(dropped, "dropped samples with duplicate timestamps");
        }

        let zero = samples.first().map(|dp| dp.time);
        let ground = samples.last().map(|dp| dp.h_msl).unwrap_or(0.0);
        derive_fields(&mut samples, zero, ground);

        let range = match (samples.first(), samples.last()) {
            (Some(first), Some(last)) => TimeRange::new(first.t, last.t),
            _ => TimeRange::default(),
        };
        debug!(count = samples.len(), ?range, "track loaded");

        Self {
            samples,
            optimal: Vec::new(),
            units: UnitSystem::default(),
            zero,
            ground,
            range,
            selection: Selection::None,
        }
    }

    /// Attach a reference trajectory, derived against this track's zero and ground.
    pub fn with_optimal(mut self, mut optimal: Vec<Sample>) -> Self {
        optimal.sort_by_key(|dp| dp.time);
        optimal.dedup_by_key(|dp| dp.time);
        derive_fields(&mut optimal, self.zero, self.ground);
        self.optimal = optimal;
        self
    }

    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }

    pub fn set_units(&mut self, units: UnitSystem) {
        self.units = units;
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn ground(&self) -> f64 {
        self.ground
    }

    /// Move the time origin to elapsed time `t`, keeping the navigation window
    /// and marks on the same instants.
    pub fn set_zero(&mut self, t: f64) {
        let resolver = IndexResolver::new(&self.samples, Channel::Time, self.units);
        let Some(dp) = resolver.interpolate_at(t) else {
            return;
        };
        let shift = dp.t;
        self.zero = Some(dp.time);
        self.rederive();
        self.range = TimeRange::new(self.range.lower - shift, self.range.upper - shift);
        self.selection = match self.selection {
            Selection::None => Selection::None,
            Selection::Point(p) => Selection::Point(p - shift),
            Selection::Interval(a, b) => Selection::Interval(a - shift, b - shift),
        };
        debug!(shift, "time origin moved");
    }

    /// Use the height at elapsed time `t` as the ground reference.
    pub fn set_ground(&mut self, t: f64) {
        let resolver = IndexResolver::new(&self.samples, Channel::Time, self.units);
        let Some(dp) = resolver.interpolate_at(t) else {
            return;
        };
        self.ground = dp.h_msl;
        self.rederive();
        debug!(ground = self.ground, "ground reference changed");
    }

    fn rederive(&mut self) {
        derive_fields(&mut self.samples, self.zero, self.ground);
        derive_fields(&mut self.optimal, self.zero, self.ground);
    }
}

impl TrackSource for Track {
    fn samples(&self) -> &[Sample] {
        &self.samples
    }

    fn optimal_samples(&self) -> &[Sample] {
        &self.optimal
    }

    fn unit_system(&self) -> UnitSystem {
        self.units
    }
}

impl Navigation for Track {
    fn time_range(&self) -> TimeRange {
        self.range
    }

    fn set_time_range(&mut self, lower: f64, upper: f64) {
        self.range = TimeRange::new(lower.min(upper), lower.max(upper));
        trace!(lower = self.range.lower, upper = self.range.upper, "time range set");
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_point_mark(&mut self, t: f64) {
        self.selection = Selection::Point(t);
    }

    fn set_interval_mark(&mut self, t0: f64, t1: f64) {
        self.selection = Selection::Interval(t0, t1);
    }

    fn clear_mark(&mut self) {
        self.selection = Selection::None;
    }
}

/// Great-circle distance in meters.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let r = 6_371_000.0_f64;
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    r * c
}

/// Fill in every derived field of `samples` (ordered by time).
///
/// `zero` is the instant of elapsed time 0 (defaults to the first sample) and
/// `ground` the height that elevation is measured against.
pub fn derive_fields(samples: &mut [Sample], zero: Option<DateTime<Utc>>, ground: f64) {
    let Some(zero) = zero.or_else(|| samples.first().map(|dp| dp.time)) else {
        return;
    };

    let mut dist_2d = 0.0;
    let mut dist_3d = 0.0;
    let mut prev_course: Option<f64> = None;
    for i in 0..samples.len() {
        if i > 0 {
            let (prev, cur) = (&samples[i - 1], &samples[i]);
            let d2 = haversine_distance(prev.lat, prev.lon, cur.lat, cur.lon);
            let dh = cur.h_msl - prev.h_msl;
            dist_2d += d2;
            dist_3d += d2.hypot(dh);
        }

        let dp = &mut samples[i];
        dp.t = (dp.time - zero).num_nanoseconds().unwrap_or(0) as f64 * 1e-9;
        dp.z = dp.h_msl - ground;
        dp.dist_2d = dist_2d;
        dp.dist_3d = dist_3d;
        dp.energy = dp.total_speed().powi(2) / 2.0 + GRAVITY * dp.z;

        let heading = dp.vel_e.atan2(dp.vel_n).to_degrees();
        dp.course = match prev_course {
            Some(prev) => prev + wrap_degrees(heading - prev),
            None => heading,
        };
        prev_course = Some(dp.course);
    }

    for i in 0..samples.len() {
        let (lo, hi) = (i.saturating_sub(1), (i + 1).min(samples.len() - 1));
        if lo == hi {
            continue;
        }
        let (a, b) = (&samples[lo], &samples[hi]);
        let dt = b.t - a.t;
        if dt <= 0.0 {
            continue;
        }
        let accel = (b.total_speed() - a.total_speed()) / dt;
        let energy_rate = (b.energy - a.energy) / dt;
        let curvature = (b.dive_angle() - a.dive_angle()) / dt;
        let course_rate = (b.course - a.course) / dt;
        let a_ned = [
            (b.vel_n - a.vel_n) / dt,
            (b.vel_e - a.vel_e) / dt,
            (b.vel_d - a.vel_d) / dt,
        ];

        let dp = &mut samples[i];
        dp.accel = accel;
        dp.energy_rate = energy_rate;
        dp.curvature = curvature;
        dp.course_rate = course_rate;
        let (lift, drag) = lift_drag(dp, a_ned);
        dp.lift = lift;
        dp.drag = drag;
    }
}

fn wrap_degrees(mut d: f64) -> f64 {
    while d > 180.0 {
        d -= 360.0;
    }
    while d < -180.0 {
        d += 360.0;
    }
    d
}

/// Split the aerodynamic acceleration into lift (normal to velocity) and drag
/// (against velocity), both in g.
fn lift_drag(dp: &Sample, a_ned: [f64; 3]) -> (f64, f64) {
    let speed = dp.total_speed();
    if speed <= 0.0 {
        return (0.0, 0.0);
    }
    let v_hat = [dp.vel_n / speed, dp.vel_e / speed, dp.vel_d / speed];
    // Remove gravity (down is positive).
    let aero = [a_ned[0], a_ned[1], a_ned[2] - GRAVITY];
    let along = aero[0] * v_hat[0] + aero[1] * v_hat[1] + aero[2] * v_hat[2];
    let normal = [
        aero[0] - along * v_hat[0],
        aero[1] - along * v_hat[1],
        aero[2] - along * v_hat[2],
    ];
    let lift = (normal[0].powi(2) + normal[1].powi(2) + normal[2].powi(2)).sqrt();
    (lift / GRAVITY, -along / GRAVITY)
}
