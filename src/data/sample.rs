//! Sample: one timestamped GNSS measurement plus its derived physical fields.

use chrono::{DateTime, Duration, Utc};

/// One immutable track sample.
///
/// The raw fields come from the receiver; the derived fields are filled in
/// once when the track is built (see [`crate::data::track::derive_fields`]).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sample {
    /// Absolute UTC timestamp.
    pub time: DateTime<Utc>,
    /// Elapsed seconds relative to the track's zero.
    pub t: f64,

    pub lat: f64,
    pub lon: f64,
    /// Height above mean sea level (m).
    pub h_msl: f64,

    /// Velocity north (m/s).
    pub vel_n: f64,
    /// Velocity east (m/s).
    pub vel_e: f64,
    /// Velocity down (m/s); positive while descending.
    pub vel_d: f64,

    pub h_acc: f64,
    pub v_acc: f64,
    pub s_acc: f64,
    /// Heading accuracy (deg).
    pub heading_acc: f64,
    pub num_sv: u32,

    // Derived fields.
    /// Elevation above the ground reference (m).
    pub z: f64,
    pub dist_2d: f64,
    pub dist_3d: f64,
    /// Rate of change of the dive angle (deg/s).
    pub curvature: f64,
    /// Rate of change of total speed (m/s²).
    pub accel: f64,
    /// Specific energy, kinetic plus potential (J/kg).
    pub energy: f64,
    /// Rate of change of specific energy (W/kg).
    pub energy_rate: f64,
    /// Aerodynamic acceleration normal to the velocity (g).
    pub lift: f64,
    /// Aerodynamic acceleration against the velocity (g).
    pub drag: f64,
    /// Continuous (unwrapped) course over ground (deg).
    pub course: f64,
    pub course_rate: f64,
}

fn lerp(a: f64, b: f64, f: f64) -> f64 {
    a + (b - a) * f
}

impl Sample {
    /// Horizontal speed (m/s).
    pub fn ground_speed(&self) -> f64 {
        self.vel_n.hypot(self.vel_e)
    }

    /// Total speed (m/s).
    pub fn total_speed(&self) -> f64 {
        self.ground_speed().hypot(self.vel_d)
    }

    /// Dive angle below the horizon (deg).
    pub fn dive_angle(&self) -> f64 {
        self.vel_d.atan2(self.ground_speed()).to_degrees()
    }

    /// Linearly interpolate every field between `p1` (at `f = 0`) and `p2` (at `f = 1`).
    ///
    /// `num_sv` stays a count: the blended value is rounded to the nearest integer.
    pub fn interpolate(p1: &Sample, p2: &Sample, f: f64) -> Sample {
        let span_ns = (p2.time - p1.time).num_nanoseconds().unwrap_or(0) as f64;
        let num_sv = lerp(p1.num_sv as f64, p2.num_sv as f64, f).round().max(0.0) as u32;
        Sample {
            time: p1.time + Duration::nanoseconds((span_ns * f).round() as i64),
            t: lerp(p1.t, p2.t, f),
            lat: lerp(p1.lat, p2.lat, f),
            lon: lerp(p1.lon, p2.lon, f),
            h_msl: lerp(p1.h_msl, p2.h_msl, f),
            vel_n: lerp(p1.vel_n, p2.vel_n, f),
            vel_e: lerp(p1.vel_e, p2.vel_e, f),
            vel_d: lerp(p1.vel_d, p2.vel_d, f),
            h_acc: lerp(p1.h_acc, p2.h_acc, f),
            v_acc: lerp(p1.v_acc, p2.v_acc, f),
            s_acc: lerp(p1.s_acc, p2.s_acc, f),
            heading_acc: lerp(p1.heading_acc, p2.heading_acc, f),
            num_sv,
            z: lerp(p1.z, p2.z, f),
            dist_2d: lerp(p1.dist_2d, p2.dist_2d, f),
            dist_3d: lerp(p1.dist_3d, p2.dist_3d, f),
            curvature: lerp(p1.curvature, p2.curvature, f),
            accel: lerp(p1.accel, p2.accel, f),
            energy: lerp(p1.energy, p2.energy, f),
            energy_rate: lerp(p1.energy_rate, p2.energy_rate, f),
            lift: lerp(p1.lift, p2.lift, f),
            drag: lerp(p1.drag, p2.drag, f),
            course: lerp(p1.course, p2.course, f),
            course_rate: lerp(p1.course_rate, p2.course_rate, f),
        }
    }
}
