//! Channels: the closed set of scalar quantities derivable from a [`Sample`].
//!
//! Every channel is a pure function of a sample and a unit system. Dispatch is
//! a single exhaustive `match` per capability, so adding a channel is checked
//! by the compiler everywhere it matters.
//!
//! Two disjoint subsets exist:
//! - axis channels ([`Channel::AXES`]) are monotonic non-decreasing along a
//!   track and may define the horizontal coordinate;
//! - series channels ([`Channel::SERIES`]) are the plotted/measured quantities.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::sample::Sample;
use crate::data::units::UnitSystem;
use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    // Axis channels
    Time,
    #[serde(rename = "distance_2d")]
    Distance2D,
    #[serde(rename = "distance_3d")]
    Distance3D,

    // Series channels
    Elevation,
    VerticalSpeed,
    HorizontalSpeed,
    TotalSpeed,
    DiveAngle,
    Curvature,
    GlideRatio,
    HorizontalAccuracy,
    VerticalAccuracy,
    SpeedAccuracy,
    NumberOfSatellites,
    Acceleration,
    TotalEnergy,
    EnergyRate,
    Lift,
    Drag,
    Course,
    CourseRate,
    CourseAccuracy,
}

/// Fixed display bounds for a channel, stored in base (SI) units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Clamp {
    pub minimum: f64,
    pub use_minimum: bool,
    pub maximum: f64,
    pub use_maximum: bool,
}

impl Clamp {
    pub const NONE: Clamp = Clamp {
        minimum: 0.0,
        use_minimum: false,
        maximum: 0.0,
        use_maximum: false,
    };

    /// Apply the active bounds to a fitted `(lower, upper)` display range.
    ///
    /// `factor` converts the stored base-unit bounds into display units.
    pub fn apply(&self, fitted: (f64, f64), factor: f64) -> (f64, f64) {
        let lower = if self.use_minimum { self.minimum * factor } else { fitted.0 };
        let upper = if self.use_maximum { self.maximum * factor } else { fitted.1 };
        (lower, upper)
    }
}

impl Channel {
    /// Channels eligible for the horizontal axis.
    pub const AXES: [Channel; 3] = [Channel::Time, Channel::Distance2D, Channel::Distance3D];

    /// Plotted quantities, in legend order.
    pub const SERIES: [Channel; 19] = [
        Channel::Elevation,
        Channel::VerticalSpeed,
        Channel::HorizontalSpeed,
        Channel::TotalSpeed,
        Channel::DiveAngle,
        Channel::Curvature,
        Channel::GlideRatio,
        Channel::HorizontalAccuracy,
        Channel::VerticalAccuracy,
        Channel::SpeedAccuracy,
        Channel::NumberOfSatellites,
        Channel::Acceleration,
        Channel::TotalEnergy,
        Channel::EnergyRate,
        Channel::Lift,
        Channel::Drag,
        Channel::Course,
        Channel::CourseRate,
        Channel::CourseAccuracy,
    ];

    pub fn is_axis_eligible(self) -> bool {
        matches!(self, Channel::Time | Channel::Distance2D | Channel::Distance3D)
    }

    /// Iterate over every channel, axis channels first.
    pub fn all() -> impl Iterator<Item = Channel> {
        Self::AXES.into_iter().chain(Self::SERIES)
    }

    /// Value in base units (s, m, m/s, deg, ...), before unit conversion.
    pub fn raw_value(self, dp: &Sample) -> f64 {
        match self {
            Channel::Time => dp.t,
            Channel::Distance2D => dp.dist_2d,
            Channel::Distance3D => dp.dist_3d,
            Channel::Elevation => dp.z,
            Channel::VerticalSpeed => dp.vel_d,
            Channel::HorizontalSpeed => dp.ground_speed(),
            Channel::TotalSpeed => dp.total_speed(),
            Channel::DiveAngle => dp.dive_angle(),
            Channel::Curvature => dp.curvature,
            Channel::GlideRatio => {
                if dp.vel_d != 0.0 {
                    dp.ground_speed() / dp.vel_d
                } else {
                    0.0
                }
            }
            Channel::HorizontalAccuracy => dp.h_acc,
            Channel::VerticalAccuracy => dp.v_acc,
            Channel::SpeedAccuracy => dp.s_acc,
            Channel::NumberOfSatellites => dp.num_sv as f64,
            Channel::Acceleration => dp.accel,
            Channel::TotalEnergy => dp.energy,
            Channel::EnergyRate => dp.energy_rate,
            Channel::Lift => dp.lift,
            Channel::Drag => dp.drag,
            Channel::Course => dp.course,
            Channel::CourseRate => dp.course_rate,
            Channel::CourseAccuracy => dp.heading_acc,
        }
    }

    /// Conversion factor from base units into the display unit of `units`.
    pub fn factor(self, units: UnitSystem) -> f64 {
        match self {
            Channel::Distance2D
            | Channel::Distance3D
            | Channel::Elevation
            | Channel::HorizontalAccuracy
            | Channel::VerticalAccuracy
            | Channel::Acceleration => units.length_factor(),
            Channel::VerticalSpeed
            | Channel::HorizontalSpeed
            | Channel::TotalSpeed
            | Channel::SpeedAccuracy => units.speed_factor(),
            Channel::Time
            | Channel::DiveAngle
            | Channel::Curvature
            | Channel::GlideRatio
            | Channel::NumberOfSatellites
            | Channel::TotalEnergy
            | Channel::EnergyRate
            | Channel::Lift
            | Channel::Drag
            | Channel::Course
            | Channel::CourseRate
            | Channel::CourseAccuracy => 1.0,
        }
    }

    /// Display value of this channel for `dp`.
    #[inline]
    pub fn value(self, dp: &Sample, units: UnitSystem) -> f64 {
        self.raw_value(dp) * self.factor(units)
    }

    /// Axis/legend label including the display unit.
    pub fn title(self, units: UnitSystem) -> String {
        let len = units.length_unit();
        let spd = units.speed_unit();
        match self {
            Channel::Time => "Time (s)".to_string(),
            Channel::Distance2D => format!("Horizontal Distance ({len})"),
            Channel::Distance3D => format!("Total Distance ({len})"),
            Channel::Elevation => format!("Elevation ({len})"),
            Channel::VerticalSpeed => format!("Vertical Speed ({spd})"),
            Channel::HorizontalSpeed => format!("Horizontal Speed ({spd})"),
            Channel::TotalSpeed => format!("Total Speed ({spd})"),
            Channel::DiveAngle => "Dive Angle (deg)".to_string(),
            Channel::Curvature => "Curvature (deg/s)".to_string(),
            Channel::GlideRatio => "Glide Ratio".to_string(),
            Channel::HorizontalAccuracy => format!("Horizontal Accuracy ({len})"),
            Channel::VerticalAccuracy => format!("Vertical Accuracy ({len})"),
            Channel::SpeedAccuracy => format!("Speed Accuracy ({spd})"),
            Channel::NumberOfSatellites => "Number of Satellites".to_string(),
            Channel::Acceleration => format!("Acceleration ({})", units.acceleration_unit()),
            Channel::TotalEnergy => "Total Energy (J/kg)".to_string(),
            Channel::EnergyRate => "Energy Rate (W/kg)".to_string(),
            Channel::Lift => "Lift (g)".to_string(),
            Channel::Drag => "Drag (g)".to_string(),
            Channel::Course => "Course (deg)".to_string(),
            Channel::CourseRate => "Course Rate (deg/s)".to_string(),
            Channel::CourseAccuracy => "Course Accuracy (deg)".to_string(),
        }
    }

    /// Default trace color as RGB.
    pub fn color(self) -> [u8; 3] {
        match self {
            Channel::Time | Channel::Distance2D | Channel::Distance3D => [0, 0, 0],
            Channel::Elevation => [0, 0, 0],
            Channel::VerticalSpeed => [0, 128, 0],
            Channel::HorizontalSpeed => [255, 0, 0],
            Channel::TotalSpeed => [0, 0, 255],
            Channel::DiveAngle => [255, 0, 255],
            Channel::Curvature => [128, 0, 128],
            Channel::GlideRatio => [0, 128, 128],
            Channel::HorizontalAccuracy => [0, 0, 0],
            Channel::VerticalAccuracy => [0, 0, 0],
            Channel::SpeedAccuracy => [0, 0, 0],
            Channel::NumberOfSatellites => [128, 128, 128],
            Channel::Acceleration => [128, 128, 0],
            Channel::TotalEnergy => [128, 0, 0],
            Channel::EnergyRate => [128, 0, 0],
            Channel::Lift => [255, 0, 0],
            Channel::Drag => [0, 0, 255],
            Channel::Course => [0, 0, 128],
            Channel::CourseRate => [0, 0, 128],
            Channel::CourseAccuracy => [0, 0, 0],
        }
    }

    /// Whether the channel is shown when no explicit setting exists.
    pub fn default_visible(self) -> bool {
        matches!(
            self,
            Channel::Elevation | Channel::VerticalSpeed | Channel::HorizontalSpeed
        )
    }

    pub fn default_clamp(self) -> Clamp {
        match self {
            Channel::GlideRatio => Clamp {
                minimum: 0.0,
                use_minimum: true,
                maximum: 5.0,
                use_maximum: true,
            },
            Channel::DiveAngle => Clamp {
                minimum: -90.0,
                use_minimum: false,
                maximum: 90.0,
                use_maximum: false,
            },
            Channel::NumberOfSatellites => Clamp {
                minimum: 0.0,
                use_minimum: true,
                maximum: 0.0,
                use_maximum: false,
            },
            _ => Clamp::NONE,
        }
    }

    /// Whether an optimal (reference trajectory) overlay applies to this channel.
    pub fn has_optimal(self) -> bool {
        matches!(
            self,
            Channel::Elevation
                | Channel::VerticalSpeed
                | Channel::HorizontalSpeed
                | Channel::TotalSpeed
                | Channel::DiveAngle
                | Channel::GlideRatio
                | Channel::Lift
                | Channel::Drag
        )
    }

    /// Stable machine name, matching the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            Channel::Time => "time",
            Channel::Distance2D => "distance_2d",
            Channel::Distance3D => "distance_3d",
            Channel::Elevation => "elevation",
            Channel::VerticalSpeed => "vertical_speed",
            Channel::HorizontalSpeed => "horizontal_speed",
            Channel::TotalSpeed => "total_speed",
            Channel::DiveAngle => "dive_angle",
            Channel::Curvature => "curvature",
            Channel::GlideRatio => "glide_ratio",
            Channel::HorizontalAccuracy => "horizontal_accuracy",
            Channel::VerticalAccuracy => "vertical_accuracy",
            Channel::SpeedAccuracy => "speed_accuracy",
            Channel::NumberOfSatellites => "number_of_satellites",
            Channel::Acceleration => "acceleration",
            Channel::TotalEnergy => "total_energy",
            Channel::EnergyRate => "energy_rate",
            Channel::Lift => "lift",
            Channel::Drag => "drag",
            Channel::Course => "course",
            Channel::CourseRate => "course_rate",
            Channel::CourseAccuracy => "course_accuracy",
        }
    }
}

impl FromStr for Channel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::all()
            .find(|c| c.key() == s)
            .ok_or_else(|| EngineError::UnknownChannel(s.to_string()))
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
