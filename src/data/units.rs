//! Unit systems used when evaluating channels.

use serde::{Deserialize, Serialize};

pub const METERS_TO_FEET: f64 = 3.280_839_895;
pub const MPS_TO_KMH: f64 = 3.6;
pub const MPS_TO_MPH: f64 = 2.236_936_292;
/// Standard gravity in m/s².
pub const GRAVITY: f64 = 9.806_65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Factor converting meters into the display length unit.
    pub fn length_factor(&self) -> f64 {
        match self {
            UnitSystem::Metric => 1.0,
            UnitSystem::Imperial => METERS_TO_FEET,
        }
    }

    /// Factor converting m/s into the display speed unit.
    pub fn speed_factor(&self) -> f64 {
        match self {
            UnitSystem::Metric => MPS_TO_KMH,
            UnitSystem::Imperial => MPS_TO_MPH,
        }
    }

    pub fn length_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "m",
            UnitSystem::Imperial => "ft",
        }
    }

    pub fn speed_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "km/h",
            UnitSystem::Imperial => "mph",
        }
    }

    pub fn acceleration_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "m/s²",
            UnitSystem::Imperial => "ft/s²",
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}
