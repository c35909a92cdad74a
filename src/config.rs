//! Engine configuration: unit system, default axis and per-channel overrides.
//!
//! Configuration is plain serde data and can be read from JSON or YAML text.
//! The unit system belongs to the track; the axis and looks to each view.
//! Reading and writing files is left to the host application.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::channel::{Channel, Clamp};
use crate::data::plot_view::DataPlot;
use crate::data::track::Track;
use crate::data::units::UnitSystem;
use crate::error::{EngineError, EngineResult};

/// Override of a series channel's default look. Unset fields keep the default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelOverride {
    pub visible: Option<bool>,
    pub color: Option<[u8; 3]>,
    pub clamp: Option<Clamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub units: UnitSystem,
    /// Initial x axis; must be one of [`Channel::AXES`].
    pub axis: Channel,
    pub channels: BTreeMap<Channel, ChannelOverride>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            units: UnitSystem::Metric,
            axis: Channel::Time,
            channels: BTreeMap::new(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(input: &str) -> EngineResult<Self> {
        let cfg: Self = serde_json::from_str(input)
            .map_err(|e| EngineError::Config(format!("failed to parse JSON config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_str(input: &str) -> EngineResult<Self> {
        let cfg: Self = serde_yaml::from_str(input)
            .map_err(|e| EngineError::Config(format!("failed to parse YAML config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json_pretty(&self) -> EngineResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| EngineError::Config(format!("failed to serialize config: {e}")))
    }

    pub fn to_yaml(&self) -> EngineResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| EngineError::Config(format!("failed to serialize config: {e}")))
    }

    pub fn validate(&self) -> EngineResult<()> {
        if !self.axis.is_axis_eligible() {
            return Err(EngineError::NotAxisEligible(self.axis));
        }
        if let Some(ch) = self.channels.keys().find(|ch| ch.is_axis_eligible()) {
            return Err(EngineError::Config(format!(
                "axis channel {ch} has no display settings"
            )));
        }
        Ok(())
    }

    /// Reset a view to this config's axis and channel looks.
    ///
    /// The displayed range is cleared; call [`DataPlot::update_range`] once a
    /// track is attached.
    pub fn apply_to(&self, plot: &mut DataPlot) -> EngineResult<()> {
        self.validate()?;
        let mut fresh = DataPlot::with_axis(self.axis)?;
        for (ch, ov) in &self.channels {
            let Some(look) = fresh.looks.get_mut(*ch) else {
                continue;
            };
            if let Some(visible) = ov.visible {
                look.visible = visible;
            }
            if let Some(color) = ov.color {
                look.color = color;
            }
            if let Some(clamp) = ov.clamp {
                look.clamp = clamp;
            }
        }
        debug!(axis = %self.axis, overrides = self.channels.len(), "config applied");
        *plot = fresh;
        Ok(())
    }

    /// Switch `track` to this config's unit system.
    pub fn apply_units_to(&self, track: &mut Track) {
        track.set_units(self.units);
        debug!(units = %self.units, "unit system applied");
    }

    /// New view configured from this config.
    pub fn build_plot(&self) -> EngineResult<DataPlot> {
        let mut plot = DataPlot::new();
        self.apply_to(&mut plot)?;
        Ok(plot)
    }
}
