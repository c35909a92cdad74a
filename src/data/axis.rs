//! AxisSelector: owns the channel that currently defines the horizontal coordinate.

use tracing::debug;

use crate::data::channel::Channel;
use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisSelector {
    current: Channel,
}

impl Default for AxisSelector {
    fn default() -> Self {
        Self {
            current: Channel::Time,
        }
    }
}

impl AxisSelector {
    /// Selector starting on `channel`; fails if the channel is not axis-eligible.
    pub fn new(channel: Channel) -> EngineResult<Self> {
        let mut selector = Self::default();
        selector.set_axis(channel)?;
        Ok(selector)
    }

    /// Select the axis channel. Only monotonic channels ([`Channel::AXES`]) are accepted.
    pub fn set_axis(&mut self, channel: Channel) -> EngineResult<()> {
        if !channel.is_axis_eligible() {
            return Err(EngineError::NotAxisEligible(channel));
        }
        if channel != self.current {
            debug!(from = %self.current, to = %channel, "axis channel changed");
        }
        self.current = channel;
        Ok(())
    }

    pub fn current_axis(&self) -> Channel {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_series_channel() {
        let mut sel = AxisSelector::default();
        let err = sel.set_axis(Channel::Elevation).unwrap_err();
        assert!(matches!(err, EngineError::NotAxisEligible(Channel::Elevation)));
        assert_eq!(sel.current_axis(), Channel::Time);
    }

    #[test]
    fn accepts_every_axis_channel() {
        let mut sel = AxisSelector::default();
        for ch in Channel::AXES {
            sel.set_axis(ch).unwrap();
            assert_eq!(sel.current_axis(), ch);
        }
    }
}
