//! ChannelLook: per-view display state of a channel (color, visibility, clamps).

use std::collections::BTreeMap;

use crate::data::channel::{Channel, Clamp};

/// The mutable presentation of one channel inside a view.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelLook {
    pub color: [u8; 3],
    pub visible: bool,
    pub clamp: Clamp,
}

impl ChannelLook {
    /// Look initialised from the channel's built-in defaults.
    pub fn new(channel: Channel) -> Self {
        Self {
            color: channel.color(),
            visible: channel.default_visible(),
            clamp: channel.default_clamp(),
        }
    }
}

/// Looks for every series channel of one view.
#[derive(Debug, Clone)]
pub struct ChannelLooks {
    looks: BTreeMap<Channel, ChannelLook>,
}

impl Default for ChannelLooks {
    fn default() -> Self {
        Self {
            looks: Channel::SERIES
                .into_iter()
                .map(|ch| (ch, ChannelLook::new(ch)))
                .collect(),
        }
    }
}

impl ChannelLooks {
    pub fn get(&self, channel: Channel) -> Option<&ChannelLook> {
        self.looks.get(&channel)
    }

    pub fn get_mut(&mut self, channel: Channel) -> Option<&mut ChannelLook> {
        self.looks.get_mut(&channel)
    }

    pub fn is_visible(&self, channel: Channel) -> bool {
        self.looks.get(&channel).is_some_and(|l| l.visible)
    }

    /// Show or hide a series channel. Axis channels have no look and are ignored.
    pub fn set_visible(&mut self, channel: Channel, visible: bool) {
        if let Some(look) = self.looks.get_mut(&channel) {
            look.visible = visible;
        }
    }

    pub fn toggle(&mut self, channel: Channel) {
        if let Some(look) = self.looks.get_mut(&channel) {
            look.visible = !look.visible;
        }
    }

    /// Visible series channels in legend order.
    pub fn visible_series(&self) -> Vec<Channel> {
        Channel::SERIES
            .into_iter()
            .filter(|ch| self.is_visible(*ch))
            .collect()
    }

    /// Clamp of `channel`, falling back to the built-in default.
    pub fn clamp(&self, channel: Channel) -> Clamp {
        self.looks
            .get(&channel)
            .map(|l| l.clamp)
            .unwrap_or_else(|| channel.default_clamp())
    }
}
