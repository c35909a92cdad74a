//! RangeSync: conversion between axis coordinate ranges and the canonical time domain.
//!
//! The shared navigation window and every mark are kept as elapsed time. A
//! view only ever derives its displayed axis range from that time range, so
//! switching the axis channel cannot lose the logical selection.

use serde::{Deserialize, Serialize};

use crate::data::channel::Channel;
use crate::data::resolver::IndexResolver;
use crate::data::sample::Sample;
use crate::data::units::UnitSystem;

/// Range in units of the active axis channel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisRange {
    pub lower: f64,
    pub upper: f64,
}

/// Range in elapsed seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeRange {
    pub lower: f64,
    pub upper: f64,
}

impl AxisRange {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }

    /// Range with ordered endpoints.
    pub fn normalized(&self) -> Self {
        Self::new(self.lower.min(self.upper), self.lower.max(self.upper))
    }
}

impl TimeRange {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RangeSync<'a> {
    samples: &'a [Sample],
    units: UnitSystem,
}

impl<'a> RangeSync<'a> {
    pub fn new(samples: &'a [Sample], units: UnitSystem) -> Self {
        Self { samples, units }
    }

    /// Elapsed time at coordinate `x` of `axis`.
    pub fn time_at(&self, axis: Channel, x: f64) -> Option<f64> {
        IndexResolver::new(self.samples, axis, self.units).value_at(x, Channel::Time)
    }

    /// Coordinate of `axis` at elapsed time `t`.
    pub fn axis_at(&self, axis: Channel, t: f64) -> Option<f64> {
        IndexResolver::new(self.samples, Channel::Time, self.units).value_at(t, axis)
    }

    pub fn to_time_range(&self, axis: Channel, range: AxisRange) -> Option<TimeRange> {
        Some(TimeRange::new(
            self.time_at(axis, range.lower)?,
            self.time_at(axis, range.upper)?,
        ))
    }

    pub fn to_axis_range(&self, axis: Channel, range: TimeRange) -> Option<AxisRange> {
        Some(AxisRange::new(
            self.axis_at(axis, range.lower)?,
            self.axis_at(axis, range.upper)?,
        ))
    }

    /// Re-express `range` from axis `from` into axis `to` through the time domain.
    pub fn convert(&self, from: Channel, to: Channel, range: AxisRange) -> Option<AxisRange> {
        let time = self.to_time_range(from, range)?;
        self.to_axis_range(to, time)
    }
}
