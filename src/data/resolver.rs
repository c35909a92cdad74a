//! Index resolution and interpolation along an axis channel.
//!
//! The sample slice is ordered by time and the axis channel is assumed
//! monotonic non-decreasing over it, so every lookup is a binary search keyed
//! by the channel value.

use crate::data::channel::Channel;
use crate::data::sample::Sample;
use crate::data::units::UnitSystem;

/// Where a coordinate falls relative to the samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// No samples at all.
    Empty,
    /// At or before the first sample's coordinate.
    Start,
    /// Beyond the last sample's coordinate.
    End,
    /// `coord(below) < x <= coord(above)`, with `above == below + 1`.
    Between { below: usize, above: usize },
}

/// Binary-search view of a sample slice keyed by one axis channel.
#[derive(Debug, Clone, Copy)]
pub struct IndexResolver<'a> {
    samples: &'a [Sample],
    axis: Channel,
    units: UnitSystem,
}

impl<'a> IndexResolver<'a> {
    pub fn new(samples: &'a [Sample], axis: Channel, units: UnitSystem) -> Self {
        Self { samples, axis, units }
    }

    pub fn samples(&self) -> &'a [Sample] {
        self.samples
    }

    pub fn axis(&self) -> Channel {
        self.axis
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }

    #[inline]
    fn coord(&self, dp: &Sample) -> f64 {
        self.axis.value(dp, self.units)
    }

    /// Axis coordinate of sample `i`.
    pub fn coord_at(&self, i: usize) -> Option<f64> {
        self.samples.get(i).map(|dp| self.coord(dp))
    }

    /// Coordinate span `(first, last)` of the samples.
    pub fn span(&self) -> Option<(f64, f64)> {
        let first = self.samples.first()?;
        let last = self.samples.last()?;
        Some((self.coord(first), self.coord(last)))
    }

    /// Largest index whose coordinate is strictly below `x`.
    pub fn index_below(&self, x: f64) -> Option<usize> {
        self.samples
            .partition_point(|dp| self.coord(dp) < x)
            .checked_sub(1)
    }

    /// Smallest index whose coordinate is strictly above `x`.
    pub fn index_above(&self, x: f64) -> Option<usize> {
        let idx = self.samples.partition_point(|dp| self.coord(dp) <= x);
        (idx < self.samples.len()).then_some(idx)
    }

    pub fn bracket(&self, x: f64) -> Bracket {
        if self.samples.is_empty() {
            return Bracket::Empty;
        }
        let above = self.samples.partition_point(|dp| self.coord(dp) < x);
        if above == 0 {
            Bracket::Start
        } else if above == self.samples.len() {
            Bracket::End
        } else {
            Bracket::Between {
                below: above - 1,
                above,
            }
        }
    }

    /// Sample at coordinate `x`, clamped to the first/last sample outside the span.
    ///
    /// Returns `None` only when there are no samples.
    pub fn interpolate_at(&self, x: f64) -> Option<Sample> {
        match self.bracket(x) {
            Bracket::Empty => None,
            Bracket::Start => self.samples.first().cloned(),
            Bracket::End => self.samples.last().cloned(),
            Bracket::Between { below, above } => {
                let dp1 = &self.samples[below];
                let dp2 = &self.samples[above];
                let x1 = self.coord(dp1);
                let x2 = self.coord(dp2);
                // On a non-decreasing axis x1 < x <= x2, so a run of repeated
                // coordinates resolves to its first sample through the exact hit.
                if x == x2 {
                    Some(dp2.clone())
                } else if x1 < x && x < x2 {
                    Some(Sample::interpolate(dp1, dp2, (x - x1) / (x2 - x1)))
                } else {
                    // Only an axis that steps backwards (or NaN) lands here.
                    Some(dp1.clone())
                }
            }
        }
    }

    /// Value of `channel` at coordinate `x`.
    pub fn value_at(&self, x: f64, channel: Channel) -> Option<f64> {
        self.interpolate_at(x)
            .map(|dp| channel.value(&dp, self.units))
    }
}
