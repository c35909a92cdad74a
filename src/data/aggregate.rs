//! Windowed statistics over an axis interval.
//!
//! The mean is time weighted: every segment contributes the trapezoid
//! `avg(y1, y2) * |dt|` with `dt` taken from elapsed time, never from the
//! axis coordinate. Partial segments at both window edges start/end at the
//! interpolated boundary samples.

use serde::{Deserialize, Serialize};

use crate::data::channel::Channel;
use crate::data::resolver::IndexResolver;
use crate::data::sample::Sample;
use crate::data::units::UnitSystem;

/// Statistics of one channel over one window, in display units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowStats {
    pub value_at_end: f64,
    /// `value(end) - value(start)`, with the endpoints in the order given.
    pub delta: f64,
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct WindowAggregator<'a> {
    resolver: IndexResolver<'a>,
}

impl<'a> WindowAggregator<'a> {
    pub fn new(samples: &'a [Sample], axis: Channel, units: UnitSystem) -> Self {
        Self {
            resolver: IndexResolver::new(samples, axis, units),
        }
    }

    pub fn from_resolver(resolver: IndexResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Statistics of `channel` between axis coordinates `start` and `end`.
    ///
    /// `start` may be greater than `end`. Returns `None` for an empty track.
    pub fn aggregate(&self, start: f64, end: f64, channel: Channel) -> Option<WindowStats> {
        let window = Window::resolve(&self.resolver, start, end)?;
        Some(window.stats(channel, self.resolver.units()))
    }

    /// Statistics for each of `channels`, sharing one boundary resolution.
    pub fn aggregate_all(
        &self,
        start: f64,
        end: f64,
        channels: &[Channel],
    ) -> Vec<(Channel, WindowStats)> {
        let Some(window) = Window::resolve(&self.resolver, start, end) else {
            return Vec::new();
        };
        let units = self.resolver.units();
        channels
            .iter()
            .map(|&ch| (ch, window.stats(ch, units)))
            .collect()
    }
}

/// Resolved boundary samples and inner index span of one window.
struct Window<'a> {
    dp_start: Sample,
    dp_end: Sample,
    dp_low: Sample,
    dp_high: Sample,
    inner: &'a [Sample],
}

impl<'a> Window<'a> {
    fn resolve(resolver: &IndexResolver<'a>, start: f64, end: f64) -> Option<Self> {
        let low = start.min(end);
        let high = start.max(end);

        let dp_start = resolver.interpolate_at(start)?;
        let dp_end = resolver.interpolate_at(end)?;
        let dp_low = resolver.interpolate_at(low)?;
        let dp_high = resolver.interpolate_at(high)?;

        // Samples strictly inside (low, high).
        let inner: &'a [Sample] = match (resolver.index_above(low), resolver.index_below(high)) {
            (Some(j_min), Some(j_max)) if j_min <= j_max => &resolver.samples()[j_min..=j_max],
            _ => &[],
        };

        Some(Self {
            dp_start,
            dp_end,
            dp_low,
            dp_high,
            inner,
        })
    }

    fn stats(&self, channel: Channel, units: UnitSystem) -> WindowStats {
        let value_at_end = channel.value(&self.dp_end, units);
        let delta = value_at_end - channel.value(&self.dp_start, units);

        let points = std::iter::once(&self.dp_low)
            .chain(self.inner.iter())
            .chain(std::iter::once(&self.dp_high));

        let mut prev: Option<(f64, f64)> = None;
        let mut sum = 0.0;
        let mut dt_sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for dp in points {
            let t = dp.t;
            let y = channel.value(dp, units);
            min = min.min(y);
            max = max.max(y);
            if let Some((t0, y0)) = prev {
                let dt = (t - t0).abs();
                sum += (y0 + y) / 2.0 * dt;
                dt_sum += dt;
            }
            prev = Some((t, y));
        }

        if dt_sum > 0.0 {
            WindowStats {
                value_at_end,
                delta,
                min,
                // Rounding can push the quotient just outside [min, max].
                mean: (sum / dt_sum).max(min).min(max),
                max,
            }
        } else {
            // Zero duration: the window collapses onto its boundary sample.
            WindowStats {
                value_at_end,
                delta: 0.0,
                min: value_at_end,
                mean: value_at_end,
                max: value_at_end,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_track() -> Vec<Sample> {
        (0..3)
            .map(|i| Sample {
                t: i as f64,
                z: 10.0 * i as f64,
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn empty_track_has_no_stats() {
        let agg = WindowAggregator::new(&[], Channel::Time, UnitSystem::Metric);
        assert!(agg.aggregate(0.0, 1.0, Channel::Elevation).is_none());
        assert!(agg.aggregate_all(0.0, 1.0, &[Channel::Elevation]).is_empty());
    }

    #[test]
    fn reversed_window_keeps_signed_delta() {
        let track = linear_track();
        let agg = WindowAggregator::new(&track, Channel::Time, UnitSystem::Metric);
        let s = agg.aggregate(2.0, 0.0, Channel::Elevation).unwrap();
        assert!((s.delta + 20.0).abs() < 1e-9);
        assert!((s.value_at_end - 0.0).abs() < 1e-9);
        assert!((s.mean - 10.0).abs() < 1e-9);
    }
}
