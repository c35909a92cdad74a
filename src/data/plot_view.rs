//! DataPlot: the state of one plot view and the queries a renderer makes against it.
//!
//! A view owns its axis choice, its displayed x range and its channel looks.
//! It never owns samples: every call borrows the track, and navigation
//! changes are published to the track in elapsed time so all views stay in
//! step.

use tracing::{debug, trace};

use crate::data::aggregate::{WindowAggregator, WindowStats};
use crate::data::axis::AxisSelector;
use crate::data::channel::Channel;
use crate::data::channel_look::ChannelLooks;
use crate::data::range::{AxisRange, RangeSync};
use crate::data::readout::{interval_readout, point_readout, MarkReadout};
use crate::data::resolver::IndexResolver;
use crate::data::sample::Sample;
use crate::data::selection::Selection;
use crate::data::track::{Navigation, TrackSource};
use crate::data::units::UnitSystem;
use crate::error::EngineResult;

/// Divisor applied to wheel deltas when zooming.
pub const WHEEL_ZOOM_DIVISOR: f64 = 500.0;

#[derive(Debug, Clone, Default)]
pub struct DataPlot {
    axis: AxisSelector,
    pub looks: ChannelLooks,
    x_range: AxisRange,
}

impl DataPlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_axis(channel: Channel) -> EngineResult<Self> {
        Ok(Self {
            axis: AxisSelector::new(channel)?,
            ..Self::default()
        })
    }

    pub fn axis(&self) -> Channel {
        self.axis.current_axis()
    }

    /// Displayed x range, in units of the current axis.
    pub fn x_range(&self) -> AxisRange {
        self.x_range
    }

    /// Resolver over the main samples keyed by the current axis.
    pub fn resolver<'a, S: TrackSource + ?Sized>(&self, source: &'a S) -> IndexResolver<'a> {
        IndexResolver::new(source.samples(), self.axis(), source.unit_system())
    }

    fn optimal_resolver<'a, S: TrackSource + ?Sized>(&self, source: &'a S) -> IndexResolver<'a> {
        IndexResolver::new(source.optimal_samples(), self.axis(), source.unit_system())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Axis and range synchronization
    // ─────────────────────────────────────────────────────────────────────

    /// Switch the axis channel and re-derive the displayed range from the
    /// track's time range. Returns the newly displayed range.
    pub fn set_axis<S>(&mut self, track: &S, channel: Channel) -> EngineResult<AxisRange>
    where
        S: TrackSource + Navigation + ?Sized,
    {
        self.axis.set_axis(channel)?;
        self.update_range(track);
        Ok(self.x_range)
    }

    /// Recompute the displayed range from the track's time range.
    ///
    /// Must be called after the track's samples are replaced. An empty track
    /// resets the range to the default, never keeping numbers in another
    /// axis's units.
    pub fn update_range<S>(&mut self, track: &S) -> Option<AxisRange>
    where
        S: TrackSource + Navigation + ?Sized,
    {
        let sync = RangeSync::new(track.samples(), track.unit_system());
        let Some(range) = sync.to_axis_range(self.axis(), track.time_range()) else {
            self.x_range = AxisRange::default();
            return None;
        };
        self.x_range = range;
        debug!(axis = %self.axis(), lower = range.lower, upper = range.upper, "x range published");
        Some(range)
    }

    /// Navigate to `range` (current axis units) by publishing it to the track
    /// as a time range.
    pub fn set_range<S>(&mut self, track: &mut S, range: AxisRange) -> Option<AxisRange>
    where
        S: TrackSource + Navigation + ?Sized,
    {
        let sync = RangeSync::new(track.samples(), track.unit_system());
        let time = sync.to_time_range(self.axis(), range)?;
        track.set_time_range(time.lower, time.upper);
        self.update_range(&*track)
    }

    /// Zoom around coordinate `x`; positive wheel deltas zoom in.
    pub fn zoom_about<S>(&mut self, track: &mut S, x: f64, wheel_delta: f64) -> Option<AxisRange>
    where
        S: TrackSource + Navigation + ?Sized,
    {
        let multiplier = (-wheel_delta / WHEEL_ZOOM_DIVISOR).exp();
        let r = self.x_range;
        let range = AxisRange::new(x + (r.lower - x) * multiplier, x + (r.upper - x) * multiplier);
        self.set_range(track, range)
    }

    /// Shift the displayed range by `diff` axis units.
    pub fn pan_by<S>(&mut self, track: &mut S, diff: f64) -> Option<AxisRange>
    where
        S: TrackSource + Navigation + ?Sized,
    {
        let r = self.x_range;
        self.set_range(track, AxisRange::new(r.lower + diff, r.upper + diff))
    }

    /// Zoom to the span between two coordinates, in either order.
    pub fn zoom_to<S>(&mut self, track: &mut S, x0: f64, x1: f64) -> Option<AxisRange>
    where
        S: TrackSource + Navigation + ?Sized,
    {
        self.set_range(track, AxisRange::new(x0, x1).normalized())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Marks
    // ─────────────────────────────────────────────────────────────────────

    /// Mark the instant at coordinate `x`. Does nothing for an empty track.
    pub fn mark_point<S>(&self, track: &mut S, x: f64)
    where
        S: TrackSource + Navigation + ?Sized,
    {
        let sync = RangeSync::new(track.samples(), track.unit_system());
        if let Some(t) = sync.time_at(self.axis(), x) {
            trace!(x, t, "point mark");
            track.set_point_mark(t);
        }
    }

    /// Mark the interval between coordinates `x0` and `x1`.
    pub fn mark_interval<S>(&self, track: &mut S, x0: f64, x1: f64)
    where
        S: TrackSource + Navigation + ?Sized,
    {
        let sync = RangeSync::new(track.samples(), track.unit_system());
        if let (Some(t0), Some(t1)) = (sync.time_at(self.axis(), x0), sync.time_at(self.axis(), x1)) {
            trace!(x0, x1, t0, t1, "interval mark");
            track.set_interval_mark(t0, t1);
        }
    }

    pub fn clear_mark<S>(&self, track: &mut S)
    where
        S: Navigation + ?Sized,
    {
        track.clear_mark();
    }

    /// Axis coordinate and value of every visible series at the end of the
    /// current mark.
    pub fn mark_points<S>(&self, track: &S) -> Vec<(Channel, [f64; 2])>
    where
        S: TrackSource + Navigation + ?Sized,
    {
        let Some(t) = track.selection().end() else {
            return Vec::new();
        };
        let units = track.unit_system();
        let by_time = IndexResolver::new(track.samples(), Channel::Time, units);
        let Some(dp) = by_time.interpolate_at(t) else {
            return Vec::new();
        };
        let x = self.axis().value(&dp, units);
        self.looks
            .visible_series()
            .into_iter()
            .map(|ch| (ch, [x, ch.value(&dp, units)]))
            .collect()
    }

    /// Readout for the track's current mark.
    pub fn mark_readout<S>(&self, track: &S) -> Option<MarkReadout>
    where
        S: TrackSource + Navigation + ?Sized,
    {
        let by_time = IndexResolver::new(track.samples(), Channel::Time, track.unit_system());
        let series = self.looks.visible_series();
        match track.selection() {
            Selection::None => None,
            Selection::Point(t) => point_readout(&by_time, self.axis(), &series, t),
            Selection::Interval(t0, t1) => interval_readout(&by_time, self.axis(), &series, t0, t1),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Queries for the renderer
    // ─────────────────────────────────────────────────────────────────────

    /// Sample at coordinate `x` of the current axis, clamped to the track.
    pub fn interpolate_at<S: TrackSource + ?Sized>(&self, source: &S, x: f64) -> Option<Sample> {
        self.resolver(source).interpolate_at(x)
    }

    /// `(axis coordinate, value)` for every main sample.
    pub fn resolved_series<S: TrackSource + ?Sized>(&self, source: &S, channel: Channel) -> Vec<[f64; 2]> {
        resolve(source.samples(), self.axis(), channel, source.unit_system())
    }

    /// `(axis coordinate, value)` for every optimal sample; empty when the
    /// channel has no optimal overlay.
    pub fn resolved_optimal_series<S: TrackSource + ?Sized>(
        &self,
        source: &S,
        channel: Channel,
    ) -> Vec<[f64; 2]> {
        if !channel.has_optimal() {
            return Vec::new();
        }
        resolve(source.optimal_samples(), self.axis(), channel, source.unit_system())
    }

    pub fn aggregate<S: TrackSource + ?Sized>(
        &self,
        source: &S,
        range: AxisRange,
        channel: Channel,
    ) -> Option<WindowStats> {
        WindowAggregator::from_resolver(self.resolver(source)).aggregate(range.lower, range.upper, channel)
    }

    /// Same as [`aggregate`](Self::aggregate), over the optimal samples.
    pub fn aggregate_optimal<S: TrackSource + ?Sized>(
        &self,
        source: &S,
        range: AxisRange,
        channel: Channel,
    ) -> Option<WindowStats> {
        WindowAggregator::from_resolver(self.optimal_resolver(source))
            .aggregate(range.lower, range.upper, channel)
    }

    /// Statistics for every visible series over `range`.
    pub fn aggregate_visible<S: TrackSource + ?Sized>(
        &self,
        source: &S,
        range: AxisRange,
    ) -> Vec<(Channel, WindowStats)> {
        WindowAggregator::from_resolver(self.resolver(source)).aggregate_all(
            range.lower,
            range.upper,
            &self.looks.visible_series(),
        )
    }

    /// Y range of every visible series over the displayed x range.
    ///
    /// Includes optimal samples for channels with an optimal overlay. Active
    /// clamps replace the fitted bound. Channels without any sample in range
    /// are omitted.
    pub fn y_ranges<S: TrackSource + ?Sized>(&self, source: &S) -> Vec<(Channel, (f64, f64))> {
        let units = source.unit_system();
        let axis = self.axis();
        let x_range = self.x_range.normalized();

        self.looks
            .visible_series()
            .into_iter()
            .filter_map(|ch| {
                let optimal: &[Sample] = if ch.has_optimal() {
                    source.optimal_samples()
                } else {
                    &[]
                };
                let fitted = source
                    .samples()
                    .iter()
                    .chain(optimal.iter())
                    .filter(|dp| x_range.contains(axis.value(dp, units)))
                    .map(|dp| ch.value(dp, units))
                    .fold(None, |acc: Option<(f64, f64)>, y| match acc {
                        None => Some((y, y)),
                        Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
                    })?;
                let clamp = self.looks.clamp(ch);
                Some((ch, clamp.apply(fitted, ch.factor(units))))
            })
            .collect()
    }
}

fn resolve(
    samples: &[Sample],
    axis: Channel,
    channel: Channel,
    units: UnitSystem,
) -> Vec<[f64; 2]> {
    samples
        .iter()
        .map(|dp| [axis.value(dp, units), channel.value(dp, units)])
        .collect()
}
