//! Mark readouts: the tooltip/status content for a point or interval mark.
//!
//! Readouts are plain data ([`MarkReadout`]) so a UI can lay them out however
//! it likes; the [`Display`](std::fmt::Display) impl renders a compact text table.

use chrono::{DateTime, Utc};

use crate::data::aggregate::{WindowAggregator, WindowStats};
use crate::data::channel::Channel;
use crate::data::resolver::IndexResolver;

// ─────────────────────────────────────────────────────────────────────────────
// Timestamps
// ─────────────────────────────────────────────────────────────────────────────

/// `YYYY-MM-DD HH:MM:SS.mmm` in UTC.
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

/// Header for an interval; the end date is omitted when both ends share a day.
pub fn format_span(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    if start.date_naive() == end.date_naive() {
        format!(
            "{} to {} UTC",
            format_timestamp(start),
            end.format("%H:%M:%S%.3f")
        )
    } else {
        format!("{} to {} UTC", format_timestamp(start), format_timestamp(end))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Readout data
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct ReadoutRow {
    pub channel: Channel,
    pub title: String,
    pub value: f64,
    /// Change across an interval mark.
    pub change: Option<f64>,
    /// `(min, mean, max)` across an interval mark, for series channels.
    pub stats: Option<(f64, f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkReadout {
    pub header: String,
    /// `(lat, lon, h_msl)` for point marks.
    pub position: Option<(f64, f64, f64)>,
    pub rows: Vec<ReadoutRow>,
}

/// Axis rows always shown: time, ground distance and the active axis if different.
fn axis_rows(axis: Channel) -> Vec<Channel> {
    let mut rows = vec![Channel::Time, Channel::Distance2D];
    if !rows.contains(&axis) {
        rows.push(axis);
    }
    rows
}

/// Readout for a single coordinate `x` of the resolver's axis.
///
/// `display_axis` is the channel the user is looking at; it decides which
/// axis rows are listed.
pub fn point_readout(
    resolver: &IndexResolver<'_>,
    display_axis: Channel,
    series: &[Channel],
    x: f64,
) -> Option<MarkReadout> {
    let dp = resolver.interpolate_at(x)?;
    let units = resolver.units();
    let rows = axis_rows(display_axis)
        .into_iter()
        .chain(series.iter().copied())
        .map(|ch| ReadoutRow {
            channel: ch,
            title: ch.title(units),
            value: ch.value(&dp, units),
            change: None,
            stats: None,
        })
        .collect();
    Some(MarkReadout {
        header: format!("{} UTC", format_timestamp(dp.time)),
        position: Some((dp.lat, dp.lon, dp.h_msl)),
        rows,
    })
}

/// Readout for the interval between coordinates `start` and `end`.
pub fn interval_readout(
    resolver: &IndexResolver<'_>,
    display_axis: Channel,
    series: &[Channel],
    start: f64,
    end: f64,
) -> Option<MarkReadout> {
    let dp_start = resolver.interpolate_at(start)?;
    let dp_end = resolver.interpolate_at(end)?;
    let units = resolver.units();

    let mut rows: Vec<ReadoutRow> = axis_rows(display_axis)
        .into_iter()
        .map(|ch| {
            let value = ch.value(&dp_end, units);
            ReadoutRow {
                channel: ch,
                title: ch.title(units),
                value,
                change: Some(value - ch.value(&dp_start, units)),
                stats: None,
            }
        })
        .collect();

    let aggregator = WindowAggregator::from_resolver(*resolver);
    rows.extend(
        aggregator
            .aggregate_all(start, end, series)
            .into_iter()
            .map(|(ch, s): (Channel, WindowStats)| ReadoutRow {
                channel: ch,
                title: ch.title(units),
                value: s.value_at_end,
                change: Some(s.delta),
                stats: Some((s.min, s.mean, s.max)),
            }),
    );

    Some(MarkReadout {
        header: format_span(dp_start.time, dp_end.time),
        position: None,
        rows,
    })
}

impl std::fmt::Display for MarkReadout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.header)?;
        if let Some((lat, lon, h)) = self.position {
            writeln!(f, "({lat:.7} deg, {lon:.7} deg, {h:.3} m)")?;
        }
        for row in &self.rows {
            write!(f, "{}\t{:.2}", row.title, row.value)?;
            if let Some(change) = row.change {
                write!(f, "\t({change:+.2})")?;
            }
            if let Some((min, mean, max)) = row.stats {
                write!(f, "\t[{min:.2}/{mean:.2}/{max:.2}]")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
