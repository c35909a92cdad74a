//! egui_plot adapter for a rendering collaborator (feature `egui`).
//!
//! Turns the resolved series of a [`DataPlot`] into ready-to-add plot items:
//! one solid line per visible series, a dotted companion line for the
//! optimal trajectory where one applies, and mark dots.

use egui::Color32;
use egui_plot::{Line, LineStyle, Points};

use crate::data::plot_view::DataPlot;
use crate::data::track::{Navigation, TrackSource};

fn color(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Lines for every visible series of `plot`.
pub fn series_lines<S: TrackSource + ?Sized>(
    plot: &DataPlot,
    source: &S,
    width: f32,
) -> Vec<Line<'static>> {
    let units = source.unit_system();
    let mut lines = Vec::new();
    for ch in plot.looks.visible_series() {
        let Some(look) = plot.looks.get(ch) else {
            continue;
        };
        let title = ch.title(units);
        lines.push(
            Line::new(title.clone(), plot.resolved_series(source, ch))
                .color(color(look.color))
                .width(width),
        );
        let optimal = plot.resolved_optimal_series(source, ch);
        if !optimal.is_empty() {
            lines.push(
                Line::new(format!("{title} (optimal)"), optimal)
                    .color(color(look.color))
                    .width(width)
                    .style(LineStyle::Dotted { spacing: 6.0 }),
            );
        }
    }
    lines
}

/// Dots at the end of the current mark, one per visible series.
pub fn mark_dots<S>(plot: &DataPlot, track: &S, radius: f32) -> Vec<Points<'static>>
where
    S: TrackSource + Navigation + ?Sized,
{
    plot.mark_points(track)
        .into_iter()
        .map(|(ch, p)| Points::new(ch.key(), vec![p]).radius(radius).color(Color32::BLACK))
        .collect()
}
