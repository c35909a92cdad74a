//! TrackPlot crate root: re-exports and module wiring.
//!
//! This crate is the query and aggregation engine behind a flight-track plot:
//! - `data::channel`: the scalar channels derivable from a track sample
//! - `data::resolver`: binary-search index resolution and interpolation along an axis
//! - `data::range`: axis range <-> time range synchronization
//! - `data::aggregate`: windowed min / time-weighted mean / max / delta
//! - `data::plot_view`: per-view state tying the above to a track
//! - `config`: serde configuration (JSON / YAML)
//!
//! The engine borrows samples from a [`TrackSource`] and publishes navigation
//! in elapsed time through [`Navigation`]; it never owns track data.

pub mod config;
pub mod data;
pub mod error;
#[cfg(feature = "egui")]
pub mod plot;

// Public re-exports for a compact external API
pub use config::{ChannelOverride, EngineConfig};
pub use data::aggregate::{WindowAggregator, WindowStats};
pub use data::axis::AxisSelector;
pub use data::channel::{Channel, Clamp};
pub use data::plot_view::DataPlot;
pub use data::range::{AxisRange, RangeSync, TimeRange};
pub use data::resolver::{Bracket, IndexResolver};
pub use data::sample::Sample;
pub use data::selection::Selection;
pub use data::track::{Navigation, Track, TrackSource};
pub use data::units::UnitSystem;
pub use error::{EngineError, EngineResult};
