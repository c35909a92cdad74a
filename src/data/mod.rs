pub mod aggregate;
pub mod axis;
pub mod channel;
pub mod channel_look;
pub mod export;
pub mod plot_view;
pub mod range;
pub mod readout;
pub mod resolver;
pub mod sample;
pub mod selection;
pub mod track;
pub mod units;
