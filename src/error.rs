//! Error type shared by the engine.
//!
//! Numerical edge cases (empty tracks, out-of-range coordinates, zero-width
//! windows) are never errors; they resolve to defined fallbacks instead. Only
//! contract violations and configuration/IO failures surface here.

use thiserror::Error;

use crate::data::channel::Channel;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("channel {0:?} is not monotonic along the track and cannot be used as the x axis")]
    NotAxisEligible(Channel),
    #[error("unknown channel name: {0}")]
    UnknownChannel(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
