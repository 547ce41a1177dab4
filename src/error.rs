// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Only configuration and construction problems are errors. Rejected show
//! requests (duplicate tags), redundant hides and stack lookups that find
//! nothing are silent no-ops and never reach this type.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Argument Error: {0}")]
    Arguments(String),

    /// No host surface can present banners (e.g. the overlay has no window
    /// size yet). Banner construction aborts.
    #[error("Surface Error: no host surface is available to present banners")]
    SurfaceUnavailable,

    /// The coordinator was started outside of a Tokio runtime.
    #[error("Runtime Error: the coordinator needs a running Tokio runtime")]
    RuntimeUnavailable,

    /// The coordinator's UI context has shut down.
    #[error("Runtime Error: the coordinator has stopped")]
    Stopped,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Arguments(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
