//! Error types for the simulation.

use thiserror::Error;

/// Result alias used throughout the simulation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring or driving the simulation.
#[derive(Error, Debug)]
pub enum Error {
    /// A parameter value cannot be used.
    #[error("invalid parameter: {0}")]
    InvalidParams(String),

    /// The kd-tree rejected a position while the index was built.
    #[error("spatial index error: {0}")]
    SpatialIndex(String),

    /// Reading a parameter file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A parameter file is not valid JSON for [`super::params::Params`].
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<kdtree::ErrorKind> for Error {
    fn from(err: kdtree::ErrorKind) -> Self {
        Error::SpatialIndex(format!("{err:?}"))
    }
}
