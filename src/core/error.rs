//! Errors raised while building lights or writing images.

// std
use std::io;
use std::path::PathBuf;
// others
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("film resolution {width}x{height} is too small, need at least 2x2")]
    InvalidResolution { width: usize, height: usize },
    #[error("{0} direction must not be a zero vector")]
    DegenerateDirection(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
