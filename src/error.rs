// SPDX-License-Identifier: MPL-2.0
use crate::media::SourceId;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
}

/// A single media resource could not be loaded.
///
/// This is the only error kind on the media path: the cache resolves to it,
/// batch preloads record it, and the lightbox renders it as an in-overlay
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load {id}: {reason}")]
pub struct LoadError {
    /// Identifier of the resource that failed.
    pub id: SourceId,
    /// What went wrong.
    pub reason: LoadFailure,
}

impl LoadError {
    #[must_use]
    pub fn new(id: SourceId, reason: LoadFailure) -> Self {
        Self { id, reason }
    }
}

/// Specific causes of a load failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadFailure {
    /// File not found, permission denied, etc.
    #[error("I/O error: {0}")]
    Io(String),

    /// Image bytes or a video stream could not be decoded.
    #[error("decoding failed: {0}")]
    Decode(String),

    /// The background loading task died before producing a result.
    #[error("loading task failed: {0}")]
    Task(String),
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

pub type Result<T> = std::result::Result<T, Error>;
