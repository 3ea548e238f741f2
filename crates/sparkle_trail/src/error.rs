//! # Trail Error Types
//!
//! The simulation itself is total; only configuration loading can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a trail.
#[derive(Error, Debug)]
pub enum TrailError {
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for trail operations.
pub type TrailResult<T> = Result<T, TrailError>;
