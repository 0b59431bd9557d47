//! Error types for site infrastructure (configuration I/O and parsing).
//!
//! Navigation itself never fails; see [`crate::nav`].

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for fallible site operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// Reading or writing a file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::config::SiteConfig`]
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// No per-user config directory on this platform
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;
