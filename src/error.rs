//! Error types for the collaborators around the core.
//!
//! Parsing and graph building never fail; these cover settings, cloning,
//! log extraction and writing the result.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the settings file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The settings file does not exist.
    #[error("Configuration file {} not found", .0.display())]
    NotFound(PathBuf),

    /// The settings file exists but could not be read.
    #[error("Failed to read configuration file {}: {message}", path.display())]
    Read {
        /// Settings file path.
        path: PathBuf,
        /// Underlying I/O failure.
        message: String,
    },

    /// Malformed YAML or a missing key.
    #[error("Error parsing YAML file: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// `commit_date` is not a `YYYY-MM-DD` date.
    #[error("commit_date must be in the format YYYY-MM-DD, got {0:?}")]
    InvalidDate(String),
}

/// Failures of one `render` run.
#[derive(Error, Debug)]
pub enum VisualizerError {
    /// Settings could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `git clone` failed.
    #[error("Failed to clone repository {url}: {message}")]
    Clone {
        /// Repository URL from the settings.
        url: String,
        /// Output of the failed clone.
        message: String,
    },

    /// `git log` failed.
    #[error("Failed to read commit log: {0}")]
    Log(String),

    /// The diagram could not be serialized.
    #[error("Failed to render graph: {0}")]
    Render(#[from] serde_json::Error),

    /// The diagram could not be written.
    #[error("Failed to write {}: {message}", path.display())]
    Write {
        /// Resolved output path.
        path: PathBuf,
        /// Underlying I/O failure.
        message: String,
    },
}

/// Result of a `render` run.
pub type Result<T> = std::result::Result<T, VisualizerError>;
