use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or validating a form configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config file {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse config: {0}")]
  Parse(#[from] serde_json::Error),

  #[error("invalid endpoint '{endpoint}': {message}")]
  InvalidEndpoint { endpoint: String, message: String },

  #[error("{field} must be greater than zero")]
  ZeroDuration { field: &'static str },
}
