use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Webhook the activation form posts to.
pub const DEFAULT_ENDPOINT: &str = "https://n8n.hivebot.cloud/webhook/ativacao-betriser";

/// Literal `source` tag sent with every submission.
pub const DEFAULT_SOURCE: &str = "betriser-activation-form";

/// Which validation table the form uses for the social-media fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleVariant {
  /// Telegram and Instagram optional, Discord unchecked.
  #[default]
  Lenient,
  /// Telegram, Discord and Instagram required with their handle formats.
  Strict,
}

/// How the form presents a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SuccessMode {
  /// Replace the form with an in-page success panel.
  Panel,
  /// Navigate to a dedicated success view.
  Redirect { path: String },
}

impl Default for SuccessMode {
  fn default() -> Self {
    Self::Redirect {
      path: "success.html".to_string(),
    }
  }
}

/// Configuration for one activation form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
  /// Identifier used in logs.
  pub form_id: String,

  /// Webhook URL the payload is posted to.
  pub endpoint: String,

  /// Fixed `source` tag included in the payload.
  pub source: String,

  /// How long to wait for the webhook before taking the timeout fallback.
  pub timeout_ms: u64,

  /// How long a transient error notice stays visible.
  pub notice_ms: u64,

  /// Interval between busy-indicator progress messages.
  pub progress_interval_ms: u64,

  /// Validation table for the social-media fields.
  pub rules: RuleVariant,

  /// Terminal behavior after a successful submission.
  pub success: SuccessMode,
}

impl Default for FormConfig {
  fn default() -> Self {
    Self {
      form_id: "betriser-form".to_string(),
      endpoint: DEFAULT_ENDPOINT.to_string(),
      source: DEFAULT_SOURCE.to_string(),
      timeout_ms: 10_000,
      notice_ms: 5_000,
      progress_interval_ms: 2_000,
      rules: RuleVariant::default(),
      success: SuccessMode::default(),
    }
  }
}

impl FormConfig {
  /// Load and validate a configuration from a JSON file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_json(&content)
  }

  /// Parse and validate a configuration from a JSON string.
  pub fn from_json(content: &str) -> Result<Self, ConfigError> {
    let config: FormConfig = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
  }

  /// Check that the endpoint is an http(s) URL and every duration is non-zero.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let url = url::Url::parse(&self.endpoint).map_err(|e| ConfigError::InvalidEndpoint {
      endpoint: self.endpoint.clone(),
      message: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
      return Err(ConfigError::InvalidEndpoint {
        endpoint: self.endpoint.clone(),
        message: format!("unsupported scheme '{}'", url.scheme()),
      });
    }

    for (field, value) in [
      ("timeout_ms", self.timeout_ms),
      ("notice_ms", self.notice_ms),
      ("progress_interval_ms", self.progress_interval_ms),
    ] {
      if value == 0 {
        return Err(ConfigError::ZeroDuration { field });
      }
    }

    Ok(())
  }

  pub fn timeout(&self) -> Duration {
    Duration::from_millis(self.timeout_ms)
  }

  pub fn notice_duration(&self) -> Duration {
    Duration::from_millis(self.notice_ms)
  }

  pub fn progress_interval(&self) -> Duration {
    Duration::from_millis(self.progress_interval_ms)
  }
}
