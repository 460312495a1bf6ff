use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// The JSON body posted to the webhook.
///
/// Serializes flat: one key per form field, then `timestamp` and `source`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionPayload {
  #[serde(flatten)]
  pub fields: serde_json::Map<String, serde_json::Value>,

  /// ISO-8601 UTC timestamp with millisecond precision.
  pub timestamp: String,

  /// Fixed tag identifying the form.
  pub source: String,
}

impl SubmissionPayload {
  /// Build a payload stamped with the current time.
  pub fn new(
    fields: serde_json::Map<String, serde_json::Value>,
    source: impl Into<String>,
  ) -> Self {
    Self::at(fields, source, Utc::now())
  }

  pub fn at(
    fields: serde_json::Map<String, serde_json::Value>,
    source: impl Into<String>,
    at: DateTime<Utc>,
  ) -> Self {
    Self {
      fields,
      timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
      source: source.into(),
    }
  }
}
