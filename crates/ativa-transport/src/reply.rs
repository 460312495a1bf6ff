use serde::{Deserialize, Serialize};

/// Body returned by the webhook on a success status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookReply {
  /// `"success"` when the registration exists, `"fail"` when it does not.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub response: Option<String>,
}

/// What the reply means for the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyVerdict {
  Accepted,
  /// The email is not registered on the platform.
  NotRegistered,
}

impl WebhookReply {
  /// Parse a reply body. An empty body is a reply without a marker.
  pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
    if body.trim().is_empty() {
      return Ok(Self::default());
    }
    serde_json::from_str(body)
  }

  /// Only an explicit `"fail"` marker rejects; anything else on a success
  /// status is accepted.
  pub fn verdict(&self) -> ReplyVerdict {
    match self.response.as_deref() {
      Some("fail") => ReplyVerdict::NotRegistered,
      _ => ReplyVerdict::Accepted,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_verdicts() {
    let verdict = |body: &str| WebhookReply::parse(body).unwrap().verdict();

    assert_eq!(verdict(r#"{"response": "success"}"#), ReplyVerdict::Accepted);
    assert_eq!(verdict(r#"{"response": "fail"}"#), ReplyVerdict::NotRegistered);
    assert_eq!(verdict(r#"{"response": "pending"}"#), ReplyVerdict::Accepted);
    assert_eq!(verdict(r#"{"other": 1}"#), ReplyVerdict::Accepted);
    assert_eq!(verdict(""), ReplyVerdict::Accepted);
  }

  #[test]
  fn test_malformed_body() {
    assert!(WebhookReply::parse("<html>ok</html>").is_err());
    assert!(WebhookReply::parse("[1, 2]").is_err());
  }
}
