use thiserror::Error;

/// Errors that can occur while delivering a submission.
#[derive(Debug, Error)]
pub enum TransportError {
  /// The endpoint could not be used as a request URL.
  #[error("invalid endpoint '{endpoint}': {message}")]
  InvalidEndpoint { endpoint: String, message: String },

  /// The server could not be reached (refused, reset, unresolvable).
  #[error("connection failed: {message}")]
  Connect { message: String },

  /// The request could not be sent at all.
  #[error("request could not be sent: {message}")]
  Offline { message: String },

  /// The webhook answered with a non-success status.
  #[error("http error! status: {status}")]
  Status { status: u16 },

  /// The webhook answered with a success status but the body is not a reply.
  #[error("malformed webhook reply: {message}")]
  MalformedReply { message: String },

  /// The request was cancelled before it settled.
  #[error("request cancelled")]
  Cancelled,

  /// Any other HTTP client failure.
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),
}

impl TransportError {
  /// Classify a reqwest send failure.
  pub(crate) fn from_send(error: reqwest::Error) -> Self {
    if error.is_connect() {
      Self::Connect {
        message: error.to_string(),
      }
    } else if error.is_request() || error.is_builder() {
      Self::Offline {
        message: error.to_string(),
      }
    } else {
      Self::Http(error)
    }
  }
}
