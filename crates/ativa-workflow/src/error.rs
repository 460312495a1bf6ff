//! Failure taxonomy of a submission.

use ativa_transport::TransportError;
use ativa_validator::Field;
use thiserror::Error;

/// Every way a submission can fail to be accepted.
///
/// None of these leave the form stuck: each one maps to either restoring
/// interactivity or the success transition.
#[derive(Debug, Error)]
pub enum SubmitError {
  /// One or more fields are invalid. Blocks submission until corrected.
  #[error("{} field(s) failed validation", .fields.len())]
  FieldValidation { fields: Vec<Field> },

  /// The webhook could not be reached. The user may retry.
  #[error("webhook failed: {0}")]
  Transport(#[source] TransportError),

  /// No reply within the timeout window. Treated as accepted.
  #[error("webhook did not respond within {timeout_ms}ms")]
  Timeout { timeout_ms: u64 },

  /// The webhook reported the email as not registered.
  #[error("email is not registered")]
  BusinessRejection,

  /// Anything else. Resolved by moving forward.
  #[error("unexpected error: {message}")]
  Unexpected { message: String },
}
