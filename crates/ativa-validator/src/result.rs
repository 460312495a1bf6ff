use serde::Serialize;

/// Outcome of validating one field.
///
/// `ok` is true exactly when there is no message; the constructors are the
/// only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
  ok: bool,
  message: Option<String>,
}

impl ValidationResult {
  pub fn valid() -> Self {
    Self {
      ok: true,
      message: None,
    }
  }

  pub fn invalid(message: impl Into<String>) -> Self {
    Self {
      ok: false,
      message: Some(message.into()),
    }
  }

  pub fn is_ok(&self) -> bool {
    self.ok
  }

  pub fn message(&self) -> Option<&str> {
    self.message.as_deref()
  }
}

impl From<Option<&str>> for ValidationResult {
  fn from(message: Option<&str>) -> Self {
    match message {
      Some(message) => Self::invalid(message),
      None => Self::valid(),
    }
  }
}
