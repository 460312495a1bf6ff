use std::collections::BTreeSet;
use std::sync::Arc;

use ativa_validator::{Field, ValidationResult};
use tracing::{debug, warn};

use crate::presenter::Presenter;

/// Applies validation results to a [`Presenter`].
///
/// Presentation failures are logged and swallowed: a field whose message
/// slot is missing must not stop its siblings from being decorated.
pub struct FeedbackController {
  presenter: Arc<dyn Presenter>,
  invalid: BTreeSet<Field>,
}

impl FeedbackController {
  pub fn new(presenter: Arc<dyn Presenter>) -> Self {
    Self {
      presenter,
      invalid: BTreeSet::new(),
    }
  }

  pub fn apply(&mut self, field: Field, result: &ValidationResult) {
    match result.message() {
      Some(message) => self.mark_error(field, message),
      None => self.mark_valid(field),
    }
  }

  pub fn mark_error(&mut self, field: Field, message: &str) {
    self.invalid.insert(field);
    debug!(field = %field, reason = message, "field marked invalid");
    if let Err(e) = self.presenter.mark_error(field, message) {
      warn!(field = %field, error = %e, "could not show field error");
    }
  }

  pub fn mark_valid(&mut self, field: Field) {
    self.invalid.remove(&field);
    if let Err(e) = self.presenter.mark_valid(field) {
      warn!(field = %field, error = %e, "could not clear field error");
    }
  }

  /// Whether the field is currently shown as invalid.
  pub fn is_marked_invalid(&self, field: Field) -> bool {
    self.invalid.contains(&field)
  }
}
