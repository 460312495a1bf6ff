//! The rendering collaborator driven by the form core.

use ativa_validator::Field;
use serde::Serialize;
use thiserror::Error;

/// Errors a presenter can report back to the core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresenterError {
  /// The field has no input element to decorate.
  #[error("input element not found for field: {field}")]
  MissingInput { field: Field },

  /// The field has no element to hold its error message.
  #[error("error message element not found for field: {field}")]
  MissingSlot { field: Field },
}

/// Handle of a notice shown by the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeId(pub u64);

/// Why a submission could not reach the webhook, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
  /// The request could not leave the device.
  Offline,
  /// The server refused or dropped the connection.
  Unavailable,
  /// Anything else, including error statuses.
  Generic,
}

/// A transient, dismissible error notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
  pub title: String,
  pub message: String,
}

impl Notice {
  pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      title: title.into(),
      message: message.into(),
    }
  }

  pub fn for_kind(kind: NoticeKind) -> Self {
    match kind {
      NoticeKind::Offline => Self::new(
        "Sem Conexão",
        "Sem conexão com a internet. Verifique sua conexão e tente novamente.",
      ),
      NoticeKind::Unavailable => Self::new(
        "Servidor Indisponível",
        "Servidor indisponível no momento. Por favor, tente novamente em alguns minutos.",
      ),
      NoticeKind::Generic => Self::new(
        "Erro na Conexão",
        "Não foi possível verificar seu cadastro. Por favor, tente novamente mais tarde.",
      ),
    }
  }
}

/// Presentation operations the core calls. Implementations decide how
/// they render.
///
/// Methods take `&self` so the presenter can be shared with timers that
/// outlive a single call (notice dismissal, progress updates);
/// implementations keep their own state behind interior mutability.
pub trait Presenter: Send + Sync {
  /// Mark the field invalid and show `message` in its message slot.
  fn mark_error(&self, field: Field, message: &str) -> Result<(), PresenterError>;

  /// Mark the field valid and hide its message slot.
  fn mark_valid(&self, field: Field) -> Result<(), PresenterError>;

  /// Move input focus to the field.
  fn focus(&self, field: Field);

  /// Disable the submit control and show the busy indicator, or undo both.
  fn set_busy(&self, busy: bool);

  /// Progress text while busy.
  fn show_progress(&self, _message: &str) {}

  /// Replace the form with the in-page success panel.
  fn reveal_success(&self);

  /// Leave the form for the dedicated success view.
  fn navigate_to_success_page(&self, path: &str);

  /// Show a transient notice and return its handle.
  fn show_notice(&self, notice: &Notice) -> NoticeId;

  /// Remove a notice previously shown. Unknown handles are ignored.
  fn dismiss_notice(&self, id: NoticeId);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_notice_texts() {
    assert_eq!(Notice::for_kind(NoticeKind::Offline).title, "Sem Conexão");
    assert_eq!(Notice::for_kind(NoticeKind::Unavailable).title, "Servidor Indisponível");

    let generic = Notice::for_kind(NoticeKind::Generic);
    assert_eq!(generic.title, "Erro na Conexão");
    assert!(generic.message.starts_with("Não foi possível verificar seu cadastro"));
  }

  #[test]
  fn test_error_display() {
    let err = PresenterError::MissingSlot { field: Field::Email };
    assert_eq!(err.to_string(), "error message element not found for field: email");
  }
}
