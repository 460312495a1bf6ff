use std::sync::{Arc, Mutex, PoisonError};

use ativa_form::NoticeKind;
use ativa_validator::Field;
use serde::Serialize;
use tracing::info;

use crate::events::{SubmissionEvent, SubmissionNotifier};

/// Why a submission ended on the form instead of moving forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
  /// The webhook reported the email as not registered.
  Validation,
  /// The webhook could not be reached.
  Connection,
}

/// State of the submission workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum WorkflowState {
  #[default]
  Idle,
  Validating,
  Submitting,
  Success,
  Failed(FailureReason),
}

impl WorkflowState {
  /// Whether a new submit trigger must be ignored in this state.
  pub fn rejects_submit(self) -> bool {
    matches!(
      self,
      WorkflowState::Validating | WorkflowState::Submitting | WorkflowState::Success
    )
  }
}

/// How the success transition was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessPath {
  /// The webhook accepted the registration.
  Accepted,
  /// No reply within the timeout window.
  TimedOut,
  /// An unexpected error, resolved by moving forward.
  FailOpen,
}

/// Result of one submit trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
  /// A submission was already running or the form already succeeded.
  Ignored,
  /// Validation failed; no request was made.
  Invalid { fields: Vec<Field> },
  /// The email is not registered; the form is interactive again.
  NotRegistered,
  /// The webhook could not be reached; the form is interactive again.
  ConnectionFailed { notice: NoticeKind },
  Succeeded { via: SuccessPath },
}

/// Current workflow state plus the notifier that observes its changes.
pub(crate) struct StateTracker {
  state: Mutex<WorkflowState>,
  notifier: Arc<dyn SubmissionNotifier>,
}

impl StateTracker {
  pub(crate) fn new(notifier: Arc<dyn SubmissionNotifier>) -> Self {
    Self {
      state: Mutex::new(WorkflowState::Idle),
      notifier,
    }
  }

  pub(crate) fn current(&self) -> WorkflowState {
    *self.state.lock().unwrap_or_else(PoisonError::into_inner)
  }

  pub(crate) fn notifier(&self) -> &Arc<dyn SubmissionNotifier> {
    &self.notifier
  }

  /// Move to `Validating` unless a submission is already running or the
  /// form already succeeded. Check and set happen under one lock.
  pub(crate) fn try_begin(&self, submission_id: &str) -> bool {
    let from = {
      let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
      if state.rejects_submit() {
        return false;
      }
      std::mem::replace(&mut *state, WorkflowState::Validating)
    };
    self.announce(submission_id, from, WorkflowState::Validating);
    true
  }

  pub(crate) fn transition(&self, submission_id: &str, to: WorkflowState) {
    let from = std::mem::replace(
      &mut *self.state.lock().unwrap_or_else(PoisonError::into_inner),
      to,
    );
    self.announce(submission_id, from, to);
  }

  fn announce(&self, submission_id: &str, from: WorkflowState, to: WorkflowState) {
    info!(submission_id = %submission_id, from = ?from, to = ?to, "state changed");
    self.notifier.notify(SubmissionEvent::StateChanged {
      submission_id: submission_id.to_string(),
      from,
      to,
    });
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rejects_submit() {
    assert!(!WorkflowState::Idle.rejects_submit());
    assert!(!WorkflowState::Failed(FailureReason::Connection).rejects_submit());
    assert!(WorkflowState::Validating.rejects_submit());
    assert!(WorkflowState::Submitting.rejects_submit());
    assert!(WorkflowState::Success.rejects_submit());
  }

  #[test]
  fn test_try_begin_is_exclusive() {
    let tracker = StateTracker::new(Arc::new(crate::events::NoopNotifier));
    assert!(tracker.try_begin("a"));
    assert!(!tracker.try_begin("b"));

    tracker.transition("a", WorkflowState::Idle);
    assert!(tracker.try_begin("c"));
    assert_eq!(tracker.current(), WorkflowState::Validating);
  }

  #[test]
  fn test_outcome_json() {
    let outcome = SubmitOutcome::Invalid {
      fields: vec![Field::Email, Field::Whatsapp],
    };
    assert_eq!(
      serde_json::to_value(&outcome).unwrap(),
      serde_json::json!({"outcome": "invalid", "fields": ["email", "whatsapp"]})
    );

    let state = WorkflowState::Failed(FailureReason::Connection);
    assert_eq!(
      serde_json::to_value(state).unwrap(),
      serde_json::json!({"state": "failed", "reason": "connection"})
    );
  }
}
