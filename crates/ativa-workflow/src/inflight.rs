//! The `Submitting` phase as a guard.
//!
//! Entering it disables the submit control; every way of leaving it either
//! restores interactivity or completes the success transition, including the
//! caller dropping the submit future mid-flight.

use std::sync::Arc;

use ativa_form::Presenter;
use tracing::warn;

use crate::state::{FailureReason, StateTracker, WorkflowState};

pub(crate) struct InFlight {
  presenter: Arc<dyn Presenter>,
  tracker: Arc<StateTracker>,
  submission_id: String,
  settled: bool,
}

impl InFlight {
  pub(crate) fn enter(
    presenter: Arc<dyn Presenter>,
    tracker: Arc<StateTracker>,
    submission_id: &str,
  ) -> Self {
    tracker.transition(submission_id, WorkflowState::Submitting);
    presenter.set_busy(true);
    Self {
      presenter,
      tracker,
      submission_id: submission_id.to_string(),
      settled: false,
    }
  }

  /// Finish in `Success`. The submit control stays disabled.
  pub(crate) fn succeed(mut self) {
    self.settled = true;
    self
      .tracker
      .transition(&self.submission_id, WorkflowState::Success);
  }

  /// Finish in `Failed(reason)` and hand the form back to the user.
  pub(crate) fn fail(mut self, reason: FailureReason) {
    self.settled = true;
    self.presenter.set_busy(false);
    self
      .tracker
      .transition(&self.submission_id, WorkflowState::Failed(reason));
    self
      .tracker
      .transition(&self.submission_id, WorkflowState::Idle);
  }
}

impl Drop for InFlight {
  fn drop(&mut self) {
    if self.settled {
      return;
    }
    warn!(submission_id = %self.submission_id, "submission abandoned while in flight");
    self.presenter.set_busy(false);
    self
      .tracker
      .transition(&self.submission_id, WorkflowState::Idle);
  }
}
