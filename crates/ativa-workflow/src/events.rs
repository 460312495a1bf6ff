//! Submission events and notifiers for observability.
//!
//! Events are emitted as the workflow moves through its states so callers
//! can log, persist or assert on the sequence.

use serde::Serialize;
use tokio::sync::mpsc;

use crate::state::WorkflowState;

/// Events emitted during a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SubmissionEvent {
  StateChanged {
    submission_id: String,
    from: WorkflowState,
    to: WorkflowState,
  },

  /// The request left for the webhook.
  RequestSent {
    submission_id: String,
    endpoint: String,
  },

  NoticeShown { submission_id: String, title: String },

  NoticeDismissed { submission_id: String },

  /// An unexpected error was resolved by moving forward.
  FailOpen { submission_id: String, error: String },
}

/// Trait for receiving submission events.
pub trait SubmissionNotifier: Send + Sync {
  fn notify(&self, event: SubmissionEvent);
}

/// A notifier that discards all events.
#[derive(Debug, Clone, Default)]
pub struct NoopNotifier;

impl SubmissionNotifier for NoopNotifier {
  fn notify(&self, _event: SubmissionEvent) {}
}

/// A notifier that sends events to an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
  // Unbounded: at most a handful of events per submission.
  sender: mpsc::UnboundedSender<SubmissionEvent>,
}

impl ChannelNotifier {
  pub fn new(sender: mpsc::UnboundedSender<SubmissionEvent>) -> Self {
    Self { sender }
  }
}

impl SubmissionNotifier for ChannelNotifier {
  fn notify(&self, event: SubmissionEvent) {
    // Receiver may have been dropped
    let _ = self.sender.send(event);
  }
}
