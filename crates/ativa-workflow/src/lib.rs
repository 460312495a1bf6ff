//! Ativa Workflow
//!
//! The submit-time state machine of the activation form.
//!
//! ```text
//!            submit
//!   Idle ─────────────▶ Validating ──(any field invalid)──▶ Idle
//!    ▲                      │
//!    │                      ▼
//!    │                 Submitting ── request ⟷ timer race
//!    │                      │
//!    │   ┌──────────────────┼───────────────────────┐
//!    │   ▼                  ▼                       ▼
//!    └─ Failed(connection)  Failed(validation)    Success
//!       (notice shown)      (email re-prompted)   (accepted, timeout,
//!                                                  or fail-open)
//! ```
//!
//! Rendering goes through an injected [`Presenter`](ativa_form::Presenter)
//! and delivery through an injected [`Transport`](ativa_transport::Transport),
//! so the workflow runs without a display or a network.
//!
//! # Usage
//!
//! ```ignore
//! let transport = Arc::new(HttpTransport::new(&config.endpoint)?);
//! let presenter = Arc::new(MemoryPresenter::new());
//! let workflow = SubmissionWorkflow::new(config, transport, presenter);
//!
//! let outcome = workflow.submit(&form).await;
//! ```

mod error;
mod events;
mod inflight;
mod notice;
mod progress;
mod race;
mod state;
mod workflow;

pub use error::SubmitError;
pub use events::{ChannelNotifier, NoopNotifier, SubmissionEvent, SubmissionNotifier};
pub use progress::PROGRESS_STEPS;
pub use state::{FailureReason, SubmitOutcome, SuccessPath, WorkflowState};
pub use workflow::{NOT_REGISTERED_MESSAGE, SubmissionWorkflow};
