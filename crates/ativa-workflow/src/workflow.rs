//! Submission workflow.
//!
//! [`SubmissionWorkflow`] owns the configuration, the rule table and the
//! collaborators, and turns form events (blur, input, submit) into
//! presenter calls and at most one webhook request at a time.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ativa_config::{FormConfig, SuccessMode};
use ativa_form::{FeedbackController, Form, Notice, Presenter};
use ativa_transport::{ReplyVerdict, SubmissionPayload, Transport, TransportError};
use ativa_validator::{Field, RuleSet, ValidationResult};
use tracing::{error, info, instrument, warn};

use crate::error::SubmitError;
use crate::events::{NoopNotifier, SubmissionEvent, SubmissionNotifier};
use crate::inflight::InFlight;
use crate::notice::{notice_kind, show_transient};
use crate::progress::ProgressTicker;
use crate::race::{RaceOutcome, race_request};
use crate::state::{FailureReason, StateTracker, SubmitOutcome, SuccessPath, WorkflowState};

/// Message placed on the email field when the webhook does not know it.
pub const NOT_REGISTERED_MESSAGE: &str =
  "Este email não está cadastrado na plataforma BetRiser. Por favor, crie sua conta primeiro.";

/// The submit-time state machine of one form.
///
/// Methods take `&self`; the workflow can be shared behind an `Arc` between
/// event handlers, and a submit trigger arriving while another submission
/// is running is ignored.
pub struct SubmissionWorkflow {
  config: FormConfig,
  rules: &'static RuleSet,
  transport: Arc<dyn Transport>,
  presenter: Arc<dyn Presenter>,
  feedback: Mutex<FeedbackController>,
  tracker: Arc<StateTracker>,
}

impl SubmissionWorkflow {
  pub fn new(
    config: FormConfig,
    transport: Arc<dyn Transport>,
    presenter: Arc<dyn Presenter>,
  ) -> Self {
    Self::with_notifier(config, transport, presenter, Arc::new(NoopNotifier))
  }

  pub fn with_notifier(
    config: FormConfig,
    transport: Arc<dyn Transport>,
    presenter: Arc<dyn Presenter>,
    notifier: Arc<dyn SubmissionNotifier>,
  ) -> Self {
    let rules = RuleSet::for_variant(config.rules);
    Self {
      config,
      rules,
      transport,
      feedback: Mutex::new(FeedbackController::new(presenter.clone())),
      presenter,
      tracker: Arc::new(StateTracker::new(notifier)),
    }
  }

  pub fn state(&self) -> WorkflowState {
    self.tracker.current()
  }

  /// Validate one field when it loses focus and show the result.
  pub fn on_blur(&self, form: &Form, field: Field) -> ValidationResult {
    let result = self.rules.validate(field, form.value(field));
    self.feedback().apply(field, &result);
    result
  }

  /// The checkbox validates on change rather than on blur.
  pub fn on_change(&self, form: &Form, field: Field) -> ValidationResult {
    self.on_blur(form, field)
  }

  /// Revalidate while typing, but only a field already shown as invalid.
  pub fn on_input(&self, form: &Form, field: Field) -> Option<ValidationResult> {
    let mut feedback = self.feedback();
    if !feedback.is_marked_invalid(field) {
      return None;
    }
    let result = self.rules.validate(field, form.value(field));
    feedback.apply(field, &result);
    Some(result)
  }

  /// Run one submit trigger to completion.
  ///
  /// Only the "email not registered" reply and transport failures keep the
  /// user on the form; a timeout or any unexpected error moves forward.
  #[instrument(name = "form_submit", skip_all, fields(form_id = %self.config.form_id))]
  pub async fn submit(&self, form: &Form) -> SubmitOutcome {
    let submission_id = uuid::Uuid::new_v4().to_string();

    if !self.tracker.try_begin(&submission_id) {
      warn!(submission_id = %submission_id, state = ?self.state(), "submit ignored");
      return SubmitOutcome::Ignored;
    }

    if let Err(SubmitError::FieldValidation { fields }) = self.validate_all(form) {
      info!(submission_id = %submission_id, invalid = ?fields, "submission blocked by validation");
      if let Some(first) = fields.first() {
        self.presenter.focus(*first);
      }
      self.tracker.transition(&submission_id, WorkflowState::Idle);
      return SubmitOutcome::Invalid { fields };
    }

    let in_flight = InFlight::enter(self.presenter.clone(), self.tracker.clone(), &submission_id);
    let result = self.deliver(form, &submission_id).await;

    match result {
      Ok(()) => self.succeed(in_flight, SuccessPath::Accepted),
      Err(SubmitError::Timeout { timeout_ms }) => {
        info!(submission_id = %submission_id, timeout_ms, "webhook timeout, proceeding anyway");
        self.succeed(in_flight, SuccessPath::TimedOut)
      }
      Err(SubmitError::BusinessRejection) => {
        info!(submission_id = %submission_id, "email not registered");
        in_flight.fail(FailureReason::Validation);
        self.feedback().mark_error(Field::Email, NOT_REGISTERED_MESSAGE);
        self.presenter.focus(Field::Email);
        SubmitOutcome::NotRegistered
      }
      Err(SubmitError::Transport(e)) => {
        error!(submission_id = %submission_id, error = %e, "webhook failed");
        let kind = notice_kind(&e);
        in_flight.fail(FailureReason::Connection);
        show_transient(
          &self.presenter,
          self.tracker.notifier(),
          &submission_id,
          Notice::for_kind(kind),
          self.config.notice_duration(),
        );
        SubmitOutcome::ConnectionFailed { notice: kind }
      }
      Err(e) => {
        // Deliberate fail-open: logged apart from ordinary failures so
        // masked integration bugs stay visible.
        warn!(submission_id = %submission_id, error = %e, fail_open = true, "unexpected submission error, moving forward");
        self
          .tracker
          .notifier()
          .notify(SubmissionEvent::FailOpen {
            submission_id: submission_id.clone(),
            error: e.to_string(),
          });
        self.succeed(in_flight, SuccessPath::FailOpen)
      }
    }
  }

  /// Validate every field, without stopping at the first failure, so each
  /// invalid field gets feedback at once.
  fn validate_all(&self, form: &Form) -> Result<(), SubmitError> {
    let mut feedback = self.feedback();
    let mut fields = Vec::new();

    for spec in form.specs() {
      let result = self.rules.validate(spec.field, &spec.value);
      if !result.is_ok() {
        fields.push(spec.field);
      }
      feedback.apply(spec.field, &result);
    }

    if fields.is_empty() {
      Ok(())
    } else {
      Err(SubmitError::FieldValidation { fields })
    }
  }

  /// Post the form and classify what came back.
  async fn deliver(&self, form: &Form, submission_id: &str) -> Result<(), SubmitError> {
    let payload = SubmissionPayload::new(form.to_json_map(), self.config.source.clone());
    let _progress = ProgressTicker::start(self.presenter.clone(), self.config.progress_interval());

    self
      .tracker
      .notifier()
      .notify(SubmissionEvent::RequestSent {
        submission_id: submission_id.to_string(),
        endpoint: self.config.endpoint.clone(),
      });

    match race_request(self.transport.clone(), payload, self.config.timeout()).await {
      RaceOutcome::Settled(Ok(reply)) => match reply.verdict() {
        ReplyVerdict::Accepted => Ok(()),
        ReplyVerdict::NotRegistered => Err(SubmitError::BusinessRejection),
      },
      RaceOutcome::Settled(Err(
        e @ (TransportError::MalformedReply { .. } | TransportError::Cancelled),
      )) => Err(SubmitError::Unexpected {
        message: e.to_string(),
      }),
      RaceOutcome::Settled(Err(e)) => Err(SubmitError::Transport(e)),
      RaceOutcome::TimedOut => Err(SubmitError::Timeout {
        timeout_ms: self.config.timeout_ms,
      }),
      RaceOutcome::Crashed { message } => Err(SubmitError::Unexpected { message }),
    }
  }

  fn succeed(&self, in_flight: InFlight, via: SuccessPath) -> SubmitOutcome {
    in_flight.succeed();
    match &self.config.success {
      SuccessMode::Panel => self.presenter.reveal_success(),
      SuccessMode::Redirect { path } => self.presenter.navigate_to_success_page(path),
    }
    SubmitOutcome::Succeeded { via }
  }

  fn feedback(&self) -> MutexGuard<'_, FeedbackController> {
    self.feedback.lock().unwrap_or_else(PoisonError::into_inner)
  }
}
