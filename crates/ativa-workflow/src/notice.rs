use std::sync::Arc;
use std::time::Duration;

use ativa_form::{Notice, NoticeKind, Presenter};
use ativa_transport::TransportError;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::events::{SubmissionEvent, SubmissionNotifier};

/// Notice shown for a transport failure.
pub(crate) fn notice_kind(error: &TransportError) -> NoticeKind {
  match error {
    TransportError::Offline { .. } => NoticeKind::Offline,
    TransportError::Connect { .. } => NoticeKind::Unavailable,
    _ => NoticeKind::Generic,
  }
}

/// Show a notice and remove it once `ttl` has passed.
pub(crate) fn show_transient(
  presenter: &Arc<dyn Presenter>,
  notifier: &Arc<dyn SubmissionNotifier>,
  submission_id: &str,
  notice: Notice,
  ttl: Duration,
) -> JoinHandle<()> {
  let id = presenter.show_notice(&notice);
  notifier.notify(SubmissionEvent::NoticeShown {
    submission_id: submission_id.to_string(),
    title: notice.title,
  });

  let presenter = presenter.clone();
  let notifier = notifier.clone();
  let submission_id = submission_id.to_string();

  tokio::spawn(async move {
    tokio::time::sleep(ttl).await;
    presenter.dismiss_notice(id);
    debug!(submission_id = %submission_id, "notice dismissed");
    notifier.notify(SubmissionEvent::NoticeDismissed { submission_id });
  })
}
