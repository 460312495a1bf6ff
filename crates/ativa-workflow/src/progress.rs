use std::sync::Arc;
use std::time::Duration;

use ativa_form::Presenter;
use tokio_util::sync::{CancellationToken, DropGuard};

/// Messages shown on the busy indicator while the webhook is running.
pub const PROGRESS_STEPS: [&str; 4] = [
  "Validando seus dados...",
  "Verificando cadastro...",
  "Processando ativação...",
  "Quase pronto...",
];

/// Cycles through [`PROGRESS_STEPS`] until dropped.
pub(crate) struct ProgressTicker {
  _stop: DropGuard,
}

impl ProgressTicker {
  pub(crate) fn start(presenter: Arc<dyn Presenter>, interval: Duration) -> Self {
    let cancel = CancellationToken::new();
    let stop = cancel.clone();

    tokio::spawn(async move {
      for step in PROGRESS_STEPS {
        if stop.is_cancelled() {
          return;
        }
        presenter.show_progress(step);
        tokio::select! {
          _ = stop.cancelled() => return,
          _ = tokio::time::sleep(interval) => {}
        }
      }
    });

    Self {
      _stop: cancel.drop_guard(),
    }
  }
}
