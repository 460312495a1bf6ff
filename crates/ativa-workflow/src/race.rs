//! Webhook request raced against the timeout timer.
//!
//! Both sides are explicitly cancellable: the request runs as its own task
//! observing a [`CancellationToken`], and the timer observes another. The
//! first to settle decides the outcome and the other is cancelled.

use std::sync::Arc;
use std::time::Duration;

use ativa_transport::{SubmissionPayload, Transport, TransportError, WebhookReply};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Which side of the race settled first.
#[derive(Debug)]
pub(crate) enum RaceOutcome {
  /// The request finished (successfully or not) before the timer.
  Settled(Result<WebhookReply, TransportError>),
  /// The timer fired first; the request was cancelled.
  TimedOut,
  /// The request task panicked or was aborted.
  Crashed { message: String },
}

/// Sleep for `duration` unless cancelled. Returns `true` if the timer fired.
async fn expire(duration: Duration, cancel: CancellationToken) -> bool {
  tokio::select! {
    _ = cancel.cancelled() => false,
    _ = tokio::time::sleep(duration) => true,
  }
}

pub(crate) async fn race_request(
  transport: Arc<dyn Transport>,
  payload: SubmissionPayload,
  timeout: Duration,
) -> RaceOutcome {
  let request_cancel = CancellationToken::new();
  let timer_cancel = CancellationToken::new();

  // Abandoning the race (the caller's future is dropped) cancels the request.
  let _abandon = request_cancel.clone().drop_guard();

  let mut request = tokio::spawn({
    let cancel = request_cancel.clone();
    async move { transport.submit(&payload, cancel).await }
  });

  tokio::select! {
    joined = &mut request => {
      timer_cancel.cancel();
      match joined {
        Ok(result) => RaceOutcome::Settled(result),
        Err(e) => RaceOutcome::Crashed { message: e.to_string() },
      }
    }
    true = expire(timeout, timer_cancel.clone()) => {
      debug!(timeout_ms = timeout.as_millis() as u64, "timer won the race, cancelling request");
      request_cancel.cancel();
      RaceOutcome::TimedOut
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::atomic::{AtomicBool, Ordering};

  use async_trait::async_trait;

  struct SlowTransport {
    delay: Duration,
    saw_cancel: Arc<AtomicBool>,
  }

  #[async_trait]
  impl Transport for SlowTransport {
    async fn submit(
      &self,
      _payload: &SubmissionPayload,
      cancel: CancellationToken,
    ) -> Result<WebhookReply, TransportError> {
      tokio::select! {
        _ = cancel.cancelled() => {
          self.saw_cancel.store(true, Ordering::SeqCst);
          Err(TransportError::Cancelled)
        }
        _ = tokio::time::sleep(self.delay) => Ok(WebhookReply {
          response: Some("success".to_string()),
        }),
      }
    }
  }

  fn payload() -> SubmissionPayload {
    SubmissionPayload::new(serde_json::Map::new(), "test")
  }

  #[tokio::test(start_paused = true)]
  async fn test_request_wins() {
    let saw_cancel = Arc::new(AtomicBool::new(false));
    let transport = Arc::new(SlowTransport {
      delay: Duration::from_secs(1),
      saw_cancel: saw_cancel.clone(),
    });

    let outcome = race_request(transport, payload(), Duration::from_secs(10)).await;

    assert!(matches!(outcome, RaceOutcome::Settled(Ok(_))));
    assert!(!saw_cancel.load(Ordering::SeqCst));
  }

  #[tokio::test(start_paused = true)]
  async fn test_timer_wins_and_cancels_request() {
    let saw_cancel = Arc::new(AtomicBool::new(false));
    let transport = Arc::new(SlowTransport {
      delay: Duration::from_secs(60),
      saw_cancel: saw_cancel.clone(),
    });

    let started = tokio::time::Instant::now();
    let outcome = race_request(transport, payload(), Duration::from_secs(10)).await;

    assert!(matches!(outcome, RaceOutcome::TimedOut));
    assert!(started.elapsed() >= Duration::from_secs(10));

    for _ in 0..10 {
      if saw_cancel.load(Ordering::SeqCst) {
        break;
      }
      tokio::task::yield_now().await;
    }
    assert!(saw_cancel.load(Ordering::SeqCst));
  }
}
