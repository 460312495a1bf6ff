use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::TransportError;
use crate::payload::SubmissionPayload;
use crate::reply::WebhookReply;

/// Sends a submission to the webhook.
///
/// Implementations must stop waiting and return
/// [`TransportError::Cancelled`] once `cancel` fires.
#[async_trait]
pub trait Transport: Send + Sync {
  async fn submit(
    &self,
    payload: &SubmissionPayload,
    cancel: CancellationToken,
  ) -> Result<WebhookReply, TransportError>;
}
