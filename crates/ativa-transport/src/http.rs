use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};
use url::Url;

use crate::error::TransportError;
use crate::payload::SubmissionPayload;
use crate::reply::WebhookReply;
use crate::transport::Transport;

/// Posts submissions to a webhook over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpTransport {
  client: reqwest::Client,
  endpoint: Url,
}

impl HttpTransport {
  pub fn new(endpoint: &str) -> Result<Self, TransportError> {
    Self::with_client(reqwest::Client::new(), endpoint)
  }

  pub fn with_client(client: reqwest::Client, endpoint: &str) -> Result<Self, TransportError> {
    let endpoint = Url::parse(endpoint).map_err(|e| TransportError::InvalidEndpoint {
      endpoint: endpoint.to_string(),
      message: e.to_string(),
    })?;
    Ok(Self { client, endpoint })
  }
}

#[async_trait]
impl Transport for HttpTransport {
  #[instrument(name = "webhook_post", skip_all, fields(endpoint = %self.endpoint))]
  async fn submit(
    &self,
    payload: &SubmissionPayload,
    cancel: CancellationToken,
  ) -> Result<WebhookReply, TransportError> {
    // `json` also sets `Content-Type: application/json`.
    let request = self.client.post(self.endpoint.clone()).json(payload).send();

    let response = tokio::select! {
      biased;
      _ = cancel.cancelled() => return Err(TransportError::Cancelled),
      response = request => response.map_err(TransportError::from_send)?,
    };

    let status = response.status();
    debug!(status = status.as_u16(), "webhook responded");
    if !status.is_success() {
      return Err(TransportError::Status {
        status: status.as_u16(),
      });
    }

    let body = tokio::select! {
      biased;
      _ = cancel.cancelled() => return Err(TransportError::Cancelled),
      body = response.text() => body?,
    };

    WebhookReply::parse(&body).map_err(|e| TransportError::MalformedReply {
      message: e.to_string(),
    })
  }
}
