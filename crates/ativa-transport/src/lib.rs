//! Ativa Transport
//!
//! Everything between a validated form and the webhook:
//!
//! - [`SubmissionPayload`] is the JSON body: field values keyed by wire
//!   name, plus `timestamp` and `source`.
//! - [`WebhookReply`] is the optional reply body and its [`ReplyVerdict`].
//! - [`Transport`] is the seam the workflow calls; [`HttpTransport`] is the
//!   reqwest implementation.

mod error;
mod http;
mod payload;
mod reply;
mod transport;

pub use error::TransportError;
pub use http::HttpTransport;
pub use payload::SubmissionPayload;
pub use reply::{ReplyVerdict, WebhookReply};
pub use transport::Transport;
