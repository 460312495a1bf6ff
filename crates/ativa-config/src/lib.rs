//! Ativa Config
//!
//! Serializable configuration for the activation form core: where the form
//! is submitted, how long the workflow waits for the webhook, which rule
//! table the validator uses and how a successful submission is presented.
//!
//! Configuration can be loaded from a JSON file (via the CLI with
//! `--config=form.json`) or built in code. Every field has a default, so an
//! empty JSON object is a valid configuration.

mod error;
mod form;

pub use error::ConfigError;
pub use form::{
  DEFAULT_ENDPOINT, DEFAULT_SOURCE, FormConfig, RuleVariant, SuccessMode,
};
