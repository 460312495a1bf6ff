//! Ativa Validator
//!
//! Pure per-field validation for the activation form. Each field maps to a
//! stateless rule `(value) -> Option<message>`; the rules are collected in
//! constant tables ([`RuleSet::LENIENT`] and [`RuleSet::STRICT`]) selected by
//! the form's [`RuleVariant`](ativa_config::RuleVariant).
//!
//! Messages are user-facing Portuguese strings.

mod field;
mod result;
mod rules;

pub use field::{Field, FieldValue, ParseFieldError, ValueKind};
pub use result::ValidationResult;
pub use rules::{Rule, RuleSet, whatsapp_area_code};
