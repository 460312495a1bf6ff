use std::sync::LazyLock;

use ativa_config::RuleVariant;
use regex::Regex;

use crate::field::{Field, FieldValue};
use crate::result::ValidationResult;

static NAME_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[a-zA-ZÀ-ÿ\s]+$").expect("name pattern compiles"));

static EMAIL_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static DISCORD_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[^#\s]+#[0-9]{4}$").expect("discord pattern compiles"));

/// A validation rule for one field.
#[derive(Clone, Copy)]
pub enum Rule {
  Text(fn(&str) -> Option<&'static str>),
  Flag(fn(bool) -> Option<&'static str>),
}

/// A constant table mapping every field to its rule.
pub struct RuleSet {
  name: &'static str,
  rules: [(Field, Rule); 7],
}

impl RuleSet {
  /// Rules of the live activation form: social handles are optional.
  pub const LENIENT: RuleSet = RuleSet {
    name: "lenient",
    rules: [
      (Field::ConfirmRegistration, Rule::Flag(confirm_registration)),
      (Field::Nome, Rule::Text(nome)),
      (Field::Email, Rule::Text(email)),
      (Field::Telegram, Rule::Text(telegram_optional)),
      (Field::Discord, Rule::Text(accept)),
      (Field::Instagram, Rule::Text(instagram_optional)),
      (Field::Whatsapp, Rule::Text(whatsapp)),
    ],
  };

  /// Rules requiring every social handle in its canonical format.
  pub const STRICT: RuleSet = RuleSet {
    name: "strict",
    rules: [
      (Field::ConfirmRegistration, Rule::Flag(confirm_registration)),
      (Field::Nome, Rule::Text(nome)),
      (Field::Email, Rule::Text(email)),
      (Field::Telegram, Rule::Text(telegram_required)),
      (Field::Discord, Rule::Text(discord_required)),
      (Field::Instagram, Rule::Text(instagram_required)),
      (Field::Whatsapp, Rule::Text(whatsapp)),
    ],
  };

  pub fn for_variant(variant: RuleVariant) -> &'static RuleSet {
    match variant {
      RuleVariant::Lenient => &Self::LENIENT,
      RuleVariant::Strict => &Self::STRICT,
    }
  }

  pub fn name(&self) -> &'static str {
    self.name
  }

  pub fn rule(&self, field: Field) -> Option<Rule> {
    self
      .rules
      .iter()
      .find(|(f, _)| *f == field)
      .map(|(_, rule)| *rule)
  }

  /// Run the field's rule and return its error message, if any.
  ///
  /// A value of the wrong kind for the field is reported as invalid.
  pub fn check(&self, field: Field, value: &FieldValue) -> Option<&'static str> {
    match (self.rule(field)?, value) {
      (Rule::Text(rule), FieldValue::Text(text)) => rule(text),
      (Rule::Flag(rule), FieldValue::Flag(flag)) => rule(*flag),
      _ => Some("Valor inválido para este campo"),
    }
  }

  pub fn validate(&self, field: Field, value: &FieldValue) -> ValidationResult {
    self.check(field, value).into()
  }
}

fn accept(_value: &str) -> Option<&'static str> {
  None
}

fn confirm_registration(checked: bool) -> Option<&'static str> {
  if !checked {
    return Some("Você precisa confirmar que possui cadastro na BetRiser");
  }
  None
}

fn nome(value: &str) -> Option<&'static str> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Some("Nome é obrigatório");
  }
  if trimmed.chars().count() < 3 {
    return Some("Nome deve ter pelo menos 3 caracteres");
  }
  if !NAME_PATTERN.is_match(value) {
    return Some("Nome deve conter apenas letras");
  }
  None
}

fn email(value: &str) -> Option<&'static str> {
  if value.trim().is_empty() {
    return Some("Email é obrigatório");
  }
  if !EMAIL_PATTERN.is_match(value) {
    return Some("Email inválido");
  }
  None
}

fn telegram_optional(value: &str) -> Option<&'static str> {
  if !value.trim().is_empty() && value.chars().count() < 5 {
    return Some("Telegram inválido");
  }
  None
}

fn telegram_required(value: &str) -> Option<&'static str> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Some("Telegram é obrigatório");
  }
  if !trimmed.starts_with('@') {
    return Some("Telegram deve começar com @");
  }
  if trimmed.chars().count() < 5 {
    return Some("Telegram inválido");
  }
  None
}

fn discord_required(value: &str) -> Option<&'static str> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Some("Discord é obrigatório");
  }
  if !DISCORD_PATTERN.is_match(trimmed) {
    return Some("Discord deve seguir o formato usuario#1234");
  }
  None
}

fn instagram_optional(value: &str) -> Option<&'static str> {
  if !value.trim().is_empty() && value.chars().count() < 3 {
    return Some("Instagram inválido");
  }
  None
}

fn instagram_required(value: &str) -> Option<&'static str> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Some("Instagram é obrigatório");
  }
  if !trimmed.starts_with('@') {
    return Some("Instagram deve começar com @");
  }
  if trimmed.chars().count() < 3 {
    return Some("Instagram inválido");
  }
  None
}

fn whatsapp(value: &str) -> Option<&'static str> {
  if value.trim().is_empty() {
    return Some("WhatsApp é obrigatório");
  }

  let digits = phone_digits(value);
  if !(10..=13).contains(&digits.len()) {
    return Some("WhatsApp deve conter DDD + número (ex: 11999999999)");
  }

  if !(11..=99).contains(&area_code(&digits)) {
    return Some("DDD inválido");
  }
  None
}

fn phone_digits(raw: &str) -> String {
  raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Area code of a 10-13 digit string; numbers longer than 11 digits carry a
/// 2-digit country code in front.
fn area_code(digits: &str) -> u8 {
  let ddd = if digits.len() <= 11 {
    &digits[0..2]
  } else {
    &digits[2..4]
  };
  ddd.parse().unwrap_or(0)
}

/// Extract the DDD from a raw phone value, ignoring every non-digit.
///
/// Returns `None` when the value does not have 10 to 13 digits.
pub fn whatsapp_area_code(raw: &str) -> Option<u8> {
  let digits = phone_digits(raw);
  if !(10..=13).contains(&digits.len()) {
    return None;
  }
  Some(area_code(&digits))
}
