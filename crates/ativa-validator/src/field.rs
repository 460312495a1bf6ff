use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

/// A field of the activation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
  ConfirmRegistration,
  Nome,
  Email,
  Telegram,
  Discord,
  Instagram,
  Whatsapp,
}

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
  Text,
  Flag,
}

impl Field {
  /// Every field, in form order.
  pub const ALL: [Field; 7] = [
    Field::ConfirmRegistration,
    Field::Nome,
    Field::Email,
    Field::Telegram,
    Field::Discord,
    Field::Instagram,
    Field::Whatsapp,
  ];

  /// Name used as the element id and as the payload key.
  pub fn wire_name(self) -> &'static str {
    match self {
      Field::ConfirmRegistration => "confirm-registration",
      Field::Nome => "nome",
      Field::Email => "email",
      Field::Telegram => "telegram",
      Field::Discord => "discord",
      Field::Instagram => "instagram",
      Field::Whatsapp => "whatsapp",
    }
  }

  pub fn kind(self) -> ValueKind {
    match self {
      Field::ConfirmRegistration => ValueKind::Flag,
      _ => ValueKind::Text,
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.wire_name())
  }
}

impl Serialize for Field {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.wire_name())
  }
}

/// Returned when a string is not the wire name of any field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0}")]
pub struct ParseFieldError(pub String);

impl FromStr for Field {
  type Err = ParseFieldError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Field::ALL
      .into_iter()
      .find(|field| field.wire_name() == s)
      .ok_or_else(|| ParseFieldError(s.to_string()))
  }
}

/// The current value of a field: text for inputs, a flag for the checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
  Flag(bool),
  Text(String),
}

impl FieldValue {
  pub fn kind(&self) -> ValueKind {
    match self {
      FieldValue::Flag(_) => ValueKind::Flag,
      FieldValue::Text(_) => ValueKind::Text,
    }
  }

  /// Empty value for a field of the given kind.
  pub fn empty(kind: ValueKind) -> Self {
    match kind {
      ValueKind::Flag => FieldValue::Flag(false),
      ValueKind::Text => FieldValue::Text(String::new()),
    }
  }

  pub fn as_text(&self) -> Option<&str> {
    match self {
      FieldValue::Text(text) => Some(text),
      FieldValue::Flag(_) => None,
    }
  }

  pub fn as_flag(&self) -> Option<bool> {
    match self {
      FieldValue::Flag(flag) => Some(*flag),
      FieldValue::Text(_) => None,
    }
  }
}

impl From<&str> for FieldValue {
  fn from(value: &str) -> Self {
    FieldValue::Text(value.to_string())
  }
}

impl From<String> for FieldValue {
  fn from(value: String) -> Self {
    FieldValue::Text(value)
  }
}

impl From<bool> for FieldValue {
  fn from(value: bool) -> Self {
    FieldValue::Flag(value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_wire_names_parse_back() {
    for field in Field::ALL {
      assert_eq!(field.wire_name().parse::<Field>().unwrap(), field);
    }
  }

  #[test]
  fn test_unknown_field() {
    let err = "telefone".parse::<Field>().unwrap_err();
    assert_eq!(err, ParseFieldError("telefone".to_string()));
  }

  #[test]
  fn test_field_serializes_as_wire_name() {
    assert_eq!(
      serde_json::to_value(Field::ConfirmRegistration).unwrap(),
      serde_json::json!("confirm-registration")
    );
  }

  #[test]
  fn test_only_checkbox_is_flag() {
    let flags: Vec<Field> = Field::ALL
      .into_iter()
      .filter(|f| f.kind() == ValueKind::Flag)
      .collect();
    assert_eq!(flags, vec![Field::ConfirmRegistration]);
  }

  #[test]
  fn test_value_serializes_untagged() {
    assert_eq!(serde_json::to_value(FieldValue::Flag(true)).unwrap(), serde_json::json!(true));
    assert_eq!(serde_json::to_value(FieldValue::from("ana")).unwrap(), serde_json::json!("ana"));

    let parsed: FieldValue = serde_json::from_str("false").unwrap();
    assert_eq!(parsed, FieldValue::Flag(false));
  }
}
