use ativa_validator::{Field, FieldValue, ValueKind};
use thiserror::Error;

/// Errors that can occur while filling a form.
#[derive(Debug, Error)]
pub enum FormError {
  #[error("unknown field: {0}")]
  UnknownField(String),

  #[error("field '{field}' expects a {expected:?} value")]
  KindMismatch { field: Field, expected: ValueKind },

  #[error("form values must be a JSON object")]
  NotAnObject,
}

/// The value record for one form field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
  pub field: Field,
  pub value: FieldValue,
}

/// Current values of every form field, in form order.
///
/// There is exactly one [`FieldSpec`] per [`Field`], and each value has the
/// kind its field expects.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
  specs: Vec<FieldSpec>,
}

impl Default for Form {
  fn default() -> Self {
    Self::new()
  }
}

impl Form {
  /// An empty form: text fields blank, checkbox unchecked.
  pub fn new() -> Self {
    let specs = Field::ALL
      .into_iter()
      .map(|field| FieldSpec {
        field,
        value: FieldValue::empty(field.kind()),
      })
      .collect();
    Self { specs }
  }

  /// Build a form from a JSON object keyed by field wire names.
  ///
  /// Missing fields keep their empty value.
  pub fn from_json(values: &serde_json::Value) -> Result<Self, FormError> {
    let object = values.as_object().ok_or(FormError::NotAnObject)?;
    let mut form = Self::new();

    for (key, value) in object {
      let field: Field = key
        .parse()
        .map_err(|_| FormError::UnknownField(key.clone()))?;

      let value = match value {
        serde_json::Value::Bool(flag) => FieldValue::Flag(*flag),
        serde_json::Value::String(text) => FieldValue::Text(text.clone()),
        _ => {
          return Err(FormError::KindMismatch {
            field,
            expected: field.kind(),
          });
        }
      };
      form.set(field, value)?;
    }

    Ok(form)
  }

  pub fn set(&mut self, field: Field, value: FieldValue) -> Result<(), FormError> {
    if value.kind() != field.kind() {
      return Err(FormError::KindMismatch {
        field,
        expected: field.kind(),
      });
    }
    if let Some(spec) = self.specs.iter_mut().find(|s| s.field == field) {
      spec.value = value;
    }
    Ok(())
  }

  pub fn set_text(&mut self, field: Field, text: impl Into<String>) -> Result<(), FormError> {
    self.set(field, FieldValue::Text(text.into()))
  }

  pub fn set_checked(&mut self, field: Field, checked: bool) -> Result<(), FormError> {
    self.set(field, FieldValue::Flag(checked))
  }

  pub fn value(&self, field: Field) -> &FieldValue {
    // Every field has a spec from construction on.
    &self.specs[self.position(field)].value
  }

  pub fn specs(&self) -> &[FieldSpec] {
    &self.specs
  }

  /// Field that receives focus when Enter is pressed on `field`.
  ///
  /// `None` means focus moves to the submit control.
  pub fn next_field(&self, field: Field) -> Option<Field> {
    self.specs.get(self.position(field) + 1).map(|s| s.field)
  }

  /// Values keyed by wire name, as sent to the webhook.
  pub fn to_json_map(&self) -> serde_json::Map<String, serde_json::Value> {
    self
      .specs
      .iter()
      .map(|spec| {
        let value = match &spec.value {
          FieldValue::Flag(flag) => serde_json::Value::Bool(*flag),
          FieldValue::Text(text) => serde_json::Value::String(text.clone()),
        };
        (spec.field.wire_name().to_string(), value)
      })
      .collect()
  }

  fn position(&self, field: Field) -> usize {
    Field::ALL
      .iter()
      .position(|f| *f == field)
      .unwrap_or_default()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_new_form_has_one_spec_per_field() {
    let form = Form::new();
    assert_eq!(form.specs().len(), Field::ALL.len());
    assert_eq!(form.value(Field::ConfirmRegistration), &FieldValue::Flag(false));
    assert_eq!(form.value(Field::Nome), &FieldValue::Text(String::new()));
  }

  #[test]
  fn test_set_rejects_kind_mismatch() {
    let mut form = Form::new();
    assert!(matches!(
      form.set_text(Field::ConfirmRegistration, "yes"),
      Err(FormError::KindMismatch { .. })
    ));
    assert!(matches!(
      form.set_checked(Field::Email, true),
      Err(FormError::KindMismatch { .. })
    ));

    form.set_text(Field::Email, "ana@exemplo.com").unwrap();
    assert_eq!(form.value(Field::Email).as_text(), Some("ana@exemplo.com"));
  }

  #[test]
  fn test_from_json() {
    let form = Form::from_json(&json!({
      "confirm-registration": true,
      "nome": "Ana Silva",
      "whatsapp": "(11) 99999-9999"
    }))
    .unwrap();

    assert_eq!(form.value(Field::ConfirmRegistration).as_flag(), Some(true));
    assert_eq!(form.value(Field::Nome).as_text(), Some("Ana Silva"));
    assert_eq!(form.value(Field::Telegram).as_text(), Some(""));
  }

  #[test]
  fn test_from_json_unknown_field() {
    let err = Form::from_json(&json!({"telefone": "123"})).unwrap_err();
    assert!(matches!(err, FormError::UnknownField(name) if name == "telefone"));
  }

  #[test]
  fn test_from_json_rejects_numbers() {
    let err = Form::from_json(&json!({"whatsapp": 11999999999u64})).unwrap_err();
    assert!(matches!(err, FormError::KindMismatch { field: Field::Whatsapp, .. }));
  }

  #[test]
  fn test_from_json_requires_object() {
    assert!(matches!(Form::from_json(&json!([])), Err(FormError::NotAnObject)));
  }

  #[test]
  fn test_enter_navigation_order() {
    let form = Form::new();
    assert_eq!(form.next_field(Field::ConfirmRegistration), Some(Field::Nome));
    assert_eq!(form.next_field(Field::Instagram), Some(Field::Whatsapp));
    assert_eq!(form.next_field(Field::Whatsapp), None);
  }

  #[test]
  fn test_json_map_uses_wire_names() {
    let mut form = Form::new();
    form.set_checked(Field::ConfirmRegistration, true).unwrap();
    let map = form.to_json_map();
    assert_eq!(map["confirm-registration"], json!(true));
    assert_eq!(map["instagram"], json!(""));
    assert_eq!(map.len(), 7);
  }
}
