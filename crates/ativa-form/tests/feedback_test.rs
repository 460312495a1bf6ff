//! Drives the validator through the feedback controller the way the form
//! does on blur and on submit.

use std::sync::Arc;

use ativa_form::{FeedbackController, FieldMark, Form, MemoryPresenter, mask_phone};
use ativa_validator::{Field, RuleSet};

fn validate_all(form: &Form, feedback: &mut FeedbackController) -> Vec<Field> {
  let mut failed = Vec::new();
  for spec in form.specs() {
    let result = RuleSet::LENIENT.validate(spec.field, &spec.value);
    if !result.is_ok() {
      failed.push(spec.field);
    }
    feedback.apply(spec.field, &result);
  }
  failed
}

#[test]
fn test_empty_form_marks_every_required_field() {
  let presenter = Arc::new(MemoryPresenter::new());
  let mut feedback = FeedbackController::new(presenter.clone());

  let failed = validate_all(&Form::new(), &mut feedback);

  let required = vec![
    Field::ConfirmRegistration,
    Field::Nome,
    Field::Email,
    Field::Whatsapp,
  ];
  assert_eq!(failed, required);
  assert_eq!(presenter.error_fields(), required);
  assert_eq!(presenter.mark(Field::Telegram), Some(FieldMark::Valid));
}

#[test]
fn test_missing_slot_still_validates_remaining_fields() {
  let presenter = Arc::new(MemoryPresenter::new().without_slot(Field::ConfirmRegistration));
  let mut feedback = FeedbackController::new(presenter.clone());

  let failed = validate_all(&Form::new(), &mut feedback);

  assert!(failed.contains(&Field::ConfirmRegistration));
  assert_eq!(presenter.error_fields(), vec![Field::Nome, Field::Email, Field::Whatsapp]);
}

#[test]
fn test_masked_display_does_not_change_raw_value() {
  let mut form = Form::new();
  form.set_text(Field::Whatsapp, "5511999999999").unwrap();

  let display = mask_phone(form.value(Field::Whatsapp).as_text().unwrap());
  assert_eq!(display, "(55) 11999-9999");

  assert_eq!(form.value(Field::Whatsapp).as_text(), Some("5511999999999"));
  assert!(
    RuleSet::LENIENT
      .validate(Field::Whatsapp, form.value(Field::Whatsapp))
      .is_ok()
  );
}

#[test]
fn test_missing_input_still_validates_remaining_fields() {
  let presenter = Arc::new(MemoryPresenter::new().without_input(Field::Nome));
  let mut feedback = FeedbackController::new(presenter.clone());

  let failed = validate_all(&Form::new(), &mut feedback);

  assert!(failed.contains(&Field::Nome));
  assert!(feedback.is_marked_invalid(Field::Nome));
  assert_eq!(presenter.mark(Field::Nome), None);
  assert_eq!(
    presenter.error_fields(),
    vec![Field::ConfirmRegistration, Field::Email, Field::Whatsapp]
  );
}
