//! In-memory presenter.
//!
//! Keeps the presentation state the core produces without rendering it.
//! Used headless (no display attached) and as the observable presenter in
//! tests.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use ativa_validator::Field;

use crate::presenter::{Notice, NoticeId, Presenter, PresenterError};

/// Decoration currently applied to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMark {
  Error(String),
  Valid,
}

#[derive(Debug, Default)]
struct State {
  marks: BTreeMap<Field, FieldMark>,
  focused: Option<Field>,
  busy: bool,
  busy_changes: Vec<bool>,
  progress: Vec<String>,
  notices: BTreeMap<u64, Notice>,
  shown_notices: usize,
  next_notice: u64,
  success_revealed: bool,
  navigated_to: Option<String>,
}

/// A [`Presenter`] that records state instead of rendering it.
#[derive(Debug, Default)]
pub struct MemoryPresenter {
  state: Mutex<State>,
  missing_inputs: BTreeSet<Field>,
  missing_slots: BTreeSet<Field>,
}

impl MemoryPresenter {
  pub fn new() -> Self {
    Self::default()
  }

  /// Simulate a field whose input element does not exist.
  pub fn without_input(mut self, field: Field) -> Self {
    self.missing_inputs.insert(field);
    self
  }

  /// Simulate a field whose error message element does not exist.
  pub fn without_slot(mut self, field: Field) -> Self {
    self.missing_slots.insert(field);
    self
  }

  pub fn mark(&self, field: Field) -> Option<FieldMark> {
    self.state().marks.get(&field).cloned()
  }

  /// Fields currently decorated as invalid, in form order.
  pub fn error_fields(&self) -> Vec<Field> {
    self
      .state()
      .marks
      .iter()
      .filter(|(_, mark)| matches!(mark, FieldMark::Error(_)))
      .map(|(field, _)| *field)
      .collect()
  }

  pub fn focused(&self) -> Option<Field> {
    self.state().focused
  }

  pub fn is_busy(&self) -> bool {
    self.state().busy
  }

  /// Every `set_busy` call, in order.
  pub fn busy_changes(&self) -> Vec<bool> {
    self.state().busy_changes.clone()
  }

  pub fn progress(&self) -> Vec<String> {
    self.state().progress.clone()
  }

  /// Notices still on screen.
  pub fn active_notices(&self) -> Vec<Notice> {
    self.state().notices.values().cloned().collect()
  }

  /// Number of notices ever shown.
  pub fn shown_notices(&self) -> usize {
    self.state().shown_notices
  }

  pub fn success_revealed(&self) -> bool {
    self.state().success_revealed
  }

  pub fn navigated_to(&self) -> Option<String> {
    self.state().navigated_to.clone()
  }

  fn state(&self) -> MutexGuard<'_, State> {
    self.state.lock().unwrap_or_else(PoisonError::into_inner)
  }

  fn decorable(&self, field: Field) -> Result<(), PresenterError> {
    if self.missing_inputs.contains(&field) {
      return Err(PresenterError::MissingInput { field });
    }
    if self.missing_slots.contains(&field) {
      return Err(PresenterError::MissingSlot { field });
    }
    Ok(())
  }
}

impl Presenter for MemoryPresenter {
  fn mark_error(&self, field: Field, message: &str) -> Result<(), PresenterError> {
    self.decorable(field)?;
    self
      .state()
      .marks
      .insert(field, FieldMark::Error(message.to_string()));
    Ok(())
  }

  fn mark_valid(&self, field: Field) -> Result<(), PresenterError> {
    self.decorable(field)?;
    self.state().marks.insert(field, FieldMark::Valid);
    Ok(())
  }

  fn focus(&self, field: Field) {
    self.state().focused = Some(field);
  }

  fn set_busy(&self, busy: bool) {
    let mut state = self.state();
    state.busy = busy;
    state.busy_changes.push(busy);
  }

  fn show_progress(&self, message: &str) {
    self.state().progress.push(message.to_string());
  }

  fn reveal_success(&self) {
    self.state().success_revealed = true;
  }

  fn navigate_to_success_page(&self, path: &str) {
    self.state().navigated_to = Some(path.to_string());
  }

  fn show_notice(&self, notice: &Notice) -> NoticeId {
    let mut state = self.state();
    let id = state.next_notice;
    state.next_notice += 1;
    state.shown_notices += 1;
    state.notices.insert(id, notice.clone());
    NoticeId(id)
  }

  fn dismiss_notice(&self, id: NoticeId) {
    self.state().notices.remove(&id.0);
  }
}
