//! Ativa Form
//!
//! The form side of the activation core:
//!
//! - [`Form`] holds one [`FieldSpec`] per field with its current value.
//! - [`Presenter`] is the rendering collaborator the core drives. It knows
//!   how to show errors, busy state, notices and the success view; the core
//!   never renders anything itself.
//! - [`FeedbackController`] applies validation results to a presenter and
//!   keeps going when a field's message slot is missing.
//! - [`mask_phone`] formats a phone number for display only.

mod feedback;
mod form;
mod mask;
mod memory;
mod presenter;

pub use feedback::FeedbackController;
pub use form::{FieldSpec, Form, FormError};
pub use mask::mask_phone;
pub use memory::{FieldMark, MemoryPresenter};
pub use presenter::{Notice, NoticeId, NoticeKind, Presenter, PresenterError};
